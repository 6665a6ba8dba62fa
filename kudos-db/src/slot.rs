//! SQLite implementation of the review slot

use std::sync::Arc;

use kudos_core::Slot;
use tracing::debug;

use crate::{models::SlotRecord, repos::SlotRepository, Database};

/// A named slot stored as one row of the `slots` table
///
/// Several slots may share one database handle.
#[derive(Clone)]
pub struct SqliteSlot {
    db: Arc<Database>,
    key: String,
}

impl SqliteSlot {
    pub fn new(db: Arc<Database>, key: impl Into<String>) -> Self {
        Self {
            db,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Slot for SqliteSlot {
    fn read(&self) -> kudos_core::Result<Option<String>> {
        let record = SlotRepository::new(&self.db).find(&self.key)?;
        Ok(record.map(|r| r.value))
    }

    fn write(&self, raw: &str) -> kudos_core::Result<()> {
        SlotRepository::new(&self.db).upsert(&SlotRecord::new(self.key.as_str(), raw))?;
        debug!(key = %self.key, bytes = raw.len(), "Wrote sqlite slot");
        Ok(())
    }
}
