//! CLI command implementations

pub mod contact;
pub mod hydrate;
pub mod list;
pub mod stats;
pub mod submit;

use std::sync::Arc;

use kudos_core::{Backend, FileSlot, ReviewStore, Slot, StoreConfig};
use kudos_db::{Database, SqliteSlot};

pub use contact::ContactArgs;
pub use hydrate::HydrateArgs;
pub use list::ListArgs;
pub use stats::StatsArgs;
pub use submit::SubmitArgs;

/// Store over whichever slot the configuration selects
pub type DynStore = ReviewStore<Box<dyn Slot>>;

/// Open the configured review store
pub fn open_store(config: &StoreConfig) -> anyhow::Result<DynStore> {
    let path = config.resolved_path()?;
    tracing::debug!(backend = %config.backend, path = %path.display(), "Opening review store");

    let slot: Box<dyn Slot> = match config.backend {
        Backend::File => Box::new(FileSlot::new(path)),
        Backend::Sqlite => {
            let db = Database::open_at(&path)
                .map_err(|e| anyhow::anyhow!("Failed to open database: {}", e))?;
            Box::new(SqliteSlot::new(Arc::new(db), config.key.clone()))
        }
    };

    Ok(ReviewStore::new(slot))
}
