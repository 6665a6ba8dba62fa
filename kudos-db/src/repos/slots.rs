//! Repository for slot records

use chrono::{DateTime, Utc};
use rusqlite::params;

use crate::{models::SlotRecord, Database, Error, Result};

/// Repository for reading and replacing slot values
pub struct SlotRepository<'a> {
    db: &'a Database,
}

impl<'a> SlotRepository<'a> {
    /// Create a new repository
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Insert or replace a slot value
    pub fn upsert(&self, record: &SlotRecord) -> Result<()> {
        let conn = self.db.connection();
        conn.execute(
            "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![record.key, record.value, record.updated_at.to_rfc3339()],
        )?;
        Ok(())
    }

    /// Find a slot by key
    pub fn find(&self, key: &str) -> Result<Option<SlotRecord>> {
        let conn = self.db.connection();
        let mut stmt = conn.prepare("SELECT key, value, updated_at FROM slots WHERE key = ?1")?;

        let mut rows = stmt.query(params![key])?;
        let record = match rows.next()? {
            Some(row) => Some(Self::row_to_record(row)?),
            None => None,
        };

        Ok(record)
    }

    /// Convert a database row to a SlotRecord
    fn row_to_record(row: &rusqlite::Row) -> Result<SlotRecord> {
        let updated_at_str: String = row.get(2)?;

        let updated_at = DateTime::parse_from_rfc3339(&updated_at_str)
            .map_err(|e| Error::InvalidData(format!("Invalid updated_at timestamp: {}", e)))?
            .with_timezone(&Utc);

        Ok(SlotRecord {
            key: row.get(0)?,
            value: row.get(1)?,
            updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_and_find() {
        let db = Database::in_memory().unwrap();
        let repo = SlotRepository::new(&db);

        repo.upsert(&SlotRecord::new("reviews", "[]")).unwrap();

        let found = repo.find("reviews").unwrap().unwrap();
        assert_eq!(found.key, "reviews");
        assert_eq!(found.value, "[]");
    }

    #[test]
    fn test_upsert_replaces_value() {
        let db = Database::in_memory().unwrap();
        let repo = SlotRepository::new(&db);

        repo.upsert(&SlotRecord::new("reviews", "first")).unwrap();
        repo.upsert(&SlotRecord::new("reviews", "second")).unwrap();

        assert_eq!(repo.find("reviews").unwrap().unwrap().value, "second");

        let count: i64 = db
            .connection()
            .query_row("SELECT COUNT(*) FROM slots", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_find_missing() {
        let db = Database::in_memory().unwrap();
        let repo = SlotRepository::new(&db);
        assert!(repo.find("nothing").unwrap().is_none());
    }

    #[test]
    fn test_bad_timestamp_is_invalid_data() {
        let db = Database::in_memory().unwrap();
        db.connection()
            .execute(
                "INSERT INTO slots (key, value, updated_at) VALUES ('k', 'v', 'yesterday')",
                [],
            )
            .unwrap();

        let repo = SlotRepository::new(&db);
        assert!(matches!(repo.find("k"), Err(Error::InvalidData(_))));
    }
}
