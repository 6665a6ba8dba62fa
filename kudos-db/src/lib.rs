//! Database layer for Kudos
//!
//! Persists review collections as named slots in a SQLite database, one row
//! per slot key.

pub mod connection;
pub mod error;
pub mod models;
pub mod repos;
pub mod slot;

pub use connection::Database;
pub use error::{Error, Result};
pub use models::SlotRecord;
pub use repos::SlotRepository;
pub use slot::SqliteSlot;
