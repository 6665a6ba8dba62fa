//! Kudos Core - review storage and reconciliation
//!
//! This crate keeps a durable, newest-first collection of user reviews in a
//! single persisted slot and reconciles it with a remote seed list without
//! duplicating entries.

pub mod config;
pub mod error;
pub mod merge;
pub mod render;
pub mod review;
pub mod slot;
pub mod store;
pub mod validation;

pub use config::{Backend, Config, RemoteConfig, StoreConfig, DEFAULT_SLOT_KEY};
pub use error::{Error, Result};
pub use merge::merge_reviews;
pub use render::Summary;
pub use review::{average, Review, ReviewKey};
pub use slot::{FileSlot, MemorySlot, Slot};
pub use store::{now_millis, Reconciled, ReviewStore};
pub use validation::{ContactForm, ReviewForm, ValidationErrors};
