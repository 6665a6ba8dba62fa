//! Remote review seeds for Kudos
//!
//! Fetches a read-only review list from a URL or a local file and merges it
//! into a review store. Fetch failures never reach the caller as errors;
//! hydration reports them as a skipped outcome instead.

pub mod client;
pub mod error;
pub mod hydrate;
pub mod source;

pub use client::{parse_seed, SeedClient};
pub use error::{Error, Result};
pub use hydrate::{hydrate, HydrateOutcome, SkipReason};
pub use source::SeedSource;
