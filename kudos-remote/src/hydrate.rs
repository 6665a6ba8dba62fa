//! Hydrating a local store from a remote seed

use std::fmt;

use kudos_core::{ReviewStore, Slot};
use tracing::{debug, info, warn};

use crate::SeedClient;

/// Why a hydration left the store untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The seed was fetched but held no reviews
    EmptySeed,
    /// The seed could not be fetched or parsed
    Fetch(String),
    /// The local collection could not be read or the merge persisted
    Store(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::EmptySeed => write!(f, "seed is empty"),
            SkipReason::Fetch(e) => write!(f, "fetch failed: {}", e),
            SkipReason::Store(e) => write!(f, "store update failed: {}", e),
        }
    }
}

/// Result of one hydration attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HydrateOutcome {
    /// Seed merged into the store
    Merged {
        /// Reviews new to the store
        added: usize,
        /// Size of the collection afterwards
        total: usize,
    },
    /// Store left as it was
    Skipped(SkipReason),
}

impl HydrateOutcome {
    pub fn is_merged(&self) -> bool {
        matches!(self, HydrateOutcome::Merged { .. })
    }
}

/// Fetch the seed once and merge it into `store`
///
/// Never fails: any problem is logged and reported as
/// [`HydrateOutcome::Skipped`], with the persisted collection unchanged.
pub async fn hydrate<S: Slot>(store: &ReviewStore<S>, client: &SeedClient) -> HydrateOutcome {
    let remote = match client.fetch().await {
        Ok(remote) => remote,
        Err(e) => {
            warn!(source = %client.source(), error = %e, "Skipping remote reviews");
            return HydrateOutcome::Skipped(SkipReason::Fetch(e.to_string()));
        }
    };

    if remote.is_empty() {
        debug!(source = %client.source(), "Remote seed is empty");
        return HydrateOutcome::Skipped(SkipReason::EmptySeed);
    }

    match store.reconcile(remote) {
        Ok(reconciled) => {
            let total = reconciled.items.len();
            info!(added = reconciled.added, total, "Hydrated reviews from remote seed");
            HydrateOutcome::Merged {
                added: reconciled.added,
                total,
            }
        }
        Err(e) => {
            warn!(error = %e, "Failed to merge remote reviews into store");
            HydrateOutcome::Skipped(SkipReason::Store(e.to_string()))
        }
    }
}
