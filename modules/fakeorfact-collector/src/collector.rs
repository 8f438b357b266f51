use std::fmt;
use std::sync::Arc;

use fakeorfact_sources::ClaimSource;
use fakeorfact_store::ClaimStore;
use tracing::{debug, info, warn};

use crate::fan_in::{fan_in, spawn_producer};

/// One source and the identifiers it is asked about on every pass.
#[derive(Clone)]
pub struct SourceGroup {
    pub source: Arc<dyn ClaimSource>,
    pub identifiers: Vec<String>,
}

impl SourceGroup {
    pub fn new(source: Arc<dyn ClaimSource>, identifiers: Vec<String>) -> Self {
        Self {
            source,
            identifiers,
        }
    }
}

/// Outcome of one collection pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionStats {
    pub received: u32,
    pub saved: u32,
    pub duplicates: u32,
    pub failed: u32,
}

impl fmt::Display for CollectionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "received={} saved={} duplicates={} failed={}",
            self.received, self.saved, self.duplicates, self.failed
        )
    }
}

/// Pulls claims from every configured source and persists them.
pub struct Collector {
    groups: Vec<SourceGroup>,
    store: Arc<dyn ClaimStore>,
}

impl Collector {
    pub fn new(groups: Vec<SourceGroup>, store: Arc<dyn ClaimStore>) -> Self {
        Self { groups, store }
    }

    /// Run one pass: one producer per (source, identifier), merged, then
    /// saved one by one. Save failures never abort the pass.
    pub async fn run_pass(&self) -> CollectionStats {
        let producers: Vec<_> = self
            .groups
            .iter()
            .flat_map(|group| {
                group
                    .identifiers
                    .iter()
                    .map(|id| spawn_producer(group.source.clone(), id.clone()))
            })
            .collect();

        info!(producers = producers.len(), "Starting collection pass");

        let mut merged = fan_in(producers);
        let mut stats = CollectionStats::default();

        while let Some(claim) = merged.recv().await {
            stats.received += 1;
            match self.store.save(&claim).await {
                Ok(stored) => {
                    stats.saved += 1;
                    debug!(id = %stored.id, url = claim.url(), "Saved claim");
                }
                Err(e) if e.is_duplicate() => {
                    stats.duplicates += 1;
                    debug!(url = claim.url(), "Claim already stored");
                }
                Err(e) => {
                    stats.failed += 1;
                    warn!(url = claim.url(), error = %e, "Failed to save claim");
                }
            }
        }

        info!(%stats, "Collection pass complete");
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_display() {
        let stats = CollectionStats {
            received: 5,
            saved: 3,
            duplicates: 1,
            failed: 1,
        };
        assert_eq!(
            stats.to_string(),
            "received=5 saved=3 duplicates=1 failed=1"
        );
    }
}
