use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fakeorfact_common::Claim;
use uuid::Uuid;

use crate::error::{Result, StoreError};

/// Maximum number of claims returned per class by [`ClaimStore::get`].
pub const PAGE_LIMIT: usize = 20;

pub const MAX_TITLE_CHARS: usize = 500;
pub const MAX_PUBLISHER_CHARS: usize = 50;
pub const MAX_URL_CHARS: usize = 500;

/// A persisted claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredClaim {
    pub id: Uuid,
    pub claim: Claim,
}

/// Append-only claim persistence keyed by URL.
///
/// Implemented by PgClaimStore (postgres) and MemoryClaimStore (tests).
#[async_trait]
pub trait ClaimStore: Send + Sync {
    /// Persist a claim under a fresh id. Fails with
    /// [`StoreError::DuplicateUrl`] if the URL is already stored; the
    /// existing record is never overwritten.
    async fn save(&self, claim: &Claim) -> Result<StoredClaim>;

    /// Claims of one class reviewed strictly before `reviewed_before`,
    /// newest first, at most [`PAGE_LIMIT`].
    async fn get(&self, is_fact: bool, reviewed_before: DateTime<Utc>) -> Result<Vec<Claim>>;
}

/// Reject claims that don't fit the column bounds.
pub(crate) fn check_lengths(claim: &Claim) -> Result<()> {
    let bounds = [
        ("title", claim.title(), MAX_TITLE_CHARS),
        ("publisher_name", claim.publisher_name(), MAX_PUBLISHER_CHARS),
        ("url", claim.url(), MAX_URL_CHARS),
    ];
    for (field, value, max) in bounds {
        if value.chars().count() > max {
            return Err(StoreError::FieldTooLong { field, max });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim(title: &str, publisher: &str, url: &str) -> Claim {
        Claim::new(title, publisher, url, true, Some(Utc::now())).unwrap()
    }

    #[test]
    fn accepts_claims_at_the_bounds() {
        let c = claim(&"t".repeat(500), &"p".repeat(50), &"u".repeat(500));
        assert!(check_lengths(&c).is_ok());
    }

    #[test]
    fn rejects_long_publisher() {
        let c = claim("t", &"p".repeat(51), "u");
        assert!(matches!(
            check_lengths(&c),
            Err(StoreError::FieldTooLong {
                field: "publisher_name",
                max: 50
            })
        ));
    }

    #[test]
    fn rejects_long_url() {
        let c = claim("t", "p", &"u".repeat(501));
        assert!(matches!(
            check_lengths(&c),
            Err(StoreError::FieldTooLong { field: "url", .. })
        ));
    }

    #[test]
    fn counts_characters_not_bytes() {
        let c = claim(&"é".repeat(500), "p", "u");
        assert!(check_lengths(&c).is_ok());
    }
}
