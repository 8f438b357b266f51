//! In-memory claim store for tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fakeorfact_common::{sort_newest_first, Claim};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::store::{check_lengths, ClaimStore, StoredClaim, PAGE_LIMIT};

/// Same contract as the Postgres store. The URL check and the insert happen
/// under one lock.
#[derive(Default)]
pub struct MemoryClaimStore {
    records: Mutex<Vec<StoredClaim>>,
}

impl MemoryClaimStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with claims, ignoring duplicates.
    pub fn with_claims(claims: impl IntoIterator<Item = Claim>) -> Self {
        let mut records: Vec<StoredClaim> = Vec::new();
        for claim in claims {
            if records.iter().all(|r| r.claim.url() != claim.url()) {
                records.push(StoredClaim {
                    id: Uuid::new_v4(),
                    claim,
                });
            }
        }
        Self {
            records: Mutex::new(records),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }

    pub async fn records(&self) -> Vec<StoredClaim> {
        self.records.lock().await.clone()
    }
}

#[async_trait]
impl ClaimStore for MemoryClaimStore {
    async fn save(&self, claim: &Claim) -> Result<StoredClaim> {
        check_lengths(claim)?;

        let mut records = self.records.lock().await;
        if let Some(existing) = records.iter().find(|r| r.claim.url() == claim.url()) {
            return Err(StoreError::DuplicateUrl(Box::new(existing.clone())));
        }

        let stored = StoredClaim {
            id: Uuid::new_v4(),
            claim: claim.clone(),
        };
        records.push(stored.clone());
        Ok(stored)
    }

    async fn get(&self, is_fact: bool, reviewed_before: DateTime<Utc>) -> Result<Vec<Claim>> {
        let records = self.records.lock().await;
        let mut claims: Vec<Claim> = records
            .iter()
            .filter(|r| r.claim.is_fact() == is_fact && r.claim.reviewed_at() < reviewed_before)
            .map(|r| r.claim.clone())
            .collect();
        sort_newest_first(&mut claims);
        claims.truncate(PAGE_LIMIT);
        Ok(claims)
    }
}
