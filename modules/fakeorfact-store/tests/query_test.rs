//! Tests for the merged facts-and-fakes read path.

use chrono::{DateTime, Duration, TimeZone, Utc};
use fakeorfact_common::Claim;
use fakeorfact_store::{
    latest_claims, ClaimStore, MemoryClaimStore, Result, StoreError, StoredClaim, PAGE_LIMIT,
};

fn at(h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 8, 6, h, m, 0).unwrap()
}

fn claim(url: &str, is_fact: bool, reviewed_at: DateTime<Utc>) -> Claim {
    Claim::new("title", "publisher", url, is_fact, Some(reviewed_at)).unwrap()
}

#[tokio::test]
async fn merges_both_classes_newest_first() {
    let store = MemoryClaimStore::with_claims([
        claim("http://fact-11", true, at(11, 0)),
        claim("http://fact-12", true, at(12, 0)),
        claim("http://fake-10", false, at(10, 0)),
        claim("http://fake-13", false, at(13, 0)),
    ]);

    let claims = latest_claims(&store, Some(at(13, 30))).await.unwrap();

    let urls: Vec<_> = claims.iter().map(|c| c.url()).collect();
    assert_eq!(
        urls,
        vec!["http://fake-13", "http://fact-12", "http://fact-11", "http://fake-10"]
    );
    assert!(!claims[0].is_fact());
    assert!(claims[1].is_fact());
}

#[tokio::test]
async fn cutoff_is_exclusive() {
    let store = MemoryClaimStore::with_claims([
        claim("http://fact-12", true, at(12, 0)),
        claim("http://fake-13", false, at(13, 0)),
    ]);

    let claims = latest_claims(&store, Some(at(13, 0))).await.unwrap();

    assert_eq!(claims.len(), 1);
    assert_eq!(claims[0].url(), "http://fact-12");
}

#[tokio::test]
async fn missing_cutoff_defaults_to_now() {
    let now = Utc::now();
    let store = MemoryClaimStore::with_claims([
        claim("http://past", true, now - Duration::hours(1)),
        claim("http://future", false, now + Duration::hours(1)),
    ]);

    let claims = latest_claims(&store, None).await.unwrap();

    assert_eq!(claims.len(), 1);
    assert_eq!(claims[0].url(), "http://past");
}

#[tokio::test]
async fn empty_store_yields_empty_list() {
    let store = MemoryClaimStore::new();
    assert!(latest_claims(&store, None).await.unwrap().is_empty());
}

#[tokio::test]
async fn each_class_is_capped_before_merging() {
    // 25 recent facts and 25 older fakes: both pages are full, so the
    // result holds two pages even though every fact outranks every fake.
    let base = at(0, 0);
    let facts = (0..25).map(|i| {
        let reviewed_at = base + Duration::hours(2) + Duration::minutes(i);
        claim(&format!("http://fact-{i}"), true, reviewed_at)
    });
    let fakes = (0..25).map(|i| {
        claim(&format!("http://fake-{i}"), false, base + Duration::minutes(i))
    });
    let store = MemoryClaimStore::with_claims(facts.chain(fakes));

    let claims = latest_claims(&store, Some(at(23, 0))).await.unwrap();

    assert_eq!(claims.len(), 2 * PAGE_LIMIT);
    assert!(claims[..PAGE_LIMIT].iter().all(|c| c.is_fact()));
    assert!(claims[PAGE_LIMIT..].iter().all(|c| !c.is_fact()));
    // Oldest five facts are dropped by the per-class cap.
    assert!(claims.iter().all(|c| c.url() != "http://fact-4"));
    assert!(claims.windows(2).all(|w| w[0].reviewed_at() >= w[1].reviewed_at()));
}

struct FailingStore;

#[async_trait::async_trait]
impl ClaimStore for FailingStore {
    async fn save(&self, _claim: &Claim) -> Result<StoredClaim> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn get(&self, is_fact: bool, _before: DateTime<Utc>) -> Result<Vec<Claim>> {
        if is_fact {
            Ok(vec![claim("http://fact", true, at(1, 0))])
        } else {
            Err(StoreError::Database(sqlx::Error::PoolClosed))
        }
    }
}

#[tokio::test]
async fn store_failure_on_either_class_is_propagated() {
    let err = latest_claims(&FailingStore, None).await.unwrap_err();
    assert!(matches!(err, StoreError::Database(_)));
}
