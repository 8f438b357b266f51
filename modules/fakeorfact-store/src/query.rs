//! Read path: one page of facts and fakes merged into a single timeline.

use chrono::{DateTime, Utc};
use fakeorfact_common::{sort_newest_first, Claim};

use crate::error::Result;
use crate::store::ClaimStore;

/// Claims reviewed before `before` (default: now), newest first.
///
/// Facts and fakes are fetched as two independent pages of
/// [`crate::PAGE_LIMIT`] and then merged, so the result holds up to twice the
/// page size. Because each class is capped before merging, an older fact can
/// be missing even though it would rank above the oldest merged fake; the
/// ordering is only exact within each class's own window.
pub async fn latest_claims(
    store: &dyn ClaimStore,
    before: Option<DateTime<Utc>>,
) -> Result<Vec<Claim>> {
    let cutoff = before.unwrap_or_else(Utc::now);

    let (mut claims, fakes) =
        futures::future::try_join(store.get(true, cutoff), store.get(false, cutoff)).await?;

    claims.extend(fakes);
    sort_newest_first(&mut claims);
    Ok(claims)
}
