pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod pg;
pub mod query;
pub mod store;

pub use error::{Result, StoreError};
#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryClaimStore;
pub use pg::PgClaimStore;
pub use query::latest_claims;
pub use store::{ClaimStore, StoredClaim, PAGE_LIMIT};
