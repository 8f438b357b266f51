pub mod error;
pub mod fact_check;
pub mod feed;
pub mod source;

pub use error::{Result, SourceError};
pub use fact_check::{ClaimSearch, ClaimSearchResponse, FactCheckClient, FactCheckSource};
pub use feed::{parse_feed_claims, FeedFetcher, FeedSource, HttpFeedFetcher};
pub use source::{canonical_url, ClaimSource};
