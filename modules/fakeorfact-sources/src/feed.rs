// RSS/Atom feeds as a claim source.
// The fact/fake label comes from configuration, not from entry content.

use std::time::Duration;

use async_trait::async_trait;
use fakeorfact_common::Claim;
use tracing::{debug, warn};

use crate::error::{Result, SourceError};
use crate::source::{canonical_url, ClaimSource};

/// Network seam of the feed source. Returns the raw document.
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    async fn fetch(&self, feed_url: &str) -> Result<Vec<u8>>;
}

/// Lightweight feed fetcher using reqwest. RSS is plain XML, no rendering needed.
pub struct HttpFeedFetcher {
    client: reqwest::Client,
}

impl HttpFeedFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FeedFetcher for HttpFeedFetcher {
    async fn fetch(&self, feed_url: &str) -> Result<Vec<u8>> {
        let resp = self
            .client
            .get(feed_url)
            .header("User-Agent", "fakeorfact-collector/0.1")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Api {
                status: status.as_u16(),
                message: format!("feed fetch failed for {feed_url}"),
            });
        }

        let bytes = resp.bytes().await?;
        Ok(bytes.to_vec())
    }
}

pub struct FeedSource {
    is_fact: bool,
    fetcher: Box<dyn FeedFetcher>,
}

impl FeedSource {
    pub fn new(is_fact: bool) -> Result<Self> {
        Ok(Self::with_fetcher(is_fact, HttpFeedFetcher::new()?))
    }

    pub fn with_fetcher(is_fact: bool, fetcher: impl FeedFetcher + 'static) -> Self {
        Self {
            is_fact,
            fetcher: Box::new(fetcher),
        }
    }
}

#[async_trait]
impl ClaimSource for FeedSource {
    async fn collect(&self, feed_url: &str) -> Vec<Claim> {
        let bytes = match self.fetcher.fetch(feed_url).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(feed_url, error = %e, "Feed fetch failed, skipping feed");
                return Vec::new();
            }
        };

        match parse_feed_claims(&bytes, self.is_fact) {
            Ok(claims) => claims,
            Err(e) => {
                warn!(feed_url, error = %e, "Feed could not be parsed, skipping feed");
                Vec::new()
            }
        }
    }

    fn name(&self) -> &str {
        if self.is_fact {
            "real_feed"
        } else {
            "fake_feed"
        }
    }
}

/// Turn an Atom or RSS 2 document into claims labeled `is_fact`.
///
/// The publisher name is the feed's first category. Each entry contributes its
/// title, first link (see [`canonical_url`]) and review time (`updated`, else `published`); entries
/// that can't produce a valid claim are dropped.
pub fn parse_feed_claims(document: &[u8], is_fact: bool) -> Result<Vec<Claim>> {
    let feed = feed_rs::parser::parse(document)?;

    let publisher_name = feed
        .categories
        .first()
        .map(|c| c.term.trim().to_string())
        .unwrap_or_default();
    let publisher_site = feed.links.first().map(|l| l.href.as_str()).unwrap_or("");
    debug!(
        publisher = %publisher_name,
        site = publisher_site,
        entries = feed.entries.len(),
        "Parsed feed"
    );

    let claims = feed
        .entries
        .into_iter()
        .filter_map(|entry| {
            let title = entry
                .title
                .map(|t| t.content.trim().to_string())
                .unwrap_or_default();
            let link = entry
                .links
                .into_iter()
                .next()
                .map(|l| canonical_url(&l.href))
                .unwrap_or_default();
            let reviewed_at = entry.updated.or(entry.published);

            match Claim::new(title, publisher_name.as_str(), link, is_fact, reviewed_at) {
                Ok(claim) => Some(claim),
                Err(e) => {
                    warn!(publisher = %publisher_name, entry_id = %entry.id, error = %e, "Dropping feed entry");
                    None
                }
            }
        })
        .collect();

    Ok(claims)
}
