//! Google Fact Check Tools search as a claim source.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fakeorfact_common::{classify_rating, Claim, ClaimError};
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{Result, SourceError};
use crate::source::{canonical_url, ClaimSource};

const SEARCH_URL: &str = "https://factchecktools.googleapis.com/v1alpha1/claims:search";
const LANGUAGE_CODE: &str = "en-US";
const PAGE_SIZE: &str = "100";
const MAX_AGE_DAYS: &str = "20";

// --- Response DTOs ---

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimSearchResponse {
    #[serde(default)]
    pub claims: Vec<ClaimResult>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResult {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub claim_review: Vec<ClaimReview>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimReview {
    #[serde(default)]
    pub publisher: ReviewPublisher,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub textual_rating: String,
    #[serde(default)]
    pub review_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReviewPublisher {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub site: String,
}

// --- ClaimSearch trait ---

/// Network seam of the fact-check source.
#[async_trait]
pub trait ClaimSearch: Send + Sync {
    async fn search(&self, publisher: &str) -> Result<ClaimSearchResponse>;
}

pub struct FactCheckClient {
    client: reqwest::Client,
    api_key: String,
}

impl FactCheckClient {
    pub fn new(api_key: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait]
impl ClaimSearch for FactCheckClient {
    async fn search(&self, publisher: &str) -> Result<ClaimSearchResponse> {
        let resp = self
            .client
            .get(SEARCH_URL)
            .query(&[
                ("languageCode", LANGUAGE_CODE),
                ("pageSize", PAGE_SIZE),
                ("maxAgeDays", MAX_AGE_DAYS),
                ("reviewPublisherSiteFilter", publisher),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SourceError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        let data: ClaimSearchResponse = serde_json::from_str(&body)?;
        info!(publisher, count = data.claims.len(), "Fact-check search complete");
        Ok(data)
    }
}

// --- FactCheckSource ---

/// Claims reviewed by one publisher, classified from the first review's
/// textual rating.
pub struct FactCheckSource {
    search: Box<dyn ClaimSearch>,
}

impl FactCheckSource {
    pub fn new(api_key: &str) -> Result<Self> {
        Ok(Self::with_search(FactCheckClient::new(api_key)?))
    }

    pub fn with_search(search: impl ClaimSearch + 'static) -> Self {
        Self {
            search: Box::new(search),
        }
    }
}

#[async_trait]
impl ClaimSource for FactCheckSource {
    async fn collect(&self, publisher: &str) -> Vec<Claim> {
        let response = match self.search.search(publisher).await {
            Ok(response) => response,
            Err(e) => {
                warn!(publisher, error = %e, "Fact-check search failed, skipping publisher");
                return Vec::new();
            }
        };

        response
            .claims
            .into_iter()
            .filter_map(|result| {
                let review = result.claim_review.into_iter().next()?;
                let reviewer = review.publisher.name.clone();
                match claim_from_review(result.text, review) {
                    Ok(claim) => Some(claim),
                    Err(e) => {
                        warn!(publisher, reviewer = %reviewer, error = %e, "Dropping fact-check result");
                        None
                    }
                }
            })
            .collect()
    }

    fn name(&self) -> &str {
        "fact_check"
    }
}

fn claim_from_review(text: String, review: ClaimReview) -> std::result::Result<Claim, ClaimError> {
    let is_fact = classify_rating(&review.textual_rating)?;
    Claim::new(
        text,
        review.publisher.name,
        canonical_url(&review.url),
        is_fact,
        review.review_date,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_api_payload() {
        let payload = r#"{
            "claims": [{
                "text": "the moon is made of cheese",
                "claimant": "someone",
                "claimReview": [{
                    "publisher": {"name": "PolitiFact", "site": "politifact.com"},
                    "url": "https://politifact.com/moon",
                    "title": "Moon cheese",
                    "reviewDate": "2020-08-06T00:00:00Z",
                    "textualRating": "Pants on Fire",
                    "languageCode": "en"
                }]
            }],
            "nextPageToken": "abc"
        }"#;

        let data: ClaimSearchResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(data.claims.len(), 1);
        let review = &data.claims[0].claim_review[0];
        assert_eq!(review.publisher.name, "PolitiFact");
        assert_eq!(review.publisher.site, "politifact.com");
        assert_eq!(review.textual_rating, "Pants on Fire");
        assert!(review.review_date.is_some());
    }

    #[test]
    fn empty_payload_has_no_claims() {
        let data: ClaimSearchResponse = serde_json::from_str("{}").unwrap();
        assert!(data.claims.is_empty());
    }

    #[test]
    fn review_without_date_fails_validation() {
        let review = ClaimReview {
            publisher: ReviewPublisher {
                name: "p".into(),
                site: String::new(),
            },
            url: "http://u.com".into(),
            textual_rating: "True".into(),
            review_date: None,
        };
        let err = claim_from_review("text".into(), review).unwrap_err();
        assert_eq!(
            err,
            ClaimError::Validation {
                field: "reviewedAt"
            }
        );
    }
}
