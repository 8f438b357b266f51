use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;

use crate::error::ClaimError;

static VISUALS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)photo|video|image|picture").unwrap());

/// A fact or a fake claim according to a certain publisher.
///
/// Only obtainable through [`Claim::new`], so every value in circulation has
/// non-empty strings and a defined review timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    title: String,
    publisher_name: String,
    /// The article evaluating the claim. Identity key for persistence.
    url: String,
    is_fact: bool,
    reviewed_at: DateTime<Utc>,
}

impl Claim {
    /// Validate and build a claim. The first letter of the title is upper-cased.
    pub fn new(
        title: impl Into<String>,
        publisher_name: impl Into<String>,
        url: impl Into<String>,
        is_fact: bool,
        reviewed_at: Option<DateTime<Utc>>,
    ) -> Result<Self, ClaimError> {
        let title = title.into();
        let publisher_name = publisher_name.into();
        let url = url.into();

        if title.is_empty() {
            return Err(ClaimError::Validation { field: "title" });
        }
        if publisher_name.is_empty() {
            return Err(ClaimError::Validation {
                field: "publisherName",
            });
        }
        if url.is_empty() {
            return Err(ClaimError::Validation { field: "url" });
        }
        let reviewed_at = reviewed_at.ok_or(ClaimError::Validation {
            field: "reviewedAt",
        })?;

        Ok(Self {
            title: capitalize_first_letter(&title),
            publisher_name,
            url,
            is_fact,
            reviewed_at,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn publisher_name(&self) -> &str {
        &self.publisher_name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_fact(&self) -> bool {
        self.is_fact
    }

    pub fn reviewed_at(&self) -> DateTime<Utc> {
        self.reviewed_at
    }

    /// True if the title refers to some form of visual media. Such claims
    /// can't be judged from text alone and are kept out of the store.
    pub fn references_visuals(&self) -> bool {
        VISUALS_RE.is_match(&self.title)
    }
}

fn capitalize_first_letter(title: &str) -> String {
    match title.char_indices().find(|(_, c)| c.is_alphabetic()) {
        Some((idx, letter)) => {
            let mut out = String::with_capacity(title.len());
            out.push_str(&title[..idx]);
            out.extend(letter.to_uppercase());
            out.push_str(&title[idx + letter.len_utf8()..]);
            out
        }
        None => title.to_string(),
    }
}

/// Sort claims from most recently reviewed to least recently reviewed.
/// Stable, so equal timestamps keep their input order.
pub fn sort_newest_first(claims: &mut [Claim]) {
    claims.sort_by(|a, b| b.reviewed_at.cmp(&a.reviewed_at));
}
