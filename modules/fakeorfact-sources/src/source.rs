use async_trait::async_trait;
use fakeorfact_common::Claim;
use tracing::info;

/// Produces validated claims for one external identifier: a publisher site
/// for the fact-check API, a feed URL for feeds.
///
/// Implementors only write [`ClaimSource::collect`]. Callers go through
/// [`ClaimSource::get_claims`], which applies the visual-media filter so no
/// variant can leak such claims.
#[async_trait]
pub trait ClaimSource: Send + Sync {
    /// Variant-specific extraction. Must already have dropped invalid items
    /// and must return an empty vec instead of failing.
    async fn collect(&self, identifier: &str) -> Vec<Claim>;

    /// Claims for `identifier`, minus those referencing visual media.
    async fn get_claims(&self, identifier: &str) -> Vec<Claim> {
        let mut claims = self.collect(identifier).await;
        let collected = claims.len();
        claims.retain(|c| !c.references_visuals());

        let facts = claims.iter().filter(|c| c.is_fact()).count();
        info!(
            source = self.name(),
            identifier,
            facts,
            fakes = claims.len() - facts,
            excluded_visuals = collected - claims.len(),
            "Collected claims"
        );
        claims
    }

    /// Source name (for logging).
    fn name(&self) -> &str {
        "unknown"
    }
}

/// The form every source stores a claim URL in.
///
/// Parseable URLs are serialized by `url::Url` (lower-cased host, `/` for an
/// empty path), which is also what feed-rs does to feed links, so the same
/// article arrives under the same key from any source. Anything else is kept
/// as given, trimmed.
pub fn canonical_url(raw: &str) -> String {
    let raw = raw.trim();
    match url::Url::parse(raw) {
        Ok(parsed) => parsed.to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_gets_a_slash() {
        assert_eq!(canonical_url("http://article_url.com"), "http://article_url.com/");
    }

    #[test]
    fn already_canonical_is_unchanged() {
        let url = "https://www.snopes.com/fact-check/moon-cheese/?utm=x#top";
        assert_eq!(canonical_url(url), url);
        assert_eq!(canonical_url(&canonical_url(url)), url);
    }

    #[test]
    fn host_and_scheme_are_lower_cased() {
        assert_eq!(canonical_url(" HTTP://Example.COM/Path "), "http://example.com/Path");
    }

    #[test]
    fn unparseable_is_kept_trimmed() {
        assert_eq!(canonical_url("  not a url "), "not a url");
        assert_eq!(canonical_url(""), "");
    }
}
