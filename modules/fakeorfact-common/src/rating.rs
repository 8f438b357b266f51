//! Free-text rating classification.
//!
//! Fact-checkers label claims with prose ("Mostly true", "Pants on fire",
//! "Not real"). Two ordered passes turn that into a fact/fake verdict: the
//! true-pattern wins first, the false-pattern second, anything else is
//! unclassifiable.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ClaimError;

/// "true" or "real" with no "not" anywhere before it.
static TRUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^([^n]|n[^o]|no[^t])*(true|real)").unwrap());

static FALSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)false|fake|not.(true|real)").unwrap());

/// Returns `true` for a fact, `false` for a fake.
pub fn classify_rating(textual_rating: &str) -> Result<bool, ClaimError> {
    if TRUE_RE.is_match(textual_rating) {
        return Ok(true);
    }
    if FALSE_RE.is_match(textual_rating) {
        return Ok(false);
    }
    Err(ClaimError::Classification {
        rating: textual_rating.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn true_and_real_are_facts() {
        assert_eq!(classify_rating("true"), Ok(true));
        assert_eq!(classify_rating("real"), Ok(true));
        assert_eq!(classify_rating("True"), Ok(true));
        assert_eq!(classify_rating("Mostly true"), Ok(true));
    }

    #[test]
    fn false_and_fake_are_fakes() {
        assert_eq!(classify_rating("false"), Ok(false));
        assert_eq!(classify_rating("fake"), Ok(false));
        assert_eq!(classify_rating("Mostly False"), Ok(false));
    }

    #[test]
    fn negated_true_is_fake() {
        assert_eq!(classify_rating("not true"), Ok(false));
        assert_eq!(classify_rating("not real"), Ok(false));
        assert_eq!(classify_rating("Not True"), Ok(false));
    }

    #[test]
    fn unmatched_rating_fails() {
        let err = classify_rating("xyz-unmatched").unwrap_err();
        assert_eq!(
            err,
            ClaimError::Classification {
                rating: "xyz-unmatched".to_string()
            }
        );
        assert!(classify_rating("").is_err());
        assert!(classify_rating("Pants on fire").is_err());
    }
}
