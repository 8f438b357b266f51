use thiserror::Error;

/// Reasons a raw upstream item could not become a [`crate::Claim`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClaimError {
    #[error("Cannot create claim with invalid parameter {field}: empty or undefined")]
    Validation { field: &'static str },

    #[error("Could not find any match for textual rating {rating:?}")]
    Classification { rating: String },
}
