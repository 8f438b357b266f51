use fakeorfact_common::ClaimError;

use crate::store::StoredClaim;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Expected outcome when a source re-delivers a claim. Carries the record
    /// that already owns the URL.
    #[error("A claim already exists with the URL '{}'", .0.claim.url())]
    DuplicateUrl(Box<StoredClaim>),

    #[error("Field {field} exceeds {max} characters")]
    FieldTooLong { field: &'static str, max: usize },

    #[error("Stored claim is invalid: {0}")]
    InvalidRecord(#[from] ClaimError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

impl StoreError {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, StoreError::DuplicateUrl(_))
    }
}
