pub mod claim;
pub mod config;
pub mod error;
pub mod file_config;
pub mod rating;

pub use claim::{sort_newest_first, Claim};
pub use config::AppConfig;
pub use error::ClaimError;
pub use file_config::FileConfig;
pub use rating::classify_rating;
