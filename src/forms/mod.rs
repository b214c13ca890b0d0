//! Form definitions backing the explorer routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod explorer;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid price: {0}")]
    InvalidPrice(String),

    #[error("minimum price is greater than maximum price")]
    InvertedPriceRange,
}
