//! Service layer: turns route input into template data using the
//! repository traits.

use thiserror::Error;

use crate::repository::errors::ApiError;

pub mod account;
pub mod api;
pub mod listing;
pub mod supplies;

/// Errors surfaced to the routes.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),

    #[error("form error: {0}")]
    Form(String),

    #[error("type constraint error: {0}")]
    TypeConstraint(String),

    #[error(transparent)]
    Api(ApiError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
