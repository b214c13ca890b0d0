//! Error conversion glue between the domain, repository and service layers.
//!
//! The domain layer must not depend on repository or service error types, so
//! the conversions live here instead.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::ApiError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<ApiError> for ServiceError {
    fn from(val: ApiError) -> Self {
        match val {
            ApiError::NotFound(message) => ServiceError::NotFound(message),
            ApiError::Unauthorized => ServiceError::Unauthorized,
            other => ServiceError::Api(other),
        }
    }
}
