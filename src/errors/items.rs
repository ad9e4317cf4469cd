use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

use crate::errors::ErrorBody;
use crate::services::access_guard::ItemAccessError;
use crate::services::token_service::TokenError;

/// Travel item error types
#[derive(ApiResponse, Debug)]
pub enum ItemError {
    /// Request failed validation
    #[oai(status = 400)]
    ValidationError(Json<ErrorBody>),

    /// Invalid or expired JWT
    #[oai(status = 401)]
    Unauthorized(Json<ErrorBody>),

    /// Requester does not own the travel item
    #[oai(status = 401)]
    NotOwner(Json<ErrorBody>),

    /// Travel item does not exist
    #[oai(status = 404)]
    NotFound(Json<ErrorBody>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorBody>),
}

impl ItemError {
    /// Create a ValidationError with the given message
    pub fn validation(message: impl Into<String>) -> Self {
        ItemError::ValidationError(Json(ErrorBody::new(message)))
    }

    /// Create a NotFound error
    pub fn not_found() -> Self {
        ItemError::NotFound(Json(ErrorBody::new("Travel item not found")))
    }

    /// Create an InternalError
    pub fn internal_error(message: impl Into<String>) -> Self {
        ItemError::InternalError(Json(ErrorBody::new(message)))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> &str {
        match self {
            ItemError::ValidationError(json)
            | ItemError::Unauthorized(json)
            | ItemError::NotOwner(json)
            | ItemError::NotFound(json)
            | ItemError::InternalError(json) => &json.0.message,
        }
    }
}

impl fmt::Display for ItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<TokenError> for ItemError {
    fn from(err: TokenError) -> Self {
        let message = match err {
            TokenError::Expired => "Token expired",
            TokenError::Invalid => "Invalid token",
            TokenError::Generation(_) => "Invalid token",
        };
        ItemError::Unauthorized(Json(ErrorBody::new(message)))
    }
}

impl From<ItemAccessError> for ItemError {
    fn from(err: ItemAccessError) -> Self {
        match err {
            ItemAccessError::NotFound => ItemError::not_found(),
            ItemAccessError::NotOwner { action } => ItemError::NotOwner(Json(ErrorBody::new(
                format!("Not authorized to {} this travel item", action),
            ))),
        }
    }
}
