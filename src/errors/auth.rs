use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

use crate::errors::ErrorBody;
use crate::services::token_service::TokenError;

/// Authentication error types
#[derive(ApiResponse, Debug)]
pub enum AuthError {
    /// Request failed validation
    #[oai(status = 400)]
    ValidationError(Json<ErrorBody>),

    /// Email address is already registered
    #[oai(status = 400)]
    DuplicateEmail(Json<ErrorBody>),

    /// Invalid email or password
    #[oai(status = 401)]
    InvalidCredentials(Json<ErrorBody>),

    /// Invalid or malformed JWT
    #[oai(status = 401)]
    InvalidToken(Json<ErrorBody>),

    /// JWT has expired
    #[oai(status = 401)]
    ExpiredToken(Json<ErrorBody>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorBody>),
}

impl AuthError {
    /// Create a ValidationError with the given message
    pub fn validation(message: impl Into<String>) -> Self {
        AuthError::ValidationError(Json(ErrorBody::new(message)))
    }

    /// Create a DuplicateEmail error
    pub fn duplicate_email() -> Self {
        AuthError::DuplicateEmail(Json(ErrorBody::new("Email address is already registered")))
    }

    /// Create an InvalidCredentials error
    pub fn invalid_credentials() -> Self {
        AuthError::InvalidCredentials(Json(ErrorBody::new("Invalid email or password")))
    }

    /// Create an InvalidToken error
    pub fn invalid_token() -> Self {
        AuthError::InvalidToken(Json(ErrorBody::new("Invalid token")))
    }

    /// Create an ExpiredToken error
    pub fn expired_token() -> Self {
        AuthError::ExpiredToken(Json(ErrorBody::new("Token expired")))
    }

    /// Create an InternalError
    pub fn internal_error(message: impl Into<String>) -> Self {
        AuthError::InternalError(Json(ErrorBody::new(message)))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> &str {
        match self {
            AuthError::ValidationError(json)
            | AuthError::DuplicateEmail(json)
            | AuthError::InvalidCredentials(json)
            | AuthError::InvalidToken(json)
            | AuthError::ExpiredToken(json)
            | AuthError::InternalError(json) => &json.0.message,
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => AuthError::expired_token(),
            TokenError::Invalid => AuthError::invalid_token(),
            TokenError::Generation(message) => AuthError::internal_error(message),
        }
    }
}
