use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::types::internal::auth::Claims;

/// Token validation/generation failures, mapped to API errors at the boundary
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,

    #[error("invalid token")]
    Invalid,

    #[error("token generation failed: {0}")]
    Generation(String),
}

/// Manages JWT generation and validation
pub struct TokenService {
    jwt_secret: String,
    jwt_expiration_days: i64,
}

impl TokenService {
    /// Create a new TokenService with the given JWT secret
    pub fn new(jwt_secret: String) -> Self {
        Self {
            jwt_secret,
            jwt_expiration_days: 30,
        }
    }

    /// Generate a JWT for the given user id
    pub fn generate(&self, user_id: &str) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();
        let expiration = now + self.jwt_expiration_days * 24 * 60 * 60;

        let claims = Claims {
            sub: user_id.to_string(),
            exp: expiration,
            iat: now,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| TokenError::Generation(format!("Failed to generate JWT: {}", e)))
    }

    /// Validate a JWT and return the claims
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        let validation = Validation::new(Algorithm::HS256);

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        })?;

        Ok(token_data.claims)
    }
}
