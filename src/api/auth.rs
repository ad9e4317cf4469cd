use std::sync::Arc;

use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::api::BearerAuth;
use crate::errors::AuthError;
use crate::services::TokenService;
use crate::stores::CredentialStore;
use crate::types::dto::auth::{LoginRequest, MeResponse, RegisterRequest, TokenResponse};

/// Authentication API endpoints
pub struct AuthApi {
    credential_store: Arc<CredentialStore>,
    token_service: Arc<TokenService>,
}

impl AuthApi {
    /// Create a new AuthApi with the given CredentialStore and TokenService
    pub fn new(credential_store: Arc<CredentialStore>, token_service: Arc<TokenService>) -> Self {
        Self {
            credential_store,
            token_service,
        }
    }
}

/// API tags for authentication endpoints
#[derive(Tags)]
enum AuthTags {
    /// Authentication endpoints
    Authentication,
}

#[OpenApi(prefix_path = "/auth")]
impl AuthApi {
    /// Register a new user and receive an authentication token
    #[oai(path = "/register", method = "post", tag = "AuthTags::Authentication")]
    pub async fn register(&self, body: Json<RegisterRequest>) -> Result<Json<TokenResponse>, AuthError> {
        let email = body.email.trim();
        if !looks_like_email(email) {
            return Err(AuthError::validation("Please include a valid email"));
        }

        let user = self
            .credential_store
            .register_user(
                body.name.trim().to_string(),
                email.to_string(),
                body.password.clone(),
            )
            .await?;

        let token = self.token_service.generate(&user.id)?;

        Ok(Json(TokenResponse {
            success: true,
            token,
        }))
    }

    /// Login with email and password to receive an authentication token
    #[oai(path = "/login", method = "post", tag = "AuthTags::Authentication")]
    async fn login(&self, body: Json<LoginRequest>) -> Result<Json<TokenResponse>, AuthError> {
        let user = self
            .credential_store
            .verify_credentials(body.email.trim(), &body.password)
            .await?;

        let token = self.token_service.generate(&user.id)?;

        Ok(Json(TokenResponse {
            success: true,
            token,
        }))
    }

    /// Get the authenticated user's profile
    #[oai(path = "/me", method = "get", tag = "AuthTags::Authentication")]
    pub async fn me(&self, auth: BearerAuth) -> Result<Json<MeResponse>, AuthError> {
        let claims = self.token_service.validate(&auth.0.token)?;

        let user = self
            .credential_store
            .find_by_id(&claims.sub)
            .await?
            // Token is valid but the account is gone
            .ok_or_else(AuthError::invalid_token)?;

        Ok(Json(MeResponse {
            success: true,
            data: user.into(),
        }))
    }
}

/// Minimal shape check; real validation happens when mail is delivered
fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}
