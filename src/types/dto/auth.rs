use chrono::{TimeZone, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::user;

/// Request model for user registration
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Display name of the new user
    #[oai(validator(min_length = 1, max_length = 100))]
    pub name: String,

    /// Email address used for login
    #[oai(validator(min_length = 3, max_length = 254))]
    pub email: String,

    /// Password (6 characters minimum)
    #[oai(validator(min_length = 6))]
    pub password: String,
}

/// Request model for user login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address for authentication
    pub email: String,

    /// Password for authentication
    pub password: String,
}

/// Response model containing the authentication token
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Whether the operation succeeded
    pub success: bool,

    /// JWT bearer token for API authentication
    pub token: String,
}

/// Profile of an authenticated user
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
pub struct UserProfile {
    /// User ID (UUID)
    pub id: String,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Timestamp when the account was created (ISO 8601 format)
    pub created_at: String,
}

impl From<user::Model> for UserProfile {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: Utc
                .timestamp_opt(user.created_at, 0)
                .single()
                .map(|dt| dt.to_rfc3339())
                .unwrap_or_default(),
        }
    }
}

/// Response model for the current-user endpoint
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct MeResponse {
    /// Whether the operation succeeded
    pub success: bool,

    /// The authenticated user's profile
    pub data: UserProfile,
}
