use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::errors::AuthError;
use crate::types::db::user::{self, ActiveModel, Entity as User};

/// CredentialStore manages user accounts in the database
pub struct CredentialStore {
    db: DatabaseConnection,
}

impl CredentialStore {
    /// Create a new CredentialStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Register a new user
    ///
    /// # Arguments
    /// * `name` - Display name for the new user
    /// * `email` - Email address, unique per account
    /// * `password` - The plaintext password to hash and store
    ///
    /// # Returns
    /// * `Ok(user::Model)` - The created user
    /// * `Err(AuthError)` - DuplicateEmail if the email is taken, or InternalError
    pub async fn register_user(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> Result<user::Model, AuthError> {
        // Check if email is already registered
        let existing_user = User::find()
            .filter(user::Column::Email.eq(&email))
            .one(&self.db)
            .await
            .map_err(|e| AuthError::internal_error(format!("Database error: {}", e)))?;

        if existing_user.is_some() {
            return Err(AuthError::duplicate_email());
        }

        let user_id = Uuid::new_v4().to_string();

        // Hash password with Argon2id
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::internal_error(format!("Password hashing error: {}", e)))?
            .to_string();

        let new_user = ActiveModel {
            id: Set(user_id),
            name: Set(name),
            email: Set(email),
            password_hash: Set(password_hash),
            created_at: Set(Utc::now().timestamp()),
        };

        let created = new_user.insert(&self.db).await.map_err(|e| {
            // Races between the existence check and the insert hit the unique index
            if e.to_string().contains("UNIQUE") {
                AuthError::duplicate_email()
            } else {
                AuthError::internal_error(format!("Database error: {}", e))
            }
        })?;

        Ok(created)
    }

    /// Verify user credentials and return the user on success
    ///
    /// Unknown email and wrong password both map to InvalidCredentials so the
    /// response does not reveal which one failed.
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<user::Model, AuthError> {
        let user = User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|_| AuthError::invalid_credentials())?;

        let user = user.ok_or_else(AuthError::invalid_credentials)?;

        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|_| AuthError::invalid_credentials())?;

        let argon2 = Argon2::default();
        argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AuthError::invalid_credentials())?;

        Ok(user)
    }

    /// Look up a user by id
    pub async fn find_by_id(&self, user_id: &str) -> Result<Option<user::Model>, AuthError> {
        User::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| AuthError::internal_error(format!("Database error: {}", e)))
    }
}
