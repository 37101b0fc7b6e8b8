//! Auth service
//!
//! Orchestrates registration, login, and user management over a
//! [`UserStore`], a [`crate::token::TokenIssuer`], and the password hasher.
//! This is the only layer with business logic; everything below it is a
//! primitive. Hashing happens here, explicitly, before persistence - the
//! store never sees a plaintext password.

use tokio::task;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{
    LoginRequest, NewUser, RegisterRequest, UpdateUserRequest, UserResponse, UserUpdate,
};
use crate::password;
use crate::store::UserStore;
use crate::token::{TokenIssuer, TokenPair};
use crate::validation;

pub struct AuthService<S: UserStore> {
    store: S,
    tokens: TokenIssuer,
}

impl<S: UserStore> AuthService<S> {
    pub fn new(store: S, tokens: TokenIssuer) -> Self {
        Self { store, tokens }
    }

    /// Register a new user.
    ///
    /// Validation runs before any store interaction; duplicate checks go
    /// email first, then username. Returns the public fields only.
    pub async fn register(&self, request: RegisterRequest) -> Result<UserResponse> {
        validation::validate_username(&request.username)?;
        validation::validate_email(&request.email)?;
        validation::validate_password(&request.password)?;

        if self.store.find_by_email(&request.email).await?.is_some() {
            return Err(Error::duplicate("email already registered"));
        }
        if self
            .store
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(Error::duplicate("username already taken"));
        }

        let password_hash = hash_blocking(request.password).await?;

        let user = self
            .store
            .create(NewUser {
                id: Uuid::new_v4().to_string(),
                username: request.username,
                email: request.email,
                password_hash,
            })
            .await?;

        log::info!("registered user {}", user.id);
        Ok(user.into())
    }

    /// Authenticate a user and mint a token pair.
    ///
    /// An unknown username and a wrong password are indistinguishable to the
    /// caller; both collapse to `InvalidCredentials`.
    pub async fn login(&self, request: LoginRequest) -> Result<TokenPair> {
        let user = self
            .store
            .find_by_username(&request.username)
            .await?
            .ok_or(Error::InvalidCredentials)?;

        if !verify_blocking(request.password, user.password_hash).await {
            return Err(Error::InvalidCredentials);
        }

        log::debug!("issuing session tokens for user {}", user.id);
        self.tokens.issue(&user.id)
    }

    /// List all users' public fields
    pub async fn list_users(&self) -> Result<Vec<UserResponse>> {
        let users = self.store.list().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Fetch a single user's public fields
    pub async fn get_user(&self, id: &str) -> Result<UserResponse> {
        self.store
            .find_by_id(id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| Error::not_found(format!("no user with id {id}")))
    }

    /// Apply a partial profile update.
    ///
    /// A present password is validated and rehashed; email and username
    /// changes are re-validated and duplicate-checked against other users.
    pub async fn update_user(&self, id: &str, request: UpdateUserRequest) -> Result<UserResponse> {
        if let Some(username) = &request.username {
            validation::validate_username(username)?;
            if let Some(existing) = self.store.find_by_username(username).await? {
                if existing.id != id {
                    return Err(Error::duplicate("username already taken"));
                }
            }
        }
        if let Some(email) = &request.email {
            validation::validate_email(email)?;
            if let Some(existing) = self.store.find_by_email(email).await? {
                if existing.id != id {
                    return Err(Error::duplicate("email already registered"));
                }
            }
        }

        let password_hash = match request.password {
            Some(password) => Some(hash_blocking(password).await?),
            None => None,
        };

        let fields = UserUpdate {
            username: request.username,
            email: request.email,
            password_hash,
        };

        self.store
            .update(id, fields)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| Error::not_found(format!("no user with id {id}")))
    }

    /// Delete a user record
    pub async fn delete_user(&self, id: &str) -> Result<()> {
        if !self.store.delete(id).await? {
            return Err(Error::not_found(format!("no user with id {id}")));
        }
        log::info!("deleted user {id}");
        Ok(())
    }
}

/// Run bcrypt hashing on the blocking pool; the cost-10 work would otherwise
/// stall the request-handling threads.
async fn hash_blocking(password: String) -> Result<String> {
    task::spawn_blocking(move || password::hash_password(&password))
        .await
        .map_err(|e| Error::internal(format!("hashing task failed: {e}")))?
}

/// Run bcrypt verification on the blocking pool. Malformed hashes and task
/// failures both read as a mismatch.
async fn verify_blocking(password: String, hash: String) -> bool {
    task::spawn_blocking(move || password::verify_password(&password, &hash))
        .await
        .unwrap_or(false)
}
