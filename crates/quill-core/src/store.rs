//! Credential store
//!
//! Abstracts user persistence behind a trait so the auth service can be
//! tested against an in-memory implementation.

use async_trait::async_trait;
use chrono::Utc;

use crate::error::{Error, Result};
use crate::models::{NewUser, User, UserUpdate};

/// User persistence operations
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Find a user by username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Find a user by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<User>>;

    /// List all users, oldest first
    async fn list(&self) -> Result<Vec<User>>;

    /// Insert a new user record
    async fn create(&self, user: NewUser) -> Result<User>;

    /// Apply a partial update; returns `None` when the user does not exist
    async fn update(&self, id: &str, fields: UserUpdate) -> Result<Option<User>>;

    /// Delete a user; returns `false` when the user does not exist
    async fn delete(&self, id: &str) -> Result<bool>;
}

/// SQLite implementation of [`UserStore`]
#[derive(Clone)]
pub struct SqliteUserStore {
    pool: sqlx::SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        Self { pool }
    }
}

/// Map a UNIQUE constraint violation to `DuplicateIdentity` so concurrent
/// registrations that slip past the existence check still fail cleanly.
fn map_insert_error(err: sqlx::Error) -> Error {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            Error::duplicate("username or email already registered")
        }
        _ => Error::from(err),
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(sqlx::query_as("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(sqlx::query_as("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        Ok(sqlx::query_as("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn list(&self) -> Result<Vec<User>> {
        Ok(sqlx::query_as("SELECT * FROM users ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?)
    }

    async fn create(&self, user: NewUser) -> Result<User> {
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO users (id, username, email, password_hash, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(map_insert_error)?;

        self.find_by_id(&user.id)
            .await?
            .ok_or_else(|| Error::internal("failed to fetch created user"))
    }

    async fn update(&self, id: &str, fields: UserUpdate) -> Result<Option<User>> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET username = COALESCE(?, username),
                email = COALESCE(?, email),
                password_hash = COALESCE(?, password_hash),
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&fields.username)
        .bind(&fields.email)
        .bind(&fields.password_hash)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_insert_error)?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find_by_id(id).await
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    async fn store() -> (SqliteUserStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(dir.path().join("quill.db")).await.unwrap();
        (SqliteUserStore::new(db.pool), dir)
    }

    fn new_user(id: &str, username: &str, email: &str) -> NewUser {
        NewUser {
            id: id.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "$2b$10$hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let (store, _dir) = store().await;

        let created = store
            .create(new_user("user-1", "alice", "a@x.com"))
            .await
            .unwrap();
        assert_eq!(created.username, "alice");

        let by_email = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, "user-1");

        let by_username = store.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(by_username.email, "a@x.com");

        assert!(store.find_by_username("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unique_constraint_maps_to_duplicate() {
        let (store, _dir) = store().await;
        store
            .create(new_user("user-1", "alice", "a@x.com"))
            .await
            .unwrap();

        // Same email, different username: the constraint is the backstop.
        let err = store
            .create(new_user("user-2", "bob", "a@x.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateIdentity(_)));

        // Same username, different email.
        let err = store
            .create(new_user("user-3", "alice", "b@x.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateIdentity(_)));
    }

    #[tokio::test]
    async fn test_partial_update() {
        let (store, _dir) = store().await;
        store
            .create(new_user("user-1", "alice", "a@x.com"))
            .await
            .unwrap();

        let updated = store
            .update(
                "user-1",
                UserUpdate {
                    email: Some("alice@x.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.email, "alice@x.com");
        // Untouched fields survive a partial update.
        assert_eq!(updated.username, "alice");
        assert_eq!(updated.password_hash, "$2b$10$hash");
    }

    #[tokio::test]
    async fn test_update_missing_user_is_none() {
        let (store, _dir) = store().await;
        let result = store.update("ghost", UserUpdate::default()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete() {
        let (store, _dir) = store().await;
        store
            .create(new_user("user-1", "alice", "a@x.com"))
            .await
            .unwrap();

        assert!(store.delete("user-1").await.unwrap());
        assert!(!store.delete("user-1").await.unwrap());
        assert!(store.find_by_id("user-1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_is_ordered() {
        let (store, _dir) = store().await;
        store
            .create(new_user("user-1", "alice", "a@x.com"))
            .await
            .unwrap();
        store
            .create(new_user("user-2", "bob", "b@x.com"))
            .await
            .unwrap();

        let users = store.list().await.unwrap();
        assert_eq!(users.len(), 2);
    }
}
