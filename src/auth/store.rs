// src/auth/store.rs

use sqlx::SqlitePool;
use tracing::{info, warn};
use uuid::Uuid;

use super::models::{User, UserWithPassword};
use super::password::{hash_password, verify_password};
use crate::error::{AppError, Result};

/// Account storage: users plus their password hashes
#[derive(Clone)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_user_by_id(&self, id: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, created_at, updated_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, created_at, updated_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Create a user and store the bcrypt hash of `password` alongside it
    pub async fn create_user(&self, email: &str, password: &str) -> Result<User> {
        let hashed = hash_password(password).await?;
        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            created_at: chrono::Utc::now().timestamp(),
            updated_at: chrono::Utc::now().timestamp(),
        };

        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO users (id, email, created_at, updated_at) VALUES (?, ?, ?, ?)")
            .bind(&user.id)
            .bind(&user.email)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    AppError::DuplicateEmail(email.to_string())
                }
                other => AppError::Database(other),
            })?;

        sqlx::query("INSERT INTO passwords (hash, user_id) VALUES (?, ?)")
            .bind(&hashed)
            .bind(&user.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!("Created user {}", user.id);
        Ok(user)
    }

    /// Returns whether a user was removed. The password row goes with it.
    pub async fn delete_user_by_email(&self, email: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE email = ?")
            .bind(email)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!("Deleted user with email {}", email);
        }
        Ok(deleted)
    }

    /// The user for a matching email/password pair, `None` otherwise.
    /// Callers cannot tell an unknown email from a wrong password.
    pub async fn verify_login(&self, email: &str, password: &str) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserWithPassword>(
            r#"
            SELECT u.id, u.email, u.created_at, u.updated_at, p.hash AS password_hash
            FROM users u
            LEFT JOIN passwords p ON p.user_id = u.id
            WHERE u.email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        let Some(hash) = row.password_hash.as_deref() else {
            warn!("User {} has no stored password", row.id);
            return Ok(None);
        };

        match verify_password(password, hash).await {
            Ok(true) => Ok(Some(row.into())),
            Ok(false) => Ok(None),
            Err(AppError::PasswordHash(e)) => {
                warn!("Stored hash for user {} is unreadable: {}", row.id, e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
