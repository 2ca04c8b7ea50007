// src/auth/models.rs

use serde::{Deserialize, Serialize};

/// A registered account. The password hash is stored separately and never
/// leaves the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Row shape used only while verifying a login
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct UserWithPassword {
    pub id: String,
    pub email: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub password_hash: Option<String>,
}

impl From<UserWithPassword> for User {
    fn from(u: UserWithPassword) -> Self {
        Self {
            id: u.id,
            email: u.email,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// Body of `POST /join`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinForm {
    pub email: Option<String>,
    pub password: Option<String>,
    pub redirect_to: Option<String>,
}

/// Body of `POST /login`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
    pub redirect_to: Option<String>,
    /// Checkbox value; present (usually `on`) when ticked
    pub remember: Option<String>,
}

impl LoginForm {
    pub fn remember_me(&self) -> bool {
        self.remember.as_deref().is_some_and(|v| v == "on" || v == "true")
    }
}
