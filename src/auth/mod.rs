// src/auth/mod.rs
// Accounts, password hashing, session cookies, and form validation

pub mod models;
pub mod password;
pub mod session;
pub mod store;
pub mod validation;

pub use models::{JoinForm, LoginForm, User};
pub use session::{SESSION_COOKIE, SessionManager};
pub use store::UserStore;
pub use validation::{ActionErrors, FieldErrors};
