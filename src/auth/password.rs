// src/auth/password.rs

use bcrypt::{hash, verify};

use crate::error::Result;

/// Work factor for stored hashes
pub const PASSWORD_HASH_COST: u32 = 10;

/// Hash a plaintext password. bcrypt is CPU-bound, so it runs on the
/// blocking pool.
pub async fn hash_password(password: &str) -> Result<String> {
    let password = password.to_owned();
    let hashed = tokio::task::spawn_blocking(move || hash(password, PASSWORD_HASH_COST)).await??;
    Ok(hashed)
}

/// Compare a plaintext password against a stored bcrypt hash
pub async fn verify_password(password: &str, hashed: &str) -> Result<bool> {
    let password = password.to_owned();
    let hashed = hashed.to_owned();
    let valid = tokio::task::spawn_blocking(move || verify(password, &hashed)).await??;
    Ok(valid)
}
