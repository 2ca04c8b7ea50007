// src/auth/session.rs
// Signed session cookie carrying the authenticated user id

use axum::http::{HeaderMap, header};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{MAX_SESSION_DAYS, SessionConfig};
use crate::error::Result;

pub const SESSION_COOKIE: &str = "__session";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub exp: usize,  // expiration timestamp
    pub iat: usize,  // issued at timestamp
}

/// Issues and reads the `__session` cookie
#[derive(Clone)]
pub struct SessionManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    secure: bool,
    max_age: Duration,
}

impl SessionManager {
    /// Lifetimes outside `1..=MAX_SESSION_DAYS` are clamped into range
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            secure: config.secure_cookies,
            max_age: Duration::days(config.max_age_days.clamp(1, MAX_SESSION_DAYS)),
        }
    }

    pub fn create_token(&self, user_id: &str) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            exp: (now + self.max_age).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(data.claims)
    }

    /// `Set-Cookie` value that signs `user_id` in. Without `remember` the
    /// cookie lasts for the browser session only.
    pub fn commit_cookie(&self, user_id: &str, remember: bool) -> Result<String> {
        let token = self.create_token(user_id)?;
        let mut cookie = format!("{SESSION_COOKIE}={token}; {}", self.attributes());
        if remember {
            cookie.push_str(&format!("; Max-Age={}", self.max_age.num_seconds()));
        }
        Ok(cookie)
    }

    /// `Set-Cookie` value that removes the session
    pub fn destroy_cookie(&self) -> String {
        format!(
            "{SESSION_COOKIE}=; {}; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT",
            self.attributes()
        )
    }

    /// User id from a valid session cookie, if any
    pub fn user_id(&self, headers: &HeaderMap) -> Option<String> {
        let token = cookie_value(headers, SESSION_COOKIE)?;
        match self.verify_token(&token) {
            Ok(claims) => Some(claims.sub),
            Err(e) => {
                debug!("Ignoring invalid session cookie: {}", e);
                None
            }
        }
    }

    fn attributes(&self) -> String {
        let mut attrs = String::from("Path=/; HttpOnly; SameSite=Lax");
        if self.secure {
            attrs.push_str("; Secure");
        }
        attrs
    }
}

/// Extract a cookie value from the request headers
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let prefix = format!("{name}=");
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .map(|s| s.trim())
        .find_map(|s| s.strip_prefix(&prefix))
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}
