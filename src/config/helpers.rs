// src/config/helpers.rs
// Helper functions for loading environment variables

use std::env;

pub fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

pub fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

pub fn env_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(v) => matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        assert_eq!(env_or("TASKFLOW_TEST_SURELY_UNSET", "fallback"), "fallback");
        assert_eq!(env_parsed("TASKFLOW_TEST_SURELY_UNSET", 42u16), 42);
        assert!(env_bool("TASKFLOW_TEST_SURELY_UNSET", true));
        assert!(env_opt("TASKFLOW_TEST_SURELY_UNSET").is_none());
    }
}
