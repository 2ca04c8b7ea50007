// src/auth/validation.rs
// Field-level validation for the signup and login forms

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub const MIN_PASSWORD_LENGTH: usize = 8;

pub const INVALID_EMAIL: &str = "L'adresse email est invalide";
pub const PASSWORD_REQUIRED: &str = "Le mot de passe est requis";
pub const PASSWORD_TOO_SHORT: &str = "Le mot de passe doit contenir au moins 8 caractères";
pub const EMAIL_TAKEN: &str = "Un utilisateur avec cette adresse email existe déjà";
pub const INVALID_CREDENTIALS: &str = "Email ou mot de passe invalide";

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("valid regex"));

/// Per-field messages rendered inline next to the form inputs
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Response body of a rejected form submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionErrors {
    pub errors: FieldErrors,
}

impl ActionErrors {
    pub fn email(message: &str) -> Self {
        Self {
            errors: FieldErrors {
                email: Some(message.to_string()),
                password: None,
            },
        }
    }

    pub fn password(message: &str) -> Self {
        Self {
            errors: FieldErrors {
                email: None,
                password: Some(message.to_string()),
            },
        }
    }
}

/// Email must look like `local@domain` and be longer than three characters
pub fn validate_email(email: Option<&str>) -> bool {
    match email {
        Some(e) => e.chars().count() > 3 && EMAIL_SHAPE.is_match(e),
        None => false,
    }
}

/// Check the email/password pair shared by signup and login. Returns the
/// first failing field, email first.
pub fn validate_credentials<'a>(
    email: Option<&'a str>,
    password: Option<&'a str>,
) -> Result<(&'a str, &'a str), ActionErrors> {
    let email = match email {
        Some(e) if validate_email(Some(e)) => e,
        _ => return Err(ActionErrors::email(INVALID_EMAIL)),
    };

    match password {
        None | Some("") => Err(ActionErrors::password(PASSWORD_REQUIRED)),
        Some(p) if p.chars().count() < MIN_PASSWORD_LENGTH => {
            Err(ActionErrors::password(PASSWORD_TOO_SHORT))
        }
        Some(p) => Ok((email, p)),
    }
}

/// Only same-site absolute paths are followed after a form submission.
/// Anything else (missing, relative, protocol-relative, control
/// characters) yields `default`.
pub fn safe_redirect(to: Option<&str>, default: &str) -> String {
    match to {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.chars().any(char::is_control) =>
        {
            path.to_string()
        }
        _ => default.to_string(),
    }
}

/// Strength score (0..=4) shown next to the signup password field
pub fn password_strength(password: &str) -> u8 {
    let mut score = 0;
    if password.chars().count() >= MIN_PASSWORD_LENGTH {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }
    score
}

pub fn strength_label(score: u8) -> &'static str {
    match score {
        0 => "Entrez un mot de passe",
        1 => "Faible",
        2 => "Moyen",
        3 => "Fort",
        _ => "Très fort",
    }
}
