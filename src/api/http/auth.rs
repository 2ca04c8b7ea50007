// src/api/http/auth.rs
// Signup, login, and logout

use axum::{
    Form, Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use super::extractors::{MaybeUser, logout_response};
use crate::auth::validation::{
    EMAIL_TAKEN, INVALID_CREDENTIALS, MIN_PASSWORD_LENGTH, password_strength, safe_redirect,
    strength_label, validate_credentials,
};
use crate::auth::{ActionErrors, JoinForm, LoginForm};
use crate::error::AppError;
use crate::state::AppState;

/// Where a successful signup or login lands by default
pub const DEFAULT_REDIRECT: &str = "/dashboard";

pub fn create_auth_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/join", get(join_page).post(join))
        .route("/join/strength", post(join_strength))
        .route("/login", get(login_page).post(login))
        .route("/logout", post(logout))
}

fn rejected(errors: ActionErrors) -> Response {
    (StatusCode::BAD_REQUEST, Json(errors)).into_response()
}

/// Set the session cookie and follow `redirect_to`
fn sign_in(state: &AppState, user_id: &str, remember: bool, redirect_to: &str) -> Result<Response, AppError> {
    let cookie = state.sessions.commit_cookie(user_id, remember)?;
    Ok(([(header::SET_COOKIE, cookie)], Redirect::to(redirect_to)).into_response())
}

async fn join_page(MaybeUser(user): MaybeUser) -> Response {
    if user.is_some() {
        return Redirect::to("/").into_response();
    }
    Json(json!({ "minPasswordLength": MIN_PASSWORD_LENGTH })).into_response()
}

async fn join(
    State(state): State<Arc<AppState>>,
    Form(form): Form<JoinForm>,
) -> Result<Response, AppError> {
    let redirect_to = safe_redirect(form.redirect_to.as_deref(), DEFAULT_REDIRECT);

    let (email, password) =
        match validate_credentials(form.email.as_deref(), form.password.as_deref()) {
            Ok(pair) => pair,
            Err(errors) => return Ok(rejected(errors)),
        };

    if state.users.get_user_by_email(email).await?.is_some() {
        return Ok(rejected(ActionErrors::email(EMAIL_TAKEN)));
    }

    let user = match state.users.create_user(email, password).await {
        Ok(user) => user,
        // Lost a race with a concurrent signup
        Err(AppError::DuplicateEmail(_)) => return Ok(rejected(ActionErrors::email(EMAIL_TAKEN))),
        Err(e) => return Err(e),
    };

    info!("New account {}", user.id);
    sign_in(&state, &user.id, false, &redirect_to)
}

#[derive(Debug, Deserialize)]
struct StrengthForm {
    #[serde(default)]
    password: String,
}

/// Live strength meter under the signup password field
async fn join_strength(Form(form): Form<StrengthForm>) -> Json<serde_json::Value> {
    let score = password_strength(&form.password);
    Json(json!({ "score": score, "label": strength_label(score) }))
}

async fn login_page(MaybeUser(user): MaybeUser) -> Response {
    if user.is_some() {
        return Redirect::to("/").into_response();
    }
    Json(json!({})).into_response()
}

async fn login(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let redirect_to = safe_redirect(form.redirect_to.as_deref(), DEFAULT_REDIRECT);

    let (email, password) =
        match validate_credentials(form.email.as_deref(), form.password.as_deref()) {
            Ok(pair) => pair,
            Err(errors) => return Ok(rejected(errors)),
        };

    let Some(user) = state.users.verify_login(email, password).await? else {
        return Ok(rejected(ActionErrors::email(INVALID_CREDENTIALS)));
    };

    sign_in(&state, &user.id, form.remember_me(), &redirect_to)
}

async fn logout(State(state): State<Arc<AppState>>, MaybeUser(user): MaybeUser) -> Response {
    if let Some(user) = user {
        state.workspaces.discard(&user.id).await;
        info!("User {} signed out", user.id);
    }
    logout_response(&state)
}
