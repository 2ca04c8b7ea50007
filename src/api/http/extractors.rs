// src/api/http/extractors.rs
// Session extractors guarding the dashboard routes

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tracing::warn;

use crate::auth::User;
use crate::state::AppState;

/// The signed-in user. Anonymous requests are redirected to the login page
/// with the requested path in `redirectTo`.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// The signed-in user, if any. Never rejects on a missing session.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<User>);

pub fn login_redirect(path: &str) -> Redirect {
    Redirect::to(&format!("/login?redirectTo={}", urlencoding::encode(path)))
}

/// Clear the session cookie and send the browser home
pub fn logout_response(state: &AppState) -> Response {
    (
        [(header::SET_COOKIE, state.sessions.destroy_cookie())],
        Redirect::to("/"),
    )
        .into_response()
}

impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let Some(user_id) = state.sessions.user_id(&parts.headers) else {
            return Err(login_redirect(parts.uri.path()).into_response());
        };

        match state.users.get_user_by_id(&user_id).await {
            Ok(Some(user)) => Ok(CurrentUser(user)),
            Ok(None) => {
                // Signed cookie for an account that has since been deleted
                warn!("Session refers to missing user {}", user_id);
                state.workspaces.discard(&user_id).await;
                Err(logout_response(state))
            }
            Err(e) => Err(e.into_response()),
        }
    }
}

impl FromRequestParts<Arc<AppState>> for MaybeUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let Some(user_id) = state.sessions.user_id(&parts.headers) else {
            return Ok(MaybeUser(None));
        };

        state
            .users
            .get_user_by_id(&user_id)
            .await
            .map(MaybeUser)
            .map_err(IntoResponse::into_response)
    }
}
