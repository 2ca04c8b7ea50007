// src/api/http/mod.rs
// HTTP router composition

use axum::{
    Json, Router,
    http::{HeaderValue, header},
    routing::get,
};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::state::AppState;

pub mod auth;
pub mod dashboard;
pub mod extractors;
pub mod gantt;
pub mod health;
pub mod kanban;

pub use auth::create_auth_router;
pub use dashboard::create_dashboard_router;
pub use extractors::{CurrentUser, MaybeUser};
pub use gantt::create_gantt_router;
pub use health::{health_check, liveness_check};
pub use kanban::create_kanban_router;

/// Build the full application router
pub fn create_router(state: Arc<AppState>) -> Router {
    // Responses depend on the session cookie
    let no_store = SetResponseHeaderLayer::if_not_present(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-store"),
    );

    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .route("/live", get(liveness_check))
        .merge(create_auth_router())
        .merge(create_dashboard_router())
        .merge(create_kanban_router())
        .merge(create_gantt_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(no_store),
        )
        .with_state(state)
}

/// Landing page
async fn home(MaybeUser(user): MaybeUser) -> Json<serde_json::Value> {
    Json(json!({
        "name": "TaskFlow Pro",
        "user": user,
    }))
}
