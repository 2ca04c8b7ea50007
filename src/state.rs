// src/state.rs

use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::info;

use crate::auth::{SessionManager, UserStore};
use crate::config::{SessionConfig, TaskflowConfig};
use crate::db;
use crate::error::Result;
use crate::fixtures::Fixtures;
use crate::workspace::WorkspaceRegistry;

/// Shared application state
pub struct AppState {
    pub pool: SqlitePool,
    pub users: UserStore,
    pub sessions: SessionManager,
    pub fixtures: Arc<Fixtures>,
    pub workspaces: WorkspaceRegistry,
}

impl AppState {
    /// Build state around an already migrated pool
    pub fn new(pool: SqlitePool, session: &SessionConfig) -> Result<Self> {
        let fixtures = Arc::new(Fixtures::load()?);

        Ok(Self {
            users: UserStore::new(pool.clone()),
            sessions: SessionManager::new(session),
            workspaces: WorkspaceRegistry::new(fixtures.clone()),
            fixtures,
            pool,
        })
    }
}

/// Connect, migrate, and assemble the state for the HTTP server
pub async fn create_app_state(config: &TaskflowConfig) -> Result<Arc<AppState>> {
    let pool = db::create_pool(&config.database).await?;
    db::run_migrations(&pool).await?;

    let state = AppState::new(pool, &config.session)?;
    info!(
        "Loaded fixtures: {} projects, {} tasks",
        state.fixtures.projects.len(),
        state.fixtures.tasks.len()
    );

    Ok(Arc::new(state))
}
