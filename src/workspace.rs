// src/workspace.rs
// Per-user working copies of the editable fixture data

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::fixtures::Fixtures;
use crate::kanban::Board;
use crate::tasks::{Task, TaskUpdate};

/// A signed-in user's board and task list. Edits never leave it.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub board: Board,
    pub tasks: Vec<Task>,
}

impl Workspace {
    pub fn from_fixtures(fixtures: &Fixtures) -> Self {
        Self {
            board: fixtures.board.clone(),
            tasks: fixtures.tasks.clone(),
        }
    }

    /// Apply `update` to a task; `None` when no task has that id
    pub fn update_task(&mut self, task_id: &str, update: &TaskUpdate, now: DateTime<Utc>) -> Option<&Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == task_id)?;
        update.apply(task, now);
        Some(task)
    }
}

/// Workspaces keyed by user id, seeded lazily from the fixtures
#[derive(Clone)]
pub struct WorkspaceRegistry {
    fixtures: Arc<Fixtures>,
    workspaces: Arc<RwLock<HashMap<String, Workspace>>>,
}

impl WorkspaceRegistry {
    pub fn new(fixtures: Arc<Fixtures>) -> Self {
        Self {
            fixtures,
            workspaces: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Current state for `user_id` without creating an entry
    pub async fn snapshot(&self, user_id: &str) -> Workspace {
        match self.workspaces.read().await.get(user_id) {
            Some(ws) => ws.clone(),
            None => Workspace::from_fixtures(&self.fixtures),
        }
    }

    /// Run `f` against the user's workspace, creating it on first write
    pub async fn with_workspace<R>(&self, user_id: &str, f: impl FnOnce(&mut Workspace) -> R) -> R {
        let mut guard = self.workspaces.write().await;
        let workspace = guard.entry(user_id.to_string()).or_insert_with(|| {
            debug!("Seeding workspace for user {}", user_id);
            Workspace::from_fixtures(&self.fixtures)
        });
        f(workspace)
    }

    /// Forget the user's edits (logout)
    pub async fn discard(&self, user_id: &str) -> bool {
        self.workspaces.write().await.remove(user_id).is_some()
    }

    pub async fn active_count(&self) -> usize {
        self.workspaces.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kanban::MoveOutcome;
    use crate::tasks::TaskStatus;

    fn registry() -> WorkspaceRegistry {
        WorkspaceRegistry::new(Arc::new(Fixtures::load().unwrap()))
    }

    #[tokio::test]
    async fn test_edits_are_isolated_per_user() {
        let registry = registry();
        let outcome = registry
            .with_workspace("alice", |ws| ws.board.move_task("task1", "col1", "col4"))
            .await;
        assert_eq!(outcome, MoveOutcome::Moved);

        let alice = registry.snapshot("alice").await;
        let bob = registry.snapshot("bob").await;
        assert_eq!(alice.board.column("col4").unwrap().tasks.len(), 2);
        assert_eq!(bob.board.column("col4").unwrap().tasks.len(), 1);
    }

    #[tokio::test]
    async fn test_snapshot_does_not_create_entries() {
        let registry = registry();
        registry.snapshot("carol").await;
        assert_eq!(registry.active_count().await, 0);
    }

    #[tokio::test]
    async fn test_discard_resets_to_fixtures() {
        let registry = registry();
        registry
            .with_workspace("alice", |ws| ws.board.move_task("task1", "col1", "col2"))
            .await;
        assert!(registry.discard("alice").await);
        assert!(!registry.discard("alice").await);

        let fresh = registry.snapshot("alice").await;
        assert_eq!(fresh.board.column("col1").unwrap().tasks.len(), 2);
    }

    #[tokio::test]
    async fn test_update_task() {
        let registry = registry();
        let now = Utc::now();
        let update = TaskUpdate {
            priority: None,
            status: Some(TaskStatus::Done),
        };

        let updated = registry
            .with_workspace("alice", |ws| ws.update_task("task2", &update, now).cloned())
            .await
            .unwrap();
        assert_eq!(updated.status, TaskStatus::Done);
        assert_eq!(updated.updated_at, now);

        let missing = registry
            .with_workspace("alice", |ws| ws.update_task("task99", &update, now).cloned())
            .await;
        assert!(missing.is_none());
    }
}
