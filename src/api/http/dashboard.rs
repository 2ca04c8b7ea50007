// src/api/http/dashboard.rs
// Dashboard home, project list, and task list

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, patch},
};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use super::extractors::CurrentUser;
use crate::auth::User;
use crate::error::{AppError, Result};
use crate::projects::{PROJECT_STATUSES, Project, ProjectFilter, ProjectSummary};
use crate::state::AppState;
use crate::tasks::{ProjectRef, Task, TaskFilter, TaskPriority, TaskStatus, TaskUpdate, distinct_projects};

pub fn create_dashboard_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard", get(dashboard_home))
        .route("/dashboard/projects", get(list_projects))
        .route("/dashboard/tasks", get(list_tasks))
        .route("/dashboard/tasks/{id}", patch(update_task))
}

#[derive(Debug, Serialize)]
pub struct StatusCount {
    pub status: TaskStatus,
    pub count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub user: User,
    pub projects: Vec<ProjectSummary>,
    pub task_counts: Vec<StatusCount>,
}

async fn dashboard_home(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> Json<DashboardView> {
    let workspace = state.workspaces.snapshot(&user.id).await;

    let task_counts = TaskStatus::ALL
        .into_iter()
        .map(|status| StatusCount {
            status,
            count: workspace.tasks.iter().filter(|t| t.status == status).count(),
        })
        .collect();

    Json(DashboardView {
        projects: state.fixtures.projects.iter().map(ProjectSummary::from).collect(),
        task_counts,
        user,
    })
}

#[derive(Debug, Serialize)]
pub struct ProjectsView {
    pub projects: Vec<Project>,
    pub statuses: &'static [&'static str],
}

async fn list_projects(
    State(state): State<Arc<AppState>>,
    CurrentUser(_user): CurrentUser,
    Query(filter): Query<ProjectFilter>,
) -> Json<ProjectsView> {
    Json(ProjectsView {
        projects: filter.apply(&state.fixtures.projects).into_iter().cloned().collect(),
        statuses: &PROJECT_STATUSES,
    })
}

#[derive(Debug, Serialize)]
pub struct TasksView {
    pub tasks: Vec<Task>,
    pub priorities: Vec<&'static str>,
    pub statuses: Vec<&'static str>,
    pub projects: Vec<ProjectRef>,
}

async fn list_tasks(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Query(filter): Query<TaskFilter>,
) -> Json<TasksView> {
    let workspace = state.workspaces.snapshot(&user.id).await;

    Json(TasksView {
        tasks: filter.apply(&workspace.tasks).into_iter().cloned().collect(),
        priorities: TaskPriority::ALL.iter().map(TaskPriority::as_str).collect(),
        statuses: TaskStatus::ALL.iter().map(TaskStatus::as_str).collect(),
        // Dropdown options come from the whole list, not the filtered one
        projects: distinct_projects(&workspace.tasks),
    })
}

async fn update_task(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(task_id): Path<String>,
    Json(update): Json<TaskUpdate>,
) -> Result<Json<Task>> {
    if update.is_empty() {
        debug!("Empty update for task {}", task_id);
    }

    state
        .workspaces
        .with_workspace(&user.id, |ws| ws.update_task(&task_id, &update, Utc::now()).cloned())
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("task {task_id}")))
}
