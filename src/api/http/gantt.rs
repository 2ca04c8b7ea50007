// src/api/http/gantt.rs

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::extractors::CurrentUser;
use crate::error::{AppError, Result};
use crate::gantt::{GanttLayout, GanttProject, GanttTask, TimeScale};
use crate::state::AppState;

pub fn create_gantt_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard/gantt", get(gantt_chart))
        .route("/dashboard/gantt/tasks/{id}", get(gantt_task))
}

#[derive(Debug, Default, Deserialize)]
pub struct ScaleQuery {
    pub scale: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GanttView {
    pub project: GanttProject,
    pub scale: TimeScale,
    /// Absent when the project has no tasks
    pub layout: Option<GanttLayout>,
}

async fn gantt_chart(
    State(state): State<Arc<AppState>>,
    CurrentUser(_user): CurrentUser,
    Query(query): Query<ScaleQuery>,
) -> Json<GanttView> {
    let project = &state.fixtures.gantt;
    let scale = TimeScale::from_query(query.scale.as_deref());

    Json(GanttView {
        layout: GanttLayout::compute(&project.tasks, scale),
        project: project.clone(),
        scale,
    })
}

#[derive(Debug, Serialize)]
pub struct TaskDetail {
    pub task: GanttTask,
    pub dependencies: Vec<GanttTask>,
}

/// Detail panel for a clicked bar
async fn gantt_task(
    State(state): State<Arc<AppState>>,
    CurrentUser(_user): CurrentUser,
    Path(task_id): Path<String>,
) -> Result<Json<TaskDetail>> {
    let project = &state.fixtures.gantt;
    let task = project
        .task(&task_id)
        .ok_or_else(|| AppError::NotFound(format!("gantt task {task_id}")))?;

    Ok(Json(TaskDetail {
        dependencies: project.resolved_dependencies(task).into_iter().cloned().collect(),
        task: task.clone(),
    }))
}
