// src/fixtures.rs
// Demo data served in place of project/task/board tables

use crate::error::Result;
use crate::gantt::GanttProject;
use crate::kanban::Board;
use crate::projects::Project;
use crate::tasks::Task;

const PROJECTS_JSON: &str = include_str!("../fixtures/projects.json");
const TASKS_JSON: &str = include_str!("../fixtures/tasks.json");
const KANBAN_JSON: &str = include_str!("../fixtures/kanban.json");
const GANTT_JSON: &str = include_str!("../fixtures/gantt.json");

/// Immutable fixture set, parsed once at startup
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub board: Board,
    pub gantt: GanttProject,
}

impl Fixtures {
    pub fn load() -> Result<Self> {
        Ok(Self {
            projects: serde_json::from_str(PROJECTS_JSON)?,
            tasks: serde_json::from_str(TASKS_JSON)?,
            board: serde_json::from_str(KANBAN_JSON)?,
            gantt: serde_json::from_str(GANTT_JSON)?,
        })
    }
}
