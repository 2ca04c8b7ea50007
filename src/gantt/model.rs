// src/gantt/model.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BAR_COLOR: &str = "#4F46E5";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GanttTask {
    pub id: String,
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub progress: u8,
    /// Ids of predecessor tasks. Unknown ids are tolerated.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    pub assignees: Vec<String>,
    pub color: Option<String>,
}

impl GanttTask {
    pub fn color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_BAR_COLOR)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GanttProject {
    pub id: String,
    pub name: String,
    pub tasks: Vec<GanttTask>,
}

impl GanttProject {
    pub fn task(&self, id: &str) -> Option<&GanttTask> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Predecessors of `task` that exist in this project, in declared order
    pub fn resolved_dependencies<'a>(&'a self, task: &GanttTask) -> Vec<&'a GanttTask> {
        task.dependencies
            .iter()
            .filter_map(|id| self.task(id))
            .collect()
    }
}
