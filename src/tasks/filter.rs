// src/tasks/filter.rs
// Search and dropdown filters for the task list

use serde::Deserialize;

use super::types::{ProjectRef, Task};

/// Query string of `GET /dashboard/tasks`. Empty values match everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskFilter {
    pub search: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub project: Option<String>,
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        let matches_search = match active(&self.search) {
            Some(term) => {
                let term = term.to_lowercase();
                task.title.to_lowercase().contains(&term)
                    || task
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&term))
            }
            None => true,
        };

        matches_search
            && active(&self.priority).is_none_or(|p| task.priority.as_str() == p)
            && active(&self.status).is_none_or(|s| task.status.as_str() == s)
            && active(&self.project).is_none_or(|p| task.project_id == p)
    }

    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|t| self.matches(t)).collect()
    }
}

/// Distinct projects referenced by `tasks`, in first-seen order
pub fn distinct_projects(tasks: &[Task]) -> Vec<ProjectRef> {
    let mut projects: Vec<ProjectRef> = Vec::new();
    for task in tasks {
        if !projects.iter().any(|p| p.id == task.project_id) {
            projects.push(ProjectRef {
                id: task.project_id.clone(),
                name: task.project_name.clone(),
            });
        }
    }
    projects
}
