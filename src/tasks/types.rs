// src/tasks/types.rs
// Type definitions for dashboard tasks

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Priority level for tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskPriority {
    #[serde(rename = "Critique")]
    Critical,
    #[serde(rename = "Haute")]
    High,
    #[serde(rename = "Moyenne")]
    Medium,
    #[serde(rename = "Basse")]
    Low,
}

impl TaskPriority {
    /// Display order used by the filter dropdown
    pub const ALL: [TaskPriority; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "Critique",
            Self::High => "Haute",
            Self::Medium => "Moyenne",
            Self::Low => "Basse",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == label)
    }
}

/// Status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "À faire")]
    Todo,
    #[serde(rename = "En cours")]
    InProgress,
    #[serde(rename = "En révision")]
    InReview,
    #[serde(rename = "Terminé")]
    Done,
    #[serde(rename = "En attente")]
    OnHold,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 5] = [
        Self::Todo,
        Self::InProgress,
        Self::InReview,
        Self::Done,
        Self::OnHold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "À faire",
            Self::InProgress => "En cours",
            Self::InReview => "En révision",
            Self::Done => "Terminé",
            Self::OnHold => "En attente",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>,
    pub project_id: String,
    pub project_name: String,
    pub assignees: Vec<Assignee>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Project option offered by the task list filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub id: String,
    pub name: String,
}

/// Body of `PATCH /dashboard/tasks/{id}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskUpdate {
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        self.priority.is_none() && self.status.is_none()
    }

    /// Apply to `task`, bumping `updated_at` when anything was requested
    pub fn apply(&self, task: &mut Task, now: DateTime<Utc>) {
        if self.is_empty() {
            return;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        task.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_serde() {
        for priority in TaskPriority::ALL {
            let json = serde_json::to_string(&priority).unwrap();
            assert_eq!(json, format!("\"{}\"", priority.as_str()));
            assert_eq!(TaskPriority::from_label(priority.as_str()), Some(priority));
        }
        for status in TaskStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(TaskStatus::from_label(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_unknown_labels() {
        assert_eq!(TaskPriority::from_label("Urgente"), None);
        assert_eq!(TaskStatus::from_label("Révision"), None);
        assert!(serde_json::from_str::<TaskStatus>("\"done\"").is_err());
    }

    #[test]
    fn test_update_bumps_timestamp_only_when_requested() {
        let created = "2025-05-01T10:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let later = "2025-05-02T10:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let mut task = Task {
            id: "task1".to_string(),
            title: "Concevoir la maquette".to_string(),
            description: None,
            priority: TaskPriority::High,
            status: TaskStatus::Todo,
            due_date: None,
            project_id: "project1".to_string(),
            project_name: "Application Mobile".to_string(),
            assignees: vec![],
            created_at: created,
            updated_at: created,
        };

        TaskUpdate::default().apply(&mut task, later);
        assert_eq!(task.updated_at, created);

        let update = TaskUpdate {
            priority: None,
            status: Some(TaskStatus::InReview),
        };
        update.apply(&mut task, later);
        assert_eq!(task.status, TaskStatus::InReview);
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(task.updated_at, later);
    }
}
