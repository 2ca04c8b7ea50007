// src/projects.rs
// Project list and its status filter

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Statuses offered by the project filter, in display order
pub const PROJECT_STATUSES: [&str; 5] = ["En cours", "Planifié", "Terminé", "En attente", "Annulé"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMember {
    pub id: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCounts {
    pub total: u32,
    pub completed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub progress: u8,
    pub members: Vec<ProjectMember>,
    pub tasks_count: TaskCounts,
}

/// Sidebar entry on the dashboard home
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    pub status: String,
    pub progress: u8,
}

impl From<&Project> for ProjectSummary {
    fn from(p: &Project) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            status: p.status.clone(),
            progress: p.progress,
        }
    }
}

/// Query string of `GET /dashboard/projects`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectFilter {
    pub status: Option<String>,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        match self.status.as_deref() {
            None | Some("") => true,
            Some(s) if s.eq_ignore_ascii_case("all") => true,
            Some(s) => project.status.to_lowercase() == s.to_lowercase(),
        }
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixtures;

    fn filter(status: &str) -> ProjectFilter {
        ProjectFilter {
            status: Some(status.to_string()),
        }
    }

    #[test]
    fn test_all_matches_everything() {
        let projects = Fixtures::load().unwrap().projects;
        assert_eq!(filter("all").apply(&projects).len(), 4);
        assert_eq!(ProjectFilter::default().apply(&projects).len(), 4);
    }

    #[test]
    fn test_status_is_case_insensitive() {
        let projects = Fixtures::load().unwrap().projects;
        let in_progress = filter("EN COURS").apply(&projects);
        let ids: Vec<&str> = in_progress.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);

        // Non-ASCII characters fold too
        assert_eq!(filter("PLANIFIÉ").apply(&projects).len(), 1);
    }

    #[test]
    fn test_status_without_projects() {
        let projects = Fixtures::load().unwrap().projects;
        assert!(filter("Annulé").apply(&projects).is_empty());
    }

    #[test]
    fn test_open_ended_project() {
        let projects = Fixtures::load().unwrap().projects;
        let crm = projects.iter().find(|p| p.id == "4").unwrap();
        assert!(crm.end_date.is_none());
        assert_eq!(ProjectSummary::from(crm).status, "En attente");
    }
}
