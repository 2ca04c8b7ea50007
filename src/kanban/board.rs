// src/kanban/board.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::tasks::{Assignee, TaskPriority};

/// A card on the board. `status` mirrors the owning column's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub status: String,
    pub position: usize,
    pub due_date: Option<NaiveDate>,
    pub assignees: Vec<Assignee>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub name: String,
    pub position: usize,
    pub color: String,
    pub tasks: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
    pub columns: Vec<Column>,
}

/// What `Board::move_task` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    SameColumn,
    ColumnNotFound,
    TaskNotFound,
}

/// Body of `POST /dashboard/kanban/move`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub task_id: String,
    pub from_column_id: String,
    pub to_column_id: String,
}

impl Board {
    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Move a card to the end of another column, relabelling its status.
    /// The board is left untouched unless the outcome is `Moved`.
    pub fn move_task(&mut self, task_id: &str, from_column_id: &str, to_column_id: &str) -> MoveOutcome {
        if from_column_id == to_column_id {
            return MoveOutcome::SameColumn;
        }

        let from = self.columns.iter().position(|c| c.id == from_column_id);
        let to = self.columns.iter().position(|c| c.id == to_column_id);
        let (Some(from), Some(to)) = (from, to) else {
            return MoveOutcome::ColumnNotFound;
        };

        let Some(index) = self.columns[from].tasks.iter().position(|t| t.id == task_id) else {
            return MoveOutcome::TaskNotFound;
        };

        let mut card = self.columns[from].tasks.remove(index);
        let destination = &mut self.columns[to];
        card.status = destination.name.clone();
        card.position = destination.tasks.len();
        destination.tasks.push(card);

        MoveOutcome::Moved
    }
}
