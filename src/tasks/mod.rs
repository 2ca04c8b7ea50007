// src/tasks/mod.rs
// Task list: types, filters, and edits

pub mod filter;
pub mod types;

pub use filter::{TaskFilter, distinct_projects};
pub use types::{Assignee, ProjectRef, Task, TaskPriority, TaskStatus, TaskUpdate};
