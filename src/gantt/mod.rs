// src/gantt/mod.rs
// Gantt chart model and timeline layout

pub mod labels;
pub mod layout;
pub mod model;

pub use layout::{Bar, DependencyCurve, GanttLayout, HeaderTick, TimeScale};
pub use model::{GanttProject, GanttTask};
