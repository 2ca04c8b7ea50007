// src/kanban/mod.rs
// Kanban board model and drag-and-drop moves

pub mod board;

pub use board::{Board, Card, Column, MoveOutcome, MoveRequest};
