// src/api/http/kanban.rs

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use std::sync::Arc;
use tracing::debug;

use super::extractors::CurrentUser;
use crate::kanban::{Board, MoveOutcome, MoveRequest};
use crate::state::AppState;

pub fn create_kanban_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard/kanban", get(get_board))
        .route("/dashboard/kanban/move", post(move_card))
}

async fn get_board(State(state): State<Arc<AppState>>, CurrentUser(user): CurrentUser) -> Json<Board> {
    Json(state.workspaces.snapshot(&user.id).await.board)
}

/// Drop a card on another column. Invalid moves leave the board untouched
/// and still return it.
async fn move_card(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<MoveRequest>,
) -> Json<Board> {
    let (outcome, board) = state
        .workspaces
        .with_workspace(&user.id, |ws| {
            let outcome = ws.board.move_task(&req.task_id, &req.from_column_id, &req.to_column_id);
            (outcome, ws.board.clone())
        })
        .await;

    if outcome != MoveOutcome::Moved {
        debug!(
            "Ignored move of {} from {} to {}: {:?}",
            req.task_id, req.from_column_id, req.to_column_id, outcome
        );
    }

    Json(board)
}
