use crate::dtos::{CreateGoalRequest, CreateGoalResponse, GoalResponse, ListGoalsResponse};
use crate::error::AppError;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

pub async fn list_goals(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::info!("loading goals");

    let goals = state.store.list().await.map_err(|e| {
        tracing::error!(error = %e, "failed to load goals");
        AppError::PersistenceError("Failed to load goals.")
    })?;

    tracing::info!(count = goals.len(), "loaded goals");
    Ok(Json(ListGoalsResponse {
        goals: goals.into_iter().map(GoalResponse::from).collect(),
    }))
}

pub async fn create_goal(
    State(state): State<AppState>,
    Json(payload): Json<CreateGoalRequest>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("storing goal");

    // Validation trims; the stored text is the text as supplied.
    let text = payload.text.unwrap_or_default();
    if text.trim().is_empty() {
        tracing::warn!("rejected goal with missing or blank text");
        return Err(AppError::ValidationError("Invalid goal text.".to_string()));
    }

    let goal = state.store.insert(&text).await.map_err(|e| {
        tracing::error!(error = %e, "failed to save goal");
        AppError::PersistenceError("Failed to save goal.")
    })?;

    tracing::info!(id = %goal.id, "stored new goal");
    Ok((
        StatusCode::CREATED,
        Json(CreateGoalResponse {
            message: "Goal saved".to_string(),
            goal: goal.into(),
        }),
    ))
}

pub async fn delete_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(id = %id, "deleting goal");

    state.store.delete(&id).await.map_err(|e| {
        tracing::error!(error = %e, id = %id, "failed to delete goal");
        AppError::PersistenceError("Failed to delete goal.")
    })?;

    tracing::info!(id = %id, "deleted goal");
    Ok(Json(json!({ "message": "Deleted goal!" })))
}
