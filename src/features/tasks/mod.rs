pub mod model;
pub mod repo;

use crate::errors::ApiError;
use crate::response::{parse_json_body, Data};
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::put;
use axum::{Json, Router};
use model::{DeletedTask, Task, TaskChanges};
use serde_json::Value;

pub fn tasks_router() -> Router<AppState> {
    Router::new().route("/{id}", put(update_task_handler).delete(delete_task_handler))
}

// the original route patterns only matched numeric ids, so a non-numeric
// segment falls through to the 404 contract rather than a 400
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| ApiError::NotFound)
}

// GET /api/projects/{project_id}/tasks
pub async fn list_project_tasks_handler(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<Data<Vec<Task>>>, ApiError> {
    let project_id = parse_id(&project_id)?;

    let tasks = repo::list_project_tasks(&state.pool, project_id).await?;

    Ok(Json(Data { data: tasks }))
}

// POST /api/projects/{project_id}/tasks
pub async fn create_project_task_handler(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    body: String,
) -> Result<(StatusCode, Json<Data<Option<Task>>>), ApiError> {
    let project_id = parse_id(&project_id)?;
    let body = parse_json_body(&body)?;

    let title = body
        .as_ref()
        .and_then(|b| b.get("title"))
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .ok_or(ApiError::Validation("title required"))?
        .to_owned();

    let task = repo::insert_task(&state.pool, project_id, &title).await?;

    Ok((StatusCode::CREATED, Json(Data { data: task })))
}

async fn update_task_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: String,
) -> Result<Json<Data<Option<Task>>>, ApiError> {
    let id = parse_id(&id)?;
    let body = parse_json_body(&body)?;

    let changes = TaskChanges::from_body(body.as_ref());
    if changes.is_empty() {
        return Err(ApiError::Validation("nothing to update"));
    }

    let task = repo::update_task(&state.pool, id, &changes).await?;

    Ok(Json(Data { data: task }))
}

async fn delete_task_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Data<DeletedTask>>, ApiError> {
    let id = parse_id(&id)?;

    repo::delete_task(&state.pool, id).await?;

    Ok(Json(Data {
        data: DeletedTask { id },
    }))
}
