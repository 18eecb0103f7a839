pub mod model;
pub mod repo;

use crate::errors::ApiError;
use crate::features::tasks;
use crate::response::{parse_json_body, Data};
use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use model::{NewProject, Project};

pub fn projects_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_projects_handler).post(create_project_handler))
        .route(
            "/{project_id}/tasks",
            get(tasks::list_project_tasks_handler).post(tasks::create_project_task_handler),
        )
}

async fn list_projects_handler(
    State(state): State<AppState>,
) -> Result<Json<Data<Vec<Project>>>, ApiError> {
    let projects = repo::list_projects(&state.pool).await?;

    Ok(Json(Data { data: projects }))
}

async fn create_project_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<Data<Option<Project>>>), ApiError> {
    let body = parse_json_body(&body)?;

    let new_project = NewProject::from_body(body.as_ref())
        .ok_or(ApiError::Validation("name required"))?;

    let project = repo::insert_project(&state.pool, &new_project).await?;

    Ok((StatusCode::CREATED, Json(Data { data: project })))
}
