use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::error::{ApiResult, AppError};
use crate::service::TodoServiceHandle;
use shared::api::{CreateTodoRequest, TodoResponse, UpdateTodoRequest};

pub async fn list_todos(
    State(service): State<TodoServiceHandle>,
) -> ApiResult<Json<Vec<TodoResponse>>> {
    let todos = service.list_all().await?;

    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

pub async fn get_todo(
    State(service): State<TodoServiceHandle>,
    Path(id): Path<i64>,
) -> ApiResult<Json<TodoResponse>> {
    let todo = service.get_by_id(id).await?.ok_or(AppError::NotFound)?;

    Ok(Json(TodoResponse::from(todo)))
}

pub async fn create_todo(
    State(service): State<TodoServiceHandle>,
    Json(payload): Json<CreateTodoRequest>,
) -> ApiResult<(StatusCode, Json<TodoResponse>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let todo = service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(TodoResponse::from(todo))))
}

pub async fn update_todo(
    State(service): State<TodoServiceHandle>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTodoRequest>,
) -> ApiResult<Json<TodoResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let todo = service
        .update(id, payload)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(TodoResponse::from(todo)))
}

pub async fn delete_todo(
    State(service): State<TodoServiceHandle>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}
