use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use chrono::Utc;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{CreateTodoRequest, Todo, UpdateTodoRequest};
use crate::responses::{ApiResponse, CreateTodoResponse, DeleteTodoResponse, UpdateTodoResponse};
use crate::store::TodoStore;

/// An absent or blank body means "empty object"; a body that is present
/// but not valid JSON is a validation error.
fn parse_body<T: DeserializeOwned + Default>(body: Option<&String>) -> Result<T, ApiError> {
    match body {
        None => Ok(T::default()),
        Some(s) if s.trim().is_empty() => Ok(T::default()),
        Some(s) => serde_json::from_str(s).map_err(ApiError::from),
    }
}

fn path_id<'a>(request: &'a ApiGatewayProxyRequest, message: &str) -> Result<&'a str, ApiError> {
    request
        .path_parameters
        .get("id")
        .map(String::as_str)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::BadRequest(message.to_string()))
}

pub async fn create_todo<S: TodoStore>(
    request: &ApiGatewayProxyRequest,
    store: &S,
) -> Result<ApiGatewayProxyResponse, ApiError> {
    let input: CreateTodoRequest = parse_body(request.body.as_ref())?;

    let task = match input.task {
        Some(task) if !task.trim().is_empty() => task,
        _ => return Err(ApiError::BadRequest("task is required".to_string())),
    };

    let todo = Todo {
        id: Uuid::new_v4().to_string(),
        task,
        status: input.status.unwrap_or_else(|| "pending".to_string()),
        created_at: Utc::now().to_rfc3339(),
    };

    store.put_todo(&todo).await?;
    Ok(ApiResponse::created(&CreateTodoResponse::new(todo)))
}

pub async fn list_todos<S: TodoStore>(store: &S) -> Result<ApiGatewayProxyResponse, ApiError> {
    let todos = store.scan_todos().await?;
    Ok(ApiResponse::ok(&todos))
}

pub async fn update_todo<S: TodoStore>(
    request: &ApiGatewayProxyRequest,
    store: &S,
) -> Result<ApiGatewayProxyResponse, ApiError> {
    let id = path_id(request, "id (in path) is required")?;
    let input: UpdateTodoRequest = parse_body(request.body.as_ref())?;

    let patch = input.into_patch();
    if patch.is_empty() {
        return Err(ApiError::BadRequest("No fields to update".to_string()));
    }

    let updated = store.update_todo(id, &patch).await?;
    Ok(ApiResponse::ok(&UpdateTodoResponse::new(updated)))
}

pub async fn delete_todo<S: TodoStore>(
    request: &ApiGatewayProxyRequest,
    store: &S,
) -> Result<ApiGatewayProxyResponse, ApiError> {
    let id = path_id(request, "id is required")?;

    store.delete_todo(id).await?;
    Ok(ApiResponse::ok(&DeleteTodoResponse::new(id.to_string())))
}
