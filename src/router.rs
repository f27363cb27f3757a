use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};

use crate::error::ApiError;
use crate::handlers;
use crate::store::TodoStore;

/// Dispatches on the HTTP verb and converts every escaping error into its
/// response envelope, so the caller always gets a well-formed response.
pub async fn route<S: TodoStore>(
    request: ApiGatewayProxyRequest,
    store: &S,
) -> ApiGatewayProxyResponse {
    let method = request.http_method.clone();
    tracing::info!(method = %method, path = ?request.path, "incoming request");

    match dispatch(&request, store).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, method = %method, "request failed");
            e.into_response()
        }
    }
}

async fn dispatch<S: TodoStore>(
    request: &ApiGatewayProxyRequest,
    store: &S,
) -> Result<ApiGatewayProxyResponse, ApiError> {
    match request.http_method.as_str() {
        "POST" => handlers::create_todo(request, store).await,
        "GET" => handlers::list_todos(store).await,
        "PUT" => handlers::update_todo(request, store).await,
        "DELETE" => handlers::delete_todo(request, store).await,
        _ => Err(ApiError::MethodNotAllowed),
    }
}
