use aws_lambda_events::encodings::Body;
use aws_lambda_events::event::apigw::ApiGatewayProxyResponse;
use aws_lambda_events::http::{header::CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;

use crate::models::Todo;

#[derive(Debug, Serialize)]
pub struct CreateTodoResponse {
    pub message: &'static str,
    pub item: Todo,
}

impl CreateTodoResponse {
    pub fn new(item: Todo) -> Self {
        Self {
            message: "ToDo created",
            item,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateTodoResponse {
    pub message: &'static str,
    pub item: Todo,
}

impl UpdateTodoResponse {
    pub fn new(item: Todo) -> Self {
        Self {
            message: "ToDo updated",
            item,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteTodoResponse {
    pub message: &'static str,
    pub deleted_id: String,
}

impl DeleteTodoResponse {
    pub fn new(deleted_id: String) -> Self {
        Self {
            message: "ToDo deleted",
            deleted_id,
        }
    }
}

pub struct ApiResponse;

impl ApiResponse {
    pub fn ok<T: Serialize>(data: &T) -> ApiGatewayProxyResponse {
        Self::json(200, data)
    }

    pub fn created<T: Serialize>(data: &T) -> ApiGatewayProxyResponse {
        Self::json(201, data)
    }

    pub fn error(status_code: i64, message: &str) -> ApiGatewayProxyResponse {
        Self::json(status_code, &serde_json::json!({ "error": message }))
    }

    fn json<T: Serialize>(status_code: i64, data: &T) -> ApiGatewayProxyResponse {
        ApiGatewayProxyResponse {
            status_code,
            headers: Self::default_headers(),
            multi_value_headers: HeaderMap::new(),
            body: Some(Body::Text(
                serde_json::to_string(data).unwrap_or_default(),
            )),
            is_base64_encoded: false,
        }
    }

    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }
}
