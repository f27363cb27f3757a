use aws_lambda_events::event::apigw::ApiGatewayProxyResponse;
use thiserror::Error;

use crate::responses::ApiResponse;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("ToDo not found")]
    NotFound,

    #[error("{0}")]
    BadRequest(String),

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> i64 {
        match self {
            ApiError::NotFound => 404,
            ApiError::BadRequest(_) => 400,
            ApiError::MethodNotAllowed => 405,
            ApiError::Internal(_) => 500,
        }
    }

    pub fn into_response(self) -> ApiGatewayProxyResponse {
        ApiResponse::error(self.status_code(), &self.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest(format!("Invalid JSON: {e}"))
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { .. } => ApiError::NotFound,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_not_found_maps_to_404() {
        let err: ApiError = StoreError::NotFound {
            id: "abc".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn store_failure_maps_to_500_with_raw_message() {
        let err: ApiError = StoreError::Unavailable {
            message: "connection refused".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), 500);
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn bad_request_body_is_the_message_verbatim() {
        let response = ApiError::BadRequest("task is required".to_string()).into_response();
        assert_eq!(response.status_code, 400);
        let body = match response.body.unwrap() {
            aws_lambda_events::encodings::Body::Text(text) => text,
            other => panic!("unexpected body: {other:?}"),
        };
        assert_eq!(body, r#"{"error":"task is required"}"#);
    }
}
