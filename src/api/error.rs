use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::error::{IngestError, PersistenceError};

/// 接口错误
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("未登录")]
    Unauthorized,
    #[error("没有权限")]
    Forbidden,
    #[error("题目不存在")]
    NotFound,
    #[error(transparent)]
    Ingest(#[from] IngestError),
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        ApiError::Ingest(err.into())
    }
}

/// 错误响应体
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "AUTHENTICATION_REQUIRED"),
            ApiError::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Ingest(IngestError::MalformedInput(_)) => (StatusCode::BAD_REQUEST, "MALFORMED_INPUT"),
            ApiError::Ingest(IngestError::Persistence(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "PERSISTENCE_ERROR")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        // 数据库细节只写日志，不返回给调用方
        let message = match &self {
            ApiError::Ingest(IngestError::Persistence(e)) => {
                error!("服务器错误: {}", e);
                "服务器错误".to_string()
            }
            other => other.to_string(),
        };
        (
            status,
            Json(ErrorResponse {
                code: code.to_string(),
                message,
            }),
        )
            .into_response()
    }
}
