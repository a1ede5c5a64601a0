//! 当前用户提取
//!
//! 鉴权中间件在上游完成，这里只读取它写入的 `X-User-Id` 头

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::error::ApiError;

pub const USER_ID_HEADER: &str = "X-User-Id";

/// 已登录用户
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<i64>().ok())
            .ok_or(ApiError::Unauthorized)?;

        Ok(AuthenticatedUser { user_id })
    }
}
