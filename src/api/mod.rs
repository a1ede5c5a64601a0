//! HTTP 接口层
//!
//! 只做参数提取和错误映射，导入逻辑全部委托给 `workflow::BatchFlow`

pub mod auth;
pub mod dto;
pub mod error;
pub mod problem;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use sqlx::SqlitePool;

use crate::config::Config;
use crate::workflow::BatchFlow;

pub use auth::{AuthenticatedUser, USER_ID_HEADER};
pub use error::{ApiError, ErrorResponse};

/// 各接口共享的状态
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub flow: BatchFlow,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &Config) -> Self {
        Self {
            pool,
            flow: BatchFlow::new(config),
        }
    }
}

/// 组装路由
pub fn router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/problem/batch", post(problem::add_batch_problem))
        .route("/problem/answer/:id", get(problem::get_problem_answer))
        .route("/problem_set/all_problem/:id", get(problem::get_problems_in_set))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

async fn ping() -> &'static str {
    "pong"
}
