//! 题目相关接口

use axum::extract::{Path, Query, State};
use axum::Json;
use tracing::info;

use super::auth::AuthenticatedUser;
use super::dto::{BatchQuery, ProblemAnswerResponse, ProblemSetProblemsResponse};
use super::error::ApiError;
use super::AppState;
use crate::models::BatchProblemResponse;
use crate::services::problem_store;
use crate::workflow::BatchCtx;

/// POST /problem/batch?problem_set_id=N
///
/// 请求体是整段题目文本。成功返回写入的题目列表；格式错误 400，写库失败 500，
/// 两种失败都不会留下任何数据。
pub async fn add_batch_problem(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(query): Query<BatchQuery>,
    text: String,
) -> Result<Json<BatchProblemResponse>, ApiError> {
    let ctx = BatchCtx::new(user.user_id, query.problem_set_id);
    let problems = state.flow.run(&state.pool, &ctx, &text).await?;
    Ok(Json(BatchProblemResponse { problems }))
}

/// GET /problem/answer/:id
///
/// 题目所有者或公开题目可见
pub async fn get_problem_answer(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(problem_id): Path<i64>,
) -> Result<Json<ProblemAnswerResponse>, ApiError> {
    let stem = problem_store::find_stem(&state.pool, problem_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    if !stem.is_public && stem.user_id != user.user_id {
        info!("用户 {} 无权查看题目 {}", user.user_id, problem_id);
        return Err(ApiError::Forbidden);
    }

    let kind = stem.kind().ok_or(ApiError::NotFound)?;
    let payload = problem_store::load_answer(&state.pool, problem_id, kind).await?;

    Ok(Json(ProblemAnswerResponse {
        problem_id,
        problem_type: kind,
        analysis: stem.analysis,
        answer: payload.into(),
    }))
}

/// GET /problem_set/all_problem/:id
pub async fn get_problems_in_set(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(problem_set_id): Path<i64>,
) -> Result<Json<ProblemSetProblemsResponse>, ApiError> {
    let problem_ids = problem_store::list_problem_ids_in_set(&state.pool, problem_set_id).await?;
    Ok(Json(ProblemSetProblemsResponse {
        problem_set_id,
        problem_ids,
    }))
}
