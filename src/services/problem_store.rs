//! 题目存储 - 业务能力层
//!
//! 只负责"在给定事务里写一道题"和几个只读查询，不关心批次流程

use chrono::Utc;
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::error::PersistenceError;
use crate::models::{AnswerPayload, ChoiceOption, ProblemKind, ProblemStem};

/// 写入题干，返回分配的题目 ID
///
/// `analysis` 为 None 时写入 NULL
pub async fn insert_stem(
    tx: &mut Transaction<'_, Sqlite>,
    user_id: i64,
    kind: ProblemKind,
    description: &str,
    analysis: Option<&str>,
    is_public: bool,
) -> Result<i64, PersistenceError> {
    let now = Utc::now();
    let result = sqlx::query(
        "INSERT INTO problem_type (description, created_at, updated_at, user_id, problem_type_id, is_public, analysis)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(description)
    .bind(now)
    .bind(now)
    .bind(user_id)
    .bind(kind.code())
    .bind(is_public)
    .bind(analysis)
    .execute(&mut **tx)
    .await
    .map_err(|e| PersistenceError::insert("problem_type", e))?;

    Ok(result.last_insert_rowid())
}

/// 写入题型专属的答案数据
pub async fn insert_answer(
    tx: &mut Transaction<'_, Sqlite>,
    problem_id: i64,
    payload: &AnswerPayload,
) -> Result<(), PersistenceError> {
    match payload {
        AnswerPayload::Choice(options) => {
            for option in options {
                sqlx::query(
                    "INSERT INTO problem_choice (id, choice, description, is_correct) VALUES (?, ?, ?, ?)",
                )
                .bind(problem_id)
                .bind(&option.choice)
                .bind(&option.description)
                .bind(option.is_correct)
                .execute(&mut **tx)
                .await
                .map_err(|e| PersistenceError::insert("problem_choice", e))?;
            }
        }
        AnswerPayload::Blank(answer) => {
            sqlx::query("INSERT INTO problem_answer (id, answer) VALUES (?, ?)")
                .bind(problem_id)
                .bind(answer)
                .execute(&mut **tx)
                .await
                .map_err(|e| PersistenceError::insert("problem_answer", e))?;
        }
        AnswerPayload::Judge(is_correct) => {
            sqlx::query("INSERT INTO problem_judge (id, is_correct) VALUES (?, ?)")
                .bind(problem_id)
                .bind(*is_correct)
                .execute(&mut **tx)
                .await
                .map_err(|e| PersistenceError::insert("problem_judge", e))?;
        }
    }
    Ok(())
}

/// 把题目加入题库
pub async fn link_to_problem_set(
    tx: &mut Transaction<'_, Sqlite>,
    problem_set_id: i64,
    problem_id: i64,
) -> Result<(), PersistenceError> {
    sqlx::query("INSERT INTO problem_in_problem_set (problem_set_id, problem_id) VALUES (?, ?)")
        .bind(problem_set_id)
        .bind(problem_id)
        .execute(&mut **tx)
        .await
        .map_err(|e| PersistenceError::insert("problem_in_problem_set", e))?;
    Ok(())
}

/// 题库是否存在
pub async fn problem_set_exists(pool: &SqlitePool, problem_set_id: i64) -> Result<bool, PersistenceError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM problem_set WHERE id = ?")
        .bind(problem_set_id)
        .fetch_one(pool)
        .await
        .map_err(|e| PersistenceError::query("problem_set", e))?;
    Ok(count > 0)
}

// ========== 只读查询 ==========

pub async fn find_stem(pool: &SqlitePool, problem_id: i64) -> Result<Option<ProblemStem>, PersistenceError> {
    sqlx::query_as::<_, ProblemStem>(
        "SELECT id, description, user_id, problem_type_id, is_public, analysis, created_at, updated_at
         FROM problem_type WHERE id = ?",
    )
    .bind(problem_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| PersistenceError::query("problem_type", e))
}

/// 读取已存储的答案
pub async fn load_answer(
    pool: &SqlitePool,
    problem_id: i64,
    kind: ProblemKind,
) -> Result<AnswerPayload, PersistenceError> {
    match kind {
        ProblemKind::Choice => {
            let options = sqlx::query_as::<_, ChoiceOption>(
                "SELECT choice, description, is_correct FROM problem_choice WHERE id = ? ORDER BY choice",
            )
            .bind(problem_id)
            .fetch_all(pool)
            .await
            .map_err(|e| PersistenceError::query("problem_choice", e))?;
            Ok(AnswerPayload::Choice(options))
        }
        ProblemKind::Blank => {
            let answer: String = sqlx::query_scalar("SELECT answer FROM problem_answer WHERE id = ?")
                .bind(problem_id)
                .fetch_one(pool)
                .await
                .map_err(|e| PersistenceError::query("problem_answer", e))?;
            Ok(AnswerPayload::Blank(answer))
        }
        ProblemKind::Judge => {
            let is_correct: bool = sqlx::query_scalar("SELECT is_correct FROM problem_judge WHERE id = ?")
                .bind(problem_id)
                .fetch_one(pool)
                .await
                .map_err(|e| PersistenceError::query("problem_judge", e))?;
            Ok(AnswerPayload::Judge(is_correct))
        }
    }
}

/// 题库中的题目 ID，按加入顺序
pub async fn list_problem_ids_in_set(
    pool: &SqlitePool,
    problem_set_id: i64,
) -> Result<Vec<i64>, PersistenceError> {
    sqlx::query_scalar(
        "SELECT problem_id FROM problem_in_problem_set WHERE problem_set_id = ? ORDER BY rowid",
    )
    .bind(problem_set_id)
    .fetch_all(pool)
    .await
    .map_err(|e| PersistenceError::query("problem_in_problem_set", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::infrastructure;

    async fn memory_pool() -> SqlitePool {
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            ..Config::default()
        };
        infrastructure::connect(&config).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_load_choice_problem() {
        let pool = memory_pool().await;
        let mut tx = pool.begin().await.unwrap();

        let id = insert_stem(&mut tx, 7, ProblemKind::Choice, "题干", Some("解析"), true)
            .await
            .unwrap();
        let payload = AnswerPayload::Choice(vec![
            ChoiceOption {
                choice: "A".to_string(),
                description: "甲".to_string(),
                is_correct: false,
            },
            ChoiceOption {
                choice: "B".to_string(),
                description: "乙".to_string(),
                is_correct: true,
            },
        ]);
        insert_answer(&mut tx, id, &payload).await.unwrap();
        link_to_problem_set(&mut tx, 3, id).await.unwrap();
        tx.commit().await.unwrap();

        let stem = find_stem(&pool, id).await.unwrap().unwrap();
        assert_eq!(stem.user_id, 7);
        assert_eq!(stem.kind(), Some(ProblemKind::Choice));
        assert_eq!(stem.analysis.as_deref(), Some("解析"));
        assert!(stem.is_public);

        assert_eq!(load_answer(&pool, id, ProblemKind::Choice).await.unwrap(), payload);
        assert_eq!(list_problem_ids_in_set(&pool, 3).await.unwrap(), vec![id]);
    }

    #[tokio::test]
    async fn test_rolled_back_transaction_leaves_nothing() {
        let pool = memory_pool().await;
        {
            let mut tx = pool.begin().await.unwrap();
            let id = insert_stem(&mut tx, 1, ProblemKind::Judge, "题", None, true)
                .await
                .unwrap();
            insert_answer(&mut tx, id, &AnswerPayload::Judge(true)).await.unwrap();
            tx.rollback().await.unwrap();
        }

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM problem_type")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
        assert!(find_stem(&pool, 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_problem_set_exists() {
        let pool = memory_pool().await;
        sqlx::query(
            "INSERT INTO problem_set (name, created_at, updated_at, user_id) VALUES ('期中', ?, ?, 1)",
        )
        .bind(Utc::now())
        .bind(Utc::now())
        .execute(&pool)
        .await
        .unwrap();

        assert!(problem_set_exists(&pool, 1).await.unwrap());
        assert!(!problem_set_exists(&pool, 99).await.unwrap());
    }
}
