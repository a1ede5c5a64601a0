//! 数据库 - 基础设施层
//!
//! 持有连接池，负责建表，不认识题目解析

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::PersistenceError;

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS problem_type (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        description TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        user_id INTEGER NOT NULL,
        problem_type_id INTEGER NOT NULL,
        is_public BOOLEAN NOT NULL DEFAULT 0,
        analysis TEXT
    )",
    "CREATE TABLE IF NOT EXISTS problem_choice (
        id INTEGER NOT NULL REFERENCES problem_type(id) ON DELETE CASCADE,
        choice TEXT NOT NULL,
        description TEXT NOT NULL,
        is_correct BOOLEAN NOT NULL,
        PRIMARY KEY (id, choice)
    )",
    "CREATE TABLE IF NOT EXISTS problem_answer (
        id INTEGER PRIMARY KEY REFERENCES problem_type(id) ON DELETE CASCADE,
        answer TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS problem_judge (
        id INTEGER PRIMARY KEY REFERENCES problem_type(id) ON DELETE CASCADE,
        is_correct BOOLEAN NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS problem_set (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        user_id INTEGER NOT NULL,
        is_public BOOLEAN NOT NULL DEFAULT 0
    )",
    // 题库 ID 不做外键约束：批量导入不校验题库是否存在
    "CREATE TABLE IF NOT EXISTS problem_in_problem_set (
        problem_set_id INTEGER NOT NULL,
        problem_id INTEGER NOT NULL REFERENCES problem_type(id) ON DELETE CASCADE,
        PRIMARY KEY (problem_set_id, problem_id)
    )",
];

/// 按配置连接数据库并建表
pub async fn connect(config: &Config) -> Result<SqlitePool, PersistenceError> {
    info!("正在连接数据库: {}", config.database_url);

    let options = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(PersistenceError::ConnectFailed)?
        .create_if_missing(true)
        .foreign_keys(true);

    // 内存库每个连接是独立的库，只能保留一个永不回收的连接
    let in_memory = config.database_url.contains(":memory:");
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(config.max_connections)
    };

    let pool = pool_options
        .connect_with(options)
        .await
        .map_err(PersistenceError::ConnectFailed)?;

    init_schema(&pool).await?;
    Ok(pool)
}

/// 建表（已存在则跳过）
pub async fn init_schema(pool: &SqlitePool) -> Result<(), PersistenceError> {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(PersistenceError::SchemaFailed)?;
    }
    debug!("表结构初始化完成 ({} 条语句)", SCHEMA.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_in_memory_creates_tables() {
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            ..Config::default()
        };
        let pool = connect(&config).await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name LIKE 'problem%' ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        let names: Vec<&str> = tables.iter().map(|(name,)| name.as_str()).collect();

        assert_eq!(
            names,
            vec![
                "problem_answer",
                "problem_choice",
                "problem_in_problem_set",
                "problem_judge",
                "problem_set",
                "problem_type"
            ]
        );

        // 重复初始化不报错
        init_schema(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn test_connect_reports_unreachable_database() {
        let config = Config {
            database_url: "sqlite:///nonexistent-dir/problems/problems.db".to_string(),
            ..Config::default()
        };

        let err = connect(&config).await.unwrap_err();
        assert!(matches!(err, PersistenceError::ConnectFailed(_)));
        assert!(err.to_string().starts_with("连接数据库失败"));
    }
}
