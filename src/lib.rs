//! # Problem Batch Ingest
//!
//! 把一整段试卷文本批量导入为选择题、判断题、填空题，并加入指定题库
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有连接池，负责建表
//!
//! ### ② 业务能力层（Services）
//! - `segmenter` - 按 选择题/判断题/填空题 标题切分区域
//! - `tokenizer` - 按题号切分单道题
//! - `extractor` - 抽取题干、选项、答案、解析
//! - `resolver` - 把答案原文转换成题型专属的答案数据
//! - `problem_store` - 在给定事务里写一道题
//!
//! ### ③ 流程层（Workflow）
//! - `BatchCtx` - 上下文封装（user_id + problem_set_id）
//! - `BatchFlow` - 流程编排（解析 → 事务写入 → 提交/回滚）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator::App` - 初始化、路由、运行服务
//! - `api/` - HTTP 接口
//!
//! ## 模块结构

pub mod api;
pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{IngestError, IngestResult, MalformedInputError, PersistenceError};
pub use models::{BatchProblemResponse, ProblemBatch, ProblemKind};
pub use orchestrator::App;
pub use workflow::{BatchCtx, BatchFlow};
