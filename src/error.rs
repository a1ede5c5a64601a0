use thiserror::Error;

use crate::models::ProblemKind;

/// 批量导入错误类型
///
/// 只有两类：输入格式错误（整批拒绝，无副作用）和持久化错误（整批回滚）。
#[derive(Debug, Error)]
pub enum IngestError {
    /// 题目文本格式错误
    #[error("题目格式错误: {0}")]
    MalformedInput(#[from] MalformedInputError),
    /// 数据库写入错误
    #[error("持久化错误: {0}")]
    Persistence(#[from] PersistenceError),
}

/// 输入格式错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedInputError {
    /// 缺少分区标题
    #[error("缺少分区标题: {header}")]
    MissingSection { header: &'static str },
    /// 分区标题重复出现
    #[error("分区标题重复出现: {header}")]
    DuplicateSection { header: &'static str },
    /// 分区顺序错误
    #[error("分区顺序错误，应为 选择题 → 判断题 → 填空题")]
    SectionOutOfOrder,
    /// 缺少答案标记
    #[error("{kind} 第 {item} 题缺少答案标记")]
    MissingAnswerMarker { kind: ProblemKind, item: usize },
    /// 答案标记重复
    #[error("{kind} 第 {item} 题包含多个答案标记")]
    DuplicateAnswerMarker { kind: ProblemKind, item: usize },
    /// 选择题没有选项
    #[error("选择题第 {item} 题没有选项")]
    NoOptions { item: usize },
    /// 选项数量超出字母范围
    #[error("选择题第 {item} 题选项过多: {count}")]
    TooManyOptions { item: usize, count: usize },
    /// 判断题答案不是 正确/错误（仅严格模式）
    #[error("判断题第 {item} 题答案无法识别: {answer}")]
    UnrecognizedJudgeAnswer { item: usize, answer: String },
}

/// 持久化错误
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// 连接数据库失败（地址无效或无法打开）
    #[error("连接数据库失败: {0}")]
    ConnectFailed(#[source] sqlx::Error),
    /// 开启事务失败
    #[error("开启事务失败: {0}")]
    BeginFailed(#[source] sqlx::Error),
    /// 写入失败
    #[error("写入 {table} 失败: {source}")]
    InsertFailed {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },
    /// 查询失败
    #[error("查询 {table} 失败: {source}")]
    QueryFailed {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },
    /// 提交事务失败
    #[error("提交事务失败: {0}")]
    CommitFailed(#[source] sqlx::Error),
    /// 回滚失败（原始错误保留在 cause 中）
    #[error("回滚失败: {source} (原始错误: {cause})")]
    RollbackFailed {
        cause: Box<IngestError>,
        #[source]
        source: sqlx::Error,
    },
    /// 初始化表结构失败
    #[error("初始化表结构失败: {0}")]
    SchemaFailed(#[source] sqlx::Error),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 配置文件解析失败
    #[error("配置文件解析失败 ({path}): {source}")]
    ParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl PersistenceError {
    /// 创建写入失败错误
    pub fn insert(table: &'static str, source: sqlx::Error) -> Self {
        PersistenceError::InsertFailed { table, source }
    }

    /// 创建查询失败错误
    pub fn query(table: &'static str, source: sqlx::Error) -> Self {
        PersistenceError::QueryFailed { table, source }
    }
}

impl IngestError {
    /// 是否为输入格式错误（调用方据此区分 400 / 500）
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, IngestError::MalformedInput(_))
    }
}

// ========== Result 类型别名 ==========

/// 批量导入结果类型
pub type IngestResult<T> = Result<T, IngestError>;
