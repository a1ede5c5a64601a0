//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (持有连接池，运行 HTTP 服务)
//!     ↓
//! api (参数提取、错误映射)
//!     ↓
//! workflow::BatchFlow (处理一整段文本)
//!     ↓
//! services (能力层：segment / split / extract / resolve / store)
//!     ↓
//! infrastructure (基础设施：数据库连接池)
//! ```

pub mod app;

pub use app::App;
