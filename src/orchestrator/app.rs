//! 服务入口 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：打印启动信息、连接数据库、建表
//! 2. **资源管理**：唯一持有连接池的模块，按请求交给接口层
//! 3. **运行服务**：绑定地址并处理请求，直到收到 Ctrl-C

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::api::{self, AppState};
use crate::config::Config;
use crate::infrastructure;
use crate::utils::logging::log_startup;

/// 应用主结构
pub struct App {
    config: Config,
    pool: SqlitePool,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let pool = infrastructure::connect(&config)
            .await
            .context("数据库初始化失败")?;
        info!("✓ 数据库就绪");

        Ok(Self { config, pool })
    }

    /// 组装路由（测试可直接使用）
    pub fn router(&self) -> axum::Router {
        let state = AppState::new(self.pool.clone(), &self.config);
        api::router(state, self.config.max_body_bytes)
    }

    /// 运行服务
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(&self.config.bind_addr)
            .await
            .with_context(|| format!("无法绑定地址: {}", self.config.bind_addr))?;
        info!("📡 开始监听 {}", self.config.bind_addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("服务异常退出")?;

        self.pool.close().await;
        info!("👋 服务已停止");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("无法监听 Ctrl-C: {}", e);
    }
}
