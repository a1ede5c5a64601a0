use anyhow::Result;
use problem_batch_ingest::utils::logging;
use problem_batch_ingest::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置：CONFIG_FILE 指定的 TOML 文件，再由环境变量覆盖
    let config = match std::env::var("CONFIG_FILE") {
        Ok(path) => Config::from_toml_file(&path)?.with_env_overrides(),
        Err(_) => Config::from_env(),
    };

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config).await?.run().await?;

    Ok(())
}
