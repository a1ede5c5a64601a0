use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 数据库连接串
    pub database_url: String,
    /// 监听地址
    pub bind_addr: String,
    /// 请求体上限（字节），同时限制导入事务的持续时间
    pub max_body_bytes: usize,
    /// 连接池大小
    pub max_connections: u32,
    /// 判断题答案只接受 正确/错误
    pub strict_judge_answers: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://problems.db".to_string(),
            bind_addr: "0.0.0.0:8080".to_string(),
            max_body_bytes: 1024 * 1024,
            max_connections: 5,
            strict_judge_answers: false,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件加载，缺失的字段使用默认值
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::ParseFailed {
            path: path.display().to_string(),
            source,
        })
    }

    /// 环境变量覆盖当前值，解析失败时保留原值
    pub fn with_env_overrides(self) -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").unwrap_or(self.database_url),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(self.bind_addr),
            max_body_bytes: std::env::var("MAX_BODY_BYTES").ok().and_then(|v| v.parse().ok()).unwrap_or(self.max_body_bytes),
            max_connections: std::env::var("MAX_CONNECTIONS").ok().and_then(|v| v.parse().ok()).unwrap_or(self.max_connections),
            strict_judge_answers: std::env::var("STRICT_JUDGE_ANSWERS").ok().and_then(|v| v.parse().ok()).unwrap_or(self.strict_judge_answers),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml_file_fills_missing_fields() {
        let path = std::env::temp_dir().join(format!("problem_batch_config_{}.toml", std::process::id()));
        std::fs::write(&path, "database_url = \"sqlite::memory:\"\nstrict_judge_answers = true\n").unwrap();

        let config = Config::from_toml_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert!(config.strict_judge_answers);
        assert_eq!(config.max_body_bytes, Config::default().max_body_bytes);
    }

    #[test]
    fn test_from_toml_file_reports_bad_syntax() {
        let path = std::env::temp_dir().join(format!("problem_batch_bad_{}.toml", std::process::id()));
        std::fs::write(&path, "max_connections = \"many\"").unwrap();

        let result = Config::from_toml_file(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::ParseFailed { .. })));
    }

    #[test]
    fn test_from_toml_file_missing() {
        assert!(matches!(
            Config::from_toml_file("/definitely/not/here.toml"),
            Err(ConfigError::ReadFailed { .. })
        ));
    }
}
