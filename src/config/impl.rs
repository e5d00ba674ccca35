use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            // 内置默认值
            .set_default("app.system_name", "Peer Evaluation")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("database.url", "evaluations.db")?
            .set_default("database.pool_size", 5)?
            .set_default("database.timeout", 30)?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(File::with_name(&format!("config.{app_env}")).required(false))
            // 最后加载环境变量覆盖，如 EVALSYS__DATABASE__POOL_SIZE
            .add_source(
                Environment::with_prefix("EVALSYS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        // 支持从常用环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        if app_config.database.pool_size == 0 {
            app_config.database.pool_size = 1;
        }

        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_falls_back_to_defaults() {
        let config = AppConfig::load().unwrap();
        assert!(!config.app.system_name.is_empty());
        assert!(config.database.pool_size >= 1);
        assert!(!config.database.url.is_empty());
    }

    #[test]
    fn test_environment_helpers() {
        let mut config = AppConfig::load().unwrap();
        config.app.environment = "production".to_string();
        assert!(config.is_production());
        assert!(!config.is_development());

        config.app.environment = "development".to_string();
        assert!(config.is_development());
    }
}
