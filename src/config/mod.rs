//! 配置管理
//!
//! 加载顺序：内置默认值 -> config 文件 -> config.{APP_ENV} 文件 -> EVALSYS__ 环境变量。

mod r#impl;
mod structs;

pub use structs::{AppConfig, AppSettings, DatabaseConfig};
