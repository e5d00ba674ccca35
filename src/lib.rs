//! Peer Evaluation - 课程评价会话服务
//!
//! 管理课程中限时的反馈/互评会话，判定会话何时可以开放。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 业务实体（评价会话及其就绪判定）
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层（激活、发布、关闭判定）
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 时钟与时区工具

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
