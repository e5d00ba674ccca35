use chrono::{DateTime, Utc};
use serde::Deserialize;

/// 创建评价会话请求
///
/// 文本字段为 `None` 表示调用方未提供，构造记录时会被拒绝。
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvaluationRequest {
    pub course_id: Option<String>,
    pub name: Option<String>,
    pub instructions: Option<String>,
    #[serde(default)]
    pub comments_enabled: bool,
    pub start_time: DateTime<Utc>, // 会话本地挂钟时间，按 UTC 字段存储
    pub deadline: DateTime<Utc>,
    #[serde(default)]
    pub time_zone: f64, // 小时，可为小数
    #[serde(default)]
    pub grace_period: u32, // 分钟
}
