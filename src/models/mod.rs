pub mod evaluations;

pub use evaluations::entities::{EvaluationId, EvaluationRecord};
pub use evaluations::requests::CreateEvaluationRequest;

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
