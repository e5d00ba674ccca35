use tracing::info;

use crate::errors::Result;
use crate::models::evaluations::entities::EvaluationRecord;

/// 评价开放时需要执行的副作用（如通知课程成员）
#[async_trait::async_trait]
pub trait ActivationHandler: Send + Sync {
    async fn on_activate(&self, record: &EvaluationRecord) -> Result<()>;
}

/// 仅记录日志的默认处理器
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingActivationHandler;

#[async_trait::async_trait]
impl ActivationHandler for LoggingActivationHandler {
    async fn on_activate(&self, record: &EvaluationRecord) -> Result<()> {
        info!(
            evaluation_id = %record.id(),
            course_id = record.course_id(),
            name = record.name(),
            "Evaluation opened"
        );
        Ok(())
    }
}
