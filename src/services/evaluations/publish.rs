use tracing::info;

use super::EvaluationService;
use crate::errors::{EvalSystemError, Result};
use crate::models::evaluations::entities::{EvaluationId, EvaluationRecord};

/// 发布评价结果，已发布时直接返回
pub async fn publish(service: &EvaluationService, id: EvaluationId) -> Result<EvaluationRecord> {
    let mut record = service.load(id).await?;
    if record.is_published() {
        return Ok(record);
    }

    record.set_published(true);
    let saved = service
        .storage()
        .update_evaluation(&record)
        .await?
        .ok_or_else(|| EvalSystemError::not_found(format!("评价 {id} 不存在")))?;

    info!("Evaluation {} results published", id);
    Ok(saved)
}
