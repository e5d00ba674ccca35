use tracing::debug;

use super::EvaluationService;
use crate::errors::Result;
use crate::models::evaluations::entities::{EvaluationId, EvaluationRecord};
use crate::utils::timezone::format_wall_clock;

/// 在给定时刻判定就绪，并输出本地当前时间与开始时间的诊断日志
pub(crate) fn ready_at(record: &EvaluationRecord, now: chrono::DateTime<chrono::Utc>) -> bool {
    let ready = record.is_ready_to_activate_at(now);
    debug!(
        evaluation_id = %record.id(),
        current = %format_wall_clock(record.local_now(now)),
        start = %format_wall_clock(record.start_local()),
        activated = record.is_activated(),
        ready,
        "Evaluation readiness checked"
    );
    ready
}

pub async fn check_readiness(service: &EvaluationService, id: EvaluationId) -> Result<bool> {
    let record = service.load(id).await?;
    Ok(ready_at(&record, service.clock().now()))
}
