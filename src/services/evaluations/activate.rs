use tracing::{info, warn};

use super::EvaluationService;
use super::readiness::ready_at;
use crate::errors::{EvalSystemError, Result};
use crate::models::evaluations::entities::EvaluationId;

/// 激活尝试的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationOutcome {
    /// 尚未到开始时间
    TooEarly,
    /// 之前已经激活过
    AlreadyActivated,
    /// 本次完成激活
    Activated,
}

/// 就绪时执行开放副作用并将 `activated` 置为 true
///
/// 处理器失败时不修改状态，下次检查会重试。
pub async fn activate_if_ready(
    service: &EvaluationService,
    id: EvaluationId,
) -> Result<ActivationOutcome> {
    let mut record = service.load(id).await?;

    if !ready_at(&record, service.clock().now()) {
        return Ok(if record.is_activated() {
            ActivationOutcome::AlreadyActivated
        } else {
            ActivationOutcome::TooEarly
        });
    }

    if let Err(e) = service.handler().on_activate(&record).await {
        warn!("Activation side effects failed for evaluation {}: {}", id, e);
        return Err(EvalSystemError::activation(format!(
            "评价 {id} 开放处理失败: {}",
            e.message()
        )));
    }

    record.set_activated(true);
    service
        .storage()
        .update_evaluation(&record)
        .await?
        .ok_or_else(|| EvalSystemError::not_found(format!("评价 {id} 不存在")))?;

    info!("Evaluation {} activated", id);
    Ok(ActivationOutcome::Activated)
}
