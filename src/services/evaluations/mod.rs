pub mod activate;
pub mod closing;
pub mod handler;
pub mod publish;
pub mod readiness;

use std::sync::Arc;

use crate::errors::{EvalSystemError, Result};
use crate::models::evaluations::entities::{EvaluationId, EvaluationRecord};
use crate::storage::Storage;
use crate::utils::clock::{Clock, SystemClock};

pub use activate::ActivationOutcome;
pub use handler::{ActivationHandler, LoggingActivationHandler};

/// 评价会话服务
///
/// 负责调用就绪判定、执行开放时的副作用并回写状态；记录本身保持无副作用。
pub struct EvaluationService {
    storage: Arc<dyn Storage>,
    clock: Arc<dyn Clock>,
    handler: Arc<dyn ActivationHandler>,
}

impl EvaluationService {
    pub fn new(
        storage: Arc<dyn Storage>,
        clock: Arc<dyn Clock>,
        handler: Arc<dyn ActivationHandler>,
    ) -> Self {
        Self {
            storage,
            clock,
            handler,
        }
    }

    /// 使用系统时钟与日志处理器
    pub fn with_defaults(storage: Arc<dyn Storage>) -> Self {
        Self::new(
            storage,
            Arc::new(SystemClock),
            Arc::new(LoggingActivationHandler),
        )
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub(crate) fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub(crate) fn handler(&self) -> &Arc<dyn ActivationHandler> {
        &self.handler
    }

    /// 加载评价，不存在时返回 NotFound
    pub(crate) async fn load(&self, id: EvaluationId) -> Result<EvaluationRecord> {
        self.storage
            .get_evaluation_by_id(id)
            .await?
            .ok_or_else(|| EvalSystemError::not_found(format!("评价 {id} 不存在")))
    }

    pub async fn check_readiness(&self, id: EvaluationId) -> Result<bool> {
        readiness::check_readiness(self, id).await
    }

    pub async fn activate_if_ready(&self, id: EvaluationId) -> Result<ActivationOutcome> {
        activate::activate_if_ready(self, id).await
    }

    pub async fn publish(&self, id: EvaluationId) -> Result<EvaluationRecord> {
        publish::publish(self, id).await
    }

    pub async fn is_closed(&self, id: EvaluationId) -> Result<bool> {
        closing::is_closed(self, id).await
    }
}
