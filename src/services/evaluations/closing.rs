//! 关闭判定
//!
//! 与就绪判定相互独立：截止时间同样按会话本地挂钟读数处理，
//! 超过截止时间加宽限期后视为关闭。

use chrono::{DateTime, TimeDelta, Utc};

use super::EvaluationService;
use crate::errors::Result;
use crate::models::evaluations::entities::{EvaluationId, EvaluationRecord};

pub fn is_closed_at(record: &EvaluationRecord, now: DateTime<Utc>) -> bool {
    let grace = TimeDelta::minutes(i64::from(record.grace_period()));
    match record.deadline_local().checked_add_signed(grace) {
        Some(closes_at) => record.local_now(now) > closes_at,
        None => false,
    }
}

pub async fn is_closed(service: &EvaluationService, id: EvaluationId) -> Result<bool> {
    let record = service.load(id).await?;
    Ok(is_closed_at(&record, service.clock().now()))
}
