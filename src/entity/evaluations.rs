//! 评价会话实体

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use crate::errors::EvalSystemError;
use crate::models::evaluations::entities::{EvaluationId, EvaluationRecord};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "evaluations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub course_id: String,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub instructions: String,
    pub start_time: i64, // 毫秒时间戳
    pub deadline: i64,   // 毫秒时间戳
    #[sea_orm(column_type = "Double")]
    pub time_zone: f64,
    pub grace_period: i64,
    pub comments_enabled: bool,
    pub published: bool,
    pub activated: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn millis_to_datetime(
    field: &str,
    ts: i64,
) -> crate::errors::Result<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::<chrono::Utc>::from_timestamp_millis(ts).ok_or_else(|| {
        EvalSystemError::database_operation(format!("评价字段 {field} 时间戳越界: {ts}"))
    })
}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_evaluation(self) -> crate::errors::Result<EvaluationRecord> {
        let id = EvaluationId::parse(&self.id)
            .map_err(|e| EvalSystemError::database_operation(e.message()))?;
        let grace_period = u32::try_from(self.grace_period).map_err(|_| {
            EvalSystemError::database_operation(format!(
                "评价 {} 的宽限期无效: {}",
                self.id, self.grace_period
            ))
        })?;

        Ok(EvaluationRecord {
            id,
            start_time: millis_to_datetime("start_time", self.start_time)?,
            deadline: millis_to_datetime("deadline", self.deadline)?,
            course_id: self.course_id,
            name: self.name,
            instructions: self.instructions,
            time_zone: self.time_zone,
            grace_period,
            comments_enabled: self.comments_enabled,
            published: self.published,
            activated: self.activated,
        })
    }
}

impl ActiveModel {
    /// 由业务模型构造全部字段（不含 created_at）
    pub fn from_evaluation(record: &EvaluationRecord, updated_at: i64) -> Self {
        Self {
            id: Set(record.id().to_string()),
            course_id: Set(record.course_id().to_string()),
            name: Set(record.name().to_string()),
            instructions: Set(record.instructions().to_string()),
            start_time: Set(record.start_time().timestamp_millis()),
            deadline: Set(record.deadline().timestamp_millis()),
            time_zone: Set(record.time_zone()),
            grace_period: Set(i64::from(record.grace_period())),
            comments_enabled: Set(record.comments_enabled()),
            published: Set(record.is_published()),
            activated: Set(record.is_activated()),
            updated_at: Set(updated_at),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::evaluations::requests::CreateEvaluationRequest;
    use chrono::{TimeZone, Utc};

    fn sample() -> EvaluationRecord {
        EvaluationRecord::new(CreateEvaluationRequest {
            course_id: Some("CS2103".to_string()),
            name: Some("Peer Review 1".to_string()),
            instructions: Some("Rate your teammates".to_string()),
            comments_enabled: false,
            start_time: Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap(),
            deadline: Utc.with_ymd_and_hms(2024, 1, 17, 23, 59, 0).unwrap(),
            time_zone: -3.5,
            grace_period: 30,
        })
        .unwrap()
    }

    fn row(record: &EvaluationRecord) -> Model {
        Model {
            id: record.id().to_string(),
            course_id: record.course_id().to_string(),
            name: record.name().to_string(),
            instructions: record.instructions().to_string(),
            start_time: record.start_time().timestamp_millis(),
            deadline: record.deadline().timestamp_millis(),
            time_zone: record.time_zone(),
            grace_period: i64::from(record.grace_period()),
            comments_enabled: record.comments_enabled(),
            published: true,
            activated: true,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_row_into_evaluation_keeps_flags() {
        let record = sample();
        let restored = row(&record).into_evaluation().unwrap();
        assert_eq!(restored.id(), record.id());
        assert_eq!(restored.start_time(), record.start_time());
        assert_eq!(restored.time_zone(), -3.5);
        assert_eq!(restored.grace_period(), 30);
        assert!(restored.is_published());
        assert!(restored.is_activated());
    }

    #[test]
    fn test_row_with_bad_id_is_rejected() {
        let mut model = row(&sample());
        model.id = "42".to_string();
        assert_eq!(model.into_evaluation().unwrap_err().code(), "E005");
    }

    #[test]
    fn test_row_with_negative_grace_is_rejected() {
        let mut model = row(&sample());
        model.grace_period = -1;
        assert_eq!(model.into_evaluation().unwrap_err().code(), "E005");
    }

    #[test]
    fn test_active_model_from_evaluation() {
        let record = sample();
        let active = ActiveModel::from_evaluation(&record, 1_700_000_000);
        assert_eq!(active.id, Set(record.id().to_string()));
        assert_eq!(active.grace_period, Set(30));
        assert_eq!(active.updated_at, Set(1_700_000_000));
        assert!(active.created_at.is_not_set());
    }

    #[test]
    fn test_sub_second_start_survives_row_conversion() {
        let mut record = sample();
        let start = Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap()
            + chrono::TimeDelta::milliseconds(600);
        record.set_start_time(start);

        let active = ActiveModel::from_evaluation(&record, 0);
        assert_eq!(active.start_time, Set(start.timestamp_millis()));

        let restored = row(&record).into_evaluation().unwrap();
        assert_eq!(restored.start_time(), start);
        assert_eq!(restored, {
            let mut expected = record.clone();
            expected.set_published(true);
            expected.set_activated(true);
            expected
        });
    }
}
