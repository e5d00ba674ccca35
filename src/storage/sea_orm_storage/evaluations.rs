//! 评价会话存储操作

use super::SeaOrmStorage;
use crate::entity::evaluations::{ActiveModel, Column, Entity as Evaluations};
use crate::errors::{EvalSystemError, Result};
use crate::models::evaluations::entities::{EvaluationId, EvaluationRecord};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建评价会话
    pub async fn create_evaluation_impl(
        &self,
        record: &EvaluationRecord,
    ) -> Result<EvaluationRecord> {
        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel::from_evaluation(record, now);
        model.created_at = Set(now);

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("创建评价失败: {e}")))?;

        result.into_evaluation()
    }

    /// 通过 ID 获取评价会话
    pub async fn get_evaluation_by_id_impl(
        &self,
        id: EvaluationId,
    ) -> Result<Option<EvaluationRecord>> {
        let result = Evaluations::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询评价失败: {e}")))?;

        result.map(|m| m.into_evaluation()).transpose()
    }

    /// 列出课程下的评价会话，按开始时间排序
    pub async fn list_course_evaluations_impl(
        &self,
        course_id: &str,
    ) -> Result<Vec<EvaluationRecord>> {
        Evaluations::find()
            .filter(Column::CourseId.eq(course_id.trim()))
            .order_by_asc(Column::StartTime)
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询评价列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_evaluation())
            .collect()
    }

    /// 保存评价会话的全部可变字段
    pub async fn update_evaluation_impl(
        &self,
        record: &EvaluationRecord,
    ) -> Result<Option<EvaluationRecord>> {
        // 先检查评价是否存在
        let existing = self.get_evaluation_by_id_impl(record.id()).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let result = ActiveModel::from_evaluation(record, now)
            .update(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("更新评价失败: {e}")))?;

        result.into_evaluation().map(Some)
    }

    /// 删除评价会话
    pub async fn delete_evaluation_impl(&self, id: EvaluationId) -> Result<bool> {
        let result = Evaluations::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("删除评价失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
