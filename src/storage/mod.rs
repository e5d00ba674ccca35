use std::sync::Arc;

use crate::errors::Result;
use crate::models::evaluations::entities::{EvaluationId, EvaluationRecord};

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 评价会话管理方法
    // 创建评价会话
    async fn create_evaluation(&self, record: &EvaluationRecord) -> Result<EvaluationRecord>;
    // 通过ID获取评价会话
    async fn get_evaluation_by_id(&self, id: EvaluationId) -> Result<Option<EvaluationRecord>>;
    // 列出课程下的评价会话
    async fn list_course_evaluations(&self, course_id: &str) -> Result<Vec<EvaluationRecord>>;
    // 保存评价会话，不存在时返回 None
    async fn update_evaluation(&self, record: &EvaluationRecord)
    -> Result<Option<EvaluationRecord>>;
    // 删除评价会话
    async fn delete_evaluation(&self, id: EvaluationId) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
