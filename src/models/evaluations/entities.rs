//! 评价会话业务实体
//!
//! 该类型不依赖任何持久化框架，数据库映射见 `crate::entity::evaluations`。

use std::fmt;

use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::{EvalSystemError, Result};
use crate::models::evaluations::requests::CreateEvaluationRequest;
use crate::utils::timezone::to_local_wall_clock;

/// 评价会话唯一 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EvaluationId(Uuid);

impl EvaluationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(value: &str) -> Result<Self> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|e| EvalSystemError::invalid_argument(format!("无效的评价 ID {value}: {e}")))
    }
}

impl Default for EvaluationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EvaluationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// 评价会话（课程内限时的反馈/互评活动）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationRecord {
    pub(crate) id: EvaluationId,
    pub(crate) course_id: String,
    pub(crate) name: String,
    #[serde(rename = "instr")]
    pub(crate) instructions: String,
    pub(crate) start_time: DateTime<Utc>,
    #[serde(rename = "end_time")]
    pub(crate) deadline: DateTime<Utc>,
    #[serde(rename = "timezone")]
    pub(crate) time_zone: f64,
    /// 截止后仍可提交的分钟数，仅供关闭判定使用
    #[serde(rename = "grace")]
    pub(crate) grace_period: u32,
    /// 是否允许成员之间互相评论
    #[serde(rename = "comments_on")]
    pub(crate) comments_enabled: bool,
    pub(crate) published: bool,
    /// 开放时需要执行的操作（如发送通知）是否已经完成
    pub(crate) activated: bool,
}

/// 去除首尾空白，并要求结果非空
fn required_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EvalSystemError::invalid_argument(format!("{field} 不能为空")));
    }
    Ok(trimmed.to_string())
}

fn present(field: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| EvalSystemError::invalid_argument(format!("缺少必填字段 {field}")))
}

/// 时间精度统一为毫秒，与存储层保持一致
fn to_millis(value: DateTime<Utc>) -> DateTime<Utc> {
    value.trunc_subsecs(3)
}

/// 时区偏移必须是有限值
fn finite_offset(time_zone: f64) -> Result<f64> {
    if !time_zone.is_finite() {
        return Err(EvalSystemError::invalid_argument(format!("时区偏移无效: {time_zone}")));
    }
    Ok(time_zone)
}

impl EvaluationRecord {
    /// 创建评价会话，`published` 与 `activated` 均为 false
    pub fn new(req: CreateEvaluationRequest) -> Result<Self> {
        let course_id = required_text("course_id", &present("course_id", req.course_id)?)?;
        let name = required_text("name", &present("name", req.name)?)?;
        let instructions = present("instructions", req.instructions)?.trim().to_string();
        let time_zone = finite_offset(req.time_zone)?;

        Ok(Self {
            id: EvaluationId::new(),
            course_id,
            name,
            instructions,
            start_time: to_millis(req.start_time),
            deadline: to_millis(req.deadline),
            time_zone,
            grace_period: req.grace_period,
            comments_enabled: req.comments_enabled,
            published: false,
            activated: false,
        })
    }

    pub fn id(&self) -> EvaluationId {
        self.id
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn set_course_id(&mut self, course_id: &str) -> Result<()> {
        self.course_id = required_text("course_id", course_id)?;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.name = required_text("name", name)?;
        Ok(())
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn set_instructions(&mut self, instructions: &str) {
        self.instructions = instructions.trim().to_string();
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn set_start_time(&mut self, start_time: DateTime<Utc>) {
        self.start_time = to_millis(start_time);
    }

    pub fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    pub fn set_deadline(&mut self, deadline: DateTime<Utc>) {
        self.deadline = to_millis(deadline);
    }

    pub fn time_zone(&self) -> f64 {
        self.time_zone
    }

    pub fn set_time_zone(&mut self, time_zone: f64) -> Result<()> {
        self.time_zone = finite_offset(time_zone)?;
        Ok(())
    }

    pub fn grace_period(&self) -> u32 {
        self.grace_period
    }

    pub fn set_grace_period(&mut self, grace_period: u32) {
        self.grace_period = grace_period;
    }

    pub fn comments_enabled(&self) -> bool {
        self.comments_enabled
    }

    pub fn set_comments_enabled(&mut self, comments_enabled: bool) {
        self.comments_enabled = comments_enabled;
    }

    pub fn is_published(&self) -> bool {
        self.published
    }

    pub fn set_published(&mut self, published: bool) {
        self.published = published;
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    pub fn set_activated(&mut self, activated: bool) {
        self.activated = activated;
    }

    /// 当前时刻换算到会话本地时区后的挂钟时间
    pub fn local_now(&self, now: DateTime<Utc>) -> NaiveDateTime {
        to_local_wall_clock(now, self.time_zone)
    }

    /// 开始时间的挂钟读数
    ///
    /// 存储的开始时间已是会话本地时间，这里不再做时区换算。
    pub fn start_local(&self) -> NaiveDateTime {
        self.start_time.naive_utc()
    }

    /// 截止时间的挂钟读数，与开始时间同样不做换算
    pub fn deadline_local(&self) -> NaiveDateTime {
        self.deadline.naive_utc()
    }

    /// 按系统时钟判断是否应当激活
    pub fn is_ready_to_activate(&self) -> bool {
        self.is_ready_to_activate_at(Utc::now())
    }

    /// 已到开始时间（含边界）且尚未激活时返回 true
    ///
    /// 不检查截止时间：开始之后会一直保持"待激活"，直到外部将 `activated` 置为 true。
    pub fn is_ready_to_activate_at(&self, now: DateTime<Utc>) -> bool {
        if self.local_now(now) < self.start_local() {
            return false;
        }
        !self.activated
    }
}

impl fmt::Display for EvaluationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "courseID: {}", self.course_id)?;
        writeln!(f, "name: {}", self.name)?;
        writeln!(f, "instruction: {}", self.instructions)?;
        writeln!(f, "starttime: {}", self.start_time)?;
        write!(f, "endtime: {}", self.deadline)
    }
}
