//! 聚合根（AggregateRoot）抽象
//!
//! 聚合根是自身一致性的唯一边界：
//! - 通过 `Entity` 约束聚合具备标识，并按标识判等；
//! - `validate` 把聚合的不变式检查委托给校验器，结果交由调用方提供的处理器处置。
//!
use crate::entity::Entity;
use crate::error::DomainResult;
use crate::validation::{Notification, ValidationHandler};

/// 聚合根接口
pub trait AggregateRoot: Entity + Sized {
    /// 使用给定处理器校验聚合；副作用仅限于处理器
    fn validate<H: ValidationHandler>(&self, handler: &mut H) -> DomainResult<()>;

    /// 校验并返回自身：通过时返回 `Ok(self)`，否则返回携带
    /// 非空、有序错误列表的 `DomainError::Validation`
    fn ensure_valid(self) -> DomainResult<Self> {
        let mut notification = Notification::create();
        self.validate(&mut notification)?;
        notification.into_result()?;
        Ok(self)
    }
}
