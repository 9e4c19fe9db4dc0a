//! 校验框架（validation）
//!
//! 校验被拆分为一对策略：
//! - `Validator`：检查目标对象，把发现的问题报告给处理器；
//! - `ValidationHandler`：决定如何对待报告的问题（立即失败或累积）。
//!
//! 规则本身与“失败如何上报”解耦，同一套规则可用于快速失败的写路径，
//! 也可用于需要收集全部问题的表单校验场景。
//!
mod handler;

pub use handler::{Notification, ThrowsValidationHandler};

use crate::error::DomainResult;
use catalogue_macros::value_object;

/// 单条校验错误（不可变的消息值对象）
#[value_object]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// 校验处理器：接收校验错误并决定失败策略
///
/// 返回 `Err` 即表示处理器选择立即终止（快速失败）；
/// 返回 `Ok(&mut Self)` 便于链式调用。
pub trait ValidationHandler {
    /// 追加单个错误
    fn append(&mut self, error: ValidationError) -> DomainResult<&mut Self>;

    /// 追加另一个处理器已累积的全部错误
    fn append_handler<H>(&mut self, other: &H) -> DomainResult<&mut Self>
    where
        H: ValidationHandler + ?Sized;

    /// 执行一段校验逻辑；其中出现的意外错误会被转换为 `ValidationError`
    fn validate<F>(&mut self, validation: F) -> DomainResult<&mut Self>
    where
        F: FnOnce() -> anyhow::Result<()>;

    /// 已累积的错误（按追加顺序）
    fn errors(&self) -> &[ValidationError];

    fn has_error(&self) -> bool {
        !self.errors().is_empty()
    }

    fn first_error(&self) -> Option<&ValidationError> {
        self.errors().first()
    }
}

/// 校验器：针对具体对象的一组规则
pub trait Validator {
    /// 执行规则，把问题报告给绑定的处理器
    fn validate(&mut self) -> DomainResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_is_a_value() {
        let a = ValidationError::new("boom");
        let b = ValidationError::new(String::from("boom"));
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "boom");

        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, r#"{"message":"boom"}"#);
    }
}
