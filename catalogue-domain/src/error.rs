//! 领域层统一错误定义
//!
//! 以校验失败（`Validation`）为核心，另含网关契约所需的最小集合，
//! 便于在各实现层统一转换为 `DomainError`。
//!
use crate::validation::ValidationError;
use thiserror::Error;

/// 统一错误类型
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 领域校验 ---
    /// 一个或多个校验错误；`message` 为顶层描述，可为空
    #[error("validation failed: {}", summarize(.message, .errors))]
    Validation {
        message: String,
        errors: Vec<ValidationError>,
    },
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },

    // --- 网关/持久化 ---
    #[error("not found: {reason}")]
    NotFound { reason: String },
    #[error("repository error: {reason}")]
    Repository { reason: String },
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// 由单个校验错误构造，顶层描述取该错误的消息
    pub fn with_error(error: ValidationError) -> Self {
        DomainError::Validation {
            message: error.message().to_string(),
            errors: vec![error],
        }
    }

    /// 由一组校验错误构造，顶层描述为空
    pub fn with_errors(errors: Vec<ValidationError>) -> Self {
        DomainError::Validation {
            message: String::new(),
            errors,
        }
    }

    /// 携带的校验错误（非校验类错误返回空切片）
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            DomainError::Validation { errors, .. } => errors,
            _ => &[],
        }
    }
}

fn summarize(message: &str, errors: &[ValidationError]) -> String {
    if !message.is_empty() {
        return message.to_string();
    }
    errors
        .iter()
        .map(ValidationError::message)
        .collect::<Vec<_>>()
        .join("; ")
}
