//! 快速失败的校验处理器
//!
//! 任何一次追加都会立即以 `DomainError::Validation` 返回，因此它自身从不累积错误。
//!
use crate::error::{DomainError, DomainResult};
use crate::validation::{ValidationError, ValidationHandler};

#[derive(Debug, Default, Clone, Copy)]
pub struct ThrowsValidationHandler;

impl ThrowsValidationHandler {
    pub fn new() -> Self {
        Self
    }
}

impl ValidationHandler for ThrowsValidationHandler {
    fn append(&mut self, error: ValidationError) -> DomainResult<&mut Self> {
        tracing::debug!(error = %error, "validation failed fast");
        Err(DomainError::with_error(error))
    }

    fn append_handler<H>(&mut self, other: &H) -> DomainResult<&mut Self>
    where
        H: ValidationHandler + ?Sized,
    {
        Err(DomainError::with_errors(other.errors().to_vec()))
    }

    fn validate<F>(&mut self, validation: F) -> DomainResult<&mut Self>
    where
        F: FnOnce() -> anyhow::Result<()>,
    {
        match validation() {
            Ok(()) => Ok(self),
            Err(e) => Err(DomainError::with_error(ValidationError::new(e.to_string()))),
        }
    }

    fn errors(&self) -> &[ValidationError] {
        &[]
    }
}
