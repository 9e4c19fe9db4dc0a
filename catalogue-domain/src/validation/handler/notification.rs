//! 累积式校验处理器（通知模式）
//!
//! 收集所有报告的错误而不中断流程，最后由调用方通过 `into_result` 决定是否视为失败。
//!
use crate::error::{DomainError, DomainResult};
use crate::validation::{ValidationError, ValidationHandler};

#[derive(Debug, Default, Clone)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    pub fn create() -> Self {
        Self::default()
    }

    /// 以单个错误初始化
    pub fn create_with(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// 无错误时返回 `Ok(())`，否则返回携带全部错误（保持顺序）的 `DomainError::Validation`
    pub fn into_result(self) -> DomainResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::with_errors(self.errors))
        }
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: ValidationError) -> DomainResult<&mut Self> {
        self.errors.push(error);
        Ok(self)
    }

    fn append_handler<H>(&mut self, other: &H) -> DomainResult<&mut Self>
    where
        H: ValidationHandler + ?Sized,
    {
        self.errors.extend_from_slice(other.errors());
        Ok(self)
    }

    fn validate<F>(&mut self, validation: F) -> DomainResult<&mut Self>
    where
        F: FnOnce() -> anyhow::Result<()>,
    {
        if let Err(e) = validation() {
            self.errors.push(ValidationError::new(e.to_string()));
        }
        Ok(self)
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_in_order() {
        let mut n = Notification::create();
        assert!(!n.has_error());

        n.append(ValidationError::new("first"))
            .unwrap()
            .validate(|| anyhow::bail!("second"))
            .unwrap()
            .validate(|| Ok(()))
            .unwrap();

        let other = Notification::create_with(ValidationError::new("third"));
        n.append_handler(&other).unwrap();

        let messages: Vec<&str> = n.errors().iter().map(ValidationError::message).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
        assert_eq!(n.first_error().unwrap().message(), "first");
    }

    #[test]
    fn into_result_reports_all_errors() {
        assert!(Notification::create().into_result().is_ok());

        let mut n = Notification::create();
        n.append(ValidationError::new("x")).unwrap();
        n.append(ValidationError::new("y")).unwrap();
        let err = n.into_result().unwrap_err();
        assert_eq!(err.errors().len(), 2);
        assert_eq!(err.to_string(), "validation failed: x; y");
    }
}
