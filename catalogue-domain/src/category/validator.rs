use super::Category;
use crate::error::DomainResult;
use crate::validation::{ValidationError, ValidationHandler, Validator};

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 255;

pub const NAME_NULL: &str = "'name' should not be null";
pub const NAME_BLANK: &str = "'name' should not be Blank";
pub const NAME_LENGTH: &str = "'name' must be between 3 letters and 255 characteres";

/// 分类校验器
///
/// 规则按顺序检查，命中第一条违规后立即返回：
/// 即使处理器是累积式的，一次校验也最多只报告一个名称错误。
pub struct CategoryValidator<'a, H: ValidationHandler> {
    category: &'a Category,
    handler: &'a mut H,
}

impl<'a, H: ValidationHandler> CategoryValidator<'a, H> {
    pub fn new(category: &'a Category, handler: &'a mut H) -> Self {
        Self { category, handler }
    }

    fn check_name_constraints(&mut self) -> DomainResult<()> {
        let Some(name) = self.category.name() else {
            self.handler.append(ValidationError::new(NAME_NULL))?;
            return Ok(());
        };

        // `str::trim` 去除全部 Unicode 空白（含 U+00A0 等），不止 ASCII 控制字符与空格
        let trimmed = name.trim();
        if trimmed.is_empty() {
            self.handler.append(ValidationError::new(NAME_BLANK))?;
            return Ok(());
        }

        // 按字符计数，而非字节
        let length = trimmed.chars().count();
        if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&length) {
            self.handler.append(ValidationError::new(NAME_LENGTH))?;
            return Ok(());
        }

        Ok(())
    }
}

impl<H: ValidationHandler> Validator for CategoryValidator<'_, H> {
    fn validate(&mut self) -> DomainResult<()> {
        self.check_name_constraints()
    }
}
