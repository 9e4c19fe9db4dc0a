use crate::error::DomainError;
use bon::Builder;
use catalogue_macros::value_object;
use std::str::FromStr;

/// 排序方向
#[value_object(default = true)]
#[derive(Copy)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(DomainError::InvalidValue {
                reason: format!("unknown sort direction: {other}"),
            }),
        }
    }
}

/// 分类分页检索条件
///
/// `terms` 为空时不过滤；`sort` 为排序字段名（如 `name`、`created_at`）。
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct CategorySearchQuery {
    #[builder(default)]
    pub page: u32,
    #[builder(default = 10)]
    pub per_page: u32,
    #[builder(default, into)]
    pub terms: String,
    #[builder(default = "name".to_string(), into)]
    pub sort: String,
    #[builder(default)]
    pub direction: SortDirection,
}

impl Default for CategorySearchQuery {
    fn default() -> Self {
        Self::builder().build()
    }
}
