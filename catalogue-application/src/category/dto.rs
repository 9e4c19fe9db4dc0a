use crate::dto::Dto;
use catalogue_domain::category::Category;
use catalogue_domain::entity::Entity;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// 分类详情
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDto {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Dto for CategoryDto {}

impl From<&Category> for CategoryDto {
    fn from(c: &Category) -> Self {
        Self {
            id: c.id().to_string(),
            name: c.name().map(str::to_string),
            description: c.description().map(str::to_string),
            is_active: c.is_active(),
            created_at: c.created_at(),
            updated_at: c.updated_at(),
            deleted_at: c.deleted_at(),
        }
    }
}

/// 列表项（省略 `updated_at`）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryListItemDto {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Dto for CategoryListItemDto {}

impl From<&Category> for CategoryListItemDto {
    fn from(c: &Category) -> Self {
        Self {
            id: c.id().to_string(),
            name: c.name().map(str::to_string),
            description: c.description().map(str::to_string),
            is_active: c.is_active(),
            created_at: c.created_at(),
            deleted_at: c.deleted_at(),
        }
    }
}
