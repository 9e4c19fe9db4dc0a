//! 分类网关（持久化协议）
//!
//! 仅定义协议，具体存储由基础设施层实现并注入。
//!
use super::{Category, CategoryId, CategorySearchQuery};
use crate::error::DomainResult as Result;
use crate::pagination::Pagination;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait CategoryGateway: Send + Sync {
    async fn create(&self, category: Category) -> Result<Category>;

    async fn delete_by_id(&self, id: &CategoryId) -> Result<()>;

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>>;

    async fn update(&self, category: Category) -> Result<Category>;

    async fn find_all(&self, query: CategorySearchQuery) -> Result<Pagination<Category>>;
}

#[async_trait]
impl<T> CategoryGateway for Arc<T>
where
    T: CategoryGateway + ?Sized,
{
    async fn create(&self, category: Category) -> Result<Category> {
        (**self).create(category).await
    }

    async fn delete_by_id(&self, id: &CategoryId) -> Result<()> {
        (**self).delete_by_id(id).await
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>> {
        (**self).find_by_id(id).await
    }

    async fn update(&self, category: Category) -> Result<Category> {
        (**self).update(category).await
    }

    async fn find_all(&self, query: CategorySearchQuery) -> Result<Pagination<Category>> {
        (**self).find_all(query).await
    }
}
