use super::dto::{CategoryDto, CategoryListItemDto};
use crate::{context::AppContext, error::AppError, query::Query, query_handler::QueryHandler};
use async_trait::async_trait;
use catalogue_domain::category::{CategoryGateway, CategoryId, CategorySearchQuery};
use catalogue_domain::pagination::Pagination;
use std::sync::Arc;

/// 按标识获取分类
#[derive(Debug, Clone)]
pub struct GetCategoryById {
    pub id: CategoryId,
}

impl Query for GetCategoryById {
    const NAME: &'static str = "GetCategoryById";
    type Dto = CategoryDto;
}

/// 分页列出分类
#[derive(Debug, Clone, Default)]
pub struct ListCategories {
    pub query: CategorySearchQuery,
}

impl Query for ListCategories {
    const NAME: &'static str = "ListCategories";
    type Dto = Pagination<CategoryListItemDto>;
}

pub struct GetCategoryByIdHandler {
    gateway: Arc<dyn CategoryGateway>,
}

impl GetCategoryByIdHandler {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl QueryHandler<GetCategoryById> for GetCategoryByIdHandler {
    async fn handle(&self, _ctx: &AppContext, q: GetCategoryById) -> Result<CategoryDto, AppError> {
        tracing::debug!(category_id = %q.id, "GetCategoryById");
        match self.gateway.find_by_id(&q.id).await? {
            Some(category) => Ok(CategoryDto::from(&category)),
            None => Err(AppError::AggregateNotFound(format!("category {}", q.id))),
        }
    }
}

pub struct ListCategoriesHandler {
    gateway: Arc<dyn CategoryGateway>,
}

impl ListCategoriesHandler {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl QueryHandler<ListCategories> for ListCategoriesHandler {
    async fn handle(
        &self,
        _ctx: &AppContext,
        q: ListCategories,
    ) -> Result<Pagination<CategoryListItemDto>, AppError> {
        tracing::debug!(
            page = q.query.page,
            per_page = q.query.per_page,
            terms = %q.query.terms,
            "ListCategories"
        );
        let page = self.gateway.find_all(q.query).await?;
        Ok(page.map(|c| CategoryListItemDto::from(&c)))
    }
}
