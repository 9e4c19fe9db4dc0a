use crate::{command::Command, command_handler::CommandHandler, context::AppContext, error::AppError};
use async_trait::async_trait;
use catalogue_domain::aggregate::AggregateRoot;
use catalogue_domain::category::{Category, CategoryGateway, CategoryId};
use catalogue_domain::clock::{Clock, SystemClock};
use catalogue_domain::entity::Entity;
use std::sync::Arc;

/// 创建分类
#[derive(Debug, Clone)]
pub struct CreateCategory {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
}

impl Command for CreateCategory {
    const NAME: &'static str = "CreateCategory";
    type Output = CategoryId;
}

/// 更新分类（名称、描述、激活状态整体替换）
#[derive(Debug, Clone)]
pub struct UpdateCategory {
    pub id: CategoryId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
}

impl Command for UpdateCategory {
    const NAME: &'static str = "UpdateCategory";
    type Output = CategoryId;
}

/// 删除分类；目标不存在时视为成功
#[derive(Debug, Clone)]
pub struct DeleteCategory {
    pub id: CategoryId,
}

impl Command for DeleteCategory {
    const NAME: &'static str = "DeleteCategory";
    type Output = ();
}

pub struct CreateCategoryHandler {
    gateway: Arc<dyn CategoryGateway>,
    clock: Arc<dyn Clock>,
}

impl CreateCategoryHandler {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self::with_clock(gateway, Arc::new(SystemClock))
    }

    pub fn with_clock(gateway: Arc<dyn CategoryGateway>, clock: Arc<dyn Clock>) -> Self {
        Self { gateway, clock }
    }
}

#[async_trait]
impl CommandHandler<CreateCategory> for CreateCategoryHandler {
    async fn handle(&self, ctx: &AppContext, cmd: CreateCategory) -> Result<CategoryId, AppError> {
        let category = Category::new_category_with(
            self.clock.as_ref(),
            cmd.name,
            cmd.description,
            cmd.is_active,
        )
        .ensure_valid()
        .inspect_err(|e| tracing::warn!(error = %e, "rejected invalid category"))?;

        let created = self.gateway.create(category).await?;
        tracing::info!(
            category_id = %created.id(),
            correlation_id = ctx.correlation_id(),
            actor_id = ctx.actor_id(),
            "category created"
        );
        Ok(created.id().clone())
    }
}

pub struct UpdateCategoryHandler {
    gateway: Arc<dyn CategoryGateway>,
    clock: Arc<dyn Clock>,
}

impl UpdateCategoryHandler {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self::with_clock(gateway, Arc::new(SystemClock))
    }

    pub fn with_clock(gateway: Arc<dyn CategoryGateway>, clock: Arc<dyn Clock>) -> Self {
        Self { gateway, clock }
    }
}

#[async_trait]
impl CommandHandler<UpdateCategory> for UpdateCategoryHandler {
    async fn handle(&self, ctx: &AppContext, cmd: UpdateCategory) -> Result<CategoryId, AppError> {
        let Some(mut category) = self.gateway.find_by_id(&cmd.id).await? else {
            return Err(AppError::AggregateNotFound(format!("category {}", cmd.id)));
        };

        category.update_with(
            self.clock.as_ref(),
            cmd.name,
            cmd.description,
            cmd.is_active,
        );
        let category = category.ensure_valid().inspect_err(|e| {
            tracing::warn!(category_id = %cmd.id, error = %e, "rejected invalid category")
        })?;

        let updated = self.gateway.update(category).await?;
        tracing::info!(
            category_id = %updated.id(),
            correlation_id = ctx.correlation_id(),
            actor_id = ctx.actor_id(),
            "category updated"
        );
        Ok(updated.id().clone())
    }
}

pub struct DeleteCategoryHandler {
    gateway: Arc<dyn CategoryGateway>,
}

impl DeleteCategoryHandler {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl CommandHandler<DeleteCategory> for DeleteCategoryHandler {
    async fn handle(&self, ctx: &AppContext, cmd: DeleteCategory) -> Result<(), AppError> {
        self.gateway.delete_by_id(&cmd.id).await?;
        tracing::info!(
            category_id = %cmd.id,
            correlation_id = ctx.correlation_id(),
            actor_id = ctx.actor_id(),
            "category deleted"
        );
        Ok(())
    }
}
