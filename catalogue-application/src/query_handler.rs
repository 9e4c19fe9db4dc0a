use crate::{context::AppContext, error::AppError, query::Query};
use async_trait::async_trait;

/// 查询处理器：每种查询在总线上只注册一个
///
/// 读取网关并把领域对象投影为 DTO；找不到目标时返回 `AppError::AggregateNotFound`。
#[async_trait]
pub trait QueryHandler<Q>: Send + Sync
where
    Q: Query,
{
    async fn handle(&self, ctx: &AppContext, query: Q) -> Result<Q::Dto, AppError>;
}
