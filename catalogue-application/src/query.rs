use crate::dto::Dto;

/// 只读查询，例如 `GetCategoryById`、`ListCategories`
///
/// 每个查询类型对应唯一的结果 DTO，总线据此还原类型擦除后的返回值。
pub trait Query: Send + Sync + 'static {
    /// 用于路由与日志的名称，通常与类型名一致
    const NAME: &'static str;

    /// 查询结果，如 `CategoryDto` 或 `Pagination<CategoryListItemDto>`
    type Dto: Dto;
}
