//! 分类用例
//!
//! - 命令：`CreateCategory`、`UpdateCategory`、`DeleteCategory`
//! - 查询：`GetCategoryById`、`ListCategories`
//! - `InMemoryCategoryGateway`：进程内网关实现，用于测试与原型
//!
mod commands;
mod dto;
mod inmemory_gateway;
mod queries;

pub use commands::{
    CreateCategory, CreateCategoryHandler, DeleteCategory, DeleteCategoryHandler, UpdateCategory,
    UpdateCategoryHandler,
};
pub use dto::{CategoryDto, CategoryListItemDto};
pub use inmemory_gateway::InMemoryCategoryGateway;
pub use queries::{GetCategoryById, GetCategoryByIdHandler, ListCategories, ListCategoriesHandler};
