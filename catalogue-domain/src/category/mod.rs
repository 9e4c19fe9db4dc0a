//! 分类聚合（Category）
//!
//! - `Category`：标识、名称、描述、激活状态与三个时间戳；
//! - `CategoryValidator`：名称规则；
//! - `CategoryGateway`：持久化协议；
//! - `CategorySearchQuery`：分页检索条件。
//!
#[allow(clippy::module_inception)]
mod category;
mod category_id;
mod gateway;
mod search_query;
mod validator;

pub use category::{Category, CategoryBuilder};
pub use category_id::CategoryId;
pub use gateway::CategoryGateway;
pub use search_query::{CategorySearchQuery, SortDirection};
pub use validator::{
    CategoryValidator, NAME_BLANK, NAME_LENGTH, NAME_MAX_LENGTH, NAME_MIN_LENGTH, NAME_NULL,
};
