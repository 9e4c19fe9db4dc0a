//! 目录管理应用层（catalogue-application）
//!
//! 以命令/查询分离（CQRS）的方式编排领域对象：
//! - `command`/`query`：表达写意图与读意图；
//! - `command_bus`/`query_bus`：按类型路由到处理器，提供内存实现；
//! - `category`：分类用例（创建、更新、删除、按标识获取、分页列出）。
//!
pub mod category;
pub mod command;
pub mod command_bus;
pub mod command_handler;
pub mod context;
pub mod dto;
pub mod error;
pub mod inmemory_command_bus;
pub mod inmemory_query_bus;
pub mod query;
pub mod query_bus;
pub mod query_handler;

pub use inmemory_command_bus::InMemoryCommandBus;
pub use inmemory_query_bus::InMemoryQueryBus;
