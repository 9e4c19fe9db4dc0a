//! 目录管理领域层（catalogue-domain）
//!
//! 提供目录管理系统的领域模型与通用构件：
//! - 实体（`entity`）与聚合根（`aggregate`）抽象，实体按标识判等
//! - 校验框架（`validation`）：`Validator` 规则与可插拔的 `ValidationHandler`
//!   （快速失败的 `ThrowsValidationHandler`、累积式的 `Notification`）
//! - 分类聚合（`category`）：生命周期（激活/停用/更新）、校验规则与网关接口
//! - 分页容器（`pagination`）与时钟抽象（`clock`）
//!
//! 本 crate 不包含任何存储实现，网关（Gateway）仅定义协议，由基础设施层注入。
//!
//! 典型用法：
//! 1. 通过 `Category::new_category` 创建分类；
//! 2. 调用 `validate(&mut handler)` 或 `ensure_valid()` 执行校验；
//! 3. 通过 `CategoryGateway` 持久化。
//!
pub mod aggregate;
pub mod category;
pub mod clock;
pub mod entity;
pub mod error;
pub mod pagination;
pub mod validation;

// 允许在本 crate 内部通过 ::catalogue_domain 进行自引用，
// 以便过程宏生成的路径在本 crate 内同样可以解析。
extern crate self as catalogue_domain;
