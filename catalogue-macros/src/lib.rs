//! 目录管理领域的过程宏（catalogue-macros）
//!
//! - `#[entity]`：为实体结构体注入标识字段并实现 `Entity`，相等性按标识比较；
//! - `#[entity_id]`：为字符串标识包装类型生成构造、随机生成与转换实现；
//! - `#[value_object]`：为值对象合并规范派生。
//!
use proc_macro::TokenStream;

mod derive_utils;
mod entity;
mod entity_id;
mod field_utils;
mod value_object;

/// 实体宏
/// - 若缺失则追加字段 `id: IdType` 并置于字段最前
/// - 自动为目标结构体实现 `::catalogue_domain::entity::Entity`
/// - 按标识生成 `PartialEq`/`Eq`/`Hash`
/// - 支持参数：`#[entity(id = IdType, debug = true|false)]`，`id` 默认 `String`
#[proc_macro_attribute]
pub fn entity(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity::expand(attr, item)
}

/// 实体 ID 宏
/// 用于形如 `struct CategoryId(String);` 的标识包装类型，生成：
/// - `unique()`：基于 UUID v4 生成小写字符串标识
/// - `new`/`value`、`Display`、`FromStr`、`AsRef` 与双向 `From`
#[proc_macro_attribute]
pub fn entity_id(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity_id::expand(attr, item)
}

/// 值对象宏
/// - 支持结构体（具名或 tuple）与枚举
/// - 参数：`#[value_object(debug = true|false, default = true|false)]`
#[proc_macro_attribute]
pub fn value_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    value_object::expand(attr, item)
}
