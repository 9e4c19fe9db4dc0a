//! 实体（Entity）基础抽象
//!
//! 为聚合与实体提供统一的标识（Id）能力；实体的相等性只由标识决定，
//! 通常由 `#[entity]` 宏生成。
//!
use std::{fmt::Display, hash::Hash, str::FromStr};

/// 具备唯一标识的实体抽象
pub trait Entity: Send + Sync {
    /// 实体标识类型，要求可解析、可显示、可克隆且可作为键
    type Id: FromStr + Clone + Display + Eq + Hash + Send + Sync;

    /// 获取实体标识
    fn id(&self) -> &Self::Id;
}

#[cfg(test)]
mod tests {
    use super::Entity;
    use catalogue_macros::entity;
    use std::collections::HashSet;

    #[entity]
    struct Tag {
        label: String,
    }

    #[test]
    fn equality_is_by_id_only() {
        let a = Tag {
            id: "t-1".to_string(),
            label: "rust".into(),
        };
        let b = Tag {
            id: "t-1".to_string(),
            label: "go".into(),
        };
        let c = Tag {
            id: "t-2".to_string(),
            label: "rust".into(),
        };

        assert_eq!(a.id(), "t-1");
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Tag> = [a.clone(), b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert_eq!(a.label, "rust");
    }
}
