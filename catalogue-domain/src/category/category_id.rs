use catalogue_macros::entity_id;

/// 分类标识：不透明的小写字符串，创建后不可变
#[entity_id]
pub struct CategoryId(String);

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn unique_ids_are_lowercase_uuids() {
        let a = CategoryId::unique();
        let b = CategoryId::unique();
        assert_ne!(a, b);
        assert_eq!(a.value(), a.value().to_lowercase());
        assert!(Uuid::parse_str(a.value()).is_ok());
    }

    #[test]
    fn from_uuid_normalizes_case() {
        let uuid = Uuid::new_v4();
        let id = CategoryId::from(uuid);
        assert_eq!(id.value(), uuid.to_string().to_lowercase());
    }

    #[test]
    fn from_string_is_kept_verbatim() {
        let id: CategoryId = "ABC-123".parse().unwrap();
        assert_eq!(id.to_string(), "ABC-123");
        assert_eq!(id, CategoryId::new("ABC-123"));
        assert_eq!(String::from(id), "ABC-123");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = CategoryId::new("cat-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""cat-1""#);
    }
}
