use catalogue_macros::entity_id;
use std::str::FromStr;
use uuid::Uuid;

#[entity_id]
struct BookId(String);

fn main() {
    let id = BookId::unique();
    assert_eq!(id.value(), id.value().to_lowercase());
    assert!(Uuid::parse_str(id.value()).is_ok());

    let uuid = Uuid::new_v4();
    let from_uuid = BookId::from_uuid(uuid);
    assert_eq!(from_uuid, BookId::from(uuid));
    assert_eq!(from_uuid.to_string(), uuid.to_string());

    let parsed = BookId::from_str("abc").unwrap();
    assert_eq!(parsed, BookId::new("abc"));
    assert_eq!(parsed.as_ref(), "abc");

    let raw: String = parsed.clone().into();
    assert_eq!(raw, "abc");
    assert!(BookId::from("a") < BookId::from("b"));

    let json = serde_json::to_string(&parsed).unwrap();
    assert_eq!(json, "\"abc\"");
    let _ = format!("{parsed:?}");
}
