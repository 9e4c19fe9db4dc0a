use catalogue_domain::entity::Entity;
use catalogue_macros::{entity, entity_id};
use std::collections::HashSet;

#[entity_id]
struct ShelfId(String);

#[entity(id = ShelfId)]
struct Shelf {
    label: String,
}

// 未指定 id 类型时使用 String
#[entity]
struct Note {
    body: Option<String>,
}

#[entity(debug = false)]
struct Secret {
    value: String,
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Secret({})", self.id)
    }
}

fn main() {
    let id = ShelfId::unique();
    let a = Shelf {
        id: id.clone(),
        label: "a".into(),
    };
    let b = Shelf {
        id,
        label: "b".into(),
    };
    // 仅按 id 比较
    assert!(a == b);
    let mut set = HashSet::new();
    set.insert(a.clone());
    assert!(!set.insert(b));
    let _ = a.id().value();
    let _ = format!("{:?}", a.label);

    let note = Note {
        id: "n-1".to_string(),
        body: None,
    };
    let json = serde_json::to_string(&note).unwrap();
    let back: Note = serde_json::from_str(&json).unwrap();
    assert_eq!(back.id(), "n-1");
    assert!(back.body.is_none());

    let s = Secret {
        id: "s".into(),
        value: "hidden".into(),
    };
    let _ = s.value.len();
    assert_eq!(format!("{s:?}"), "Secret(s)");
}
