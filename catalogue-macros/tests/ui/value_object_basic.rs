use catalogue_macros::value_object;

#[value_object]
struct Label {
    text: String,
}

#[value_object(debug = false)]
struct Opaque(i32);

#[value_object(default = true)]
enum Visibility {
    #[default]
    Public,
    Hidden,
}

#[value_object(default = true, debug = true)]
struct Limits {
    min: u32,
    max: u32,
}

fn main() {
    let a = Label {
        text: "x".to_string(),
    };
    assert_eq!(a.clone(), a);
    let _ = format!("{a:?}");

    let _ = Opaque(1) == Opaque(1);

    let v: Visibility = Default::default();
    assert_eq!(v, Visibility::Public);
    assert_ne!(v, Visibility::Hidden);

    let l = Limits::default();
    assert_eq!((l.min, l.max), (0, 0));
    let json = serde_json::to_string(&l).unwrap();
    let back: Limits = serde_json::from_str(&json).unwrap();
    assert_eq!(back, l);
}
