//! External name resolution through `#[derive(Reflect)]`.

use si_reflect::derive::Reflect;
use si_reflect::info::Typed;
use si_reflect::{EmbedPrecedence, ErrorKind, Store, StoreConfig};

#[derive(Reflect, Default, Debug, PartialEq)]
pub struct Quux {
    #[reflect(tag(json = "baz"))]
    pub baz: String,
}

#[derive(Reflect, Default, Debug)]
pub struct X {
    private: i32,
    #[reflect(embed)]
    quux: Quux,
    #[reflect(tag(json = "foo"))]
    pub foo: String,
    #[reflect(tag(json = "bar,omitempty"))]
    pub bar: String,
}

fn sample() -> X {
    X {
        private: 7,
        quux: Quux { baz: "ghi".into() },
        foo: "abc".into(),
        bar: "def".into(),
    }
}

#[test]
fn embedded_names_are_promoted() {
    let store = Store::new();
    let mut names = store.field_names(&X::default()).unwrap();
    names.sort_unstable();
    assert_eq!(names, ["bar", "baz", "foo"]);
}

#[test]
fn field_value_writes_through() {
    let store = Store::new();
    let mut x = sample();

    let handle = store.field_value(&mut x, "foo").unwrap();
    assert_eq!(handle.downcast_ref::<String>().unwrap(), "abc");
    *handle.downcast_mut::<String>().unwrap() = "hacked".into();
    assert_eq!(x.foo, "hacked");

    let handle = store.field_value(&mut x, "baz").unwrap();
    handle.set(Box::new(String::from("jkl"))).unwrap();
    assert_eq!(x.quux.baz, "jkl");
    assert_eq!(x.private, 7);
}

#[test]
fn field_ids() {
    let store = Store::new();
    let x = sample();

    let id = store.field_id(&x, "bar").unwrap();
    assert_eq!(id.field(), "bar");
    assert!(id.is_direct());

    let id = store.field_id(&x, "baz").unwrap();
    assert_eq!(id.field(), "baz");
    assert_eq!(id.path(), &[1, 0]);

    let desc = store.descriptor::<X>().unwrap();
    assert!(desc.get("bar").unwrap().options().contains("omitempty"));
    assert!(desc.get("foo").unwrap().options().is_empty());
}

#[test]
fn unknown_names() {
    let store = Store::new();
    let mut x = sample();

    // declared names do not count once renamed
    for name in ["Foo", "private", "quux", ""] {
        let err = store.field_id(&x, name).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound, "{name}");
    }
    assert_eq!(
        store.field_value(&mut x, "nope").unwrap_err().kind(),
        ErrorKind::NotFound,
    );
    // the store stays usable
    assert!(store.field_ref(&x, "foo").is_ok());
}

// -----------------------------------------------------------------------------
// Visibility and exclusion

mod hidden {
    use si_reflect::derive::Reflect;

    #[derive(Reflect, Default)]
    pub struct Inner {
        pub visible: u8,
        #[reflect(tag(json = "-"))]
        pub excluded: u8,
        #[reflect(tag(json = "named"))]
        secret: u8,
    }

    #[derive(Reflect, Default)]
    pub struct Outer {
        #[reflect(embed)]
        pub inner: Inner,
        pub(crate) restricted: u8,
        #[reflect(tag(json = "-,"))]
        pub dash: u8,
        #[reflect(tag(json = ",omitempty"))]
        pub plain: u8,
        #[reflect(tag(yaml = "ignored"))]
        pub other_key: u8,
    }

    impl Inner {
        pub fn secret(&self) -> u8 {
            self.secret
        }
    }
}

#[test]
fn visibility_and_exclusion() {
    let store = Store::new();
    let outer = hidden::Outer::default();

    let names = store.field_names(&outer).unwrap();
    assert_eq!(names, ["-", "other_key", "plain", "visible"]);
    assert_eq!(outer.inner.secret(), 0);
    assert_eq!(outer.restricted, 0);

    let info = <hidden::Outer as Typed>::type_info().as_struct().unwrap();
    let restricted = info.field("restricted").unwrap();
    assert!(!restricted.is_public());
    assert!(restricted.type_info().is_none());
    assert_eq!(info.field("dash").unwrap().tag("json"), Some("-,"));
}

// -----------------------------------------------------------------------------
// Precedence

#[derive(Reflect, Default)]
pub struct First {
    #[reflect(tag(json = "shared"))]
    pub first: u8,
    #[reflect(tag(json = "id"))]
    pub first_id: u8,
}

#[derive(Reflect, Default)]
pub struct Second {
    #[reflect(tag(json = "shared"))]
    pub second: u8,
}

#[derive(Reflect, Default)]
pub struct Both {
    #[reflect(tag(json = "id"))]
    pub own_id: u8,
    #[reflect(embed)]
    pub first: First,
    #[reflect(embed)]
    pub second: Box<Second>,
    #[reflect(tag(json = "dup"))]
    pub dup_a: u8,
    #[reflect(tag(json = "dup"))]
    pub dup_b: u8,
}

#[test]
fn direct_fields_win_by_default() {
    let store = Store::new();
    let both = Both::default();

    assert_eq!(store.field_id(&both, "id").unwrap().field(), "own_id");
    assert_eq!(store.field_id(&both, "shared").unwrap().field(), "second");
    assert_eq!(store.field_id(&both, "dup").unwrap().field(), "dup_b");
}

#[test]
fn overwrite_precedence() {
    let store = Store::with_config(StoreConfig::new().with_precedence(EmbedPrecedence::Overwrite));
    let both = Both::default();

    assert_eq!(store.field_id(&both, "id").unwrap().field(), "first_id");
    assert_eq!(store.field_id(&both, "shared").unwrap().field(), "second");
    assert_eq!(store.field_id(&both, "dup").unwrap().field(), "dup_b");
}

#[test]
fn embedded_behind_box() {
    let store = Store::new();
    let mut both = Both::default();

    *store
        .field_value(&mut both, "shared")
        .unwrap()
        .downcast_mut::<u8>()
        .unwrap() = 4;
    assert_eq!(both.second.second, 4);
    assert_eq!(both.first.first, 0);
}

// -----------------------------------------------------------------------------
// Pointers, generics, tag keys

#[test]
fn pointer_instances() {
    let store = Store::new();
    let mut boxed: Box<Box<X>> = Box::new(Box::new(sample()));

    assert_eq!(store.field_names(&boxed).unwrap().len(), 3);
    let handle = store.field_value(&mut boxed, "foo").unwrap();
    *handle.downcast_mut::<String>().unwrap() = "deep".into();
    assert_eq!(boxed.foo, "deep");

    let err = store.field_names(&Box::new(3_u32)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(
        store.field_names(&String::new()).unwrap_err().kind(),
        ErrorKind::InvalidArgument,
    );
}

#[derive(Reflect, Default)]
#[reflect(type_path = "demo::Wrapper")]
pub struct Wrapper<T> {
    #[reflect(tag(json = "v"))]
    pub value: T,
    #[reflect(embed)]
    quux: Quux,
}

#[test]
fn generic_instantiations() {
    let store = Store::new();

    let a = store.descriptor::<Wrapper<u8>>().unwrap();
    let b = store.descriptor::<Wrapper<String>>().unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(a.type_path(), "demo::Wrapper<u8>");
    assert_eq!(b.type_path(), "demo::Wrapper<alloc::string::String>");
    assert_eq!(a.field_names(), ["baz", "v"]);

    let mut w = Wrapper::<u8>::default();
    *store
        .field_value(&mut w, "v")
        .unwrap()
        .downcast_mut::<u8>()
        .unwrap() = 9;
    assert_eq!(w.value, 9);
    assert_eq!(w.quux, Quux::default());
}

#[derive(Reflect, Default)]
pub struct MultiTag {
    #[reflect(tag(json = "j", yaml = "y"))]
    pub field: u8,
    #[reflect(tag(yaml = "-"))]
    pub json_only: u8,
}

#[test]
fn custom_tag_key() {
    let yaml = Store::with_config(StoreConfig::new().with_tag_key("yaml"));
    let json = Store::new();
    let value = MultiTag::default();

    assert_eq!(yaml.field_names(&value).unwrap(), ["y"]);
    assert_eq!(json.field_names(&value).unwrap(), ["j", "json_only"]);
}

// -----------------------------------------------------------------------------
// Self embedding

#[derive(Reflect)]
pub struct Node {
    #[reflect(tag(json = "node_id"))]
    pub id: u8,
    #[reflect(embed)]
    next: Box<Node>,
}

#[test]
fn self_embedding_type() {
    let store = Store::new();

    let desc = store.descriptor::<Node>().unwrap();
    assert_eq!(desc.field_names(), ["node_id"]);
    assert_eq!(desc.field_id("node_id").unwrap().path(), &[0]);
    assert!(store.contains::<Node>());
    assert!(store.contains::<Box<Node>>());
}
