//! Descriptor caching, error reporting and the process-wide helpers.

use std::sync::Arc;

use si_reflect::derive::Reflect;
use si_reflect::impls::NonGenericTypeInfoCell;
use si_reflect::info::{FieldInfo, ReflectKind, StructInfo, TypeInfo, TypePath, Typed, Visibility};
use si_reflect::ops::{ReflectMut, ReflectRef, Struct};
use si_reflect::{ErrorKind, LookupError, Store, struct_field_name, struct_fields};

#[derive(Reflect, Default, serde::Serialize)]
pub struct Account {
    #[reflect(tag(json = "id"))]
    #[serde(rename = "id")]
    pub account_id: u64,
    #[reflect(tag(json = "name,omitempty"))]
    #[serde(rename = "name")]
    pub display_name: String,
    #[reflect(embed)]
    #[serde(flatten)]
    pub audit: Audit,
    #[reflect(tag(json = "-"))]
    #[serde(skip)]
    pub session: u32,
    pub active: bool,
}

#[derive(Reflect, Default, serde::Serialize)]
pub struct Audit {
    #[reflect(tag(json = "created_at"))]
    #[serde(rename = "created_at")]
    pub created: u64,
    #[reflect(tag(json = "updated_at"))]
    #[serde(rename = "updated_at")]
    pub updated: u64,
}

#[test]
fn names_match_serialized_keys() {
    let store = Store::new();
    let account = Account::default();

    let json = serde_json::to_value(&account).unwrap();
    let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();

    assert_eq!(store.field_names(&account).unwrap(), keys);
}

#[test]
fn descriptors_are_cached() {
    let store = Store::new();
    assert!(store.is_empty());
    assert!(!store.contains::<Account>());

    let first = store.descriptor::<Account>().unwrap();
    let second = store.descriptor::<Account>().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert!(store.contains::<Account>());
    assert_eq!(store.len(), 1);

    // embedded types are not cached separately
    assert!(!store.contains::<Audit>());
}

#[test]
fn reset_rebuilds_equal_descriptors() {
    let store = Store::new();
    let before = store.descriptor::<Account>().unwrap();

    store.reset();
    assert!(store.is_empty());

    let after = store.descriptor::<Account>().unwrap();
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(before.field_names(), after.field_names());
    for name in before.field_names() {
        assert_eq!(before.field_id(name), after.field_id(name));
    }
}

#[test]
fn concurrent_lookups() {
    let store = Store::new();
    let expected = ["active", "created_at", "id", "name", "updated_at"];

    std::thread::scope(|s| {
        for i in 0..16 {
            let store = &store;
            s.spawn(move || {
                for _ in 0..64 {
                    let mut account = Account::default();
                    assert_eq!(store.field_names(&account).unwrap(), expected);
                    *store
                        .field_value(&mut account, "updated_at")
                        .unwrap()
                        .downcast_mut::<u64>()
                        .unwrap() = i;
                    assert_eq!(account.audit.updated, i);
                    if i % 4 == 0 {
                        store.reset();
                    }
                }
            });
        }
    });

    assert!(store.len() <= 1);
    assert_eq!(store.descriptor::<Account>().unwrap().field_names(), expected);
}

#[test]
fn invalid_argument() {
    let store = Store::new();
    let err = store.field_names(&42_i32).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(matches!(
        err,
        LookupError::InvalidArgument { type_path: "i32", kind: ReflectKind::Opaque }
    ));
    assert_eq!(err.to_string(), "`i32` is not a struct, found Opaque");

    let err = store.descriptor_for(i32::type_info()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(store.is_empty());
}

#[test]
fn not_found_message() {
    let store = Store::new();
    let err = store.field_id(&Account::default(), "account_id").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    let message = err.to_string();
    assert!(message.contains("account_id"), "{message}");
    assert!(message.contains(Account::type_path()), "{message}");
}

// -----------------------------------------------------------------------------
// A struct whose info lists a public field it never hands out.

struct Sealed {
    pub value: u8,
}

impl TypePath for Sealed {
    fn type_path() -> &'static str {
        "store::Sealed"
    }
    fn type_name() -> &'static str {
        "Sealed"
    }
    fn type_ident() -> &'static str {
        "Sealed"
    }
}

impl Typed for Sealed {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| {
            TypeInfo::Struct(StructInfo::new::<Self>(&[FieldInfo::new::<u8>("value", 0)
                .with_visibility(Visibility::Public)
                .with_tags(&[("json", "v")])]))
        })
    }
}

impl Struct for Sealed {
    fn field_at(&self, _index: usize) -> Option<&dyn si_reflect::Reflect> {
        None
    }
    fn field_at_mut(&mut self, _index: usize) -> Option<&mut dyn si_reflect::Reflect> {
        None
    }
    fn field_len(&self) -> usize {
        1
    }
}

impl si_reflect::Reflect for Sealed {
    fn set(
        &mut self,
        value: Box<dyn si_reflect::Reflect>,
    ) -> Result<(), Box<dyn si_reflect::Reflect>> {
        *self = value.take::<Self>()?;
        Ok(())
    }
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Struct
    }
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Struct(self)
    }
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Struct(self)
    }
}

#[test]
fn invalid_state() {
    let store = Store::new();
    let mut sealed = Sealed { value: 3 };

    assert_eq!(store.field_names(&sealed).unwrap(), ["v"]);
    assert_eq!(store.field_id(&sealed, "v").unwrap().field(), "value");

    let err = store.field_ref(&sealed, "v").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);
    let err = store.field_value(&mut sealed, "v").unwrap_err();
    assert!(matches!(err, LookupError::InvalidState { ref name, .. } if name == "v"));
    assert_eq!(sealed.value, 3);
}

// -----------------------------------------------------------------------------
// Process-wide helpers

#[test]
fn legacy_wrappers() {
    let account = Account::default();

    assert_eq!(
        struct_fields(&account).unwrap(),
        ["active", "created_at", "id", "name", "updated_at"],
    );
    assert_eq!(struct_field_name(&account, "name"), Some("display_name"));
    assert_eq!(struct_field_name(&account, "created_at"), Some("created"));
    assert_eq!(struct_field_name(&account, "session"), None);
    assert_eq!(struct_field_name(&7_u8, "id"), None);
    assert_eq!(struct_fields(&String::new()), None);
    assert_eq!(struct_fields(&Box::new(Account::default())).unwrap().len(), 5);
}

#[cfg(feature = "auto_register")]
mod auto {
    use si_reflect::Store;
    use si_reflect::derive::Reflect;

    #[derive(Reflect)]
    #[reflect(auto_register)]
    pub struct Registered {
        #[reflect(tag(json = "r"))]
        pub field: u8,
    }

    #[test]
    fn registered_types_are_analyzed() {
        let store = Store::new();
        let count = store.auto_register().unwrap();

        assert!(count >= 1);
        assert_eq!(store.len(), count);
        assert!(store.contains::<Registered>());
        assert_eq!(store.descriptor::<Registered>().unwrap().field_names(), ["r"]);
    }
}
