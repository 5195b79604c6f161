//! Wrappers over [`DEFAULT_STORE`] that report failure with `None`.

use alloc::vec::Vec;

use crate::Reflect;
use crate::store::DEFAULT_STORE;

/// Returns the external names of the struct behind `value`, sorted.
///
/// Returns `None` if `value` is not a struct.
///
/// ```
/// use si_reflect::{derive::Reflect, struct_fields};
///
/// #[derive(Reflect, Default)]
/// struct Foo {
///     #[reflect(tag(json = "a,omitempty"))]
///     pub alpha: u8,
///     pub beta: u8,
/// }
///
/// assert_eq!(struct_fields(&Foo::default()).unwrap(), ["a", "beta"]);
/// assert_eq!(struct_fields(&1_u8), None);
/// ```
pub fn struct_fields(value: &dyn Reflect) -> Option<Vec<&'static str>> {
    DEFAULT_STORE.field_names(value).ok()
}

/// Returns the declared name of the field with external name `name`.
///
/// Returns `None` if `value` is not a struct or the name is unknown.
///
/// ```
/// use si_reflect::{derive::Reflect, struct_field_name};
///
/// #[derive(Reflect, Default)]
/// struct Foo {
///     #[reflect(tag(json = "a"))]
///     pub alpha: u8,
/// }
///
/// assert_eq!(struct_field_name(&Foo::default(), "a"), Some("alpha"));
/// assert_eq!(struct_field_name(&Foo::default(), "alpha"), None);
/// ```
pub fn struct_field_name(value: &dyn Reflect, name: &str) -> Option<&'static str> {
    DEFAULT_STORE
        .field_id(value, name)
        .ok()
        .map(|id| id.field())
}
