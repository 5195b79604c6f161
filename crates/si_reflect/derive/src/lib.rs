//! See [`Reflect`](derive_reflect).
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection for structs with named fields
///
/// `#[derive(Reflect)]` implements `TypePath`, `Typed`, `Reflect`, `Struct`
/// and `Embed`.
///
/// Tuple structs, unit structs, enums and unions are rejected.
///
/// Every declared field is recorded in the `StructInfo`, in declaration
/// order. Fields that are `pub` or embedded are *reflected*: their type must
/// implement `Reflect` and they are reachable through `Struct::field_at`.
/// Other fields are only recorded by name, so their types are unconstrained.
///
/// ## Custom Type Path
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "my_crate::foo::Foo")]
/// struct Foo { /* ... */ }
/// ```
///
/// The path must contain a module and must not start with `::`. Generic
/// parameters are appended automatically.
///
/// This attribute can only be applied at the type level.
///
/// ## Tags
///
/// Field annotations are stored as `(key, value)` pairs, in the manner of
/// serialization tags:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Foo {
///     #[reflect(tag(json = "id,omitempty", yaml = "ident"))]
///     pub id: u64,
/// }
/// ```
///
/// A key may appear once per field.
///
/// ## Embedding
///
/// `#[reflect(embed)]` promotes the fields of the field's type into the
/// containing struct. The type must implement `Embed`, which every derived
/// struct does, directly or behind `Box`.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Outer {
///     #[reflect(embed)]
///     inner: Inner,
/// }
/// ```
///
/// ## Auto Registration
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(auto_register)]
/// struct A { /* ... */ }
/// ```
///
/// The type is collected at link time and analyzed by `Store::auto_register`.
/// This has no effect on generic types, and is a no-op when the
/// `auto_register` feature is disabled.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(ast)
}
