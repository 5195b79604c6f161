//! Compile-time type information.
//!
//! - [`TypePath`]: stable type names, independent of [`core::any::type_name`].
//! - [`Type`]: a [`TypeId`](core::any::TypeId) that can print its type path.
//! - [`TypeInfo`]: the static description of a reflected type, one of
//!     - [`StructInfo`]: a struct with named fields,
//!     - [`PointerInfo`]: an indirection such as `Box<T>`,
//!     - [`OpaqueInfo`]: everything whose internals are not exposed.
//! - [`FieldInfo`]: one declared struct field, with its [`Visibility`], tags
//!   and embedding flag.
//! - [`Typed`] / [`DynamicTyped`]: static and dynamic access to `TypeInfo`.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod opaque_info;
mod pointer_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::{FieldInfo, Visibility};
pub use opaque_info::OpaqueInfo;
pub use pointer_info::PointerInfo;
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath};
pub use typed::{DynamicTyped, Typed};
