//! Field resolution on live values.
//!
//! These functions walk a value along a [`FieldId`] path, following owning
//! pointers on the way. [`Store::field_value`] and [`Store::field_ref`] are
//! built on them.
//!
//! [`FieldId`]: crate::descriptor::FieldId
//! [`Store::field_value`]: crate::Store::field_value
//! [`Store::field_ref`]: crate::Store::field_ref

// -----------------------------------------------------------------------------
// Modules

mod resolve;

// -----------------------------------------------------------------------------
// Exports

pub use resolve::{deref_struct, deref_struct_mut, resolve, resolve_mut};
