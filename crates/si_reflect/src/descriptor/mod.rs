//! Per-type tables mapping external field names to fields.
//!
//! [`TypeAnalyzer`] walks the [`StructInfo`] of a type once and produces a
//! [`TypeDescriptor`]. Names contributed by embedded structs are flattened
//! into the outer descriptor, each entry keeping the [`FieldId`] path that
//! leads to the field from the outer struct.
//!
//! Descriptors are usually obtained through a [`Store`], which caches them.
//!
//! [`StructInfo`]: crate::info::StructInfo
//! [`Store`]: crate::Store

// -----------------------------------------------------------------------------
// Modules

mod analyzer;
mod descriptor;
mod field_id;
mod tag;

// -----------------------------------------------------------------------------
// Exports

pub use analyzer::TypeAnalyzer;
pub use descriptor::{FieldEntry, TypeDescriptor};
pub use field_id::FieldId;
pub use tag::{Tag, TagOptions};
