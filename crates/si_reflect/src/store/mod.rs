//! The type-keyed descriptor cache and name based field lookups.
//!
//! A [`Store`] analyzes each struct type at most once per generation and
//! answers lookups from the cached [`TypeDescriptor`]. [`DEFAULT_STORE`] is
//! the process-wide instance used by the legacy wrappers [`struct_fields`]
//! and [`struct_field_name`].
//!
//! [`TypeDescriptor`]: crate::descriptor::TypeDescriptor

// -----------------------------------------------------------------------------
// Modules

mod config;
mod error;
mod legacy;
mod store;

// -----------------------------------------------------------------------------
// Exports

pub use config::{EmbedPrecedence, StoreConfig};
pub use error::{ErrorKind, LookupError};
pub use legacy::{struct_field_name, struct_fields};
pub use store::{DEFAULT_STORE, Store};
