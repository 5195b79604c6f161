//! Kind-specific views of reflected values.
//!
//! - [`Struct`]: For struct (e.g. `A{ .. }`).
//! - [`Pointer`]: For owning pointers (e.g. `Box<A>`).
//!
//! Everything else is opaque. [`ReflectRef`] and [`ReflectMut`] select
//! the view at runtime.
//!
//! [`Embed`] marks types that may be embedded with `#[reflect(embed)]`.

// -----------------------------------------------------------------------------
// Modules

mod embed;
mod kind;
mod pointer_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use embed::Embed;
pub use kind::{ReflectMut, ReflectRef};
pub use pointer_ops::Pointer;
pub use struct_ops::Struct;
