//! Helpers for implementing the reflection traits, and the built-in impls.
//!
//! - [`concat`]: string concatenation for generic `TypePath` impls.
//! - [`NonGenericTypeInfoCell`], [`GenericTypeInfoCell`], [`GenericTypePathCell`]:
//!   static storage for `Typed` and `TypePath` impls.
//!
//! ## Implemented types
//!
//! - opaque: `bool`, `char`, `i8`-`i128`, `u8`-`u128`, `isize`, `usize`,
//!   `f32`, `f64`, `String`, `&'static str`, `Vec<T>`, `Option<T>`
//! - pointer: `Box<T>`

// -----------------------------------------------------------------------------
// Modules

mod boxed;
mod cell;
mod opaque;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeCell, NonGenericTypeCell};
pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};

/// Concatenates string slices into one preallocated `String`.
///
/// ```
/// use si_reflect::impls::concat;
///
/// let s = concat(&["alloc::vec::Vec", "<", "u8", ">"]);
/// assert_eq!(s, "alloc::vec::Vec<u8>");
/// assert!(s.capacity() >= 19);
/// ```
#[inline(never)]
pub fn concat(parts: &[&str]) -> alloc::string::String {
    let len = parts.iter().map(|part| part.len()).sum();
    let mut out = alloc::string::String::with_capacity(len);
    parts.iter().for_each(|part| out.push_str(part));
    out
}
