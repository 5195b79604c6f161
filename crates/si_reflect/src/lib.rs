#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code refers to `::si_reflect`, which must also resolve inside
// this crate for its own tests.
extern crate self as si_reflect;

// -----------------------------------------------------------------------------
// no_std support

// The descriptor cache needs `std::sync::RwLock`.
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod access;
pub mod descriptor;
pub mod impls;
pub mod info;
pub mod ops;
pub mod store;

// -----------------------------------------------------------------------------
// Top-Level exports

pub mod __macro_exports;

pub use reflection::Reflect;
pub use si_reflect_derive as derive;

pub use store::{DEFAULT_STORE, EmbedPrecedence, ErrorKind, LookupError, Store, StoreConfig};
pub use store::{struct_field_name, struct_fields};
