//! Paths into `si_reflect` used by generated code.
//!
//! Keeping them here means a change in the layout of `si_reflect` only
//! touches this module.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the access path to the `si_reflect` crate.
///
/// The caller's `Cargo.toml` is scanned:
///
/// 1. For crates that depend on `si_reflect`, `::si_reflect` is returned.
/// 2. For crates that depend on `structinfo`, `::structinfo::reflect` is returned.
/// 3. Otherwise `::si_reflect` is returned, which may be incorrect.
///
/// This reads files and takes a lock, so the path is computed once per
/// derive and passed around.
pub(crate) fn si_reflect() -> syn::Path {
    si_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("si_reflect"))
}

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod info;
mod ops;

pub(crate) mod fp;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use cell::*;
pub(crate) use info::*;
pub(crate) use ops::*;

#[inline(always)]
pub(crate) fn macro_utils_(si_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #si_reflect_path::__macro_exports::macro_utils
    }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(si_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #si_reflect_path::__macro_exports::auto_register
    }
}

#[inline(always)]
pub(crate) fn reflect_(si_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #si_reflect_path::Reflect
    }
}
