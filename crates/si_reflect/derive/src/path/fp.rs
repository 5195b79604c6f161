//! Fully qualified paths of `core` items.
//!
//! Generated code must not depend on what the caller has in scope, so every
//! `core` item is written with its full path, e.g. `#OptionFP::Some(x)`.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_fp {
    ($($name:ident => $($seg:ident)::+,)*) => {
        $(
            pub(crate) struct $name;

            impl ToTokens for $name {
                #[inline]
                fn to_tokens(&self, tokens: &mut TokenStream) {
                    tokens.extend(quote!(:: $($seg)::+));
                }
            }
        )*
    };
}

define_fp! {
    AnyFP => core::any::Any,
    SendFP => core::marker::Send,
    SyncFP => core::marker::Sync,
    OptionFP => core::option::Option,
    ResultFP => core::result::Result,
}
