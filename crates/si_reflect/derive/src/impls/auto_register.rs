use proc_macro2::TokenStream;

use crate::derive_data::ReflectMeta;

/// Submits `<T as Typed>::type_info` for `Store::auto_register`.
///
/// A generic type has no single `TypeInfo` to submit, so asking for it is a
/// compile error.
#[cfg(feature = "auto_register")]
pub(crate) fn impl_auto_register(meta: &ReflectMeta) -> Option<TokenStream> {
    let span = meta.attrs().auto_register?;

    if meta.impl_with_generic() {
        let err = syn::Error::new(span, "`auto_register` is not supported on generic types");
        return Some(err.into_compile_error());
    }

    let si_reflect_path = meta.si_reflect_path();
    let auto_register_ = crate::path::auto_register_(si_reflect_path);
    let typed_ = crate::path::typed_(si_reflect_path);
    let real_ident = meta.real_ident();

    Some(quote::quote_spanned! { span =>
        #auto_register_::inventory::submit! {
            #auto_register_::__AutoRegisterFunc(<#real_ident as #typed_>::type_info)
        }
    })
}

#[cfg(not(feature = "auto_register"))]
pub(crate) fn impl_auto_register(_: &ReflectMeta) -> Option<TokenStream> {
    None
}
