use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;
use crate::path::CellKind;

/// `impl Typed`, storing the info built by `type_info_tokens`.
///
/// See [`ReflectStruct::to_info_tokens`](crate::derive_data::ReflectStruct::to_info_tokens).
pub(crate) fn impl_trait_typed(meta: &ReflectMeta, type_info_tokens: TokenStream) -> TokenStream {
    let si_reflect_path = meta.si_reflect_path();
    let typed_ = crate::path::typed_(si_reflect_path);
    let type_info_ = crate::path::type_info_(si_reflect_path);

    let kind = if meta.impl_with_generic() {
        CellKind::GenericTypeInfo
    } else {
        CellKind::TypeInfo
    };
    let body = crate::path::static_cell_(si_reflect_path, kind, type_info_tokens);

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    quote! {
        impl #impl_generics #typed_ for #real_ident #ty_generics #where_clause {
            fn type_info() -> &'static #type_info_ {
                #body
            }
        }
    }
}
