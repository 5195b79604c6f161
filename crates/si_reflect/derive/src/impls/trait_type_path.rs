use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use crate::derive_data::ReflectMeta;
use crate::path::CellKind;
use crate::path::fp::OptionFP;

/// `impl TypePath`.
///
/// Non-generic types return string literals. Generic types join the names
/// of their arguments once per instantiation and keep the result in a
/// `GenericTypePathCell`.
pub(crate) fn impl_trait_type_path(meta: &ReflectMeta) -> TokenStream {
    let si_reflect_path = meta.si_reflect_path();
    let type_path_ = crate::path::type_path_(si_reflect_path);
    let option_ = OptionFP.to_token_stream();

    let [type_path, type_name] = [meta.type_path(), meta.type_name()].map(|name| {
        if meta.impl_with_generic() {
            let init = name.owned_string(si_reflect_path);
            crate::path::static_cell_(si_reflect_path, CellKind::GenericTypePath, init)
        } else {
            name.static_str()
        }
    });
    let type_ident = meta.type_ident().static_str();
    let module_path = meta.module_path().static_str();

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(false);

    quote! {
        impl #impl_generics #type_path_ for #real_ident #ty_generics #where_clause {
            fn type_path() -> &'static str {
                #type_path
            }

            fn type_name() -> &'static str {
                #type_name
            }

            #[inline]
            fn type_ident() -> &'static str {
                #type_ident
            }

            #[inline]
            fn module_path() -> #option_<&'static str> {
                #option_::Some(#module_path)
            }
        }
    }
}
