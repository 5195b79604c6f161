use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote, quote_spanned};

use super::{impl_auto_register, impl_trait_reflect, impl_trait_type_path, impl_trait_typed};

use crate::derive_data::ReflectStruct;
use crate::path::fp::OptionFP;

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let type_path_trait_tokens = impl_trait_type_path(meta);
    let typed_trait_tokens = impl_trait_typed(meta, info.to_info_tokens());
    let struct_trait_tokens = impl_trait_struct(info);
    let embed_trait_tokens = impl_trait_embed(info);
    let reflect_trait_tokens = impl_trait_reflect(meta, quote!(Struct));
    let auto_register_tokens = impl_auto_register(meta);

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #struct_trait_tokens

        #embed_trait_tokens

        #reflect_trait_tokens

        #auto_register_tokens
    }
}

/// Generate `Struct` trait implementation tokens.
///
/// Every embedded field type is required to be `Embed` in the `where` clause,
/// which reports misuse at the field.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let si_reflect_path = meta.si_reflect_path();
    let struct_ = crate::path::struct_(si_reflect_path);
    let reflect_ = crate::path::reflect_(si_reflect_path);
    let embed_ = crate::path::embed_(si_reflect_path);
    let option_ = OptionFP.to_token_stream();

    let field_indices = info
        .active_fields()
        .map(|field| field.index)
        .collect::<Vec<usize>>();
    let field_idents = info
        .active_fields()
        .map(|field| field.ident())
        .collect::<Vec<_>>();
    let field_count = info.fields().len();

    let embed_predicates = info.embedded_fields().map(|field| {
        let ty = &field.data.ty;
        let span = field.attrs.embed.unwrap_or_else(Span::call_site);
        quote_spanned! { span =>
            #ty: #embed_
        }
    });

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    quote! {
        impl #impl_generics #struct_ for #real_ident #ty_generics #where_clause #(#embed_predicates,)* {
            fn field_at(&self, index: usize) -> #option_<&dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(&self.#field_idents as &dyn #reflect_),)*
                    _ => #option_::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> #option_<&mut dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(&mut self.#field_idents as &mut dyn #reflect_),)*
                    _ => #option_::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }
        }
    }
}

/// Generate `Embed` trait implementation tokens.
fn impl_trait_embed(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let embed_ = crate::path::embed_(meta.si_reflect_path());

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.generics().split_for_impl();

    quote! {
        impl #impl_generics #embed_ for #real_ident #ty_generics #where_clause {}
    }
}
