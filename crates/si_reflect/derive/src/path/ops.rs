use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn struct_(si_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #si_reflect_path::ops::Struct
    }
}

#[inline(always)]
pub(crate) fn embed_(si_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #si_reflect_path::ops::Embed
    }
}

#[inline(always)]
pub(crate) fn reflect_ref_(si_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #si_reflect_path::ops::ReflectRef
    }
}

#[inline(always)]
pub(crate) fn reflect_mut_(si_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #si_reflect_path::ops::ReflectMut
    }
}
