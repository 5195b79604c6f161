use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn type_path_(si_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #si_reflect_path::info::TypePath
    }
}

#[inline(always)]
pub(crate) fn typed_(si_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #si_reflect_path::info::Typed
    }
}

#[inline(always)]
pub(crate) fn type_info_(si_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #si_reflect_path::info::TypeInfo
    }
}

#[inline(always)]
pub(crate) fn struct_info_(si_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #si_reflect_path::info::StructInfo
    }
}

#[inline(always)]
pub(crate) fn field_info_(si_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #si_reflect_path::info::FieldInfo
    }
}

#[inline(always)]
pub(crate) fn visibility_(si_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #si_reflect_path::info::Visibility
    }
}

#[inline(always)]
pub(crate) fn reflect_kind_(si_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #si_reflect_path::info::ReflectKind
    }
}
