use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

/// Which `si_reflect::impls` cell a generated impl stores its value in.
#[derive(Clone, Copy)]
pub(crate) enum CellKind {
    /// `NonGenericTypeInfoCell`, a once-cell.
    TypeInfo,
    /// `GenericTypeInfoCell`, one entry per instantiation.
    GenericTypeInfo,
    /// `GenericTypePathCell`, one entry per instantiation.
    GenericTypePath,
}

/// A function body that keeps the value built by `init` in a `static` cell
/// and returns a `'static` reference to it.
pub(crate) fn static_cell_(si_reflect_path: &syn::Path, kind: CellKind, init: TokenStream) -> TokenStream {
    let (name, getter) = match kind {
        CellKind::TypeInfo => ("NonGenericTypeInfoCell", quote!(get_or_init)),
        CellKind::GenericTypeInfo => ("GenericTypeInfoCell", quote!(get_or_insert::<Self>)),
        CellKind::GenericTypePath => ("GenericTypePathCell", quote!(get_or_insert::<Self>)),
    };
    let cell = Ident::new(name, Span::call_site());

    quote! {
        static CELL: #si_reflect_path::impls::#cell = #si_reflect_path::impls::#cell::new();
        CELL.#getter(|| #init)
    }
}
