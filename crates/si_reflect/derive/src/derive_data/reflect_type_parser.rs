use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{ConstParam, GenericParam, Generics, Ident, Path, TypeParam};

use crate::utils::StringExpr;

/// Type path and generic parameters of the derived type.
///
/// The type must be reachable with just its ident from where the derive
/// expands. `custom_path` comes from `#[reflect(type_path = "...")]`;
/// without it [`module_path!()`](module_path) supplies the module.
pub(crate) struct TypeParser<'a> {
    ident: &'a Ident,
    custom_path: Option<Path>,
    generics: &'a Generics,
}

impl core::fmt::Debug for TypeParser<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.real_ident(), f)
    }
}

impl<'a> TypeParser<'a> {
    pub(crate) fn new(
        ident: &'a Ident,
        custom_path: Option<Path>,
        generics: &'a Generics,
    ) -> TypeParser<'a> {
        TypeParser {
            ident,
            custom_path,
            generics,
        }
    }

    pub(super) fn generics(&self) -> &'a Generics {
        self.generics
    }

    /// Whether `Typed` and `TypePath` need per-instantiation storage.
    pub(super) fn impl_with_generic(&self) -> bool {
        // exist non-lifetime generic parameters
        !self
            .generics
            .params
            .iter()
            .all(|param| matches!(param, GenericParam::Lifetime(_)))
    }

    /// This name is used in `impl ... for #real_ident {...}`.
    pub(super) fn real_ident(&self) -> TokenStream {
        self.ident.to_token_stream()
    }

    /// The (custom) ident.
    fn get_ident(&self) -> &Ident {
        match &self.custom_path {
            // `TypeAttributes` guarantees at least two segments.
            Some(path) => path.segments.last().map_or(self.ident, |it| &it.ident),
            None => self.ident,
        }
    }

    pub(super) fn module_path(&self) -> StringExpr {
        match &self.custom_path {
            Some(path) => {
                let module = path
                    .segments
                    .iter()
                    .take(path.segments.len() - 1)
                    .map(|segment| segment.ident.to_string())
                    .collect::<Vec<_>>()
                    .join("::");
                StringExpr::literal(&module)
            }
            None => StringExpr::from_macro(quote! { ::core::module_path!() }),
        }
    }

    pub(super) fn type_ident(&self) -> StringExpr {
        StringExpr::literal(&self.get_ident().to_string())
    }

    /// `"Foo<u8>"` for `my_crate::Foo<u8>`.
    pub(super) fn type_name(&self, si_reflect_path: &Path) -> StringExpr {
        self.with_generic_args(self.type_ident(), quote!(type_name), si_reflect_path)
    }

    /// `"my_crate::Foo<u8>"` for `my_crate::Foo<u8>`.
    pub(super) fn type_path(&self, si_reflect_path: &Path) -> StringExpr {
        let mut path = self.module_path();
        path.push_str("::").append(self.type_ident());
        self.with_generic_args(path, quote!(type_path), si_reflect_path)
    }

    /// Appends `<A, B>`, naming each type parameter with `TypePath::#method`.
    ///
    /// Const parameters are formatted at runtime, lifetimes are left out.
    fn with_generic_args(
        &self,
        mut name: StringExpr,
        method: TokenStream,
        si_reflect_path: &Path,
    ) -> StringExpr {
        if !self.impl_with_generic() {
            return name;
        }

        let type_path_ = crate::path::type_path_(si_reflect_path);
        let macro_utils_ = crate::path::macro_utils_(si_reflect_path);

        name.push_str("<");
        let mut first = true;
        for param in &self.generics.params {
            let arg = match param {
                GenericParam::Type(TypeParam { ident, .. }) => {
                    quote! { <#ident as #type_path_>::#method() }
                }
                GenericParam::Const(ConstParam { ident, ty, .. }) => {
                    quote! { &<#ty as #macro_utils_::ToString>::to_string(&#ident) as &str }
                }
                GenericParam::Lifetime(_) => continue,
            };
            if !first {
                name.push_str(", ");
            }
            first = false;
            name.push_runtime(arg);
        }
        name.push_str(">");
        name
    }
}
