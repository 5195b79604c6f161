use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, ImplGenerics, Path, Type, TypeGenerics};

use super::{TypeAttributes, TypeParser};
use crate::utils::StringExpr;

/// Type level data shared by every generated impl.
pub(crate) struct ReflectMeta<'a> {
    si_reflect_path: Path,
    attrs: TypeAttributes,
    type_parser: TypeParser<'a>,
    // `syn::Type` does not impl `Ord`, and the iteration order must be stable
    // across compilations.
    active_types: HashSet<Type, FixedState>,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("si_reflect_path", &self.si_reflect_path.to_token_stream())
            .field("type_parser", &self.type_parser)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, type_parser: TypeParser<'a>) -> Self {
        Self {
            attrs,
            type_parser,
            si_reflect_path: crate::path::si_reflect(),
            active_types: HashSet::default(),
        }
    }

    /// Records the types of reflected fields, see [`ReflectMeta::split_generics`].
    #[inline]
    pub(super) fn set_active_types(&mut self, active_types: HashSet<Type, FixedState>) {
        self.active_types = active_types;
    }

    #[inline]
    pub fn si_reflect_path(&self) -> &Path {
        &self.si_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn generics(&self) -> &'a Generics {
        self.type_parser.generics()
    }

    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        self.type_parser.impl_with_generic()
    }

    #[inline]
    pub fn real_ident(&self) -> TokenStream {
        self.type_parser.real_ident()
    }

    #[inline]
    pub fn module_path(&self) -> StringExpr {
        self.type_parser.module_path()
    }

    #[inline]
    pub fn type_ident(&self) -> StringExpr {
        self.type_parser.type_ident()
    }

    #[inline]
    pub fn type_name(&self) -> StringExpr {
        self.type_parser.type_name(&self.si_reflect_path)
    }

    #[inline]
    pub fn type_path(&self) -> StringExpr {
        self.type_parser.type_path(&self.si_reflect_path)
    }

    /// Return `impl_generics`, `ty_generics` and a `where` clause.
    ///
    /// ```ignore
    /// let real_ident = meta.real_ident();
    /// let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);
    ///
    /// quote! {
    ///     impl #impl_generics TraitName for #real_ident #ty_generics #where_clause {
    ///         /* ... */
    ///     }
    /// }
    /// ```
    ///
    /// The `where` clause always ends with a comma, so more predicates can
    /// be appended.
    ///
    /// - Type itself: `'static` if it has lifetimes, `Any + Send + Sync` if it
    ///   has type parameters.
    /// - Type parameters: `TypePath`.
    /// - Reflected field types mentioning a type parameter:
    ///   `Reflect + Typed`, if `add_reflect_typed`.
    pub fn split_generics(
        &self,
        add_reflect_typed: bool,
    ) -> (ImplGenerics<'_>, TypeGenerics<'_>, TokenStream) {
        use crate::path::fp::{AnyFP, SendFP, SyncFP};

        let generics = self.generics();

        let mut generic_where_clause = quote! { where };

        if generics.type_params().next().is_some() {
            generic_where_clause.extend(quote! { Self: #AnyFP + #SendFP + #SyncFP, });
        } else if generics.lifetimes().next().is_some() {
            generic_where_clause.extend(quote! { Self: 'static, });
        }

        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        // Maintain existing where clause bounds, if any.
        if let Some(where_clause) = where_clause {
            let predicates = where_clause.predicates.iter();
            generic_where_clause.extend(quote! { #(#predicates,)* });
        }

        let type_path_predicates = self.type_path_predicates();
        generic_where_clause.extend(quote! { #(#type_path_predicates,)* });

        if add_reflect_typed {
            let field_predicates = self.field_type_predicates();
            generic_where_clause.extend(quote! { #(#field_predicates,)* });
        }

        (impl_generics, ty_generics, generic_where_clause)
    }

    fn type_path_predicates(&self) -> impl Iterator<Item = TokenStream> + '_ {
        let type_path_ = crate::path::type_path_(&self.si_reflect_path);
        self.generics().type_params().map(move |param| {
            let ident = &param.ident;
            quote!(#ident : #type_path_)
        })
    }

    fn field_type_predicates(&self) -> Vec<TokenStream> {
        let type_param_idents = self
            .generics()
            .type_params()
            .map(|type_param| type_param.ident.clone())
            .collect::<Vec<syn::Ident>>();

        if type_param_idents.is_empty() || self.active_types.is_empty() {
            return Vec::new();
        }

        let reflect_ = crate::path::reflect_(&self.si_reflect_path);
        let typed_ = crate::path::typed_(&self.si_reflect_path);

        // Do any of the identifiers in `idents` appear in `token_stream`?
        fn is_any_ident_in_token_stream(idents: &[syn::Ident], token_stream: TokenStream) -> bool {
            token_stream.into_iter().any(|token_tree| match token_tree {
                proc_macro2::TokenTree::Ident(ident) => idents.contains(&ident),
                proc_macro2::TokenTree::Group(group) => {
                    is_any_ident_in_token_stream(idents, group.stream())
                }
                _ => false,
            })
        }

        self.active_types
            .iter()
            .filter(|ty| is_any_ident_in_token_stream(&type_param_idents, ty.to_token_stream()))
            .map(|ty| quote! { #ty: #reflect_ + #typed_ })
            .collect()
    }
}

pub(crate) struct FixedHasher(u64);

impl core::hash::Hasher for FixedHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for b in bytes {
            self.0 = self.0.rotate_left(5).wrapping_add(u64::from(*b)) ^ 0x9e37_79b9;
        }
    }
}

/// A fixed hash state, so that `where` clauses generated from the same input
/// come out identical on every compilation.
#[derive(Copy, Clone, Default)]
pub(super) struct FixedState;

impl core::hash::BuildHasher for FixedState {
    type Hasher = FixedHasher;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        FixedHasher(0)
    }
}
