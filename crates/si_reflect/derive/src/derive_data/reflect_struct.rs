use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, Ident, Visibility, spanned::Spanned};

use super::reflect_meta::FixedState;
use super::{FieldAttributes, ReflectMeta, TypeAttributes, TypeParser};

/// A declared field of the derived struct.
pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    pub attrs: FieldAttributes,
    /// Position in the declaration, hidden fields included.
    pub index: usize,
}

impl StructField<'_> {
    #[inline]
    pub fn ident(&self) -> &Ident {
        // `ReflectStruct::from_input` only accepts named fields.
        self.data
            .ident
            .as_ref()
            .unwrap_or_else(|| unreachable!("named field"))
    }

    #[inline]
    pub fn is_public(&self) -> bool {
        matches!(self.data.vis, Visibility::Public(_))
    }

    /// Reflected fields are reachable through `Struct::field_at` and carry
    /// type information.
    #[inline]
    pub fn is_reflected(&self) -> bool {
        self.is_public() || self.attrs.embed.is_some()
    }

    /// Generates the `FieldInfo` expression of this field.
    fn to_info_tokens(&self, si_reflect_path: &syn::Path) -> TokenStream {
        let field_info_ = crate::path::field_info_(si_reflect_path);
        let visibility_ = crate::path::visibility_(si_reflect_path);

        let name = self.ident().to_string();
        let index = self.index;
        let ty = &self.data.ty;

        let visibility = match &self.data.vis {
            Visibility::Public(_) => quote!(Public),
            Visibility::Restricted(_) => quote!(Restricted),
            Visibility::Inherited => quote!(Private),
        };

        let constructor = if self.is_reflected() {
            quote! { #field_info_::new::<#ty>(#name, #index) }
        } else {
            quote! { #field_info_::hidden(#name, #index) }
        };

        let with_embedded = if self.attrs.embed.is_some() {
            quote! { .with_embedded(true) }
        } else {
            crate::utils::empty()
        };

        let with_tags = if self.attrs.tags.is_empty() {
            crate::utils::empty()
        } else {
            let tags = self
                .attrs
                .tags
                .iter()
                .map(|(key, value)| quote! { (#key, #value) });
            quote! { .with_tags(&[ #(#tags),* ]) }
        };

        quote! {
            #constructor
                .with_visibility(#visibility_::#visibility)
                #with_embedded
                #with_tags
        }
    }
}

/// A struct with named fields.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    /// Parses the derive input, rejecting everything but structs with named
    /// fields.
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;

        let named = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named,
                Fields::Unnamed(_) => {
                    return Err(syn::Error::new(
                        input.ident.span(),
                        "`Reflect` cannot be derived for tuple structs, use named fields",
                    ));
                }
                Fields::Unit => {
                    return Err(syn::Error::new(
                        input.ident.span(),
                        "`Reflect` cannot be derived for unit structs",
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span(),
                    "`Reflect` cannot be derived for enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "`Reflect` cannot be derived for unions",
                ));
            }
        };

        let fields = named
            .named
            .iter()
            .enumerate()
            .map(|(index, data)| {
                Ok(StructField {
                    data,
                    attrs: FieldAttributes::parse_attrs(&data.attrs)?,
                    index,
                })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        let type_parser = TypeParser::new(&input.ident, attrs.type_path.clone(), &input.generics);
        let mut meta = ReflectMeta::new(attrs, type_parser);

        let active_types = fields
            .iter()
            .filter(|field| field.is_reflected())
            .map(|field| field.data.ty.clone())
            .collect::<HashSet<_, FixedState>>();
        meta.set_active_types(active_types);

        Ok(Self { meta, fields })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// All declared fields.
    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }

    /// Fields reachable through `Struct::field_at`.
    #[inline]
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| field.is_reflected())
    }

    /// Fields marked `#[reflect(embed)]`.
    #[inline]
    pub fn embedded_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| field.attrs.embed.is_some())
    }

    /// Generates the `TypeInfo` expression of the struct.
    pub fn to_info_tokens(&self) -> TokenStream {
        let si_reflect_path = self.meta.si_reflect_path();
        let type_info_ = crate::path::type_info_(si_reflect_path);
        let struct_info_ = crate::path::struct_info_(si_reflect_path);

        let fields = self
            .fields
            .iter()
            .map(|field| field.to_info_tokens(si_reflect_path));

        quote! {
            #type_info_::Struct(
                #struct_info_::new::<Self>(&[ #(#fields),* ])
            )
        }
    }
}
