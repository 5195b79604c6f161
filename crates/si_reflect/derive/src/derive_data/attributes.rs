//! `#[reflect(...)]` attributes on the type and on fields.

use proc_macro2::Span;
use syn::{Attribute, LitStr, Path, meta::ParseNestedMeta, spanned::Spanned};

use crate::REFLECT_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// Type attributes

/// Attributes applied to the type.
///
/// - `type_path = "my_crate::foo::Foo"`
/// - `auto_register`
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    pub type_path: Option<Path>,
    pub auto_register: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
            }
        }
        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("type_path") {
            if self.type_path.is_some() {
                return Err(meta.error("duplicate `type_path`"));
            }
            let lit: LitStr = meta.value()?.parse()?;
            let path = lit.parse_with(Path::parse_mod_style)?;
            if path.leading_colon.is_some() {
                return Err(syn::Error::new(
                    lit.span(),
                    "did not expect a leading double colon (`::`)",
                ));
            }
            if path.segments.len() < 2 {
                return Err(syn::Error::new(
                    lit.span(),
                    "expected a path with a module, like `my_crate::Foo`",
                ));
            }
            self.type_path = Some(path);
            Ok(())
        } else if meta.path.is_ident("auto_register") {
            self.auto_register = Some(meta.path.span());
            Ok(())
        } else if meta.path.is_ident("embed") || meta.path.is_ident("tag") {
            Err(meta.error("this attribute can only be applied to fields"))
        } else {
            Err(meta.error("unsupported type attribute"))
        }
    }
}

// -----------------------------------------------------------------------------
// Field attributes

/// Attributes applied to a field.
///
/// - `embed`
/// - `tag(json = "...", yaml = "...")`
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    pub embed: Option<Span>,
    pub tags: Vec<(String, LitStr)>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
            }
        }
        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("embed") {
            if self.embed.is_some() {
                return Err(meta.error("duplicate `embed`"));
            }
            self.embed = Some(meta.path.span());
            Ok(())
        } else if meta.path.is_ident("tag") {
            meta.parse_nested_meta(|tag| {
                let Some(key) = tag.path.get_ident().map(ToString::to_string) else {
                    return Err(tag.error("expected `key = \"value\"`"));
                };
                if self.tags.iter().any(|(it, _)| *it == key) {
                    return Err(tag.error(format_args!("duplicate tag `{key}`")));
                }
                let value: LitStr = tag.value()?.parse()?;
                self.tags.push((key, value));
                Ok(())
            })
        } else if meta.path.is_ident("type_path") || meta.path.is_ident("auto_register") {
            Err(meta.error("this attribute can only be applied at the type level"))
        } else {
            Err(meta.error("unsupported field attribute"))
        }
    }
}
