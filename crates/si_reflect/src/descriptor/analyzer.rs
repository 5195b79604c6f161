use alloc::vec::Vec;
use core::any::TypeId;

use si_utils::hash::HashMap;

use crate::descriptor::{FieldEntry, FieldId, Tag, TypeDescriptor};
use crate::info::{FieldInfo, StructInfo, TypeInfo};
use crate::store::{EmbedPrecedence, LookupError, StoreConfig};

/// Builds [`TypeDescriptor`]s from static type information.
///
/// For every declared field, in declaration order:
///
/// 1. An embedded field is analyzed recursively and kept aside. A struct that
///    embeds itself, directly or through other structs, is not entered again.
/// 2. A field that is not `pub` is skipped.
/// 3. The tag under [`tag_key`](Self::tag_key) decides the external name;
///    `-` skips the field.
/// 4. The name is recorded. Among direct fields the later one wins.
///
/// Finally the embedded descriptors are flattened in declaration order
/// according to the [`EmbedPrecedence`].
///
/// The analyzer holds no state besides its settings; analyzing the same type
/// twice yields equal descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeAnalyzer {
    tag_key: &'static str,
    precedence: EmbedPrecedence,
}

impl Default for TypeAnalyzer {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeAnalyzer {
    /// Creates an analyzer with the default [`StoreConfig`].
    #[inline]
    pub const fn new() -> Self {
        Self::from_config(&StoreConfig::DEFAULT)
    }

    /// Creates an analyzer with the settings of `config`.
    #[inline]
    pub const fn from_config(config: &StoreConfig) -> Self {
        Self {
            tag_key: config.tag_key,
            precedence: config.precedence,
        }
    }

    /// Returns the annotation key consulted for names.
    #[inline]
    pub const fn tag_key(&self) -> &'static str {
        self.tag_key
    }

    /// Returns the precedence between direct and embedded names.
    #[inline]
    pub const fn precedence(&self) -> EmbedPrecedence {
        self.precedence
    }

    /// Analyzes a struct type.
    ///
    /// # Errors
    ///
    /// [`LookupError::InvalidArgument`] if `info` is not a struct.
    pub fn analyze(&self, info: &'static TypeInfo) -> Result<TypeDescriptor, LookupError> {
        let info = info.as_struct().map_err(|err| LookupError::InvalidArgument {
            type_path: info.type_path(),
            kind: err.received,
        })?;
        Ok(self.analyze_struct(info, &mut Vec::new()))
    }

    // `visiting` holds the structs on the current embedding path.
    fn analyze_struct(
        &self,
        info: &'static StructInfo,
        visiting: &mut Vec<TypeId>,
    ) -> TypeDescriptor {
        visiting.push(info.ty_id());
        let mut names: HashMap<&'static str, FieldEntry> = HashMap::default();
        let mut embedded: Vec<(usize, TypeDescriptor)> = Vec::new();

        for field in info.iter() {
            if field.is_embedded() {
                match embedded_struct(field) {
                    Some(inner) if visiting.contains(&inner.ty_id()) => {
                        log::warn!(
                            "embedded field `{}` of `{}` leads back to `{}`, skipped",
                            field.name(),
                            info.type_path(),
                            inner.type_path(),
                        );
                    }
                    Some(inner) => {
                        embedded.push((field.index(), self.analyze_struct(inner, visiting)));
                    }
                    None => {
                        log::warn!(
                            "embedded field `{}` of `{}` is not a struct, skipped",
                            field.name(),
                            info.type_path(),
                        );
                    }
                }
                continue;
            }

            if !field.is_public() {
                continue;
            }

            let raw = field.tag(self.tag_key).unwrap_or_default();
            let Some(tag) = Tag::parse(raw) else {
                continue;
            };
            let name = tag.name().unwrap_or(field.name());

            let entry = FieldEntry {
                name,
                id: FieldId::direct(field.name(), field.index()),
                options: tag.options(),
            };

            #[cfg_attr(
                not(all(debug_assertions, any(test, feature = "debug"))),
                expect(unused_variables, reason = "only inspected with `debug`")
            )]
            let replaced = names.insert(name, entry);

            #[cfg(all(debug_assertions, any(test, feature = "debug")))]
            if let Some(old) = replaced {
                log::warn!(
                    "`{}` declares the external name `{name}` twice, `{}` replaces `{}`",
                    info.type_path(),
                    field.name(),
                    old.id.field(),
                );
            }
        }

        for (embed_index, child) in &embedded {
            for entry in child.names.values() {
                if self.precedence == EmbedPrecedence::DirectFirst
                    && names.get(entry.name).is_some_and(|old| old.id.is_direct())
                {
                    continue;
                }
                names.insert(
                    entry.name,
                    FieldEntry {
                        name: entry.name,
                        id: entry.id.promote(*embed_index),
                        options: entry.options,
                    },
                );
            }
        }

        visiting.pop();

        TypeDescriptor {
            ty: *info.ty(),
            names,
            embedded: embedded.into_iter().map(|(_, child)| child).collect(),
        }
    }
}

/// Follows pointers from an embedded field's type down to a struct.
fn embedded_struct(field: &FieldInfo) -> Option<&'static StructInfo> {
    field.type_info()?.deref_pointers().as_struct().ok()
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use crate::derive::Reflect;
    use crate::info::{ReflectKind, Typed};
    use crate::store::{EmbedPrecedence, LookupError, StoreConfig};

    use super::TypeAnalyzer;

    #[derive(Reflect)]
    #[reflect(type_path = "tests::Base")]
    struct Base {
        #[reflect(tag(json = "id"))]
        pub key: u32,
        pub shared: u8,
    }

    #[derive(Reflect)]
    #[reflect(type_path = "tests::Extra")]
    struct Extra {
        pub shared: u8,
        pub extra: bool,
    }

    #[derive(Reflect)]
    #[reflect(type_path = "tests::Outer")]
    struct Outer {
        #[reflect(embed)]
        base: Base,
        #[reflect(embed)]
        extra: Box<Extra>,
        #[reflect(tag(json = "id"))]
        pub own_id: u64,
    }

    #[test]
    fn direct_first() {
        let desc = TypeAnalyzer::new().analyze(Outer::type_info()).unwrap();

        assert_eq!(desc.field_names(), ["extra", "id", "shared"]);
        assert_eq!(desc.field_id("id").unwrap().field(), "own_id");
        // later embedded struct wins
        assert_eq!(desc.field_id("shared").unwrap().path(), &[1, 0]);
        assert_eq!(desc.field_id("extra").unwrap().path(), &[1, 1]);
    }

    #[test]
    fn overwrite() {
        let config = StoreConfig::new().with_precedence(EmbedPrecedence::Overwrite);
        let desc = TypeAnalyzer::from_config(&config)
            .analyze(Outer::type_info())
            .unwrap();

        assert_eq!(desc.field_id("id").unwrap().field(), "key");
        assert_eq!(desc.field_id("id").unwrap().path(), &[0, 0]);
    }

    #[test]
    fn tag_key() {
        #[derive(Reflect)]
        #[reflect(type_path = "tests::Tagged")]
        struct Tagged {
            #[reflect(tag(json = "a", yaml = "b"))]
            pub field: u8,
            #[reflect(tag(yaml = "-"))]
            pub other: u8,
        }

        let config = StoreConfig::new().with_tag_key("yaml");
        let desc = TypeAnalyzer::from_config(&config)
            .analyze(Tagged::type_info())
            .unwrap();
        assert_eq!(desc.field_names(), ["b"]);

        let desc = TypeAnalyzer::new().analyze(Tagged::type_info()).unwrap();
        assert_eq!(desc.field_names(), ["a", "other"]);
    }

    #[derive(Reflect)]
    #[reflect(type_path = "tests::Node")]
    struct Node {
        pub id: u8,
        #[reflect(embed)]
        next: Box<Node>,
    }

    #[derive(Reflect)]
    #[reflect(type_path = "tests::Left")]
    struct Left {
        pub left: u8,
        #[reflect(embed)]
        right: Box<Right>,
    }

    #[derive(Reflect)]
    #[reflect(type_path = "tests::Right")]
    struct Right {
        pub right: u8,
        #[reflect(embed)]
        back: Box<Left>,
    }

    #[test]
    fn self_embedding_is_skipped() {
        let desc = TypeAnalyzer::new().analyze(Node::type_info()).unwrap();
        assert_eq!(desc.field_names(), ["id"]);
        assert!(desc.embedded().is_empty());
    }

    #[test]
    fn embedding_cycle_is_cut() {
        let desc = TypeAnalyzer::new().analyze(Left::type_info()).unwrap();
        assert_eq!(desc.field_names(), ["left", "right"]);
        assert_eq!(desc.field_id("right").unwrap().path(), &[1, 0]);

        let desc = TypeAnalyzer::new().analyze(Right::type_info()).unwrap();
        assert_eq!(desc.field_names(), ["left", "right"]);
        assert_eq!(desc.field_id("left").unwrap().path(), &[1, 0]);
    }

    #[cfg(debug_assertions)]
    #[test]
    fn duplicate_direct_names() {
        #[derive(Reflect)]
        #[reflect(type_path = "tests::Dup")]
        struct Dup {
            #[reflect(tag(json = "dup"))]
            pub dup_a: u8,
            #[reflect(tag(json = "dup,omitempty"))]
            pub dup_b: u8,
            pub other: u8,
        }

        let desc = TypeAnalyzer::new().analyze(Dup::type_info()).unwrap();
        assert_eq!(desc.field_names(), ["dup", "other"]);

        let entry = desc.get("dup").unwrap();
        assert_eq!(entry.id().field(), "dup_b");
        assert!(entry.options().contains("omitempty"));
    }

    #[test]
    fn not_a_struct() {
        let err = TypeAnalyzer::new().analyze(u32::type_info()).unwrap_err();
        assert!(matches!(
            err,
            LookupError::InvalidArgument {
                type_path: "u32",
                kind: ReflectKind::Opaque
            }
        ));
    }
}
