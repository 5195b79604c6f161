use core::any::{Any, TypeId};

use crate::info::{TypeInfo, Typed};

// -----------------------------------------------------------------------------
// Visibility

/// Declared visibility of a struct field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// `pub`
    Public,
    /// `pub(crate)`, `pub(super)`, `pub(in path)`
    Restricted,
    /// no visibility modifier
    #[default]
    Private,
}

impl Visibility {
    /// Only plain `pub` fields are externally visible.
    #[inline]
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }
}

// -----------------------------------------------------------------------------
// FieldInfo

#[derive(Clone, Copy, Debug)]
struct FieldType {
    id: TypeId,
    // `TypeInfo` is created on first access; the function pointer delays it.
    info: fn() -> &'static TypeInfo,
}

/// Information about one declared struct field.
///
/// Reflected fields (public or embedded) carry their type's [`TypeInfo`].
/// Other fields are recorded with [`FieldInfo::hidden`] and have no type
/// information, so their types do not need to be reflected.
///
/// ```
/// use si_reflect::info::{FieldInfo, Visibility};
///
/// let field = FieldInfo::new::<String>("foo", 2)
///     .with_visibility(Visibility::Public)
///     .with_tags(&[("json", "foo,omitempty")]);
///
/// assert_eq!(field.tag("json"), Some("foo,omitempty"));
/// assert_eq!(field.tag("yaml"), None);
/// assert!(field.type_is::<String>());
///
/// let hidden = FieldInfo::hidden("secret", 3);
/// assert!(hidden.type_info().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct FieldInfo {
    name: &'static str,
    index: usize,
    visibility: Visibility,
    embedded: bool,
    tags: &'static [(&'static str, &'static str)],
    ty: Option<FieldType>,
}

impl FieldInfo {
    /// A reflected field of type `T`. Visibility defaults to private.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str, index: usize) -> Self {
        Self {
            name,
            index,
            visibility: Visibility::Private,
            embedded: false,
            tags: &[],
            ty: Some(FieldType {
                id: TypeId::of::<T>(),
                info: T::type_info,
            }),
        }
    }

    /// A field without type information.
    #[inline]
    pub const fn hidden(name: &'static str, index: usize) -> Self {
        Self {
            name,
            index,
            visibility: Visibility::Private,
            embedded: false,
            tags: &[],
            ty: None,
        }
    }

    #[inline]
    pub const fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Marks the field as embedded: its own fields are promoted into the
    /// containing struct.
    #[inline]
    pub const fn with_embedded(mut self, embedded: bool) -> Self {
        self.embedded = embedded;
        self
    }

    /// Sets the annotation table as `(key, raw)` pairs, e.g. `("json", "foo,omitempty")`.
    #[inline]
    pub const fn with_tags(mut self, tags: &'static [(&'static str, &'static str)]) -> Self {
        self.tags = tags;
        self
    }

    #[inline]
    pub(crate) const fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// Returns the declared name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declaration index.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Shorthand for `self.visibility().is_public()`.
    #[inline]
    pub const fn is_public(&self) -> bool {
        self.visibility.is_public()
    }

    #[inline]
    pub const fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// Returns all `(key, raw)` annotation pairs.
    #[inline]
    pub const fn tags(&self) -> &'static [(&'static str, &'static str)] {
        self.tags
    }

    /// Returns the raw annotation stored under `key`.
    ///
    /// If a key appears more than once the first one wins.
    pub fn tag(&self, key: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find_map(|&(k, raw)| (k == key).then_some(raw))
    }

    /// Returns the field type's `TypeId`, if reflected.
    #[inline]
    pub fn type_id(&self) -> Option<TypeId> {
        self.ty.map(|ty| ty.id)
    }

    /// Returns `true` if the field is reflected with type `T`.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.type_id() == Some(TypeId::of::<T>())
    }

    /// Returns the field type's [`TypeInfo`], if reflected.
    #[inline]
    pub fn type_info(&self) -> Option<&'static TypeInfo> {
        self.ty.map(|ty| (ty.info)())
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldInfo, Visibility};

    #[test]
    fn first_tag_wins() {
        let field = FieldInfo::hidden("a", 0).with_tags(&[("json", "x"), ("yaml", "y"), ("json", "z")]);
        assert_eq!(field.tag("json"), Some("x"));
        assert_eq!(field.tag("yaml"), Some("y"));
        assert_eq!(field.tag("toml"), None);
    }

    #[test]
    fn only_pub_is_public() {
        assert!(Visibility::Public.is_public());
        assert!(!Visibility::Restricted.is_public());
        assert!(!Visibility::Private.is_public());
        assert_eq!(FieldInfo::new::<u8>("a", 0).visibility(), Visibility::Private);
    }
}
