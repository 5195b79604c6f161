use alloc::boxed::Box;
use alloc::vec::Vec;

use si_utils::hash::HashMap;

use crate::descriptor::{FieldId, TagOptions};
use crate::info::Type;

// -----------------------------------------------------------------------------
// FieldEntry

/// One external name of a [`TypeDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEntry {
    pub(crate) name: &'static str,
    pub(crate) id: FieldId,
    pub(crate) options: TagOptions<'static>,
}

impl FieldEntry {
    /// Returns the external name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the field the name resolves to.
    #[inline]
    pub const fn id(&self) -> &FieldId {
        &self.id
    }

    /// Returns the annotation options, such as `omitempty`.
    #[inline]
    pub const fn options(&self) -> TagOptions<'static> {
        self.options
    }
}

// -----------------------------------------------------------------------------
// TypeDescriptor

/// The external names of a struct type, embedded names included.
///
/// Immutable once built. `embedded` keeps the descriptors of embedded structs
/// in declaration order, for provenance only: lookups use the flattened
/// names.
///
/// ```
/// use si_reflect::{derive::Reflect, descriptor::TypeAnalyzer, info::Typed};
///
/// #[derive(Reflect)]
/// struct Inner {
///     pub value: u8,
/// }
///
/// #[derive(Reflect)]
/// struct Outer {
///     #[reflect(embed)]
///     inner: Inner,
///     #[reflect(tag(json = "id"))]
///     pub key: u32,
/// }
///
/// let desc = TypeAnalyzer::new().analyze(Outer::type_info()).unwrap();
///
/// assert_eq!(desc.field_names(), ["id", "value"]);
/// assert_eq!(desc.field_id("value").unwrap().path(), &[0, 0]);
/// assert_eq!(desc.embedded().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    pub(crate) ty: Type,
    pub(crate) names: HashMap<&'static str, FieldEntry>,
    pub(crate) embedded: Box<[TypeDescriptor]>,
}

impl TypeDescriptor {
    /// Returns the described type.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the path of the described type.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty.path()
    }

    /// Returns the entry of the external name `name`.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&FieldEntry> {
        self.names.get(name)
    }

    /// Returns the field the external name `name` resolves to.
    #[inline]
    pub fn field_id(&self, name: &str) -> Option<&FieldId> {
        self.names.get(name).map(FieldEntry::id)
    }

    /// Returns `true` if `name` is an external name of the type.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Returns the number of external names.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the type has no external names.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over the entries in unspecified order.
    #[inline]
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &FieldEntry> {
        self.names.values()
    }

    /// Returns the external names, sorted.
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.names.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Returns the descriptors of embedded structs in declaration order.
    #[inline]
    pub fn embedded(&self) -> &[TypeDescriptor] {
        &self.embedded
    }
}
