use alloc::boxed::Box;

use si_utils::hash::HashMap;

use crate::info::{FieldInfo, Type, TypePath, impl_type_fn};
use crate::ops::Struct;

/// Information about a struct with named fields.
///
/// Fields keep their declaration order and each [`FieldInfo::index`] equals
/// its position.
///
/// ```
/// use si_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct A {
///     pub val: f32,
///     hidden: u8,
/// }
///
/// let info = A::type_info().as_struct().unwrap();
///
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.index_of("hidden"), Some(1));
/// assert!(info.field("val").unwrap().is_public());
/// # let _ = A { val: 0.0, hidden: 0 }.hidden;
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[FieldInfo]>,
    indices: HashMap<&'static str, usize>,
}

impl StructInfo {
    impl_type_fn!(ty);

    /// Creates a new [`StructInfo`] from fields in declaration order.
    ///
    /// Field indices are reassigned from their position in `fields`.
    pub fn new<T: Struct + TypePath>(fields: &[FieldInfo]) -> Self {
        let fields: Box<[FieldInfo]> = fields
            .iter()
            .enumerate()
            .map(|(index, field)| field.clone().with_index(index))
            .collect();
        let indices = fields
            .iter()
            .map(|field| (field.name(), field.index()))
            .collect();

        Self {
            ty: Type::of::<T>(),
            fields,
            indices,
        }
    }

    /// Returns the field with the given declared name.
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.get(*self.indices.get(name)?)
    }

    /// Returns the field at `index`.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&FieldInfo> {
        self.fields.get(index)
    }

    /// Iterates over the fields in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &FieldInfo> {
        self.fields.iter()
    }

    /// Returns the declaration index of the field `name`.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Returns the number of declared fields, hidden ones included.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}
