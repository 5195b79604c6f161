use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// Static access to a type's [`TypeInfo`].
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect). A manual
/// implementation stores the info in a cell from [`crate::impls`]:
///
/// ```
/// use si_reflect::{
///     Reflect,
///     impls::NonGenericTypeInfoCell,
///     info::{FieldInfo, StructInfo, TypeInfo, TypePath, Typed, ReflectKind, Visibility},
///     ops::{ReflectMut, ReflectRef, Struct},
/// };
///
/// struct Point { pub x: f32 }
///
/// impl TypePath for Point {
///     fn type_path() -> &'static str { "demo::Point" }
///     fn type_name() -> &'static str { "Point" }
///     fn type_ident() -> &'static str { "Point" }
/// }
///
/// impl Typed for Point {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Struct(StructInfo::new::<Self>(&[
///             FieldInfo::new::<f32>("x", 0).with_visibility(Visibility::Public),
///         ])))
///     }
/// }
///
/// impl Struct for Point {
///     fn field_at(&self, index: usize) -> Option<&dyn Reflect> {
///         (index == 0).then_some(&self.x as &dyn Reflect)
///     }
///     fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
///         (index == 0).then_some(&mut self.x as &mut dyn Reflect)
///     }
///     fn field_len(&self) -> usize { 1 }
/// }
///
/// impl Reflect for Point {
///     fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
///         *self = value.take::<Self>()?;
///         Ok(())
///     }
///     fn reflect_kind(&self) -> ReflectKind { ReflectKind::Struct }
///     fn reflect_ref(&self) -> ReflectRef<'_> { ReflectRef::Struct(self) }
///     fn reflect_mut(&mut self) -> ReflectMut<'_> { ReflectMut::Struct(self) }
/// }
///
/// let info = Point::type_info().as_struct().unwrap();
/// assert_eq!(info.field("x").unwrap().name(), "x");
/// ```
pub trait Typed: TypePath {
    /// Returns the static type information.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`], implemented for every `Typed` type.
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    ///
    /// ```
    /// use si_reflect::{Reflect, info::DynamicTyped};
    ///
    /// let value: &dyn Reflect = &1_u64;
    /// assert!(value.reflect_type_info().type_is::<u64>());
    /// ```
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
