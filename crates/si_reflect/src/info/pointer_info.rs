use core::any::TypeId;

use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};

/// Information about an owning indirection such as `Box<T>`.
///
/// ```
/// use si_reflect::info::Typed;
///
/// let info = <Box<String>>::type_info().as_pointer().unwrap();
/// assert!(info.pointee_info().type_is::<String>());
/// ```
#[derive(Debug, Clone)]
pub struct PointerInfo {
    ty: Type,
    pointee_id: TypeId,
    pointee: fn() -> &'static TypeInfo,
}

impl PointerInfo {
    impl_type_fn!(ty);

    /// Creates the info of pointer type `P` pointing to `T`.
    #[inline]
    pub const fn new<P: TypePath + ?Sized, T: Typed>() -> Self {
        Self {
            ty: Type::of::<P>(),
            pointee_id: TypeId::of::<T>(),
            pointee: T::type_info,
        }
    }

    /// Returns the `TypeId` of the pointee.
    #[inline]
    pub const fn pointee_id(&self) -> TypeId {
        self.pointee_id
    }

    /// Returns the [`TypeInfo`] of the pointee.
    #[inline]
    pub fn pointee_info(&self) -> &'static TypeInfo {
        (self.pointee)()
    }
}
