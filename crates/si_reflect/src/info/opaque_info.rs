use crate::info::{Type, TypePath, impl_type_fn};

/// Information about a type whose internals are not exposed,
/// such as `u64` or `String`.
#[derive(Debug, Clone)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    impl_type_fn!(ty);

    /// Creates the [`OpaqueInfo`] of `T`.
    #[inline]
    pub const fn new<T: TypePath + ?Sized>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}
