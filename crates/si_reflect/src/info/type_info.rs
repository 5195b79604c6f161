use core::fmt;

use thiserror::Error;

use crate::info::{OpaqueInfo, PointerInfo, StructInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// The "kind" of a reflected type.
///
/// Obtained from [`TypeInfo::kind`] or [`Reflect::reflect_kind`](crate::Reflect::reflect_kind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Struct,
    Pointer,
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::Pointer => f.pad("Pointer"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// A [`TypeInfo`] was not of the expected [`ReflectKind`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("reflect kind mismatch: expected {expected}, received {received}")]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Static information about a reflected type.
///
/// Retrieved through [`Typed::type_info`] when the type is known, or through
/// [`DynamicTyped::reflect_type_info`] on a `dyn Reflect`.
///
/// ```
/// use si_reflect::info::{ReflectKind, Typed};
///
/// assert_eq!(u32::type_info().kind(), ReflectKind::Opaque);
/// assert_eq!(<Box<u32>>::type_info().kind(), ReflectKind::Pointer);
/// ```
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
/// [`DynamicTyped::reflect_type_info`]: crate::info::DynamicTyped::reflect_type_info
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    Pointer(PointerInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Converts to the specific info, or reports the actual kind.
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_pointer: Pointer => PointerInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the described [`Type`].
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::Pointer(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    /// Returns the [`TypeId`](core::any::TypeId) of the described type.
    #[inline]
    pub const fn ty_id(&self) -> core::any::TypeId {
        self.ty().id()
    }

    /// Returns `true` if this describes the type `T`.
    #[inline]
    pub fn type_is<T: core::any::Any>(&self) -> bool {
        self.ty().is::<T>()
    }

    /// See [`TypePath::type_path`](crate::info::TypePath::type_path).
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty().path()
    }

    /// See [`TypePath::type_name`](crate::info::TypePath::type_name).
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.ty().name()
    }

    /// Returns the [`ReflectKind`].
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Follows pointer infos until a non-pointer type is reached.
    ///
    /// ```
    /// use si_reflect::info::{Typed, TypeInfo};
    ///
    /// let info: &'static TypeInfo = <Box<Box<u8>>>::type_info();
    /// assert!(info.deref_pointers().type_is::<u8>());
    /// ```
    pub fn deref_pointers(&'static self) -> &'static TypeInfo {
        let mut info = self;
        while let Self::Pointer(pointer) = info {
            info = pointer.pointee_info();
        }
        info
    }
}
