use core::fmt;

use crate::Reflect;
use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::{Pointer, Struct};

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable view of a reflected value, split by [`ReflectKind`].
///
/// Returned by [`Reflect::reflect_ref`].
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    Pointer(&'a dyn Pointer),
    Opaque(&'a dyn Reflect),
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable view of a reflected value, split by [`ReflectKind`].
///
/// Returned by [`Reflect::reflect_mut`].
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    Pointer(&'a mut dyn Pointer),
    Opaque(&'a mut dyn Reflect),
}

macro_rules! impl_cast_fn {
    ($name:ident, $kind:ident, $ret:ty) => {
        #[doc = concat!("Returns the view if it is [`ReflectKind::", stringify!($kind), "`].")]
        #[inline]
        pub fn $name(self) -> Result<$ret, ReflectKindError> {
            let received = self.kind();
            match self {
                Self::$kind(value) => Ok(value),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received,
                }),
            }
        }
    };
}

impl<'a> ReflectRef<'a> {
    /// Returns the [`ReflectKind`] of this view.
    #[inline]
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    impl_cast_fn!(as_struct, Struct, &'a dyn Struct);
    impl_cast_fn!(as_pointer, Pointer, &'a dyn Pointer);
    impl_cast_fn!(as_opaque, Opaque, &'a dyn Reflect);
}

impl<'a> ReflectMut<'a> {
    /// Returns the [`ReflectKind`] of this view.
    #[inline]
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    impl_cast_fn!(as_struct, Struct, &'a mut dyn Struct);
    impl_cast_fn!(as_pointer, Pointer, &'a mut dyn Pointer);
    impl_cast_fn!(as_opaque, Opaque, &'a mut dyn Reflect);
}

impl fmt::Debug for ReflectRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReflectRef::{}", self.kind())
    }
}

impl fmt::Debug for ReflectMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReflectMut::{}", self.kind())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::format;

    use crate::Reflect;
    use crate::info::ReflectKind;

    #[test]
    fn kind_of_views() {
        let mut value = 1_u8;
        assert_eq!(value.reflect_ref().kind(), ReflectKind::Opaque);
        assert_eq!(value.reflect_mut().kind(), ReflectKind::Opaque);

        let boxed = Box::new(1_u8);
        assert_eq!(boxed.reflect_ref().kind(), ReflectKind::Pointer);
        assert_eq!(format!("{:?}", boxed.reflect_ref()), "ReflectRef::Pointer");
    }

    #[test]
    fn cast_mismatch() {
        let value = 1_u8;
        let err = value.reflect_ref().as_struct().err().unwrap();
        assert_eq!(err.expected, ReflectKind::Struct);
        assert_eq!(err.received, ReflectKind::Opaque);
        assert!(value.reflect_ref().as_opaque().is_ok());
    }
}
