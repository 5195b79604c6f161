use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{DynamicTypePath, DynamicTyped, TypePath, Typed};
use crate::info::{OpaqueInfo, ReflectKind, TypeInfo};
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The base trait of runtime reflection.
///
/// A `Reflect` value knows its [type path](DynamicTypePath) and
/// [type information](DynamicTyped), and can be viewed as one of the
/// [kinds](ReflectKind) through [`reflect_ref`] and [`reflect_mut`].
///
/// Use [`#[derive(Reflect)]`](crate::derive::Reflect) for structs. The
/// built-in implementations are listed in [`crate::impls`].
///
/// ```
/// use si_reflect::{Reflect, info::ReflectKind};
///
/// let mut value = 10_i32;
/// let reflect: &mut dyn Reflect = &mut value;
///
/// assert_eq!(reflect.reflect_kind(), ReflectKind::Opaque);
/// *reflect.downcast_mut::<i32>().unwrap() += 1;
/// assert_eq!(value, 11);
/// ```
///
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_mut`]: Reflect::reflect_mut
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Casts to `&dyn Reflect`.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts to `&mut dyn Reflect`.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Boxes the value as `Box<dyn Reflect>`.
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns the [`TypeId`] of the underlying type.
    ///
    /// Calling [`Any::type_id`] on a `Box<dyn Reflect>` returns the id of
    /// the box, so prefer this method.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Replaces the value with `value` if the types match.
    ///
    /// On mismatch `value` is handed back unchanged.
    ///
    /// ```
    /// use si_reflect::Reflect;
    ///
    /// let mut text = String::from("old");
    /// text.set(String::from("new").into_boxed_reflect()).unwrap();
    /// assert_eq!(text, "new");
    ///
    /// assert!(text.set(1_u8.into_boxed_reflect()).is_err());
    /// ```
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Returns the [`ReflectKind`].
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable view by kind.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable view by kind.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Debug formatter used by `impl Debug for dyn Reflect`.
    ///
    /// Structs print their reflected fields, pointers print their pointee
    /// and opaque types print `Opaque(type_path)` unless overridden.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reflect_ref() {
            ReflectRef::Struct(data) => {
                let mut debug = f.debug_struct(self.reflect_type_name());
                if let Ok(info) = self.reflect_type_info().as_struct() {
                    for field in info.iter() {
                        if let Some(value) = data.field_at(field.index()) {
                            debug.field(field.name(), &value);
                        }
                    }
                }
                debug.finish()
            }
            ReflectRef::Pointer(data) => data.pointee().reflect_debug(f),
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts by reference.
    ///
    /// ```
    /// use si_reflect::Reflect;
    ///
    /// let value: &dyn Reflect = &10_i32;
    /// assert_eq!(value.downcast_ref::<i32>(), Some(&10));
    /// assert_eq!(value.downcast_ref::<u32>(), None);
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the box, handing it back on mismatch.
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if self.is::<T>() {
            #[expect(unsafe_code, reason = "type is already checked")]
            Ok(unsafe { <Box<dyn Any>>::downcast::<T>(self).unwrap_unchecked() })
        } else {
            Err(self)
        }
    }

    /// Downcasts and unboxes, handing the box back on mismatch.
    ///
    /// ```
    /// use si_reflect::Reflect;
    ///
    /// let value = 10_i32.into_boxed_reflect();
    /// assert_eq!(value.take::<i32>().ok(), Some(10));
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

impl TypePath for dyn Reflect {
    #[inline]
    fn type_path() -> &'static str {
        "dyn si_reflect::Reflect"
    }
    #[inline]
    fn type_name() -> &'static str {
        "dyn Reflect"
    }
    #[inline]
    fn type_ident() -> &'static str {
        "dyn Reflect"
    }
}

impl Typed for dyn Reflect {
    /// The info of `dyn Reflect` itself, not of the underlying value.
    ///
    /// Use [`DynamicTyped::reflect_type_info`] for the latter.
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implements `set`, `reflect_kind`, `reflect_ref` and `reflect_mut` for `$kind`.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        fn set(
            &mut self,
            value: ::alloc::boxed::Box<dyn $crate::Reflect>,
        ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;
