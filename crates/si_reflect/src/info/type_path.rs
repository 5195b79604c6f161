use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

// -----------------------------------------------------------------------------
// TypePath

/// Stable names of a type, used in descriptors and error messages.
///
/// [`core::any::type_name`] is only a diagnostic and may change between
/// compiler releases. These strings are fixed by the implementation:
///
/// | method          | `Option<Vec<usize>>`                                |
/// |-----------------|-----------------------------------------------------|
/// | [`type_path`]   | `core::option::Option<alloc::vec::Vec<usize>>`      |
/// | [`type_name`]   | `Option<Vec<usize>>`                                |
/// | [`type_ident`]  | `Option`                                            |
/// | [`module_path`] | `Some("core::option")`                              |
///
/// [`#[derive(Reflect)]`](crate::derive::Reflect) implements this trait,
/// honoring `#[reflect(type_path = "...")]`. By hand:
///
/// ```
/// use si_reflect::info::TypePath;
///
/// struct Order;
///
/// impl TypePath for Order {
///     fn type_path() -> &'static str { "shop::model::Order" }
///     fn type_name() -> &'static str { "Order" }
///     fn type_ident() -> &'static str { "Order" }
///     fn module_path() -> Option<&'static str> { Some("shop::model") }
/// }
///
/// assert_eq!(Order::type_path(), "shop::model::Order");
/// ```
///
/// [`type_path`]: TypePath::type_path
/// [`type_name`]: TypePath::type_name
/// [`type_ident`]: TypePath::type_ident
/// [`module_path`]: TypePath::module_path
pub trait TypePath: 'static {
    /// Fully qualified path, generics included. Unique per type.
    fn type_path() -> &'static str;

    /// Path without the module prefix. Not unique.
    fn type_name() -> &'static str;

    /// Bare identifier.
    fn type_ident() -> &'static str;

    /// Defining module, `None` for primitives.
    fn module_path() -> Option<&'static str> {
        None
    }
}

/// [`TypePath`] through a value, for `dyn Reflect`.
///
/// ```
/// use si_reflect::{Reflect, info::DynamicTypePath};
///
/// let value: &dyn Reflect = &String::new();
/// assert_eq!(value.reflect_type_path(), "alloc::string::String");
/// assert_eq!(value.reflect_type_name(), "String");
/// ```
pub trait DynamicTypePath {
    /// See [`TypePath::type_path`].
    fn reflect_type_path(&self) -> &'static str;

    /// See [`TypePath::type_name`].
    fn reflect_type_name(&self) -> &'static str;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        T::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        T::type_name()
    }
}

// -----------------------------------------------------------------------------
// Type

/// A [`TypeId`] that can also print its [type path](TypePath).
///
/// Compared and hashed by `TypeId` alone.
///
/// ```
/// use core::any::TypeId;
/// use si_reflect::info::Type;
///
/// let ty = Type::of::<String>();
/// assert!(ty.is::<String>());
/// assert_eq!(ty.id(), TypeId::of::<String>());
/// assert_eq!(ty.path(), "alloc::string::String");
/// assert_eq!(ty.name(), "String");
/// ```
#[derive(Copy, Clone)]
pub struct Type {
    id: TypeId,
    path: fn() -> &'static str,
    name: fn() -> &'static str,
}

impl Type {
    /// The [`Type`] of `T`.
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: T::type_path,
            name: T::type_name,
        }
    }

    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns `true` if this is `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// See [`TypePath::type_path`].
    #[inline]
    pub fn path(&self) -> &'static str {
        (self.path)()
    }

    /// See [`TypePath::type_name`].
    #[inline]
    pub fn name(&self) -> &'static str {
        (self.name)()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl Hash for Type {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Forwards the `Type` accessors of an info struct holding a `Type` field.
macro_rules! impl_type_fn {
    ($field:ident) => {
        /// Returns the underlying `Type`.
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }

        /// Returns the `TypeId`.
        #[inline]
        pub const fn ty_id(&self) -> ::core::any::TypeId {
            self.$field.id()
        }

        /// Returns `true` if this describes the type `T`.
        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.$field.is::<T>()
        }

        /// Returns the type path.
        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.$field.path()
        }

        /// Returns the type name.
        #[inline]
        pub fn type_name(&self) -> &'static str {
            self.$field.name()
        }
    };
}

pub(crate) use impl_type_fn;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::{Type, TypePath};

    struct Local;

    impl TypePath for Local {
        fn type_path() -> &'static str {
            "你好::world::Local"
        }
        fn type_name() -> &'static str {
            "Local"
        }
        fn type_ident() -> &'static str {
            "Local"
        }
    }

    #[test]
    fn equality_ignores_names() {
        assert_eq!(Type::of::<Local>(), Type::of::<Local>());
        assert_ne!(Type::of::<Local>(), Type::of::<u8>());
        assert_eq!(format!("{:?}", Type::of::<Local>()), "你好::world::Local");
        assert_eq!(format!("{}", Type::of::<u8>()), "u8");
    }
}
