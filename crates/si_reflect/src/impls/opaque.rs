use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell, concat};
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::reflection::impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// Primitives

macro_rules! impl_primitive {
    ($($ty:ty),* $(,)?) => {$(
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                stringify!($ty)
            }
            #[inline]
            fn type_name() -> &'static str {
                stringify!($ty)
            }
            #[inline]
            fn type_ident() -> &'static str {
                stringify!($ty)
            }
        }

        impl_opaque!($ty);
    )*};
}

/// `Typed` and `Reflect` for a non-generic type that implements `Debug`.
macro_rules! impl_opaque {
    ($ty:ty) => {
        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
            }
        }

        impl Reflect for $ty {
            impl_reflect_cast_fn!(Opaque);

            fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        }
    };
}

impl_primitive!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

// -----------------------------------------------------------------------------
// Strings

impl TypePath for String {
    #[inline]
    fn type_path() -> &'static str {
        "alloc::string::String"
    }
    #[inline]
    fn type_name() -> &'static str {
        "String"
    }
    #[inline]
    fn type_ident() -> &'static str {
        "String"
    }
    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::string")
    }
}

impl_opaque!(String);

impl TypePath for &'static str {
    #[inline]
    fn type_path() -> &'static str {
        "&str"
    }
    #[inline]
    fn type_name() -> &'static str {
        "&str"
    }
    #[inline]
    fn type_ident() -> &'static str {
        "&str"
    }
}

impl_opaque!(&'static str);

// -----------------------------------------------------------------------------
// Generic containers

macro_rules! impl_generic_opaque {
    ($ident:ident, $module:literal) => {
        impl<T: TypePath> TypePath for $ident<T> {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    concat(&[$module, "::", stringify!($ident), "<", T::type_path(), ">"])
                })
            }
            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    concat(&[stringify!($ident), "<", T::type_name(), ">"])
                })
            }
            #[inline]
            fn type_ident() -> &'static str {
                stringify!($ident)
            }
            #[inline]
            fn module_path() -> Option<&'static str> {
                Some($module)
            }
        }

        impl<T: TypePath> Typed for $ident<T> {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
            }
        }

        impl<T: TypePath + Send + Sync> Reflect for $ident<T> {
            impl_reflect_cast_fn!(Opaque);
        }
    };
}

impl_generic_opaque!(Vec, "alloc::vec");
impl_generic_opaque!(Option, "core::option");

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};

    #[test]
    fn primitive_paths() {
        assert_eq!(u8::type_path(), "u8");
        assert_eq!(<&'static str>::type_name(), "&str");
        assert_eq!(String::type_path(), "alloc::string::String");
    }

    #[test]
    fn generic_paths_are_per_instantiation() {
        assert_eq!(<Vec<u8>>::type_path(), "alloc::vec::Vec<u8>");
        assert_eq!(<Vec<String>>::type_name(), "Vec<String>");
        assert_eq!(<Option<Vec<u8>>>::type_name(), "Option<Vec<u8>>");
        assert!(<Option<u8>>::type_info().type_is::<Option<u8>>());
        assert!(<Option<u16>>::type_info().type_is::<Option<u16>>());
    }

    #[test]
    fn opaque_set_and_debug() {
        let mut value = String::from("a");
        let reflect: &mut dyn Reflect = &mut value;
        assert_eq!(reflect.reflect_kind(), ReflectKind::Opaque);
        assert!(reflect.set(String::from("b").into_boxed_reflect()).is_ok());
        assert!(reflect.set(1_u8.into_boxed_reflect()).is_err());
        assert_eq!(format!("{reflect:?}"), "\"b\"");
        assert_eq!(format!("{:?}", &Some(1_u8) as &dyn Reflect), "Opaque(core::option::Option<u8>)");
    }
}
