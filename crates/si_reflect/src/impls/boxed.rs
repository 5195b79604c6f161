use alloc::boxed::Box;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{PointerInfo, TypeInfo, TypePath, Typed};
use crate::ops::Pointer;
use crate::reflection::impl_reflect_cast_fn;

impl<T: TypePath> TypePath for Box<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["alloc::boxed::Box<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Box<", T::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Box"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::boxed")
    }
}

impl<T: Typed> Typed for Box<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed> Reflect for Box<T> {
    impl_reflect_cast_fn!(Pointer);

    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        (**self).reflect_debug(f)
    }
}

impl<T: Reflect + Typed> Pointer for Box<T> {
    #[inline]
    fn pointee(&self) -> &dyn Reflect {
        &**self
    }

    #[inline]
    fn pointee_mut(&mut self) -> &mut dyn Reflect {
        &mut **self
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::ReflectMut;

    #[test]
    fn box_is_a_pointer() {
        assert_eq!(<Box<u8>>::type_path(), "alloc::boxed::Box<u8>");
        let info = <Box<Box<u8>>>::type_info().as_pointer().unwrap();
        assert!(info.pointee_info().type_is::<Box<u8>>());
    }

    #[test]
    fn pointee_mut_writes_through() {
        let mut boxed = Box::new(String::from("a"));
        let ReflectMut::Pointer(pointer) = boxed.reflect_mut() else {
            panic!("`Box<String>` should be a pointer");
        };
        *pointer.pointee_mut().downcast_mut::<String>().unwrap() = String::from("b");
        assert_eq!(*boxed, "b");
    }
}
