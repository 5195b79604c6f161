use crate::Reflect;

/// Owning pointers that can be dereferenced through reflection.
///
/// Value lookups follow pointers transparently until a struct is reached.
///
/// ```
/// use si_reflect::{Reflect, ops::ReflectRef};
///
/// let boxed = Box::new(Box::new(7_u32));
/// let ReflectRef::Pointer(outer) = boxed.reflect_ref() else { unreachable!() };
/// let ReflectRef::Pointer(inner) = outer.pointee().reflect_ref() else { unreachable!() };
/// assert_eq!(inner.pointee().downcast_ref::<u32>(), Some(&7));
/// ```
pub trait Pointer: Reflect {
    /// Returns the pointed-to value.
    fn pointee(&self) -> &dyn Reflect;

    /// Returns the pointed-to value mutably.
    fn pointee_mut(&mut self) -> &mut dyn Reflect;
}
