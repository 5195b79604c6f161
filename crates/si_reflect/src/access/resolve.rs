use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::{ReflectMut, ReflectRef, Struct};
use crate::store::LookupError;

/// Follows pointers until a struct is reached.
///
/// # Errors
///
/// [`LookupError::InvalidArgument`] naming the innermost type if it is not
/// a struct.
///
/// ```
/// use si_reflect::{access, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Foo {
///     pub a: u8,
/// }
///
/// let value = Box::new(Box::new(Foo { a: 1 }));
/// let target = access::deref_struct(&value).unwrap();
/// assert_eq!(target.field_as::<u8>("a"), Some(&1));
///
/// assert!(access::deref_struct(&Box::new(1_u8)).is_err());
/// ```
pub fn deref_struct(value: &dyn Reflect) -> Result<&dyn Struct, LookupError> {
    match value.reflect_ref() {
        ReflectRef::Struct(target) => Ok(target),
        ReflectRef::Pointer(pointer) => deref_struct(pointer.pointee()),
        ReflectRef::Opaque(_) => Err(not_a_struct(value)),
    }
}

/// Follows pointers until a struct is reached, mutably.
///
/// # Errors
///
/// See [`deref_struct`].
pub fn deref_struct_mut(value: &mut dyn Reflect) -> Result<&mut dyn Struct, LookupError> {
    let error = not_a_struct(value);
    match value.reflect_mut() {
        ReflectMut::Struct(target) => Ok(target),
        ReflectMut::Pointer(pointer) => deref_struct_mut(pointer.pointee_mut()),
        ReflectMut::Opaque(_) => Err(error),
    }
}

/// Walks `path` from `current`.
///
/// Every index but the last selects an embedded field, which is followed
/// through pointers. Returns `None` if a field is not exposed or an
/// intermediate field is not a struct.
pub fn resolve<'a>(current: &'a dyn Struct, path: &[usize]) -> Option<&'a dyn Reflect> {
    match path {
        [] => None,
        [index] => current.field_at(*index),
        [head, rest @ ..] => {
            let next = deref_struct(current.field_at(*head)?).ok()?;
            resolve(next, rest)
        }
    }
}

/// Walks `path` from `current`, mutably.
///
/// See [`resolve`].
pub fn resolve_mut<'a>(current: &'a mut dyn Struct, path: &[usize]) -> Option<&'a mut dyn Reflect> {
    match path {
        [] => None,
        [index] => current.field_at_mut(*index),
        [head, rest @ ..] => {
            let next = deref_struct_mut(current.field_at_mut(*head)?).ok()?;
            resolve_mut(next, rest)
        }
    }
}

#[inline]
fn not_a_struct(value: &dyn Reflect) -> LookupError {
    LookupError::InvalidArgument {
        type_path: value.reflect_type_path(),
        kind: ReflectKind::Opaque,
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use crate::derive::Reflect;
    use crate::info::ReflectKind;
    use crate::store::LookupError;

    use super::{deref_struct_mut, resolve, resolve_mut};

    #[derive(Reflect)]
    #[reflect(type_path = "tests::Leaf")]
    struct Leaf {
        pub value: i32,
    }

    #[derive(Reflect)]
    #[reflect(type_path = "tests::Middle")]
    struct Middle {
        pub flag: bool,
        #[reflect(embed)]
        leaf: Box<Leaf>,
    }

    #[derive(Reflect)]
    #[reflect(type_path = "tests::Top")]
    struct Top {
        #[reflect(embed)]
        middle: Middle,
    }

    fn top() -> Top {
        Top {
            middle: Middle {
                flag: true,
                leaf: Box::new(Leaf { value: 3 }),
            },
        }
    }

    #[test]
    fn nested_paths() {
        let mut top = top();

        let value = resolve(&top, &[0, 1, 0]).unwrap();
        assert_eq!(value.downcast_ref::<i32>(), Some(&3));
        assert_eq!(
            resolve(&top, &[0, 0]).unwrap().downcast_ref::<bool>(),
            Some(&true)
        );

        *resolve_mut(&mut top, &[0, 1, 0])
            .unwrap()
            .downcast_mut::<i32>()
            .unwrap() = 9;
        assert_eq!(top.middle.leaf.value, 9);
    }

    #[test]
    fn missing_paths() {
        let top = top();
        assert!(resolve(&top, &[]).is_none());
        assert!(resolve(&top, &[5]).is_none());
        // `flag` is not a struct
        assert!(resolve(&top, &[0, 0, 0]).is_none());
    }

    #[test]
    fn opaque_is_invalid() {
        let mut value = Box::new(Box::new(0_u8));
        let err = deref_struct_mut(&mut value).err().unwrap();
        assert_eq!(
            err,
            LookupError::InvalidArgument {
                type_path: "u8",
                kind: ReflectKind::Opaque,
            }
        );
    }
}
