use crate::Reflect;

/// Field access for reflected structs.
///
/// Fields are addressed by their declaration index. A field that is not
/// reflected (see [`FieldInfo::hidden`]) returns `None`.
///
/// Implemented by `#[derive(Reflect)]`.
///
/// [`FieldInfo::hidden`]: crate::info::FieldInfo::hidden
pub trait Struct: Reflect {
    /// Returns the field at `index`.
    ///
    /// ```
    /// use si_reflect::{derive::Reflect, ops::Struct};
    ///
    /// #[derive(Reflect)]
    /// struct Foo { pub a: i32, b: bool }
    ///
    /// let foo = Foo { a: 1, b: true };
    /// assert!(foo.field_at(0).is_some());
    /// assert!(foo.field_at(1).is_none());
    /// assert!(foo.field_at(2).is_none());
    /// # let _ = foo.b;
    /// ```
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the field at `index` mutably.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the number of declared fields, reflected or not.
    fn field_len(&self) -> usize;
}

impl dyn Struct {
    /// Returns the field with the declared name `name`.
    ///
    /// This uses the Rust field name, not a tag name.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&dyn Reflect> {
        let index = self.reflect_type_info().as_struct().ok()?.index_of(name)?;
        self.field_at(index)
    }

    /// Returns the field with the declared name `name` mutably.
    #[inline]
    pub fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect> {
        let index = self.reflect_type_info().as_struct().ok()?.index_of(name)?;
        self.field_at_mut(index)
    }

    /// Returns a typed reference to the field with the declared name `name`.
    ///
    /// ```
    /// use si_reflect::{derive::Reflect, ops::Struct};
    ///
    /// #[derive(Reflect)]
    /// struct Foo { pub a: i32, pub b: &'static str }
    ///
    /// let foo = Foo { a: 10, b: "hello" };
    /// let foo: &dyn Struct = &foo;
    ///
    /// assert_eq!(foo.field_as::<i32>("a"), Some(&10));
    /// assert_eq!(foo.field_as::<&str>("b"), Some(&"hello"));
    /// assert_eq!(foo.field_as::<i32>("c"), None);
    /// assert_eq!(foo.field_as::<f64>("a"), None);
    /// ```
    #[inline]
    pub fn field_as<T: Reflect>(&self, name: &str) -> Option<&T> {
        self.field(name).and_then(<dyn Reflect>::downcast_ref)
    }

    /// Returns a typed mutable reference to the field with the declared name `name`.
    #[inline]
    pub fn field_mut_as<T: Reflect>(&mut self, name: &str) -> Option<&mut T> {
        self.field_mut(name).and_then(<dyn Reflect>::downcast_mut)
    }
}
