use alloc::borrow::ToOwned;
use alloc::sync::Arc;
use alloc::vec::Vec;
use std::sync::{PoisonError, RwLock};

use si_utils::TypeIdMap;

use crate::Reflect;
use crate::access;
use crate::descriptor::{FieldId, TypeAnalyzer, TypeDescriptor};
use crate::info::{TypeInfo, Typed};
use crate::ops::Struct;
use crate::store::{LookupError, StoreConfig};

// -----------------------------------------------------------------------------
// DEFAULT_STORE

/// The process-wide [`Store`] with the default [`StoreConfig`].
pub static DEFAULT_STORE: Store = Store::new();

// -----------------------------------------------------------------------------
// Store

/// A concurrent cache of [`TypeDescriptor`]s keyed by type.
///
/// Lookups read under a shared lock. On a miss the type is analyzed without
/// holding any lock and the result is inserted under the exclusive lock, so
/// concurrent misses on the same type may analyze it more than once. The
/// last insertion stays in the cache; all of them are equal.
///
/// Descriptors are published fully built and handed out as [`Arc`]s, so a
/// [`reset`](Store::reset) never affects descriptors already obtained.
///
/// ```
/// use si_reflect::{Store, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Point {
///     pub x: f32,
///     #[reflect(tag(json = "-"))]
///     pub y: f32,
/// }
///
/// let store = Store::new();
/// assert!(!store.contains::<Point>());
///
/// let desc = store.descriptor::<Point>().unwrap();
/// assert_eq!(desc.field_names(), ["x"]);
/// assert!(store.contains::<Point>());
///
/// store.reset();
/// assert!(store.is_empty());
/// assert_eq!(*store.descriptor::<Point>().unwrap(), *desc);
/// ```
pub struct Store {
    config: StoreConfig,
    cache: RwLock<TypeIdMap<Arc<TypeDescriptor>>>,
}

impl Default for Store {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Store {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Store")
            .field("config", &self.config)
            .field("len", &self.len())
            .finish()
    }
}

impl Store {
    /// Creates an empty store with the default [`StoreConfig`].
    #[inline]
    pub const fn new() -> Self {
        Self::with_config(StoreConfig::DEFAULT)
    }

    /// Creates an empty store with `config`.
    #[inline]
    pub const fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            cache: RwLock::new(TypeIdMap::new()),
        }
    }

    /// Returns the configuration.
    #[inline]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns an analyzer using this store's configuration.
    #[inline]
    pub const fn analyzer(&self) -> TypeAnalyzer {
        TypeAnalyzer::from_config(&self.config)
    }

    /// Returns the descriptor of `T`, analyzing it on first use.
    ///
    /// # Errors
    ///
    /// [`LookupError::InvalidArgument`] if `T` is not a struct or a pointer to one.
    #[inline]
    pub fn descriptor<T: Typed + ?Sized>(&self) -> Result<Arc<TypeDescriptor>, LookupError> {
        self.descriptor_for(T::type_info())
    }

    /// Returns the descriptor of the type described by `info`, analyzing it
    /// on first use.
    ///
    /// Pointer types resolve to their pointee.
    ///
    /// # Errors
    ///
    /// [`LookupError::InvalidArgument`] if the type is not a struct or a
    /// pointer to one.
    pub fn descriptor_for(
        &self,
        info: &'static TypeInfo,
    ) -> Result<Arc<TypeDescriptor>, LookupError> {
        let info = info.deref_pointers();
        let type_id = info.ty_id();

        if let Some(desc) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
        {
            log::trace!("descriptor cache hit: `{}`", info.type_path());
            return Ok(Arc::clone(desc));
        }

        let desc = Arc::new(self.analyzer().analyze(info)?);
        log::debug!(
            "analyzed `{}`: {} external names",
            info.type_path(),
            desc.len(),
        );

        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(type_id, Arc::clone(&desc));

        Ok(desc)
    }

    /// Discards every cached descriptor.
    pub fn reset(&self) {
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        let len = cache.len();
        cache.clear();
        log::debug!("descriptor cache reset, {len} entries dropped");
    }

    /// Returns the number of cached descriptors.
    pub fn len(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if nothing is cached.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the descriptor of `T` is cached.
    pub fn contains<T: Typed + ?Sized>(&self) -> bool {
        let type_id = T::type_info().deref_pointers().ty_id();
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&type_id)
    }

    /// Returns the external names of the struct behind `value`, sorted.
    ///
    /// # Errors
    ///
    /// [`LookupError::InvalidArgument`] if `value` is not a struct, even after
    /// following pointers.
    pub fn field_names(&self, value: &dyn Reflect) -> Result<Vec<&'static str>, LookupError> {
        let target = access::deref_struct(value)?;
        Ok(self.descriptor_for(target.reflect_type_info())?.field_names())
    }

    /// Resolves the external name `name` on the struct behind `value`.
    ///
    /// ```
    /// use si_reflect::{ErrorKind, Store, derive::Reflect};
    ///
    /// #[derive(Reflect, Default)]
    /// struct Foo {
    ///     #[reflect(tag(json = "a"))]
    ///     pub alpha: u8,
    /// }
    ///
    /// let store = Store::new();
    /// let id = store.field_id(&Foo::default(), "a").unwrap();
    /// assert_eq!(id.field(), "alpha");
    /// assert_eq!(id.index(), 0);
    ///
    /// let err = store.field_id(&Foo::default(), "alpha").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::NotFound);
    /// ```
    ///
    /// # Errors
    ///
    /// - [`LookupError::InvalidArgument`] if `value` is not a struct.
    /// - [`LookupError::NotFound`] if the name is unknown.
    pub fn field_id(&self, value: &dyn Reflect, name: &str) -> Result<FieldId, LookupError> {
        let target = access::deref_struct(value)?;
        let desc = self.descriptor_for(target.reflect_type_info())?;
        lookup(&desc, name).cloned()
    }

    /// Returns the field named `name` on the struct behind `value`.
    ///
    /// # Errors
    ///
    /// - [`LookupError::InvalidArgument`] if `value` is not a struct.
    /// - [`LookupError::NotFound`] if the name is unknown.
    /// - [`LookupError::InvalidState`] if the value does not expose the field.
    pub fn field_ref<'a>(
        &self,
        value: &'a dyn Reflect,
        name: &str,
    ) -> Result<&'a dyn Reflect, LookupError> {
        let target = access::deref_struct(value)?;
        let desc = self.descriptor_for(target.reflect_type_info())?;
        let id = lookup(&desc, name)?;
        access::resolve(target, id.path()).ok_or_else(|| invalid_state(&desc, id, name))
    }

    /// Returns the field named `name` on the struct behind `value`, mutably.
    ///
    /// Writes through the returned handle change `value` in place.
    ///
    /// # Errors
    ///
    /// - [`LookupError::InvalidArgument`] if `value` is not a struct.
    /// - [`LookupError::NotFound`] if the name is unknown.
    /// - [`LookupError::InvalidState`] if the value does not expose the field.
    pub fn field_value<'a>(
        &self,
        value: &'a mut dyn Reflect,
        name: &str,
    ) -> Result<&'a mut dyn Reflect, LookupError> {
        let target: &'a mut dyn Struct = access::deref_struct_mut(value)?;
        let desc = self.descriptor_for(target.reflect_type_info())?;
        let id = lookup(&desc, name)?;
        access::resolve_mut(target, id.path()).ok_or_else(|| invalid_state(&desc, id, name))
    }

    /// Analyzes every type registered with `#[reflect(auto_register)]`.
    ///
    /// Returns the number of registered types.
    ///
    /// Generic types cannot be registered:
    ///
    /// ```compile_fail
    /// use si_reflect::derive::Reflect;
    ///
    /// #[derive(Reflect)]
    /// #[reflect(auto_register)]
    /// struct Wrapper<T> {
    ///     pub value: T,
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Stops at the first type that cannot be analyzed.
    #[cfg(feature = "auto_register")]
    pub fn auto_register(&self) -> Result<usize, LookupError> {
        let mut count = 0_usize;
        for info in crate::__macro_exports::auto_register::registered() {
            self.descriptor_for(info)?;
            count += 1;
        }
        log::debug!("auto registered {count} types");
        Ok(count)
    }
}

fn lookup<'d>(desc: &'d TypeDescriptor, name: &str) -> Result<&'d FieldId, LookupError> {
    desc.field_id(name).ok_or_else(|| LookupError::NotFound {
        name: name.to_owned(),
        type_path: desc.type_path(),
    })
}

fn invalid_state(desc: &TypeDescriptor, id: &FieldId, name: &str) -> LookupError {
    LookupError::InvalidState {
        name: name.to_owned(),
        field: id.clone(),
        type_path: desc.type_path(),
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use crate::derive::Reflect;
    use crate::store::{ErrorKind, Store};

    #[derive(Reflect, Default)]
    #[reflect(type_path = "tests::Inner")]
    struct Inner {
        pub name: String,
    }

    #[derive(Reflect, Default)]
    #[reflect(type_path = "tests::Wrapper")]
    struct Wrapper {
        #[reflect(embed)]
        inner: Box<Inner>,
        pub count: u32,
    }

    #[test]
    fn pointer_types_share_entries() {
        let store = Store::new();
        let direct = store.descriptor::<Inner>().unwrap();
        let boxed = store.descriptor::<Box<Box<Inner>>>().unwrap();

        assert_eq!(store.len(), 1);
        assert!(store.contains::<Box<Inner>>());
        assert_eq!(direct, boxed);
    }

    #[test]
    fn values_through_pointers() {
        let store = Store::new();
        let mut value = Box::new(Wrapper::default());

        let name = store.field_value(value.as_mut(), "name").unwrap();
        *name.downcast_mut::<String>().unwrap() = String::from("set");
        assert_eq!(value.inner.name, "set");

        let count = store.field_ref(&value, "count").unwrap();
        assert_eq!(count.downcast_ref::<u32>(), Some(&0));
    }

    #[test]
    fn opaque_values() {
        let store = Store::new();
        let err = store.field_names(&Box::new(1_u8)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(store.descriptor::<String>().is_err());
        assert!(store.is_empty());
    }
}
