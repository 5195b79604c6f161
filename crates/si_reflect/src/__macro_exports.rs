//! Items used by `#[derive(Reflect)]`. Not public API.

#[doc(hidden)]
pub mod macro_utils {
    pub use crate::impls::concat as __concat;
    pub use alloc::borrow::ToOwned;
    pub use alloc::boxed::Box;
    pub use alloc::string::ToString;
}

#[cfg(feature = "auto_register")]
#[doc(hidden)]
pub mod auto_register {
    use crate::info::TypeInfo;

    pub use inventory;

    /// Submitted by types marked `#[reflect(auto_register)]`.
    pub struct __AutoRegisterFunc(pub fn() -> &'static TypeInfo);

    inventory::collect!(__AutoRegisterFunc);

    /// Iterates over the infos of every registered type.
    pub(crate) fn registered() -> impl Iterator<Item = &'static TypeInfo> {
        inventory::iter::<__AutoRegisterFunc>
            .into_iter()
            .map(|func| (func.0)())
    }
}
