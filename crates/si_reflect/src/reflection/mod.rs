// -----------------------------------------------------------------------------
// Modules

mod reflect;

// -----------------------------------------------------------------------------
// Exports

pub(crate) use reflect::impl_reflect_cast_fn;

pub use reflect::Reflect;
