use alloc::boxed::Box;

/// Marker for types that can be embedded into a reflected struct.
///
/// `#[derive(Reflect)]` implements it for every struct, and a field marked
/// `#[reflect(embed)]` must have an `Embed` type. Owning pointers to
/// embeddable types are embeddable too.
///
/// ```compile_fail
/// use si_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Foo {
///     #[reflect(embed)]
///     pub inner: u32,
/// }
/// ```
pub trait Embed {}

impl<T: Embed + ?Sized> Embed for Box<T> {}
