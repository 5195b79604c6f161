use alloc::string::String;

use thiserror::Error;

use crate::descriptor::FieldId;
use crate::info::ReflectKind;

/// The category of a [`LookupError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    InvalidState,
}

/// An error returned by [`Store`](crate::Store) lookups.
///
/// Every variant names the type involved. Failed lookups leave the store
/// usable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LookupError {
    /// The value is not a struct, even after following pointers.
    #[error("`{type_path}` is not a struct, found {kind}")]
    InvalidArgument {
        type_path: &'static str,
        kind: ReflectKind,
    },
    /// The external name is unknown for the type.
    #[error("`{type_path}` has no field named `{name}`")]
    NotFound {
        name: String,
        type_path: &'static str,
    },
    /// The descriptor resolved the name but the value did not expose the field.
    #[error("field `{field}` of `{type_path}` (for `{name}`) is not accessible")]
    InvalidState {
        name: String,
        field: FieldId,
        type_path: &'static str,
    },
}

impl LookupError {
    /// Returns the category of the error.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::InvalidState { .. } => ErrorKind::InvalidState,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{ErrorKind, LookupError};
    use crate::descriptor::FieldId;
    use crate::info::ReflectKind;

    #[test]
    fn messages() {
        let err = LookupError::NotFound {
            name: "nope".to_string(),
            type_path: "a::X",
        };
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "`a::X` has no field named `nope`");

        let err = LookupError::InvalidArgument {
            type_path: "u8",
            kind: ReflectKind::Opaque,
        };
        assert_eq!(err.to_string(), "`u8` is not a struct, found Opaque");

        let err = LookupError::InvalidState {
            name: "baz".to_string(),
            field: FieldId::direct("baz", 0).promote(1),
            type_path: "a::X",
        };
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(
            err.to_string(),
            "field `baz@1.0` of `a::X` (for `baz`) is not accessible"
        );
    }
}
