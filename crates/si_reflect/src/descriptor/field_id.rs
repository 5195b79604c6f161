use alloc::boxed::Box;
use core::fmt;

/// Identifies a field relative to an outer struct.
///
/// A `FieldId` carries both the declared field name and the index path that
/// reaches it: every element but the last is the index of an embedded field,
/// the last is the index of the field itself.
///
/// ```
/// use si_reflect::descriptor::FieldId;
///
/// let id = FieldId::direct("baz", 0).promote(1);
///
/// assert_eq!(id.field(), "baz");
/// assert_eq!(id.path(), &[1, 0]);
/// assert_eq!(id.index(), 0);
/// assert!(!id.is_direct());
/// assert_eq!(id.to_string(), "baz@1.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldId {
    field: &'static str,
    path: Box<[usize]>,
}

impl FieldId {
    /// Creates the id of a field declared directly on the struct.
    #[inline]
    pub fn direct(field: &'static str, index: usize) -> Self {
        Self {
            field,
            path: Box::new([index]),
        }
    }

    /// Returns the id as seen from a struct embedding this one at `embed_index`.
    pub fn promote(&self, embed_index: usize) -> Self {
        let mut path = alloc::vec::Vec::with_capacity(self.path.len() + 1);
        path.push(embed_index);
        path.extend_from_slice(&self.path);
        Self {
            field: self.field,
            path: path.into_boxed_slice(),
        }
    }

    /// Returns the declared name of the field.
    #[inline]
    pub const fn field(&self) -> &'static str {
        self.field
    }

    /// Returns the index path from the outer struct.
    #[inline]
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Returns the declaration index of the field within its own struct.
    #[inline]
    pub fn index(&self) -> usize {
        self.path.last().copied().unwrap_or_default()
    }

    /// Returns how many embedded structs are crossed to reach the field.
    #[inline]
    pub fn depth(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Returns `true` if the field is declared on the outer struct itself.
    #[inline]
    pub fn is_direct(&self) -> bool {
        self.path.len() == 1
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field)?;
        let mut sep = '@';
        for index in &self.path {
            write!(f, "{sep}{index}")?;
            sep = '.';
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::FieldId;

    #[test]
    fn nested_promotion() {
        let id = FieldId::direct("a", 3);
        assert!(id.is_direct());
        assert_eq!(id.depth(), 0);
        assert_eq!(id.to_string(), "a@3");

        let id = id.promote(1).promote(0);
        assert_eq!(id.path(), &[0, 1, 3]);
        assert_eq!(id.index(), 3);
        assert_eq!(id.depth(), 2);
        assert_eq!(id.to_string(), "a@0.1.3");
    }
}
