use core::fmt;

// -----------------------------------------------------------------------------
// Tag

/// A parsed naming annotation, `name[,option[,option...]]`.
///
/// ```
/// use si_reflect::descriptor::Tag;
///
/// let tag = Tag::parse("bar,omitempty").unwrap();
/// assert_eq!(tag.name(), Some("bar"));
/// assert!(tag.options().contains("omitempty"));
///
/// // Keep the declared name, only set options.
/// assert_eq!(Tag::parse(",omitempty").unwrap().name(), None);
///
/// // Excluded.
/// assert!(Tag::parse("-").is_none());
///
/// // A literal `-` name.
/// assert_eq!(Tag::parse("-,").unwrap().name(), Some("-"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    name: &'a str,
    options: TagOptions<'a>,
}

impl<'a> Tag<'a> {
    /// The annotation that excludes a field.
    pub const EXCLUDE: &'static str = "-";

    /// Parses a raw annotation.
    ///
    /// Returns `None` if the annotation excludes the field.
    pub fn parse(raw: &'a str) -> Option<Self> {
        if raw == Self::EXCLUDE {
            return None;
        }
        let (name, options) = match raw.split_once(',') {
            Some((name, options)) => (name, TagOptions(options)),
            None => (raw, TagOptions("")),
        };
        Some(Self { name, options })
    }

    /// Returns the external name, or `None` if the declared name should be used.
    #[inline]
    pub fn name(&self) -> Option<&'a str> {
        if self.name.is_empty() {
            None
        } else {
            Some(self.name)
        }
    }

    /// Returns the options following the name.
    #[inline]
    pub const fn options(&self) -> TagOptions<'a> {
        self.options
    }
}

// -----------------------------------------------------------------------------
// TagOptions

/// Comma separated options of a [`Tag`], such as `omitempty`.
///
/// Options are recognized but carry no meaning for name resolution.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TagOptions<'a>(&'a str);

impl<'a> TagOptions<'a> {
    /// Returns `true` if `option` is one of the options.
    pub fn contains(&self, option: &str) -> bool {
        !option.is_empty() && self.iter().any(|it| it == option)
    }

    /// Iterates over the non-empty options.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.0.split(',').filter(|it| !it.is_empty())
    }

    /// Returns `true` if there are no options.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Returns the options as written.
    #[inline]
    pub const fn as_str(&self) -> &'a str {
        self.0
    }
}

impl fmt::Debug for TagOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{Tag, TagOptions};

    #[test]
    fn parse_names() {
        assert_eq!(Tag::parse("").unwrap().name(), None);
        assert_eq!(Tag::parse("foo").unwrap().name(), Some("foo"));
        assert_eq!(Tag::parse("foo,").unwrap().name(), Some("foo"));
        assert_eq!(Tag::parse(",").unwrap().name(), None);
        assert!(Tag::parse("-").is_none());
        assert_eq!(Tag::parse("-,omitempty").unwrap().name(), Some("-"));
    }

    #[test]
    fn parse_options() {
        let tag = Tag::parse("bar,omitempty,string").unwrap();
        let options: Vec<_> = tag.options().iter().collect();
        assert_eq!(options, ["omitempty", "string"]);
        assert!(tag.options().contains("string"));
        assert!(!tag.options().contains("omit"));
        assert!(!tag.options().contains(""));
        assert_eq!(tag.options().as_str(), "omitempty,string");

        assert!(Tag::parse("bar").unwrap().options().is_empty());
        assert!(Tag::parse("bar,").unwrap().options().is_empty());
        assert_eq!(TagOptions::default(), Tag::parse("bar").unwrap().options());
    }
}
