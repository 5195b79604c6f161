/// Which entry wins when a direct field and an embedded field share an
/// external name.
///
/// Between two embedded structs the later declared one always wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EmbedPrecedence {
    /// Direct fields keep their names.
    #[default]
    DirectFirst,
    /// Embedded names overwrite direct ones.
    Overwrite,
}

/// Settings of a [`Store`](crate::Store).
///
/// ```
/// use si_reflect::{EmbedPrecedence, Store, StoreConfig};
///
/// static YAML: Store = Store::with_config(
///     StoreConfig::new()
///         .with_tag_key("yaml")
///         .with_precedence(EmbedPrecedence::Overwrite),
/// );
///
/// assert_eq!(YAML.config().tag_key, "yaml");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StoreConfig {
    /// The annotation key holding external names.
    pub tag_key: &'static str,
    /// See [`EmbedPrecedence`].
    pub precedence: EmbedPrecedence,
}

impl StoreConfig {
    /// `json` names, direct fields first.
    pub const DEFAULT: Self = Self {
        tag_key: "json",
        precedence: EmbedPrecedence::DirectFirst,
    };

    #[inline]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    #[inline]
    pub const fn with_tag_key(mut self, tag_key: &'static str) -> Self {
        self.tag_key = tag_key;
        self
    }

    #[inline]
    pub const fn with_precedence(mut self, precedence: EmbedPrecedence) -> Self {
        self.precedence = precedence;
        self
    }
}

impl Default for StoreConfig {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}
