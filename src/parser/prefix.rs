//! Prefix markers for tokenized arguments.

use std::borrow::Cow;
use std::fmt;

/// A marker that introduces an argument value, e.g. `t/` in
/// `add James t/friend`.
///
/// Prefixes compare and hash by their marker text only.
///
/// # Example
///
/// ```
/// use address_book::parser::Prefix;
///
/// assert_eq!(Prefix::new("t/"), Prefix::new(String::from("t/")));
/// assert_ne!(Prefix::new("t/"), Prefix::new("p/"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(Cow<'static, str>);

impl Prefix {
    /// Create a prefix from any string. The marker is not validated.
    pub fn new(marker: impl Into<Cow<'static, str>>) -> Self {
        Self(marker.into())
    }

    /// Create a prefix usable in `const`/`static` position.
    pub const fn from_static(marker: &'static str) -> Self {
        Self(Cow::Borrowed(marker))
    }

    pub fn marker(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(prefix: &Prefix) -> u64 {
        let mut hasher = DefaultHasher::new();
        prefix.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_prefix_equality_and_hash() {
        let a = Prefix::new("t/");
        let b = Prefix::new("t/".to_string());
        let c = Prefix::from_static("t/");

        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(hash_of(&a), hash_of(&c));
        assert_ne!(a, Prefix::new("p/"));
    }

    #[test]
    fn test_prefix_display() {
        assert_eq!(Prefix::new("sp/").to_string(), "sp/");
        assert_eq!(Prefix::new("").marker(), "");
    }
}
