//! # Regex Fragments
//!
//! A [`Fragment`] is a piece of regex source text which is safe to compose:
//! every combinator wraps its output in a non-capturing group, so a fragment
//! can be followed by a quantifier, or placed next to another fragment, without
//! changing what either of them means.
//!
//! There are exactly two ways to get a fragment from arbitrary text:
//!
//! * [`to_fragment`] - the text *is* regex syntax; it is grouped but not escaped.
//! * [`literal`] - the text is matched verbatim; every metacharacter is escaped.
//!
//! There is deliberately no `From<&str>` for [`Fragment`]; callers must pick one.
//!
//! ```rust
//! use rxcompose::fragment::{WORD, capture, literal, sequence};
//!
//! let greeting = sequence([literal("Hello, "), capture("name", &WORD)]);
//! assert!(greeting.as_str().contains("(?P<name>"));
//! ```

mod combinators;
mod literal;
mod prelude;

use core::fmt;
use std::borrow::Cow;

#[doc(inline)]
pub use combinators::*;
#[doc(inline)]
pub use literal::{literal, try_literal};
#[doc(inline)]
pub use prelude::*;

/// A self-contained unit of regex source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fragment(Cow<'static, str>);

impl Fragment {
    /// Wrap static text which is already a single atom (a class, an anchor, ...).
    pub(crate) const fn from_static(text: &'static str) -> Self {
        Self(Cow::Borrowed(text))
    }

    /// Wrap owned text produced by a combinator.
    pub(crate) fn from_string(text: String) -> Self {
        Self(Cow::Owned(text))
    }

    /// Get the fragment's regex source text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the fragment, returning its source text.
    pub fn into_string(self) -> String {
        self.0.into_owned()
    }

    /// The length of the source text, in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Is the source text empty?
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Method form of [`group`].
    pub fn group(&self) -> Fragment {
        group(self)
    }

    /// Method form of [`capture`].
    pub fn capture(
        &self,
        name: &str,
    ) -> Fragment {
        capture(name, self)
    }

    /// Method form of [`modify`].
    pub fn modify(
        &self,
        modifier: &str,
    ) -> Fragment {
        modify(self, modifier)
    }
}

impl fmt::Display for Fragment {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Fragment> for String {
    fn from(fragment: Fragment) -> Self {
        fragment.into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let fragment = Fragment::from_static("[0-9]");
        assert_eq!(fragment.as_str(), "[0-9]");
        assert_eq!(fragment.len(), 5);
        assert!(!fragment.is_empty());
        assert_eq!(fragment.to_string(), "[0-9]");
        assert_eq!(String::from(fragment.clone()), "[0-9]");
        assert_eq!(fragment.into_string(), "[0-9]");
    }

    #[test]
    fn test_method_forms() {
        let fragment = Fragment::from_static("a");
        assert_eq!(fragment.group(), group(&fragment));
        assert_eq!(fragment.capture("x"), capture("x", &fragment));
        assert_eq!(fragment.modify("*?"), modify(&fragment, "*?"));
    }

    #[test]
    fn test_static_and_owned_compare_equal() {
        assert_eq!(
            Fragment::from_static("(?:a)"),
            Fragment::from_string("(?:a)".to_string())
        );
    }
}
