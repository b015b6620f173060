//! # Prelude Fragments
//!
//! Commonly needed fragments. Character classes are spelled out in ASCII,
//! so they print compactly and do not pick up Unicode digits or letters.

use std::sync::LazyLock;

use crate::fragment::{Fragment, any, sequence, some};

/// A lowercase hex digit.
pub const HEX_DIGIT: Fragment = Fragment::from_static("[0-9a-f]");

/// One or more lowercase hex digits.
pub static HEX_NUMBER: LazyLock<Fragment> = LazyLock::new(|| some([HEX_DIGIT]));

/// An ASCII decimal digit.
pub const DECIMAL_DIGIT: Fragment = Fragment::from_static("[0-9]");

/// One or more ASCII decimal digits.
pub static DECIMAL_NUMBER: LazyLock<Fragment> = LazyLock::new(|| some([DECIMAL_DIGIT]));

/// An ASCII word character: letters, digits and `_`.
pub const WORD_CHAR: Fragment = Fragment::from_static("[0-9A-Za-z_]");

/// One or more ASCII word characters.
pub static WORD: LazyLock<Fragment> = LazyLock::new(|| some([WORD_CHAR]));

/// A character of the base64 alphabet, in either the standard or the url-safe variant.
pub const BASE64_CHAR: Fragment = Fragment::from_static("[./a-zA-Z0-9_-]");

/// A base64 string with optional `=` padding.
pub static BASE64: LazyLock<Fragment> = LazyLock::new(|| {
    sequence([
        some([BASE64_CHAR]),
        any([Fragment::from_static("=")]),
    ])
});

/// The beginning of the text.
pub const BEGINNING: Fragment = Fragment::from_static("^");

/// The end of the text.
pub const END: Fragment = Fragment::from_static("$");

/// A possibly empty run of ASCII whitespace.
pub const ANY_WHITESPACE: Fragment = Fragment::from_static(r"[\t\n\f\r ]*");
