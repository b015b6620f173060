//! Literal Quoting
//!
//! A literal is quoted by building the literal HIR node for the text and
//! printing it; the printer escapes every metacharacter. The printed form is
//! then read back with the full parser, so a quoted literal is always
//! accepted wherever a fragment is.

use regex_syntax::{ParserBuilder, hir::Hir};

use crate::{
    errors::{ComposeError, ComposeResult},
    fragment::Fragment,
};

/// Quote `text` as a fragment which matches exactly `text`.
///
/// ## Arguments
/// * `text` - the text to match verbatim.
///
/// ## Returns
/// The quoted fragment, or [`ComposeError::LiteralQuote`] if the quoted form
/// does not parse.
pub fn try_literal(text: &str) -> ComposeResult<Fragment> {
    let quoted = Hir::literal(text.as_bytes()).to_string();

    ParserBuilder::new()
        .build()
        .parse(&quoted)
        .map_err(|source| ComposeError::LiteralQuote {
            input: text.to_string(),
            source,
        })?;

    Ok(Fragment::from_string(quoted))
}

/// Quote `text` as a fragment which matches exactly `text`.
///
/// ```rust
/// use rxcompose::fragment::literal;
///
/// assert_eq!(literal("a.b").as_str(), r"(?:a\.b)");
/// assert_eq!(literal("x").as_str(), "x");
/// ```
///
/// # Panics
/// If [`try_literal`] fails; that is a defect in the regex parser, not in the input.
pub fn literal(text: &str) -> Fragment {
    match try_literal(text) {
        Ok(fragment) => fragment,
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_forms() {
        assert_eq!(literal("").as_str(), "(?:)");
        assert_eq!(literal("x").as_str(), "x");
        assert_eq!(literal("ab").as_str(), "(?:ab)");
        assert_eq!(literal("a.b").as_str(), r"(?:a\.b)");
        assert_eq!(literal("(").as_str(), r"\(");
        assert_eq!(literal("1+1=2").as_str(), r"(?:1\+1=2)");
    }

    #[test]
    fn test_try_literal_accepts_metacharacters() {
        for text in [r"\", "^$", "[a-z]", "{1,2}", "a|b", "#", "&&", "~~", "--"] {
            let quoted = try_literal(text).unwrap();
            assert_ne!(quoted.as_str(), text, "{text:?} was not escaped");
        }
    }

    #[cfg(feature = "regex")]
    mod matching {
        use crate::{
            compiler::compile,
            fragment::{anchor, literal},
        };

        fn exact_matcher(text: &str) -> regex::Regex {
            compile("Literal", [anchor([literal(text)])])
                .unwrap()
                .to_regex()
                .unwrap()
        }

        #[test]
        fn test_literal_matches_only_itself() {
            let re = exact_matcher("a.b*c");
            assert!(re.is_match("a.b*c"));
            assert!(!re.is_match("axbc"));
            assert!(!re.is_match("a.bbc"));
            assert!(!re.is_match("a.b*cc"));
        }

        proptest::proptest! {
            #![proptest_config(proptest::prelude::ProptestConfig::with_cases(256))]

            #[test]
            fn literal_roundtrip_metacharacters(text in "[.+*?()|\\[\\]{}^$#&~\\\\ a-z-]{0,24}") {
                let re = exact_matcher(&text);
                proptest::prop_assert!(re.is_match(&text));
                let longer = format!("{text}x");
                proptest::prop_assert!(!re.is_match(&longer));
            }

            #[test]
            fn literal_roundtrip_unicode(text in "\\PC{1,24}") {
                let re = exact_matcher(&text);
                proptest::prop_assert!(re.is_match(&text));

                let mut chars = text.chars();
                let first = chars.next().unwrap();
                let replacement = if first == 'z' { 'y' } else { 'z' };
                let changed: String = core::iter::once(replacement).chain(chars).collect();
                proptest::prop_assert!(!re.is_match(&changed));
            }
        }
    }
}
