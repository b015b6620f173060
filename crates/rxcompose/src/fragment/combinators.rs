//! Fragment Combinators
//!
//! Every combinator returns text wrapped in at least one non-capturing group,
//! so its output can take a quantifier or sit beside any other fragment.

use core::{borrow::Borrow, fmt::Display};

use crate::fragment::{ANY_WHITESPACE, BEGINNING, END, Fragment};

/// Wrap a fragment in a non-capturing group.
pub fn group(fragment: &Fragment) -> Fragment {
    Fragment::from_string(format!("(?:{fragment})"))
}

/// Wrap a fragment in a named capturing group.
///
/// The name is not checked here; a name the parser rejects
/// surfaces as [`ComposeError::PatternSyntax`](crate::ComposeError::PatternSyntax)
/// when the fragment is compiled.
pub fn capture(
    name: &str,
    fragment: &Fragment,
) -> Fragment {
    Fragment::from_string(format!("(?P<{name}>{fragment})"))
}

/// Convert any displayable value into a grouped [`Fragment`].
///
/// The text is taken as regex syntax and is **not** escaped;
/// use [`literal`](crate::fragment::literal) for text which must match verbatim.
///
/// ```rust
/// use rxcompose::fragment::to_fragment;
///
/// assert_eq!(to_fragment("a|b").as_str(), "(?:a|b)");
/// assert_eq!(to_fragment(&42).as_str(), "(?:42)");
/// ```
pub fn to_fragment<T: Display + ?Sized>(value: &T) -> Fragment {
    Fragment::from_string(format!("(?:{value})"))
}

/// Group each fragment, join them with `glue`, and group the result.
///
/// `""` and `"|"` are the glues that make sense;
/// see [`sequence`] and [`alternation`].
///
/// ## Arguments
/// * `glue` - the text placed between the grouped fragments.
/// * `fragments` - the fragments to join.
///
/// ## Returns
/// A grouped fragment; `(?:)` for an empty input.
pub fn join<I, F>(
    glue: &str,
    fragments: I,
) -> Fragment
where
    I: IntoIterator<Item = F>,
    F: Borrow<Fragment>,
{
    let parts = fragments
        .into_iter()
        .map(|f| group(f.borrow()).into_string())
        .collect::<Vec<_>>();

    Fragment::from_string(format!("(?:{})", parts.join(glue)))
}

/// Match any one of the fragments.
pub fn alternation<I, F>(fragments: I) -> Fragment
where
    I: IntoIterator<Item = F>,
    F: Borrow<Fragment>,
{
    group(&join("|", fragments))
}

/// Match the fragments one after another.
pub fn sequence<I, F>(fragments: I) -> Fragment
where
    I: IntoIterator<Item = F>,
    F: Borrow<Fragment>,
{
    group(&join("", fragments))
}

/// Match the sequence of fragments against the whole text.
///
/// Uses the beginning/end of text anchors, not the line anchors.
pub fn anchor<I, F>(fragments: I) -> Fragment
where
    I: IntoIterator<Item = F>,
    F: Borrow<Fragment>,
{
    sequence([BEGINNING, sequence(fragments), END])
}

/// Like [`anchor`], but also consumes leading and trailing whitespace.
pub fn trim_anchor<I, F>(fragments: I) -> Fragment
where
    I: IntoIterator<Item = F>,
    F: Borrow<Fragment>,
{
    sequence([
        BEGINNING,
        ANY_WHITESPACE,
        sequence(fragments),
        ANY_WHITESPACE,
        END,
    ])
}

/// Apply a quantifier (`"*"`, `"+"`, `"?"`, `"*?"`, `"{2,4}"`, ...) to a whole fragment.
pub fn modify(
    fragment: &Fragment,
    modifier: &str,
) -> Fragment {
    Fragment::from_string(format!("{}{modifier}", group(fragment)))
}

/// The sequence of fragments, zero or one time.
pub fn optional<I, F>(fragments: I) -> Fragment
where
    I: IntoIterator<Item = F>,
    F: Borrow<Fragment>,
{
    modify(&sequence(fragments), "?")
}

/// The sequence of fragments, zero or more times.
pub fn any<I, F>(fragments: I) -> Fragment
where
    I: IntoIterator<Item = F>,
    F: Borrow<Fragment>,
{
    modify(&sequence(fragments), "*")
}

/// The sequence of fragments, one or more times.
pub fn some<I, F>(fragments: I) -> Fragment
where
    I: IntoIterator<Item = F>,
    F: Borrow<Fragment>,
{
    modify(&sequence(fragments), "+")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(text: &'static str) -> Fragment {
        Fragment::from_static(text)
    }

    #[test]
    fn test_group_and_capture() {
        assert_eq!(group(&raw("a")).as_str(), "(?:a)");
        assert_eq!(capture("x", &raw("a")).as_str(), "(?P<x>a)");
    }

    #[test]
    fn test_to_fragment_does_not_escape() {
        assert_eq!(to_fragment("a.b").as_str(), "(?:a.b)");
        assert_eq!(to_fragment(&raw("[0-9]")).as_str(), "(?:[0-9])");
        assert_eq!(to_fragment(&3.5).as_str(), "(?:3.5)");
    }

    #[test]
    fn test_join() {
        assert_eq!(join("|", [raw("a"), raw("b")]).as_str(), "(?:(?:a)|(?:b))");
        assert_eq!(join("", [&raw("a"), &raw("b")]).as_str(), "(?:(?:a)(?:b))");
        assert_eq!(join("|", Vec::<Fragment>::new()).as_str(), "(?:)");
    }

    #[test]
    fn test_alternation_and_sequence() {
        assert_eq!(
            alternation([raw("a"), raw("b")]).as_str(),
            "(?:(?:(?:a)|(?:b)))"
        );
        assert_eq!(sequence([raw("a"), raw("b")]).as_str(), "(?:(?:(?:a)(?:b)))");
        assert_eq!(sequence(Vec::<Fragment>::new()).as_str(), "(?:(?:))");
    }

    #[test]
    fn test_modify_binds_to_whole_fragment() {
        assert_eq!(modify(&raw("ab"), "+").as_str(), "(?:ab)+");
        assert_eq!(optional([raw("a")]).as_str(), "(?:(?:(?:(?:a))))?");
        assert_eq!(any([raw("a")]).as_str(), "(?:(?:(?:(?:a))))*");
        assert_eq!(some([raw("a")]).as_str(), "(?:(?:(?:(?:a))))+");
    }

    #[test]
    fn test_anchor() {
        let anchored = anchor([raw("a")]);
        assert!(anchored.as_str().starts_with("(?:(?:(?:^)"));
        assert!(anchored.as_str().ends_with("(?:$)))"));

        let trimmed = trim_anchor([raw("a")]);
        assert_eq!(
            trimmed.as_str().matches(ANY_WHITESPACE.as_str()).count(),
            2
        );
    }
}
