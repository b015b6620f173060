//! # Compiled Variables

use core::fmt;

use regex_syntax::hir::Hir;

#[cfg(feature = "regex")]
use crate::errors::ComposeResult;

/// A named, validated and simplified pattern.
///
/// Built by the [`VariableCompiler`](crate::compiler::VariableCompiler).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    name: String,
    hir: Hir,
    pattern: String,
    capture_names: Vec<String>,
}

impl Variable {
    pub(crate) fn new(
        name: &str,
        hir: Hir,
        capture_names: Vec<String>,
    ) -> Self {
        let pattern = hir.to_string();
        Self {
            name: name.to_string(),
            hir,
            pattern,
            capture_names,
        }
    }

    /// The variable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The simplified pattern tree.
    pub fn hir(&self) -> &Hir {
        &self.hir
    }

    /// The canonical pattern text, printed from [`hir`](Self::hir).
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The capture group names; entry `i` names group `i + 1`.
    ///
    /// Unnamed groups are listed as `""`.
    pub fn capture_names(&self) -> &[String] {
        &self.capture_names
    }

    /// The number of capture groups, not counting the implicit whole-match group.
    pub fn max_cap(&self) -> usize {
        self.capture_names.len()
    }

    /// The group index of the first capture group called `name`.
    ///
    /// ## Returns
    /// A 1-based group index, or `None` if no group has that name.
    pub fn capture_index(
        &self,
        name: &str,
    ) -> Option<usize> {
        if name.is_empty() {
            return None;
        }
        self.capture_names
            .iter()
            .position(|n| n == name)
            .map(|idx| idx + 1)
    }

    /// Iterate over `(group index, name)` for the named groups, in index order.
    pub fn named_captures(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.capture_names
            .iter()
            .enumerate()
            .filter(|(_, name)| !name.is_empty())
            .map(|(idx, name)| (idx + 1, name.as_str()))
    }

    /// Compile the canonical pattern with the `regex` crate.
    #[cfg(feature = "regex")]
    pub fn to_regex(&self) -> ComposeResult<regex::Regex> {
        Ok(regex::Regex::new(&self.pattern)?)
    }
}

impl fmt::Display for Variable {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        compiler::compile,
        fragment::{WORD, capture, literal, to_fragment},
    };

    #[test]
    fn test_accessors() {
        let variable = compile(
            "Assign",
            [
                capture("lhs", &WORD),
                to_fragment("( ?)"),
                literal("="),
                capture("rhs", &WORD),
            ],
        )
        .unwrap();

        assert_eq!(variable.name(), "Assign");
        assert_eq!(variable.max_cap(), 3);
        assert_eq!(variable.capture_names(), ["lhs", "", "rhs"]);
        assert_eq!(variable.to_string(), variable.pattern());
        assert_eq!(
            variable.named_captures().collect::<Vec<_>>(),
            [(1, "lhs"), (3, "rhs")]
        );
        assert_eq!(variable.capture_index("rhs"), Some(3));
        assert_eq!(variable.capture_index("missing"), None);
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let err = compile("Twice", [capture("x", &WORD), literal("-"), capture("x", &WORD)])
            .unwrap_err();
        assert!(matches!(err, crate::ComposeError::PatternSyntax { .. }));
    }

    #[cfg(feature = "regex")]
    #[test]
    fn test_to_regex() {
        let variable = compile("Assign", [capture("lhs", &WORD), literal("="), capture("rhs", &WORD)])
            .unwrap();
        let re = variable.to_regex().unwrap();

        let caps = re.captures("width=80").unwrap();
        assert_eq!(&caps["lhs"], "width");
        assert_eq!(&caps["rhs"], "80");
        assert_eq!(re.captures_len(), variable.max_cap() + 1);
    }
}
