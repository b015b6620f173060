//! Compile Options
//!
//! Options for building a [`VariableCompiler`].

use regex_syntax::{Parser, ParserBuilder};

use crate::compiler::VariableCompiler;

/// The parser's default nesting limit.
pub const DEFAULT_NEST_LIMIT: u32 = 250;

/// Options for configuring a [`VariableCompiler`].
///
/// The flags are applied when the pattern is parsed, so their effect is
/// baked into the canonical pattern text; no flags need to be passed on
/// to whatever finally compiles the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompileOptions {
    /// Unicode-aware classes and case folding.
    ///
    /// When disabled, patterns which could match invalid UTF-8
    /// (like negated ASCII classes) are rejected.
    pub unicode: bool,

    /// Match letters regardless of case.
    pub case_insensitive: bool,

    /// `^` and `$` match at line boundaries.
    pub multi_line: bool,

    /// `.` also matches `\n`.
    pub dot_matches_new_line: bool,

    /// Line anchors treat `\r\n` as a line terminator.
    pub crlf: bool,

    /// Swap the meaning of greedy and lazy quantifiers.
    pub swap_greed: bool,

    /// The maximum nesting depth the parser accepts.
    ///
    /// Every combinator adds a few levels of grouping,
    /// so deeply composed fragments may need this raised.
    pub nest_limit: u32,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            unicode: true,
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            crlf: false,
            swap_greed: false,
            nest_limit: DEFAULT_NEST_LIMIT,
        }
    }
}

impl CompileOptions {
    /// Is Unicode mode enabled?
    pub fn unicode(&self) -> bool {
        self.unicode
    }

    /// Set Unicode mode.
    pub fn set_unicode(
        &mut self,
        unicode: bool,
    ) {
        self.unicode = unicode;
    }

    /// Set Unicode mode and return the options.
    pub fn with_unicode(
        mut self,
        unicode: bool,
    ) -> Self {
        self.set_unicode(unicode);
        self
    }

    /// Is case-insensitive matching enabled?
    pub fn case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Set case-insensitive matching.
    pub fn set_case_insensitive(
        &mut self,
        case_insensitive: bool,
    ) {
        self.case_insensitive = case_insensitive;
    }

    /// Set case-insensitive matching and return the options.
    pub fn with_case_insensitive(
        mut self,
        case_insensitive: bool,
    ) -> Self {
        self.set_case_insensitive(case_insensitive);
        self
    }

    /// Is multi-line mode enabled?
    pub fn multi_line(&self) -> bool {
        self.multi_line
    }

    /// Set multi-line mode.
    pub fn set_multi_line(
        &mut self,
        multi_line: bool,
    ) {
        self.multi_line = multi_line;
    }

    /// Set multi-line mode and return the options.
    pub fn with_multi_line(
        mut self,
        multi_line: bool,
    ) -> Self {
        self.set_multi_line(multi_line);
        self
    }

    /// Does `.` match `\n`?
    pub fn dot_matches_new_line(&self) -> bool {
        self.dot_matches_new_line
    }

    /// Set whether `.` matches `\n` and return the options.
    pub fn with_dot_matches_new_line(
        mut self,
        dot_matches_new_line: bool,
    ) -> Self {
        self.dot_matches_new_line = dot_matches_new_line;
        self
    }

    /// Is CRLF mode enabled?
    pub fn crlf(&self) -> bool {
        self.crlf
    }

    /// Set CRLF mode and return the options.
    pub fn with_crlf(
        mut self,
        crlf: bool,
    ) -> Self {
        self.crlf = crlf;
        self
    }

    /// Are greedy and lazy quantifiers swapped?
    pub fn swap_greed(&self) -> bool {
        self.swap_greed
    }

    /// Set whether greedy and lazy quantifiers are swapped and return the options.
    pub fn with_swap_greed(
        mut self,
        swap_greed: bool,
    ) -> Self {
        self.swap_greed = swap_greed;
        self
    }

    /// Get the configured nesting limit.
    pub fn nest_limit(&self) -> u32 {
        self.nest_limit
    }

    /// Set the nesting limit.
    pub fn set_nest_limit(
        &mut self,
        nest_limit: u32,
    ) {
        self.nest_limit = nest_limit;
    }

    /// Set the nesting limit and return the options.
    pub fn with_nest_limit(
        mut self,
        nest_limit: u32,
    ) -> Self {
        self.set_nest_limit(nest_limit);
        self
    }

    /// Build a fresh parser for these options.
    ///
    /// Parsers carry mutable state between calls, so each compilation gets its own.
    pub fn parser(&self) -> Parser {
        ParserBuilder::new()
            .unicode(self.unicode)
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .crlf(self.crlf)
            .swap_greed(self.swap_greed)
            .nest_limit(self.nest_limit)
            .build()
    }

    /// Build a [`VariableCompiler`] with these options.
    pub fn compiler(self) -> VariableCompiler {
        VariableCompiler::new(self)
    }
}
