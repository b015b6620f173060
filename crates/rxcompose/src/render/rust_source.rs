//! Rust source rendering.
//!
//! Each variable becomes a lazily compiled static, plus one `usize`
//! constant per named capture group:
//!
//! ```text
//! pub static Greeting: LazyLock<Regex> = LazyLock::new(|| Regex::new("...").expect("invalid pattern for Greeting"));
//! pub const Greeting_name: usize = 1;
//! ```
//!
//! Unnamed groups take up an index, but get no constant.

use core::fmt;

use crate::{
    Variable,
    render::{RegexFile, RenderOptions},
};

/// [`Display`](fmt::Display) adapter rendering one [`Variable`].
#[derive(Debug, Clone, Copy)]
pub struct VariableSource<'a> {
    variable: &'a Variable,
    options: &'a RenderOptions,
}

impl<'a> VariableSource<'a> {
    /// Create a new renderer.
    pub fn new(
        variable: &'a Variable,
        options: &'a RenderOptions,
    ) -> Self {
        Self { variable, options }
    }
}

impl fmt::Display for VariableSource<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let vis = self.options.item_prefix();
        let regex = self.options.regex_name();
        let lazy = self.options.lazy_name();
        let name = self.variable.name();

        writeln!(
            f,
            "{vis}static {name}: {lazy}<{regex}> = {lazy}::new(|| {regex}::new({pattern:?}).expect(\"invalid pattern for {name}\"));",
            pattern = self.variable.pattern(),
        )?;

        for (idx, group) in self.variable.named_captures() {
            writeln!(f, "{vis}const {name}_{group}: usize = {idx};")?;
        }

        Ok(())
    }
}

/// [`Display`](fmt::Display) adapter rendering a whole [`RegexFile`].
#[derive(Debug, Clone, Copy)]
pub struct FileSource<'a> {
    file: &'a RegexFile,
    options: &'a RenderOptions,
}

impl<'a> FileSource<'a> {
    /// Create a new renderer.
    pub fn new(
        file: &'a RegexFile,
        options: &'a RenderOptions,
    ) -> Self {
        Self { file, options }
    }
}

impl fmt::Display for FileSource<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if self.options.header {
            writeln!(f, "//! Regular expressions for the `{}` module.", self.file.module())?;
            writeln!(f, "//!")?;
            writeln!(f, "//! Generated by rxcompose; do not edit.")?;
            writeln!(f, "#![allow(non_upper_case_globals)]")?;
            writeln!(f)?;
        }

        writeln!(f, "use {};", self.options.lazy_type)?;
        writeln!(f)?;
        writeln!(f, "use {};", self.options.regex_type)?;

        for variable in self.file.variables() {
            writeln!(f)?;
            write!(f, "{}", VariableSource::new(variable, self.options))?;
        }

        Ok(())
    }
}

/// Render one [`Variable`] as Rust source.
pub fn render_variable(
    variable: &Variable,
    options: &RenderOptions,
) -> String {
    VariableSource::new(variable, options).to_string()
}

#[cfg(test)]
mod tests {
    use indoc::formatdoc;

    use super::*;
    use crate::{
        compiler::compile,
        fragment::{DECIMAL_NUMBER, WORD, capture, literal, to_fragment},
    };

    #[test]
    fn test_variable_without_groups() {
        let variable = compile("Digits", [&*DECIMAL_NUMBER]).unwrap();
        let source = render_variable(&variable, &RenderOptions::default());

        assert_eq!(
            source,
            format!(
                "pub static Digits: LazyLock<Regex> = LazyLock::new(|| Regex::new({:?}).expect(\"invalid pattern for Digits\"));\n",
                variable.pattern()
            )
        );
    }

    #[test]
    fn test_group_constants_skip_placeholders() {
        let variable = compile(
            "Version",
            [
                capture("major", &DECIMAL_NUMBER),
                to_fragment(r"(\.)"),
                capture("minor", &DECIMAL_NUMBER),
            ],
        )
        .unwrap();
        let source = render_variable(&variable, &RenderOptions::default().with_visibility(""));

        let lines = source.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("static Version: LazyLock<Regex> = "));
        assert_eq!(lines[1], "const Version_major: usize = 1;");
        assert_eq!(lines[2], "const Version_minor: usize = 3;");
    }

    #[test]
    fn test_pattern_is_a_valid_string_literal() {
        let variable = compile("Quoted", [literal("say \"hi\" \\ bye")]).unwrap();
        let source = render_variable(&variable, &RenderOptions::default());
        assert!(source.contains(&format!("Regex::new({:?})", variable.pattern())));
        assert!(source.contains(r#"\"hi\""#));
    }

    #[test]
    fn test_file() {
        let greeting = compile("Greeting", [literal("Hello, "), capture("name", &WORD)]).unwrap();
        let digits = compile("Digits", [&*DECIMAL_NUMBER]).unwrap();
        let file = RegexFile::with_variables("greetings", [greeting.clone(), digits.clone()]);

        let expected = formatdoc! {"
            //! Regular expressions for the `greetings` module.
            //!
            //! Generated by rxcompose; do not edit.
            #![allow(non_upper_case_globals)]

            use std::sync::LazyLock;

            use regex::Regex;

            pub static Greeting: LazyLock<Regex> = LazyLock::new(|| Regex::new({greeting:?}).expect(\"invalid pattern for Greeting\"));
            pub const Greeting_name: usize = 1;

            pub static Digits: LazyLock<Regex> = LazyLock::new(|| Regex::new({digits:?}).expect(\"invalid pattern for Digits\"));
            ",
            greeting = greeting.pattern(),
            digits = digits.pattern(),
        };

        assert_eq!(file.render(&RenderOptions::default()), expected);
    }

    #[test]
    fn test_file_without_header() {
        let file = RegexFile::new("empty");
        let options = RenderOptions::default()
            .with_header(false)
            .with_lazy_type("once_cell::sync::Lazy");

        assert_eq!(
            file.render(&options),
            "use once_cell::sync::Lazy;\n\nuse regex::Regex;\n"
        );
    }
}
