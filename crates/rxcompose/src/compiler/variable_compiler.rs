//! Variable Compiler

use core::borrow::Borrow;

use crate::{
    compiler::{CompileOptions, capture_names},
    errors::{ComposeError, ComposeResult},
    fragment::{Fragment, sequence},
    variable::Variable,
};

/// Compiles fragments into named, validated [`Variable`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableCompiler {
    options: CompileOptions,
}

impl VariableCompiler {
    /// Create a new compiler.
    ///
    /// ## Arguments
    /// * `options` - the parser options.
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    /// Get the compiler's options.
    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Compile the sequence of `fragments` into a variable called `name`.
    ///
    /// The fragments are concatenated with [`sequence`], parsed, and simplified;
    /// the variable holds the simplified tree, its printed canonical text,
    /// and the names of its capture groups.
    ///
    /// ## Arguments
    /// * `name` - the variable name.
    /// * `fragments` - the fragments, in match order.
    ///
    /// ## Returns
    /// The compiled [`Variable`], or [`ComposeError::PatternSyntax`]
    /// carrying the full pattern text and the parser's diagnostic.
    pub fn compile<I, F>(
        &self,
        name: &str,
        fragments: I,
    ) -> ComposeResult<Variable>
    where
        I: IntoIterator<Item = F>,
        F: Borrow<Fragment>,
    {
        let pattern = sequence(fragments).into_string();
        log::trace!("parsing {name}: {pattern:?}");

        let hir = match self.options.parser().parse(&pattern) {
            Ok(hir) => hir,
            Err(source) => {
                log::debug!("rejected {name}: {source}");
                return Err(ComposeError::PatternSyntax { pattern, source });
            }
        };

        let names = capture_names(&hir);
        let variable = Variable::new(name, hir, names);
        log::debug!(
            "compiled {name} with {} capture groups: {:?}",
            variable.max_cap(),
            variable.pattern()
        );

        Ok(variable)
    }

    /// Like [`compile`](Self::compile), for tooling where a bad pattern is a programming error.
    ///
    /// # Panics
    /// If the fragments do not form a valid pattern.
    pub fn must_compile<I, F>(
        &self,
        name: &str,
        fragments: I,
    ) -> Variable
    where
        I: IntoIterator<Item = F>,
        F: Borrow<Fragment>,
    {
        match self.compile(name, fragments) {
            Ok(variable) => variable,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Compile `fragments` into a variable called `name` with default options.
///
/// See [`VariableCompiler::compile`].
///
/// ```rust
/// use rxcompose::{compile, fragment::{capture, literal, WORD}};
///
/// let greeting = compile("Greeting", [literal("Hello, "), capture("name", &WORD)])?;
/// assert_eq!(greeting.capture_names(), ["name"]);
/// # Ok::<(), rxcompose::ComposeError>(())
/// ```
pub fn compile<I, F>(
    name: &str,
    fragments: I,
) -> ComposeResult<Variable>
where
    I: IntoIterator<Item = F>,
    F: Borrow<Fragment>,
{
    VariableCompiler::default().compile(name, fragments)
}

/// Compile `fragments` into a variable called `name` with default options.
///
/// # Panics
/// If the fragments do not form a valid pattern.
pub fn must_compile<I, F>(
    name: &str,
    fragments: I,
) -> Variable
where
    I: IntoIterator<Item = F>,
    F: Borrow<Fragment>,
{
    VariableCompiler::default().must_compile(name, fragments)
}
