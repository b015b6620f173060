//! Regex File

use crate::{
    Variable,
    render::{FileSource, RenderOptions},
};

/// An ordered collection of [`Variable`]s rendered together as one module.
///
/// This is plain aggregation: nothing is validated, and duplicate
/// names are allowed (lookups return the first).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegexFile {
    module: String,
    variables: Vec<Variable>,
}

impl RegexFile {
    /// Create an empty file for `module`.
    pub fn new(module: &str) -> Self {
        Self::with_variables(module, Vec::new())
    }

    /// Create a file for `module` holding `variables`, in order.
    pub fn with_variables<I>(
        module: &str,
        variables: I,
    ) -> Self
    where
        I: IntoIterator<Item = Variable>,
    {
        Self {
            module: module.to_string(),
            variables: variables.into_iter().collect(),
        }
    }

    /// The module name.
    pub fn module(&self) -> &str {
        &self.module
    }

    /// The conventional file name for the module: `{module}.rs`.
    pub fn file_name(&self) -> String {
        format!("{}.rs", self.module)
    }

    /// The variables, in insertion order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// The number of variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Are there no variables?
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Append a variable.
    pub fn add(
        &mut self,
        variable: Variable,
    ) {
        self.variables.push(variable);
    }

    /// Find the first variable called `name`.
    pub fn get(
        &self,
        name: &str,
    ) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name() == name)
    }

    /// A [`Display`](core::fmt::Display) adapter rendering the file as Rust source.
    pub fn source<'a>(
        &'a self,
        options: &'a RenderOptions,
    ) -> FileSource<'a> {
        FileSource::new(self, options)
    }

    /// Render the file as Rust source.
    pub fn render(
        &self,
        options: &RenderOptions,
    ) -> String {
        self.source(options).to_string()
    }
}

impl Extend<Variable> for RegexFile {
    fn extend<T: IntoIterator<Item = Variable>>(
        &mut self,
        iter: T,
    ) {
        self.variables.extend(iter);
    }
}
