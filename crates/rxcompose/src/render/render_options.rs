//! Render Options

/// Options for rendering a [`RegexFile`](crate::render::RegexFile) as Rust source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Visibility of the generated items; `""` for private.
    pub visibility: String,

    /// Path of the regex type; it must have a `new(&str) -> Result<Self, _>` constructor.
    pub regex_type: String,

    /// Path of the lazy cell type; it must have a `new(fn() -> T)` constructor.
    pub lazy_type: String,

    /// Emit the module doc comment and the lint allowance.
    pub header: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            visibility: "pub".to_string(),
            regex_type: "regex::Regex".to_string(),
            lazy_type: "std::sync::LazyLock".to_string(),
            header: true,
        }
    }
}

impl RenderOptions {
    /// Set the item visibility and return the options.
    pub fn with_visibility(
        mut self,
        visibility: &str,
    ) -> Self {
        self.visibility = visibility.to_string();
        self
    }

    /// Set the regex type path and return the options.
    pub fn with_regex_type(
        mut self,
        regex_type: &str,
    ) -> Self {
        self.regex_type = regex_type.to_string();
        self
    }

    /// Set the lazy cell type path and return the options.
    pub fn with_lazy_type(
        mut self,
        lazy_type: &str,
    ) -> Self {
        self.lazy_type = lazy_type.to_string();
        self
    }

    /// Set whether to emit the header and return the options.
    pub fn with_header(
        mut self,
        header: bool,
    ) -> Self {
        self.header = header;
        self
    }

    /// The visibility with a trailing space, or `""` for private items.
    pub(crate) fn item_prefix(&self) -> String {
        match self.visibility.trim() {
            "" => String::new(),
            vis => format!("{vis} "),
        }
    }

    /// The unqualified regex type name.
    pub(crate) fn regex_name(&self) -> &str {
        last_segment(&self.regex_type)
    }

    /// The unqualified lazy cell type name.
    pub(crate) fn lazy_name(&self) -> &str {
        last_segment(&self.lazy_type)
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}
