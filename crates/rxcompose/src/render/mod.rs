//! # Rendering
//!
//! A [`RegexFile`] collects compiled [`Variable`](crate::Variable)s and renders
//! them as a Rust module: one lazily compiled regex static per variable, and
//! one group-index constant per named capture group.
//!
//! ```rust
//! use rxcompose::{
//!     compile,
//!     fragment::{capture, literal, WORD},
//!     render::{RegexFile, RenderOptions},
//! };
//!
//! let mut file = RegexFile::new("greetings");
//! file.add(compile("Greeting", [literal("Hello, "), capture("name", &WORD)])?);
//!
//! let source = file.render(&RenderOptions::default());
//! assert!(source.contains("pub const Greeting_name: usize = 1;"));
//! # Ok::<(), rxcompose::ComposeError>(())
//! ```

mod regex_file;
mod render_options;
mod rust_source;

#[doc(inline)]
pub use regex_file::RegexFile;
#[doc(inline)]
pub use render_options::RenderOptions;
#[doc(inline)]
pub use rust_source::*;
