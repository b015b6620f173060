//! # `rxcompose` Regex Composer
//!
//! Build regular expressions out of small, testable fragments; then compile
//! them into named, validated, canonical patterns with enumerated capture groups.
//!
//! See:
//! * [`fragment`] to build and combine fragments.
//! * [`compiler`] to compile fragments into a [`Variable`].
//! * [`render`] to emit compiled variables as a Rust module.
//!
//! Fragments are plain regex source text, but every combinator wraps its
//! output in a non-capturing group; so composing fragments never changes
//! operator precedence. Raw regex text enters through [`fragment::to_fragment`],
//! and text which must match verbatim through [`fragment::literal`].
//!
//! Compiling parses the concatenated fragments with `regex-syntax`, fails on
//! invalid syntax, and keeps the simplified HIR together with its printed,
//! canonical form. Capture groups are listed in the order of their opening
//! parentheses, with `""` standing in for unnamed groups.
//!
//! ```rust
//! use rxcompose::{
//!     compile,
//!     fragment::{anchor, capture, literal, optional, DECIMAL_NUMBER},
//! };
//!
//! let version = compile(
//!     "Version",
//!     [anchor([
//!         capture("major", &DECIMAL_NUMBER),
//!         literal("."),
//!         capture("minor", &DECIMAL_NUMBER),
//!         optional([literal("."), capture("patch", &DECIMAL_NUMBER)]),
//!     ])],
//! )?;
//!
//! assert_eq!(version.capture_names(), ["major", "minor", "patch"]);
//!
//! # #[cfg(feature = "regex")]
//! # {
//! let re = version.to_regex()?;
//! let caps = re.captures("1.93").unwrap();
//! assert_eq!(&caps["minor"], "93");
//! assert!(caps.name("patch").is_none());
//! # }
//! # Ok::<(), rxcompose::ComposeError>(())
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

pub mod compiler;
pub mod errors;
pub mod fragment;
pub mod render;
pub mod variable;

#[doc(inline)]
pub use compiler::{CompileOptions, VariableCompiler, compile, must_compile};
#[doc(inline)]
pub use errors::{ComposeError, ComposeResult};
#[doc(inline)]
pub use fragment::Fragment;
#[doc(inline)]
pub use variable::Variable;
