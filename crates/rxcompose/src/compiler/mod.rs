//! # Variable Compilation
//!
//! Compiling turns a sequence of [`Fragment`](crate::fragment::Fragment)s into a
//! [`Variable`](crate::Variable):
//!
//! * the fragments are concatenated with [`sequence`](crate::fragment::sequence);
//! * the text is parsed by `regex-syntax`, which rejects invalid patterns;
//! * the parse is translated into a simplified HIR, which is printed back
//!   as the canonical pattern text;
//! * the HIR's capture groups are listed in opening-parenthesis order.
//!
//! [`compile`] uses the default [`CompileOptions`];
//! build a [`VariableCompiler`] to change them.

mod captures;
mod compile_options;
mod variable_compiler;

#[doc(inline)]
pub use captures::capture_names;
#[doc(inline)]
pub use compile_options::*;
#[doc(inline)]
pub use variable_compiler::*;
