//! Identifier binding and name resolution for a compiler's semantic analysis.
//!
//! A [`Context`] owns every scope and identifier of a compilation run. Declarations bind names
//! into scopes (see [`Binder`]), references are resolved either by simple name
//! ([`Context::find_ident`]) or by qualified path ([`Context::find_ident_from_path`]).
mod error;
mod parser;
mod resolver;
mod scanner;

pub use error::ResolveError;
pub use parser::ast::{Expression, ExpressionDisplay, ExpressionKind};
pub use parser::{parse_path, ParseError};
pub use resolver::*;
