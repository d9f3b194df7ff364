mod binder;
mod context;
mod datatype;
mod dump;
mod entity;
mod ident;
mod path;
mod resolver;
mod scope;

use std::fmt::Formatter;

/// Declares an arena handle: a `Copy` index into one of the [`Context`] arenas.
macro_rules! arena_handle {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
            pub struct $name(u32);

            impl $name {
                pub(crate) fn new(index: usize) -> Self {
                    match u32::try_from(index) {
                        Ok(index) => Self(index),
                        Err(_) => crate::error::internal_error("arena overflowed u32 handles"),
                    }
                }

                pub fn index(self) -> usize {
                    self.0 as usize
                }
            }

            impl std::fmt::Display for $name {
                fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{:x}", self.0)
                }
            }
        )*
    };
}

arena_handle!(
    /// A lexical scope (a "block").
    ScopeId,
    /// A name binding inside a scope.
    IdentId,
    FunctionId,
    VariableId,
    /// A class instance; owns a class-body scope.
    ClassId,
    /// A generic class template, built by its constructor function.
    TclassId,
    FilepathId,
    ExprId,
);

/// Source line of a declaration or expression. Line `0` means "unknown".
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Line(pub u32);

impl Line {
    pub const UNKNOWN: Line = Line(0);
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}", self.0)
    }
}

pub use binder::{Binder, ScopeGuard};
pub use context::Context;
pub use entity::{Class, Datatype, Filepath, Function, FunctionKind, Tclass, Variable};
pub use ident::{IdentKind, IdentTarget, Identifier};
pub use scope::{Scope, ScopeKind};
