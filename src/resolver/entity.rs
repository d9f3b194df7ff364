//! Entities that identifiers denote.
//!
//! Only the shape name resolution needs is modelled here: names, lines, sub-scopes and the list
//! of identifiers naming each entity.

use crate::resolver::{ClassId, FunctionId, IdentId, Line, ScopeId, TclassId};
use std::path::{Path, PathBuf};

/// The role a function plays.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
pub enum FunctionKind {
    #[strum(serialize = "function")]
    Plain,
    #[strum(serialize = "constructor")]
    Constructor,
    #[strum(serialize = "destructor")]
    Destructor,
    #[strum(serialize = "iterator")]
    Iterator,
    #[strum(serialize = "struct")]
    Struct,
    #[strum(serialize = "enum")]
    Enum,
    #[strum(serialize = "generator")]
    Generator,
    #[strum(serialize = "operator")]
    Operator,
    #[strum(serialize = "package")]
    Package,
    #[strum(serialize = "module")]
    Module,
    #[strum(serialize = "unittest")]
    UnitTest,
    #[strum(serialize = "final")]
    Final,
}

#[derive(Debug, Clone)]
pub struct Function {
    pub(crate) name: String,
    pub(crate) kind: FunctionKind,
    pub(crate) line: Line,
    pub(crate) sub_scope: Option<ScopeId>,
    // Set on constructors: the template they build.
    pub(crate) tclass: Option<TclassId>,
    pub(crate) idents: Vec<IdentId>,
}

impl Function {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FunctionKind {
        self.kind
    }

    pub fn line(&self) -> Line {
        self.line
    }

    /// The body scope, if the function has one.
    pub fn sub_scope(&self) -> Option<ScopeId> {
        self.sub_scope
    }

    pub fn tclass(&self) -> Option<TclassId> {
        self.tclass
    }

    /// Every identifier naming this function, across all scopes.
    pub fn idents(&self) -> &[IdentId] {
        &self.idents
    }
}

#[derive(Debug, Clone)]
pub struct Variable {
    pub(crate) name: String,
    pub(crate) line: Line,
    pub(crate) datatype: Option<Datatype>,
    pub(crate) idents: Vec<IdentId>,
}

impl Variable {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn line(&self) -> Line {
        self.line
    }

    /// `None` until type inference has assigned a type.
    pub fn datatype(&self) -> Option<&Datatype> {
        self.datatype.as_ref()
    }

    pub fn idents(&self) -> &[IdentId] {
        &self.idents
    }
}

/// A generic class template.
#[derive(Debug, Clone)]
pub struct Tclass {
    pub(crate) name: String,
    pub(crate) constructor: FunctionId,
}

impl Tclass {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn constructor(&self) -> FunctionId {
        self.constructor
    }
}

/// A class instantiated from a template.
#[derive(Debug, Clone)]
pub struct Class {
    pub(crate) tclass: TclassId,
    pub(crate) sub_scope: Option<ScopeId>,
}

impl Class {
    pub fn tclass(&self) -> TclassId {
        self.tclass
    }

    pub fn sub_scope(&self) -> Option<ScopeId> {
        self.sub_scope
    }
}

#[derive(Debug, Clone)]
pub struct Filepath {
    pub(crate) path: PathBuf,
    pub(crate) module_scope: Option<ScopeId>,
}

impl Filepath {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The top-level scope of the file.
    pub fn module_scope(&self) -> Option<ScopeId> {
        self.module_scope
    }
}

/// The semantic type denoted by an identifier.
///
/// Type inference owns the concrete representation of other types; these are the ones an
/// identifier can project to on its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Datatype {
    /// The callable signature of a function.
    Function(FunctionId),
    /// The class type of an enum.
    EnumClass(FunctionId),
    Tclass(TclassId),
    Class(ClassId),
}
