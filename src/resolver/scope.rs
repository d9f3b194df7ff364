use crate::resolver::{ClassId, FilepathId, FunctionId, IdentId, ScopeId};
use indexmap::IndexMap;

/// What a scope is the body of.
///
/// Function and class bodies carry their owner: that is how we recover the name that addresses
/// a scope from the outside. Statement blocks are anonymous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    FunctionBody(FunctionId),
    StatementBlock,
    ClassBody(ClassId),
}

/// A lexical container with a name index.
///
/// The index remembers insertion order: iterating a scope yields identifiers in the order they
/// were declared (a renamed identifier moves to the end).
#[derive(Debug, Clone)]
pub struct Scope {
    pub(crate) kind: ScopeKind,
    pub(crate) owning_scope: Option<ScopeId>,
    pub(crate) filepath: Option<FilepathId>,
    idents: IndexMap<String, IdentId>,
}

impl Scope {
    pub(crate) fn new(
        kind: ScopeKind,
        owning_scope: Option<ScopeId>,
        filepath: Option<FilepathId>,
    ) -> Self {
        Self {
            kind,
            owning_scope,
            filepath,
            idents: IndexMap::new(),
        }
    }

    pub fn kind(&self) -> ScopeKind {
        self.kind
    }

    /// The scope this one is nested in. `None` for the root and other top-level scopes.
    pub fn owning_scope(&self) -> Option<ScopeId> {
        self.owning_scope
    }

    /// The source file this scope belongs to. Builtin scopes have none.
    pub fn filepath(&self) -> Option<FilepathId> {
        self.filepath
    }

    /// Look `name` up in this scope only, without any escalation.
    pub fn find(&self, name: &str) -> Option<IdentId> {
        self.idents.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.idents.contains_key(name)
    }

    pub fn idents(&self) -> impl Iterator<Item = IdentId> + '_ {
        self.idents.values().copied()
    }

    pub fn len(&self) -> usize {
        self.idents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.idents.is_empty()
    }

    /// Callers check for duplicates first.
    pub(crate) fn append(&mut self, name: String, ident: IdentId) {
        let previous = self.idents.insert(name, ident);
        debug_assert!(previous.is_none());
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<IdentId> {
        self.idents.shift_remove(name)
    }
}
