use crate::error::internal_error;
use crate::parser::ast::ExpressionKind;
use crate::resolver::{Context, ExprId, IdentId, ScopeId};

impl Context {
    /// Find `name` starting from `scope`.
    ///
    /// We look in `scope` itself, then in the module scope of its file, then in the root.
    /// Scopes without a file (builtins) only see their own names. Not finding a name is not an
    /// error: the caller decides whether an undefined identifier matters.
    pub fn find_ident(&self, scope: ScopeId, name: &str) -> Option<IdentId> {
        if let Some(ident) = self.scope(scope).find(name) {
            tracing::trace!(name, ?scope, "found in scope");
            return Some(ident);
        }
        // Builtin classes have no filepath.
        let filepath = self.scope(scope).filepath()?;
        if let Some(module_scope) = self.filepath(filepath).module_scope() {
            if let Some(ident) = self.scope(module_scope).find(name) {
                tracing::trace!(name, ?module_scope, "found in module scope");
                return Some(ident);
            }
        }
        let ident = self.scope(self.root()).find(name);
        tracing::trace!(name, found = ident.is_some(), "escalated to the root scope");
        ident
    }

    /// Find the identifier named by a path expression such as `pkg.module.f`.
    ///
    /// Each segment is looked up in the sub-scope exposed by the previous one; only the first
    /// segment is looked up in `scope`. If that fails, the whole path is tried again from the
    /// root, so fully qualified paths work from anywhere.
    pub fn find_ident_from_path(&self, scope: ScopeId, path: ExprId) -> Option<IdentId> {
        if let Some(ident) = self.find_ident_in_path(scope, path) {
            return Some(ident);
        }
        tracing::trace!(?scope, "path not found, retrying from the root scope");
        self.find_ident_in_path(self.root(), path)
    }

    fn find_ident_in_path(&self, scope: ScopeId, path: ExprId) -> Option<IdentId> {
        let mut path = path;
        if let ExpressionKind::As { path: aliased, .. } = self.expression(path).kind() {
            path = *aliased;
        }
        match self.expression(path).kind() {
            ExpressionKind::Ident(name) => self.scope(scope).find(name),
            ExpressionKind::Dot { prefix, ident } => {
                let Some(name) = self.expression(*ident).name() else {
                    internal_error("The segment after a dot must be an identifier")
                };
                let owner = self.find_ident_in_path(scope, *prefix)?;
                let sub_scope = self.ident_sub_scope(owner)?;
                tracing::trace!(name, owner = %owner, ?sub_scope, "descending into path segment");
                self.scope(sub_scope).find(name)
            }
            ExpressionKind::As { .. } => internal_error("Nested `as` in a path expression"),
        }
    }
}
