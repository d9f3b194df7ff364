use crate::error::internal_error;
use crate::resolver::{Context, ExprId, IdentId, ScopeKind};

impl Context {
    /// Find the identifier naming the scope that `ident` lives in.
    ///
    /// It is the identifier of the scope's owner that lives one level further out. Identifiers
    /// with no enclosing scope (e.g. declared directly in the root) have no owner.
    pub fn find_owning_ident(&self, ident: IdentId) -> Option<IdentId> {
        let scope = self.ident(ident).scope()?;
        let owning_scope = self.scope(scope).owning_scope()?;
        let owner = match self.scope(scope).kind() {
            ScopeKind::FunctionBody(function) => function,
            ScopeKind::StatementBlock => internal_error("Statement blocks do not have identifiers"),
            ScopeKind::ClassBody(class) => self.tclass(self.class(class).tclass()).constructor(),
        };
        // The owner's identifiers carry the current name; the entity keeps its declared one.
        self.function(owner)
            .idents()
            .iter()
            .copied()
            .find(|&candidate| self.ident(candidate).scope() == Some(owning_scope))
    }

    /// Build the fully qualified path expression naming `ident`, e.g. `pkg.module.f`.
    pub fn create_ident_path_expression(&mut self, ident: IdentId) -> ExprId {
        let line = self.ident_line(ident);
        let name = self.ident(ident).name().to_owned();
        let ident_expr = self.ident_expression(name, line);
        match self.find_owning_ident(ident) {
            None => ident_expr,
            Some(owner) => {
                let prefix = self.create_ident_path_expression(owner);
                self.dot_expression(prefix, ident_expr, line)
            }
        }
    }
}
