use crate::error::{internal_error, ResolveError};
use crate::parser::ast::ExpressionKind;
use crate::resolver::{
    Context, ExprId, FunctionId, FunctionKind, IdentId, Line, ScopeId, VariableId,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum IdentKind {
    Function,
    Variable,
}

/// The entity an identifier denotes. Copies of an identifier share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentTarget {
    Function(FunctionId),
    Variable(VariableId),
}

/// A name binding.
#[derive(Debug, Clone)]
pub struct Identifier {
    pub(crate) name: String,
    pub(crate) target: IdentTarget,
    // `None` for operator identifiers, which never join a scope.
    pub(crate) scope: Option<ScopeId>,
    pub(crate) expressions: Vec<ExprId>,
}

impl Identifier {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> IdentKind {
        match self.target {
            IdentTarget::Function(_) => IdentKind::Function,
            IdentTarget::Variable(_) => IdentKind::Variable,
        }
    }

    pub fn target(&self) -> IdentTarget {
        self.target
    }

    pub fn scope(&self) -> Option<ScopeId> {
        self.scope
    }

    /// Identifier-reference expressions that must follow this identifier when it is renamed.
    pub fn expressions(&self) -> &[ExprId] {
        &self.expressions
    }
}

impl Context {
    /// Create an identifier and append it to `scope`'s index.
    ///
    /// Pass `None` as scope for operator identifiers: they skip the uniqueness check and are
    /// not indexed anywhere.
    pub fn create_ident(
        &mut self,
        scope: Option<ScopeId>,
        target: IdentTarget,
        name: impl Into<String>,
        line: Line,
    ) -> Result<IdentId, ResolveError> {
        let name = name.into();
        if let Some(scope) = scope {
            if self.scope(scope).contains(&name) {
                return Err(ResolveError::duplicate_identifier(name, line));
            }
        }
        let id = IdentId::new(self.idents.len());
        tracing::debug!(%name, ident = %id, ?scope, "creating identifier");
        self.idents.push(Identifier {
            name: name.clone(),
            target,
            scope,
            expressions: vec![],
        });
        if let Some(scope) = scope {
            self.scopes[scope.index()].append(name, id);
        }
        Ok(id)
    }

    /// Create an identifier naming `function`, registered on the function's identifier list.
    pub fn create_function_ident(
        &mut self,
        scope: Option<ScopeId>,
        function: FunctionId,
        name: impl Into<String>,
    ) -> Result<IdentId, ResolveError> {
        let line = self.function(function).line;
        let ident = self.create_ident(scope, IdentTarget::Function(function), name, line)?;
        self.functions[function.index()].idents.push(ident);
        Ok(ident)
    }

    /// Create an identifier naming `variable`, registered on the variable's identifier list.
    pub fn create_variable_ident(
        &mut self,
        scope: ScopeId,
        variable: VariableId,
        name: impl Into<String>,
    ) -> Result<IdentId, ResolveError> {
        let line = self.variable(variable).line;
        let ident = self.create_ident(Some(scope), IdentTarget::Variable(variable), name, line)?;
        self.variables[variable.index()].idents.push(ident);
        Ok(ident)
    }

    /// Rename `ident` and every identifier-reference expression bound to it.
    ///
    /// Fails without touching anything if the scope already holds another identifier called
    /// `new_name`.
    pub fn rename_ident(
        &mut self,
        ident: IdentId,
        new_name: impl Into<String>,
    ) -> Result<(), ResolveError> {
        let new_name = new_name.into();
        let old_name = self.ident(ident).name.clone();
        if old_name == new_name {
            return Ok(());
        }
        if let Some(scope) = self.ident(ident).scope {
            if self.scope(scope).contains(&new_name) {
                return Err(ResolveError::duplicate_identifier(
                    new_name,
                    self.ident_line(ident),
                ));
            }
            let scope = &mut self.scopes[scope.index()];
            scope.remove(&old_name);
            scope.append(new_name.clone(), ident);
        }
        tracing::debug!(%old_name, %new_name, ident = %ident, "renaming identifier");
        self.idents[ident.index()].name = new_name.clone();
        for expr in self.idents[ident.index()].expressions.clone() {
            match &mut self.expressions[expr.index()].kind {
                ExpressionKind::Ident(name) => *name = new_name.clone(),
                _ => internal_error("Identifiers can only be referenced by identifier expressions"),
            }
        }
        Ok(())
    }

    /// Track `expr`, an identifier reference, as a use of `ident`.
    pub fn bind_expression(&mut self, expr: ExprId, ident: IdentId) {
        if self.expression(expr).name().is_none() {
            internal_error("Only identifier expressions can be bound to an identifier");
        }
        let expression = &mut self.expressions[expr.index()];
        if let Some(previous) = expression.ident.replace(ident) {
            self.idents[previous.index()].expressions.retain(|e| *e != expr);
        }
        self.idents[ident.index()].expressions.push(expr);
    }

    /// Copy `ident` into `dest`. The copy denotes the same function or variable.
    ///
    /// Callers are expected to make sure `dest` has no identifier with the same name; if it
    /// does, this reports the duplicate like any other declaration would.
    pub fn copy_ident(&mut self, ident: IdentId, dest: ScopeId) -> Result<IdentId, ResolveError> {
        let name = self.ident(ident).name.clone();
        let target = self.ident(ident).target;
        tracing::debug!(%name, ident = %ident, ?dest, "copying identifier");
        // A copy has no declaration site of its own to report.
        let copy = self.create_ident(Some(dest), target, name, Line::UNKNOWN)?;
        match target {
            IdentTarget::Function(function) => self.functions[function.index()].idents.push(copy),
            IdentTarget::Variable(variable) => self.variables[variable.index()].idents.push(copy),
        }
        Ok(copy)
    }

    /// The scope exposed by the identifier's entity: a function body, if any.
    pub fn ident_sub_scope(&self, ident: IdentId) -> Option<ScopeId> {
        match self.ident(ident).target {
            IdentTarget::Function(function) => self.function(function).sub_scope,
            IdentTarget::Variable(_) => None,
        }
    }

    pub fn ident_line(&self, ident: IdentId) -> Line {
        match self.ident(ident).target {
            IdentTarget::Function(function) => self.function(function).line,
            IdentTarget::Variable(variable) => self.variable(variable).line,
        }
    }

    pub fn ident_is_module_or_package(&self, ident: IdentId) -> bool {
        match self.ident(ident).target {
            IdentTarget::Function(function) => matches!(
                self.function(function).kind,
                FunctionKind::Package | FunctionKind::Module
            ),
            IdentTarget::Variable(_) => false,
        }
    }
}
