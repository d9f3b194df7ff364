use crate::error::{internal_error, ResolveError};
use crate::resolver::{
    ClassId, Context, FunctionId, FunctionKind, IdentId, Line, ScopeId, ScopeKind, TclassId,
    VariableId,
};
use drop_bomb::DropBomb;
use std::path::PathBuf;

/// Binds declarations to names while walking nested declaration bodies.
///
/// The binder keeps track of the scope we are currently declaring into. Entering a body pushes
/// its scope; you get back a [`ScopeGuard`] that must be handed to [`Binder::exit_scope`].
pub struct Binder<'a> {
    ctx: &'a mut Context,
    current_scope: ScopeId,
    parent_scopes: Vec<ScopeId>,
}

impl<'a> Binder<'a> {
    /// Start declaring into the root scope.
    pub fn new(ctx: &'a mut Context) -> Self {
        let current_scope = ctx.root();
        Self {
            ctx,
            current_scope,
            parent_scopes: vec![],
        }
    }

    pub fn context(&self) -> &Context {
        &*self.ctx
    }

    pub fn context_mut(&mut self) -> &mut Context {
        &mut *self.ctx
    }

    pub fn current_scope(&self) -> ScopeId {
        self.current_scope
    }

    pub fn enter_scope(&mut self, scope: ScopeId) -> ScopeGuard {
        let enclosing_scope = std::mem::replace(&mut self.current_scope, scope);
        self.parent_scopes.push(enclosing_scope);
        ScopeGuard(DropBomb::new("You forgot to close a scope"))
    }

    /// Enter the body of `function`.
    pub fn enter_function(&mut self, function: FunctionId) -> ScopeGuard {
        match self.ctx.function(function).sub_scope() {
            Some(body) => self.enter_scope(body),
            None => internal_error("Tried to enter a function without a body"),
        }
    }

    pub fn enter_class(&mut self, class: ClassId) -> ScopeGuard {
        match self.ctx.class(class).sub_scope() {
            Some(body) => self.enter_scope(body),
            None => internal_error("Tried to enter a class without a body"),
        }
    }

    /// Close the current scope, returning it.
    pub fn exit_scope(&mut self, mut guard: ScopeGuard) -> ScopeId {
        guard.0.defuse();
        match self.parent_scopes.pop() {
            Some(parent_scope) => std::mem::replace(&mut self.current_scope, parent_scope),
            None => internal_error("Exited more scopes than were entered"),
        }
    }

    /// Declare a function with a body scope nested in the current scope.
    pub fn declare_function(
        &mut self,
        name: &str,
        kind: FunctionKind,
        line: Line,
    ) -> Result<FunctionId, ResolveError> {
        if kind == FunctionKind::Operator {
            return self.declare_operator(name, line).map(|(function, _)| function);
        }
        self.ensure_free(name, line)?;
        let function = self.ctx.create_function(name, kind, line);
        let filepath = self.ctx.scope(self.current_scope).filepath();
        self.ctx.create_scope(
            ScopeKind::FunctionBody(function),
            Some(self.current_scope),
            filepath,
        );
        self.ctx
            .create_function_ident(Some(self.current_scope), function, name)?;
        Ok(function)
    }

    /// Declare an operator. Its identifier does not join any scope.
    pub fn declare_operator(
        &mut self,
        name: &str,
        line: Line,
    ) -> Result<(FunctionId, IdentId), ResolveError> {
        let function = self.ctx.create_function(name, FunctionKind::Operator, line);
        let ident = self.ctx.create_function_ident(None, function, name)?;
        Ok((function, ident))
    }

    /// Declare a module backed by the source file at `path`.
    ///
    /// The module's body is the top-level scope of that file.
    pub fn declare_module(
        &mut self,
        name: &str,
        path: impl Into<PathBuf>,
        line: Line,
    ) -> Result<FunctionId, ResolveError> {
        self.ensure_free(name, line)?;
        let function = self.ctx.create_function(name, FunctionKind::Module, line);
        let filepath = self.ctx.create_filepath(path);
        let module_scope = self.ctx.create_scope(
            ScopeKind::FunctionBody(function),
            Some(self.current_scope),
            Some(filepath),
        );
        self.ctx.set_module_scope(filepath, module_scope);
        self.ctx
            .create_function_ident(Some(self.current_scope), function, name)?;
        Ok(function)
    }

    /// Declare a class template along with its constructor and a class instance.
    ///
    /// The constructor's identifier is what names the class body from the outside, so the
    /// constructor has no body of its own: its sub-scope is the class body.
    pub fn declare_class(
        &mut self,
        name: &str,
        line: Line,
    ) -> Result<(TclassId, ClassId), ResolveError> {
        self.ensure_free(name, line)?;
        let constructor = self.ctx.create_function(name, FunctionKind::Constructor, line);
        let tclass = self.ctx.create_tclass(name, constructor);
        let class = self.ctx.create_class(tclass);
        let filepath = self.ctx.scope(self.current_scope).filepath();
        let body = self.ctx.create_scope(
            ScopeKind::ClassBody(class),
            Some(self.current_scope),
            filepath,
        );
        self.ctx.set_function_sub_scope(constructor, body);
        self.ctx
            .create_function_ident(Some(self.current_scope), constructor, name)?;
        Ok((tclass, class))
    }

    pub fn declare_variable(&mut self, name: &str, line: Line) -> Result<VariableId, ResolveError> {
        self.ensure_free(name, line)?;
        let variable = self.ctx.create_variable(name, line);
        self.ctx
            .create_variable_ident(self.current_scope, variable, name)?;
        Ok(variable)
    }

    /// Create an anonymous statement block nested in the current scope.
    pub fn declare_block(&mut self) -> ScopeId {
        let filepath = self.ctx.scope(self.current_scope).filepath();
        self.ctx
            .create_scope(ScopeKind::StatementBlock, Some(self.current_scope), filepath)
    }

    // Checked before allocating the entity, so a rejected declaration leaves nothing behind.
    fn ensure_free(&self, name: &str, line: Line) -> Result<(), ResolveError> {
        if self.ctx.scope(self.current_scope).contains(name) {
            return Err(ResolveError::duplicate_identifier(name, line));
        }
        Ok(())
    }
}

/// `ScopeGuard` ensures, at runtime, that we never leave a scope unclosed.
/// The binder's callers have no way to defuse the drop bomb (the field is private outside of
/// this module) - they are forced to call [`Binder::exit_scope`], which gives us
/// a chance to restore the enclosing scope.
#[must_use = "Nested scopes must be closed!"]
pub struct ScopeGuard(DropBomb);
