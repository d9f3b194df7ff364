use crate::error::internal_error;
use crate::parser::ast::{Expression, ExpressionKind};
use crate::resolver::{
    Class, ClassId, Datatype, ExprId, Filepath, FilepathId, Function, FunctionId, FunctionKind,
    IdentId, Identifier, Line, Scope, ScopeId, ScopeKind, Tclass, TclassId, Variable, VariableId,
};
use std::path::PathBuf;

/// All the state of one compilation run.
///
/// Entities live in arenas and refer to each other through handles, so structural edits
/// (rename, copy) never leave a dangling reference behind. The root scope, home of builtin and
/// global bindings, is created here and lives as long as the context.
#[derive(Debug, Clone)]
pub struct Context {
    pub(crate) scopes: Vec<Scope>,
    pub(crate) idents: Vec<Identifier>,
    pub(crate) functions: Vec<Function>,
    pub(crate) variables: Vec<Variable>,
    pub(crate) classes: Vec<Class>,
    pub(crate) tclasses: Vec<Tclass>,
    pub(crate) filepaths: Vec<Filepath>,
    pub(crate) expressions: Vec<Expression>,
    root: ScopeId,
}

impl Context {
    pub fn new() -> Self {
        let mut ctx = Self {
            scopes: vec![],
            idents: vec![],
            functions: vec![],
            variables: vec![],
            classes: vec![],
            tclasses: vec![],
            filepaths: vec![],
            expressions: vec![],
            root: ScopeId::new(0),
        };
        let root_function = ctx.create_function("root", FunctionKind::Package, Line::UNKNOWN);
        ctx.root = ctx.create_scope(ScopeKind::FunctionBody(root_function), None, None);
        ctx
    }

    /// The global scope.
    pub fn root(&self) -> ScopeId {
        self.root
    }

    pub fn create_function(
        &mut self,
        name: impl Into<String>,
        kind: FunctionKind,
        line: Line,
    ) -> FunctionId {
        let id = FunctionId::new(self.functions.len());
        self.functions.push(Function {
            name: name.into(),
            kind,
            line,
            sub_scope: None,
            tclass: None,
            idents: vec![],
        });
        id
    }

    pub fn create_variable(&mut self, name: impl Into<String>, line: Line) -> VariableId {
        let id = VariableId::new(self.variables.len());
        self.variables.push(Variable {
            name: name.into(),
            line,
            datatype: None,
            idents: vec![],
        });
        id
    }

    /// Create the template built by `constructor`, which must be a constructor function.
    pub fn create_tclass(&mut self, name: impl Into<String>, constructor: FunctionId) -> TclassId {
        if self.function(constructor).kind != FunctionKind::Constructor {
            internal_error("A class template must be built by a constructor");
        }
        let id = TclassId::new(self.tclasses.len());
        self.tclasses.push(Tclass {
            name: name.into(),
            constructor,
        });
        self.functions[constructor.index()].tclass = Some(id);
        id
    }

    pub fn create_class(&mut self, tclass: TclassId) -> ClassId {
        let id = ClassId::new(self.classes.len());
        self.classes.push(Class {
            tclass,
            sub_scope: None,
        });
        id
    }

    pub fn create_filepath(&mut self, path: impl Into<PathBuf>) -> FilepathId {
        let id = FilepathId::new(self.filepaths.len());
        self.filepaths.push(Filepath {
            path: path.into(),
            module_scope: None,
        });
        id
    }

    pub fn set_module_scope(&mut self, filepath: FilepathId, scope: ScopeId) {
        self.filepaths[filepath.index()].module_scope = Some(scope);
    }

    /// Create a scope nested in `owning_scope`.
    ///
    /// A function or class body becomes the sub-scope of its owner.
    pub fn create_scope(
        &mut self,
        kind: ScopeKind,
        owning_scope: Option<ScopeId>,
        filepath: Option<FilepathId>,
    ) -> ScopeId {
        let id = ScopeId::new(self.scopes.len());
        self.scopes.push(Scope::new(kind, owning_scope, filepath));
        match kind {
            ScopeKind::FunctionBody(function) => {
                self.functions[function.index()].sub_scope = Some(id);
            }
            ScopeKind::ClassBody(class) => {
                self.classes[class.index()].sub_scope = Some(id);
            }
            ScopeKind::StatementBlock => {}
        }
        id
    }

    /// Make `scope` the body `function` exposes. Used by constructors, whose body is the class
    /// body they build.
    pub(crate) fn set_function_sub_scope(&mut self, function: FunctionId, scope: ScopeId) {
        self.functions[function.index()].sub_scope = Some(scope);
    }

    /// Publish the type inferred for a variable.
    pub fn set_variable_datatype(&mut self, variable: VariableId, datatype: Datatype) {
        self.variables[variable.index()].datatype = Some(datatype);
    }

    pub(crate) fn push_expression(&mut self, kind: ExpressionKind, line: Line) -> ExprId {
        let id = ExprId::new(self.expressions.len());
        self.expressions.push(Expression {
            kind,
            line,
            ident: None,
        });
        id
    }

    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.index()]
    }

    pub fn ident(&self, id: IdentId) -> &Identifier {
        &self.idents[id.index()]
    }

    pub fn function(&self, id: FunctionId) -> &Function {
        &self.functions[id.index()]
    }

    pub fn variable(&self, id: VariableId) -> &Variable {
        &self.variables[id.index()]
    }

    pub fn class(&self, id: ClassId) -> &Class {
        &self.classes[id.index()]
    }

    pub fn tclass(&self, id: TclassId) -> &Tclass {
        &self.tclasses[id.index()]
    }

    pub fn filepath(&self, id: FilepathId) -> &Filepath {
        &self.filepaths[id.index()]
    }

    pub fn expression(&self, id: ExprId) -> &Expression {
        &self.expressions[id.index()]
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
