use crate::error::internal_error;
use crate::resolver::{Context, ExprId, IdentId, Line};
use std::fmt::{Display, Formatter};

/// A node of a qualified-name expression.
#[derive(Debug, Clone)]
pub struct Expression {
    pub(crate) kind: ExpressionKind,
    pub(crate) line: Line,
    // The identifier this reference is tracked by, if any.
    pub(crate) ident: Option<IdentId>,
}

impl Expression {
    pub fn kind(&self) -> &ExpressionKind {
        &self.kind
    }

    pub fn line(&self) -> Line {
        self.line
    }

    /// The name carried by an identifier reference.
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            ExpressionKind::Ident(name) => Some(name),
            _ => None,
        }
    }

    pub fn bound_ident(&self) -> Option<IdentId> {
        self.ident
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionKind {
    /// A plain identifier reference.
    Ident(String),
    /// `prefix.ident`, where `ident` is always an identifier reference.
    Dot { prefix: ExprId, ident: ExprId },
    /// `path as alias`. The alias only names the destination binding.
    As { path: ExprId, alias: ExprId },
}

impl Context {
    pub fn ident_expression(&mut self, name: impl Into<String>, line: Line) -> ExprId {
        self.push_expression(ExpressionKind::Ident(name.into()), line)
    }

    pub fn dot_expression(&mut self, prefix: ExprId, ident: ExprId, line: Line) -> ExprId {
        if self.expression(ident).name().is_none() {
            internal_error("The segment after a dot must be an identifier");
        }
        self.push_expression(ExpressionKind::Dot { prefix, ident }, line)
    }

    pub fn as_expression(&mut self, path: ExprId, alias: ExprId, line: Line) -> ExprId {
        if self.expression(alias).name().is_none() {
            internal_error("An alias must be an identifier");
        }
        self.push_expression(ExpressionKind::As { path, alias }, line)
    }

    /// Render the flattened text of a path expression, e.g. `pkg.module.f as g`.
    pub fn display_expression(&self, expr: ExprId) -> ExpressionDisplay<'_> {
        ExpressionDisplay { ctx: self, expr }
    }
}

pub struct ExpressionDisplay<'a> {
    ctx: &'a Context,
    expr: ExprId,
}

impl Display for ExpressionDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.ctx.expression(self.expr).kind {
            ExpressionKind::Ident(name) => write!(f, "{name}"),
            ExpressionKind::Dot { prefix, ident } => write!(
                f,
                "{}.{}",
                self.ctx.display_expression(*prefix),
                self.ctx.display_expression(*ident)
            ),
            ExpressionKind::As { path, alias } => write!(
                f,
                "{} as {}",
                self.ctx.display_expression(*path),
                self.ctx.display_expression(*alias)
            ),
        }
    }
}
