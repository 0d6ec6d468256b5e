//! Definitions.

use crate::{DeclId, ExprId, ReqId, StmtId};

/// The body attached to a declaration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DefKind {
    /// No definition yet. Shared sentinel.
    Empty,
    /// `= delete`. Shared sentinel.
    Deleted,
    /// `= default`. Shared sentinel.
    Defaulted,
    /// `= e`.
    Expression(ExprId),
    /// A function body.
    Function(StmtId),
    /// A type body given as a statement.
    Type(StmtId),
    /// A class body given as member declarations.
    Class(Box<[DeclId]>),
    /// A concept body given as requirements.
    Concept(Box<[ReqId]>),
}
