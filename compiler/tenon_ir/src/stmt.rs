//! Statements.

use crate::{DeclId, ExprId, StmtId};

/// The structure of a statement.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StmtKind {
    /// The top-level statement sequence of a translation unit.
    Translation(Box<[StmtId]>),
    /// The members of a class body.
    Member(Box<[StmtId]>),
    /// `{ s... }`.
    Compound(Box<[StmtId]>),
    Empty,
    Return(ExprId),
    IfThen { cond: ExprId, then: StmtId },
    IfElse {
        cond: ExprId,
        then: StmtId,
        otherwise: StmtId,
    },
    While { cond: ExprId, body: StmtId },
    Break,
    Continue,
    Expression(ExprId),
    Declaration(DeclId),
}

impl StmtKind {
    /// Nested statements of a statement sequence.
    pub fn statements(&self) -> &[StmtId] {
        match self {
            StmtKind::Translation(ss) | StmtKind::Member(ss) | StmtKind::Compound(ss) => ss,
            _ => &[],
        }
    }
}
