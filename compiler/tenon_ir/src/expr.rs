//! Expressions.
//!
//! An expression's type is stored alongside its kind in the arena (see
//! [`TermArena::expr_type`](crate::TermArena::expr_type)).

use crate::{DeclId, ExprId, NameId, ReqId, Term};

/// Binary operators.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BinaryOp {
    And,
    Or,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    BitAnd,
    BitOr,
    BitXor,
    Lsh,
    Rsh,
}

impl BinaryOp {
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOp::Eq | BinaryOp::Ne | BinaryOp::Lt | BinaryOp::Gt | BinaryOp::Le | BinaryOp::Ge
        )
    }

    pub const fn is_logical(self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or)
    }
}

/// Unary operators.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum UnaryOp {
    Not,
    Neg,
    Pos,
    BitNot,
}

/// The structure of an expression.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ExprKind {
    Boolean(bool),
    Integer(i64),
    /// A reference to a variable or parameter.
    Object { name: NameId, decl: DeclId },
    /// A reference to a function.
    Function { name: NameId, decl: DeclId },
    /// `e.f` where `f` is a field.
    Field { object: ExprId, name: NameId, decl: DeclId },
    /// `e.m` where `m` is a method.
    Method { object: ExprId, name: NameId, decl: DeclId },
    /// A concept applied to template arguments.
    Check { concept: DeclId, args: Box<[Term]> },
    Unary { op: UnaryOp, operand: ExprId },
    Binary { op: BinaryOp, lhs: ExprId, rhs: ExprId },
    Call { callee: ExprId, args: Box<[ExprId]> },
    Requires {
        tparms: Box<[DeclId]>,
        parms: Box<[DeclId]>,
        reqs: Box<[ReqId]>,
    },
    /// An expression standing for a declaration during constraint checking.
    Synthetic(DeclId),

    // Initializers
    /// Default initialization.
    TrivialInit,
    /// `= e`.
    CopyInit(ExprId),
    /// Reference binding.
    BindInit(ExprId),
    /// `T(args...)`, calling the constructor `ctor`.
    DirectInit { ctor: DeclId, args: Box<[ExprId]> },
    /// `{args...}`.
    AggregateInit(Box<[ExprId]>),
}

impl ExprKind {
    /// The declaration an id-expression or member access refers to.
    pub fn referenced_decl(&self) -> Option<DeclId> {
        match self {
            ExprKind::Object { decl, .. }
            | ExprKind::Function { decl, .. }
            | ExprKind::Field { decl, .. }
            | ExprKind::Method { decl, .. }
            | ExprKind::Synthetic(decl) => Some(*decl),
            _ => None,
        }
    }

    pub const fn is_initializer(&self) -> bool {
        matches!(
            self,
            ExprKind::TrivialInit
                | ExprKind::CopyInit(_)
                | ExprKind::BindInit(_)
                | ExprKind::DirectInit { .. }
                | ExprKind::AggregateInit(_)
        )
    }
}
