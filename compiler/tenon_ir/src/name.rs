//! Names.

use crate::{DeclId, NameId, Symbol, Term, TypeId};

/// Overloadable operators that can be named by an operator-id.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum OperatorKind {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    BitAnd,
    BitOr,
    BitXor,
    BitNot,
    Lsh,
    Rsh,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    And,
    Or,
    Not,
    Assign,
    Call,
    Index,
}

impl OperatorKind {
    /// Source spelling of the operator.
    pub const fn spelling(self) -> &'static str {
        match self {
            OperatorKind::Add => "+",
            OperatorKind::Sub => "-",
            OperatorKind::Mul => "*",
            OperatorKind::Div => "/",
            OperatorKind::Rem => "%",
            OperatorKind::BitAnd => "&",
            OperatorKind::BitOr => "|",
            OperatorKind::BitXor => "^",
            OperatorKind::BitNot => "~",
            OperatorKind::Lsh => "<<",
            OperatorKind::Rsh => ">>",
            OperatorKind::Eq => "==",
            OperatorKind::Ne => "!=",
            OperatorKind::Lt => "<",
            OperatorKind::Gt => ">",
            OperatorKind::Le => "<=",
            OperatorKind::Ge => ">=",
            OperatorKind::And => "&&",
            OperatorKind::Or => "||",
            OperatorKind::Not => "!",
            OperatorKind::Assign => "=",
            OperatorKind::Call => "()",
            OperatorKind::Index => "[]",
        }
    }
}

/// A name as written in a declaration or an id-expression.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum NameKind {
    /// An identifier.
    Simple(Symbol),
    /// A compiler-generated name, unique within its context.
    Placeholder(u32),
    /// `operator+` and friends.
    Operator(OperatorKind),
    /// `~T`.
    Destructor(TypeId),
    /// A template applied to arguments; `template` is a template declaration.
    Template { template: DeclId, args: Box<[Term]> },
    /// A concept applied to arguments; `concept` is a concept declaration.
    Concept { concept: DeclId, args: Box<[Term]> },
    /// `scope::name`.
    Qualified { scope: DeclId, name: NameId },
    /// The name of the global namespace.
    Global,
}

impl NameKind {
    /// The identifier spelling, when this is a simple id.
    pub fn as_symbol(&self) -> Option<Symbol> {
        match self {
            NameKind::Simple(sym) => Some(*sym),
            _ => None,
        }
    }
}
