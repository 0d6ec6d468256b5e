//! Logical constraints.
//!
//! Constraints are interned by `tenon_build`. Expression operands are
//! compared structurally there, so `ConsKind` deliberately does not derive
//! `Eq`/`Hash`: handle equality of the `ExprId`s is not the equivalence that
//! interning uses.

use crate::{ConsId, DeclId, ExprId, Term, TypeId};

#[derive(Clone, Debug)]
pub enum ConsKind {
    /// A concept applied to arguments.
    Concept { concept: DeclId, args: Box<[Term]> },
    /// A boolean expression that must hold.
    Predicate(ExprId),
    /// `expr` is valid with type `ty`.
    Expression { expr: ExprId, ty: TypeId },
    /// `expr` converts to `ty`.
    Conversion { expr: ExprId, ty: TypeId },
    /// A constraint under local parameters.
    Parameterized { parms: Box<[DeclId]>, cons: ConsId },
    Conjunction(ConsId, ConsId),
    Disjunction(ConsId, ConsId),
}

impl ConsKind {
    /// Returns `true` for conjunctions and disjunctions.
    pub const fn is_connective(&self) -> bool {
        matches!(self, ConsKind::Conjunction(..) | ConsKind::Disjunction(..))
    }
}
