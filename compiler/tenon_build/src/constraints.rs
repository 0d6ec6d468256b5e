//! Logical constraints.
//!
//! Constraints are the normalized form of requires-clauses and concept
//! bodies. They are interned: equivalent requests share one [`ConsId`], so
//! subsumption checks can compare atoms by handle.

use tenon_ir::{ConsId, ConsKind, DeclId, ExprId, Term, TypeId};

use crate::Context;

impl Context {
    /// The atomic check `concept<args...>`.
    pub fn get_concept_constraint(&mut self, concept: DeclId, args: Vec<Term>) -> ConsId {
        self.intern_cons(ConsKind::Concept {
            concept,
            args: args.into_boxed_slice(),
        })
    }

    /// A boolean expression that must evaluate to `true`.
    pub fn get_predicate_constraint(&mut self, expr: ExprId) -> ConsId {
        self.intern_cons(ConsKind::Predicate(expr))
    }

    /// `expr` must be valid with exactly type `ty`.
    pub fn get_expression_constraint(&mut self, expr: ExprId, ty: TypeId) -> ConsId {
        self.intern_cons(ConsKind::Expression { expr, ty })
    }

    /// `expr` must be valid and convertible to `ty`.
    pub fn get_conversion_constraint(&mut self, expr: ExprId, ty: TypeId) -> ConsId {
        self.intern_cons(ConsKind::Conversion { expr, ty })
    }

    /// `cons` under the local parameters `parms` of a requires-expression.
    pub fn get_parameterized_constraint(&mut self, parms: Vec<DeclId>, cons: ConsId) -> ConsId {
        self.intern_cons(ConsKind::Parameterized {
            parms: parms.into_boxed_slice(),
            cons,
        })
    }

    pub fn get_conjunction_constraint(&mut self, lhs: ConsId, rhs: ConsId) -> ConsId {
        self.intern_cons(ConsKind::Conjunction(lhs, rhs))
    }

    pub fn get_disjunction_constraint(&mut self, lhs: ConsId, rhs: ConsId) -> ConsId {
        self.intern_cons(ConsKind::Disjunction(lhs, rhs))
    }
}
