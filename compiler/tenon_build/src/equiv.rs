//! Structural hashing and equivalence of non-canonical terms.
//!
//! Constraints mention expressions and names, which the arena allocates
//! afresh for every occurrence. Interning a constraint therefore needs an
//! equivalence that looks through handles:
//!
//! - expressions are equivalent when their kinds, types and operands are;
//! - names are equivalent when they spell the same thing;
//! - declarations are compared by identity;
//! - types and constraints are canonical, so handle equality suffices.
//!
//! [`hash_cons`] must agree with [`cons_equivalent`]: equivalent constraints
//! hash equally. Anything ignored by equivalence (such as the spelled name
//! of an id-expression, which is implied by its declaration) is also left
//! out of the hash.

use std::hash::{Hash, Hasher};
use std::mem;

use rustc_hash::FxHasher;
use tenon_ir::{ConsKind, ExprId, ExprKind, NameId, NameKind, ReqId, ReqKind, Term, TermArena};

/// Structural hash of a constraint.
pub(crate) fn hash_cons(arena: &TermArena, kind: &ConsKind) -> u64 {
    let mut hasher = StructuralHasher {
        arena,
        state: FxHasher::default(),
    };
    hasher.cons(kind);
    hasher.state.finish()
}

/// Structural equivalence of two constraints.
pub(crate) fn cons_equivalent(arena: &TermArena, a: &ConsKind, b: &ConsKind) -> bool {
    let eq = Equivalence { arena };
    match (a, b) {
        (
            ConsKind::Concept {
                concept: c1,
                args: a1,
            },
            ConsKind::Concept {
                concept: c2,
                args: a2,
            },
        ) => c1 == c2 && eq.term_lists(a1, a2),
        (ConsKind::Predicate(e1), ConsKind::Predicate(e2)) => eq.exprs(*e1, *e2),
        (
            ConsKind::Expression { expr: e1, ty: t1 },
            ConsKind::Expression { expr: e2, ty: t2 },
        )
        | (
            ConsKind::Conversion { expr: e1, ty: t1 },
            ConsKind::Conversion { expr: e2, ty: t2 },
        ) => t1 == t2 && eq.exprs(*e1, *e2),
        (
            ConsKind::Parameterized {
                parms: p1,
                cons: c1,
            },
            ConsKind::Parameterized {
                parms: p2,
                cons: c2,
            },
        ) => p1 == p2 && c1 == c2,
        (ConsKind::Conjunction(l1, r1), ConsKind::Conjunction(l2, r2))
        | (ConsKind::Disjunction(l1, r1), ConsKind::Disjunction(l2, r2)) => l1 == l2 && r1 == r2,
        _ => false,
    }
}

/// Structural equivalence of two expressions.
pub(crate) fn exprs_equivalent(arena: &TermArena, a: ExprId, b: ExprId) -> bool {
    Equivalence { arena }.exprs(a, b)
}

struct StructuralHasher<'a> {
    arena: &'a TermArena,
    state: FxHasher,
}

impl StructuralHasher<'_> {
    fn cons(&mut self, kind: &ConsKind) {
        mem::discriminant(kind).hash(&mut self.state);
        match kind {
            ConsKind::Concept { concept, args } => {
                concept.hash(&mut self.state);
                self.terms(args);
            }
            ConsKind::Predicate(e) => self.expr(*e),
            ConsKind::Expression { expr, ty } | ConsKind::Conversion { expr, ty } => {
                self.expr(*expr);
                ty.hash(&mut self.state);
            }
            ConsKind::Parameterized { parms, cons } => {
                parms.hash(&mut self.state);
                cons.hash(&mut self.state);
            }
            ConsKind::Conjunction(l, r) | ConsKind::Disjunction(l, r) => {
                l.hash(&mut self.state);
                r.hash(&mut self.state);
            }
        }
    }

    fn terms(&mut self, terms: &[Term]) {
        terms.len().hash(&mut self.state);
        for term in terms {
            self.term(*term);
        }
    }

    fn term(&mut self, term: Term) {
        mem::discriminant(&term).hash(&mut self.state);
        match term {
            Term::Name(n) => self.name(n),
            Term::Type(t) => t.hash(&mut self.state),
            Term::Expr(e) => self.expr(e),
            Term::Decl(d) => d.hash(&mut self.state),
            Term::Cons(c) => c.hash(&mut self.state),
        }
    }

    fn name(&mut self, id: NameId) {
        let arena = self.arena;
        let kind = arena.name(id);
        mem::discriminant(kind).hash(&mut self.state);
        match kind {
            NameKind::Simple(sym) => sym.hash(&mut self.state),
            NameKind::Placeholder(n) => n.hash(&mut self.state),
            NameKind::Operator(op) => op.hash(&mut self.state),
            NameKind::Destructor(t) => t.hash(&mut self.state),
            NameKind::Template { template: d, args } | NameKind::Concept { concept: d, args } => {
                d.hash(&mut self.state);
                self.terms(args);
            }
            NameKind::Qualified { scope, name } => {
                scope.hash(&mut self.state);
                self.name(*name);
            }
            NameKind::Global => {}
        }
    }

    fn exprs(&mut self, exprs: &[ExprId]) {
        exprs.len().hash(&mut self.state);
        for &e in exprs {
            self.expr(e);
        }
    }

    fn expr(&mut self, id: ExprId) {
        let arena = self.arena;
        arena.expr_type(id).hash(&mut self.state);
        let kind = arena.expr(id);
        mem::discriminant(kind).hash(&mut self.state);
        match kind {
            ExprKind::Boolean(b) => b.hash(&mut self.state),
            ExprKind::Integer(n) => n.hash(&mut self.state),
            ExprKind::Object { decl, .. }
            | ExprKind::Function { decl, .. }
            | ExprKind::Synthetic(decl) => decl.hash(&mut self.state),
            ExprKind::Field { object, decl, .. } | ExprKind::Method { object, decl, .. } => {
                self.expr(*object);
                decl.hash(&mut self.state);
            }
            ExprKind::Check { concept, args } => {
                concept.hash(&mut self.state);
                self.terms(args);
            }
            ExprKind::Unary { op, operand } => {
                op.hash(&mut self.state);
                self.expr(*operand);
            }
            ExprKind::Binary { op, lhs, rhs } => {
                op.hash(&mut self.state);
                self.expr(*lhs);
                self.expr(*rhs);
            }
            ExprKind::Call { callee, args } => {
                self.expr(*callee);
                self.exprs(args);
            }
            ExprKind::Requires {
                tparms,
                parms,
                reqs,
            } => {
                tparms.hash(&mut self.state);
                parms.hash(&mut self.state);
                reqs.len().hash(&mut self.state);
                for &r in reqs.iter() {
                    self.req(r);
                }
            }
            ExprKind::TrivialInit => {}
            ExprKind::CopyInit(e) | ExprKind::BindInit(e) => self.expr(*e),
            ExprKind::DirectInit { ctor, args } => {
                ctor.hash(&mut self.state);
                self.exprs(args);
            }
            ExprKind::AggregateInit(args) => self.exprs(args),
        }
    }

    fn req(&mut self, id: ReqId) {
        let arena = self.arena;
        let kind = arena.req(id);
        mem::discriminant(kind).hash(&mut self.state);
        self.expr(kind.expr());
        match kind {
            ReqKind::Basic { ty, .. } | ReqKind::Conversion { ty, .. } => {
                ty.hash(&mut self.state);
            }
            ReqKind::Syntactic(_) => {}
        }
    }
}

struct Equivalence<'a> {
    arena: &'a TermArena,
}

impl Equivalence<'_> {
    fn term_lists(&self, a: &[Term], b: &[Term]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| self.terms(*x, *y))
    }

    fn terms(&self, a: Term, b: Term) -> bool {
        match (a, b) {
            (Term::Name(x), Term::Name(y)) => self.names(x, y),
            (Term::Type(x), Term::Type(y)) => x == y,
            (Term::Expr(x), Term::Expr(y)) => self.exprs(x, y),
            (Term::Decl(x), Term::Decl(y)) => x == y,
            (Term::Cons(x), Term::Cons(y)) => x == y,
            _ => false,
        }
    }

    fn names(&self, a: NameId, b: NameId) -> bool {
        if a == b {
            return true;
        }
        match (self.arena.name(a), self.arena.name(b)) {
            (NameKind::Simple(x), NameKind::Simple(y)) => x == y,
            (NameKind::Placeholder(x), NameKind::Placeholder(y)) => x == y,
            (NameKind::Operator(x), NameKind::Operator(y)) => x == y,
            (NameKind::Destructor(x), NameKind::Destructor(y)) => x == y,
            (
                NameKind::Template {
                    template: d1,
                    args: a1,
                },
                NameKind::Template {
                    template: d2,
                    args: a2,
                },
            )
            | (
                NameKind::Concept {
                    concept: d1,
                    args: a1,
                },
                NameKind::Concept {
                    concept: d2,
                    args: a2,
                },
            ) => d1 == d2 && self.term_lists(a1, a2),
            (
                NameKind::Qualified {
                    scope: s1,
                    name: n1,
                },
                NameKind::Qualified {
                    scope: s2,
                    name: n2,
                },
            ) => s1 == s2 && self.names(*n1, *n2),
            (NameKind::Global, NameKind::Global) => true,
            _ => false,
        }
    }

    fn expr_lists(&self, a: &[ExprId], b: &[ExprId]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| self.exprs(*x, *y))
    }

    fn exprs(&self, a: ExprId, b: ExprId) -> bool {
        if a == b {
            return true;
        }
        if self.arena.expr_type(a) != self.arena.expr_type(b) {
            return false;
        }
        match (self.arena.expr(a), self.arena.expr(b)) {
            (ExprKind::Boolean(x), ExprKind::Boolean(y)) => x == y,
            (ExprKind::Integer(x), ExprKind::Integer(y)) => x == y,
            (ExprKind::Object { decl: x, .. }, ExprKind::Object { decl: y, .. })
            | (ExprKind::Function { decl: x, .. }, ExprKind::Function { decl: y, .. })
            | (ExprKind::Synthetic(x), ExprKind::Synthetic(y)) => x == y,
            (
                ExprKind::Field {
                    object: o1,
                    decl: d1,
                    ..
                },
                ExprKind::Field {
                    object: o2,
                    decl: d2,
                    ..
                },
            )
            | (
                ExprKind::Method {
                    object: o1,
                    decl: d1,
                    ..
                },
                ExprKind::Method {
                    object: o2,
                    decl: d2,
                    ..
                },
            ) => d1 == d2 && self.exprs(*o1, *o2),
            (
                ExprKind::Check {
                    concept: c1,
                    args: a1,
                },
                ExprKind::Check {
                    concept: c2,
                    args: a2,
                },
            ) => c1 == c2 && self.term_lists(a1, a2),
            (
                ExprKind::Unary {
                    op: o1,
                    operand: e1,
                },
                ExprKind::Unary {
                    op: o2,
                    operand: e2,
                },
            ) => o1 == o2 && self.exprs(*e1, *e2),
            (
                ExprKind::Binary {
                    op: o1,
                    lhs: l1,
                    rhs: r1,
                },
                ExprKind::Binary {
                    op: o2,
                    lhs: l2,
                    rhs: r2,
                },
            ) => o1 == o2 && self.exprs(*l1, *l2) && self.exprs(*r1, *r2),
            (
                ExprKind::Call {
                    callee: f1,
                    args: a1,
                },
                ExprKind::Call {
                    callee: f2,
                    args: a2,
                },
            ) => self.exprs(*f1, *f2) && self.expr_lists(a1, a2),
            (
                ExprKind::Requires {
                    tparms: t1,
                    parms: p1,
                    reqs: r1,
                },
                ExprKind::Requires {
                    tparms: t2,
                    parms: p2,
                    reqs: r2,
                },
            ) => {
                t1 == t2
                    && p1 == p2
                    && r1.len() == r2.len()
                    && r1.iter().zip(r2.iter()).all(|(x, y)| self.reqs(*x, *y))
            }
            (ExprKind::TrivialInit, ExprKind::TrivialInit) => true,
            (ExprKind::CopyInit(x), ExprKind::CopyInit(y))
            | (ExprKind::BindInit(x), ExprKind::BindInit(y)) => self.exprs(*x, *y),
            (
                ExprKind::DirectInit {
                    ctor: c1,
                    args: a1,
                },
                ExprKind::DirectInit {
                    ctor: c2,
                    args: a2,
                },
            ) => c1 == c2 && self.expr_lists(a1, a2),
            (ExprKind::AggregateInit(a1), ExprKind::AggregateInit(a2)) => self.expr_lists(a1, a2),
            _ => false,
        }
    }

    fn reqs(&self, a: ReqId, b: ReqId) -> bool {
        match (self.arena.req(a), self.arena.req(b)) {
            (ReqKind::Basic { expr: e1, ty: t1 }, ReqKind::Basic { expr: e2, ty: t2 })
            | (
                ReqKind::Conversion { expr: e1, ty: t1 },
                ReqKind::Conversion { expr: e2, ty: t2 },
            ) => t1 == t2 && self.exprs(*e1, *e2),
            (ReqKind::Syntactic(e1), ReqKind::Syntactic(e2)) => self.exprs(*e1, *e2),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests;
