//! Heterogeneous term references.

use crate::{ConsId, DeclId, ExprId, NameId, TypeId};

/// A reference to a term of any argument-capable category.
///
/// Template and concept arguments mix types, expressions and templates, so
/// argument lists are `[Term]`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Term {
    Name(NameId),
    Type(TypeId),
    Expr(ExprId),
    Decl(DeclId),
    Cons(ConsId),
}

impl From<TypeId> for Term {
    fn from(id: TypeId) -> Self {
        Term::Type(id)
    }
}

impl From<ExprId> for Term {
    fn from(id: ExprId) -> Self {
        Term::Expr(id)
    }
}

impl From<DeclId> for Term {
    fn from(id: DeclId) -> Self {
        Term::Decl(id)
    }
}

impl From<NameId> for Term {
    fn from(id: NameId) -> Self {
        Term::Name(id)
    }
}

impl From<ConsId> for Term {
    fn from(id: ConsId) -> Self {
        Term::Cons(id)
    }
}
