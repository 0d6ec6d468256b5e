//! Definition construction.
//!
//! The empty, deleted and defaulted definitions are shared sentinels
//! allocated with the arena; the constructors below return them rather than
//! allocating copies.

use tenon_ir::{DeclId, DefId, DefKind, ExprId, ReqId, StmtId};

use crate::Context;

impl Context {
    pub fn make_empty_definition(&self) -> DefId {
        DefId::EMPTY
    }

    pub fn make_deleted_definition(&self) -> DefId {
        DefId::DELETED
    }

    pub fn make_defaulted_definition(&self) -> DefId {
        DefId::DEFAULTED
    }

    /// `= expr;`
    pub fn make_expression_definition(&mut self, expr: ExprId) -> DefId {
        self.arena.push_def(DefKind::Expression(expr))
    }

    /// A function body.
    pub fn make_function_definition(&mut self, body: StmtId) -> DefId {
        self.arena.push_def(DefKind::Function(body))
    }

    /// A type defined by a statement body.
    pub fn make_type_definition(&mut self, body: StmtId) -> DefId {
        self.arena.push_def(DefKind::Type(body))
    }

    pub fn make_class_definition(&mut self, members: Vec<DeclId>) -> DefId {
        self.arena
            .push_def(DefKind::Class(members.into_boxed_slice()))
    }

    /// A concept body given as a list of requirements.
    pub fn make_concept_definition(&mut self, reqs: Vec<ReqId>) -> DefId {
        self.arena
            .push_def(DefKind::Concept(reqs.into_boxed_slice()))
    }
}
