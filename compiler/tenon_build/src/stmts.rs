//! Statement construction.

use tenon_ir::{DeclId, ExprId, StmtId, StmtKind};

use crate::Context;

impl Context {
    /// The top-level statement sequence of a translation unit.
    pub fn make_translation_unit(&mut self, stmts: Vec<StmtId>) -> StmtId {
        self.arena
            .push_stmt(StmtKind::Translation(stmts.into_boxed_slice()))
    }

    /// The member sequence of a class body.
    pub fn make_member_statement(&mut self, stmts: Vec<StmtId>) -> StmtId {
        self.arena
            .push_stmt(StmtKind::Member(stmts.into_boxed_slice()))
    }

    pub fn make_compound_statement(&mut self, stmts: Vec<StmtId>) -> StmtId {
        self.arena
            .push_stmt(StmtKind::Compound(stmts.into_boxed_slice()))
    }

    pub fn make_empty_statement(&mut self) -> StmtId {
        self.arena.push_stmt(StmtKind::Empty)
    }

    pub fn make_return_statement(&mut self, expr: ExprId) -> StmtId {
        self.arena.push_stmt(StmtKind::Return(expr))
    }

    pub fn make_if_statement(&mut self, cond: ExprId, then: StmtId) -> StmtId {
        self.arena.push_stmt(StmtKind::IfThen { cond, then })
    }

    pub fn make_if_else_statement(
        &mut self,
        cond: ExprId,
        then: StmtId,
        otherwise: StmtId,
    ) -> StmtId {
        self.arena.push_stmt(StmtKind::IfElse {
            cond,
            then,
            otherwise,
        })
    }

    pub fn make_while_statement(&mut self, cond: ExprId, body: StmtId) -> StmtId {
        self.arena.push_stmt(StmtKind::While { cond, body })
    }

    pub fn make_break_statement(&mut self) -> StmtId {
        self.arena.push_stmt(StmtKind::Break)
    }

    pub fn make_continue_statement(&mut self) -> StmtId {
        self.arena.push_stmt(StmtKind::Continue)
    }

    pub fn make_expression_statement(&mut self, expr: ExprId) -> StmtId {
        self.arena.push_stmt(StmtKind::Expression(expr))
    }

    pub fn make_declaration_statement(&mut self, decl: DeclId) -> StmtId {
        self.arena.push_stmt(StmtKind::Declaration(decl))
    }
}
