//! Storage for per-occurrence terms.
//!
//! [`TermArena`] owns every name, expression, statement, declaration,
//! definition and requirement of a compilation. Nodes are never freed before
//! the arena is dropped; handles stay valid for the arena's lifetime.
//!
//! # Index Spaces
//!
//! - `names`: indexed by [`NameId`]
//! - `expr_kinds`/`expr_types`: parallel arrays indexed by [`ExprId`]
//! - `stmts`, `decls`, `defs`, `reqs`: indexed by their handle types
//!
//! # Pre-allocated nodes
//!
//! A fresh arena already holds the global name ([`NameId::GLOBAL`]), the
//! global namespace ([`DeclId::GLOBAL_NAMESPACE`]) and the three shared
//! sentinel definitions ([`DefId::EMPTY`], [`DefId::DELETED`],
//! [`DefId::DEFAULTED`]).

use crate::{
    DeclId, DeclKind, DefId, DefKind, ExprId, ExprKind, NameId, NameKind, ReqId, ReqKind, StmtId,
    StmtKind, TypeId,
};

/// Convert a length to a `u32` index, panicking with context on overflow.
#[inline]
fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("too many {what}: {len} exceeds u32::MAX"))
}

#[derive(Clone, Debug)]
pub struct TermArena {
    names: Vec<NameKind>,
    /// Expression kinds (parallel with `expr_types`).
    expr_kinds: Vec<ExprKind>,
    /// Expression types (parallel with `expr_kinds`).
    expr_types: Vec<TypeId>,
    stmts: Vec<StmtKind>,
    decls: Vec<DeclKind>,
    defs: Vec<DefKind>,
    reqs: Vec<ReqKind>,
}

impl TermArena {
    /// Create an arena holding only the pre-allocated nodes.
    pub fn new() -> Self {
        let mut arena = Self {
            names: Vec::new(),
            expr_kinds: Vec::new(),
            expr_types: Vec::new(),
            stmts: Vec::new(),
            decls: Vec::new(),
            defs: Vec::new(),
            reqs: Vec::new(),
        };

        let global = arena.push_name(NameKind::Global);
        debug_assert_eq!(global, NameId::GLOBAL);

        let empty = arena.push_def(DefKind::Empty);
        let deleted = arena.push_def(DefKind::Deleted);
        let defaulted = arena.push_def(DefKind::Defaulted);
        debug_assert_eq!(
            (empty, deleted, defaulted),
            (DefId::EMPTY, DefId::DELETED, DefId::DEFAULTED)
        );

        let ns = arena.push_decl(DeclKind::Namespace {
            name: NameId::GLOBAL,
            members: Vec::new(),
        });
        debug_assert_eq!(ns, DeclId::GLOBAL_NAMESPACE);

        arena
    }

    // Names

    pub fn push_name(&mut self, kind: NameKind) -> NameId {
        let id = NameId::new(to_u32(self.names.len(), "names"));
        self.names.push(kind);
        id
    }

    #[inline]
    pub fn name(&self, id: NameId) -> &NameKind {
        &self.names[id.index()]
    }

    // Expressions

    pub fn push_expr(&mut self, kind: ExprKind, ty: TypeId) -> ExprId {
        let id = ExprId::new(to_u32(self.expr_kinds.len(), "expressions"));
        self.expr_kinds.push(kind);
        self.expr_types.push(ty);
        id
    }

    #[inline]
    pub fn expr(&self, id: ExprId) -> &ExprKind {
        &self.expr_kinds[id.index()]
    }

    #[inline]
    pub fn expr_type(&self, id: ExprId) -> TypeId {
        self.expr_types[id.index()]
    }

    // Statements

    pub fn push_stmt(&mut self, kind: StmtKind) -> StmtId {
        let id = StmtId::new(to_u32(self.stmts.len(), "statements"));
        self.stmts.push(kind);
        id
    }

    #[inline]
    pub fn stmt(&self, id: StmtId) -> &StmtKind {
        &self.stmts[id.index()]
    }

    // Declarations

    pub fn push_decl(&mut self, kind: DeclKind) -> DeclId {
        let id = DeclId::new(to_u32(self.decls.len(), "declarations"));
        self.decls.push(kind);
        id
    }

    #[inline]
    pub fn decl(&self, id: DeclId) -> &DeclKind {
        &self.decls[id.index()]
    }

    /// Mutable access for definition linkage and template constraints.
    #[inline]
    pub fn decl_mut(&mut self, id: DeclId) -> &mut DeclKind {
        &mut self.decls[id.index()]
    }

    /// The declaration a template wraps, or `id` itself.
    ///
    /// Unwraps exactly one level.
    pub fn parameterized(&self, id: DeclId) -> DeclId {
        match self.decl(id) {
            DeclKind::Template { decl, .. } => *decl,
            _ => id,
        }
    }

    /// The name of a declaration, looking through a template wrapper.
    pub fn decl_name(&self, id: DeclId) -> NameId {
        match self.decl(id) {
            DeclKind::Template { decl, .. } => self.decl_name(*decl),
            kind => kind.name().unwrap_or(NameId::INVALID),
        }
    }

    // Definitions

    pub fn push_def(&mut self, kind: DefKind) -> DefId {
        let id = DefId::new(to_u32(self.defs.len(), "definitions"));
        self.defs.push(kind);
        id
    }

    #[inline]
    pub fn def(&self, id: DefId) -> &DefKind {
        &self.defs[id.index()]
    }

    // Requirements

    pub fn push_req(&mut self, kind: ReqKind) -> ReqId {
        let id = ReqId::new(to_u32(self.reqs.len(), "requirements"));
        self.reqs.push(kind);
        id
    }

    #[inline]
    pub fn req(&self, id: ReqId) -> &ReqKind {
        &self.reqs[id.index()]
    }

    /// Number of expressions allocated.
    pub fn expr_count(&self) -> usize {
        self.expr_kinds.len()
    }

    /// Number of declarations allocated, including the global namespace.
    pub fn decl_count(&self) -> usize {
        self.decls.len()
    }
}

impl Default for TermArena {
    fn default() -> Self {
        Self::new()
    }
}
