//! The compilation context.
//!
//! `Context` owns every table a compilation needs: spellings, the term
//! arena, and the interning tables for types and constraints. Two contexts
//! never share nodes, so independent compilations can live in one process.
//!
//! Construction operations are spread over the sibling modules as
//! `impl Context` blocks, grouped by term category.

use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use tenon_ir::{ConsId, ConsKind, ExprId, Symbol, SymbolTable, TermArena, TypeId, TypeKind};

use crate::equiv;
use crate::table::{ConsTable, TypeTable};
use crate::BuildConfig;

/// Owner of all terms built during one compilation.
pub struct Context {
    pub(crate) config: BuildConfig,
    pub(crate) symbols: SymbolTable,
    pub(crate) arena: TermArena,
    pub(crate) types: TypeTable,
    pub(crate) conses: ConsTable,
    /// Counter for placeholder names.
    next_placeholder: u32,
}

impl Context {
    /// Create a context with default settings.
    pub fn new() -> Self {
        Self::with_config(BuildConfig::default())
    }

    pub fn with_config(config: BuildConfig) -> Self {
        tracing::debug!(?config, "creating compilation context");
        Self {
            types: TypeTable::with_capacity(config.type_table_capacity),
            conses: ConsTable::new(),
            symbols: SymbolTable::new(),
            arena: TermArena::new(),
            next_placeholder: 0,
            config,
        }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Intern a spelling.
    pub fn intern(&mut self, s: &str) -> Symbol {
        self.symbols.intern(s)
    }

    /// Per-occurrence terms: names, expressions, statements, declarations,
    /// definitions and requirements.
    pub fn arena(&self) -> &TermArena {
        &self.arena
    }

    /// Structure of an interned type.
    pub fn type_kind(&self, id: TypeId) -> &TypeKind {
        self.types.get(id)
    }

    /// Structure of an interned constraint.
    pub fn cons_kind(&self, id: ConsId) -> &ConsKind {
        self.conses.get(id)
    }

    /// The type of an expression.
    pub fn expr_type(&self, id: ExprId) -> TypeId {
        self.arena.expr_type(id)
    }

    /// Number of distinct types built so far, including pre-interned ones.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Number of distinct constraints built so far.
    pub fn cons_count(&self) -> usize {
        self.conses.len()
    }

    /// Structural equivalence of two expressions: same kind, same type,
    /// equivalent operands, same referenced declarations.
    pub fn is_equivalent_expr(&self, a: ExprId, b: ExprId) -> bool {
        equiv::exprs_equivalent(&self.arena, a, b)
    }

    pub(crate) fn intern_type(&mut self, kind: TypeKind) -> TypeId {
        self.types.intern(kind)
    }

    /// Return the handle of an equivalent constraint, or register `kind`.
    pub(crate) fn intern_cons(&mut self, kind: ConsKind) -> ConsId {
        let hash = equiv::hash_cons(&self.arena, &kind);
        for &id in self.conses.candidates(hash) {
            if equiv::cons_equivalent(&self.arena, self.conses.get(id), &kind) {
                tracing::trace!(?id, "constraint table hit");
                return id;
            }
        }
        self.conses.insert(hash, kind)
    }

    pub(crate) fn fresh_placeholder(&mut self) -> u32 {
        let n = self.next_placeholder;
        self.next_placeholder += 1;
        n
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("types", &self.types.len())
            .field("constraints", &self.conses.len())
            .field("exprs", &self.arena.expr_count())
            .field("decls", &self.arena.decl_count())
            .finish_non_exhaustive()
    }
}

/// A context shared between threads.
///
/// `Context` itself is single-threaded: interning mutates its tables.
/// Sharing one compilation across threads goes through this handle, which
/// serializes every access.
#[derive(Clone)]
pub struct SharedContext(Arc<Mutex<Context>>);

impl SharedContext {
    pub fn new(cx: Context) -> Self {
        SharedContext(Arc::new(Mutex::new(cx)))
    }

    /// Exclusive access for the duration of the guard.
    pub fn lock(&self) -> MutexGuard<'_, Context> {
        self.0.lock()
    }
}

// Never blocks: formatting may happen while this thread holds the guard.
impl fmt::Debug for SharedContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_tuple("SharedContext");
        if let Some(cx) = self.0.try_lock() {
            d.field(&*cx);
        } else {
            d.field(&format_args!("<locked>"));
        }
        d.finish()
    }
}
