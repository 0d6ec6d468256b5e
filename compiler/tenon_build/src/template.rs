//! Pending template headers.
//!
//! Parsing `template<parms> requires expr` happens before the declaration it
//! introduces exists. The parser records the header in a [`TemplateContext`]
//! and hands it to [`Context::templatize`] right after building the
//! declaration. The header is taken out of the context there, so it can
//! never attach to a second declaration.

use tenon_ir::{DeclId, DeclKind, ExprId};

use crate::{invariant_violation, Context};

/// A parsed template parameter list and its optional requires-clause.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TemplateHeader {
    pub parms: Vec<DeclId>,
    pub constraint: Option<ExprId>,
}

/// Parser-side holder of at most one pending template header.
#[derive(Clone, Debug, Default)]
pub struct TemplateContext {
    pending: Option<TemplateHeader>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a parameter list for the next declaration.
    ///
    /// A header that was never consumed is replaced.
    pub fn begin(&mut self, parms: Vec<DeclId>) {
        if self.pending.is_some() {
            tracing::debug!("discarding unconsumed template header");
        }
        self.pending = Some(TemplateHeader {
            parms,
            constraint: None,
        });
    }

    /// Attach a requires-clause to the pending header.
    pub fn constrain(&mut self, expr: ExprId) {
        match &mut self.pending {
            Some(header) => header.constraint = Some(expr),
            None => invariant_violation("requires-clause without a template header"),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn take(&mut self) -> Option<TemplateHeader> {
        self.pending.take()
    }
}

impl Context {
    /// Wrap `decl` in the pending template header, if any.
    ///
    /// Call exactly once per declaration, right after constructing it and
    /// before it is entered into scope. Without a pending header `decl` is
    /// returned unchanged.
    pub fn templatize(&mut self, templates: &mut TemplateContext, decl: DeclId) -> DeclId {
        let Some(header) = templates.take() else {
            return decl;
        };
        let tmpl = self.arena.push_decl(DeclKind::Template {
            parms: header.parms.into_boxed_slice(),
            decl,
            cons: header.constraint,
        });
        tracing::debug!(?decl, ?tmpl, "declaration templatized");
        tmpl
    }
}
