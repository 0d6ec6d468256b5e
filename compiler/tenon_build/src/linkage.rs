//! Attaching definitions to declarations.
//!
//! A declaration starts out with a sentinel definition. Once the parser has
//! seen a body, it builds the definition and links it here. Templates are
//! transparent: the definition goes to the declaration the template wraps.

use tenon_ir::{DeclId, DeclKind, DefId, ExprId, ReqId, StmtId};

use crate::{invariant_violation, Context};

impl Context {
    /// Link `def` to `decl`.
    ///
    /// Only functions, classes and concepts own a definition that can be
    /// supplied after the declaration; any other kind is a parser bug.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn attach_definition(&mut self, decl: DeclId, def: DefId) {
        let target = self.arena.parameterized(decl);
        match self.arena.decl_mut(target) {
            DeclKind::Function { def: slot, .. } | DeclKind::Class { def: slot, .. } => {
                *slot = def;
            }
            DeclKind::Concept { body, .. } => {
                *body = def;
            }
            other => {
                let what = other.describe();
                invariant_violation(format_args!("cannot attach a definition to a {what}"));
            }
        }
        tracing::debug!(?target, "definition attached");
    }

    /// Give a function its statement body.
    pub fn define_function(&mut self, decl: DeclId, body: StmtId) -> DefId {
        let def = self.make_function_definition(body);
        self.attach_definition(decl, def);
        def
    }

    /// Give a class its member declarations.
    pub fn define_class(&mut self, decl: DeclId, members: Vec<DeclId>) -> DefId {
        let def = self.make_class_definition(members);
        self.attach_definition(decl, def);
        def
    }

    /// Define a concept by a constraint expression.
    pub fn define_concept(&mut self, decl: DeclId, expr: ExprId) -> DefId {
        let def = self.make_expression_definition(expr);
        self.attach_definition(decl, def);
        def
    }

    /// Define a concept by a list of requirements.
    pub fn define_concept_requirements(&mut self, decl: DeclId, reqs: Vec<ReqId>) -> DefId {
        let def = self.make_concept_definition(reqs);
        self.attach_definition(decl, def);
        def
    }

    /// `= delete;`
    pub fn define_deleted(&mut self, decl: DeclId) -> DefId {
        self.attach_definition(decl, DefId::DELETED);
        DefId::DELETED
    }

    /// `= default;`
    pub fn define_defaulted(&mut self, decl: DeclId) -> DefId {
        self.attach_definition(decl, DefId::DEFAULTED);
        DefId::DEFAULTED
    }

    /// The current definition of `decl`, looking through a template.
    pub fn definition_of(&self, decl: DeclId) -> DefId {
        let target = self.arena.parameterized(decl);
        let kind = self.arena.decl(target);
        match kind {
            DeclKind::Concept { body, .. } => *body,
            _ => kind.def().unwrap_or_else(|| {
                invariant_violation(format_args!("a {} has no definition", kind.describe()))
            }),
        }
    }
}
