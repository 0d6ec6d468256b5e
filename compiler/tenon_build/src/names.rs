//! Name construction.
//!
//! Names are per-occurrence: every call allocates a fresh node.

use tenon_ir::{DeclId, DeclKind, NameId, NameKind, OperatorKind, Symbol, Term, TypeId};

use crate::{BuildError, BuildResult, Context};

impl Context {
    /// A simple identifier.
    pub fn get_id(&mut self, spelling: &str) -> NameId {
        let sym = self.symbols.intern(spelling);
        self.get_id_for_symbol(sym)
    }

    pub fn get_id_for_symbol(&mut self, sym: Symbol) -> NameId {
        self.arena.push_name(NameKind::Simple(sym))
    }

    /// A fresh compiler-invented identifier, numbered by this context.
    pub fn get_placeholder_id(&mut self) -> NameId {
        let n = self.fresh_placeholder();
        self.arena.push_name(NameKind::Placeholder(n))
    }

    pub fn get_operator_id(&mut self, op: OperatorKind) -> NameId {
        self.arena.push_name(NameKind::Operator(op))
    }

    /// Destructor names are not supported yet.
    pub fn get_destructor_id(&mut self, ty: TypeId) -> BuildResult<NameId> {
        tracing::trace!(?ty, "destructor-id requested");
        Err(BuildError::unsupported("destructor-id"))
    }

    /// A template-id `t<args...>`.
    ///
    /// `template` must be a template declaration.
    pub fn get_template_id(&mut self, template: DeclId, args: Vec<Term>) -> BuildResult<NameId> {
        if !matches!(self.arena.decl(template), DeclKind::Template { .. }) {
            return Err(self.not_a(template, "template"));
        }
        Ok(self.arena.push_name(NameKind::Template {
            template,
            args: args.into_boxed_slice(),
        }))
    }

    /// A concept-id `c<args...>`.
    pub fn get_concept_id(&mut self, concept: DeclId, args: Vec<Term>) -> BuildResult<NameId> {
        if !matches!(self.arena.decl(concept), DeclKind::Concept { .. }) {
            return Err(self.not_a(concept, "concept"));
        }
        Ok(self.arena.push_name(NameKind::Concept {
            concept,
            args: args.into_boxed_slice(),
        }))
    }

    /// `scope::name`.
    pub fn get_qualified_id(&mut self, scope: DeclId, name: NameId) -> NameId {
        self.arena.push_name(NameKind::Qualified { scope, name })
    }

    /// The global identifier `::`. Shared by every caller.
    pub fn get_global_id(&self) -> NameId {
        NameId::GLOBAL
    }

    /// Render a name for diagnostics.
    pub fn spell_name(&self, id: NameId) -> String {
        match self.arena.name(id) {
            NameKind::Simple(sym) => self.symbols.lookup(*sym).to_owned(),
            NameKind::Placeholder(n) => format!("__{n}"),
            NameKind::Operator(op) => format!("operator{}", op.spelling()),
            NameKind::Destructor(_) => "~<type>".to_owned(),
            NameKind::Template { template: d, args } | NameKind::Concept { concept: d, args } => {
                let base = self.spell_name(self.arena.decl_name(*d));
                format!("{base}<{} args>", args.len())
            }
            NameKind::Qualified { scope, name } => {
                let inner = self.spell_name(*name);
                if *scope == DeclId::GLOBAL_NAMESPACE {
                    format!("::{inner}")
                } else {
                    format!("{}::{inner}", self.spell_name(self.arena.decl_name(*scope)))
                }
            }
            NameKind::Global => "::".to_owned(),
        }
    }

    fn not_a(&self, decl: DeclId, what: &str) -> BuildError {
        let name = self.arena.decl_name(decl);
        let spelled = if name.is_valid() {
            self.spell_name(name)
        } else {
            String::from("<anonymous>")
        };
        BuildError::semantic(format!("'{spelled}' does not name a {what}"))
    }
}
