//! Declaration construction.
//!
//! Each constructor pairs a fresh declaration with its initial definition:
//! an expression definition when an initializer is given, otherwise the
//! shared empty sentinel.

use tenon_ir::{
    DeclId, DeclKind, DefId, ExprId, FunctionFlavor, NameId, ParmIndex, StmtId, TypeId,
};

use crate::{invariant_violation, BuildError, BuildResult, Context};

/// The body of a function declared with a definition.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FunctionBody {
    /// `= expr;`
    Expression(ExprId),
    /// `{ ... }`
    Statement(StmtId),
}

impl From<ExprId> for FunctionBody {
    fn from(expr: ExprId) -> Self {
        FunctionBody::Expression(expr)
    }
}

impl From<StmtId> for FunctionBody {
    fn from(stmt: StmtId) -> Self {
        FunctionBody::Statement(stmt)
    }
}

impl Context {
    /// A base-class subobject of type `ty`.
    pub fn make_super_declaration(&mut self, name: NameId, ty: TypeId) -> DeclId {
        self.arena.push_decl(DeclKind::Super {
            name,
            ty,
            def: DefId::EMPTY,
        })
    }

    pub fn make_variable_declaration(
        &mut self,
        name: NameId,
        ty: TypeId,
        init: Option<ExprId>,
    ) -> DeclId {
        let def = self.initializer_def(init);
        self.arena.push_decl(DeclKind::Variable { name, ty, def })
    }

    /// A free function. Its type is built from `parms` and `ret`.
    pub fn make_function_declaration(
        &mut self,
        name: NameId,
        parms: Vec<DeclId>,
        ret: TypeId,
        body: Option<FunctionBody>,
    ) -> DeclId {
        self.function_declaration(FunctionFlavor::Free, name, parms, ret, body)
    }

    /// A member function.
    pub fn make_method_declaration(
        &mut self,
        name: NameId,
        parms: Vec<DeclId>,
        ret: TypeId,
        body: Option<FunctionBody>,
    ) -> DeclId {
        self.function_declaration(FunctionFlavor::Method, name, parms, ret, body)
    }

    fn function_declaration(
        &mut self,
        flavor: FunctionFlavor,
        name: NameId,
        parms: Vec<DeclId>,
        ret: TypeId,
        body: Option<FunctionBody>,
    ) -> DeclId {
        let ty = self.get_function_type(&parms, ret);
        let def = match body {
            Some(FunctionBody::Expression(e)) => self.make_expression_definition(e),
            Some(FunctionBody::Statement(s)) => self.make_function_definition(s),
            None => DefId::EMPTY,
        };
        self.arena.push_decl(DeclKind::Function {
            flavor,
            name,
            ty,
            parms: parms.into_boxed_slice(),
            def,
        })
    }

    /// A class declaration whose kind is `ty`.
    pub fn make_class_declaration(&mut self, name: NameId, ty: TypeId) -> DeclId {
        self.arena.push_decl(DeclKind::Class {
            name,
            ty,
            def: DefId::EMPTY,
        })
    }

    /// A class declaration of the ordinary kind, the type of types.
    pub fn make_type_declaration(&mut self, name: NameId) -> DeclId {
        self.make_class_declaration(name, TypeId::TYPE)
    }

    pub fn make_field_declaration(
        &mut self,
        name: NameId,
        ty: TypeId,
        init: Option<ExprId>,
    ) -> DeclId {
        let def = self.initializer_def(init);
        self.arena.push_decl(DeclKind::Field { name, ty, def })
    }

    /// A template over `decl` with no constraint.
    pub fn make_template_declaration(&mut self, parms: Vec<DeclId>, decl: DeclId) -> DeclId {
        self.arena.push_decl(DeclKind::Template {
            parms: parms.into_boxed_slice(),
            decl,
            cons: None,
        })
    }

    /// A concept declared without a body.
    pub fn make_concept_declaration(&mut self, name: NameId, parms: Vec<DeclId>) -> DeclId {
        self.concept_declaration(name, parms, DefId::EMPTY)
    }

    /// A concept defined as `concept C<parms> = expr;`.
    pub fn make_concept_declaration_with_body(
        &mut self,
        name: NameId,
        parms: Vec<DeclId>,
        body: ExprId,
    ) -> DeclId {
        let def = self.make_expression_definition(body);
        self.concept_declaration(name, parms, def)
    }

    /// A concept with an existing definition.
    pub fn make_concept_declaration_with_def(
        &mut self,
        name: NameId,
        parms: Vec<DeclId>,
        def: DefId,
    ) -> DeclId {
        self.concept_declaration(name, parms, def)
    }

    fn concept_declaration(&mut self, name: NameId, parms: Vec<DeclId>, body: DefId) -> DeclId {
        self.arena.push_decl(DeclKind::Concept {
            name,
            parms: parms.into_boxed_slice(),
            body,
        })
    }

    /// A function parameter.
    pub fn make_object_parm(&mut self, name: NameId, ty: TypeId) -> DeclId {
        self.arena.push_decl(DeclKind::ObjectParm { name, ty })
    }

    /// A non-type template parameter.
    pub fn make_value_parm(&mut self, index: ParmIndex, name: NameId, ty: TypeId) -> DeclId {
        self.arena.push_decl(DeclKind::ValueParm { index, name, ty })
    }

    /// A type template parameter, optionally with a default argument.
    pub fn make_type_parm(
        &mut self,
        index: ParmIndex,
        name: NameId,
        default: Option<TypeId>,
    ) -> DeclId {
        self.arena.push_decl(DeclKind::TypeParm {
            index,
            name,
            default,
        })
    }

    /// Namespaces are not supported yet.
    pub fn make_namespace_declaration(&mut self, name: NameId) -> BuildResult<DeclId> {
        tracing::trace!(?name, "namespace declaration requested");
        Err(BuildError::unsupported("namespace-decl"))
    }

    /// The type a declaration introduces into expressions.
    ///
    /// Objects, fields and functions report their declared type. Classes
    /// report the class type, type parameters the type of types and
    /// concepts `bool`. Templates report the type of what they wrap.
    pub fn declared_type(&mut self, decl: DeclId) -> TypeId {
        match self.arena.decl(decl) {
            DeclKind::Super { ty, .. }
            | DeclKind::Variable { ty, .. }
            | DeclKind::Function { ty, .. }
            | DeclKind::Field { ty, .. }
            | DeclKind::ObjectParm { ty, .. }
            | DeclKind::ValueParm { ty, .. } => *ty,
            DeclKind::Class { .. } => self.get_user_type(decl),
            DeclKind::TypeParm { .. } => TypeId::TYPE,
            DeclKind::Concept { .. } => TypeId::BOOL,
            DeclKind::Template { decl, .. } => {
                let inner = *decl;
                self.declared_type(inner)
            }
            DeclKind::Namespace { .. } => invariant_violation("a namespace has no type"),
        }
    }

    fn initializer_def(&mut self, init: Option<ExprId>) -> DefId {
        match init {
            Some(e) => self.make_expression_definition(e),
            None => DefId::EMPTY,
        }
    }
}
