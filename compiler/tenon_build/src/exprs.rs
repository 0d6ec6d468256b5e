//! Expression construction.
//!
//! Expressions are per-occurrence and carry their type. Each constructor
//! computes the type from its operands; no conversions are inserted.

use tenon_ir::{
    BinaryOp, DeclId, DeclKind, ExprId, ExprKind, FunctionFlavor, ReqId, Term, TypeId, TypeKind,
    UnaryOp,
};

use crate::{BuildError, BuildResult, Context};

impl Context {
    // === Literals ===

    pub fn make_bool(&mut self, value: bool) -> ExprId {
        self.arena.push_expr(ExprKind::Boolean(value), TypeId::BOOL)
    }

    pub fn make_true(&mut self) -> ExprId {
        self.make_bool(true)
    }

    pub fn make_false(&mut self) -> ExprId {
        self.make_bool(false)
    }

    /// An integer literal of type `ty`.
    pub fn make_integer(&mut self, ty: TypeId, value: i64) -> ExprId {
        self.arena.push_expr(ExprKind::Integer(value), ty)
    }

    /// The zero value of `ty`.
    pub fn make_zero(&mut self, ty: TypeId) -> ExprId {
        self.make_integer(ty, 0)
    }

    pub fn make_int(&mut self, value: i64) -> ExprId {
        let ty = self.get_int_type();
        self.make_integer(ty, value)
    }

    /// A `uint` literal. The bits are stored unchanged.
    #[allow(clippy::cast_possible_wrap)]
    pub fn make_uint(&mut self, value: u64) -> ExprId {
        let ty = self.get_uint_type();
        self.make_integer(ty, value as i64)
    }

    // === Id-expressions ===

    /// A reference to a named declaration.
    ///
    /// Objects and parameters yield an lvalue whose type is a reference to
    /// the declared type. Functions yield the function itself.
    pub fn make_reference(&mut self, decl: DeclId) -> BuildResult<ExprId> {
        let name = self.arena.decl_name(decl);
        let kind = self.arena.decl(self.arena.parameterized(decl));
        match kind {
            DeclKind::Variable { ty, .. }
            | DeclKind::ObjectParm { ty, .. }
            | DeclKind::ValueParm { ty, .. } => {
                let declared = *ty;
                let ty = self.get_reference_type(declared);
                Ok(self.arena.push_expr(ExprKind::Object { name, decl }, ty))
            }
            DeclKind::Function {
                flavor: FunctionFlavor::Free,
                ty,
                ..
            } => {
                let ty = *ty;
                Ok(self.arena.push_expr(ExprKind::Function { name, decl }, ty))
            }
            other => {
                let what = other.describe();
                Err(BuildError::semantic(format!(
                    "'{}' is a {what}, not an object or function",
                    self.spell_name(name)
                )))
            }
        }
    }

    /// A member access `object.decl`. Member templates are accepted and
    /// keep their wrapper in the node.
    pub fn make_member_reference(&mut self, object: ExprId, decl: DeclId) -> BuildResult<ExprId> {
        let name = self.arena.decl_name(decl);
        match self.arena.decl(self.arena.parameterized(decl)) {
            DeclKind::Field { ty, .. } => {
                let declared = *ty;
                let ty = self.get_reference_type(declared);
                Ok(self
                    .arena
                    .push_expr(ExprKind::Field { object, name, decl }, ty))
            }
            DeclKind::Function {
                flavor: FunctionFlavor::Method,
                ty,
                ..
            } => {
                let ty = *ty;
                Ok(self
                    .arena
                    .push_expr(ExprKind::Method { object, name, decl }, ty))
            }
            other => {
                let what = other.describe();
                Err(BuildError::semantic(format!(
                    "'{}' is a {what}, not a member",
                    self.spell_name(name)
                )))
            }
        }
    }

    /// A concept check `C<args...>`, of type `bool`.
    pub fn make_check(&mut self, concept: DeclId, args: Vec<Term>) -> BuildResult<ExprId> {
        if !matches!(self.arena.decl(concept), DeclKind::Concept { .. }) {
            let name = self.arena.decl_name(concept);
            return Err(BuildError::semantic(format!(
                "'{}' does not name a concept",
                self.spell_name(name)
            )));
        }
        Ok(self.arena.push_expr(
            ExprKind::Check {
                concept,
                args: args.into_boxed_slice(),
            },
            TypeId::BOOL,
        ))
    }

    /// An expression standing for an unspecified value of the declared
    /// type of `decl`. Used when normalizing requirements.
    pub fn synthesize_expression(&mut self, decl: DeclId) -> ExprId {
        let ty = self.declared_type(decl);
        self.arena.push_expr(ExprKind::Synthetic(decl), ty)
    }

    // === Operators ===

    /// A unary operation. `!` yields `bool`; the others yield the operand's
    /// value type.
    pub fn make_unary(&mut self, op: UnaryOp, operand: ExprId) -> ExprId {
        let ty = match op {
            UnaryOp::Not => TypeId::BOOL,
            UnaryOp::Neg | UnaryOp::Pos | UnaryOp::BitNot => self.value_type_of(operand),
        };
        self.arena.push_expr(ExprKind::Unary { op, operand }, ty)
    }

    /// A binary operation. Logical and comparison operators yield `bool`;
    /// the others yield the value type of the left operand.
    pub fn make_binary(&mut self, op: BinaryOp, lhs: ExprId, rhs: ExprId) -> ExprId {
        let ty = if op.is_logical() || op.is_comparison() {
            TypeId::BOOL
        } else {
            self.value_type_of(lhs)
        };
        self.arena.push_expr(ExprKind::Binary { op, lhs, rhs }, ty)
    }

    pub fn make_and(&mut self, lhs: ExprId, rhs: ExprId) -> ExprId {
        self.make_binary(BinaryOp::And, lhs, rhs)
    }

    pub fn make_or(&mut self, lhs: ExprId, rhs: ExprId) -> ExprId {
        self.make_binary(BinaryOp::Or, lhs, rhs)
    }

    pub fn make_not(&mut self, operand: ExprId) -> ExprId {
        self.make_unary(UnaryOp::Not, operand)
    }

    // === Calls ===

    /// A call through `callee`, typed by the callee's return type.
    pub fn make_call(&mut self, callee: ExprId, args: Vec<ExprId>) -> BuildResult<ExprId> {
        let fn_ty = self.value_type_of(callee);
        let TypeKind::Function { params, ret } = self.type_kind(fn_ty) else {
            return Err(BuildError::semantic("called object is not a function"));
        };
        if params.len() != args.len() {
            return Err(BuildError::semantic(format!(
                "function takes {} arguments but {} were given",
                params.len(),
                args.len()
            )));
        }
        let ret = *ret;
        Ok(self.arena.push_expr(
            ExprKind::Call {
                callee,
                args: args.into_boxed_slice(),
            },
            ret,
        ))
    }

    /// A direct call of a function declaration.
    pub fn make_call_function(&mut self, decl: DeclId, args: Vec<ExprId>) -> BuildResult<ExprId> {
        let callee = self.make_reference(decl)?;
        self.make_call(callee, args)
    }

    /// `requires (parms) { reqs }`, of type `bool`.
    pub fn make_requires(
        &mut self,
        tparms: Vec<DeclId>,
        parms: Vec<DeclId>,
        reqs: Vec<ReqId>,
    ) -> ExprId {
        self.arena.push_expr(
            ExprKind::Requires {
                tparms: tparms.into_boxed_slice(),
                parms: parms.into_boxed_slice(),
                reqs: reqs.into_boxed_slice(),
            },
            TypeId::BOOL,
        )
    }

    // === Initializers ===

    /// Default initialization that leaves the object untouched.
    pub fn make_trivial_init(&mut self, ty: TypeId) -> ExprId {
        self.arena.push_expr(ExprKind::TrivialInit, ty)
    }

    pub fn make_copy_init(&mut self, ty: TypeId, expr: ExprId) -> ExprId {
        self.arena.push_expr(ExprKind::CopyInit(expr), ty)
    }

    /// Reference binding.
    pub fn make_bind_init(&mut self, ty: TypeId, expr: ExprId) -> ExprId {
        self.arena.push_expr(ExprKind::BindInit(expr), ty)
    }

    /// Construction through `ctor`.
    pub fn make_direct_init(&mut self, ty: TypeId, ctor: DeclId, args: Vec<ExprId>) -> ExprId {
        self.arena.push_expr(
            ExprKind::DirectInit {
                ctor,
                args: args.into_boxed_slice(),
            },
            ty,
        )
    }

    pub fn make_aggregate_init(&mut self, ty: TypeId, args: Vec<ExprId>) -> ExprId {
        self.arena
            .push_expr(ExprKind::AggregateInit(args.into_boxed_slice()), ty)
    }

    /// The type of `expr` with one level of reference and any qualifiers
    /// removed.
    fn value_type_of(&self, expr: ExprId) -> TypeId {
        let ty = self.arena.expr_type(expr);
        let ty = match self.type_kind(ty) {
            TypeKind::Reference(inner) => *inner,
            _ => ty,
        };
        self.split_qualifiers(ty).0
    }
}

#[cfg(test)]
mod tests;
