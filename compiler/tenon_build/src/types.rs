//! Type construction.
//!
//! Every constructor interns its result, so structurally equal requests
//! return the same [`TypeId`].

use tenon_ir::{DeclId, DeclKind, ExprId, ParmIndex, Qualifiers, TypeId, TypeKind};

use crate::{invariant_violation, BuildError, BuildResult, Context};

impl Context {
    // === Scalar Types ===

    pub fn get_void_type(&self) -> TypeId {
        TypeId::VOID
    }

    pub fn get_bool_type(&self) -> TypeId {
        TypeId::BOOL
    }

    pub fn get_byte_type(&mut self) -> TypeId {
        self.intern_type(TypeKind::Byte)
    }

    /// An integer type of the given signedness and bit width.
    pub fn get_integer_type(&mut self, signed: bool, precision: u32) -> TypeId {
        self.intern_type(TypeKind::Integer { signed, precision })
    }

    /// `int`, at the configured precision.
    pub fn get_int_type(&mut self) -> TypeId {
        self.get_integer_type(true, self.config.int_precision)
    }

    /// `uint`, at the configured precision.
    pub fn get_uint_type(&mut self) -> TypeId {
        self.get_integer_type(false, self.config.int_precision)
    }

    pub fn get_float_type(&mut self) -> TypeId {
        self.intern_type(TypeKind::Float)
    }

    // === Placeholder Types ===

    pub fn get_auto_type(&mut self) -> TypeId {
        self.intern_type(TypeKind::Auto)
    }

    pub fn get_decltype_type(&mut self, expr: ExprId) -> BuildResult<TypeId> {
        tracing::trace!(?expr, "decltype requested");
        Err(BuildError::unsupported("decltype-type"))
    }

    pub fn get_declauto_type(&mut self) -> TypeId {
        self.intern_type(TypeKind::Declauto)
    }

    /// A fresh invented type parameter and the type naming it.
    ///
    /// Used for abbreviated templates, where each `auto` parameter
    /// introduces a new template parameter.
    pub fn make_placeholder_type(&mut self) -> TypeId {
        let name = self.get_placeholder_id();
        let parm = self.make_type_parm(ParmIndex::default(), name, None);
        self.get_typename_type(parm)
    }

    // === Function Types ===

    /// The type of a function with the given parameter declarations.
    ///
    /// Every parameter must be an object parameter.
    pub fn get_function_type(&mut self, parms: &[DeclId], ret: TypeId) -> TypeId {
        let params: Vec<TypeId> = parms
            .iter()
            .map(|&p| match self.arena.decl(p) {
                DeclKind::ObjectParm { ty, .. } => *ty,
                other => invariant_violation(format_args!(
                    "function parameter is a {}, not an object parameter",
                    other.describe()
                )),
            })
            .collect();
        self.get_function_type_from(params, ret)
    }

    /// The type of a function with the given parameter types.
    pub fn get_function_type_from(&mut self, params: Vec<TypeId>, ret: TypeId) -> TypeId {
        self.intern_type(TypeKind::Function {
            params: params.into_boxed_slice(),
            ret,
        })
    }

    // === Qualified Types ===

    /// `ty` qualified by `quals`.
    ///
    /// Qualifiers accumulate rather than nest: qualifying an already
    /// qualified type yields the single wrapper over the same base holding
    /// the union of both sets. An empty set returns `ty` unchanged.
    pub fn get_qualified_type(&mut self, ty: TypeId, quals: Qualifiers) -> TypeId {
        if quals.is_empty() {
            return ty;
        }
        let (base, merged) = match self.type_kind(ty) {
            TypeKind::Qualified { base, quals: have } => (*base, *have | quals),
            _ => (ty, quals),
        };
        self.intern_type(TypeKind::Qualified {
            base,
            quals: merged,
        })
    }

    pub fn get_const_type(&mut self, ty: TypeId) -> TypeId {
        self.get_qualified_type(ty, Qualifiers::CONST)
    }

    pub fn get_volatile_type(&mut self, ty: TypeId) -> TypeId {
        self.get_qualified_type(ty, Qualifiers::VOLATILE)
    }

    /// The unqualified form of `ty` and its qualifiers.
    pub fn split_qualifiers(&self, ty: TypeId) -> (TypeId, Qualifiers) {
        match self.type_kind(ty) {
            TypeKind::Qualified { base, quals } => (*base, *quals),
            _ => (ty, Qualifiers::empty()),
        }
    }

    // === Compound Types ===

    pub fn get_pointer_type(&mut self, ty: TypeId) -> TypeId {
        self.intern_type(TypeKind::Pointer(ty))
    }

    pub fn get_reference_type(&mut self, ty: TypeId) -> TypeId {
        self.intern_type(TypeKind::Reference(ty))
    }

    /// Arrays with a constant extent need constant evaluation, which this
    /// front end does not do yet.
    pub fn get_array_type(&mut self, elem: TypeId, extent: ExprId) -> BuildResult<TypeId> {
        tracing::trace!(?elem, ?extent, "array type requested");
        Err(BuildError::unsupported("array-type"))
    }

    pub fn get_slice_type(&mut self, elem: TypeId) -> TypeId {
        self.intern_type(TypeKind::Slice(elem))
    }

    pub fn get_dynarray_type(&mut self, elem: TypeId, extent: ExprId) -> BuildResult<TypeId> {
        tracing::trace!(?elem, ?extent, "dynarray type requested");
        Err(BuildError::unsupported("dynarray-type"))
    }

    // === Parameter Passing Types ===

    pub fn get_in_type(&mut self, ty: TypeId) -> TypeId {
        self.intern_type(TypeKind::In(ty))
    }

    pub fn get_out_type(&mut self, ty: TypeId) -> TypeId {
        self.intern_type(TypeKind::Out(ty))
    }

    pub fn get_mutable_type(&mut self, ty: TypeId) -> TypeId {
        self.intern_type(TypeKind::Mutable(ty))
    }

    pub fn get_consume_type(&mut self, ty: TypeId) -> TypeId {
        self.intern_type(TypeKind::Consume(ty))
    }

    pub fn get_forward_type(&mut self, ty: TypeId) -> TypeId {
        self.intern_type(TypeKind::Forward(ty))
    }

    pub fn get_pack_type(&mut self, ty: TypeId) -> TypeId {
        self.intern_type(TypeKind::Pack(ty))
    }

    // === Declared Types ===

    /// The type named by a type parameter.
    pub fn get_typename_type(&mut self, parm: DeclId) -> TypeId {
        self.expect_decl(parm, "type parameter", |k| {
            matches!(k, DeclKind::TypeParm { .. })
        });
        self.intern_type(TypeKind::Typename(parm))
    }

    /// The type of types.
    pub fn get_type_type(&self) -> TypeId {
        TypeId::TYPE
    }

    pub fn get_synthetic_type(&mut self, decl: DeclId) -> TypeId {
        self.intern_type(TypeKind::Synthetic(decl))
    }

    /// The type declared by a class, looking through a template wrapper.
    pub fn get_user_type(&mut self, decl: DeclId) -> TypeId {
        let class = self.arena.parameterized(decl);
        self.expect_decl(class, "class", |k| matches!(k, DeclKind::Class { .. }));
        self.intern_type(TypeKind::User(class))
    }

    pub fn get_union_type(&mut self, decl: DeclId) -> TypeId {
        self.intern_type(TypeKind::Union(decl))
    }

    pub fn get_enum_type(&mut self, decl: DeclId) -> TypeId {
        self.intern_type(TypeKind::Enum(decl))
    }

    fn expect_decl(&self, decl: DeclId, what: &str, is: impl Fn(&DeclKind) -> bool) {
        let kind = self.arena.decl(decl);
        if !is(kind) {
            invariant_violation(format_args!(
                "expected a {what} declaration, found a {}",
                kind.describe()
            ));
        }
    }
}
