//! Type categories.

use tenon_ir::{TypeId, TypeKind};

use crate::{invariant_violation, Context};

impl Context {
    /// Whether `ty` is an object type, one whose values can be stored,
    /// copied and compared.
    ///
    /// Function and reference types are not. Qualifiers and parameter
    /// passing modes do not change the category of the type they wrap.
    /// Placeholder types must be deduced before they can be classified.
    pub fn is_value_type(&self, ty: TypeId) -> bool {
        match self.type_kind(ty) {
            TypeKind::Void
            | TypeKind::Boolean
            | TypeKind::Byte
            | TypeKind::Integer { .. }
            | TypeKind::Float
            | TypeKind::Pointer(_)
            | TypeKind::Array { .. }
            | TypeKind::Slice(_)
            | TypeKind::Dynarray { .. }
            | TypeKind::User(_)
            | TypeKind::Union(_)
            | TypeKind::Enum(_)
            | TypeKind::Type
            | TypeKind::Synthetic(_) => true,

            TypeKind::Function { .. } | TypeKind::Reference(_) => false,

            TypeKind::Qualified { base: inner, .. }
            | TypeKind::In(inner)
            | TypeKind::Out(inner)
            | TypeKind::Mutable(inner)
            | TypeKind::Consume(inner)
            | TypeKind::Forward(inner)
            | TypeKind::Pack(inner) => self.is_value_type(*inner),

            kind @ (TypeKind::Auto
            | TypeKind::Declauto
            | TypeKind::Typename(_)
            | TypeKind::Decltype(_)) => {
                invariant_violation(format_args!("cannot categorize placeholder type {kind:?}"))
            }
        }
    }
}
