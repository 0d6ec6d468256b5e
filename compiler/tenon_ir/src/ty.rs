//! Types.
//!
//! Types are interned by `tenon_build`; children are [`TypeId`] handles, so
//! the derived `Hash`/`Eq` on [`TypeKind`] is structural equality.

use bitflags::bitflags;

use crate::{DeclId, ExprId, TypeId};

bitflags! {
    /// cv-qualifiers attached to a type.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Qualifiers: u8 {
        const CONST = 1 << 0;
        const VOLATILE = 1 << 1;
    }
}

impl Qualifiers {
    /// `const volatile`.
    pub const CV: Self = Self::CONST.union(Self::VOLATILE);
}

/// The structure of a type.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TypeKind {
    Void,
    Boolean,
    Byte,
    Integer { signed: bool, precision: u32 },
    Float,
    Auto,
    /// `decltype(e)`. Not constructible yet; see `Unsupported`.
    Decltype(ExprId),
    /// `decltype(auto)`.
    Declauto,
    Function { params: Box<[TypeId]>, ret: TypeId },
    /// A type with cv-qualifiers. Never wraps another `Qualified`.
    Qualified { base: TypeId, quals: Qualifiers },
    Pointer(TypeId),
    Reference(TypeId),
    /// `T[n]`. Not constructible yet; see `Unsupported`.
    Array { elem: TypeId, extent: ExprId },
    /// `T[]`.
    Slice(TypeId),
    /// Runtime-sized array. Not constructible yet; see `Unsupported`.
    Dynarray { elem: TypeId, extent: ExprId },
    In(TypeId),
    Out(TypeId),
    Mutable(TypeId),
    Consume(TypeId),
    Forward(TypeId),
    /// `T...`.
    Pack(TypeId),
    /// The type named by a type parameter.
    Typename(DeclId),
    /// The type of types.
    Type,
    /// A type standing for a declaration during constraint checking.
    Synthetic(DeclId),
    /// A class type, named by its declaration.
    User(DeclId),
    Union(DeclId),
    Enum(DeclId),
}

impl TypeKind {
    /// The single child type of wrapper types.
    pub fn inner(&self) -> Option<TypeId> {
        match self {
            TypeKind::Qualified { base, .. } => Some(*base),
            TypeKind::Pointer(t)
            | TypeKind::Reference(t)
            | TypeKind::Slice(t)
            | TypeKind::In(t)
            | TypeKind::Out(t)
            | TypeKind::Mutable(t)
            | TypeKind::Consume(t)
            | TypeKind::Forward(t)
            | TypeKind::Pack(t) => Some(*t),
            TypeKind::Array { elem, .. } | TypeKind::Dynarray { elem, .. } => Some(*elem),
            _ => None,
        }
    }

    /// Returns `true` for types that only a later pass can resolve.
    pub const fn is_placeholder(&self) -> bool {
        matches!(
            self,
            TypeKind::Auto | TypeKind::Declauto | TypeKind::Typename(_) | TypeKind::Decltype(_)
        )
    }
}
