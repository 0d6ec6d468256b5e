//! Declarations.
//!
//! A declaration owns one definition slot (a [`DefId`]), which starts at one
//! of the shared sentinels and is replaced when a body is attached.

use crate::{DeclId, DefId, ExprId, NameId, TypeId};

/// Distinguishes member functions from free functions. Both share the
/// function layout, including the definition slot.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FunctionFlavor {
    Free,
    Method,
}

/// Position of a template parameter: nesting depth and offset in its list.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ParmIndex {
    pub depth: u32,
    pub offset: u32,
}

/// The structure of a declaration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DeclKind {
    /// A base-class subobject.
    Super { name: NameId, ty: TypeId, def: DefId },
    Variable { name: NameId, ty: TypeId, def: DefId },
    Function {
        flavor: FunctionFlavor,
        name: NameId,
        ty: TypeId,
        parms: Box<[DeclId]>,
        def: DefId,
    },
    /// A class (type) declaration; `ty` is the kind of the declared type.
    Class { name: NameId, ty: TypeId, def: DefId },
    Field { name: NameId, ty: TypeId, def: DefId },
    /// A template wrapping exactly one declaration.
    Template {
        parms: Box<[DeclId]>,
        decl: DeclId,
        cons: Option<ExprId>,
    },
    /// Concepts keep their body outside the shared slot layout and are
    /// defined through a dedicated setter.
    Concept {
        name: NameId,
        parms: Box<[DeclId]>,
        body: DefId,
    },
    ObjectParm { name: NameId, ty: TypeId },
    ValueParm { index: ParmIndex, name: NameId, ty: TypeId },
    TypeParm {
        index: ParmIndex,
        name: NameId,
        default: Option<TypeId>,
    },
    Namespace { name: NameId, members: Vec<DeclId> },
}

impl DeclKind {
    /// The declared name. Templates report the name of what they wrap,
    /// which only the arena can resolve, so they return `None`.
    pub fn name(&self) -> Option<NameId> {
        match self {
            DeclKind::Super { name, .. }
            | DeclKind::Variable { name, .. }
            | DeclKind::Function { name, .. }
            | DeclKind::Class { name, .. }
            | DeclKind::Field { name, .. }
            | DeclKind::Concept { name, .. }
            | DeclKind::ObjectParm { name, .. }
            | DeclKind::ValueParm { name, .. }
            | DeclKind::TypeParm { name, .. }
            | DeclKind::Namespace { name, .. } => Some(*name),
            DeclKind::Template { .. } => None,
        }
    }

    /// The definition slot, for kinds that have the shared layout.
    pub fn def(&self) -> Option<DefId> {
        match self {
            DeclKind::Super { def, .. }
            | DeclKind::Variable { def, .. }
            | DeclKind::Function { def, .. }
            | DeclKind::Class { def, .. }
            | DeclKind::Field { def, .. } => Some(*def),
            _ => None,
        }
    }

    /// Short description used in diagnostics.
    pub const fn describe(&self) -> &'static str {
        match self {
            DeclKind::Super { .. } => "base class",
            DeclKind::Variable { .. } => "variable",
            DeclKind::Function {
                flavor: FunctionFlavor::Free,
                ..
            } => "function",
            DeclKind::Function {
                flavor: FunctionFlavor::Method,
                ..
            } => "method",
            DeclKind::Class { .. } => "class",
            DeclKind::Field { .. } => "field",
            DeclKind::Template { .. } => "template",
            DeclKind::Concept { .. } => "concept",
            DeclKind::ObjectParm { .. } => "parameter",
            DeclKind::ValueParm { .. } => "value parameter",
            DeclKind::TypeParm { .. } => "type parameter",
            DeclKind::Namespace { .. } => "namespace",
        }
    }
}
