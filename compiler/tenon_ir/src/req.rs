//! Requirements of a requires-expression or concept body.

use crate::{ExprId, TypeId};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ReqKind {
    /// `e` is valid and has type `ty`.
    Basic { expr: ExprId, ty: TypeId },
    /// `e` is valid and converts to `ty`.
    Conversion { expr: ExprId, ty: TypeId },
    /// `e` is valid.
    Syntactic(ExprId),
}

impl ReqKind {
    pub const fn expr(&self) -> ExprId {
        match self {
            ReqKind::Basic { expr, .. } | ReqKind::Conversion { expr, .. } => *expr,
            ReqKind::Syntactic(expr) => *expr,
        }
    }
}
