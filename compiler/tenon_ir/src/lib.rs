//! Tenon IR - the term model of the front end.
//!
//! Every node of the abstract syntax belongs to exactly one category:
//! - Names (`NameKind`, addressed by `NameId`)
//! - Types (`TypeKind`, addressed by `TypeId`)
//! - Expressions (`ExprKind`, addressed by `ExprId`)
//! - Statements (`StmtKind`, addressed by `StmtId`)
//! - Declarations (`DeclKind`, addressed by `DeclId`)
//! - Definitions (`DefKind`, addressed by `DefId`)
//! - Requirements (`ReqKind`, addressed by `ReqId`)
//! - Constraints (`ConsKind`, addressed by `ConsId`)
//!
//! # Canonical and per-occurrence categories
//!
//! Types and constraints are value-like: the factory in `tenon_build`
//! interns them, so two structurally equal terms share one handle.
//! Everything else lives in the [`TermArena`] and each construction yields
//! a fresh handle, because declarations and expressions carry identity of
//! their own.
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: children are 32-bit handles, never `Box<Node>`
//! - **Intern Everything**: strings become [`Symbol`], types become [`TypeId`]

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
mod cons;
mod decl;
mod def;
mod expr;
mod ids;
mod name;
mod req;
mod stmt;
mod symbol;
mod term;
mod ty;

pub use arena::TermArena;
pub use cons::ConsKind;
pub use decl::{DeclKind, FunctionFlavor, ParmIndex};
pub use def::DefKind;
pub use expr::{BinaryOp, ExprKind, UnaryOp};
pub use ids::{ConsId, DeclId, DefId, ExprId, NameId, ReqId, StmtId, TypeId};
pub use name::{NameKind, OperatorKind};
pub use req::ReqKind;
pub use stmt::StmtKind;
pub use symbol::{Symbol, SymbolTable};
pub use term::Term;
pub use ty::{Qualifiers, TypeKind};

// Size assertions to prevent accidental regressions.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{NameId, Term, TypeId};
    static_assert_size!(TypeId, 4);
    static_assert_size!(NameId, 4);
    // Discriminant + one 32-bit handle.
    static_assert_size!(Term, 8);
}
