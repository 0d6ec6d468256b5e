//! Term construction for the Tenon front end.
//!
//! The parser's semantic actions build terms bottom-up through a
//! [`Context`]: names and types first, then expressions and statements,
//! then declarations, and finally definitions attached to those
//! declarations.
//!
//! # Canonical terms
//!
//! Types and constraints are hash-consed. Building a structurally equal type
//! twice returns the same [`TypeId`](tenon_ir::TypeId), so type equality is
//! handle comparison. Constraints are interned through a structural hash
//! over their expression operands and confirmed by structural equivalence.
//!
//! # Errors
//!
//! Operations that can meet user mistakes or unfinished grammar coverage
//! return [`BuildResult`]. Broken invariants of the term model (a request
//! the parser can never legitimately make) panic through
//! [`invariant_violation`].

mod category;
mod config;
mod constraints;
mod context;
mod decls;
mod defs;
mod equiv;
mod error;
mod exprs;
mod linkage;
mod names;
mod reqs;
mod stmts;
mod table;
mod template;
mod tracing_setup;
mod types;

pub use config::BuildConfig;
pub use context::{Context, SharedContext};
pub use decls::FunctionBody;
pub use error::{invariant_violation, BuildError, BuildResult};
pub use template::{TemplateContext, TemplateHeader};
pub use tracing_setup::init_tracing;
