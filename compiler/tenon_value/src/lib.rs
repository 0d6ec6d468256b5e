//! Compile-time values for the Tenon constant evaluator.
//!
//! A [`Value`] is one of eight kinds: error, integer, float, function
//! reference, value reference, array, dynamic array and tuple. Aggregates
//! own their elements; copying a value copies its elements too.
//!
//! # Access
//!
//! Each kind has an extractor (`as_integer`, `as_array`, ...) that panics
//! when called on a value of another kind. Asking for the wrong kind is a
//! bug in the evaluator, not a property of the program being compiled.
//!
//! # Traversal
//!
//! Generic code walks values through [`ValueVisitor`] and [`ValueMutator`],
//! which have one method per kind. [`visit_with`] and [`mutate_with`] adapt
//! a single closure over a borrowed [`ValueView`] to either protocol.
//!
//! # References
//!
//! Reference values name storage in a [`ValueStore`] rather than pointing at
//! other values directly. A [`ValueRef`] is a slot plus an element path into
//! nested aggregates.

mod store;
mod value;
mod visit;
mod zero;

pub use store::{ValueRef, ValueStore};
pub use value::{Aggregate, Value, ValueKind};
pub use visit::{mutate_with, visit_with, ValueMutator, ValueView, ValueViewMut, ValueVisitor};
pub use zero::zero_initialize;
