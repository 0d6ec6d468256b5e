//! Zero-initialization.

use tenon_ir::DeclId;

use crate::{Aggregate, Value, ValueMutator, ValueRef};

/// Resets every scalar in a value to zero while keeping its shape.
struct Zero;

impl Zero {
    fn elements(&mut self, a: &mut Aggregate) {
        for v in a {
            v.accept_mut(self);
        }
    }
}

impl ValueMutator for Zero {
    type Output = ();

    fn visit_error(&mut self) {}

    fn visit_integer(&mut self, n: &mut i64) {
        *n = 0;
    }

    fn visit_float(&mut self, x: &mut f64) {
        *x = 0.0;
    }

    fn visit_function(&mut self, decl: &mut DeclId) {
        *decl = DeclId::INVALID;
    }

    fn visit_reference(&mut self, r: &mut ValueRef) {
        *r = ValueRef::null();
    }

    fn visit_array(&mut self, a: &mut Aggregate) {
        self.elements(a);
    }

    fn visit_dynarray(&mut self, a: &mut Aggregate) {
        self.elements(a);
    }

    fn visit_tuple(&mut self, a: &mut Aggregate) {
        self.elements(a);
    }
}

/// Zero-initialize `value` in place.
///
/// Integers become `0`, floats `0.0`, functions the invalid declaration and
/// references null. Aggregates keep their length and kind and have each
/// element zeroed. Error values stay errors.
pub fn zero_initialize(value: &mut Value) {
    tracing::trace!(kind = %value.kind(), "zero-initializing value");
    value.accept_mut(&mut Zero);
}
