//! Traversal protocols.
//!
//! [`ValueVisitor`] reads a value, [`ValueMutator`] may change its payload
//! in place. Both have one method per kind, so adding a kind is a compile
//! error in every implementation until it is handled.
//!
//! Code that treats all kinds uniformly can skip the traits: [`visit_with`]
//! and [`mutate_with`] call one closure with a borrowed view of the payload.

use tenon_ir::DeclId;

use crate::{Aggregate, Value, ValueRef};

/// Read-only traversal of a [`Value`].
pub trait ValueVisitor {
    type Output;

    fn visit_error(&mut self) -> Self::Output;
    fn visit_integer(&mut self, n: i64) -> Self::Output;
    fn visit_float(&mut self, x: f64) -> Self::Output;
    fn visit_function(&mut self, decl: DeclId) -> Self::Output;
    fn visit_reference(&mut self, r: &ValueRef) -> Self::Output;
    fn visit_array(&mut self, a: &Aggregate) -> Self::Output;
    fn visit_dynarray(&mut self, a: &Aggregate) -> Self::Output;
    fn visit_tuple(&mut self, a: &Aggregate) -> Self::Output;
}

/// Mutating traversal of a [`Value`]. The kind itself cannot change.
pub trait ValueMutator {
    type Output;

    fn visit_error(&mut self) -> Self::Output;
    fn visit_integer(&mut self, n: &mut i64) -> Self::Output;
    fn visit_float(&mut self, x: &mut f64) -> Self::Output;
    fn visit_function(&mut self, decl: &mut DeclId) -> Self::Output;
    fn visit_reference(&mut self, r: &mut ValueRef) -> Self::Output;
    fn visit_array(&mut self, a: &mut Aggregate) -> Self::Output;
    fn visit_dynarray(&mut self, a: &mut Aggregate) -> Self::Output;
    fn visit_tuple(&mut self, a: &mut Aggregate) -> Self::Output;
}

impl Value {
    /// Dispatch to the visitor method for this value's kind.
    pub fn accept<V: ValueVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Value::Error => visitor.visit_error(),
            Value::Integer(n) => visitor.visit_integer(*n),
            Value::Float(x) => visitor.visit_float(*x),
            Value::Function(d) => visitor.visit_function(*d),
            Value::Reference(r) => visitor.visit_reference(r),
            Value::Array(a) => visitor.visit_array(a),
            Value::Dynarray(a) => visitor.visit_dynarray(a),
            Value::Tuple(a) => visitor.visit_tuple(a),
        }
    }

    /// Dispatch to the mutator method for this value's kind.
    pub fn accept_mut<M: ValueMutator>(&mut self, mutator: &mut M) -> M::Output {
        match self {
            Value::Error => mutator.visit_error(),
            Value::Integer(n) => mutator.visit_integer(n),
            Value::Float(x) => mutator.visit_float(x),
            Value::Function(d) => mutator.visit_function(d),
            Value::Reference(r) => mutator.visit_reference(r),
            Value::Array(a) => mutator.visit_array(a),
            Value::Dynarray(a) => mutator.visit_dynarray(a),
            Value::Tuple(a) => mutator.visit_tuple(a),
        }
    }
}

/// A borrowed payload, tagged by kind.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ValueView<'a> {
    Error,
    Integer(i64),
    Float(f64),
    Function(DeclId),
    Reference(&'a ValueRef),
    Array(&'a Aggregate),
    Dynarray(&'a Aggregate),
    Tuple(&'a Aggregate),
}

/// A mutably borrowed payload, tagged by kind.
#[derive(Debug)]
pub enum ValueViewMut<'a> {
    Error,
    Integer(&'a mut i64),
    Float(&'a mut f64),
    Function(&'a mut DeclId),
    Reference(&'a mut ValueRef),
    Array(&'a mut Aggregate),
    Dynarray(&'a mut Aggregate),
    Tuple(&'a mut Aggregate),
}

/// Adapts a closure over [`ValueView`] to [`ValueVisitor`].
struct ViewVisitor<F>(F);

impl<R, F: FnMut(ValueView<'_>) -> R> ValueVisitor for ViewVisitor<F> {
    type Output = R;

    fn visit_error(&mut self) -> R {
        (self.0)(ValueView::Error)
    }

    fn visit_integer(&mut self, n: i64) -> R {
        (self.0)(ValueView::Integer(n))
    }

    fn visit_float(&mut self, x: f64) -> R {
        (self.0)(ValueView::Float(x))
    }

    fn visit_function(&mut self, decl: DeclId) -> R {
        (self.0)(ValueView::Function(decl))
    }

    fn visit_reference(&mut self, r: &ValueRef) -> R {
        (self.0)(ValueView::Reference(r))
    }

    fn visit_array(&mut self, a: &Aggregate) -> R {
        (self.0)(ValueView::Array(a))
    }

    fn visit_dynarray(&mut self, a: &Aggregate) -> R {
        (self.0)(ValueView::Dynarray(a))
    }

    fn visit_tuple(&mut self, a: &Aggregate) -> R {
        (self.0)(ValueView::Tuple(a))
    }
}

/// Adapts a closure over [`ValueViewMut`] to [`ValueMutator`].
struct ViewMutator<F>(F);

impl<R, F: FnMut(ValueViewMut<'_>) -> R> ValueMutator for ViewMutator<F> {
    type Output = R;

    fn visit_error(&mut self) -> R {
        (self.0)(ValueViewMut::Error)
    }

    fn visit_integer(&mut self, n: &mut i64) -> R {
        (self.0)(ValueViewMut::Integer(n))
    }

    fn visit_float(&mut self, x: &mut f64) -> R {
        (self.0)(ValueViewMut::Float(x))
    }

    fn visit_function(&mut self, decl: &mut DeclId) -> R {
        (self.0)(ValueViewMut::Function(decl))
    }

    fn visit_reference(&mut self, r: &mut ValueRef) -> R {
        (self.0)(ValueViewMut::Reference(r))
    }

    fn visit_array(&mut self, a: &mut Aggregate) -> R {
        (self.0)(ValueViewMut::Array(a))
    }

    fn visit_dynarray(&mut self, a: &mut Aggregate) -> R {
        (self.0)(ValueViewMut::Dynarray(a))
    }

    fn visit_tuple(&mut self, a: &mut Aggregate) -> R {
        (self.0)(ValueViewMut::Tuple(a))
    }
}

/// Visit `value` with a single closure.
pub fn visit_with<R>(value: &Value, f: impl FnMut(ValueView<'_>) -> R) -> R {
    value.accept(&mut ViewVisitor(f))
}

/// Mutate `value` through a single closure.
pub fn mutate_with<R>(value: &mut Value, f: impl FnMut(ValueViewMut<'_>) -> R) -> R {
    value.accept_mut(&mut ViewMutator(f))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Counts scalar leaves.
    struct Leaves;

    impl ValueVisitor for Leaves {
        type Output = usize;

        fn visit_error(&mut self) -> usize {
            0
        }

        fn visit_integer(&mut self, _: i64) -> usize {
            1
        }

        fn visit_float(&mut self, _: f64) -> usize {
            1
        }

        fn visit_function(&mut self, _: DeclId) -> usize {
            1
        }

        fn visit_reference(&mut self, _: &ValueRef) -> usize {
            1
        }

        fn visit_array(&mut self, a: &Aggregate) -> usize {
            a.iter().map(|v| v.accept(self)).sum()
        }

        fn visit_dynarray(&mut self, a: &Aggregate) -> usize {
            self.visit_array(a)
        }

        fn visit_tuple(&mut self, a: &Aggregate) -> usize {
            self.visit_array(a)
        }
    }

    /// Negates every number.
    struct Negate;

    impl ValueMutator for Negate {
        type Output = ();

        fn visit_error(&mut self) {}

        fn visit_integer(&mut self, n: &mut i64) {
            *n = n.wrapping_neg();
        }

        fn visit_float(&mut self, x: &mut f64) {
            *x = -*x;
        }

        fn visit_function(&mut self, _: &mut DeclId) {}

        fn visit_reference(&mut self, _: &mut ValueRef) {}

        fn visit_array(&mut self, a: &mut Aggregate) {
            for v in a {
                v.accept_mut(self);
            }
        }

        fn visit_dynarray(&mut self, a: &mut Aggregate) {
            self.visit_array(a);
        }

        fn visit_tuple(&mut self, a: &mut Aggregate) {
            self.visit_array(a);
        }
    }

    fn sample() -> Value {
        Value::Tuple(Aggregate::from_values(vec![
            Value::from(1),
            Value::Error,
            Value::Array(Aggregate::from_values(vec![Value::from(2.5), Value::from(-3)])),
        ]))
    }

    #[test]
    fn visitor_dispatches_per_kind() {
        assert_eq!(sample().accept(&mut Leaves), 3);
        assert_eq!(Value::Error.accept(&mut Leaves), 0);
    }

    #[test]
    fn mutator_changes_payloads_in_place() {
        let mut v = sample();
        v.accept_mut(&mut Negate);
        assert_eq!(v.to_string(), "(-1, <error>, [-2.5, 3])");
    }

    #[test]
    fn closure_visitor() {
        let kind_name = |v: &Value| {
            visit_with(v, |view| match view {
                ValueView::Error => "error",
                ValueView::Integer(_) | ValueView::Float(_) => "number",
                ValueView::Function(_) | ValueView::Reference(_) => "pointer",
                ValueView::Array(_) | ValueView::Dynarray(_) | ValueView::Tuple(_) => "aggregate",
            })
        };
        assert_eq!(kind_name(&Value::from(1.0)), "number");
        assert_eq!(kind_name(&sample()), "aggregate");
        assert_eq!(kind_name(&Value::Function(DeclId::new(4))), "pointer");
    }

    #[test]
    fn closure_mutator() {
        let mut v = Value::from(41);
        let old = mutate_with(&mut v, |view| match view {
            ValueViewMut::Integer(n) => {
                let old = *n;
                *n += 1;
                Some(old)
            }
            _ => None,
        });
        assert_eq!(old, Some(41));
        assert_eq!(v, Value::Integer(42));
    }

    #[test]
    fn closure_state_persists_across_calls() {
        let mut seen = Vec::new();
        for v in [Value::from(1), Value::Error, Value::from(2)] {
            visit_with(&v, |view| seen.push(matches!(view, ValueView::Integer(_))));
        }
        assert_eq!(seen, vec![true, false, true]);
    }
}
