use std::collections::HashMap;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tenon_ir::DeclId;

use super::*;
use crate::ValueStore;

fn tuple(values: Vec<Value>) -> Value {
    Value::Tuple(Aggregate::from_values(values))
}

// === Extraction ===

#[test]
fn scalar_extractors() {
    assert_eq!(Value::from(7).as_integer(), 7);
    assert_eq!(Value::from(0.25).as_float().to_bits(), 0.25f64.to_bits());
    assert_eq!(Value::Function(DeclId::new(5)).as_function(), DeclId::new(5));
}

#[test]
fn aggregate_extractors() {
    let arr = Value::Array(Aggregate::from_values(vec![Value::from(1), Value::from(2)]));
    assert_eq!(arr.as_array().len(), 2);
    assert_eq!(arr.as_array()[1], Value::Integer(2));

    let dyn_arr = Value::Dynarray(Aggregate::new(3));
    assert_eq!(dyn_arr.as_dynarray().len(), 3);

    let t = tuple(vec![Value::from(1.0), Value::Error]);
    assert!(t.as_tuple()[1].is_error());
}

#[test]
fn mutable_extractors_write_through() {
    let mut n = Value::from(1);
    *n.as_integer_mut() += 41;
    assert_eq!(n, Value::Integer(42));

    let mut x = Value::from(1.0);
    *x.as_float_mut() *= 3.0;
    assert_eq!(x, Value::Float(3.0));

    let mut f = Value::Function(DeclId::new(1));
    *f.as_function_mut() = DeclId::new(2);
    assert_eq!(f.as_function(), DeclId::new(2));

    let mut t = tuple(vec![Value::from(1), Value::from(2)]);
    t.as_tuple_mut()[0] = Value::from(10);
    assert_eq!(t.to_string(), "(10, 2)");
}

#[test]
fn boolean_reads_integers() {
    assert!(Value::from(1).as_boolean());
    assert!(Value::from(-3).as_boolean());
    assert!(!Value::from(0).as_boolean());
}

#[test]
#[should_panic(expected = "value kind mismatch: expected integer, found float")]
fn integer_from_float_panics() {
    Value::from(1.0).as_integer();
}

#[test]
#[should_panic(expected = "value kind mismatch: expected integer, found float")]
fn boolean_from_float_panics() {
    Value::from(1.0).as_boolean();
}

#[test]
#[should_panic(expected = "value kind mismatch: expected array, found tuple")]
fn array_from_tuple_panics() {
    tuple(vec![]).as_array();
}

#[test]
#[should_panic(expected = "value kind mismatch: expected reference, found error")]
fn reference_from_error_panics() {
    Value::Error.as_reference();
}

#[test]
#[should_panic(expected = "value kind mismatch: expected dynarray, found array")]
fn mutable_dynarray_from_array_panics() {
    Value::Array(Aggregate::new(1)).as_dynarray_mut();
}

// === Queries and conversions ===

#[test]
fn kinds() {
    assert_eq!(Value::Error.kind(), ValueKind::Error);
    assert_eq!(Value::from(1u64).kind(), ValueKind::Integer);
    assert_eq!(Value::from(2usize).kind(), ValueKind::Integer);
    assert_eq!(Value::from(3i32).kind(), ValueKind::Integer);
    assert_eq!(Value::from(0.5).kind(), ValueKind::Float);
    assert_eq!(Value::Dynarray(Aggregate::default()).kind(), ValueKind::Dynarray);
    assert_eq!(ValueKind::Function.to_string(), "function");
}

#[test]
fn aggregate_queries() {
    let t = tuple(vec![Value::from(1)]);
    assert!(t.is_aggregate());
    assert_eq!(t.aggregate().map(Aggregate::len), Some(1));
    assert!(!Value::from(1).is_aggregate());
    assert_eq!(Value::from(1).aggregate(), None);
}

#[test]
fn unsigned_conversion_keeps_bits() {
    assert_eq!(Value::from(u64::MAX).as_integer(), -1);
}

// === Formatting ===

#[test]
fn display_scalars() {
    assert_eq!(Value::Error.to_string(), "<error>");
    assert_eq!(Value::from(-12).to_string(), "-12");
    assert_eq!(Value::from(1.5).to_string(), "1.5");
    assert_eq!(Value::Function(DeclId::new(9)).to_string(), "fn#9");
    assert_eq!(Value::Function(DeclId::INVALID).to_string(), "fn#null");
}

#[test]
fn display_aggregates() {
    let v = tuple(vec![
        Value::Array(Aggregate::from_values(vec![Value::from(1), Value::from(2)])),
        Value::Dynarray(Aggregate::from_values(vec![Value::from(3)])),
        tuple(vec![]),
    ]);
    assert_eq!(v.to_string(), "([1, 2], dyn[3], ())");
}

#[test]
fn display_references() {
    let mut store = ValueStore::new();
    store.alloc(Value::from(0));
    let r = store.alloc(Value::Array(Aggregate::new(4)));
    assert_eq!(store.reference(&r.element(3)).to_string(), "ref#1.3");
}

// === Equality and hashing ===

#[test]
fn structural_equality() {
    let a = tuple(vec![Value::from(1), Value::from(2.0)]);
    let b = tuple(vec![Value::from(1), Value::from(2.0)]);
    assert_eq!(a, b);
    assert_ne!(a, tuple(vec![Value::from(1), Value::from(2)]));
}

#[test]
fn same_elements_different_aggregate_kind() {
    let elems = || Aggregate::from_values(vec![Value::from(1)]);
    assert_ne!(Value::Array(elems()), Value::Dynarray(elems()));
    assert_ne!(Value::Array(elems()), Value::Tuple(elems()));
}

#[test]
fn floats_compare_by_bits() {
    assert_eq!(Value::from(f64::NAN), Value::from(f64::NAN));
    assert_ne!(Value::from(0.0), Value::from(-0.0));
}

#[test]
fn values_key_hash_maps() {
    let mut seen: HashMap<Value, usize> = HashMap::new();
    for v in [
        Value::from(1),
        tuple(vec![Value::from(1)]),
        Value::from(1),
        tuple(vec![Value::from(1)]),
        Value::from(1.0),
    ] {
        *seen.entry(v).or_default() += 1;
    }
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[&Value::from(1)], 2);
    assert_eq!(seen[&tuple(vec![Value::from(1)])], 2);
}

#[test]
fn clone_is_deep() {
    let original = tuple(vec![Value::from(1)]);
    let mut copy = original.clone();
    copy.as_tuple_mut()[0] = Value::from(2);
    assert_eq!(original.to_string(), "(1)");
    assert_eq!(copy.to_string(), "(2)");
}

// === Aggregates ===

#[test]
fn new_aggregate_is_filled_with_errors() {
    let a = Aggregate::new(3);
    assert_eq!(a.len(), 3);
    assert!(a.iter().all(Value::is_error));
    assert!(Aggregate::new(0).is_empty());
}

#[test]
fn bytes_and_strings() {
    let a = Aggregate::from_bytes(b"hi");
    assert_eq!(a.as_slice(), &[Value::Integer(104), Value::Integer(105)]);
    assert_eq!(a.as_string().as_deref(), Some("hi"));
}

#[test]
fn as_string_rejects_non_bytes() {
    let wide = Aggregate::from_values(vec![Value::from(300)]);
    assert_eq!(wide.as_string(), None);
    let float = Aggregate::from_values(vec![Value::from(65.0)]);
    assert_eq!(float.as_string(), None);
    let invalid = Aggregate::from_bytes(&[0xff]);
    assert_eq!(invalid.as_string(), None);
}

// === Properties ===

proptest! {
    #[test]
    fn integer_round_trip(n in any::<i64>()) {
        let v = Value::from(n);
        prop_assert_eq!(v.as_integer(), n);
        prop_assert_eq!(v.as_boolean(), n != 0);
        prop_assert_eq!(v.to_string(), n.to_string());
    }

    #[test]
    fn byte_strings_recover_their_text(s in "[ -~]{0,16}") {
        prop_assert_eq!(Aggregate::from_bytes(s.as_bytes()).as_string(), Some(s));
    }
}
