use super::*;
use crate::Context;
use tenon_ir::{BinaryOp, TypeId};

fn hash_of(cx: &Context, kind: &ConsKind) -> u64 {
    hash_cons(cx.arena(), kind)
}

#[test]
fn equivalent_constraints_hash_equally() {
    let mut cx = Context::new();
    let a = cx.make_int(3);
    let b = cx.make_int(3);
    let ka = ConsKind::Predicate(a);
    let kb = ConsKind::Predicate(b);
    assert!(cons_equivalent(cx.arena(), &ka, &kb));
    assert_eq!(hash_of(&cx, &ka), hash_of(&cx, &kb));
}

#[test]
fn literal_type_participates() {
    let mut cx = Context::new();
    let int = cx.get_int_type();
    let uint = cx.get_uint_type();
    let a = cx.make_integer(int, 3);
    let b = cx.make_integer(uint, 3);
    assert!(!exprs_equivalent(cx.arena(), a, b));
}

#[test]
fn spelled_names_of_id_expressions_are_ignored() {
    let mut cx = Context::new();
    let x = cx.get_id("x");
    let var = cx.make_variable_declaration(x, TypeId::BOOL, None);
    let r1 = cx.make_reference(var).unwrap_or_else(|e| panic!("{e}"));
    let r2 = cx.make_reference(var).unwrap_or_else(|e| panic!("{e}"));
    let (k1, k2) = (ConsKind::Predicate(r1), ConsKind::Predicate(r2));
    assert!(cons_equivalent(cx.arena(), &k1, &k2));
    assert_eq!(hash_of(&cx, &k1), hash_of(&cx, &k2));
}

#[test]
fn names_in_term_lists_compare_structurally() {
    let mut cx = Context::new();
    let c = cx.get_id("C");
    let concept = cx.make_concept_declaration(c, Vec::new());
    let n1 = cx.get_id("T");
    let n2 = cx.get_id("T");
    let n3 = cx.get_id("U");
    let k1 = ConsKind::Concept {
        concept,
        args: vec![Term::Name(n1)].into_boxed_slice(),
    };
    let k2 = ConsKind::Concept {
        concept,
        args: vec![Term::Name(n2)].into_boxed_slice(),
    };
    let k3 = ConsKind::Concept {
        concept,
        args: vec![Term::Name(n3)].into_boxed_slice(),
    };
    assert!(cons_equivalent(cx.arena(), &k1, &k2));
    assert_eq!(hash_of(&cx, &k1), hash_of(&cx, &k2));
    assert!(!cons_equivalent(cx.arena(), &k1, &k3));
}

#[test]
fn nested_expressions_recurse() {
    let mut cx = Context::new();
    let build = |cx: &mut Context, n: i64| {
        let a = cx.make_int(n);
        let b = cx.make_int(2);
        let sum = cx.make_binary(BinaryOp::Add, a, b);
        let arg = cx.make_int(0);
        let eq = cx.make_binary(BinaryOp::Eq, sum, arg);
        cx.make_not(eq)
    };
    let e1 = build(&mut cx, 1);
    let e2 = build(&mut cx, 1);
    let e3 = build(&mut cx, 7);
    assert!(exprs_equivalent(cx.arena(), e1, e2));
    assert!(!exprs_equivalent(cx.arena(), e1, e3));
    assert_eq!(
        hash_of(&cx, &ConsKind::Predicate(e1)),
        hash_of(&cx, &ConsKind::Predicate(e2))
    );
}

#[test]
fn requires_expressions_compare_requirements() {
    let mut cx = Context::new();
    let requires = |cx: &mut Context, ty: TypeId| {
        let e = cx.make_true();
        let req = cx.make_conversion_requirement(e, ty);
        cx.make_requires(Vec::new(), Vec::new(), vec![req])
    };
    let a = requires(&mut cx, TypeId::BOOL);
    let b = requires(&mut cx, TypeId::BOOL);
    let c = requires(&mut cx, TypeId::VOID);
    assert!(exprs_equivalent(cx.arena(), a, b));
    assert!(!exprs_equivalent(cx.arena(), a, c));
}

#[test]
fn different_kinds_are_never_equivalent() {
    let mut cx = Context::new();
    let e = cx.make_true();
    let pred = ConsKind::Predicate(e);
    let expr = ConsKind::Expression {
        expr: e,
        ty: TypeId::BOOL,
    };
    assert!(!cons_equivalent(cx.arena(), &pred, &expr));
}
