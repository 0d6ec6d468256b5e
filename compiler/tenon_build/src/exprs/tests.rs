#![allow(clippy::unwrap_used)]

use super::*;
use crate::TemplateContext;
use pretty_assertions::assert_eq;
use tenon_ir::ParmIndex;

#[test]
fn literals_and_their_types() {
    let mut cx = Context::new();
    let t = cx.make_true();
    let f = cx.make_false();
    assert_eq!(cx.arena().expr(t), &ExprKind::Boolean(true));
    assert_eq!(cx.arena().expr(f), &ExprKind::Boolean(false));
    assert_eq!(cx.expr_type(t), TypeId::BOOL);

    let int = cx.get_int_type();
    let uint = cx.get_uint_type();
    let n = cx.make_int(-3);
    let u = cx.make_uint(7);
    assert_eq!(cx.arena().expr(n), &ExprKind::Integer(-3));
    assert_eq!(cx.expr_type(n), int);
    assert_eq!(cx.expr_type(u), uint);

    let byte = cx.get_byte_type();
    let z = cx.make_zero(byte);
    assert_eq!(cx.arena().expr(z), &ExprKind::Integer(0));
    assert_eq!(cx.expr_type(z), byte);
}

#[test]
fn uint_keeps_bits() {
    let mut cx = Context::new();
    let max = cx.make_uint(u64::MAX);
    assert_eq!(cx.arena().expr(max), &ExprKind::Integer(-1));
}

#[test]
fn variable_reference_is_an_lvalue() {
    let mut cx = Context::new();
    let int = cx.get_int_type();
    let x = cx.get_id("x");
    let var = cx.make_variable_declaration(x, int, None);
    let r = cx.make_reference(var).unwrap();
    assert_eq!(cx.arena().expr(r), &ExprKind::Object { name: x, decl: var });
    let ref_int = cx.get_reference_type(int);
    assert_eq!(cx.expr_type(r), ref_int);
}

#[test]
fn function_reference_has_function_type() {
    let mut cx = Context::new();
    let int = cx.get_int_type();
    let a = cx.get_id("a");
    let parm = cx.make_object_parm(a, int);
    let name = cx.get_id("id");
    let f = cx.make_function_declaration(name, vec![parm], int, None);
    let r = cx.make_reference(f).unwrap();
    let fn_ty = cx.get_function_type_from(vec![int], int);
    assert_eq!(cx.expr_type(r), fn_ty);
}

#[test]
fn reference_to_a_class_is_an_error() {
    let mut cx = Context::new();
    let name = cx.get_id("S");
    let class = cx.make_type_declaration(name);
    let err = cx.make_reference(class).unwrap_err();
    assert_eq!(
        err.to_string(),
        "'S' is a class, not an object or function"
    );
}

#[test]
fn member_references() {
    let mut cx = Context::new();
    let int = cx.get_int_type();
    let s = cx.get_id("s");
    let obj_decl = cx.make_variable_declaration(s, TypeId::BOOL, None);
    let obj = cx.make_reference(obj_decl).unwrap();

    let n = cx.get_id("n");
    let field = cx.make_field_declaration(n, int, None);
    let access = cx.make_member_reference(obj, field).unwrap();
    assert_eq!(
        cx.arena().expr(access),
        &ExprKind::Field {
            object: obj,
            name: n,
            decl: field
        }
    );

    let m = cx.get_id("size");
    let method = cx.make_method_declaration(m, Vec::new(), int, None);
    let call = cx.make_member_reference(obj, method).unwrap();
    assert!(matches!(cx.arena().expr(call), ExprKind::Method { .. }));

    let err = cx.make_member_reference(obj, obj_decl).unwrap_err();
    assert_eq!(err.to_string(), "'s' is a variable, not a member");
}

#[test]
fn member_templates_are_members() {
    let mut cx = Context::new();
    let mut templates = TemplateContext::new();
    let int = cx.get_int_type();
    let s = cx.get_id("s");
    let obj_decl = cx.make_variable_declaration(s, TypeId::BOOL, None);
    let obj = cx.make_reference(obj_decl).unwrap();

    let t_name = cx.get_id("T");
    let t = cx.make_type_parm(ParmIndex::default(), t_name, None);
    templates.begin(vec![t]);
    let m = cx.get_id("m");
    let method = cx.make_method_declaration(m, Vec::new(), int, None);
    let tmpl = cx.templatize(&mut templates, method);
    assert!(matches!(cx.arena().decl(tmpl), DeclKind::Template { .. }));

    let access = cx.make_member_reference(obj, tmpl).unwrap();
    assert_eq!(
        cx.arena().expr(access),
        &ExprKind::Method {
            object: obj,
            name: m,
            decl: tmpl
        }
    );
}

#[test]
fn operators_compute_result_types() {
    let mut cx = Context::new();
    let int = cx.get_int_type();
    let x = cx.get_id("x");
    let var = cx.make_variable_declaration(x, int, None);
    let lhs = cx.make_reference(var).unwrap();
    let rhs = cx.make_int(2);

    let sum = cx.make_binary(BinaryOp::Add, lhs, rhs);
    let lt = cx.make_binary(BinaryOp::Lt, lhs, rhs);
    let neg = cx.make_unary(UnaryOp::Neg, lhs);
    let both = cx.make_and(lt, lt);
    let either = cx.make_or(both, lt);
    let not = cx.make_not(either);

    assert_eq!(cx.expr_type(sum), int);
    assert_eq!(cx.expr_type(neg), int);
    for e in [lt, both, either, not] {
        assert_eq!(cx.expr_type(e), TypeId::BOOL);
    }
}

#[test]
fn arithmetic_drops_qualifiers() {
    let mut cx = Context::new();
    let int = cx.get_int_type();
    let cint = cx.get_const_type(int);
    let x = cx.get_id("x");
    let var = cx.make_variable_declaration(x, cint, None);
    let r = cx.make_reference(var).unwrap();
    let bits = cx.make_unary(UnaryOp::BitNot, r);
    assert_eq!(cx.expr_type(bits), int);
}

#[test]
fn calls_take_the_return_type() {
    let mut cx = Context::new();
    let int = cx.get_int_type();
    let a = cx.get_id("a");
    let parm = cx.make_object_parm(a, int);
    let name = cx.get_id("pred");
    let f = cx.make_function_declaration(name, vec![parm], TypeId::BOOL, None);
    let arg = cx.make_int(1);
    let call = cx.make_call_function(f, vec![arg]).unwrap();
    assert_eq!(cx.expr_type(call), TypeId::BOOL);

    let err = cx.make_call_function(f, Vec::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "function takes 1 arguments but 0 were given"
    );

    let not_fn = cx.make_int(0);
    assert!(cx.make_call(not_fn, Vec::new()).is_err());
}

#[test]
fn checks_require_concepts() {
    let mut cx = Context::new();
    let c = cx.get_id("Regular");
    let concept = cx.make_concept_declaration(c, Vec::new());
    let check = cx
        .make_check(concept, vec![Term::Type(TypeId::BOOL)])
        .unwrap();
    assert_eq!(cx.expr_type(check), TypeId::BOOL);

    let v = cx.get_id("v");
    let var = cx.make_variable_declaration(v, TypeId::BOOL, None);
    let err = cx.make_check(var, Vec::new()).unwrap_err();
    assert_eq!(err.to_string(), "'v' does not name a concept");
}

#[test]
fn requires_and_synthesized_expressions() {
    let mut cx = Context::new();
    let t = cx.get_id("T");
    let tparm = cx.make_type_parm(tenon_ir::ParmIndex::default(), t, None);
    let ty = cx.get_typename_type(tparm);
    let a = cx.get_id("a");
    let parm = cx.make_object_parm(a, ty);
    let synth = cx.synthesize_expression(parm);
    assert_eq!(cx.expr_type(synth), ty);
    let req = cx.make_syntactic_requirement(synth);
    let requires = cx.make_requires(vec![tparm], vec![parm], vec![req]);
    assert_eq!(cx.expr_type(requires), TypeId::BOOL);
}

#[test]
fn initializers_carry_the_initialized_type() {
    let mut cx = Context::new();
    let int = cx.get_int_type();
    let one = cx.make_int(1);
    let trivial = cx.make_trivial_init(int);
    let copy = cx.make_copy_init(int, one);
    let bind = cx.make_bind_init(int, one);
    let agg = cx.make_aggregate_init(int, vec![one]);
    let direct = cx.make_direct_init(int, DeclId::INVALID, vec![one]);
    for e in [trivial, copy, bind, agg, direct] {
        assert!(cx.arena().expr(e).is_initializer());
        assert_eq!(cx.expr_type(e), int);
    }
}

#[test]
fn equivalence_looks_through_handles() {
    let mut cx = Context::new();
    let a = cx.make_int(4);
    let b = cx.make_int(4);
    let c = cx.make_int(5);
    assert_ne!(a, b);
    assert!(cx.is_equivalent_expr(a, b));
    assert!(!cx.is_equivalent_expr(a, c));

    let sa = cx.make_binary(BinaryOp::Mul, a, c);
    let sb = cx.make_binary(BinaryOp::Mul, b, c);
    let sc = cx.make_binary(BinaryOp::Add, b, c);
    assert!(cx.is_equivalent_expr(sa, sb));
    assert!(!cx.is_equivalent_expr(sa, sc));
}
