//! End-to-end construction through the public API.

#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use tenon_build::{init_tracing, BuildConfig, BuildError, Context, SharedContext, TemplateContext};
use tenon_ir::{DeclKind, DefKind, ParmIndex, Qualifiers, Term, TypeId, TypeKind};

#[test]
fn integer_pointer_and_qualifiers() {
    let mut cx = Context::new();

    let a = cx.get_integer_type(true, 32);
    let b = cx.get_integer_type(true, 32);
    assert_eq!(a, b);

    let ptr = cx.get_pointer_type(a);
    assert!(cx.is_value_type(ptr));

    let c = cx.get_const_type(ptr);
    let cv = cx.get_volatile_type(c);
    assert_eq!(
        cx.type_kind(cv),
        &TypeKind::Qualified {
            base: ptr,
            quals: Qualifiers::CONST | Qualifiers::VOLATILE
        }
    );
    assert!(cx.is_value_type(cv));
}

/// `template<typename T> requires Eq<T> bool same(T a, T b) { return a == b; }`
#[test]
fn constrained_function_template() {
    let mut cx = Context::new();
    let mut templates = TemplateContext::new();

    let eq_name = cx.get_id("Eq");
    let u_name = cx.get_id("U");
    let u = cx.make_type_parm(ParmIndex::default(), u_name, None);
    let eq = cx.make_concept_declaration(eq_name, vec![u]);
    let eq = cx.templatize(&mut templates, eq);
    let always = cx.make_true();
    cx.define_concept(eq, always);

    let t_name = cx.get_id("T");
    let t = cx.make_type_parm(ParmIndex::default(), t_name, None);
    templates.begin(vec![t]);
    let t_ty = cx.get_typename_type(t);
    let check = cx.make_check(eq, vec![Term::Type(t_ty)]).unwrap();
    templates.constrain(check);

    let a_name = cx.get_id("a");
    let b_name = cx.get_id("b");
    let a = cx.make_object_parm(a_name, t_ty);
    let b = cx.make_object_parm(b_name, t_ty);
    let same = cx.get_id("same");
    let f = cx.make_function_declaration(same, vec![a, b], TypeId::BOOL, None);
    let tmpl = cx.templatize(&mut templates, f);
    assert!(!templates.is_pending());

    let ra = cx.make_reference(a).unwrap();
    let rb = cx.make_reference(b).unwrap();
    let cmp = cx.make_binary(tenon_ir::BinaryOp::Eq, ra, rb);
    let ret = cx.make_return_statement(cmp);
    let body = cx.make_compound_statement(vec![ret]);
    let def = cx.define_function(tmpl, body);

    assert_eq!(cx.definition_of(f), def);
    assert_eq!(cx.arena().def(def), &DefKind::Function(body));
    let DeclKind::Template { cons, decl, .. } = cx.arena().decl(tmpl) else {
        panic!("not a template");
    };
    assert_eq!((*decl, *cons), (f, Some(check)));

    let call_arg = cx.make_int(1);
    let err = cx.make_call_function(f, vec![call_arg]).unwrap_err();
    assert_eq!(err, BuildError::semantic("function takes 2 arguments but 1 were given"));
}

#[test]
fn shared_context_interns_once() {
    let shared = SharedContext::new(Context::new());
    let workers: Vec<_> = (0..8)
        .map(|i| {
            let shared = shared.clone();
            std::thread::spawn(move || {
                let mut cx = shared.lock();
                let int = cx.get_integer_type(i % 2 == 0, 64);
                cx.get_pointer_type(int)
            })
        })
        .collect();
    let mut distinct: Vec<TypeId> = workers
        .into_iter()
        .map(|w| w.join().unwrap())
        .collect();
    distinct.sort();
    distinct.dedup();
    assert_eq!(distinct.len(), 2);
}

#[test]
fn environment_configured_context() {
    init_tracing();
    init_tracing();

    let config = BuildConfig::from_env();
    let precision = config.int_precision;
    let mut cx = Context::with_config(config);
    let int = cx.get_int_type();
    assert_eq!(
        cx.type_kind(int),
        &TypeKind::Integer {
            signed: true,
            precision
        }
    );
}
