//! Requirements of requires-expressions and concept bodies.

use tenon_ir::{ExprId, ReqId, ReqKind, TypeId};

use crate::Context;

impl Context {
    /// `{ expr } -> ty;` where `expr` must have exactly type `ty`.
    pub fn make_basic_requirement(&mut self, expr: ExprId, ty: TypeId) -> ReqId {
        self.arena.push_req(ReqKind::Basic { expr, ty })
    }

    /// `{ expr } -> ty;` where `expr` must convert to `ty`.
    pub fn make_conversion_requirement(&mut self, expr: ExprId, ty: TypeId) -> ReqId {
        self.arena.push_req(ReqKind::Conversion { expr, ty })
    }

    /// `expr;` where `expr` must merely be well-formed.
    pub fn make_syntactic_requirement(&mut self, expr: ExprId) -> ReqId {
        self.arena.push_req(ReqKind::Syntactic(expr))
    }
}

#[cfg(test)]
mod tests {
    use crate::Context;
    use tenon_ir::{ReqKind, TypeId};

    #[test]
    fn requirements_keep_their_operands() {
        let mut cx = Context::new();
        let e = cx.make_true();
        let basic = cx.make_basic_requirement(e, TypeId::BOOL);
        let conv = cx.make_conversion_requirement(e, TypeId::BOOL);
        let syn = cx.make_syntactic_requirement(e);

        assert_eq!(
            cx.arena().req(basic),
            &ReqKind::Basic {
                expr: e,
                ty: TypeId::BOOL
            }
        );
        assert!(matches!(cx.arena().req(conv), ReqKind::Conversion { .. }));
        assert_eq!(cx.arena().req(syn).expr(), e);
        assert_ne!(basic, cx.make_basic_requirement(e, TypeId::BOOL));
    }
}
