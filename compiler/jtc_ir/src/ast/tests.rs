use super::*;
use crate::{ExprId, Primitive, SourceArena, StmtId, TypeNode};
use pretty_assertions::assert_eq;

#[test]
fn test_expr_annotations() {
    let expr = Expr::new(ExprKind::Ident("x".into()))
        .with_type(TypeNode::primitive(Primitive::Int))
        .with_ident(IdentKind::Local);
    assert_eq!(expr.ty, Some(TypeNode::primitive(Primitive::Int)));
    assert_eq!(expr.ident, Some(IdentKind::Local));
}

#[test]
fn test_arena_ids_are_sequential() {
    let mut arena = SourceArena::new();
    let a = arena.alloc_expr(Expr::new(ExprKind::Literal(Literal::Int("1".into()))));
    let b = arena.alloc_expr(Expr::new(ExprKind::This));
    assert_eq!(a, ExprId::new(0));
    assert_eq!(b, ExprId::new(1));
    assert!(matches!(arena.get_expr(b).map(|e| &e.kind), Some(ExprKind::This)));
}

#[test]
fn test_arena_rejects_foreign_ids() {
    let arena = SourceArena::new();
    assert!(arena.get_expr(ExprId::INVALID).is_none());
    assert!(arena.get_stmt(StmtId::new(3)).is_none());
}

#[test]
fn test_binary_symbols() {
    assert_eq!(BinaryOp::Add.as_symbol(), "+");
    assert_eq!(BinaryOp::UShr.as_symbol(), ">>");
}

#[test]
fn test_describe_names_the_node() {
    let call = Expr::new(ExprKind::Call(CallExpr::new(None, "getX", Vec::new())));
    assert_eq!(call.describe(), "call `getX`");
    let sel = Expr::new(ExprKind::Select {
        target: ExprId::new(0),
        member: "out".into(),
    });
    assert_eq!(sel.describe(), "selection `.out`");
}

#[test]
fn test_local_decl_single() {
    let decl = LocalDecl::single(TypeNode::primitive(Primitive::Int), "i", None);
    assert_eq!(decl.declarators.len(), 1);
    assert_eq!(decl.declarators[0].name, "i");
}
