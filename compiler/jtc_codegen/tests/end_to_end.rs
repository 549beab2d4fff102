//! End-to-end tests: build a target tree with `TreeBuilder`, link the
//! hierarchy and generate the full translation unit.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use jtc_codegen::{
    generate_cpp, CodeGenerator, CodegenConfig, DefaultMangler, Emitter, NoStaticInit,
    StringEmitter, WriterEmitter,
};
use jtc_ir::{
    AssignOp, Expr, ExprKind, IdentKind, Primitive, SourceArena, Stmt, StmtKind, TypeNode,
};
use jtc_target::{ClassHierarchy, TargetTree, TreeBuilder, ROOT_CLASS};
use pretty_assertions::assert_eq;

fn int() -> TypeNode {
    TypeNode::primitive(Primitive::Int)
}

/// `class Point { int x; int y; int getX() { return x; } }`
fn point(arena: &mut SourceArena, builder: &mut TreeBuilder) {
    let class = builder.add_class("Point", None);
    builder.add_field("x", int(), class);
    builder.add_field("y", int(), class);

    let x = arena.alloc_expr(
        Expr::new(ExprKind::Ident("x".into()))
            .with_type(int())
            .with_ident(IdentKind::InstanceField),
    );
    let ret = arena.alloc_stmt(Stmt::new(StmtKind::Return(Some(x))));
    let get_x = builder.add_method("getX", int(), class);
    builder.add_method_instruction(ret, get_x);
}

/// `class ColorPoint extends Point { ColorPoint(int x) { this.x = x; } }`
fn color_point(arena: &mut SourceArena, builder: &mut TreeBuilder) {
    let class = builder.add_class("ColorPoint", Some(TypeNode::class("Point")));
    let field = arena.alloc_expr(
        Expr::new(ExprKind::Ident("x".into()))
            .with_type(int())
            .with_ident(IdentKind::InstanceField),
    );
    let param = arena.alloc_expr(
        Expr::new(ExprKind::Ident("x".into()))
            .with_type(int())
            .with_ident(IdentKind::Local),
    );
    let assign = arena.alloc_expr(Expr::new(ExprKind::Assign {
        op: AssignOp::Assign,
        target: field,
        value: param,
    }));
    let stmt = arena.alloc_stmt(Stmt::new(StmtKind::Expr(assign)));

    let ctor = builder.add_constructor(class);
    builder.add_constructor_parameter(int(), "x", ctor);
    builder.add_constructor_instruction(stmt, ctor);
}

fn linked(arena: &mut SourceArena) -> TargetTree {
    let mut builder = TreeBuilder::new();
    // Child first: linking orders by depth, not declaration.
    color_point(arena, &mut builder);
    point(arena, &mut builder);
    let index = ClassHierarchy::from_tree(builder.tree());
    builder.link_hierarchy(&index);
    builder.finish()
}

const POINT_CPP: &str = r#"#include <iostream>
#include <sstream>
#include <string>
#include "out.h"

java::lang::Class __Point::__class() {
  static java::lang::Class k = new java::lang::__Class(__rt::literal("Point"), java::lang::__Object::__class());
  return k;
}

__Point_VT __Point::__vtable;

__Point::__Point() : __vptr(&__vtable) {}

int32_t __Point::getX(Point __this) {
  return __this->x;
}

"#;

#[test]
fn point_translation_unit() {
    let mut arena = SourceArena::new();
    let mut builder = TreeBuilder::new();
    point(&mut arena, &mut builder);
    let tree = builder.finish();

    let point = tree.get_class("Point").unwrap();
    let inherited: Vec<_> = tree
        .inherited_methods(point)
        .map(|m| (m.name.as_str(), m.origin.as_ref().map(ToString::to_string)))
        .collect();
    assert_eq!(
        inherited,
        vec![
            ("hashCode", Some(ROOT_CLASS.to_string())),
            ("equals", Some(ROOT_CLASS.to_string())),
            ("getClass", Some(ROOT_CLASS.to_string())),
            ("toString", Some(ROOT_CLASS.to_string())),
        ]
    );

    let cpp = generate_cpp(&tree, &arena).unwrap();
    assert_eq!(cpp, POINT_CPP);
}

#[test]
fn subclass_after_linking() {
    let mut arena = SourceArena::new();
    let tree = linked(&mut arena);

    let color = tree.get_class("ColorPoint").unwrap();
    let index = tree.get_inherited_method_index("getX", color).unwrap();
    let get_x = tree.inherited_methods(color).nth(index).unwrap();
    assert_eq!(get_x.origin.as_ref().map(ToString::to_string).as_deref(), Some("Point"));
    assert!(get_x.body.is_empty());

    let cpp = generate_cpp(&tree, &arena).unwrap();
    let expected = r#"java::lang::Class __ColorPoint::__class() {
  static java::lang::Class k = new java::lang::__Class(__rt::literal("ColorPoint"), __Point::__class());
  return k;
}

__ColorPoint_VT __ColorPoint::__vtable;

__ColorPoint::__ColorPoint(int32_t x) : __vptr(&__vtable) {
  this->x = x;
}

"#;
    assert!(cpp.contains(expected), "{cpp}");
    // Declaration order is kept; inherited entries are never emitted.
    assert!(cpp.find("__ColorPoint::__class()") < cpp.find("__Point::__class() {"));
    assert_eq!(cpp.matches("getX").count(), 1);
}

#[test]
fn writer_emitter_matches_string_output() {
    let mut arena = SourceArena::new();
    let tree = linked(&mut arena);
    let expected = generate_cpp(&tree, &arena).unwrap();

    let config = CodegenConfig::default();
    let mut statics = NoStaticInit;
    let mut generator = CodeGenerator::new(
        &tree,
        &arena,
        &DefaultMangler,
        &mut statics,
        &config,
        WriterEmitter::new(Vec::new()),
    );
    generator.generate().unwrap();
    let mut emitter = generator.into_emitter();
    assert_eq!(emitter.pending_len(), 0);
    emitter.checkpoint().unwrap();
    let bytes = emitter.finish().unwrap();
    assert_eq!(String::from_utf8(bytes).unwrap(), expected);
}

#[test]
fn custom_header() {
    let mut arena = SourceArena::new();
    let mut builder = TreeBuilder::new();
    point(&mut arena, &mut builder);
    let tree = builder.finish();

    let config = CodegenConfig::with_header("point.h");
    let mut statics = NoStaticInit;
    let mut generator = CodeGenerator::new(
        &tree,
        &arena,
        &DefaultMangler,
        &mut statics,
        &config,
        StringEmitter::new(),
    );
    generator.generate().unwrap();
    let cpp = generator.into_emitter().output();
    assert!(cpp.starts_with(
        "#include <iostream>\n#include <sstream>\n#include <string>\n#include \"point.h\"\n\n"
    ));
}

#[test]
fn empty_tree_has_only_preamble() {
    let tree = TreeBuilder::new().finish();
    let cpp = generate_cpp(&tree, &SourceArena::new()).unwrap();
    assert_eq!(
        cpp,
        "#include <iostream>\n#include <sstream>\n#include <string>\n#include \"out.h\"\n\n"
    );
}
