//! Canonical root-object protocol.
//!
//! Every class whose parent is the root type sees these four signatures in
//! its inherited set, tagged to the root.

use jtc_ir::{Param, Primitive, QualifiedName, TypeNode};

use crate::MethodDecl;

/// Dotted name of the root type.
pub const ROOT_CLASS: &str = "java.lang.Object";

/// Names of the protocol methods, in seeding order.
pub const OBJECT_METHODS: [&str; 4] = ["hashCode", "equals", "getClass", "toString"];

/// The root type every parentless class extends.
pub fn generate_object_type() -> TypeNode {
    TypeNode::class(ROOT_CLASS)
}

/// Inherited entries for the root protocol, in seeding order.
pub fn generate_object_methods() -> Vec<MethodDecl> {
    let root = QualifiedName::parse(ROOT_CLASS);
    vec![
        MethodDecl::new("hashCode", TypeNode::primitive(Primitive::Int)).from_class(root.clone()),
        MethodDecl::new("equals", TypeNode::primitive(Primitive::Boolean))
            .with_param(Param::new("obj", generate_object_type()))
            .from_class(root.clone()),
        MethodDecl::new("getClass", TypeNode::class("java.lang.Class")).from_class(root.clone()),
        MethodDecl::new("toString", TypeNode::string()).from_class(root),
    ]
}

/// True when `ty` names the root type, qualified or as `Object`.
pub(crate) fn is_root(ty: &TypeNode) -> bool {
    ty.class_name().is_some_and(|name| match name.segments() {
        [only] => only == "Object",
        _ => name.to_string() == ROOT_CLASS,
    })
}
