use super::*;
use pretty_assertions::assert_eq;

#[test]
fn qualified_name_segments() {
    let name = QualifiedName::parse("java.lang.String");
    assert_eq!(name.segments(), ["java", "lang", "String"]);
    assert_eq!(name.simple(), "String");
    assert_eq!(name.namespace(), ["java", "lang"]);
    assert_eq!(name.to_string(), "java.lang.String");
}

#[test]
fn qualified_name_unqualified() {
    let name = QualifiedName::parse("Point");
    assert_eq!(name.simple(), "Point");
    assert!(name.namespace().is_empty());
}

#[test]
fn string_detection() {
    assert!(TypeNode::string().is_string());
    assert!(TypeNode::class("String").is_string());
    assert!(!TypeNode::class("my.pkg.String").is_string());
    assert!(!TypeNode::string().with_dims(1).is_string());
}

#[test]
fn reference_and_primitive() {
    let int = TypeNode::primitive(Primitive::Int);
    assert!(!int.is_reference());
    assert!(int.clone().with_dims(2).is_reference());
    assert!(TypeNode::class("Point").is_reference());
    assert!(!TypeNode::void().is_reference());
}

#[test]
fn char_and_byte() {
    assert!(TypeNode::primitive(Primitive::Char).is_char());
    assert!(!TypeNode::primitive(Primitive::Char).with_dims(1).is_char());
    assert!(TypeNode::primitive(Primitive::Byte).is_byte());
}

#[test]
fn primitive_keywords() {
    assert_eq!(Primitive::Boolean.keyword(), "boolean");
    assert_eq!(Primitive::Char.keyword(), "char");
    assert_eq!(Primitive::Double.keyword(), "double");
}

#[test]
fn type_display() {
    assert_eq!(TypeNode::primitive(Primitive::Int).with_dims(2).to_string(), "int[][]");
    assert_eq!(TypeNode::class("a.B").to_string(), "a.B");
}
