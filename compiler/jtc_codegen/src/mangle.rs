//! Name mangling for generated C++.
//!
//! Source classes become a handle type `pkg::T` and a struct `pkg::__T`;
//! overloaded methods get a suffix built from their parameter types.

use jtc_ir::{BaseType, Primitive, QualifiedName, TypeNode};

/// Canonical C++ names for source-level entities.
pub trait Mangler {
    /// Handle type of a class: `a::b::C`.
    fn type_name(&self, name: &QualifiedName) -> String;

    /// Struct type of a class: `a::b::__C`.
    fn class_type_name(&self, name: &QualifiedName) -> String;

    /// C++ spelling of a primitive.
    fn primitive(&self, prim: Primitive) -> &'static str;

    /// Symbol of a method with the given parameter types.
    fn method_symbol(&self, name: &str, params: &[TypeNode]) -> String;

    /// Full type reference: primitives, handles and nested array pointers.
    fn type_ref(&self, ty: &TypeNode) -> String {
        let mut out = match &ty.base {
            BaseType::Void => "void".to_string(),
            BaseType::Primitive(prim) => self.primitive(*prim).to_string(),
            BaseType::Class(name) => self.type_name(name),
        };
        for _ in 0..ty.dims {
            out = format!("__rt::Ptr<__rt::Array<{out}> >");
        }
        out
    }
}

/// The default scheme.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultMangler;

impl DefaultMangler {
    fn param_tag(ty: &TypeNode) -> String {
        let mut tag = match &ty.base {
            BaseType::Void => "void".to_string(),
            BaseType::Primitive(prim) => prim.keyword().to_string(),
            BaseType::Class(name) => name.simple().to_string(),
        };
        for _ in 0..ty.dims {
            tag.push_str("Array");
        }
        tag
    }
}

impl Mangler for DefaultMangler {
    fn type_name(&self, name: &QualifiedName) -> String {
        name.segments().join("::")
    }

    fn class_type_name(&self, name: &QualifiedName) -> String {
        let mut out = String::new();
        for segment in name.namespace() {
            out.push_str(segment);
            out.push_str("::");
        }
        out.push_str("__");
        out.push_str(name.simple());
        out
    }

    fn primitive(&self, prim: Primitive) -> &'static str {
        match prim {
            Primitive::Boolean => "bool",
            Primitive::Byte => "int8_t",
            Primitive::Short => "int16_t",
            Primitive::Int => "int32_t",
            Primitive::Long => "int64_t",
            Primitive::Char => "char",
            Primitive::Float => "float",
            Primitive::Double => "double",
        }
    }

    fn method_symbol(&self, name: &str, params: &[TypeNode]) -> String {
        if params.is_empty() {
            return name.to_string();
        }
        let mut symbol = name.to_string();
        for param in params {
            symbol.push('_');
            symbol.push_str(&Self::param_tag(param));
        }
        symbol
    }
}
