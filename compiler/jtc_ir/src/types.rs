//! Resolved static types.
//!
//! `TypeNode` is what the resolver attaches to expressions and what the
//! target tree stores for fields, parameters and return types.

use std::fmt;

use smallvec::SmallVec;

/// Source-language primitive types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Primitive {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl Primitive {
    /// The source keyword for this primitive.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Char => "char",
            Self::Float => "float",
            Self::Double => "double",
        }
    }
}

/// A dotted, package-qualified name such as `java.lang.String`.
///
/// Segments are stored inline; most names have four or fewer.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct QualifiedName {
    segments: SmallVec<[String; 4]>,
}

impl QualifiedName {
    /// Split a dotted name into segments. Empty segments are dropped.
    pub fn parse(dotted: &str) -> Self {
        QualifiedName {
            segments: dotted
                .split('.')
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        QualifiedName {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The unqualified name (last segment).
    pub fn simple(&self) -> &str {
        self.segments.last().map_or("", String::as_str)
    }

    /// All segments except the last one.
    pub fn namespace(&self) -> &[String] {
        match self.segments.split_last() {
            Some((_, init)) => init,
            None => &[],
        }
    }

    /// `String` or `java.lang.String`.
    pub fn is_string(&self) -> bool {
        match self.segments.as_slice() {
            [only] => only == "String",
            [java, lang, string] => java == "java" && lang == "lang" && string == "String",
            _ => false,
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl fmt::Debug for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QualifiedName({self})")
    }
}

/// Element type of a `TypeNode`, before array dimensions are applied.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum BaseType {
    Void,
    Primitive(Primitive),
    Class(QualifiedName),
}

/// A resolved type: a base type plus a number of array dimensions.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeNode {
    pub base: BaseType,
    pub dims: u8,
}

impl TypeNode {
    pub fn void() -> Self {
        TypeNode {
            base: BaseType::Void,
            dims: 0,
        }
    }

    pub fn primitive(prim: Primitive) -> Self {
        TypeNode {
            base: BaseType::Primitive(prim),
            dims: 0,
        }
    }

    /// Class type from a dotted name.
    pub fn class(dotted: &str) -> Self {
        TypeNode {
            base: BaseType::Class(QualifiedName::parse(dotted)),
            dims: 0,
        }
    }

    pub fn string() -> Self {
        Self::class("java.lang.String")
    }

    #[must_use]
    pub fn with_dims(mut self, dims: u8) -> Self {
        self.dims = dims;
        self
    }

    /// The class name, for non-array class types.
    pub fn class_name(&self) -> Option<&QualifiedName> {
        match &self.base {
            BaseType::Class(name) if self.dims == 0 => Some(name),
            _ => None,
        }
    }

    /// Class types and every array type.
    pub fn is_reference(&self) -> bool {
        self.dims > 0 || matches!(self.base, BaseType::Class(_))
    }

    pub fn is_string(&self) -> bool {
        self.class_name().is_some_and(QualifiedName::is_string)
    }

    pub fn is_char(&self) -> bool {
        self.dims == 0 && self.base == BaseType::Primitive(Primitive::Char)
    }

    pub fn is_byte(&self) -> bool {
        self.dims == 0 && self.base == BaseType::Primitive(Primitive::Byte)
    }
}

impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.base {
            BaseType::Void => f.write_str("void")?,
            BaseType::Primitive(prim) => f.write_str(prim.keyword())?,
            BaseType::Class(name) => write!(f, "{name}")?,
        }
        for _ in 0..self.dims {
            f.write_str("[]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
