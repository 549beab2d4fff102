//! Target declaration tree.
//!
//! `TargetTree` is the compilation unit: directives, forward struct
//! declarations and classes in emission order. It is assembled by
//! [`TreeBuilder`](crate::TreeBuilder) and read by the code generator.

use jtc_ir::{Param, QualifiedName, StmtId, TypeNode};
use rustc_hash::FxHashMap;

use crate::{ClassId, CtorId, MethodId};

/// An include directive of the generated header.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Include {
    /// `#include "name.h"`
    Quoted(String),
    /// `#include <name>`
    Angle(String),
}

/// Directives block of the compilation unit.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Directives {
    pub pragmas: Vec<String>,
    pub includes: Vec<Include>,
}

impl Default for Directives {
    fn default() -> Self {
        Directives {
            pragmas: vec!["once".to_string()],
            includes: vec![
                Include::Quoted("java_lang".to_string()),
                Include::Angle("stdint".to_string()),
            ],
        }
    }
}

/// Forward declaration of a class struct.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct StructDecl {
    pub name: String,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FieldDecl {
    pub name: String,
    pub ty: TypeNode,
}

/// A method entry: either implemented by its class or an inherited copy.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct MethodDecl {
    pub name: String,
    pub return_type: TypeNode,
    pub params: Vec<Param>,
    pub body: Vec<StmtId>,
    pub is_static: bool,
    /// Provenance tag: the class that defines this method. Only inherited
    /// entries carry one.
    pub origin: Option<QualifiedName>,
}

impl MethodDecl {
    pub fn new(name: impl Into<String>, return_type: TypeNode) -> Self {
        MethodDecl {
            name: name.into(),
            return_type,
            params: Vec::new(),
            body: Vec::new(),
            is_static: false,
            origin: None,
        }
    }

    /// Inherited entry tagged with its defining class.
    #[must_use]
    pub fn from_class(mut self, origin: QualifiedName) -> Self {
        self.origin = Some(origin);
        self
    }

    #[must_use]
    pub fn with_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct ConstructorDecl {
    /// `None` until a parameter is added or the list is set.
    pub params: Option<Vec<Param>>,
    pub body: Vec<StmtId>,
}

impl ConstructorDecl {
    pub fn params(&self) -> &[Param] {
        self.params.as_deref().unwrap_or_default()
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ClassDecl {
    pub name: QualifiedName,
    /// Exactly one parent; the root type when none was given.
    pub parent: TypeNode,
    pub constructors: Vec<CtorId>,
    pub fields: Vec<FieldDecl>,
    pub implemented: Vec<MethodId>,
    pub inherited: Vec<MethodId>,
}

/// The compilation unit.
#[derive(Clone, Debug, Default)]
pub struct TargetTree {
    pub(crate) directives: Directives,
    pub(crate) declarations: Vec<StructDecl>,
    pub(crate) classes: Vec<ClassDecl>,
    pub(crate) methods: Vec<MethodDecl>,
    pub(crate) constructors: Vec<ConstructorDecl>,
    pub(crate) by_name: FxHashMap<String, ClassId>,
}

impl TargetTree {
    pub fn directives(&self) -> &Directives {
        &self.directives
    }

    pub fn declarations(&self) -> &[StructDecl] {
        &self.declarations
    }

    /// Class ids in declaration order, which is also emission order.
    pub fn class_ids(&self) -> impl Iterator<Item = ClassId> {
        (0..self.classes.len()).map(ClassId::from_len)
    }

    /// Ids are only minted by this tree, so lookups index directly.
    #[inline]
    pub fn class(&self, id: ClassId) -> &ClassDecl {
        &self.classes[id.index()]
    }

    #[inline]
    pub fn method(&self, id: MethodId) -> &MethodDecl {
        &self.methods[id.index()]
    }

    #[inline]
    pub fn constructor(&self, id: CtorId) -> &ConstructorDecl {
        &self.constructors[id.index()]
    }

    /// Class by dotted name.
    pub fn get_class(&self, name: &str) -> Option<ClassId> {
        self.by_name.get(name).copied()
    }

    /// Position of the first field called `name`.
    pub fn get_field_index(&self, name: &str, class: ClassId) -> Option<usize> {
        self.class(class).fields.iter().position(|f| f.name == name)
    }

    /// Position of the first inherited entry called `name`.
    pub fn get_inherited_method_index(&self, name: &str, class: ClassId) -> Option<usize> {
        self.class(class)
            .inherited
            .iter()
            .position(|&m| self.method(m).name == name)
    }

    /// Inherited entries of a class, resolved.
    pub fn inherited_methods(&self, class: ClassId) -> impl Iterator<Item = &MethodDecl> {
        self.class(class).inherited.iter().map(|&m| self.method(m))
    }

    /// Implemented methods of a class, resolved.
    pub fn implemented_methods(&self, class: ClassId) -> impl Iterator<Item = &MethodDecl> {
        self.class(class).implemented.iter().map(|&m| self.method(m))
    }
}
