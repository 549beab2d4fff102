//! JTC Target - Object-Model Declaration Tree
//!
//! The first stage of lowering: a C++-shaped declaration tree built from
//! source class semantics.
//!
//! # Architecture
//!
//! ```text
//! resolver output (jtc_ir)
//!        ↓
//!   TreeBuilder        (classes, fields, constructors, methods,
//!        ↓              object protocol, inheritance flattening)
//!   TargetTree         (read-only input of the code generator)
//! ```
//!
//! Nodes live in per-kind arenas addressed by `ClassId`, `MethodId` and
//! `CtorId`. A class refers to its members by id, so removal is an edit of
//! the owning class's list and never invalidates other ids.

mod builder;
mod dump;
mod hierarchy;
mod ids;
mod protocol;
mod tree;

pub use builder::TreeBuilder;
pub use hierarchy::{ClassHierarchy, HierarchyIndex};
pub use ids::{ClassId, CtorId, MethodId};
pub use protocol::{generate_object_methods, generate_object_type, OBJECT_METHODS, ROOT_CLASS};
pub use tree::{
    ClassDecl, ConstructorDecl, Directives, FieldDecl, Include, MethodDecl, StructDecl, TargetTree,
};
