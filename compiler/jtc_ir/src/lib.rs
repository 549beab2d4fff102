//! JTC IR - Resolved Source Tree
//!
//! This crate contains the input side of the jtc lowering engine: the
//! source-language tree after identifier and type resolution.
//! - `ExprId` / `StmtId` indices into a flat `SourceArena`
//! - `TypeNode` for resolved static types
//! - `IdentKind` tags attached by the resolver
//! - Expression and statement nodes
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: No `Box<Expr>`, children are `ExprId(u32)` indices
//! - **Trust Upstream**: Nodes carry what resolution produced; nothing here
//!   re-validates it

pub mod ast;
mod arena;
mod expr_id;
mod types;

pub use arena::SourceArena;
pub use ast::{
    AssignOp, BinaryOp, CallExpr, CatchClause, Declarator, Expr, ExprKind, ForInit, IdentKind,
    Literal, LocalDecl, Param, PostfixOp, Stmt, StmtKind, UnaryOp,
};
pub use expr_id::{ExprId, StmtId};
pub use types::{BaseType, Primitive, QualifiedName, TypeNode};
