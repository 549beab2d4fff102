//! AST nodes of the resolved source tree.

mod expr;
mod operators;
mod stmt;

pub use expr::{CallExpr, Expr, ExprKind, IdentKind, Literal};
pub use operators::{AssignOp, BinaryOp, PostfixOp, UnaryOp};
pub use stmt::{CatchClause, Declarator, ForInit, LocalDecl, Param, Stmt, StmtKind};

#[cfg(test)]
mod tests;
