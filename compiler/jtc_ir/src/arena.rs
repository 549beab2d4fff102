//! Flat storage for the resolved source tree.

use crate::ast::{Expr, Stmt};
use crate::{ExprId, StmtId};

/// Owns every expression and statement of one translation run.
///
/// Nodes are appended and never removed, so ids stay stable.
#[derive(Clone, Default, Debug)]
pub struct SourceArena {
    exprs: Vec<Expr>,
    stmts: Vec<Stmt>,
}

impl SourceArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an expression and return its id.
    #[allow(clippy::cast_possible_truncation, reason = "arena size is bounded by u32 ids")]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(self.exprs.len() as u32);
        self.exprs.push(expr);
        id
    }

    /// Allocate a statement and return its id.
    #[allow(clippy::cast_possible_truncation, reason = "arena size is bounded by u32 ids")]
    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(self.stmts.len() as u32);
        self.stmts.push(stmt);
        id
    }

    /// Look up an expression. `None` for invalid or foreign ids.
    #[inline]
    pub fn get_expr(&self, id: ExprId) -> Option<&Expr> {
        self.exprs.get(id.index())
    }

    #[inline]
    pub fn get_stmt(&self, id: StmtId) -> Option<&Stmt> {
        self.stmts.get(id.index())
    }
}
