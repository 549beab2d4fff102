//! Statement Types

use crate::{ExprId, StmtId, TypeNode};

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
}

impl Stmt {
    pub fn new(kind: StmtKind) -> Self {
        Stmt { kind }
    }
}

/// A formal parameter: name and declared type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    pub name: String,
    pub ty: TypeNode,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: TypeNode) -> Self {
        Param {
            name: name.into(),
            ty,
        }
    }
}

/// One variable in a local declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Declarator {
    pub name: String,
    pub init: Option<ExprId>,
}

/// `T a = x, b;`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LocalDecl {
    pub ty: TypeNode,
    pub declarators: Vec<Declarator>,
}

impl LocalDecl {
    /// Single-variable declaration.
    pub fn single(ty: TypeNode, name: impl Into<String>, init: Option<ExprId>) -> Self {
        LocalDecl {
            ty,
            declarators: vec![Declarator {
                name: name.into(),
                init,
            }],
        }
    }
}

/// Initializer part of a basic `for` control.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ForInit {
    None,
    Decl(LocalDecl),
    Exprs(Vec<ExprId>),
}

/// `catch (T name) { ... }`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CatchClause {
    pub ty: TypeNode,
    pub binding: String,
    pub body: StmtId,
}

/// Statement kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    Block(Vec<StmtId>),
    Expr(ExprId),
    Local(LocalDecl),
    If {
        cond: ExprId,
        then_branch: StmtId,
        else_branch: Option<StmtId>,
    },
    For {
        init: ForInit,
        cond: Option<ExprId>,
        update: Vec<ExprId>,
        body: StmtId,
    },
    While {
        cond: ExprId,
        body: StmtId,
    },
    Return(Option<ExprId>),
    Break,
    Continue,
    Try {
        resources: Vec<LocalDecl>,
        body: StmtId,
        catches: Vec<CatchClause>,
        finally: Option<StmtId>,
    },
    Labeled {
        label: String,
        body: StmtId,
    },
    Empty,
}
