//! Expression Types
//!
//! Core expression nodes and variants. Every node carries the annotations
//! the resolver attached to it: the static type and, for identifier-like
//! nodes, an identifier-kind tag.

use smallvec::SmallVec;

use super::operators::{AssignOp, BinaryOp, PostfixOp, UnaryOp};
use crate::{ExprId, QualifiedName, TypeNode};

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    /// Resolved static type, if the resolver produced one.
    pub ty: Option<TypeNode>,
    /// Identifier-kind tag, present on identifiers and selections.
    pub ident: Option<IdentKind>,
}

impl Expr {
    pub fn new(kind: ExprKind) -> Self {
        Expr {
            kind,
            ty: None,
            ident: None,
        }
    }

    #[must_use]
    pub fn with_type(mut self, ty: TypeNode) -> Self {
        self.ty = Some(ty);
        self
    }

    #[must_use]
    pub fn with_ident(mut self, ident: IdentKind) -> Self {
        self.ident = Some(ident);
        self
    }

    /// Short human-readable label used in diagnostics.
    pub fn describe(&self) -> String {
        match &self.kind {
            ExprKind::Literal(_) => "literal".to_string(),
            ExprKind::Ident(name) => format!("identifier `{name}`"),
            ExprKind::This => "`this`".to_string(),
            ExprKind::Select { member, .. } => format!("selection `.{member}`"),
            ExprKind::Subscript { .. } => "subscript".to_string(),
            ExprKind::Call(call) => format!("call `{}`", call.method),
            ExprKind::New { class, .. } => format!("allocation of `{class}`"),
            ExprKind::NewArray { .. } => "array allocation".to_string(),
            ExprKind::Binary { op, .. } => format!("`{}` expression", op.as_symbol()),
            ExprKind::Unary { op, .. } => format!("prefix `{}` expression", op.as_symbol()),
            ExprKind::Postfix { op, .. } => format!("postfix `{}` expression", op.as_symbol()),
            ExprKind::Assign { op, .. } => format!("`{}` assignment", op.as_symbol()),
            ExprKind::Conditional { .. } => "conditional expression".to_string(),
            ExprKind::Cast { ty, .. } => format!("cast to `{ty}`"),
            ExprKind::InstanceOf { ty, .. } => format!("instanceof `{ty}`"),
        }
    }
}

/// How the resolver classified an identifier.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum IdentKind {
    /// Local variable or parameter.
    Local,
    /// Non-static field of the current class.
    InstanceField,
    /// Static field, with the class that declares it.
    StaticField { owner: QualifiedName },
    /// Field reached through another object.
    ForeignField,
    /// Simple class name used as a static reference.
    ClassName,
    /// Package-qualified class name.
    QualifiedClass,
    /// The standard-output stream (`System.out`).
    PrintTarget,
}

/// Literal values. Text literals keep their source spelling, quotes included.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Literal {
    Int(String),
    Float(String),
    Char(String),
    String(String),
    Bool(bool),
    Null,
}

/// A method invocation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CallExpr {
    /// `None` for implicit `this` / own-class calls.
    pub receiver: Option<ExprId>,
    pub method: String,
    pub args: Vec<ExprId>,
    /// Parameter types of the resolved target, used for overload mangling.
    pub params: Vec<TypeNode>,
    pub is_static: bool,
    pub is_private: bool,
}

impl CallExpr {
    pub fn new(receiver: Option<ExprId>, method: impl Into<String>, args: Vec<ExprId>) -> Self {
        CallExpr {
            receiver,
            method: method.into(),
            args,
            params: Vec::new(),
            is_static: false,
            is_private: false,
        }
    }
}

/// Expression variants.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    Literal(Literal),

    /// Primary identifier; may be dotted when the resolver folded a package path.
    Ident(String),
    This,

    Select {
        target: ExprId,
        member: String,
    },
    Subscript {
        target: ExprId,
        index: ExprId,
    },

    Call(CallExpr),

    /// `new T(args)`
    New {
        class: TypeNode,
        args: Vec<ExprId>,
    },
    /// `new T[a][b]...[]...`: sized leading dimensions followed by unsized ones.
    NewArray {
        element: TypeNode,
        sizes: SmallVec<[ExprId; 4]>,
        unsized_dims: u8,
    },

    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    Postfix {
        op: PostfixOp,
        operand: ExprId,
    },
    Assign {
        op: AssignOp,
        target: ExprId,
        value: ExprId,
    },
    Conditional {
        cond: ExprId,
        then_expr: ExprId,
        else_expr: ExprId,
    },

    Cast {
        ty: TypeNode,
        operand: ExprId,
    },
    InstanceOf {
        operand: ExprId,
        ty: TypeNode,
    },
}
