//! Expression lowering.
//!
//! Each kind has a fixed precedence. A node is parenthesized only when its
//! precedence is below the one its position demands; operands demand their
//! precedence explicitly through `Cx::with_prec`.

use jtc_ir::{
    AssignOp, BinaryOp, Expr, ExprId, ExprKind, IdentKind, Literal, QualifiedName, TypeNode,
};

use super::CodeGenerator;
use crate::context::{prec, Cx, Scope};
use crate::emitter::Emitter;
use crate::error::CodegenError;

/// Precedence of a binary operator.
pub(crate) fn binary_prec(op: BinaryOp) -> u8 {
    match op {
        BinaryOp::Or => prec::OR,
        BinaryOp::And => prec::AND,
        BinaryOp::BitOr => prec::BIT_OR,
        BinaryOp::BitXor => prec::XOR,
        BinaryOp::BitAnd => prec::BIT_AND,
        BinaryOp::Eq | BinaryOp::NotEq => prec::EQUALITY,
        BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => prec::RELATIONAL,
        BinaryOp::Shl | BinaryOp::Shr | BinaryOp::UShr => prec::SHIFT,
        BinaryOp::Add | BinaryOp::Sub => prec::ADDITIVE,
        BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => prec::MULTIPLICATIVE,
    }
}

impl<E: Emitter> CodeGenerator<'_, E> {
    /// Print an expression at the precedence demanded by `cx`.
    pub(crate) fn expr(&mut self, id: ExprId, cx: Cx) -> Result<(), CodegenError> {
        let node = self.node(id, cx)?;
        let own = self.precedence(node, cx)?;
        let parens = cx.needs_parens(own);
        if parens {
            self.out.p("(");
        }
        self.expr_kind(id, node, cx.with_prec(own))?;
        if parens {
            self.out.p(")");
        }
        Ok(())
    }

    fn precedence(&self, node: &Expr, cx: Cx) -> Result<u8, CodegenError> {
        let own = match &node.kind {
            ExprKind::Literal(_)
            | ExprKind::Ident(_)
            | ExprKind::This
            | ExprKind::Select { .. }
            | ExprKind::Subscript { .. }
            | ExprKind::NewArray { .. } => prec::PRIMARY,
            ExprKind::Call(call) => {
                if self.is_print_call(call, cx)? {
                    prec::SHIFT
                } else {
                    prec::PRIMARY
                }
            }
            ExprKind::New { .. } | ExprKind::Unary { .. } => prec::UNARY,
            ExprKind::Postfix { .. } => prec::POSTFIX,
            ExprKind::Binary { op, left, right } => {
                if *op == BinaryOp::Add && self.is_concat(*left, *right, cx)? {
                    prec::PRIMARY
                } else {
                    binary_prec(*op)
                }
            }
            ExprKind::Assign { .. } => prec::ASSIGN,
            ExprKind::Conditional { .. } => prec::CONDITIONAL,
            ExprKind::Cast { ty, .. } => {
                if ty.is_reference() {
                    prec::JAVA_CAST
                } else {
                    prec::CAST
                }
            }
            ExprKind::InstanceOf { .. } => prec::INSTANCE_OF,
        };
        Ok(own)
    }

    /// `cx.prec` already holds the node's own precedence.
    fn expr_kind(&mut self, id: ExprId, node: &Expr, cx: Cx) -> Result<(), CodegenError> {
        match &node.kind {
            ExprKind::Literal(lit) => {
                self.literal(lit);
                Ok(())
            }
            ExprKind::Ident(name) => self.ident(node, name, cx),
            ExprKind::This => {
                self.out.p(Self::self_ref(cx));
                Ok(())
            }
            ExprKind::Select { target, member } => self.select(node, *target, member, cx),
            ExprKind::Subscript { target, index } => {
                self.expr(*target, cx.with_prec(prec::POSTFIX))?;
                self.out.p("->__data[");
                self.expr(*index, cx.without(Scope::IN_CALL).with_prec(prec::BASE))?;
                self.out.p("]");
                Ok(())
            }
            ExprKind::Call(call) => self.call(node, call, cx),
            ExprKind::New { class, args } => {
                let name = self.class_of(class, node, cx)?;
                self.out.p("new ");
                self.out.p(&self.mangler.class_type_name(name));
                self.out.p("(");
                self.args(args, cx)?;
                self.out.p(")");
                Ok(())
            }
            ExprKind::NewArray {
                element,
                sizes,
                unsized_dims,
            } => {
                if sizes.is_empty() {
                    return Err(CodegenError::MissingChild {
                        node: node.describe(),
                        child: "a sized dimension",
                        class: self.class_label(cx),
                    });
                }
                self.new_array(element, sizes, *unsized_dims, 0, cx)
            }
            ExprKind::Binary { op, left, right } => {
                if *op == BinaryOp::Add && self.is_concat(*left, *right, cx)? {
                    return self.concat(id, cx);
                }
                let own = cx.prec;
                self.expr(*left, cx)?;
                self.out.p(" ");
                self.out.p(op.as_symbol());
                self.out.p(" ");
                self.expr(*right, cx.with_prec(own + 1))
            }
            ExprKind::Unary { op, operand } => {
                let symbol = op.as_symbol();
                self.out.p(symbol);
                if self.sign_collides(symbol, *operand, cx)? {
                    self.out.p(" ");
                }
                self.expr(*operand, cx)
            }
            ExprKind::Postfix { op, operand } => {
                self.expr(*operand, cx)?;
                self.out.p(op.as_symbol());
                Ok(())
            }
            ExprKind::Assign { op, target, value } => {
                self.expr(
                    *target,
                    cx.with(Scope::NO_NULL_CHECK).with_prec(prec::ASSIGN + 1),
                )?;
                self.out.p(" ");
                self.out.p(op.as_symbol());
                self.out.p(" ");
                if *op == AssignOp::Assign {
                    self.expr(*value, cx)
                } else {
                    self.expr(*value, cx.with_prec(prec::ASSIGN))
                }
            }
            ExprKind::Conditional {
                cond,
                then_expr,
                else_expr,
            } => {
                self.expr(*cond, cx.with_prec(prec::CONDITIONAL + 1))?;
                self.out.p(" ? ");
                self.expr(*then_expr, cx)?;
                self.out.p(" : ");
                self.expr(*else_expr, cx)
            }
            ExprKind::Cast { ty, operand } => {
                let target = self.mangler.type_ref(ty);
                if ty.is_reference() {
                    self.out.p(&format!("__rt::java_cast<{target}>("));
                    self.expr(*operand, cx.with_prec(prec::BASE))?;
                    self.out.p(")");
                } else {
                    self.out.p(&format!("({target}) "));
                    self.expr(*operand, cx)?;
                }
                Ok(())
            }
            ExprKind::InstanceOf { operand, ty } => {
                let name = self.class_of(ty, node, cx)?;
                let descriptor = self.mangler.class_type_name(name);
                self.out.p(&format!("{descriptor}::__class()->isInstance("));
                self.expr(*operand, cx.with_prec(prec::LIST))?;
                self.out.p(")");
                Ok(())
            }
        }
    }

    /// Whether `operand` starts with a sign that would fuse with the end of
    /// `symbol`: `- -x` must not print as `--x`.
    fn sign_collides(&self, symbol: &str, operand: ExprId, cx: Cx) -> Result<bool, CodegenError> {
        let node = self.node(operand, cx)?;
        let first = match &node.kind {
            ExprKind::Unary { op, .. } => op.as_symbol().chars().next(),
            ExprKind::Literal(Literal::Int(text) | Literal::Float(text)) => text.chars().next(),
            _ => None,
        };
        Ok(first.is_some_and(|c| matches!(c, '+' | '-') && symbol.ends_with(c)))
    }

    fn literal(&mut self, lit: &Literal) {
        match lit {
            Literal::Int(text) | Literal::Float(text) | Literal::Char(text) => self.out.p(text),
            Literal::String(text) => {
                self.out.p("__rt::literal(");
                self.out.p(text);
                self.out.p(")");
            }
            Literal::Bool(value) => self.out.p(if *value { "true" } else { "false" }),
            Literal::Null => self.out.p("__rt::null()"),
        }
    }

    /// Identifiers render by their resolved kind.
    fn ident(&mut self, node: &Expr, name: &str, cx: Cx) -> Result<(), CodegenError> {
        let kind = node.ident.as_ref().unwrap_or(&IdentKind::Local);
        let path = name.replace('.', "::");
        let text = match kind {
            IdentKind::PrintTarget => return Ok(()),
            IdentKind::ClassName | IdentKind::QualifiedClass => {
                let class = self.class_path(node, cx)?;
                self.out.p(&self.mangler.class_type_name(&class));
                return Ok(());
            }
            IdentKind::InstanceField => format!("{}->{path}", Self::self_ref(cx)),
            IdentKind::StaticField { owner } => {
                format!("{}::{path}", self.mangler.class_type_name(owner))
            }
            IdentKind::Local | IdentKind::ForeignField => path,
        };

        let ty = node.ty.as_ref();
        let checked = cx.has(Scope::IN_CALL)
            && !cx.has(Scope::IN_CONSTRUCTOR)
            && !cx.has(Scope::NO_NULL_CHECK)
            && ty.is_some_and(TypeNode::is_reference);
        let widen = ty.is_some_and(TypeNode::is_byte)
            && (cx.has(Scope::IN_PRINT) || cx.has(Scope::IN_CONCAT));

        if checked {
            self.out.p(&format!("({{ __rt::checkNotNull({text}); {text}; }})"));
        } else if widen {
            self.out.p(&format!("(int){text}"));
        } else {
            self.out.p(&text);
        }
        Ok(())
    }

    /// Selections print the nearest qualifier only.
    fn select(
        &mut self,
        node: &Expr,
        target: ExprId,
        member: &str,
        cx: Cx,
    ) -> Result<(), CodegenError> {
        if node.ident == Some(IdentKind::PrintTarget) {
            return Ok(());
        }
        let prefix = self.node(target, cx)?;
        match prefix.ident {
            Some(IdentKind::ClassName | IdentKind::QualifiedClass) => {
                let class = self.class_path(prefix, cx)?;
                self.out.p(&self.mangler.class_type_name(&class));
                self.out.p("::");
            }
            _ => {
                self.expr(
                    target,
                    cx.with(Scope::NO_NULL_CHECK).with_prec(prec::POSTFIX),
                )?;
                self.out.p("->");
            }
        }
        self.out.p(member);
        Ok(())
    }

    /// Qualified class name denoted by a class-reference node.
    pub(crate) fn class_path(&self, node: &Expr, cx: Cx) -> Result<QualifiedName, CodegenError> {
        if let Some(name) = node.ty.as_ref().and_then(TypeNode::class_name) {
            return Ok(name.clone());
        }
        let mut segments = Vec::new();
        self.collect_path(node, &mut segments, cx)?;
        Ok(QualifiedName::from_segments(segments))
    }

    fn collect_path(
        &self,
        node: &Expr,
        segments: &mut Vec<String>,
        cx: Cx,
    ) -> Result<(), CodegenError> {
        match &node.kind {
            ExprKind::Ident(name) => {
                segments.extend(name.split('.').map(str::to_owned));
                Ok(())
            }
            ExprKind::Select { target, member } => {
                self.collect_path(self.node(*target, cx)?, segments, cx)?;
                segments.push(member.clone());
                Ok(())
            }
            _ => Err(CodegenError::UnexpectedNode {
                expected: "a class name",
                found: node.describe(),
                class: self.class_label(cx),
            }),
        }
    }

    /// Class named by a type used for allocation or `instanceof`.
    fn class_of<'t>(
        &self,
        ty: &'t TypeNode,
        node: &Expr,
        cx: Cx,
    ) -> Result<&'t QualifiedName, CodegenError> {
        ty.class_name().ok_or_else(|| CodegenError::MissingChild {
            node: node.describe(),
            child: "a class type",
            class: self.class_label(cx),
        })
    }

    /// Call or allocation arguments: null-checked, at list precedence.
    pub(crate) fn args(&mut self, args: &[ExprId], cx: Cx) -> Result<(), CodegenError> {
        let cx = cx
            .with(Scope::IN_CALL)
            .without(Scope::NO_NULL_CHECK | Scope::IN_PRINT | Scope::IN_CONCAT)
            .with_prec(prec::LIST);
        for (i, &arg) in args.iter().enumerate() {
            if i > 0 {
                self.out.p(", ");
            }
            self.expr(arg, cx)?;
        }
        Ok(())
    }
}
