//! String concatenation.
//!
//! An addition is a concatenation when either operand is string-typed.
//! Failing that, a `char` right operand keeps it numeric and a `char` left
//! operand promotes it. Left-nested concatenations flatten into a single
//! stream sequence captured into a managed string.

use jtc_ir::{BinaryOp, Expr, ExprId, ExprKind, Literal};
use smallvec::SmallVec;

use super::CodeGenerator;
use crate::context::{prec, Cx, Scope};
use crate::emitter::Emitter;
use crate::error::CodegenError;

impl<E: Emitter> CodeGenerator<'_, E> {
    pub(crate) fn is_concat(&self, left: ExprId, right: ExprId, cx: Cx) -> Result<bool, CodegenError> {
        let left = self.node(left, cx)?;
        let right = self.node(right, cx)?;
        if self.is_stringy(left, cx)? || self.is_stringy(right, cx)? {
            return Ok(true);
        }
        if Self::is_charish(right) {
            return Ok(false);
        }
        Ok(Self::is_charish(left))
    }

    fn is_stringy(&self, node: &Expr, cx: Cx) -> Result<bool, CodegenError> {
        if node.ty.as_ref().is_some_and(|ty| ty.is_string()) {
            return Ok(true);
        }
        match &node.kind {
            ExprKind::Literal(Literal::String(_)) => Ok(true),
            ExprKind::Binary {
                op: BinaryOp::Add,
                left,
                right,
            } => self.is_concat(*left, *right, cx),
            _ => Ok(false),
        }
    }

    fn is_charish(node: &Expr) -> bool {
        node.ty.as_ref().is_some_and(|ty| ty.is_char())
            || matches!(node.kind, ExprKind::Literal(Literal::Char(_)))
            || matches!(&node.kind, ExprKind::Cast { ty, .. } if ty.is_char())
    }

    /// `({ std::ostringstream __sstr; __sstr << a << b; __rt::literal(...); })`
    pub(crate) fn concat(&mut self, id: ExprId, cx: Cx) -> Result<(), CodegenError> {
        let mut operands = SmallVec::<[ExprId; 8]>::new();
        self.concat_operands(id, &mut operands, cx)?;

        self.out.p("({ std::ostringstream __sstr; __sstr << ");
        let operand = cx
            .with(Scope::IN_CONCAT)
            .without(Scope::IN_CALL)
            .with_prec(prec::SHIFT + 1);
        self.stream_operands(&operands, operand)?;
        self.out.p("; __rt::literal(__sstr.str().c_str()); })");
        Ok(())
    }

    fn concat_operands(
        &self,
        id: ExprId,
        operands: &mut SmallVec<[ExprId; 8]>,
        cx: Cx,
    ) -> Result<(), CodegenError> {
        let node = self.node(id, cx)?;
        match node.kind {
            ExprKind::Binary {
                op: BinaryOp::Add,
                left,
                right,
            } if self.is_concat(left, right, cx)? => {
                self.concat_operands(left, operands, cx)?;
                operands.push(right);
            }
            _ => operands.push(id),
        }
        Ok(())
    }
}
