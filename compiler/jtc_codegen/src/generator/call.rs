//! Call lowering.
//!
//! Three shapes, chosen by the receiver:
//!
//! - implicit: `__this->__vptr->m(__this, args)`, or `ns::__C::m(...)`
//!   for static and private methods
//! - receiver-qualified: the receiver is bound to `_this` inside a
//!   statement expression, then dispatched through its v-table
//! - static on a named type: `ns::__T::m(args)`
//!
//! `print`/`println` on the standard-output target become `std::cout`
//! insertions.

use jtc_ir::{CallExpr, Expr, ExprId, IdentKind};

use super::CodeGenerator;
use crate::context::{prec, Cx, Scope};
use crate::emitter::Emitter;
use crate::error::CodegenError;

impl<E: Emitter> CodeGenerator<'_, E> {
    pub(crate) fn is_print_call(&self, call: &CallExpr, cx: Cx) -> Result<bool, CodegenError> {
        let Some(receiver) = call.receiver else {
            return Ok(false);
        };
        if call.method != "print" && call.method != "println" {
            return Ok(false);
        }
        let receiver = self.node(receiver, cx)?;
        Ok(receiver.ident == Some(IdentKind::PrintTarget))
    }

    pub(crate) fn call(&mut self, node: &Expr, call: &CallExpr, cx: Cx) -> Result<(), CodegenError> {
        if self.is_print_call(call, cx)? {
            return self.print(call, cx);
        }
        let symbol = self.mangler.method_symbol(&call.method, &call.params);

        let Some(receiver) = call.receiver else {
            return self.implicit_call(node, call, &symbol, cx);
        };

        let recv = self.node(receiver, cx)?;
        if call.is_static {
            let class = self.class_path(recv, cx)?;
            self.out.p(&self.mangler.class_type_name(&class));
            self.out.p("::");
            self.out.p(&symbol);
            self.out.p("(");
            self.args(&call.args, cx)?;
            self.out.p(")");
            return Ok(());
        }

        let ty = recv.ty.as_ref().ok_or_else(|| CodegenError::MissingChild {
            node: node.describe(),
            child: "a resolved receiver type",
            class: self.class_label(cx),
        })?;
        self.out.p("({ ");
        self.out.p(&self.mangler.type_ref(ty));
        self.out.p(" _this = ");
        self.expr(
            receiver,
            cx.with(Scope::IN_CALL)
                .without(Scope::IN_PRINT | Scope::IN_CONCAT)
                .with_prec(prec::LIST),
        )?;
        self.out.p("; ");
        if call.is_private {
            self.out.p("_this->");
        } else {
            self.out.p("_this->__vptr->");
        }
        self.out.p(&symbol);
        self.out.p("(_this");
        if !call.args.is_empty() {
            self.out.p(", ");
            self.args(&call.args, cx)?;
        }
        self.out.p("); })");
        Ok(())
    }

    fn implicit_call(
        &mut self,
        node: &Expr,
        call: &CallExpr,
        symbol: &str,
        cx: Cx,
    ) -> Result<(), CodegenError> {
        if cx.has(Scope::STATIC_METHOD) && !call.is_static {
            return Err(CodegenError::UnexpectedNode {
                expected: "a static call from a static method",
                found: node.describe(),
                class: self.class_label(cx),
            });
        }
        let this = Self::self_ref(cx);
        let pass_this = !call.is_static;
        if call.is_static || call.is_private {
            let class = &self.tree.class(cx.class).name;
            self.out.p(&self.mangler.class_type_name(class));
            self.out.p("::");
        } else {
            self.out.p(this);
            self.out.p("->__vptr->");
        }
        self.out.p(symbol);
        self.out.p("(");
        if pass_this {
            self.out.p(this);
            if !call.args.is_empty() {
                self.out.p(", ");
            }
        }
        self.args(&call.args, cx)?;
        self.out.p(")");
        Ok(())
    }

    /// `std::cout << a << b [<< std::endl]`.
    fn print(&mut self, call: &CallExpr, cx: Cx) -> Result<(), CodegenError> {
        self.out.p("std::cout << ");
        if call.args.is_empty() {
            self.out.p("\"\"");
        } else {
            let operand = cx
                .with(Scope::IN_PRINT)
                .without(Scope::IN_CALL)
                .with_prec(prec::SHIFT + 1);
            self.stream_operands(&call.args, operand)?;
        }
        if call.method == "println" {
            self.out.p(" << std::endl");
        }
        Ok(())
    }

    /// `a << b << c` at the precedence in `cx`.
    pub(crate) fn stream_operands(&mut self, operands: &[ExprId], cx: Cx) -> Result<(), CodegenError> {
        for (i, &operand) in operands.iter().enumerate() {
            if i > 0 {
                self.out.p(" << ");
            }
            self.expr(operand, cx)?;
        }
        Ok(())
    }
}
