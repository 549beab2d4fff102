//! Statement lowering.

use jtc_ir::{CatchClause, ExprId, ForInit, LocalDecl, StmtId, StmtKind};
use tracing::trace;

use super::layout::{Lead, StmtShape};
use super::CodeGenerator;
use crate::context::{prec, Cx, Scope};
use crate::emitter::Emitter;
use crate::error::CodegenError;

impl<E: Emitter> CodeGenerator<'_, E> {
    pub(crate) fn stmt(&mut self, id: StmtId, cx: Cx) -> Result<(), CodegenError> {
        let stmt = self.stmt_node(id, cx)?;
        match &stmt.kind {
            StmtKind::Block(stmts) => self.block(stmts, cx),
            StmtKind::Expr(expr) => {
                let lead = self.start(StmtShape::Other);
                self.expr(*expr, cx.with_prec(prec::BASE))?;
                self.out.pln(";");
                self.end(lead);
                Ok(())
            }
            StmtKind::Local(decl) => self.local(decl, cx),
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => self.if_stmt(*cond, *then_branch, *else_branch, cx),
            StmtKind::For {
                init,
                cond,
                update,
                body,
            } => {
                let lead = self.start(StmtShape::Other);
                self.out.p("for (");
                match init {
                    ForInit::None => {}
                    ForInit::Decl(decl) => self.declarators(decl, cx)?,
                    ForInit::Exprs(exprs) => self.expr_list(exprs, cx)?,
                }
                self.out.p("; ");
                if let Some(cond) = cond {
                    self.expr(*cond, cx.with_prec(prec::ASSIGN + 1))?;
                }
                self.out.p("; ");
                self.expr_list(update, cx)?;
                self.out.p(")");
                self.nested(*body, cx)?;
                self.end(lead);
                Ok(())
            }
            StmtKind::While { cond, body } => {
                let lead = self.start(StmtShape::Other);
                self.out.p("while (");
                self.expr(*cond, cx.with_prec(prec::ASSIGN + 1))?;
                self.out.p(")");
                self.nested(*body, cx)?;
                self.end(lead);
                Ok(())
            }
            StmtKind::Return(value) => {
                let lead = self.start(StmtShape::Other);
                self.out.p("return");
                if let Some(value) = value {
                    self.out.p(" ");
                    self.expr(*value, cx.with_prec(prec::BASE))?;
                }
                self.out.pln(";");
                self.end(lead);
                Ok(())
            }
            StmtKind::Break => self.simple("break;"),
            StmtKind::Continue => self.simple("continue;"),
            StmtKind::Empty => self.simple(";"),
            StmtKind::Try {
                resources,
                body,
                catches,
                finally,
            } => {
                // Resources and `finally` print beside the `try`; keep them in the body.
                let wrap = self.layout.is_nested && (!resources.is_empty() || finally.is_some());
                if wrap {
                    self.open_block();
                }
                self.try_stmt(resources, *body, catches, *finally, cx)?;
                if wrap {
                    self.close_block();
                }
                Ok(())
            }
            StmtKind::Labeled { label, body } => {
                trace!(%label, "dropping statement label");
                self.stmt(*body, cx)
            }
        }
    }

    /// `{ ... }` in statement or nested position.
    fn block(&mut self, stmts: &[StmtId], cx: Cx) -> Result<(), CodegenError> {
        self.open_block();
        for &stmt in stmts {
            self.stmt(stmt, cx)?;
        }
        self.close_block();
        Ok(())
    }

    /// A nested opening brace joins the control line.
    fn open_block(&mut self) {
        if self.layout.is_open_line && self.layout.is_nested {
            self.out.p(" ");
        } else {
            if self.layout.is_open_line {
                self.out.newline();
            }
            if self.layout.is_declaration {
                self.out.newline();
            }
            self.out.indent();
        }
        self.out.pln("{");
        self.out.incr();
        self.layout.open_brace();
    }

    /// Leaves the line open after `}` so `else` and `catch` can join it.
    fn close_block(&mut self) {
        if self.layout.is_open_line {
            self.out.newline();
        }
        self.out.decr();
        self.out.indent();
        self.out.p("}");
        self.layout.close_brace();
        self.layout.is_declaration = false;
    }

    fn try_stmt(
        &mut self,
        resources: &[LocalDecl],
        body: StmtId,
        catches: &[CatchClause],
        finally: Option<StmtId>,
        cx: Cx,
    ) -> Result<(), CodegenError> {
        for resource in resources {
            self.local(resource, cx)?;
        }
        let lead = self.start(StmtShape::Other);
        self.out.p("try");
        self.nested(body, cx)?;

        self.join_or_indent();
        if let Some(first) = catches.first() {
            if catches.len() > 1 {
                trace!(dropped = catches.len() - 1, "keeping only the first catch clause");
            }
            trace!(ty = %first.ty, binding = %first.binding, "catch clause lowered to catch-all");
            self.out.p("catch (...)");
            self.nested(first.body, cx)?;
        } else {
            self.out.pln("catch (...) {");
            self.out.incr();
            self.out.indent();
            self.out.pln("throw;");
            self.out.decr();
            self.out.indent();
            self.out.p("}");
            self.layout.close_brace();
        }
        self.end(lead);

        if let Some(finally) = finally {
            trace!("finally block emitted after the try statement");
            self.stmt(finally, cx)?;
        }
        Ok(())
    }

    fn if_stmt(
        &mut self,
        cond: ExprId,
        then_branch: StmtId,
        else_branch: Option<StmtId>,
        cx: Cx,
    ) -> Result<(), CodegenError> {
        let lead = self.start(StmtShape::If);
        self.out.p("if (");
        self.expr(cond, cx.with_prec(prec::ASSIGN + 1))?;
        self.out.p(")");
        self.nested(then_branch, cx)?;

        if let Some(else_branch) = else_branch {
            if self.layout.is_open_line {
                self.out.p(" else");
            } else {
                self.out.indent();
                self.out.p("else");
            }
            self.layout.prepare_nested();
            self.layout.is_if_else = true;
            self.stmt(else_branch, cx)?;
            self.layout.is_if_else = false;
        }
        self.end(lead);
        Ok(())
    }

    /// Body of a control construct: braces join the line, anything else
    /// is indented one level as a pseudo-block.
    fn nested(&mut self, body: StmtId, cx: Cx) -> Result<(), CodegenError> {
        self.layout.prepare_nested();
        self.stmt(body, cx)
    }

    fn local(&mut self, decl: &LocalDecl, cx: Cx) -> Result<(), CodegenError> {
        let mut lead = self.layout.start(StmtShape::Other);
        lead.blank = false;
        self.lead(lead);
        self.declarators(decl, cx)?;
        self.out.pln(";");
        if self.layout.end_declaration(lead) {
            self.out.decr();
        }
        Ok(())
    }

    /// `T a = x, b` without the terminator.
    fn declarators(&mut self, decl: &LocalDecl, cx: Cx) -> Result<(), CodegenError> {
        let ty = self.mangler.type_ref(&decl.ty);
        self.out.p(&ty);
        self.out.p(" ");
        for (i, declarator) in decl.declarators.iter().enumerate() {
            if i > 0 {
                self.out.p(", ");
            }
            self.out.p(&declarator.name);
            if let Some(init) = declarator.init {
                self.out.p(" = ");
                self.expr(init, cx.with_prec(prec::LIST))?;
            }
        }
        Ok(())
    }

    fn simple(&mut self, text: &str) -> Result<(), CodegenError> {
        let lead = self.start(StmtShape::Other);
        self.out.pln(text);
        self.end(lead);
        Ok(())
    }

    /// Start a statement and print its leading whitespace.
    fn start(&mut self, shape: StmtShape) -> Lead {
        let lead = self.layout.start(shape);
        self.lead(lead);
        lead
    }

    fn lead(&mut self, lead: Lead) {
        if lead.newline {
            self.out.newline();
        }
        if lead.blank {
            self.out.newline();
        }
        if lead.incr {
            self.out.incr();
        }
        if lead.joins_else {
            self.out.p(" ");
        } else {
            self.out.indent();
        }
    }

    fn end(&mut self, lead: Lead) {
        if self.layout.end(lead) {
            self.out.decr();
        }
    }

    /// After a closing brace continue on the same line, otherwise indent.
    fn join_or_indent(&mut self) {
        if self.layout.is_open_line {
            self.out.p(" ");
        } else {
            self.out.indent();
        }
    }

    /// Comma-separated expressions at list precedence, outside any call.
    fn expr_list(&mut self, exprs: &[ExprId], cx: Cx) -> Result<(), CodegenError> {
        let cx = cx.without(Scope::IN_CALL).with_prec(prec::LIST);
        for (i, &expr) in exprs.iter().enumerate() {
            if i > 0 {
                self.out.p(", ");
            }
            self.expr(expr, cx)?;
        }
        Ok(())
    }
}
