//! C++ code generator.
//!
//! One pass over the target tree in declaration order. Per class it emits
//! the type-descriptor accessor, the v-table definition, the constructors
//! and one out-of-line definition per implemented method. Inherited
//! entries are dispatch metadata only and are never emitted.
//!
//! # Module Structure
//!
//! - `layout`: newline and indentation state shared by sibling statements
//! - `stmt`: statement lowering
//! - `expr`: expression dispatch, precedence, identifiers, operators
//! - `call`: the three call shapes and print statements
//! - `array`: multi-dimensional array allocation
//! - `concat`: string concatenation detection and lowering

mod array;
mod call;
mod concat;
mod expr;
mod layout;
mod stmt;

use jtc_ir::{Expr, ExprId, Param, QualifiedName, SourceArena, Stmt, StmtId};
use jtc_target::{ClassId, MethodDecl, TargetTree};
use tracing::debug;

use crate::config::CodegenConfig;
use crate::context::{Cx, Scope};
use crate::emitter::{Emitter, StringEmitter};
use crate::error::CodegenError;
use crate::mangle::{DefaultMangler, Mangler};
use crate::printer::Printer;
use crate::static_init::{NoStaticInit, StaticInitializer};

use layout::Layout;

/// Name of the method that becomes the program entry point.
const ENTRY_METHOD: &str = "main";

/// Generates C++ for a target tree.
pub struct CodeGenerator<'a, E: Emitter> {
    tree: &'a TargetTree,
    arena: &'a SourceArena,
    mangler: &'a dyn Mangler,
    statics: &'a mut dyn StaticInitializer,
    config: &'a CodegenConfig,
    out: Printer<E>,
    layout: Layout,
    /// The first `main` of the run has been emitted as the entry point.
    entry_emitted: bool,
    statics_emitted: bool,
}

impl<'a, E: Emitter> CodeGenerator<'a, E> {
    pub fn new(
        tree: &'a TargetTree,
        arena: &'a SourceArena,
        mangler: &'a dyn Mangler,
        statics: &'a mut dyn StaticInitializer,
        config: &'a CodegenConfig,
        emitter: E,
    ) -> Self {
        Self {
            tree,
            arena,
            mangler,
            statics,
            config,
            out: Printer::new(emitter, config.indent_width),
            layout: Layout::default(),
            entry_emitted: false,
            statics_emitted: false,
        }
    }

    /// Emit the whole compilation unit.
    pub fn generate(&mut self) -> Result<(), CodegenError> {
        self.preamble();
        for class in self.tree.class_ids() {
            self.class(class)?;
            self.out.checkpoint()?;
        }
        self.out.checkpoint()?;
        Ok(())
    }

    pub fn into_emitter(self) -> E {
        self.out.into_emitter()
    }

    fn preamble(&mut self) {
        self.out.pln("#include <iostream>");
        self.out.pln("#include <sstream>");
        self.out.pln("#include <string>");
        let header = format!("#include \"{}\"", self.config.header);
        self.out.pln(&header);
        self.out.newline();
    }

    fn class(&mut self, id: ClassId) -> Result<(), CodegenError> {
        let tree = self.tree;
        let class = tree.class(id);
        let cx = Cx::new(id);
        let own = self.mangler.class_type_name(&class.name);
        let parent = class
            .parent
            .class_name()
            .ok_or_else(|| CodegenError::MissingChild {
                node: format!("class `{}`", class.name),
                child: "a parent class",
                class: class.name.to_string(),
            })?;
        let parent = self.mangler.class_type_name(parent);
        debug!(class = %class.name, "emitting class");

        // Type descriptor
        self.out.pln(&format!("java::lang::Class {own}::__class() {{"));
        self.out.incr();
        self.out.indent();
        self.out.pln(&format!(
            "static java::lang::Class k = new java::lang::__Class(__rt::literal(\"{}\"), {parent}::__class());",
            class.name
        ));
        self.out.indent();
        self.out.pln("return k;");
        self.out.decr();
        self.out.pln("}");
        self.out.newline();

        // V-table
        self.out.pln(&format!("{own}_VT {own}::__vtable;"));
        self.out.newline();

        if class.constructors.is_empty() {
            self.constructor_head(&class.name, &[]);
            self.out.pln("{}");
            self.out.newline();
        }
        for &ctor in &class.constructors {
            let decl = tree.constructor(ctor);
            self.constructor_head(&class.name, decl.params());
            self.body(&decl.body, cx.with(Scope::IN_CONSTRUCTOR))?;
        }

        for &method in &class.implemented {
            self.method(tree.method(method), cx)?;
            self.out.checkpoint()?;
        }
        Ok(())
    }

    fn constructor_head(&mut self, name: &QualifiedName, params: &[Param]) {
        let own = self.mangler.class_type_name(name);
        let params = self.param_list(None, params);
        self.out.p(&format!(
            "{own}::__{}({params}) : __vptr(&__vtable) ",
            name.simple()
        ));
    }

    fn method(&mut self, method: &'a MethodDecl, cx: Cx) -> Result<(), CodegenError> {
        let tree = self.tree;
        let class = &tree.class(cx.class).name;
        let is_entry = method.name == ENTRY_METHOD && !self.entry_emitted;
        let mut cx = cx;
        if method.is_static {
            cx = cx.with(Scope::STATIC_METHOD);
        }

        if is_entry {
            self.entry_emitted = true;
            // The entry point has no receiver, whatever its modifiers.
            cx = cx.with(Scope::IN_MAIN | Scope::STATIC_METHOD);
            debug!(class = %class, "emitting entry point");
            self.out.p("int main(int argc, char** argv) ");
        } else {
            let ret = self.mangler.type_ref(&method.return_type);
            let own = self.mangler.class_type_name(class);
            let params: Vec<_> = method.params.iter().map(|p| p.ty.clone()).collect();
            let symbol = self.mangler.method_symbol(&method.name, &params);
            let receiver = (!method.is_static).then_some(class);
            let params = self.param_list(receiver, &method.params);
            debug!(class = %class, method = %symbol, "emitting method");
            self.out.p(&format!("{ret} {own}::{symbol}({params}) "));
        }
        self.body(&method.body, cx)
    }

    /// `T __this, A a, B b` for the given receiver class and parameters.
    fn param_list(&self, receiver: Option<&QualifiedName>, params: &[Param]) -> String {
        let mut parts = Vec::with_capacity(params.len() + 1);
        if let Some(class) = receiver {
            parts.push(format!("{} __this", self.mangler.type_name(class)));
        }
        for param in params {
            parts.push(format!("{} {}", self.mangler.type_ref(&param.ty), param.name));
        }
        parts.join(", ")
    }

    /// A function body. Empty constructor bodies print `{}`.
    fn body(&mut self, stmts: &[StmtId], cx: Cx) -> Result<(), CodegenError> {
        let is_entry = cx.has(Scope::IN_MAIN);
        if stmts.is_empty() && cx.has(Scope::IN_CONSTRUCTOR) {
            self.out.pln("{}");
            self.out.newline();
            return Ok(());
        }

        self.out.pln("{");
        self.out.incr();
        self.layout.open_brace();
        if is_entry && !self.statics_emitted {
            self.statics_emitted = true;
            for line in self.statics.initializers(self.tree) {
                self.out.indent();
                self.out.pln(&line);
            }
        }
        for &stmt in stmts {
            self.stmt(stmt, cx)?;
        }
        if self.layout.is_open_line {
            self.out.newline();
        }
        self.out.decr();
        self.out.pln("}");
        self.out.newline();
        self.layout = Layout::default();
        Ok(())
    }

    // Node access

    fn node(&self, id: ExprId, cx: Cx) -> Result<&'a Expr, CodegenError> {
        let arena: &'a SourceArena = self.arena;
        arena.get_expr(id).ok_or_else(|| CodegenError::Dangling {
            node: format!("expression {id:?}"),
            class: self.class_label(cx),
        })
    }

    fn stmt_node(&self, id: StmtId, cx: Cx) -> Result<&'a Stmt, CodegenError> {
        let arena: &'a SourceArena = self.arena;
        arena.get_stmt(id).ok_or_else(|| CodegenError::Dangling {
            node: format!("statement {id:?}"),
            class: self.class_label(cx),
        })
    }

    fn class_label(&self, cx: Cx) -> String {
        self.tree.class(cx.class).name.to_string()
    }

    /// `this` in constructors, `__this` elsewhere.
    fn self_ref(cx: Cx) -> &'static str {
        if cx.has(Scope::IN_CONSTRUCTOR) {
            "this"
        } else {
            "__this"
        }
    }
}

/// Generate C++ for `tree` with the default mangler, no static state and
/// the default configuration.
pub fn generate_cpp(tree: &TargetTree, arena: &SourceArena) -> Result<String, CodegenError> {
    let config = CodegenConfig::default();
    let mut statics = NoStaticInit;
    let mut generator = CodeGenerator::new(
        tree,
        arena,
        &DefaultMangler,
        &mut statics,
        &config,
        StringEmitter::new(),
    );
    generator.generate()?;
    Ok(generator.into_emitter().output())
}
