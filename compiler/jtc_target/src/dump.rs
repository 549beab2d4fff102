//! Indented text rendering of a target tree, for debugging and tests.

use crate::tree::{Include, MethodDecl, TargetTree};

const INDENT: &str = "  ";

impl TargetTree {
    /// Render the whole tree, one node per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        line(&mut out, 0, "CompilationUnit");

        line(&mut out, 1, "Directives");
        for pragma in &self.directives.pragmas {
            line(&mut out, 2, &format!("Pragma {pragma}"));
        }
        for include in &self.directives.includes {
            let text = match include {
                Include::Quoted(name) => format!("Include \"{name}\""),
                Include::Angle(name) => format!("Include <{name}>"),
            };
            line(&mut out, 2, &text);
        }

        line(&mut out, 1, "Declarations");
        for decl in &self.declarations {
            line(&mut out, 2, &format!("StructDeclaration {}", decl.name));
        }

        line(&mut out, 1, "Classes");
        for id in self.class_ids() {
            let class = self.class(id);
            line(&mut out, 2, &format!("ClassDeclaration {}", class.name));
            line(&mut out, 3, &format!("Parent {}", class.parent));

            line(&mut out, 3, "Constructors");
            for &ctor in &class.constructors {
                let params = self
                    .constructor(ctor)
                    .params()
                    .iter()
                    .map(|p| format!("{} {}", p.ty, p.name))
                    .collect::<Vec<_>>()
                    .join(", ");
                line(&mut out, 4, &format!("Constructor({params})"));
            }

            line(&mut out, 3, "Fields");
            for field in &class.fields {
                line(&mut out, 4, &format!("Field {} {}", field.ty, field.name));
            }

            line(&mut out, 3, "ImplementedMethods");
            for method in self.implemented_methods(id) {
                line(&mut out, 4, &signature(method));
            }

            line(&mut out, 3, "InheritedMethods");
            for method in self.inherited_methods(id) {
                line(&mut out, 4, &signature(method));
            }
        }
        out
    }
}

fn line(out: &mut String, depth: usize, text: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(text);
    out.push('\n');
}

fn signature(method: &MethodDecl) -> String {
    let params = method
        .params
        .iter()
        .map(|p| format!("{} {}", p.ty, p.name))
        .collect::<Vec<_>>()
        .join(", ");
    let prefix = if method.is_static { "static " } else { "" };
    match &method.origin {
        Some(origin) => format!(
            "Method {prefix}{} {}({params}) from {origin}",
            method.return_type, method.name
        ),
        None => format!("Method {prefix}{} {}({params})", method.return_type, method.name),
    }
}
