//! Target tree construction.
//!
//! `TreeBuilder` owns the tree during the build phase. Every mutation takes
//! ids minted by the same tree, so none of them can fail; lookups return
//! `Option` for "not found".
//!
//! Inheritance is flattened eagerly: a child's inherited set holds copies
//! of its ancestors' entries, each tagged with the class that defines it.

use jtc_ir::{Param, QualifiedName, StmtId, TypeNode};
use tracing::debug;

use crate::hierarchy::HierarchyIndex;
use crate::protocol::{generate_object_methods, generate_object_type, is_root, ROOT_CLASS};
use crate::tree::{ClassDecl, ConstructorDecl, FieldDecl, MethodDecl, StructDecl, TargetTree};
use crate::{ClassId, CtorId, MethodId};

/// Builder for a [`TargetTree`].
#[derive(Debug, Default)]
pub struct TreeBuilder {
    tree: TargetTree,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The tree built so far.
    pub fn tree(&self) -> &TargetTree {
        &self.tree
    }

    /// End the build phase.
    pub fn finish(self) -> TargetTree {
        self.tree
    }

    // Classes and fields

    /// Register a class and its forward declaration.
    ///
    /// A missing parent means the root type; root-parented classes receive
    /// the object protocol immediately, classes with an external parent
    /// when the hierarchy is linked.
    pub fn add_class(&mut self, name: &str, parent: Option<TypeNode>) -> ClassId {
        let id = ClassId::from_len(self.tree.classes.len());
        let parent = parent.unwrap_or_else(generate_object_type);

        self.tree.declarations.push(StructDecl {
            name: name.to_string(),
        });
        self.tree.classes.push(ClassDecl {
            name: QualifiedName::parse(name),
            parent,
            constructors: Vec::new(),
            fields: Vec::new(),
            implemented: Vec::new(),
            inherited: Vec::new(),
        });
        // First registration wins, matching a front-to-back search.
        self.tree.by_name.entry(name.to_string()).or_insert(id);

        if is_root(&self.tree.class(id).parent) {
            self.ensure_object_protocol(id);
        }
        debug!(class = name, ?id, "added class");
        id
    }

    /// Seed the four root-protocol entries into a class whose parent is
    /// not declared in the tree (the root itself or an external class).
    ///
    /// Returns `true` if entries were added. A class that already carries
    /// a root-tagged inherited entry, or that inherits from a tree class,
    /// is left alone.
    pub fn ensure_object_protocol(&mut self, class: ClassId) -> bool {
        if self.tree_parent(class).is_some() {
            return false;
        }
        let seeded = self.tree.inherited_methods(class).any(|m| {
            m.origin
                .as_ref()
                .is_some_and(|origin| origin.to_string() == ROOT_CLASS)
        });
        if seeded {
            return false;
        }

        for method in generate_object_methods() {
            let id = self.push_method(method);
            self.tree.classes[class.index()].inherited.push(id);
        }
        true
    }

    /// Append a field. Duplicate names are not rejected.
    pub fn add_field(&mut self, name: &str, ty: TypeNode, class: ClassId) -> usize {
        let fields = &mut self.tree.classes[class.index()].fields;
        fields.push(FieldDecl {
            name: name.to_string(),
            ty,
        });
        fields.len() - 1
    }

    /// Remove the first field called `name`. Returns `false` if absent.
    pub fn remove_field(&mut self, name: &str, class: ClassId) -> bool {
        match self.tree.get_field_index(name, class) {
            Some(index) => {
                self.tree.classes[class.index()].fields.remove(index);
                true
            }
            None => false,
        }
    }

    // Constructors

    /// Add an empty constructor: no parameter list, no body.
    pub fn add_constructor(&mut self, class: ClassId) -> CtorId {
        let id = CtorId::from_len(self.tree.constructors.len());
        self.tree.constructors.push(ConstructorDecl::default());
        self.tree.classes[class.index()].constructors.push(id);
        id
    }

    pub fn add_constructor_parameter(&mut self, ty: TypeNode, name: &str, ctor: CtorId) {
        self.ctor_mut(ctor)
            .params
            .get_or_insert_with(Vec::new)
            .push(Param::new(name, ty));
    }

    pub fn add_constructor_instruction(&mut self, stmt: StmtId, ctor: CtorId) {
        self.ctor_mut(ctor).body.push(stmt);
    }

    pub fn set_constructor_parameters(&mut self, params: Vec<Param>, ctor: CtorId) {
        self.ctor_mut(ctor).params = Some(params);
    }

    pub fn set_constructor_instructions(&mut self, body: Vec<StmtId>, ctor: CtorId) {
        self.ctor_mut(ctor).body = body;
    }

    // Methods

    /// Add a locally implemented method.
    pub fn add_method(&mut self, name: &str, return_type: TypeNode, class: ClassId) -> MethodId {
        let id = self.push_method(MethodDecl::new(name, return_type));
        self.tree.classes[class.index()].implemented.push(id);
        id
    }

    /// Add an inherited entry tagged with the class `from` that defines it.
    pub fn add_inherited_method(
        &mut self,
        name: &str,
        return_type: TypeNode,
        class: ClassId,
        from: &str,
    ) -> MethodId {
        let method = MethodDecl::new(name, return_type).from_class(QualifiedName::parse(from));
        let id = self.push_method(method);
        self.tree.classes[class.index()].inherited.push(id);
        id
    }

    pub fn add_method_parameter(&mut self, ty: TypeNode, name: &str, method: MethodId) {
        self.method_mut(method).params.push(Param::new(name, ty));
    }

    pub fn set_method_parameters(&mut self, params: Vec<Param>, method: MethodId) {
        self.method_mut(method).params = params;
    }

    pub fn add_method_instruction(&mut self, stmt: StmtId, method: MethodId) {
        self.method_mut(method).body.push(stmt);
    }

    pub fn set_method_instructions(&mut self, body: Vec<StmtId>, method: MethodId) {
        self.method_mut(method).body = body;
    }

    pub fn set_method_static(&mut self, method: MethodId, is_static: bool) {
        self.method_mut(method).is_static = is_static;
    }

    // Inheritance

    /// Flatten a parent's methods into `child`'s inherited set.
    ///
    /// `implemented` entries are copied without bodies and re-tagged with
    /// the child's parent; `inherited` entries are copied with their tags.
    /// Implemented copies come first; order within each group is kept.
    pub fn add_all_inherited_methods(
        &mut self,
        implemented: &[MethodId],
        inherited: &[MethodId],
        child: ClassId,
    ) {
        let origin = self.tree.class(child).parent.class_name().cloned();

        let mut copies = Vec::with_capacity(implemented.len() + inherited.len());
        for &id in implemented {
            let mut copy = self.tree.method(id).clone();
            copy.body.clear();
            if let Some(origin) = &origin {
                copy.origin = Some(origin.clone());
            }
            copies.push(copy);
        }
        copies.extend(inherited.iter().map(|&id| self.tree.method(id).clone()));

        for copy in copies {
            let id = self.push_method(copy);
            self.tree.classes[child.index()].inherited.push(id);
        }
        debug!(
            ?child,
            implemented = implemented.len(),
            inherited = inherited.len(),
            "flattened parent methods"
        );
    }

    /// Flatten everything `parent` exposes into `child`.
    pub fn inherit_from(&mut self, parent: ClassId, child: ClassId) {
        let decl = self.tree.class(parent);
        let implemented = decl.implemented.clone();
        let inherited = decl.inherited.clone();
        self.add_all_inherited_methods(&implemented, &inherited, child);
    }

    /// Remove every inherited entry called `name`, whatever its provenance.
    ///
    /// Returns the number of entries removed.
    pub fn remove_inherited_method(&mut self, name: &str, class: ClassId) -> usize {
        let TargetTree {
            classes, methods, ..
        } = &mut self.tree;
        let inherited = &mut classes[class.index()].inherited;
        let before = inherited.len();
        inherited.retain(|&id| methods[id.index()].name != name);
        let removed = before - inherited.len();
        debug!(method = name, ?class, removed, "removed inherited entries");
        removed
    }

    /// Flatten every class that has an in-tree parent.
    ///
    /// Classes are visited by ancestor depth so a parent is complete before
    /// its children copy it. Inherited entries a child overrides are removed
    /// afterwards. Classes with an external parent receive the object
    /// protocol instead. Returns the number of classes linked.
    pub fn link_hierarchy(&mut self, index: &dyn HierarchyIndex) -> usize {
        let mut order: Vec<(usize, ClassId)> = self
            .tree
            .class_ids()
            .map(|id| (index.depth(&self.tree.class(id).name.to_string()), id))
            .collect();
        order.sort_by_key(|&(depth, _)| depth);

        let mut linked = 0;
        for (_, child) in order {
            let Some(parent) = self.tree_parent(child) else {
                self.ensure_object_protocol(child);
                continue;
            };

            self.inherit_from(parent, child);
            let overrides: Vec<String> = self
                .tree
                .implemented_methods(child)
                .map(|m| m.name.clone())
                .collect();
            for name in &overrides {
                self.remove_inherited_method(name, child);
            }
            linked += 1;
        }
        debug!(linked, "linked class hierarchy");
        linked
    }

    // Lookups

    pub fn get_class(&self, name: &str) -> Option<ClassId> {
        self.tree.get_class(name)
    }

    pub fn get_field_index(&self, name: &str, class: ClassId) -> Option<usize> {
        self.tree.get_field_index(name, class)
    }

    pub fn get_inherited_method_index(&self, name: &str, class: ClassId) -> Option<usize> {
        self.tree.get_inherited_method_index(name, class)
    }

    /// The parent of `class` when it is declared in the tree and is not
    /// `class` itself.
    fn tree_parent(&self, class: ClassId) -> Option<ClassId> {
        self.tree
            .class(class)
            .parent
            .class_name()
            .and_then(|name| self.tree.get_class(&name.to_string()))
            .filter(|&parent| parent != class)
    }

    fn push_method(&mut self, method: MethodDecl) -> MethodId {
        let id = MethodId::from_len(self.tree.methods.len());
        self.tree.methods.push(method);
        id
    }

    fn method_mut(&mut self, id: MethodId) -> &mut MethodDecl {
        &mut self.tree.methods[id.index()]
    }

    fn ctor_mut(&mut self, id: CtorId) -> &mut ConstructorDecl {
        &mut self.tree.constructors[id.index()]
    }
}
