//! Class-hierarchy index.
//!
//! Maps a class name to its ordered ancestor chain, nearest parent first.
//! The builder uses it to flatten parents before their children.

use jtc_ir::QualifiedName;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::TargetTree;

/// Lookup of ancestor chains by dotted class name.
pub trait HierarchyIndex {
    /// Ancestors of `class`, nearest first. `None` for unknown classes.
    fn ancestors(&self, class: &str) -> Option<&[QualifiedName]>;

    /// Number of ancestors; zero for unknown classes.
    fn depth(&self, class: &str) -> usize {
        self.ancestors(class).map_or(0, <[_]>::len)
    }
}

/// Ancestor chains stored by class name.
#[derive(Clone, Debug, Default)]
pub struct ClassHierarchy {
    chains: FxHashMap<String, Vec<QualifiedName>>,
}

impl ClassHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the ancestor chain of `class`, replacing any previous one.
    pub fn insert(&mut self, class: &str, ancestors: Vec<QualifiedName>) {
        self.chains.insert(class.to_string(), ancestors);
    }

    /// Derive chains from the parent links of a tree.
    ///
    /// A chain follows parents while they are declared in the tree and ends
    /// with the first parent that is not (usually the root type). A cycle
    /// ends the chain at the first repeated class.
    pub fn from_tree(tree: &TargetTree) -> Self {
        let mut index = Self::new();
        for id in tree.class_ids() {
            let start = tree.class(id);
            let mut seen = FxHashSet::default();
            seen.insert(start.name.to_string());

            let mut chain = Vec::new();
            let mut current = start;
            while let Some(parent) = current.parent.class_name() {
                let dotted = parent.to_string();
                if !seen.insert(dotted.clone()) {
                    break;
                }
                chain.push(parent.clone());
                match tree.get_class(&dotted) {
                    Some(next) => current = tree.class(next),
                    None => break,
                }
            }
            index.insert(&start.name.to_string(), chain);
        }
        index
    }
}

impl HierarchyIndex for ClassHierarchy {
    fn ancestors(&self, class: &str) -> Option<&[QualifiedName]> {
        self.chains.get(class).map(Vec::as_slice)
    }
}
