//! Static-initializer hook.
//!
//! Runs once, as the first action of the entry point, before any user
//! statement. The generator indents and prints the returned lines.

use jtc_target::TargetTree;

pub trait StaticInitializer {
    /// C++ lines that initialize static state for `tree`.
    fn initializers(&mut self, tree: &TargetTree) -> Vec<String>;
}

impl<F> StaticInitializer for F
where
    F: FnMut(&TargetTree) -> Vec<String>,
{
    fn initializers(&mut self, tree: &TargetTree) -> Vec<String> {
        self(tree)
    }
}

/// Initializer for programs without static state.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoStaticInit;

impl StaticInitializer for NoStaticInit {
    fn initializers(&mut self, _tree: &TargetTree) -> Vec<String> {
        Vec::new()
    }
}
