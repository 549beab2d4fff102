//! Code generation errors.
//!
//! Generation has no local recovery: the first malformed node aborts the
//! run with an error naming the node and the class being emitted.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodegenError {
    /// A node lacks a child the lowering needs (a resolved type, a sized
    /// dimension, a class name).
    #[error("{node} in class `{class}` is missing {child}")]
    MissingChild {
        node: String,
        child: &'static str,
        class: String,
    },

    /// An id that does not resolve in the source arena.
    #[error("dangling {node} in class `{class}`")]
    Dangling { node: String, class: String },

    /// A node of the wrong kind in a position that requires a specific one.
    #[error("expected {expected} in class `{class}`, found {found}")]
    UnexpectedNode {
        expected: &'static str,
        found: String,
        class: String,
    },

    /// The output sink failed to flush.
    #[error("failed to write generated code: {0}")]
    Io(#[from] io::Error),
}
