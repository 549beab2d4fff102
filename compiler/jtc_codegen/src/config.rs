//! Generator configuration.

/// Default generated header included after the fixed preamble.
pub const DEFAULT_HEADER: &str = "out.h";

/// Default spaces per indentation level.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Configuration for code generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodegenConfig {
    /// Header file holding the class and v-table declarations.
    pub header: String,
    /// Spaces per indentation level.
    pub indent_width: usize,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

impl CodegenConfig {
    /// Create a config with a custom header name.
    pub fn with_header(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            ..Self::default()
        }
    }

    /// Create a config with a custom indentation width.
    pub fn with_indent_width(indent_width: usize) -> Self {
        Self {
            indent_width,
            ..Self::default()
        }
    }
}
