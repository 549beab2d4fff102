//! JTC Codegen - C++ Emission
//!
//! Second stage of lowering: walks a [`TargetTree`](jtc_target::TargetTree)
//! and the resolved source arena and emits one C++ translation unit.
//!
//! # Architecture
//!
//! ```text
//! TargetTree + SourceArena
//!        ↓
//!   CodeGenerator  ── Mangler            (type and method names)
//!        │         ── StaticInitializer  (entry-point prologue)
//!        ↓
//!   Printer → Emitter (StringEmitter / WriterEmitter)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let cpp = jtc_codegen::generate_cpp(&tree, &arena)?;
//! ```

mod config;
mod context;
mod emitter;
mod error;
mod generator;
mod mangle;
mod printer;
mod static_init;

use std::sync::Once;

pub use config::{CodegenConfig, DEFAULT_HEADER, DEFAULT_INDENT_WIDTH};
pub use context::{prec, Cx, Scope};
pub use emitter::{Emitter, StringEmitter, WriterEmitter};
pub use error::CodegenError;
pub use generator::{generate_cpp, CodeGenerator};
pub use mangle::{DefaultMangler, Mangler};
pub use static_init::{NoStaticInit, StaticInitializer};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debugging.
///
/// Set `RUST_LOG=jtc_codegen=debug` to see class and method emission, or
/// `RUST_LOG=jtc_codegen=trace` to also see lowering degradations.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
