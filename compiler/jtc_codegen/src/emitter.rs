//! Output Emitter
//!
//! Abstraction for the generator's output sink. Text is buffered and handed
//! to the destination at checkpoints (per method, per class, per unit).

use std::io::{self, Write};

/// Trait for emitting generated code.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a newline (Unix-style `\n`).
    fn emit_newline(&mut self);

    /// Emit `count` spaces.
    fn emit_spaces(&mut self, count: usize);

    /// Hand buffered output to the destination.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination rejects the write.
    fn checkpoint(&mut self) -> io::Result<()>;
}

/// In-memory emitter. Checkpoints are no-ops.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Get the generated output.
    pub fn output(self) -> String {
        self.buffer
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn emit_spaces(&mut self, count: usize) {
        self.buffer.extend(std::iter::repeat(' ').take(count));
    }

    fn checkpoint(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Emitter that buffers text and writes it to `W` at each checkpoint.
///
/// Write errors surface from [`Emitter::checkpoint`] and [`finish`](Self::finish)
/// rather than from the individual emit calls.
pub struct WriterEmitter<W: Write> {
    writer: W,
    pending: String,
}

impl<W: Write> WriterEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pending: String::with_capacity(4096),
        }
    }

    /// Bytes emitted since the last checkpoint.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Write out anything pending and return the destination.
    ///
    /// # Errors
    ///
    /// Returns an error if the final write or flush fails.
    pub fn finish(mut self) -> io::Result<W> {
        self.checkpoint()?;
        Ok(self.writer)
    }
}

impl<W: Write> Emitter for WriterEmitter<W> {
    fn emit(&mut self, text: &str) {
        self.pending.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.pending.push('\n');
    }

    fn emit_spaces(&mut self, count: usize) {
        self.pending.extend(std::iter::repeat(' ').take(count));
    }

    fn checkpoint(&mut self) -> io::Result<()> {
        if !self.pending.is_empty() {
            self.writer.write_all(self.pending.as_bytes())?;
            self.pending.clear();
        }
        self.writer.flush()
    }
}
