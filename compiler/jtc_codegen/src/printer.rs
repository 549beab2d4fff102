//! Indentation-aware printer over an [`Emitter`].

use std::io;

use crate::emitter::Emitter;

pub(crate) struct Printer<E: Emitter> {
    emitter: E,
    level: usize,
    width: usize,
}

impl<E: Emitter> Printer<E> {
    pub(crate) fn new(emitter: E, width: usize) -> Self {
        Self {
            emitter,
            level: 0,
            width,
        }
    }

    /// Print a fragment on the current line.
    #[inline]
    pub(crate) fn p(&mut self, text: &str) {
        self.emitter.emit(text);
    }

    /// Print a fragment and end the line.
    pub(crate) fn pln(&mut self, text: &str) {
        self.emitter.emit(text);
        self.emitter.emit_newline();
    }

    pub(crate) fn newline(&mut self) {
        self.emitter.emit_newline();
    }

    /// Print indentation for the current level.
    pub(crate) fn indent(&mut self) {
        self.emitter.emit_spaces(self.level * self.width);
    }

    pub(crate) fn incr(&mut self) {
        self.level += 1;
    }

    pub(crate) fn decr(&mut self) {
        debug_assert!(self.level > 0, "decr called with zero indent");
        self.level = self.level.saturating_sub(1);
    }

    pub(crate) fn checkpoint(&mut self) -> io::Result<()> {
        self.emitter.checkpoint()
    }

    pub(crate) fn into_emitter(self) -> E {
        self.emitter
    }
}
