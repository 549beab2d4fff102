//! Traversal context.
//!
//! `Cx` is a small `Copy` value passed down the recursion. Each nested
//! dispatch gets its own copy, so nothing needs restoring on the way out.

use bitflags::bitflags;
use jtc_target::ClassId;

bitflags! {
    /// Where in the traversal an expression is being printed.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Scope: u16 {
        /// Inside a constructor body: `this` instead of `__this`.
        const IN_CONSTRUCTOR = 1 << 0;
        /// Inside the entry point.
        const IN_MAIN = 1 << 1;
        /// Receiver or argument of a call.
        const IN_CALL = 1 << 2;
        /// Operand of a print statement.
        const IN_PRINT = 1 << 3;
        /// Operand of a string concatenation.
        const IN_CONCAT = 1 << 4;
        /// Inside a static method: no `__this`.
        const STATIC_METHOD = 1 << 5;
        /// Suppress the null check on identifiers.
        const NO_NULL_CHECK = 1 << 6;
    }
}

/// Operator precedence levels. Higher binds tighter.
pub mod prec {
    pub const BASE: u8 = 0;
    pub const LIST: u8 = 10;
    pub const ASSIGN: u8 = 10;
    pub const CONDITIONAL: u8 = 20;
    pub const OR: u8 = 30;
    pub const AND: u8 = 40;
    pub const INSTANCE_OF: u8 = 40;
    pub const BIT_OR: u8 = 50;
    pub const XOR: u8 = 60;
    pub const BIT_AND: u8 = 70;
    pub const EQUALITY: u8 = 80;
    pub const RELATIONAL: u8 = 100;
    pub const SHIFT: u8 = 110;
    pub const ADDITIVE: u8 = 120;
    pub const MULTIPLICATIVE: u8 = 130;
    pub const CAST: u8 = 140;
    pub const UNARY: u8 = 150;
    pub const POSTFIX: u8 = 160;
    pub const PRIMARY: u8 = 160;
    pub const JAVA_CAST: u8 = 170;
}

/// Per-call traversal state.
#[derive(Copy, Clone, Debug)]
pub struct Cx {
    pub class: ClassId,
    /// Precedence demanded by the enclosing position.
    pub prec: u8,
    pub scope: Scope,
}

impl Cx {
    pub fn new(class: ClassId) -> Self {
        Self {
            class,
            prec: prec::BASE,
            scope: Scope::empty(),
        }
    }

    #[must_use]
    pub fn with_prec(self, prec: u8) -> Self {
        Self { prec, ..self }
    }

    #[must_use]
    pub fn with(self, flags: Scope) -> Self {
        Self {
            scope: self.scope | flags,
            ..self
        }
    }

    #[must_use]
    pub fn without(self, flags: Scope) -> Self {
        Self {
            scope: self.scope - flags,
            ..self
        }
    }

    #[inline]
    pub fn has(self, flags: Scope) -> bool {
        self.scope.contains(flags)
    }

    /// Whether an expression of precedence `own` needs parentheses here.
    #[inline]
    pub fn needs_parens(self, own: u8) -> bool {
        own < self.prec
    }
}
