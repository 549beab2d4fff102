//! Stable ids for target-tree nodes.

use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            #[allow(clippy::cast_possible_truncation, reason = "tree size is bounded by u32 ids")]
            pub(crate) fn from_len(len: usize) -> Self {
                $name(len as u32)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }
    };
}

define_id!(
    /// Index of a class declaration.
    ClassId
);
define_id!(
    /// Index of a method declaration (implemented or inherited entry).
    MethodId
);
define_id!(
    /// Index of a constructor declaration.
    CtorId
);
