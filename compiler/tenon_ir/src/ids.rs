//! Node handles.
//!
//! Every term is addressed by a 32-bit handle into the storage that owns it:
//! the [`TermArena`](crate::TermArena) for per-occurrence nodes, the interning
//! tables of `tenon_build` for types and constraints. Handle equality is node
//! identity.

/// Macro to define handle types.
///
/// Each generated type has:
/// - a `u32` payload and an `INVALID` sentinel (`u32::MAX`)
/// - `new()`, `index()`, `raw()`, `is_valid()` methods
/// - `Debug` showing `TypeName(n)` or `TypeName::INVALID`
/// - `Default` returning `INVALID`
macro_rules! define_id {
    ($($(#[$doc:meta])* $name:ident),* $(,)?) => { $(
        $(#[$doc])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
        #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Sentinel value indicating "no node".
            pub const INVALID: Self = Self(u32::MAX);

            #[inline]
            pub const fn new(index: u32) -> Self {
                Self(index)
            }

            /// Index into the owning storage.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            #[inline]
            pub const fn is_valid(self) -> bool {
                self.0 != u32::MAX
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                if self.is_valid() {
                    write!(f, "{}({})", stringify!($name), self.0)
                } else {
                    write!(f, "{}::INVALID", stringify!($name))
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::INVALID
            }
        }
    )* };
}

define_id!(
    /// Handle to a name in the term arena.
    NameId,
    /// Handle to an interned type.
    TypeId,
    /// Handle to an expression in the term arena.
    ExprId,
    /// Handle to a statement in the term arena.
    StmtId,
    /// Handle to a declaration in the term arena.
    DeclId,
    /// Handle to a definition in the term arena.
    DefId,
    /// Handle to a requirement in the term arena.
    ReqId,
    /// Handle to an interned constraint.
    ConsId,
);

impl NameId {
    /// The global identifier, pre-allocated in every arena.
    pub const GLOBAL: Self = Self(0);
}

impl TypeId {
    /// `void`, pre-interned.
    pub const VOID: Self = Self(0);
    /// `bool`, pre-interned.
    pub const BOOL: Self = Self(1);
    /// The type of types, pre-interned.
    pub const TYPE: Self = Self(2);

    /// Number of pre-interned types.
    pub const PREINTERNED: u32 = 3;
}

impl DeclId {
    /// The global namespace, pre-allocated in every arena.
    pub const GLOBAL_NAMESPACE: Self = Self(0);
}

impl DefId {
    /// Shared empty definition.
    pub const EMPTY: Self = Self(0);
    /// Shared `= delete` definition.
    pub const DELETED: Self = Self(1);
    /// Shared `= default` definition.
    pub const DEFAULTED: Self = Self(2);

    /// Returns `true` for the three shared sentinel definitions.
    #[inline]
    pub const fn is_sentinel(self) -> bool {
        self.0 <= Self::DEFAULTED.0
    }
}

#[cfg(test)]
mod tests;
