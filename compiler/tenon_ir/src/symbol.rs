//! Interned spellings.
//!
//! Identifiers are interned once per compilation; a [`Symbol`] compares in
//! O(1) and is what simple identifiers store.

use rustc_hash::FxHashMap;
use std::fmt;

/// Interned identifier spelling.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Symbol(u32);

impl Symbol {
    /// Pre-interned empty string.
    pub const EMPTY: Symbol = Symbol(0);

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// String interner owned by a compilation context.
///
/// Single-threaded: the context that owns it is the unit of sharing.
pub struct SymbolTable {
    /// Map from spelling to symbol.
    map: FxHashMap<Box<str>, Symbol>,
    /// Spellings, indexed by symbol.
    strings: Vec<Box<str>>,
}

impl SymbolTable {
    /// Create a table holding only the empty string.
    pub fn new() -> Self {
        let mut table = Self {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(256),
        };
        table.intern("");
        table
    }

    /// Intern a spelling, returning the existing symbol if it was seen before.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` spellings are interned.
    pub fn intern(&mut self, s: &str) -> Symbol {
        if let Some(&sym) = self.map.get(s) {
            return sym;
        }
        let raw = u32::try_from(self.strings.len())
            .unwrap_or_else(|_| panic!("symbol table exceeded u32::MAX entries"));
        let sym = Symbol(raw);
        self.strings.push(s.into());
        self.map.insert(s.into(), sym);
        sym
    }

    /// Look up a spelling without interning it.
    pub fn get(&self, s: &str) -> Option<Symbol> {
        self.map.get(s).copied()
    }

    /// The spelling of an interned symbol.
    ///
    /// # Panics
    /// Panics if `sym` was not created by this table.
    pub fn lookup(&self, sym: Symbol) -> &str {
        &self.strings[sym.index()]
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Returns `true` if only the empty string is interned.
    pub fn is_empty(&self) -> bool {
        self.strings.len() <= 1
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolTable")
            .field("len", &self.strings.len())
            .finish()
    }
}
