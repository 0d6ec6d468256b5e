//! Interning tables for canonical terms.
//!
//! Both tables only grow. A handle, once returned, names the same node for
//! the lifetime of the owning [`Context`](crate::Context).

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tenon_ir::{ConsId, ConsKind, TypeId, TypeKind};

fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("{what} table exceeded u32::MAX entries"))
}

/// Type table keyed directly by [`TypeKind`].
///
/// Children of a type are already canonical handles, so derived equality on
/// `TypeKind` is structural equivalence.
pub(crate) struct TypeTable {
    /// Map from type structure to handle for deduplication.
    map: FxHashMap<TypeKind, TypeId>,
    /// Storage for type structure, indexed by handle.
    kinds: Vec<TypeKind>,
}

impl TypeTable {
    /// Create a table with `void`, `bool` and the type of types at their
    /// fixed handles.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut table = Self {
            map: FxHashMap::default(),
            kinds: Vec::with_capacity(capacity),
        };
        let preinterned = [TypeKind::Void, TypeKind::Boolean, TypeKind::Type];
        for kind in preinterned {
            table.intern(kind);
        }
        debug_assert_eq!(table.kinds.len(), TypeId::PREINTERNED as usize);
        table
    }

    /// Return the handle of an equal type, or register `kind`.
    pub(crate) fn intern(&mut self, kind: TypeKind) -> TypeId {
        if let Some(&id) = self.map.get(&kind) {
            tracing::trace!(?id, "type table hit");
            return id;
        }
        let id = TypeId::new(to_u32(self.kinds.len(), "type"));
        tracing::trace!(?id, ?kind, "type table miss");
        self.kinds.push(kind.clone());
        self.map.insert(kind, id);
        id
    }

    #[inline]
    pub(crate) fn get(&self, id: TypeId) -> &TypeKind {
        &self.kinds[id.index()]
    }

    pub(crate) fn len(&self) -> usize {
        self.kinds.len()
    }
}

/// Constraint table keyed by structural hash.
///
/// Constraint operands include expressions, which are per-occurrence nodes,
/// so a hash bucket may hold several structurally distinct constraints.
/// Callers confirm a hit with structural equivalence.
pub(crate) struct ConsTable {
    buckets: FxHashMap<u64, SmallVec<[ConsId; 1]>>,
    kinds: Vec<ConsKind>,
}

impl ConsTable {
    pub(crate) fn new() -> Self {
        Self {
            buckets: FxHashMap::default(),
            kinds: Vec::new(),
        }
    }

    /// Candidates sharing `hash`.
    pub(crate) fn candidates(&self, hash: u64) -> &[ConsId] {
        match self.buckets.get(&hash) {
            Some(bucket) => bucket.as_slice(),
            None => &[],
        }
    }

    /// Register a constraint known to be new.
    pub(crate) fn insert(&mut self, hash: u64, kind: ConsKind) -> ConsId {
        let id = ConsId::new(to_u32(self.kinds.len(), "constraint"));
        tracing::trace!(?id, ?kind, "constraint table miss");
        self.kinds.push(kind);
        self.buckets.entry(hash).or_default().push(id);
        id
    }

    #[inline]
    pub(crate) fn get(&self, id: ConsId) -> &ConsKind {
        &self.kinds[id.index()]
    }

    pub(crate) fn len(&self) -> usize {
        self.kinds.len()
    }
}
