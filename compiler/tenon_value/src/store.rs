//! Storage that reference values point into.
//!
//! The evaluator allocates objects in a [`ValueStore`]. A [`ValueRef`]
//! names an object by slot and, for subobjects, by the chain of element
//! indices leading to it.

use std::fmt;

use smallvec::SmallVec;

use crate::Value;

/// A reference to a stored value or one of its subobjects.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ValueRef {
    slot: u32,
    /// Element indices into nested aggregates, outermost first.
    path: SmallVec<[u32; 2]>,
}

impl ValueRef {
    const NULL_SLOT: u32 = u32::MAX;

    /// The reference that names nothing. Zero-initialized references hold
    /// this.
    pub fn null() -> Self {
        Self {
            slot: Self::NULL_SLOT,
            path: SmallVec::new(),
        }
    }

    pub fn is_null(&self) -> bool {
        self.slot == Self::NULL_SLOT
    }

    pub fn slot(&self) -> u32 {
        self.slot
    }

    pub fn path(&self) -> &[u32] {
        &self.path
    }

    /// A reference to element `index` of the aggregate named by `self`.
    pub fn element(&self, index: u32) -> Self {
        let mut path = self.path.clone();
        path.push(index);
        Self {
            slot: self.slot,
            path,
        }
    }
}

impl Default for ValueRef {
    fn default() -> Self {
        Self::null()
    }
}

impl fmt::Display for ValueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str("ref#null");
        }
        write!(f, "ref#{}", self.slot)?;
        for index in &self.path {
            write!(f, ".{index}")?;
        }
        Ok(())
    }
}

/// Owner of every object a reference can name.
///
/// Slots are never reused; a reference stays valid for the store's
/// lifetime.
#[derive(Clone, Debug, Default)]
pub struct ValueStore {
    slots: Vec<Value>,
}

impl ValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` in a fresh slot.
    pub fn alloc(&mut self, value: Value) -> ValueRef {
        let slot = u32::try_from(self.slots.len())
            .unwrap_or_else(|_| panic!("value store exceeded u32::MAX slots"));
        tracing::trace!(slot, kind = %value.kind(), "value allocated");
        self.slots.push(value);
        ValueRef {
            slot,
            path: SmallVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The value `r` names, or `None` if it names nothing.
    pub fn try_get(&self, r: &ValueRef) -> Option<&Value> {
        let mut value = self.slots.get(r.slot as usize)?;
        for &index in &r.path {
            value = value.aggregate()?.get(index as usize)?;
        }
        Some(value)
    }

    pub fn try_get_mut(&mut self, r: &ValueRef) -> Option<&mut Value> {
        let mut value = self.slots.get_mut(r.slot as usize)?;
        for &index in &r.path {
            value = value.aggregate_mut()?.get_mut(index as usize)?;
        }
        Some(value)
    }

    /// The value `r` names.
    ///
    /// Dereferencing a null or dangling reference is an evaluator bug.
    #[track_caller]
    pub fn get(&self, r: &ValueRef) -> &Value {
        match self.try_get(r) {
            Some(v) => v,
            None => panic!("dangling value reference {r}"),
        }
    }

    #[track_caller]
    pub fn get_mut(&mut self, r: &ValueRef) -> &mut Value {
        match self.try_get_mut(r) {
            Some(v) => v,
            None => panic!("dangling value reference {r}"),
        }
    }

    /// A reference value naming the object at `r`.
    ///
    /// The object must not itself be a reference: references do not chain.
    #[track_caller]
    pub fn reference(&self, r: &ValueRef) -> Value {
        let target = self.get(r);
        assert!(
            !matches!(target, Value::Reference(_)),
            "reference to a reference at {r}"
        );
        Value::Reference(r.clone())
    }
}
