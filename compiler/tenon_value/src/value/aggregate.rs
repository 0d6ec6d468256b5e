//! Aggregate payloads shared by arrays, dynarrays and tuples.

use std::ops::{Index, IndexMut};

use super::Value;

/// A fixed-length sequence of values, owned uniquely.
///
/// Cloning an aggregate clones every element.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Aggregate {
    elems: Box<[Value]>,
}

impl Aggregate {
    /// `len` elements, each an error value until assigned.
    pub fn new(len: usize) -> Self {
        Self {
            elems: vec![Value::Error; len].into_boxed_slice(),
        }
    }

    pub fn from_values(values: Vec<Value>) -> Self {
        Self {
            elems: values.into_boxed_slice(),
        }
    }

    /// One integer element per byte, as used for string literals.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            elems: bytes.iter().map(|&b| Value::Integer(i64::from(b))).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elems.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.elems.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.elems.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Value> {
        self.elems.iter_mut()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.elems
    }

    /// The text held by an aggregate of bytes.
    ///
    /// Returns `None` unless every element is an integer in `0..=255` and
    /// the bytes are valid UTF-8.
    pub fn as_string(&self) -> Option<String> {
        let bytes = self
            .elems
            .iter()
            .map(|v| match v {
                Value::Integer(n) => u8::try_from(*n).ok(),
                _ => None,
            })
            .collect::<Option<Vec<u8>>>()?;
        String::from_utf8(bytes).ok()
    }
}

impl Index<usize> for Aggregate {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.elems[index]
    }
}

impl IndexMut<usize> for Aggregate {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        &mut self.elems[index]
    }
}

impl From<Vec<Value>> for Aggregate {
    fn from(values: Vec<Value>) -> Self {
        Self::from_values(values)
    }
}

impl<'a> IntoIterator for &'a Aggregate {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Aggregate {
    type Item = &'a mut Value;
    type IntoIter = std::slice::IterMut<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
