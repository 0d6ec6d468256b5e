//! The tagged value and its payloads.

mod aggregate;

use std::fmt;
use std::hash::{Hash, Hasher};

use tenon_ir::DeclId;

use crate::visit::ValueVisitor;
use crate::ValueRef;

pub use aggregate::Aggregate;

/// The kind of a [`Value`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    Error,
    Integer,
    Float,
    Function,
    Reference,
    Array,
    Dynarray,
    Tuple,
}

impl ValueKind {
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Error => "error",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Function => "function",
            ValueKind::Reference => "reference",
            ValueKind::Array => "array",
            ValueKind::Dynarray => "dynarray",
            ValueKind::Tuple => "tuple",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A compile-time value.
#[derive(Clone, Debug)]
pub enum Value {
    /// The result of a failed evaluation, and the content of fresh
    /// aggregate elements.
    Error,
    Integer(i64),
    Float(f64),
    /// A function, by its declaration. Does not own the declaration.
    Function(DeclId),
    /// A reference to a stored value. Never names another reference.
    Reference(ValueRef),
    Array(Aggregate),
    Dynarray(Aggregate),
    Tuple(Aggregate),
}

/// Abort on an extractor called for the wrong kind.
#[cold]
#[track_caller]
fn kind_mismatch(expected: ValueKind, found: ValueKind) -> ! {
    tracing::error!(%expected, %found, "value kind mismatch");
    panic!("value kind mismatch: expected {expected}, found {found}")
}

/// Generates the kind-checked extractors of one kind.
///
/// `copy` kinds return the payload by value, `ref` kinds by reference. Both
/// get a `_mut` form returning a mutable reference.
macro_rules! extractors {
    (@get copy $variant:ident $get:ident $ty:ty) => {
        #[track_caller]
        pub fn $get(&self) -> $ty {
            match self {
                Value::$variant(v) => *v,
                other => kind_mismatch(ValueKind::$variant, other.kind()),
            }
        }
    };
    (@get ref $variant:ident $get:ident $ty:ty) => {
        #[track_caller]
        pub fn $get(&self) -> &$ty {
            match self {
                Value::$variant(v) => v,
                other => kind_mismatch(ValueKind::$variant, other.kind()),
            }
        }
    };
    ($($mode:ident $variant:ident => $get:ident, $get_mut:ident -> $ty:ty;)*) => { $(
        extractors!(@get $mode $variant $get $ty);

        #[track_caller]
        pub fn $get_mut(&mut self) -> &mut $ty {
            match self {
                Value::$variant(v) => v,
                other => kind_mismatch(ValueKind::$variant, other.kind()),
            }
        }
    )* };
}

impl Value {
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Error => ValueKind::Error,
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Function(_) => ValueKind::Function,
            Value::Reference(_) => ValueKind::Reference,
            Value::Array(_) => ValueKind::Array,
            Value::Dynarray(_) => ValueKind::Dynarray,
            Value::Tuple(_) => ValueKind::Tuple,
        }
    }

    pub const fn is_error(&self) -> bool {
        matches!(self, Value::Error)
    }

    pub const fn is_aggregate(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Dynarray(_) | Value::Tuple(_))
    }

    /// The elements of an array, dynarray or tuple.
    pub fn aggregate(&self) -> Option<&Aggregate> {
        match self {
            Value::Array(a) | Value::Dynarray(a) | Value::Tuple(a) => Some(a),
            _ => None,
        }
    }

    pub fn aggregate_mut(&mut self) -> Option<&mut Aggregate> {
        match self {
            Value::Array(a) | Value::Dynarray(a) | Value::Tuple(a) => Some(a),
            _ => None,
        }
    }

    // Kind-checked access

    /// The truth value of an integer: nonzero is `true`.
    ///
    /// Only integers have a truth value.
    #[track_caller]
    pub fn as_boolean(&self) -> bool {
        self.as_integer() != 0
    }

    extractors! {
        copy Integer => as_integer, as_integer_mut -> i64;
        copy Float => as_float, as_float_mut -> f64;
        copy Function => as_function, as_function_mut -> DeclId;
        ref Reference => as_reference, as_reference_mut -> ValueRef;
        ref Array => as_array, as_array_mut -> Aggregate;
        ref Dynarray => as_dynarray, as_dynarray_mut -> Aggregate;
        ref Tuple => as_tuple, as_tuple_mut -> Aggregate;
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(i64::from(n))
    }
}

/// Stores the bits unchanged.
#[allow(clippy::cast_possible_wrap)]
impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Integer(n as i64)
    }
}

#[allow(clippy::cast_possible_wrap)]
impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Integer(n as i64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

// Structural equality. Floats compare by bit pattern so that equality is
// reflexive and agrees with `Hash`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Error, Value::Error) => true,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Function(a), Value::Function(b)) => a == b,
            (Value::Reference(a), Value::Reference(b)) => a == b,
            (Value::Array(a), Value::Array(b))
            | (Value::Dynarray(a), Value::Dynarray(b))
            | (Value::Tuple(a), Value::Tuple(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Error => {}
            Value::Integer(n) => n.hash(state),
            Value::Float(x) => x.to_bits().hash(state),
            Value::Function(d) => d.hash(state),
            Value::Reference(r) => r.hash(state),
            Value::Array(a) | Value::Dynarray(a) | Value::Tuple(a) => a.hash(state),
        }
    }
}

/// Renders values for diagnostics.
struct Printer<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
}

impl Printer<'_, '_> {
    fn elements(&mut self, open: &str, a: &Aggregate, close: &str) -> fmt::Result {
        self.f.write_str(open)?;
        for (i, elem) in a.iter().enumerate() {
            if i > 0 {
                self.f.write_str(", ")?;
            }
            elem.accept(self)?;
        }
        self.f.write_str(close)
    }
}

impl ValueVisitor for Printer<'_, '_> {
    type Output = fmt::Result;

    fn visit_error(&mut self) -> fmt::Result {
        self.f.write_str("<error>")
    }

    fn visit_integer(&mut self, n: i64) -> fmt::Result {
        write!(self.f, "{n}")
    }

    fn visit_float(&mut self, x: f64) -> fmt::Result {
        write!(self.f, "{x}")
    }

    fn visit_function(&mut self, decl: DeclId) -> fmt::Result {
        if decl.is_valid() {
            write!(self.f, "fn#{}", decl.raw())
        } else {
            self.f.write_str("fn#null")
        }
    }

    fn visit_reference(&mut self, r: &ValueRef) -> fmt::Result {
        write!(self.f, "{r}")
    }

    fn visit_array(&mut self, a: &Aggregate) -> fmt::Result {
        self.elements("[", a, "]")
    }

    fn visit_dynarray(&mut self, a: &Aggregate) -> fmt::Result {
        self.elements("dyn[", a, "]")
    }

    fn visit_tuple(&mut self, a: &Aggregate) -> fmt::Result {
        self.elements("(", a, ")")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.accept(&mut Printer { f })
    }
}

#[cfg(test)]
mod tests;
