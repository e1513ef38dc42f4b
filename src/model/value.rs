//! Evaluation values with scalar/field broadcasting

use super::grid::ScalarField;

/// A value produced while walking an expression tree
///
/// Literals evaluate to scalars, the axis variables to fields; arithmetic
/// broadcasts scalars across fields the way array libraries do.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A single number
    Scalar(f64),
    /// A grid-shaped array of numbers
    Field(ScalarField),
}

impl Value {
    /// Whether this value is grid-shaped
    #[inline]
    pub fn is_field(&self) -> bool {
        matches!(self, Value::Field(_))
    }

    /// Shape of the value, if it is a field
    pub fn shape(&self) -> Option<(usize, usize)> {
        match self {
            Value::Scalar(_) => None,
            Value::Field(field) => Some(field.shape()),
        }
    }

    /// Apply `f` to every sample
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Value {
        match self {
            Value::Scalar(v) => Value::Scalar(f(*v)),
            Value::Field(field) => Value::Field(field.map(f)),
        }
    }

    /// Combine two values element-wise, broadcasting scalars over fields
    ///
    /// Returns `None` when both operands are fields of different shapes.
    pub fn broadcast_with(&self, other: &Value, f: impl Fn(f64, f64) -> f64) -> Option<Value> {
        match (self, other) {
            (Value::Scalar(a), Value::Scalar(b)) => Some(Value::Scalar(f(*a, *b))),
            (Value::Scalar(a), Value::Field(b)) => Some(Value::Field(b.map(|v| f(*a, v)))),
            (Value::Field(a), Value::Scalar(b)) => Some(Value::Field(a.map(|v| f(v, *b)))),
            (Value::Field(a), Value::Field(b)) => {
                if a.shape() == b.shape() {
                    Some(Value::Field(a.zip_with(b, f)))
                } else {
                    None
                }
            }
        }
    }
}
