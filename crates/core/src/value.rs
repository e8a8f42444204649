//! Value types for unobserved cells
//!
//! This module defines:
//! - Value: Tagged union with one payload variant per [`Kind`]
//! - OpaqueObject: The featureless marker produced by the `Object` kind
//!
//! ## Comparison Rules
//!
//! - Values of the same kind use the payload's natural ordering
//! - Values of different kinds are incomparable (`partial_compare` is `None`)
//! - Opaque objects (and the null marker) have no ordering at all, not even
//!   against themselves
//! - Temporal values compare by instant: two offset timestamps naming the same
//!   UTC instant are equal regardless of offset

use crate::kind::Kind;
use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use uuid::Uuid;

/// Featureless marker object
///
/// Carries no data. Two markers are never ordered relative to each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpaqueObject;

impl fmt::Display for OpaqueObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("object")
    }
}

/// A resolved value
///
/// One variant per [`Kind`], in the same order.
///
/// `PartialEq` is structural (same variant, equal payload). Cell equality is
/// defined separately by [`Unobserved::compare`](crate::Unobserved::compare).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean
    Boolean(bool),
    /// Unsigned 8-bit integer
    Byte(u8),
    /// Single character
    Char(char),
    /// High-precision decimal
    Decimal(Decimal),
    /// Double-precision float
    Double(f64),
    /// Single-precision float
    Single(f32),
    /// Signed 32-bit integer
    Int32(i32),
    /// Signed 64-bit integer
    Int64(i64),
    /// Signed 8-bit integer
    SByte(i8),
    /// Signed 16-bit integer
    Int16(i16),
    /// Unsigned 32-bit integer
    UInt32(u32),
    /// Unsigned 64-bit integer
    UInt64(u64),
    /// Unsigned 16-bit integer
    UInt16(u16),
    /// Text string
    String(String),
    /// UTC timestamp
    Timestamp(DateTime<Utc>),
    /// Timestamp with a fixed UTC offset
    TimestampWithOffset(DateTime<FixedOffset>),
    /// Signed duration
    Duration(TimeDelta),
    /// Globally-unique identifier
    Uuid(Uuid),
    /// Opaque object; `None` is the null marker
    Object(Option<OpaqueObject>),
}

impl Value {
    /// The kind this value belongs to
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Boolean(_) => Kind::Boolean,
            Value::Byte(_) => Kind::Byte,
            Value::Char(_) => Kind::Char,
            Value::Decimal(_) => Kind::Decimal,
            Value::Double(_) => Kind::Double,
            Value::Single(_) => Kind::Single,
            Value::Int32(_) => Kind::Int32,
            Value::Int64(_) => Kind::Int64,
            Value::SByte(_) => Kind::SByte,
            Value::Int16(_) => Kind::Int16,
            Value::UInt32(_) => Kind::UInt32,
            Value::UInt64(_) => Kind::UInt64,
            Value::UInt16(_) => Kind::UInt16,
            Value::String(_) => Kind::String,
            Value::Timestamp(_) => Kind::Timestamp,
            Value::TimestampWithOffset(_) => Kind::TimestampWithOffset,
            Value::Duration(_) => Kind::Duration,
            Value::Uuid(_) => Kind::Uuid,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Returns the type name as a string (for log and error messages)
    pub const fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Check if this value is the null object marker
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Object(None))
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get any integer variant as i64
    ///
    /// Returns `None` for non-integers and for `UInt64` values above `i64::MAX`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Byte(v) => Some(i64::from(*v)),
            Value::SByte(v) => Some(i64::from(*v)),
            Value::Int16(v) => Some(i64::from(*v)),
            Value::UInt16(v) => Some(i64::from(*v)),
            Value::Int32(v) => Some(i64::from(*v)),
            Value::UInt32(v) => Some(i64::from(*v)),
            Value::Int64(v) => Some(*v),
            Value::UInt64(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Try to get any numeric variant as f64 (may lose precision)
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(v) => Some(*v),
            Value::Single(v) => Some(f64::from(*v)),
            Value::Decimal(v) => v.to_f64(),
            Value::UInt64(v) => Some(*v as f64),
            other => other.as_i64().map(|v| v as f64),
        }
    }

    /// Compare two values by their natural ordering
    ///
    /// Returns `None` when the pair has no ordering: different kinds, opaque
    /// objects, or float NaN.
    pub fn partial_compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Boolean(a), Value::Boolean(b)) => a.partial_cmp(b),
            (Value::Byte(a), Value::Byte(b)) => a.partial_cmp(b),
            (Value::Char(a), Value::Char(b)) => a.partial_cmp(b),
            (Value::Decimal(a), Value::Decimal(b)) => a.partial_cmp(b),
            (Value::Double(a), Value::Double(b)) => a.partial_cmp(b),
            (Value::Single(a), Value::Single(b)) => a.partial_cmp(b),
            (Value::Int32(a), Value::Int32(b)) => a.partial_cmp(b),
            (Value::Int64(a), Value::Int64(b)) => a.partial_cmp(b),
            (Value::SByte(a), Value::SByte(b)) => a.partial_cmp(b),
            (Value::Int16(a), Value::Int16(b)) => a.partial_cmp(b),
            (Value::UInt32(a), Value::UInt32(b)) => a.partial_cmp(b),
            (Value::UInt64(a), Value::UInt64(b)) => a.partial_cmp(b),
            (Value::UInt16(a), Value::UInt16(b)) => a.partial_cmp(b),
            (Value::String(a), Value::String(b)) => a.partial_cmp(b),
            (Value::Timestamp(a), Value::Timestamp(b)) => a.partial_cmp(b),
            (Value::TimestampWithOffset(a), Value::TimestampWithOffset(b)) => a.partial_cmp(b),
            (Value::Duration(a), Value::Duration(b)) => a.partial_cmp(b),
            (Value::Uuid(a), Value::Uuid(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(v) => write!(f, "{}", v),
            Value::Byte(v) => write!(f, "{}", v),
            Value::Char(v) => write!(f, "{}", v),
            Value::Decimal(v) => write!(f, "{}", v),
            Value::Double(v) => write!(f, "{}", v),
            Value::Single(v) => write!(f, "{}", v),
            Value::Int32(v) => write!(f, "{}", v),
            Value::Int64(v) => write!(f, "{}", v),
            Value::SByte(v) => write!(f, "{}", v),
            Value::Int16(v) => write!(f, "{}", v),
            Value::UInt32(v) => write!(f, "{}", v),
            Value::UInt64(v) => write!(f, "{}", v),
            Value::UInt16(v) => write!(f, "{}", v),
            Value::String(v) => f.write_str(v),
            Value::Timestamp(v) => write!(f, "{}", v),
            Value::TimestampWithOffset(v) => write!(f, "{}", v),
            Value::Duration(v) => write!(f, "{}", v),
            Value::Uuid(v) => write!(f, "{}", v),
            Value::Object(Some(v)) => write!(f, "{}", v),
            Value::Object(None) => f.write_str("null"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int32(i)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int64(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Double(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Uuid> for Value {
    fn from(u: Uuid) -> Self {
        Value::Uuid(u)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(t: DateTime<Utc>) -> Self {
        Value::Timestamp(t)
    }
}
