//! Kind enumeration
//!
//! Every unobserved cell collapses into exactly one of nineteen kinds.
//!
//! ## The Nineteen Kinds
//!
//! | # | Kind | Payload | Domain |
//! |---|------|---------|--------|
//! | 0 | Boolean | `bool` | coin flip |
//! | 1 | Byte | `u8` | `u8::MIN..=u8::MAX` |
//! | 2 | Char | `char` | alphanumeric |
//! | 3 | Decimal | `Decimal` | `Decimal::MIN..=Decimal::MAX` |
//! | 4 | Double | `f64` | `f64::MIN..=f64::MAX` |
//! | 5 | Single | `f32` | `f32::MIN..=f32::MAX` |
//! | 6 | Int32 | `i32` | full range |
//! | 7 | Int64 | `i64` | full range |
//! | 8 | SByte | `i8` | full range |
//! | 9 | Int16 | `i16` | full range |
//! | 10 | UInt32 | `u32` | full range |
//! | 11 | UInt64 | `u64` | full range |
//! | 12 | UInt16 | `u16` | full range |
//! | 13 | String | `String` | alphanumeric, length `0..max_string_length` |
//! | 14 | Timestamp | `DateTime<Utc>` | chrono extremes |
//! | 15 | TimestampWithOffset | `DateTime<FixedOffset>` | chrono extremes, ±14h |
//! | 16 | Duration | `TimeDelta` | `TimeDelta::MIN..=TimeDelta::MAX` |
//! | 17 | Uuid | `Uuid` | random v4 |
//! | 18 | Object | `Option<OpaqueObject>` | marker or null |
//!
//! The order is part of the contract: kind selection draws an index uniformly
//! from `0..19` and maps it through this table. Any index past the end maps to
//! `Object`.

use crate::error::{Error, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The nineteen kinds an unobserved value can collapse into
///
/// ## Invariant
///
/// This enum MUST have exactly 19 variants, in the order of the table above.
/// `Object` is the catch-all and stays last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Kind {
    /// Boolean
    Boolean,
    /// Unsigned 8-bit integer
    Byte,
    /// Single character
    Char,
    /// High-precision decimal
    Decimal,
    /// Double-precision float
    Double,
    /// Single-precision float
    Single,
    /// Signed 32-bit integer
    Int32,
    /// Signed 64-bit integer
    Int64,
    /// Signed 8-bit integer
    SByte,
    /// Signed 16-bit integer
    Int16,
    /// Unsigned 32-bit integer
    UInt32,
    /// Unsigned 64-bit integer
    UInt64,
    /// Unsigned 16-bit integer
    UInt16,
    /// Text string
    String,
    /// UTC timestamp
    Timestamp,
    /// Timestamp carrying a fixed UTC offset
    TimestampWithOffset,
    /// Signed duration
    Duration,
    /// Globally-unique identifier
    Uuid,
    /// Opaque object (or null)
    Object,
}

impl Kind {
    /// Number of kinds
    pub const COUNT: usize = 19;

    /// All kinds in selection order
    pub const ALL: [Kind; Kind::COUNT] = [
        Kind::Boolean,
        Kind::Byte,
        Kind::Char,
        Kind::Decimal,
        Kind::Double,
        Kind::Single,
        Kind::Int32,
        Kind::Int64,
        Kind::SByte,
        Kind::Int16,
        Kind::UInt32,
        Kind::UInt64,
        Kind::UInt16,
        Kind::String,
        Kind::Timestamp,
        Kind::TimestampWithOffset,
        Kind::Duration,
        Kind::Uuid,
        Kind::Object,
    ];

    /// Position in the selection table
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Map a selection index to a kind
    ///
    /// Out-of-range indices fall back to `Object`.
    pub fn from_index(index: usize) -> Self {
        Kind::try_from(index).unwrap_or(Kind::Object)
    }

    /// Pick a kind uniformly at random
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Kind::from_index(rng.gen_range(0..Kind::COUNT))
    }

    /// Human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Kind::Boolean => "Boolean",
            Kind::Byte => "Byte",
            Kind::Char => "Char",
            Kind::Decimal => "Decimal",
            Kind::Double => "Double",
            Kind::Single => "Single",
            Kind::Int32 => "Int32",
            Kind::Int64 => "Int64",
            Kind::SByte => "SByte",
            Kind::Int16 => "Int16",
            Kind::UInt32 => "UInt32",
            Kind::UInt64 => "UInt64",
            Kind::UInt16 => "UInt16",
            Kind::String => "String",
            Kind::Timestamp => "Timestamp",
            Kind::TimestampWithOffset => "TimestampWithOffset",
            Kind::Duration => "Duration",
            Kind::Uuid => "Uuid",
            Kind::Object => "Object",
        }
    }

    /// Check if values of this kind are drawn by scaling into a domain
    ///
    /// True for every numeric, timestamp and duration kind.
    pub const fn is_scaled(&self) -> bool {
        !matches!(
            self,
            Kind::Boolean | Kind::Char | Kind::String | Kind::Uuid | Kind::Object
        )
    }
}

impl TryFrom<usize> for Kind {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self> {
        Kind::ALL
            .get(index)
            .copied()
            .ok_or(Error::KindIndexOutOfRange(index))
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Tests
// ============================================================================
