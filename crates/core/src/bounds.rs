//! Domain boundaries for scaled kinds
//!
//! Numeric, timestamp and duration kinds are sampled by drawing `u` uniformly
//! from `[0, 1)` and scaling it into the kind's `(min, max)` domain. This module
//! holds the explicit table of those domains.
//!
//! ## Tick Units
//!
//! | Kind | Tick | Domain |
//! |------|------|--------|
//! | Timestamp | microseconds since Unix epoch | `MIN_UTC..=MAX_UTC` |
//! | TimestampWithOffset | microseconds since Unix epoch | narrowed by 14h per side |
//! | Duration | milliseconds | `TimeDelta::MIN..=TimeDelta::MAX` |
//!
//! Offset timestamps are narrowed so that the local time under any offset in
//! `-14h..=+14h` is still representable.

use crate::error::{Error, Result};
use crate::kind::Kind;
use chrono::{DateTime, TimeDelta, Utc};

/// Largest UTC offset, in whole hours, given to an offset timestamp
pub const MAX_OFFSET_HOURS: i32 = 14;

const MICROS_PER_HOUR: i64 = 3_600 * 1_000_000;

const DECIMAL_MAX: f64 = 79_228_162_514_264_337_593_543_950_335.0;

/// Inclusive `(min, max)` domain of a scaled kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest value of the domain
    pub min: f64,
    /// Largest value of the domain
    pub max: f64,
}

impl Bounds {
    /// Zero-width domain used when a lookup fails
    pub const ZERO: Bounds = Bounds { min: 0.0, max: 0.0 };

    /// Create a domain
    pub const fn new(min: f64, max: f64) -> Self {
        Bounds { min, max }
    }

    /// Look up the domain of a kind
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unbounded`] for kinds that are not sampled by scaling
    /// (boolean, char, string, uuid, object).
    pub fn of(kind: Kind) -> Result<Self> {
        let bounds = match kind {
            Kind::Byte => Bounds::new(u8::MIN as f64, u8::MAX as f64),
            Kind::SByte => Bounds::new(i8::MIN as f64, i8::MAX as f64),
            Kind::Int16 => Bounds::new(i16::MIN as f64, i16::MAX as f64),
            Kind::UInt16 => Bounds::new(u16::MIN as f64, u16::MAX as f64),
            Kind::Int32 => Bounds::new(i32::MIN as f64, i32::MAX as f64),
            Kind::UInt32 => Bounds::new(u32::MIN as f64, u32::MAX as f64),
            Kind::Int64 => Bounds::new(i64::MIN as f64, i64::MAX as f64),
            Kind::UInt64 => Bounds::new(u64::MIN as f64, u64::MAX as f64),
            Kind::Single => Bounds::new(f32::MIN as f64, f32::MAX as f64),
            Kind::Double => Bounds::new(f64::MIN, f64::MAX),
            Kind::Decimal => Bounds::new(-DECIMAL_MAX, DECIMAL_MAX),
            Kind::Timestamp => Bounds::from_ticks(timestamp_range()),
            Kind::TimestampWithOffset => Bounds::from_ticks(offset_timestamp_range()),
            Kind::Duration => Bounds::from_ticks(duration_range()),
            Kind::Boolean | Kind::Char | Kind::String | Kind::Uuid | Kind::Object => {
                return Err(Error::Unbounded(kind))
            }
        };
        Ok(bounds)
    }

    fn from_ticks((min, max): (i64, i64)) -> Self {
        Bounds::new(min as f64, max as f64)
    }

    /// Scale `u` in `[0, 1)` into the domain
    ///
    /// Interpolates as `min·(1−u) + max·u` so the full `f64` range never
    /// overflows, then clamps against rounding at the edges.
    pub fn scale(&self, u: f64) -> f64 {
        let scaled = self.min * (1.0 - u) + self.max * u;
        scaled.clamp(self.min, self.max)
    }

    /// Check if a value lies inside the domain (inclusive)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Representable timestamp range, in microseconds since the Unix epoch
pub fn timestamp_range() -> (i64, i64) {
    (
        DateTime::<Utc>::MIN_UTC.timestamp_micros(),
        DateTime::<Utc>::MAX_UTC.timestamp_micros(),
    )
}

/// Timestamp range for which every offset in `±MAX_OFFSET_HOURS` is valid
pub fn offset_timestamp_range() -> (i64, i64) {
    let (min, max) = timestamp_range();
    let margin = i64::from(MAX_OFFSET_HOURS) * MICROS_PER_HOUR;
    (min + margin, max - margin)
}

/// Representable duration range, in milliseconds
pub fn duration_range() -> (i64, i64) {
    (
        TimeDelta::MIN.num_milliseconds(),
        TimeDelta::MAX.num_milliseconds(),
    )
}
