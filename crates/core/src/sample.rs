//! Value synthesis
//!
//! [`synthesize`] turns a kind and a random generator into a value:
//!
//! - Boolean and Object: a fair coin
//! - String: uniform length in `0..max_string_length`, alphanumeric characters
//! - Char: one character picked from a freshly drawn string
//! - Uuid: random v4, independent of the generator
//! - Everything else: a uniform draw scaled into the kind's [`Bounds`], then
//!   converted to the payload type (rounding and saturation are accepted)

use crate::bounds::{
    duration_range, offset_timestamp_range, timestamp_range, Bounds, MAX_OFFSET_HOURS,
};
use crate::config::CellConfig;
use crate::kind::Kind;
use crate::value::{OpaqueObject, Value};
use chrono::{DateTime, FixedOffset, Offset, TimeDelta, Utc};
use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

/// Characters used for generated strings
pub const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Synthesize a value of the given kind
pub fn synthesize<R: Rng + ?Sized>(kind: Kind, rng: &mut R, config: &CellConfig) -> Value {
    match kind {
        Kind::Boolean => Value::Boolean(rng.gen_bool(0.5)),
        Kind::String => Value::String(random_string(rng, config.max_string_length)),
        Kind::Char => Value::Char(random_char(rng, config.max_string_length)),
        Kind::Uuid => Value::Uuid(Uuid::new_v4()),
        Kind::Object => Value::Object(rng.gen_bool(0.5).then_some(OpaqueObject)),
        Kind::Byte => Value::Byte(draw(kind, rng).round() as u8),
        Kind::SByte => Value::SByte(draw(kind, rng).round() as i8),
        Kind::Int16 => Value::Int16(draw(kind, rng).round() as i16),
        Kind::UInt16 => Value::UInt16(draw(kind, rng).round() as u16),
        Kind::Int32 => Value::Int32(draw(kind, rng).round() as i32),
        Kind::UInt32 => Value::UInt32(draw(kind, rng).round() as u32),
        Kind::Int64 => Value::Int64(draw(kind, rng).round() as i64),
        Kind::UInt64 => Value::UInt64(draw(kind, rng).round() as u64),
        Kind::Single => Value::Single(draw(kind, rng) as f32),
        Kind::Double => Value::Double(draw(kind, rng)),
        Kind::Decimal => Value::Decimal(to_decimal(draw(kind, rng))),
        Kind::Timestamp => {
            let ticks = draw(kind, rng);
            Value::Timestamp(timestamp_from_ticks(ticks, timestamp_range()))
        }
        Kind::TimestampWithOffset => {
            let ticks = draw(kind, rng);
            let utc = timestamp_from_ticks(ticks, offset_timestamp_range());
            let hours = rng.gen_range(-MAX_OFFSET_HOURS..=MAX_OFFSET_HOURS);
            let offset = FixedOffset::east_opt(hours * 3_600).unwrap_or_else(|| Utc.fix());
            Value::TimestampWithOffset(utc.with_timezone(&offset))
        }
        Kind::Duration => {
            let (min, max) = duration_range();
            let millis = (draw(kind, rng) as i64).clamp(min, max);
            Value::Duration(TimeDelta::try_milliseconds(millis).unwrap_or_else(TimeDelta::zero))
        }
    }
}

/// Draw a random alphanumeric string with length in `0..max_length`
///
/// A `max_length` of 0 is treated as 1 (always empty).
pub fn random_string<R: Rng + ?Sized>(rng: &mut R, max_length: usize) -> String {
    let length = rng.gen_range(0..max_length.max(1));
    (0..length).map(|_| alphabet_char(rng)).collect()
}

fn random_char<R: Rng + ?Sized>(rng: &mut R, max_length: usize) -> char {
    let source = random_string(rng, max_length);
    if source.is_empty() {
        // Same distribution as indexing a one-character string.
        return alphabet_char(rng);
    }
    let index = rng.gen_range(0..source.len());
    char::from(source.as_bytes()[index])
}

fn alphabet_char<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())])
}

/// Uniform draw scaled into the kind's domain; zero-width if it has none
fn draw<R: Rng + ?Sized>(kind: Kind, rng: &mut R) -> f64 {
    let bounds = Bounds::of(kind).unwrap_or_else(|e| {
        debug!(kind = %kind, error = %e, "Boundary lookup failed, using zero-width domain");
        Bounds::ZERO
    });
    bounds.scale(rng.gen::<f64>())
}

fn timestamp_from_ticks(ticks: f64, (min, max): (i64, i64)) -> DateTime<Utc> {
    let micros = (ticks as i64).clamp(min, max);
    DateTime::from_timestamp_micros(micros).unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(if value < 0.0 {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}
