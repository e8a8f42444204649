//! Value Domain Tests
//!
//! Resolved values stay inside their kind's domain, strings stay under the
//! configured length bound, and degenerate values are reachable.

use crate::common::*;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use unobserved::bounds::{duration_range, offset_timestamp_range, timestamp_range, Bounds};
use unobserved::sample::random_string;
use unobserved::synthesize;

fn assert_in_domain(value: &Value) {
    match value {
        Value::Timestamp(t) => {
            assert!(*t >= DateTime::<Utc>::MIN_UTC && *t <= DateTime::<Utc>::MAX_UTC);
            let (min, max) = timestamp_range();
            assert!((min..=max).contains(&t.timestamp_micros()), "{:?}", t);
        }
        Value::TimestampWithOffset(t) => {
            let (min, max) = offset_timestamp_range();
            assert!((min..=max).contains(&t.timestamp_micros()), "{:?}", t);
            let seconds = t.offset().local_minus_utc();
            assert_eq!(seconds % 3_600, 0);
            assert!((-14..=14).contains(&(seconds / 3_600)));
        }
        Value::Duration(d) => {
            let (min, max) = duration_range();
            assert!((min..=max).contains(&d.num_milliseconds()), "{:?}", d);
        }
        Value::String(s) => {
            assert!(s.bytes().all(|b| b.is_ascii_alphanumeric()));
        }
        Value::Char(c) => assert!(c.is_ascii_alphanumeric()),
        Value::Boolean(_) | Value::Uuid(_) | Value::Object(_) => {}
        numeric => {
            let bounds = Bounds::of(numeric.kind()).unwrap();
            let v = numeric.as_f64().unwrap();
            assert!(bounds.contains(v), "{:?} outside {:?}", numeric, bounds);
        }
    }
}

#[test]
fn synthesized_values_stay_in_domain() {
    let config = fast_config();
    let mut rng = StdRng::seed_from_u64(99);
    for kind in Kind::ALL {
        for _ in 0..2_000 {
            let value = synthesize(kind, &mut rng, &config);
            assert_eq!(value.kind(), kind);
            assert_in_domain(&value);
        }
    }
}

#[test]
fn resolved_cells_stay_in_domain() {
    for _ in 0..500 {
        let cell = fast_cell();
        assert_in_domain(cell.value());
    }
}

#[test]
fn string_lengths_respect_bound() {
    let config = fast_config();
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..2_000 {
        if let Value::String(s) = synthesize(Kind::String, &mut rng, &config) {
            assert!(s.len() < config.max_string_length);
        }
    }
}

#[test]
fn default_string_length_bound_is_one_mebibyte() {
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..20 {
        let s = random_string(&mut rng, CellConfig::default().max_string_length);
        assert!(s.len() < 1_048_576);
    }
}

#[test]
fn empty_string_is_a_reachable_outcome() {
    let config = CellConfig {
        seed_delay_ms: 0,
        max_string_length: 3,
    };
    let mut rng = StdRng::seed_from_u64(13);
    let found_empty = (0..500).any(|_| {
        synthesize(Kind::String, &mut rng, &config)
            .as_str()
            .map(str::is_empty)
            .unwrap_or(false)
    });
    assert!(found_empty);
}

#[test]
fn unit_string_bound_always_yields_empty_strings_and_valid_chars() {
    let config = CellConfig {
        seed_delay_ms: 0,
        max_string_length: 1,
    };
    let mut rng = StdRng::seed_from_u64(14);
    for _ in 0..50 {
        assert_eq!(synthesize(Kind::String, &mut rng, &config).to_string(), "");
        assert!(matches!(
            synthesize(Kind::Char, &mut rng, &config),
            Value::Char(c) if c.is_ascii_alphanumeric()
        ));
    }
}

#[test]
fn extreme_dates_are_reachable() {
    // Over the chrono range nearly every sample lies far outside 0..=9999 AD
    let config = fast_config();
    let mut rng = StdRng::seed_from_u64(15);
    let outside_common_era = (0..200)
        .filter_map(|_| match synthesize(Kind::Timestamp, &mut rng, &config) {
            Value::Timestamp(t) => Some(t),
            _ => None,
        })
        .filter(|t| {
            use chrono::Datelike;
            !(1..=9999).contains(&t.year())
        })
        .count();
    assert!(outside_common_era > 150);
}
