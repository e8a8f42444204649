//! Unobserved - values that pick their own type on first read
//!
//! An [`Unobserved`] cell is a test-data generator. It has no type and no
//! content until it is read; the first read commits it, irrevocably, to one
//! of nineteen kinds (booleans, every integer width, floats, decimals,
//! strings, characters, timestamps, durations, UUIDs, or an opaque object
//! that may be null) and to a value sampled from that kind's full domain.
//!
//! Code that consumes these values has to cope with whatever comes out:
//! empty strings, year -262143, `u64::MAX`, null.
//!
//! # Quick Start
//!
//! ```
//! use unobserved::{Unobserved, Value};
//!
//! let cell = Unobserved::new();
//! let value = cell.value();
//! if !value.is_null() {
//!     println!("{} ({})", value, value.kind());
//! }
//!
//! // Later reads return the same value
//! assert_eq!(cell.value(), value);
//! ```
//!
//! # Architecture
//!
//! Everything lives in `unobserved-core`; this crate re-exports it.

pub use unobserved_core::*;
