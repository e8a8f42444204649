//! Core types for unobserved values
//!
//! An [`Unobserved`] cell has no type and no content until it is first read.
//! On first observation it collapses, once and for all, into one of the
//! nineteen [`Kind`]s and a [`Value`] sampled from that kind's domain.
//!
//! This crate defines:
//! - Kind: The fixed universe of nineteen value kinds
//! - Value: Tagged union holding a resolved payload
//! - Bounds: Numeric domain table used to scale uniform samples
//! - sample: Per-kind value synthesis over any `rand::Rng`
//! - Unobserved: The lazily resolving cell itself
//! - CellConfig: Seed delay and string length settings
//! - Error: Internal error type (never escapes the cell API)
//!
//! ## Usage
//!
//! ```
//! use unobserved_core::Unobserved;
//!
//! let cell = Unobserved::new();
//! assert!(!cell.is_resolved());
//!
//! let kind = cell.value().kind();
//! assert_eq!(cell.kind(), kind);
//! assert!(cell.is_resolved());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bounds;
pub mod cell;
pub mod config;
pub mod error;
pub mod kind;
pub mod sample;
pub mod value;

pub use bounds::Bounds;
pub use cell::Unobserved;
pub use config::{CellConfig, CONFIG_FILE_NAME, DEFAULT_MAX_STRING_LENGTH, DEFAULT_SEED_DELAY_MS};
pub use error::{Error, Result};
pub use kind::Kind;
pub use sample::{synthesize, ALPHABET};
pub use value::{OpaqueObject, Value};
