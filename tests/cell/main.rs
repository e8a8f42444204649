//! Unobserved Cell Integration Tests
//!
//! Exercises the public cell surface: resolve-once, kind selection,
//! value domains, comparison conventions, and behavior under threads.

#[path = "../common/mod.rs"]
mod common;

mod concurrency;
mod domains;
