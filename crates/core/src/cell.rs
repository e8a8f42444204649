//! The unobserved cell
//!
//! A cell starts with no kind and no value. The first call to
//! [`Unobserved::value`] collapses it:
//!
//! 1. Take the process-wide resolution lock
//! 2. Pause for the configured seed delay
//! 3. Seed a fresh generator from the high-resolution clock
//! 4. Select the kind (unless [`Unobserved::kind`] already memoized one)
//! 5. Synthesize a value of that kind and store it
//!
//! Every later call returns the stored value without locking.
//!
//! ## Locking
//!
//! One `RESOLUTION_LOCK` is shared by all cells, so unrelated cells resolve
//! one at a time. Readers that lose the race wait on the lock, then find the
//! value already stored.
//!
//! ## Kind Before Value
//!
//! [`Unobserved::kind`] does not take the resolution lock. It seeds the cell's
//! own generator from the clock if none exists yet, then memoizes the kind.
//! Kind selection therefore never runs on an unseeded generator, and a kind
//! memoized early is the kind the value is later synthesized for.

use crate::config::CellConfig;
use crate::kind::Kind;
use crate::sample::synthesize;
use crate::value::Value;
use once_cell::sync::{Lazy, OnceCell};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, trace};

/// Serializes resolution across every cell in the process.
///
/// Uses parking_lot::Mutex so a panic during synthesis cannot poison it.
static RESOLUTION_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// A value whose kind and content are decided on first observation
///
/// # Thread Safety
///
/// `Unobserved` is `Send + Sync`. Share it with `Arc` and call
/// [`value`](Unobserved::value) from any thread; exactly one caller resolves.
///
/// # Example
///
/// ```
/// use unobserved_core::{Unobserved, Value};
///
/// let a = Unobserved::observed(Value::Int32(42));
/// let b = Unobserved::observed(Value::Int32(100));
/// assert!(a.compare(&b).is_lt());
/// assert!(a == a);
/// ```
pub struct Unobserved {
    kind: OnceCell<Kind>,
    value: OnceCell<Value>,
    rng: Mutex<Option<StdRng>>,
    config: CellConfig,
}

impl Unobserved {
    /// Create a pristine cell with the default config
    pub fn new() -> Self {
        Self::with_config(CellConfig::default())
    }

    /// Create a pristine cell with an explicit config
    pub fn with_config(config: CellConfig) -> Self {
        Self {
            kind: OnceCell::new(),
            value: OnceCell::new(),
            rng: Mutex::new(None),
            config,
        }
    }

    /// Create a cell that has already collapsed into `value`
    pub fn observed(value: Value) -> Self {
        let cell = Self::new();
        let _ = cell.kind.set(value.kind());
        let _ = cell.value.set(value);
        cell
    }

    /// The config this cell resolves with
    pub fn config(&self) -> &CellConfig {
        &self.config
    }

    /// Check if the value has been resolved
    pub fn is_resolved(&self) -> bool {
        self.value.get().is_some()
    }

    /// The cell's kind
    ///
    /// Memoized on first call. Does not resolve the value.
    pub fn kind(&self) -> Kind {
        *self.kind.get_or_init(|| {
            let mut slot = self.rng.lock();
            let rng = slot.get_or_insert_with(clock_seeded_rng);
            Kind::sample(rng)
        })
    }

    /// The resolved value, resolving it on first call
    pub fn value(&self) -> &Value {
        if let Some(value) = self.value.get() {
            return value;
        }

        trace!("Waiting for resolution lock");
        let _guard = RESOLUTION_LOCK.lock();

        // Another thread may have resolved while we waited
        if let Some(value) = self.value.get() {
            return value;
        }

        std::thread::sleep(self.config.seed_delay());
        let mut rng = clock_seeded_rng();
        let kind = *self.kind.get_or_init(|| Kind::sample(&mut rng));
        let value = synthesize(kind, &mut rng, &self.config);
        *self.rng.lock() = Some(rng);

        debug!(kind = %kind, "Resolved unobserved value");
        self.value.get_or_init(|| value)
    }

    /// Compare against another cell
    ///
    /// - Unresolved `self`: a uniformly random ordering, without resolving
    /// - Incomparable values (different kinds, opaque objects, or an
    ///   unresolved `other`): `Less`
    /// - Otherwise the natural ordering of the two values
    ///
    /// This is not a total order: cross-kind pairs are `Less` in both
    /// directions.
    pub fn compare(&self, other: &Unobserved) -> Ordering {
        let Some(mine) = self.value.get() else {
            return self.random_ordering();
        };
        other
            .value
            .get()
            .and_then(|theirs| mine.partial_compare(theirs))
            .unwrap_or(Ordering::Less)
    }

    fn random_ordering(&self) -> Ordering {
        let mut slot = self.rng.lock();
        let rng = slot.get_or_insert_with(clock_seeded_rng);
        match rng.gen_range(-1..=1) {
            -1 => Ordering::Less,
            0 => Ordering::Equal,
            _ => Ordering::Greater,
        }
    }
}

/// Generator seeded from nanoseconds since the Unix epoch
fn clock_seeded_rng() -> StdRng {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    StdRng::seed_from_u64(nanos as u64)
}

impl Default for Unobserved {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Value> for Unobserved {
    fn from(value: Value) -> Self {
        Self::observed(value)
    }
}

impl PartialEq for Unobserved {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl fmt::Display for Unobserved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl fmt::Debug for Unobserved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unobserved")
            .field("kind", &self.kind.get())
            .field("value", &self.value.get())
            .finish()
    }
}
