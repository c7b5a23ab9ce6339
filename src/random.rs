// src/random.rs
//! Random index selection, injectable so handlers and tests can share one
//! process-wide generator or swap in a deterministic one.

use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Picks an index in `[0, len)`. Returns `None` for an empty range.
pub trait IndexPicker: Send + Sync {
    fn pick(&self, len: usize) -> Option<usize>;
}

/// Uniform picker over a single seeded `StdRng`, shared by all requests.
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    /// Seed once from the wall clock (nanoseconds since the epoch).
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        Self::with_seed(nanos as u64)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl IndexPicker for SeededPicker {
    fn pick(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.lock().random_range(0..len))
    }
}

/// Always returns the same index (clamped to the last element).
/// Used for deterministic selection in tests and local demos.
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl IndexPicker for FixedPicker {
    fn pick(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.0.min(len - 1))
    }
}
