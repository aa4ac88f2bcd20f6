//! Shared entropy source.
//!
//! The sequence generator consumes randomness through the [`RandomStream`]
//! capability trait rather than reaching for a hidden global, so callers can
//! inject a deterministically seeded stream in tests. [`Entropy`] is the
//! production implementation: a PRNG behind a mutex, cheaply cloneable and
//! safe to share across threads. A process-wide instance backs the
//! convenience functions in [`crate::sequence`].
//!
//! This is a pseudo-random source seeded from the clock. It is fine for
//! tokens and numeric codes; it must not be used for secret key material.

use std::sync::{Arc, LazyLock};
use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Number of usable random bits per draw.
pub const DRAW_BITS: u32 = 63;

/// A stream of pseudo-random 63-bit integers.
///
/// Implementations must be safe for concurrent draws: every caller observes
/// a linearizable sequence and no two callers receive the same raw value.
pub trait RandomStream {
    /// Draw the next random value. The low [`DRAW_BITS`] bits are random;
    /// the top bit is always clear.
    fn draw(&self) -> u64;
}

/// Thread-safe shared entropy source.
///
/// Clones share the underlying generator, so a clone handed to another
/// thread keeps the no-duplicate-draws guarantee.
#[derive(Clone)]
pub struct Entropy {
    rng: Arc<Mutex<StdRng>>,
}

impl Entropy {
    /// Create an entropy source seeded from the current time.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(time_seed())
    }

    /// Create an entropy source with a fixed seed.
    ///
    /// Two sources built from the same seed produce identical streams,
    /// which is what deterministic tests want.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        debug!(seed, "entropy source seeded");
        Self {
            rng: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    /// The process-wide shared entropy source.
    ///
    /// Seeded once from the clock on first use; lives for the rest of the
    /// process.
    #[must_use]
    pub fn shared() -> &'static Self {
        static SHARED: LazyLock<Entropy> = LazyLock::new(Entropy::new);
        &SHARED
    }
}

impl Default for Entropy {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomStream for Entropy {
    fn draw(&self) -> u64 {
        // Clearing the top bit leaves DRAW_BITS random bits.
        self.rng.lock().random::<u64>() >> 1
    }
}

impl std::fmt::Debug for Entropy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entropy").finish_non_exhaustive()
    }
}

/// Derive a seed from the wall clock.
fn time_seed() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |d| {
        d.as_secs()
            .wrapping_mul(1_000_000_000)
            .wrapping_add(u64::from(d.subsec_nanos()))
    })
}
