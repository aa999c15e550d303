//! Injectable randomness for layout and particle generation.
//!
//! ## Key Features
//!
//! - **Injectable**: generators take `&mut impl RandomSource`, never a global RNG
//! - **Seedable**: same seed produces identical layouts
//! - **Context streams**: layout and particle randomness never share a sequence
//!
//! ## Usage
//!
//! ```
//! use flipcard_gallery::core::{LayoutRng, RandomSource};
//!
//! let root = LayoutRng::new(42);
//! let mut positions = root.for_context("positions");
//! let mut particles = root.for_context("particles");
//!
//! // Streams are independent but reproducible
//! let a = positions.uniform(15.0, 85.0);
//! assert!((15.0..85.0).contains(&a));
//! assert_ne!(a, particles.uniform(15.0, 85.0));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniformly distributed unit values.
///
/// Everything random in the crate is expressed through this trait so tests
/// can pin outputs with [`ScriptedRng`].
pub trait RandomSource {
    /// Next value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform value between `min` and `max`.
    ///
    /// Computed as `min + u * (max - min)`, so a zero-width range yields `min`
    /// and a reversed range still produces a value between the two bounds.
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_unit() * (max - min)
    }

    /// Uniform index in `0..n`. Returns 0 when `n == 0`.
    fn pick(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        ((self.next_unit() * n as f64) as usize).min(n - 1)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Seedable RNG for gallery layouts.
///
/// Uses ChaCha8 so a seeded gallery reproduces the same card scatter and
/// particle bursts on every platform.
#[derive(Clone, Debug)]
pub struct LayoutRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl LayoutRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread RNG.
    ///
    /// This is what a live gallery uses: every mount scatters cards differently.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    /// The stream seed is FNV-1a over the seed and the context bytes, so it
    /// does not depend on the platform or the toolchain.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        Self::new(context_seed(self.seed, context))
    }
}

impl RandomSource for LayoutRng {
    fn next_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

fn context_seed(seed: u64, context: &str) -> u64 {
    seed.to_le_bytes()
        .iter()
        .chain(context.as_bytes())
        .fold(FNV_OFFSET, |hash, &byte| (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME))
}

/// Replays a fixed list of unit values, cycling when exhausted.
///
/// ```
/// use flipcard_gallery::core::{RandomSource, ScriptedRng};
///
/// let mut rng = ScriptedRng::new([0.0, 0.5]);
/// assert_eq!(rng.uniform(10.0, 20.0), 10.0);
/// assert_eq!(rng.uniform(10.0, 20.0), 15.0);
/// assert_eq!(rng.uniform(10.0, 20.0), 10.0);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRng {
    /// Create a scripted source. Values are clamped into `[0, 1)`; an empty
    /// script always yields 0.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { values, cursor: 0 }
    }

    /// A source that always returns `value`.
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self::new([value])
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
