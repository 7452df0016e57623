//! Value and Index Sources
//!
//! Write passes draw the values they store, and random-order passes draw the
//! indices they visit, from a `ValueSource`. The source is passed explicitly
//! to every trial so tests can swap in a deterministic sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Supplier of written values and random indices.
pub trait ValueSource {
    /// Next value to store, in `[0, i32::MAX]`
    fn next_value(&mut self) -> i32;

    /// Uniformly chosen index in `[0, bound)`; `bound` is never zero
    fn pick_index(&mut self, bound: usize) -> usize;
}

impl<T: ValueSource + ?Sized> ValueSource for &mut T {
    #[inline]
    fn next_value(&mut self) -> i32 {
        (**self).next_value()
    }

    #[inline]
    fn pick_index(&mut self, bound: usize) -> usize {
        (**self).pick_index(bound)
    }
}

/// Pseudo-random source seeded once per process.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
    seed: u64,
}

impl SeededSource {
    /// Seed from the current system time
    pub fn from_clock() -> Self {
        // A clock before the epoch only changes the seed, not correctness.
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_seed(seed)
    }

    /// Seed explicitly, for reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this source was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl ValueSource for SeededSource {
    #[inline]
    fn next_value(&mut self) -> i32 {
        self.rng.gen_range(0..=i32::MAX)
    }

    #[inline]
    fn pick_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

/// Deterministic source driven by a function of the draw count.
///
/// The `k`-th value drawn is `value_fn(k)`. Indices come from a fixed script
/// when one is given, otherwise they cycle through `0..bound`.
pub struct SequenceSource<F> {
    value_fn: F,
    values_drawn: u64,
    index_script: Vec<usize>,
    indices_drawn: usize,
}

impl<F> SequenceSource<F>
where
    F: FnMut(u64) -> i32,
{
    /// Create a source whose values are `value_fn(0)`, `value_fn(1)`, ...
    pub fn new(value_fn: F) -> Self {
        Self {
            value_fn,
            values_drawn: 0,
            index_script: Vec::new(),
            indices_drawn: 0,
        }
    }

    /// Replay `script` (wrapping around) for random index draws
    pub fn with_indices(mut self, script: Vec<usize>) -> Self {
        self.index_script = script;
        self
    }

    /// Number of values handed out so far
    pub fn values_drawn(&self) -> u64 {
        self.values_drawn
    }

    /// Number of indices handed out so far
    pub fn indices_drawn(&self) -> usize {
        self.indices_drawn
    }
}

impl<F> ValueSource for SequenceSource<F>
where
    F: FnMut(u64) -> i32,
{
    fn next_value(&mut self) -> i32 {
        let value = (self.value_fn)(self.values_drawn);
        self.values_drawn += 1;
        value
    }

    fn pick_index(&mut self, bound: usize) -> usize {
        let index = if self.index_script.is_empty() {
            self.indices_drawn % bound
        } else {
            self.index_script[self.indices_drawn % self.index_script.len()]
        };
        self.indices_drawn += 1;
        index
    }
}
