//! Park–Miller minimal standard generator with a Bays–Durham shuffle.
//!
//! This module provides [`UniformGenerator`], the source every other stream
//! in the crate draws from.

use rand::{RngCore, SeedableRng};

use super::source::UniformSource;

/// Multiplier of the minimal standard LCG.
const IA: i32 = 16_807;
/// Modulus, the Mersenne prime 2^31 - 1.
const IM: i32 = 2_147_483_647;
/// Schrage decomposition IM = IA * IQ + IR.
const IQ: i32 = 127_773;
const IR: i32 = 2_836;
/// Shuffle table length.
const NTAB: usize = 32;
/// Warm-up steps before the table is filled.
const WARMUP: usize = 8;
/// Divisor mapping a table value to a table index.
const NDIV: i32 = 1 + (IM - 1) / NTAB as i32;
const AM: f64 = 1.0 / IM as f64;
const EPS: f64 = 1.2e-7;

/// Largest value [`UniformGenerator::next_uniform`] ever returns.
pub const MAX_UNIFORM: f64 = 1.0 - EPS;

/// Uniform deviate generator in [0, 1).
///
/// A linear congruential generator with multiplier 16807 and modulus
/// 2^31 - 1 (evaluated with Schrage's method, so no step overflows 32 bits),
/// whose outputs are passed through a 32-entry shuffle table to break up
/// low-order serial correlation.
///
/// # Seeding
///
/// The table is (re)built on the first draw, and on any draw that finds the
/// internal seed non-positive. Building it normalises the seed to
/// `max(1, -seed)`: a negative seed selects a stream, and every positive
/// seed (including the default of 1) selects the same stream as seed 1.
///
/// # Examples
///
/// ```rust
/// use noise_core::rng::{UniformGenerator, MAX_UNIFORM};
///
/// let mut a = UniformGenerator::new(-5);
/// let mut b = UniformGenerator::new(-5);
///
/// for _ in 0..100 {
///     let u = a.next_uniform();
///     assert_eq!(u, b.next_uniform());
///     assert!(u >= 0.0 && u <= MAX_UNIFORM);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct UniformGenerator {
    /// Current LCG state.
    seed: i32,
    /// The seed passed at construction or on the last reseed.
    initial_seed: i32,
    /// Bays–Durham shuffle table.
    table: [i32; NTAB],
    /// Last value pulled from the table; 0 until the table is built.
    last: i32,
}

impl UniformGenerator {
    /// Creates a generator with the given seed.
    ///
    /// No work is done until the first draw.
    #[inline]
    pub fn new(seed: i32) -> Self {
        Self {
            seed,
            initial_seed: seed,
            table: [0; NTAB],
            last: 0,
        }
    }

    /// Returns the seed used for initialisation (or the last reseed).
    #[inline]
    pub fn initial_seed(&self) -> i32 {
        self.initial_seed
    }

    /// Returns the current internal LCG state.
    #[inline]
    pub fn state(&self) -> i32 {
        self.seed
    }

    /// Restarts the stream as if freshly constructed with `seed`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use noise_core::rng::UniformGenerator;
    ///
    /// let mut rng = UniformGenerator::new(-11);
    /// let first = rng.next_uniform();
    /// rng.next_uniform();
    ///
    /// rng.reseed(-11);
    /// assert_eq!(rng.next_uniform(), first);
    /// ```
    pub fn reseed(&mut self, seed: i32) {
        self.seed = seed;
        self.initial_seed = seed;
        self.last = 0;
    }

    /// Returns the next uniform deviate in [0, [`MAX_UNIFORM`]].
    #[inline]
    pub fn next_uniform(&mut self) -> f64 {
        let raw = self.next_raw();
        (AM * f64::from(raw)).min(MAX_UNIFORM)
    }

    /// Fills the buffer with uniform deviates. Empty buffers are a no-op.
    #[inline]
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.next_uniform();
        }
    }

    /// Advances the generator and returns the shuffled value in [1, IM - 1].
    fn next_raw(&mut self) -> i32 {
        if self.seed <= 0 || self.last == 0 {
            self.initialise_table();
        }

        self.seed = schrage_step(self.seed);
        let j = (self.last / NDIV) as usize;
        self.last = self.table[j];
        self.table[j] = self.seed;
        self.last
    }

    fn initialise_table(&mut self) {
        // IM itself is a fixed point of the step (it maps to 0), so the
        // normalised seed stays strictly below it.
        self.seed = self.seed.saturating_neg().clamp(1, IM - 1);
        tracing::trace!(seed = self.seed, "initialising shuffle table");

        for j in (0..NTAB + WARMUP).rev() {
            self.seed = schrage_step(self.seed);
            if j < NTAB {
                self.table[j] = self.seed;
            }
        }
        self.last = self.table[0];
    }
}

/// One LCG step, `IA * seed mod IM`, without 32-bit overflow.
#[inline]
fn schrage_step(seed: i32) -> i32 {
    let k = seed / IQ;
    let next = IA * (seed - k * IQ) - IR * k;
    if next < 0 {
        next + IM
    } else {
        next
    }
}

impl Default for UniformGenerator {
    /// Seed 1.
    fn default() -> Self {
        Self::new(1)
    }
}

impl UniformSource for UniformGenerator {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        UniformGenerator::next_uniform(self)
    }
}

/// Lets the generator drive `rand` / `rand_distr` distributions.
///
/// Each `u32` is scaled from one uniform deviate, so only the top ~31 bits
/// carry entropy.
impl RngCore for UniformGenerator {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_uniform() * 4_294_967_296.0) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.next_u32());
        let lo = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Byte seeds always map to a negative internal seed, so distinct byte
/// seeds select distinct streams (positive internal seeds all collapse to 1).
impl SeedableRng for UniformGenerator {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        let magnitude = (i32::from_le_bytes(seed) & i32::MAX).max(1);
        Self::new(-magnitude)
    }
}
