//! A Mersenne Twister random state that draws the same streams as NumPy's
//! legacy `np.random` functions.
//!
//! The lesson datasets were first generated with `np.random.seed(n)`
//! followed by calls such as `np.random.random`, `np.random.randn` and
//! `np.random.randint`. [`RandomState`] consumes 32-bit words in the same
//! order and applies the same transforms, so a Rust run reproduces those
//! arrays exactly.
//!
//! ```rust
//! use mlfund::RandomState;
//!
//! let mut rng = RandomState::new(0);
//! let x = rng.random_array((2, 3));
//! assert_eq!(x.shape(), &[2, 3]);
//! assert!((x[[0, 0]] - 0.5488135039273248).abs() < 1e-15);
//! ```

use ndarray::{Array, Dimension, ShapeBuilder};
use rand::{Error, RngCore, SeedableRng};
use rand_mt::Mt;

#[derive(Clone, Debug)]
pub struct RandomState {
    mt: Mt,
    gauss: Option<f64>,
}

impl RandomState {
    /// Equivalent of `np.random.seed(seed)` with an integer seed.
    pub fn new(seed: u32) -> Self {
        Self {
            mt: Mt::new(seed),
            gauss: None,
        }
    }

    /// Uniform double in `[0, 1)` with 53 random bits.
    pub fn random_sample(&mut self) -> f64 {
        let a = self.mt.next_u32() >> 5;
        let b = self.mt.next_u32() >> 6;
        (f64::from(a) * 67_108_864.0 + f64::from(b)) / 9_007_199_254_740_992.0
    }

    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.random_sample()
    }

    /// Standard normal deviate from the polar Box-Muller method.
    ///
    /// Each accepted pair yields two deviates; the second is cached and
    /// returned by the next call.
    pub fn gauss(&mut self) -> f64 {
        if let Some(cached) = self.gauss.take() {
            return cached;
        }

        loop {
            let x1 = 2.0 * self.random_sample() - 1.0;
            let x2 = 2.0 * self.random_sample() - 1.0;
            let r2 = x1 * x1 + x2 * x2;

            if r2 < 1.0 && r2 != 0.0 {
                let f = (-2.0 * r2.ln() / r2).sqrt();
                self.gauss = Some(f * x1);
                return f * x2;
            }
        }
    }

    pub fn normal(&mut self, loc: f64, scale: f64) -> f64 {
        loc + scale * self.gauss()
    }

    /// Integer in `[low, high)` by masked rejection sampling.
    ///
    /// # Panics
    ///
    /// If `high` is not greater than `low`.
    pub fn randint(&mut self, low: i64, high: i64) -> i64 {
        assert!(high > low, "randint needs low < high, got [{low}, {high})");
        let range = high.wrapping_sub(low).wrapping_sub(1) as u64;
        low.wrapping_add(self.bounded(range) as i64)
    }

    fn bounded(&mut self, range: u64) -> u64 {
        if range == 0 {
            return 0;
        }

        if range <= u64::from(u32::MAX) {
            if range == u64::from(u32::MAX) {
                return u64::from(self.mt.next_u32());
            }
            let mask = mask_for(range);
            loop {
                let value = u64::from(self.mt.next_u32()) & mask;
                if value <= range {
                    return value;
                }
            }
        }

        if range == u64::MAX {
            return self.next_u64();
        }
        let mask = mask_for(range);
        loop {
            let value = self.next_u64() & mask;
            if value <= range {
                return value;
            }
        }
    }

    /// Array of `random_sample` draws, filled in row-major order.
    pub fn random_array<Sh, D>(&mut self, shape: Sh) -> Array<f64, D>
    where
        Sh: ShapeBuilder<Dim = D>,
        D: Dimension,
    {
        Array::from_shape_simple_fn(shape, || self.random_sample())
    }

    pub fn uniform_array<Sh, D>(&mut self, low: f64, high: f64, shape: Sh) -> Array<f64, D>
    where
        Sh: ShapeBuilder<Dim = D>,
        D: Dimension,
    {
        Array::from_shape_simple_fn(shape, || self.uniform(low, high))
    }

    pub fn standard_normal_array<Sh, D>(&mut self, shape: Sh) -> Array<f64, D>
    where
        Sh: ShapeBuilder<Dim = D>,
        D: Dimension,
    {
        Array::from_shape_simple_fn(shape, || self.gauss())
    }

    pub fn normal_array<Sh, D>(&mut self, loc: f64, scale: f64, shape: Sh) -> Array<f64, D>
    where
        Sh: ShapeBuilder<Dim = D>,
        D: Dimension,
    {
        Array::from_shape_simple_fn(shape, || self.normal(loc, scale))
    }

    pub fn randint_array<Sh, D>(&mut self, low: i64, high: i64, shape: Sh) -> Array<i64, D>
    where
        Sh: ShapeBuilder<Dim = D>,
        D: Dimension,
    {
        Array::from_shape_simple_fn(shape, || self.randint(low, high))
    }
}

/// Smallest all-ones bit mask covering `range`.
fn mask_for(range: u64) -> u64 {
    u64::MAX >> range.leading_zeros()
}

impl RngCore for RandomState {
    fn next_u32(&mut self) -> u32 {
        self.mt.next_u32()
    }

    // High word first, as NumPy composes 64-bit draws.
    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.mt.next_u32());
        let lo = u64::from(self.mt.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let word = self.mt.next_u32().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for RandomState {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
