// rng.rs - xorshift32
//
// Visual jitter only. Seeded per animator; tests pin the seed.

const DEFAULT_SEED: u32 = 0xDEADBEEF;

#[derive(Clone, Debug)]
pub struct Rng(u32);

impl Rng {
    pub fn new(seed: u32) -> Self {
        // xorshift is stuck at zero forever
        Self(if seed == 0 { DEFAULT_SEED } else { seed })
    }

    /// Uniform in [0, 1)
    #[inline(always)]
    pub fn unit(&mut self) -> f64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        (self.0 >> 8) as f64 * (1.0 / 16777216.0)
    }

    /// Uniform in [lo, hi)
    #[inline]
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.unit()
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
