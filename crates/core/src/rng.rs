//! RNG module - seeded pipe gap generation
//!
//! Gap offsets are drawn from a PCG stream so a run is fully reproducible from
//! its seed (tests and replays rely on this).

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Random source for pipe gap offsets.
#[derive(Debug, Clone)]
pub struct GapRng {
    seed: u64,
    inner: Pcg32,
}

impl GapRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this stream was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a gap-top offset uniformly from `[0, screen_height - gap_height)`.
    ///
    /// When the screen is not taller than the gap the range is empty; the
    /// offset is clamped to 0 and no number is consumed from the stream.
    pub fn next_gap_top(&mut self, screen_height: u32, gap_height: u32) -> u32 {
        let span = screen_height.saturating_sub(gap_height);
        if span == 0 {
            return 0;
        }
        self.inner.gen_range(0..span)
    }
}

impl Default for GapRng {
    fn default() -> Self {
        Self::new(1)
    }
}
