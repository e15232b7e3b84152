//! RNG module - seedable random source for spawns
//!
//! Wraps a PCG32 generator so a whole game is reproducible from one `u64`
//! seed: the same seed and the same sequence of activations always yield the
//! same colors and the same spawn cells.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::types::{ColorId, Pos};

#[derive(Debug, Clone)]
pub struct SpawnRng {
    seed: u64,
    inner: Pcg32,
}

impl SpawnRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: Pcg32::seed_from_u64(seed),
        }
    }

    /// The seed this generator was created from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform value in `[0, max)`
    pub fn next_range(&mut self, max: usize) -> usize {
        self.inner.random_range(0..max)
    }

    /// Uniform pick from a palette of `palette_size` colors
    pub fn pick_color(&mut self, palette_size: u8) -> ColorId {
        ColorId::new(self.inner.random_range(0..palette_size))
    }

    /// Uniform cell of a `size` x `size` board (row drawn first)
    pub fn pick_cell(&mut self, size: usize) -> Pos {
        let row = self.next_range(size);
        let col = self.next_range(size);
        Pos::new(row, col)
    }
}

impl Default for SpawnRng {
    fn default() -> Self {
        Self::new(1)
    }
}
