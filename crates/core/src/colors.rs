//! Next-colors queue
//!
//! Holds the colors of the next spawn batch so the player can plan ahead.
//! Each slot is drawn independently and uniformly from the palette (with
//! replacement). Reading the queue with [`ColorManager::consume`] does not
//! refill it; the caller regenerates once the batch has been placed.

use arrayvec::ArrayVec;

use crate::rng::SpawnRng;
use crate::types::{ColorId, MAX_NEXT_LEN};

/// One spawn batch worth of colors
pub type ColorBatch = ArrayVec<ColorId, MAX_NEXT_LEN>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorManager {
    palette_size: u8,
    len: usize,
    next: ColorBatch,
}

/// Why [`ColorManager::set_next`] refused a restore
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetNextError {
    WrongLength { expected: usize, found: usize },
    OutOfPalette(ColorId),
}

impl ColorManager {
    /// Queue of `len` slots, initially filled with the first palette color
    /// until [`generate_next`](Self::generate_next) runs.
    pub fn new(palette_size: u8, len: usize) -> Self {
        assert!(len <= MAX_NEXT_LEN, "queue length {} over capacity", len);
        let mut next = ArrayVec::new();
        for _ in 0..len {
            next.push(ColorId::new(0));
        }
        Self {
            palette_size,
            len,
            next,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn palette_size(&self) -> u8 {
        self.palette_size
    }

    /// Refill every slot with a fresh uniform pick
    pub fn generate_next(&mut self, rng: &mut SpawnRng) {
        for slot in self.next.iter_mut() {
            *slot = rng.pick_color(self.palette_size);
        }
    }

    /// Hand out the current batch. Must be followed by
    /// [`generate_next`](Self::generate_next) once the batch is used.
    pub fn consume(&self) -> ColorBatch {
        self.next.clone()
    }

    /// Preview without consuming
    pub fn peek(&self) -> &[ColorId] {
        &self.next
    }

    /// Restore a persisted queue
    pub fn set_next(&mut self, colors: &[ColorId]) -> Result<(), SetNextError> {
        if colors.len() != self.len {
            return Err(SetNextError::WrongLength {
                expected: self.len,
                found: colors.len(),
            });
        }
        if let Some(&bad) = colors.iter().find(|c| c.index() >= self.palette_size) {
            return Err(SetNextError::OutOfPalette(bad));
        }
        self.next.clear();
        self.next.extend(colors.iter().copied());
        Ok(())
    }
}
