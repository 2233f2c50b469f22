//! Piece randomization.
//!
//! A small seedable LCG keeps games reproducible under test without
//! pulling in an RNG crate; the binary seeds it from the clock. Each
//! draw picks one of the five shape variants uniformly.

use crate::types::ShapeId;

/// Simple LCG (Linear Congruential Generator) RNG.
/// Uses constants from Numerical Recipes.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed (0 is remapped to 1).
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a random value in range [0, max).
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Uniform source of new piece shapes.
#[derive(Debug, Clone)]
pub struct PieceSource {
    rng: SimpleRng,
}

impl PieceSource {
    /// Create a piece source with the given seed.
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next shape, uniformly over the five variants.
    pub fn draw(&mut self) -> ShapeId {
        let index = self.rng.next_range(ShapeId::ALL.len() as u32) as usize;
        ShapeId::ALL[index]
    }

    /// Current RNG state, usable as a seed.
    pub fn seed(&self) -> u32 {
        self.rng.state
    }
}

impl Default for PieceSource {
    fn default() -> Self {
        Self::new(1)
    }
}
