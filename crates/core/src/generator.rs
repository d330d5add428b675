//! Next-shape generators
//!
//! The board asks a [`ShapeGenerator`] for every new piece. Three policies
//! are provided:
//!
//! - [`RandomGenerator`]: each kind with equal probability, independently
//! - [`BagGenerator`]: shuffled bags holding one of each kind
//! - [`SequenceGenerator`]: a fixed, repeating list (deterministic tests)
//!
//! Randomness comes from [`SimpleRng`], a seeded LCG, so games replay
//! identically from the same seed.

use crate::shape::Shape;
use crate::types::PieceKind;

/// Supplies the next piece, always in the Up rotation
pub trait ShapeGenerator {
    fn next_shape(&mut self) -> Shape;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // Seed 0 is an alias for seed 1.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in `[0, max)`, taken from the high bits
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }

    /// Fisher-Yates shuffle
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Uniform, memoryless choice among the seven kinds
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    rng: SimpleRng,
}

impl RandomGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ShapeGenerator for RandomGenerator {
    fn next_shape(&mut self) -> Shape {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        Shape::new(PieceKind::ALL[idx])
    }
}

/// 7-bag generator: every run of seven pieces holds each kind once
#[derive(Debug, Clone)]
pub struct BagGenerator {
    bag: [PieceKind; 7],
    bag_index: usize,
    rng: SimpleRng,
}

impl BagGenerator {
    pub fn new(seed: u32) -> Self {
        let mut generator = Self {
            bag: PieceKind::ALL,
            bag_index: 0,
            rng: SimpleRng::new(seed),
        };
        generator.refill_bag();
        generator
    }

    fn refill_bag(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// Kinds left in the current bag
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag[self.bag_index..]
    }
}

impl ShapeGenerator for BagGenerator {
    fn next_shape(&mut self) -> Shape {
        if self.bag_index >= self.bag.len() {
            self.refill_bag();
        }
        let kind = self.bag[self.bag_index];
        self.bag_index += 1;
        Shape::new(kind)
    }
}

/// Replays a fixed list of kinds, wrapping around at the end
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    kinds: Vec<PieceKind>,
    index: usize,
}

impl SequenceGenerator {
    /// An empty list falls back to a single O piece.
    pub fn new(kinds: Vec<PieceKind>) -> Self {
        let kinds = if kinds.is_empty() {
            vec![PieceKind::O]
        } else {
            kinds
        };
        Self { kinds, index: 0 }
    }

    /// Always the same kind
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }
}

impl ShapeGenerator for SequenceGenerator {
    fn next_shape(&mut self) -> Shape {
        let kind = self.kinds[self.index % self.kinds.len()];
        self.index = (self.index + 1) % self.kinds.len();
        Shape::new(kind)
    }
}

impl<G: ShapeGenerator + ?Sized> ShapeGenerator for Box<G> {
    fn next_shape(&mut self) -> Shape {
        (**self).next_shape()
    }
}
