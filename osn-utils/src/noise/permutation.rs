//! Seeded permutation table with a per-slot gradient cache.
//!
//! Each generator owns exactly one table. The shuffle is a fixed PRNG contract
//! (64-bit LCG driving an inside-out Fisher-Yates), so two tables built from the
//! same seed are bit-identical on every platform.

use std::{array, fmt};

use super::gradients::{GRADIENTS_2D, GRADIENTS_3D, GRADIENTS_4D, gradient};

/// Number of permutation slots.
pub const PSIZE: usize = 2048;
/// Mask applied to lattice coordinates before hashing.
pub const PMASK: i32 = 2047;

const LCG_MULTIPLIER: u64 = 6364136223846793005;
const LCG_INCREMENT: u64 = 1442695040888963407;

/// Permutation of `0..PSIZE` plus the gradient picked for every slot.
///
/// `D` is the dimension of the cached gradient vectors.
#[derive(Clone)]
pub struct PermutationTable<const D: usize> {
    seed: u64,
    perm: Box<[u16; PSIZE]>,
    gradients: Box<[[f64; D]; PSIZE]>,
}

impl<const D: usize> PermutationTable<D> {
    /// Build a table from `seed`, caching gradients from `gradient_set`.
    ///
    /// Slot `i` caches `gradient_set[perm[i] % gradient_set.len()]`.
    #[must_use]
    pub fn with_gradients(seed: u64, gradient_set: &[[f64; D]]) -> Self {
        let mut source: [u16; PSIZE] = array::from_fn(|i| i as u16);
        let mut perm = Box::new([0u16; PSIZE]);
        let mut gradients = Box::new([[0.0; D]; PSIZE]);

        let mut state = seed;
        for i in (0..PSIZE).rev() {
            state = state
                .wrapping_mul(LCG_MULTIPLIER)
                .wrapping_add(LCG_INCREMENT);
            let r = (state.wrapping_add(31) % (i as u64 + 1)) as usize;

            perm[i] = source[r];
            gradients[i] = gradient(gradient_set, usize::from(perm[i]));
            source[r] = source[i];
        }

        tracing::trace!(seed, dimension = D, "built permutation table");

        Self {
            seed,
            perm,
            gradients,
        }
    }

    /// Seed this table was built from.
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// The permutation itself.
    #[inline]
    #[must_use]
    pub fn perm(&self) -> &[u16; PSIZE] {
        &self.perm
    }

    /// The cached gradient for every slot, parallel to [`perm`](Self::perm).
    #[inline]
    #[must_use]
    pub fn gradients(&self) -> &[[f64; D]; PSIZE] {
        &self.gradients
    }

    /// Cached gradient at a hashed slot.
    #[inline]
    #[must_use]
    pub fn gradient(&self, slot: usize) -> &[f64; D] {
        &self.gradients[slot & PMASK as usize]
    }

    #[inline]
    fn lookup(&self, slot: usize) -> usize {
        usize::from(self.perm[slot & PMASK as usize])
    }
}

#[inline]
const fn masked(coord: i32) -> usize {
    (coord & PMASK) as usize
}

impl PermutationTable<2> {
    /// Build a 2D table from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_gradients(seed, &*GRADIENTS_2D)
    }

    /// Gradient slot for lattice point `(x, y)`.
    #[inline]
    #[must_use]
    pub fn hash(&self, x: i32, y: i32) -> usize {
        self.lookup(masked(x)) ^ masked(y)
    }
}

impl PermutationTable<3> {
    /// Build a 3D table from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_gradients(seed, &*GRADIENTS_3D)
    }

    /// Gradient slot for lattice point `(x, y, z)`.
    #[inline]
    #[must_use]
    pub fn hash(&self, x: i32, y: i32, z: i32) -> usize {
        self.lookup(self.lookup(masked(x)) ^ masked(y)) ^ masked(z)
    }
}

impl PermutationTable<4> {
    /// Build a 4D table from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_gradients(seed, &*GRADIENTS_4D)
    }

    /// Gradient slot for lattice point `(x, y, z, w)`.
    #[inline]
    #[must_use]
    pub fn hash(&self, x: i32, y: i32, z: i32, w: i32) -> usize {
        self.lookup(self.lookup(self.lookup(masked(x)) ^ masked(y)) ^ masked(z)) ^ masked(w)
    }
}

impl<const D: usize> fmt::Debug for PermutationTable<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PermutationTable")
            .field("dimension", &D)
            .field("seed", &self.seed)
            .field("head", &&self.perm[..8])
            .finish_non_exhaustive()
    }
}
