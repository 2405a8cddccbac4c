//! Noise primitives for OpenSimplex2S.
//!
//! - [`gradients`] - normalised gradient sets (24 in 2D, 48 in 3D, 160 in 4D)
//! - [`lattice`] - candidate lattice points per cell/orientation
//! - [`PermutationTable`] - seeded permutation and gradient cache

pub mod gradients;
pub mod lattice;
mod permutation;

pub use permutation::{PMASK, PSIZE, PermutationTable};
