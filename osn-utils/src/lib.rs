//! Low-level building blocks for OpenSimplex2S noise.
//!
//! Everything here is either a process-wide constant table or a small seeded
//! structure owned by a generator:
//!
//! - [`noise::gradients`] - normalised gradient sets for 2D, 3D and 4D
//! - [`noise::lattice`] - candidate lattice points per cell/orientation
//! - [`noise::PermutationTable`] - seeded permutation plus gradient cache
//! - [`math`] - scalar helpers shared by the evaluators

pub mod math;
pub mod noise;
