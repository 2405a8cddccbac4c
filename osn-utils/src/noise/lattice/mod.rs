//! Precomputed lattice geometry.
//!
//! For every cell/orientation index an evaluator can compute from a sample's
//! fractional position, these tables list the lattice points that may contribute
//! to that sample. Each point carries its integer offset from the cell base and
//! a baked displacement correction, so the evaluator only adds the sample offset.
//!
//! The tables are built on first use and never mutated afterwards.

mod lattice_2d;
mod lattice_3d;
mod lattice_4d;

pub use lattice_2d::{
    LATTICE_2D, LatticePoint2, ORIENTATION_COUNT_2D, POINTS_PER_ORIENTATION_2D, UNSKEW_2D,
};
pub use lattice_3d::{
    BLOCK_COUNT_3D, BlockWalk, LATTICE_3D, LatticePoint3, NEXT_ON_FAILURE_3D, NEXT_ON_SUCCESS_3D,
    OCTANT_COUNT_3D, WALK_STOP,
};
pub use lattice_4d::{
    CELL_COUNT_4D, LATTICE_4D, LatticeCell4, LatticePoint4, MAX_POINTS_PER_CELL_4D,
    PACKED_CELLS_4D, UNSKEW_4D,
};
