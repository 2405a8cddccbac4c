//! 3D lattice: a body-centred cubic lattice formed by two interleaved cubic
//! lattices, the second shifted by half a cell on every axis.
//!
//! A sample's octant inside its cube selects 14 candidate points. They are
//! visited by a bounded walk ([`BlockWalk`]) that skips points which cannot
//! contribute once an earlier point is known to be in or out of range.

use std::sync::LazyLock;

use crate::noise::PSIZE;

/// Number of octants of the unit cube.
pub const OCTANT_COUNT_3D: usize = 8;
/// Number of candidate points (blocks) per octant.
pub const BLOCK_COUNT_3D: usize = 14;

/// Sentinel in the transition tables meaning "stop walking".
pub const WALK_STOP: u8 = 0xFF;

/// Next block after a point whose falloff was non-positive.
pub const NEXT_ON_FAILURE_3D: [u8; BLOCK_COUNT_3D] =
    [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, WALK_STOP];

/// Next block after a point that contributed.
///
/// Blocks pair up from block 2 onwards: once the first block of a pair is in
/// range, the second one cannot be, so it is skipped.
pub const NEXT_ON_SUCCESS_3D: [u8; BLOCK_COUNT_3D] =
    [1, 2, 4, 4, 6, 6, 8, 8, 10, 10, 12, 12, WALK_STOP, WALK_STOP];

/// Coordinate shift that keeps the second lattice's hashes apart from the first.
const SECOND_LATTICE_SHIFT: i32 = (PSIZE / 2) as i32;

/// A 3D lattice point relative to the base of the first lattice's cube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticePoint3 {
    /// Hash x coordinate offset, including the second-lattice shift.
    pub x: i32,
    /// Hash y coordinate offset, including the second-lattice shift.
    pub y: i32,
    /// Hash z coordinate offset, including the second-lattice shift.
    pub z: i32,
    /// x displacement to add to the sample's offset inside the cube.
    pub dx: f64,
    /// y displacement to add to the sample's offset inside the cube.
    pub dy: f64,
    /// z displacement to add to the sample's offset inside the cube.
    pub dz: f64,
}

impl LatticePoint3 {
    fn new(x: i32, y: i32, z: i32, lattice: i32) -> Self {
        let half = f64::from(lattice) * 0.5;
        Self {
            x: x + lattice * SECOND_LATTICE_SHIFT,
            y: y + lattice * SECOND_LATTICE_SHIFT,
            z: z + lattice * SECOND_LATTICE_SHIFT,
            dx: f64::from(-x) + half,
            dy: f64::from(-y) + half,
            dz: f64::from(-z) + half,
        }
    }
}

/// All 3D candidate points, addressed `block * OCTANT_COUNT_3D + octant`.
pub static LATTICE_3D: LazyLock<[LatticePoint3; OCTANT_COUNT_3D * BLOCK_COUNT_3D]> =
    LazyLock::new(|| {
        let mut points = [LatticePoint3::new(0, 0, 0, 0); OCTANT_COUNT_3D * BLOCK_COUNT_3D];
        for octant in 0..OCTANT_COUNT_3D {
            for (block, point) in octant_points(octant).into_iter().enumerate() {
                points[block * OCTANT_COUNT_3D + octant] = point;
            }
        }
        tracing::debug!(entries = points.len(), "initialised 3D lattice table");
        points
    });

/// The 14 candidates of one octant in walk order.
///
/// Blocks alternate between the closest points of the two lattices, nearest
/// first, so the transition tables can prune whole groups.
fn octant_points(octant: usize) -> [LatticePoint3; BLOCK_COUNT_3D] {
    let octant = octant as i32;
    let (i1, j1, k1) = (octant & 1, (octant >> 1) & 1, (octant >> 2) & 1);
    let (i2, j2, k2) = (i1 ^ 1, j1 ^ 1, k1 ^ 1);
    let first = |x, y, z| LatticePoint3::new(x, y, z, 0);
    let second = |x, y, z| LatticePoint3::new(x, y, z, 1);

    [
        first(i1, j1, k1),
        second(i1 + i2, j1 + j2, k1 + k2),
        first(i1 ^ 1, j1, k1),
        first(i1, j1 ^ 1, k1 ^ 1),
        second(i1 + (i2 ^ 1), j1 + j2, k1 + k2),
        second(i1 + i2, j1 + (j2 ^ 1), k1 + (k2 ^ 1)),
        first(i1, j1 ^ 1, k1),
        first(i1 ^ 1, j1, k1 ^ 1),
        second(i1 + i2, j1 + (j2 ^ 1), k1 + k2),
        second(i1 + (i2 ^ 1), j1 + j2, k1 + (k2 ^ 1)),
        first(i1, j1, k1 ^ 1),
        first(i1 ^ 1, j1 ^ 1, k1),
        second(i1 + i2, j1 + j2, k1 + (k2 ^ 1)),
        second(i1 + (i2 ^ 1), j1 + (j2 ^ 1), k1 + k2),
    ]
}

/// State machine over the 3D transition tables.
///
/// Starts at block 0. After each point the caller reports whether it
/// contributed and the walk moves to the next block, until the sentinel.
/// Every transition moves to a strictly higher block, so a walk visits each
/// block at most once and ends within [`BLOCK_COUNT_3D`] steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockWalk {
    block: u8,
}

impl BlockWalk {
    /// A walk positioned on block 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { block: 0 }
    }

    /// The block to examine next, or `None` once the walk has stopped.
    #[inline]
    #[must_use]
    pub const fn current(&self) -> Option<usize> {
        if self.block == WALK_STOP {
            None
        } else {
            Some(self.block as usize)
        }
    }

    /// Move past the current block.
    ///
    /// Does nothing once the walk has stopped.
    #[inline]
    pub fn advance(&mut self, contributed: bool) {
        if let Some(block) = self.current() {
            self.block = if contributed {
                NEXT_ON_SUCCESS_3D[block]
            } else {
                NEXT_ON_FAILURE_3D[block]
            };
        }
    }
}

impl Default for BlockWalk {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walk with a fixed outcome pattern, returning the visited blocks.
    fn run(outcomes: u16) -> Vec<usize> {
        let mut walk = BlockWalk::new();
        let mut visited = Vec::new();
        while let Some(block) = walk.current() {
            assert!(visited.len() < BLOCK_COUNT_3D, "walk did not terminate");
            visited.push(block);
            walk.advance((outcomes >> block) & 1 == 1);
        }
        visited
    }

    #[test]
    fn every_outcome_pattern_terminates_without_revisits() {
        for outcomes in 0..(1u16 << BLOCK_COUNT_3D) {
            let visited = run(outcomes);
            assert!(visited.len() <= BLOCK_COUNT_3D);
            assert!(visited.windows(2).all(|w| w[0] < w[1]), "{visited:?}");
            assert_eq!(visited[0], 0);
        }
    }

    #[test]
    fn all_failures_visit_every_block() {
        assert_eq!(run(0), (0..BLOCK_COUNT_3D).collect::<Vec<_>>());
    }

    #[test]
    fn all_successes_skip_pruned_blocks() {
        assert_eq!(run(u16::MAX), vec![0, 1, 2, 4, 6, 8, 10, 12]);
    }

    /// Falloff of a candidate for a sample at `offset` inside its cube.
    fn falloff(offset: [f64; 3], octant: usize, block: usize) -> f64 {
        let point = LATTICE_3D[block * OCTANT_COUNT_3D + octant];
        let dx = offset[0] + point.dx;
        let dy = offset[1] + point.dy;
        let dz = offset[2] + point.dz;
        0.75 - dx * dx - dy * dy - dz * dz
    }

    /// Sample offsets spread over the unit cube, with their octant.
    fn grid() -> impl Iterator<Item = ([f64; 3], usize)> {
        const STEPS: i32 = 48;
        let coord = |i: i32| (f64::from(i) + 0.37) / f64::from(STEPS);
        (0..STEPS * STEPS * STEPS).map(move |n| {
            let offset = [coord(n % STEPS), coord(n / STEPS % STEPS), coord(n / (STEPS * STEPS))];
            let octant = offset
                .iter()
                .enumerate()
                .fold(0, |acc, (axis, &c)| acc | (usize::from(c >= 0.5) << axis));
            (offset, octant)
        })
    }

    #[test]
    fn walk_visits_every_point_in_range() {
        for (offset, octant) in grid() {
            let mut visited = [false; BLOCK_COUNT_3D];
            let mut walk = BlockWalk::new();
            while let Some(block) = walk.current() {
                visited[block] = true;
                walk.advance(falloff(offset, octant, block) > 0.0);
            }

            for (block, &seen) in visited.iter().enumerate() {
                let attn = falloff(offset, octant, block);
                assert!(seen || attn <= 0.0, "{offset:?}: block {block} skipped with falloff {attn}");
            }
        }
    }

    #[test]
    fn pruned_blocks_are_out_of_range_when_their_partner_is_in_range() {
        for (offset, octant) in grid() {
            for (block, &next) in NEXT_ON_SUCCESS_3D.iter().enumerate() {
                if block + 1 >= BLOCK_COUNT_3D || usize::from(next) == block + 1 {
                    continue;
                }
                assert!(
                    falloff(offset, octant, block) <= 0.0 || falloff(offset, octant, block + 1) <= 0.0,
                    "{offset:?}: blocks {block} and {} both in range",
                    block + 1
                );
            }
        }
    }

    #[test]
    fn advance_after_stop_is_a_no_op() {
        let mut walk = BlockWalk::new();
        while walk.current().is_some() {
            walk.advance(false);
        }
        walk.advance(true);
        assert_eq!(walk.current(), None);
    }

    #[test]
    fn transitions_stay_in_range() {
        for table in [NEXT_ON_FAILURE_3D, NEXT_ON_SUCCESS_3D] {
            for (block, &next) in table.iter().enumerate() {
                let next = usize::from(next);
                assert!(next == usize::from(WALK_STOP) || (next > block && next < BLOCK_COUNT_3D));
            }
        }
    }

    #[test]
    fn second_lattice_points_are_shifted() {
        for octant in 0..OCTANT_COUNT_3D {
            let c0 = LATTICE_3D[octant];
            let c1 = LATTICE_3D[OCTANT_COUNT_3D + octant];
            assert!((0..=1).contains(&c0.x));
            assert_eq!((c1.x, c1.y, c1.z), (1025, 1025, 1025));
            assert_eq!((c1.dx, c1.dy, c1.dz), (-0.5, -0.5, -0.5));
        }
    }

    #[test]
    fn first_block_is_the_octant_corner() {
        let c = LATTICE_3D[0];
        assert_eq!((c.x, c.y, c.z), (0, 0, 0));
        let c = LATTICE_3D[7];
        assert_eq!((c.x, c.y, c.z), (1, 1, 1));
        assert_eq!((c.dx, c.dy, c.dz), (-1.0, -1.0, -1.0));
    }
}
