//! 3D OpenSimplex2S noise.
//!
//! The lattice is body-centred cubic. A sample selects the octant of its cube it
//! falls into, then walks that octant's 14 candidate points with [`BlockWalk`],
//! which prunes points made unreachable by earlier results.

use std::fmt;
use std::marker::PhantomData;

use osn_utils::math::{fast_floor, unit_bit};
use osn_utils::noise::PermutationTable;
use osn_utils::noise::lattice::{BlockWalk, LATTICE_3D, LatticePoint3, OCTANT_COUNT_3D};

use super::{FALLOFF_3D, contribution, dot};
use crate::mode::Mode;
use crate::transform::{Classic3D, CoordinateTransform};

/// Seeded 3D noise generator.
///
/// `T` selects the coordinate transform and defaults to [`Classic3D`].
pub struct Noise3<T = Classic3D> {
    permutation: PermutationTable<3>,
    lattice: &'static [LatticePoint3],
    _transform: PhantomData<T>,
}

impl<T: CoordinateTransform<3>> Noise3<T> {
    /// Create a generator from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            permutation: PermutationTable::<3>::new(seed),
            lattice: &*LATTICE_3D,
            _transform: PhantomData,
        }
    }

    /// Sample the noise at `(x, y, z)`.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, x: f64, y: f64, z: f64) -> f64 {
        let [xr, yr, zr] = T::apply([x, y, z]);
        self.evaluate_lattice(xr, yr, zr)
    }

    fn evaluate_lattice(&self, xr: f64, yr: f64, zr: f64) -> f64 {
        let xrb = fast_floor(xr);
        let yrb = fast_floor(yr);
        let zrb = fast_floor(zr);
        let xri = xr - f64::from(xrb);
        let yri = yr - f64::from(yrb);
        let zri = zr - f64::from(zrb);

        let octant =
            (unit_bit(xri + 0.5) | unit_bit(yri + 0.5) << 1 | unit_bit(zri + 0.5) << 2) as usize;

        let mut value = 0.0;
        let mut walk = BlockWalk::new();
        while let Some(block) = walk.current() {
            let point = &self.lattice[block * OCTANT_COUNT_3D + octant];
            let dx = xri + point.dx;
            let dy = yri + point.dy;
            let dz = zri + point.dz;
            let attn = FALLOFF_3D - dx * dx - dy * dy - dz * dz;
            if attn <= 0.0 {
                walk.advance(false);
                continue;
            }

            let slot = self.permutation.hash(
                xrb.wrapping_add(point.x),
                yrb.wrapping_add(point.y),
                zrb.wrapping_add(point.z),
            );
            let gradient = self.permutation.gradient(slot);
            value += contribution(attn, dot(gradient, [dx, dy, dz]));
            walk.advance(true);
        }
        value
    }

    /// Seed this generator was built from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.permutation.seed()
    }

    /// Mode of the transform `T`.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        T::MODE
    }

    /// The generator's permutation table.
    #[must_use]
    pub const fn permutation(&self) -> &PermutationTable<3> {
        &self.permutation
    }
}

impl<T: CoordinateTransform<3>> Default for Noise3<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T> Clone for Noise3<T> {
    fn clone(&self) -> Self {
        Self {
            permutation: self.permutation.clone(),
            lattice: self.lattice,
            _transform: PhantomData,
        }
    }
}

impl<T: CoordinateTransform<3>> fmt::Debug for Noise3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Noise3")
            .field("mode", &T::MODE)
            .field("seed", &self.seed())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{XYBeforeZ3D, XZBeforeY3D};

    #[test]
    fn reference_values() {
        let cases: [(f64, f64); 3] = [
            (Noise3::<Classic3D>::new(0).evaluate(0.3, 0.7, 1.9), -0.20278020561495513),
            (Noise3::<XYBeforeZ3D>::new(0).evaluate(0.3, 0.7, 1.9), 0.17690258643182402),
            (Noise3::<XZBeforeY3D>::new(0).evaluate(0.3, 0.7, 1.9), -0.07342124629486993),
        ];
        for (value, expected) in cases {
            assert!((value - expected).abs() < 1e-12, "{value} != {expected}");
        }
    }

    #[test]
    fn reference_values_where_paired_blocks_are_skipped() {
        let cases: [(f64, f64); 3] = [
            (Noise3::<Classic3D>::new(0).evaluate(12.757, -2.713, -0.2), 0.8749275853199617),
            (Noise3::<XYBeforeZ3D>::new(0).evaluate(12.757, -2.713, -0.2), -0.6735569341128386),
            (Noise3::<XZBeforeY3D>::new(0).evaluate(12.757, -2.713, -0.2), 0.733001466076155),
        ];
        for (value, expected) in cases {
            assert!((value - expected).abs() < 1e-12, "{value} != {expected}");
        }
    }

    const CELLS: [[i32; 3]; 4] = [[0, 0, 0], [-3, 5, 2], [7, -2, -9], [100, 41, -60]];
    const STEP: f64 = 1e-9;

    fn assert_no_jump(noise: &Noise3<Classic3D>, at: [f64; 3], direction: [f64; 3]) {
        let before = noise.evaluate_lattice(
            at[0] - STEP * direction[0],
            at[1] - STEP * direction[1],
            at[2] - STEP * direction[2],
        );
        let after = noise.evaluate_lattice(
            at[0] + STEP * direction[0],
            at[1] + STEP * direction[1],
            at[2] + STEP * direction[2],
        );
        assert!((before - after).abs() < 1e-6, "jump at {at:?}: {before} -> {after}");
    }

    #[test]
    fn continuous_across_cube_faces_and_octant_planes() {
        let noise = Noise3::<Classic3D>::new(11);
        for cell in CELLS {
            for axis in 0..3 {
                for plane in [0.0, 0.5] {
                    for i in 0..16 {
                        for j in 0..16 {
                            let a = (f64::from(i) + 0.5) / 16.0;
                            let b = (f64::from(j) + 0.5) / 16.0;
                            let offset = match axis {
                                0 => [plane, a, b],
                                1 => [a, plane, b],
                                _ => [a, b, plane],
                            };
                            let at: [f64; 3] =
                                std::array::from_fn(|k| f64::from(cell[k]) + offset[k]);
                            assert_no_jump(&noise, at, [1.0, 0.37, -0.61]);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn continuous_across_every_falloff_sphere() {
        use osn_utils::noise::lattice::BLOCK_COUNT_3D;

        const DIRECTIONS: usize = 200;
        let radius = FALLOFF_3D.sqrt();
        let noise = Noise3::<Classic3D>::new(11);

        // Evenly spread unit vectors.
        let directions: Vec<[f64; 3]> = (0..DIRECTIONS)
            .map(|i| {
                let z = 1.0 - 2.0 * (i as f64 + 0.5) / DIRECTIONS as f64;
                let r = (1.0 - z * z).sqrt();
                let phase = i as f64 * 2.399963229728653;
                [r * phase.cos(), r * phase.sin(), z]
            })
            .collect();

        let mut checked = 0;
        for octant in 0..OCTANT_COUNT_3D {
            for block in 0..BLOCK_COUNT_3D {
                let point = &LATTICE_3D[block * OCTANT_COUNT_3D + octant];
                for u in &directions {
                    // Offsets inside the cube where this point's falloff reaches zero.
                    let offset = [
                        -point.dx + radius * u[0],
                        -point.dy + radius * u[1],
                        -point.dz + radius * u[2],
                    ];
                    let inside = offset
                        .iter()
                        .all(|&c| (1e-6..=1.0 - 1e-6).contains(&c) && (c - 0.5).abs() >= 1e-6);
                    if !inside {
                        continue;
                    }
                    let on_octant = offset
                        .iter()
                        .enumerate()
                        .map(|(k, &c)| usize::from(c >= 0.5) << k)
                        .sum::<usize>();
                    if on_octant != octant {
                        continue;
                    }

                    checked += 1;
                    for cell in CELLS {
                        let at: [f64; 3] = std::array::from_fn(|k| f64::from(cell[k]) + offset[k]);
                        assert_no_jump(&noise, at, *u);
                    }
                }
            }
        }
        assert!(checked > 300, "only {checked} sphere points inside their octant");
    }

    #[test]
    fn default_uses_seed_zero() {
        let noise = Noise3::<XZBeforeY3D>::default();
        assert_eq!(noise.seed(), 0);
        assert_eq!(noise.mode(), Mode::XZBeforeY3D);
    }

    #[test]
    fn huge_coordinates_stay_finite() {
        let noise = Noise3::<Classic3D>::new(0);
        assert!(noise.evaluate(1e12, -1e12, 3e11).is_finite());
    }
}
