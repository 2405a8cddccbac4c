//! 4D OpenSimplex2S noise.

use std::fmt;
use std::marker::PhantomData;

use osn_utils::math::fast_floor;
use osn_utils::noise::PermutationTable;
use osn_utils::noise::lattice::{LATTICE_4D, LatticeCell4, UNSKEW_4D};

use super::{FALLOFF_4D, contribution, dot};
use crate::mode::Mode;
use crate::transform::{Classic4D, CoordinateTransform};

/// Seeded 4D noise generator.
///
/// `T` selects the coordinate transform and defaults to [`Classic4D`].
pub struct Noise4<T = Classic4D> {
    permutation: PermutationTable<4>,
    lattice: &'static [LatticeCell4],
    _transform: PhantomData<T>,
}

/// Two-bit quadrant of `coord` inside its unit cell.
#[inline]
fn quadrant(coord: f64) -> usize {
    (fast_floor(coord * 4.0) & 3) as usize
}

impl<T: CoordinateTransform<4>> Noise4<T> {
    /// Create a generator from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            permutation: PermutationTable::<4>::new(seed),
            lattice: &LATTICE_4D,
            _transform: PhantomData,
        }
    }

    /// Sample the noise at `(x, y, z, w)`.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let [xs, ys, zs, ws] = T::apply([x, y, z, w]);
        self.evaluate_lattice(xs, ys, zs, ws)
    }

    fn evaluate_lattice(&self, xs: f64, ys: f64, zs: f64, ws: f64) -> f64 {
        let xsb = fast_floor(xs);
        let ysb = fast_floor(ys);
        let zsb = fast_floor(zs);
        let wsb = fast_floor(ws);
        let xsi = xs - f64::from(xsb);
        let ysi = ys - f64::from(ysb);
        let zsi = zs - f64::from(zsb);
        let wsi = ws - f64::from(wsb);

        let ssi = (xsi + ysi + zsi + wsi) * UNSKEW_4D;
        let xi = xsi + ssi;
        let yi = ysi + ssi;
        let zi = zsi + ssi;
        let wi = wsi + ssi;

        let cell = quadrant(xs) | quadrant(ys) << 2 | quadrant(zs) << 4 | quadrant(ws) << 6;

        let mut value = 0.0;
        for point in self.lattice[cell].points() {
            let dx = xi + point.dx;
            let dy = yi + point.dy;
            let dz = zi + point.dz;
            let dw = wi + point.dw;
            let attn = FALLOFF_4D - dx * dx - dy * dy - dz * dz - dw * dw;
            if attn <= 0.0 {
                continue;
            }

            let slot = self.permutation.hash(
                xsb.wrapping_add(point.x),
                ysb.wrapping_add(point.y),
                zsb.wrapping_add(point.z),
                wsb.wrapping_add(point.w),
            );
            let gradient = self.permutation.gradient(slot);
            value += contribution(attn, dot(gradient, [dx, dy, dz, dw]));
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
    pub const fn permutation(&self) -> &PermutationTable<4> {
        &self.permutation
    }
}

impl<T: CoordinateTransform<4>> Default for Noise4<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T> Clone for Noise4<T> {
    fn clone(&self) -> Self {
        Self {
            permutation: self.permutation.clone(),
            lattice: self.lattice,
            _transform: PhantomData,
        }
    }
}

impl<T: CoordinateTransform<4>> fmt::Debug for Noise4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Noise4")
            .field("mode", &T::MODE)
            .field("seed", &self.seed())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{XYBeforeZW4D, XYZBeforeW4D, XZBeforeYW4D};

    const P: [f64; 4] = [0.3, 0.7, 1.9, -2.2];

    #[test]
    fn reference_values() {
        let [x, y, z, w] = P;
        let cases: [(f64, f64); 4] = [
            (Noise4::<Classic4D>::new(0).evaluate(x, y, z, w), -0.32885005993112304),
            (Noise4::<XYBeforeZW4D>::new(0).evaluate(x, y, z, w), -0.1806819484042535),
            (Noise4::<XZBeforeYW4D>::new(0).evaluate(x, y, z, w), 0.07545941994021949),
            (Noise4::<XYZBeforeW4D>::new(0).evaluate(x, y, z, w), 0.3950695886888807),
        ];
        for (value, expected) in cases {
            assert!((value - expected).abs() < 1e-12, "{value} != {expected}");
        }
    }

    #[test]
    fn quadrant_wraps_negative_coordinates() {
        assert_eq!(quadrant(0.0), 0);
        assert_eq!(quadrant(0.3), 1);
        assert_eq!(quadrant(0.99), 3);
        assert_eq!(quadrant(-0.1), 3);
        assert_eq!(quadrant(-0.6), 1);
    }

    #[test]
    fn seeds_change_the_field() {
        let [x, y, z, w] = P;
        let a = Noise4::<Classic4D>::new(0).evaluate(x, y, z, w);
        let b = Noise4::<Classic4D>::new(12345).evaluate(x, y, z, w);
        assert!((b - -0.28121237600661314).abs() < 1e-12, "{b}");
        assert_ne!(a, b);
    }

    #[test]
    fn continuous_across_cell_and_quadrant_planes() {
        const STEP: f64 = 1e-9;
        const DIRECTION: [f64; 4] = [1.0, 0.37, -0.61, 0.23];
        // Additive recurrence: well spread points on the other three axes.
        const SPREAD: [f64; 3] = [0.7548776662466927, 0.5698402909980532, 0.4301597090019468];

        let noise = Noise4::<Classic4D>::new(11);
        for cell in [[0, 0, 0, 0], [-3, 5, 2, 1], [7, -2, -9, 4]] {
            for axis in 0..4 {
                for plane in [0.0, 0.25, 0.5, 0.75] {
                    for i in 1..=64 {
                        let mut others = SPREAD.map(|r| (f64::from(i) * r).fract()).into_iter();
                        let at: [f64; 4] = std::array::from_fn(|k| {
                            let offset = if k == axis {
                                plane
                            } else {
                                others.next().unwrap_or_default()
                            };
                            f64::from(cell[k]) + offset
                        });
                        let [x, y, z, w] = at;
                        let [dx, dy, dz, dw] = DIRECTION.map(|d| d * STEP);
                        let before = noise.evaluate_lattice(x - dx, y - dy, z - dz, w - dw);
                        let after = noise.evaluate_lattice(x + dx, y + dy, z + dz, w + dw);
                        assert!(
                            (before - after).abs() < 1e-6,
                            "jump at {at:?}: {before} -> {after}"
                        );
                    }
                }
            }
        }
    }
}
