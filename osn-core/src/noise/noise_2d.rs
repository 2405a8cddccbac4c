//! 2D OpenSimplex2S noise.

use std::fmt;
use std::marker::PhantomData;

use osn_utils::math::{fast_floor, unit_bit};
use osn_utils::noise::PermutationTable;
use osn_utils::noise::lattice::{LATTICE_2D, LatticePoint2, POINTS_PER_ORIENTATION_2D, UNSKEW_2D};

use super::{FALLOFF_2D, contribution, dot};
use crate::mode::Mode;
use crate::transform::{CoordinateTransform, Standard2D};

/// Seeded 2D noise generator.
///
/// `T` selects the coordinate transform and defaults to [`Standard2D`].
pub struct Noise2<T = Standard2D> {
    permutation: PermutationTable<2>,
    lattice: &'static [LatticePoint2],
    _transform: PhantomData<T>,
}

impl<T: CoordinateTransform<2>> Noise2<T> {
    /// Create a generator from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            permutation: PermutationTable::<2>::new(seed),
            lattice: &*LATTICE_2D,
            _transform: PhantomData,
        }
    }

    /// Sample the noise at `(x, y)`.
    ///
    /// Returns a value roughly in `[-1, 1]`. Non-finite input propagates.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        let [xs, ys] = T::apply([x, y]);
        self.evaluate_lattice(xs, ys)
    }

    /// Sample the noise at already skewed lattice coordinates.
    fn evaluate_lattice(&self, xs: f64, ys: f64) -> f64 {
        let xsb = fast_floor(xs);
        let ysb = fast_floor(ys);
        let xsi = xs - f64::from(xsb);
        let ysi = ys - f64::from(ysb);

        // Which half of the skewed square, then which neighbours across its edges.
        let a = unit_bit(xsi + ysi);
        let half_a = f64::from(a) / 2.0;
        let b = unit_bit(xsi - ysi / 2.0 + 1.0 - half_a);
        let c = unit_bit(ysi - xsi / 2.0 + 1.0 - half_a);
        let class = (a | b << 1 | c << 2) as usize;

        let ssi = (xsi + ysi) * UNSKEW_2D;
        let xi = xsi + ssi;
        let yi = ysi + ssi;

        let start = class * POINTS_PER_ORIENTATION_2D;
        let mut value = 0.0;
        for point in &self.lattice[start..start + POINTS_PER_ORIENTATION_2D] {
            let dx = xi + point.dx;
            let dy = yi + point.dy;
            let attn = FALLOFF_2D - dx * dx - dy * dy;
            if attn <= 0.0 {
                continue;
            }

            let slot = self.permutation.hash(
                xsb.wrapping_add(point.x),
                ysb.wrapping_add(point.y),
            );
            let gradient = self.permutation.gradient(slot);
            value += contribution(attn, dot(gradient, [dx, dy]));
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
    pub const fn permutation(&self) -> &PermutationTable<2> {
        &self.permutation
    }
}

impl<T: CoordinateTransform<2>> Default for Noise2<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T> Clone for Noise2<T> {
    fn clone(&self) -> Self {
        Self {
            permutation: self.permutation.clone(),
            lattice: self.lattice,
            _transform: PhantomData,
        }
    }
}

impl<T: CoordinateTransform<2>> fmt::Debug for Noise2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Noise2")
            .field("mode", &T::MODE)
            .field("seed", &self.seed())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::XBeforeY2D;

    #[test]
    fn origin_is_zero() {
        assert_eq!(Noise2::<Standard2D>::new(0).evaluate(0.0, 0.0), 0.0);
    }

    #[test]
    fn reference_values() {
        let noise = Noise2::<Standard2D>::new(0);
        let value = noise.evaluate(0.3, 0.7);
        assert!((value - -0.3841147534179488).abs() < 1e-12, "{value}");

        let noise = Noise2::<XBeforeY2D>::new(0);
        let value = noise.evaluate(0.3, 0.7);
        assert!((value - 0.39448583401266923).abs() < 1e-12, "{value}");
    }

    #[test]
    fn accessors_report_construction() {
        let noise = Noise2::<XBeforeY2D>::new(99);
        assert_eq!(noise.seed(), 99);
        assert_eq!(noise.mode(), Mode::XBeforeY2D);
        assert_eq!(noise.permutation().seed(), 99);
        assert_eq!(Noise2::<Standard2D>::default().seed(), 0);
    }

    #[test]
    fn clone_evaluates_identically() {
        let noise = Noise2::<Standard2D>::new(5);
        let copy = noise.clone();
        assert_eq!(noise.evaluate(3.25, -8.5).to_bits(), copy.evaluate(3.25, -8.5).to_bits());
    }

    #[test]
    fn continuous_across_cell_and_orientation_boundaries() {
        const STEP: f64 = 1e-9;
        const DIRECTION: [f64; 2] = [1.0, 0.37];

        // Every threshold the orientation index is computed from, as points
        // on it inside the unit cell.
        let boundaries: [fn(f64) -> [f64; 2]; 7] = [
            |s| [0.0, s],
            |s| [s, 0.0],
            |s| [s, 1.0 - s],
            |s| [s / 2.0, s],
            |s| [0.5 + s / 2.0, s],
            |s| [s, s / 2.0],
            |s| [s, 0.5 + s / 2.0],
        ];

        let noise = Noise2::<Standard2D>::new(11);
        for cell in [[0, 0], [-3, 5], [7, -2], [100, 41], [-250, -17]] {
            for boundary in boundaries {
                for i in 0..32 {
                    let [fx, fy] = boundary((f64::from(i) + 0.5) / 32.0);
                    let x = f64::from(cell[0]) + fx;
                    let y = f64::from(cell[1]) + fy;
                    let before =
                        noise.evaluate_lattice(x - STEP * DIRECTION[0], y - STEP * DIRECTION[1]);
                    let after =
                        noise.evaluate_lattice(x + STEP * DIRECTION[0], y + STEP * DIRECTION[1]);
                    assert!(
                        (before - after).abs() < 1e-6,
                        "jump at ({x}, {y}): {before} -> {after}"
                    );
                }
            }
        }
    }

    #[test]
    fn non_finite_input_propagates() {
        let noise = Noise2::<Standard2D>::new(0);
        assert!(noise.evaluate(f64::NAN, 0.0).is_nan());
    }
}
