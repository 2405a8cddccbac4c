//! 2D lattice: 8 orientation classes of 4 candidate points each.

use std::sync::LazyLock;

/// Unskew constant of the 2D triangular lattice: `(1 / sqrt(3) - 1) / 2`.
pub const UNSKEW_2D: f64 = -0.211324865405187;

/// Number of orientation classes.
pub const ORIENTATION_COUNT_2D: usize = 8;
/// Candidate points examined per orientation class.
pub const POINTS_PER_ORIENTATION_2D: usize = 4;

/// A 2D lattice point relative to the base of a skewed cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticePoint2 {
    /// Skewed x offset from the cell base.
    pub x: i32,
    /// Skewed y offset from the cell base.
    pub y: i32,
    /// Unskewed x displacement to add to the sample's unskewed offset.
    pub dx: f64,
    /// Unskewed y displacement to add to the sample's unskewed offset.
    pub dy: f64,
}

impl LatticePoint2 {
    fn new(x: i32, y: i32) -> Self {
        let s = f64::from(x + y) * UNSKEW_2D;
        Self {
            x,
            y,
            dx: f64::from(-x) - s,
            dy: f64::from(-y) - s,
        }
    }
}

/// All 2D candidate points, grouped by orientation class.
///
/// Class `n` occupies `n * 4 .. n * 4 + 4`.
pub static LATTICE_2D: LazyLock<[LatticePoint2; ORIENTATION_COUNT_2D * POINTS_PER_ORIENTATION_2D]> =
    LazyLock::new(|| {
        let mut points = [LatticePoint2::new(0, 0); ORIENTATION_COUNT_2D * POINTS_PER_ORIENTATION_2D];
        for class in 0..ORIENTATION_COUNT_2D {
            let [a, b] = orientation_points(class);
            let base = class * POINTS_PER_ORIENTATION_2D;
            points[base] = LatticePoint2::new(0, 0);
            points[base + 1] = LatticePoint2::new(1, 1);
            points[base + 2] = LatticePoint2::new(a.0, a.1);
            points[base + 3] = LatticePoint2::new(b.0, b.1);
        }
        tracing::debug!(entries = points.len(), "initialised 2D lattice table");
        points
    });

/// The two class-specific points of an orientation class.
///
/// Bit 0 of `class` selects the triangle (lower or upper half of the skewed
/// square), bits 1 and 2 select which neighbours across its edges are reachable.
const fn orientation_points(class: usize) -> [(i32, i32); 2] {
    if class & 1 == 0 {
        let a = if class & 2 == 0 { (-1, 0) } else { (1, 0) };
        let b = if class & 4 == 0 { (0, -1) } else { (0, 1) };
        [a, b]
    } else {
        let a = if class & 2 == 0 { (0, 1) } else { (2, 1) };
        let b = if class & 4 == 0 { (1, 0) } else { (1, 2) };
        [a, b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_class_starts_with_the_cell_corners() {
        for class in 0..ORIENTATION_COUNT_2D {
            let block = &LATTICE_2D[class * 4..class * 4 + 4];
            assert_eq!((block[0].x, block[0].y), (0, 0));
            assert_eq!((block[1].x, block[1].y), (1, 1));
        }
    }

    #[test]
    fn displacement_is_baked_from_unskew() {
        let p = LatticePoint2::new(2, 1);
        assert!((p.dx - (-2.0 + 3.0 * 0.211324865405187)).abs() < 1e-15);
        assert!((p.dy - (-1.0 + 3.0 * 0.211324865405187)).abs() < 1e-15);
        let origin = LatticePoint2::new(0, 0);
        assert_eq!((origin.dx, origin.dy), (0.0, 0.0));
    }

    #[test]
    fn class_points_match_layout() {
        assert_eq!(orientation_points(0), [(-1, 0), (0, -1)]);
        assert_eq!(orientation_points(6), [(1, 0), (0, 1)]);
        assert_eq!(orientation_points(1), [(0, 1), (1, 0)]);
        assert_eq!(orientation_points(7), [(2, 1), (1, 2)]);
    }
}
