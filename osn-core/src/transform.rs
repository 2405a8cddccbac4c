//! Coordinate transforms, one zero-sized marker per [`Mode`].
//!
//! A transform maps caller coordinates onto the skewed lattice coordinates the
//! evaluators work in. The coefficients are part of the output contract: changing
//! any of them changes every generated value.

use std::fmt::Debug;

use crate::mode::Mode;

/// Maps `D` caller coordinates onto lattice coordinates.
pub trait CoordinateTransform<const D: usize>:
    Copy + Default + Debug + Send + Sync + 'static
{
    /// The mode this transform implements.
    const MODE: Mode;

    /// Transform a point.
    fn apply(coords: [f64; D]) -> [f64; D];
}

/// 2D skew factor: `(sqrt(3) - 1) / 2`.
const SKEW_2D: f64 = 0.366025403784439;
/// 2D unskew factor: `(1 / sqrt(3) - 1) / 2`.
const UNSKEW_2D: f64 = -0.211324865405187;
/// `1 / sqrt(3)`.
const ROOT3_OVER_3: f64 = 0.577350269189626;
/// 4D skew factor: `(sqrt(5) - 1) / 4`.
const SKEW_4D: f64 = 0.309016994374947;

macro_rules! marker {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name;
    };
}

marker!(
    /// See [`Mode::Standard2D`].
    Standard2D
);
marker!(
    /// See [`Mode::XBeforeY2D`].
    XBeforeY2D
);
marker!(
    /// See [`Mode::Classic3D`].
    Classic3D
);
marker!(
    /// See [`Mode::XYBeforeZ3D`].
    XYBeforeZ3D
);
marker!(
    /// See [`Mode::XZBeforeY3D`].
    XZBeforeY3D
);
marker!(
    /// See [`Mode::Classic4D`].
    Classic4D
);
marker!(
    /// See [`Mode::XYBeforeZW4D`].
    XYBeforeZW4D
);
marker!(
    /// See [`Mode::XZBeforeYW4D`].
    XZBeforeYW4D
);
marker!(
    /// See [`Mode::XYZBeforeW4D`].
    XYZBeforeW4D
);

impl CoordinateTransform<2> for Standard2D {
    const MODE: Mode = Mode::Standard2D;

    #[inline]
    fn apply([x, y]: [f64; 2]) -> [f64; 2] {
        let s = SKEW_2D * (x + y);
        [x + s, y + s]
    }
}

impl CoordinateTransform<2> for XBeforeY2D {
    const MODE: Mode = Mode::XBeforeY2D;

    #[inline]
    fn apply([x, y]: [f64; 2]) -> [f64; 2] {
        // Y points down the main skew diagonal, X is perpendicular to it.
        let xx = x * 0.7071067811865476;
        let yy = y * 1.224744871380249;
        [yy + xx, yy - xx]
    }
}

impl CoordinateTransform<3> for Classic3D {
    const MODE: Mode = Mode::Classic3D;

    #[inline]
    fn apply([x, y, z]: [f64; 3]) -> [f64; 3] {
        let r = (2.0 / 3.0) * (x + y + z);
        [r - x, r - y, r - z]
    }
}

impl CoordinateTransform<3> for XYBeforeZ3D {
    const MODE: Mode = Mode::XYBeforeZ3D;

    #[inline]
    fn apply([x, y, z]: [f64; 3]) -> [f64; 3] {
        let xy = x + y;
        let s2 = xy * UNSKEW_2D;
        let zz = z * ROOT3_OVER_3;
        [x + s2 - zz, y + s2 - zz, xy * ROOT3_OVER_3 + zz]
    }
}

impl CoordinateTransform<3> for XZBeforeY3D {
    const MODE: Mode = Mode::XZBeforeY3D;

    #[inline]
    fn apply([x, y, z]: [f64; 3]) -> [f64; 3] {
        let xz = x + z;
        let s2 = xz * UNSKEW_2D;
        let yy = y * ROOT3_OVER_3;
        [x + s2 - yy, xz * ROOT3_OVER_3 + yy, z + s2 - yy]
    }
}

impl CoordinateTransform<4> for Classic4D {
    const MODE: Mode = Mode::Classic4D;

    #[inline]
    fn apply([x, y, z, w]: [f64; 4]) -> [f64; 4] {
        let s = SKEW_4D * (x + y + z + w);
        [x + s, y + s, z + s, w + s]
    }
}

/// Shared rotation of the two "before" 4D modes. Returns the offsets applied to
/// the members of the first and second plane.
#[inline]
fn plane_pair_offsets(first: f64, second: f64) -> (f64, f64) {
    let s2 = first * -0.28522513987434876941 + second * 0.83897065470611435718;
    let t2 = second * 0.21939749883706435719 + first * -0.48214856493302476942;
    (s2, t2)
}

impl CoordinateTransform<4> for XYBeforeZW4D {
    const MODE: Mode = Mode::XYBeforeZW4D;

    #[inline]
    fn apply([x, y, z, w]: [f64; 4]) -> [f64; 4] {
        let (s2, t2) = plane_pair_offsets(x + y, z + w);
        [x + s2, y + s2, z + t2, w + t2]
    }
}

impl CoordinateTransform<4> for XZBeforeYW4D {
    const MODE: Mode = Mode::XZBeforeYW4D;

    #[inline]
    fn apply([x, y, z, w]: [f64; 4]) -> [f64; 4] {
        let (s2, t2) = plane_pair_offsets(x + z, y + w);
        [x + s2, y + t2, z + s2, w + t2]
    }
}

impl CoordinateTransform<4> for XYZBeforeW4D {
    const MODE: Mode = Mode::XYZBeforeW4D;

    #[inline]
    fn apply([x, y, z, w]: [f64; 4]) -> [f64; 4] {
        let xyz = x + y + z;
        let ww = w * 1.118033988749894;
        let s2 = xyz * -0.16666666666666666 + ww;
        [x + s2, y + s2, z + s2, -0.5 * xyz + ww]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::Dimension;

    fn close(a: [f64; 4], b: [f64; 4]) -> bool {
        a.iter().zip(b).all(|(a, b)| (a - b).abs() < 1e-12)
    }

    #[test]
    fn markers_report_their_mode() {
        assert_eq!(<Standard2D as CoordinateTransform<2>>::MODE.dimension(), Dimension::Two);
        assert_eq!(<XZBeforeY3D as CoordinateTransform<3>>::MODE, Mode::XZBeforeY3D);
        assert_eq!(<XYZBeforeW4D as CoordinateTransform<4>>::MODE.dimension(), Dimension::Four);
    }

    #[test]
    fn origin_is_fixed() {
        assert_eq!(Standard2D::apply([0.0; 2]), [0.0; 2]);
        assert_eq!(XBeforeY2D::apply([0.0; 2]), [0.0; 2]);
        assert_eq!(Classic3D::apply([0.0; 3]), [0.0; 3]);
        assert_eq!(XYBeforeZ3D::apply([0.0; 3]), [0.0; 3]);
        assert_eq!(Classic4D::apply([0.0; 4]), [0.0; 4]);
        assert_eq!(XYZBeforeW4D::apply([0.0; 4]), [0.0; 4]);
    }

    #[test]
    fn standard_2d_moves_along_the_diagonal() {
        let [x, y] = Standard2D::apply([1.0, 1.0]);
        assert!((x - 1.732050807568878).abs() < 1e-12);
        assert_eq!(x, y);
    }

    #[test]
    fn classic_3d_is_a_reflection() {
        // r - x applied twice returns the input.
        let p = [0.3, -1.7, 4.25];
        let back = Classic3D::apply(Classic3D::apply(p));
        for (a, b) in p.iter().zip(back) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn plane_modes_swap_axes_consistently() {
        let [x, y, z, w] = [0.3, 0.7, 1.9, -2.2];
        let xy = XYBeforeZW4D::apply([x, y, z, w]);
        let [a, b, c, d] = XZBeforeYW4D::apply([x, z, y, w]);
        assert!(close(xy, [a, c, b, d]));
    }

    #[test]
    fn xz_before_y_mirrors_xy_before_z() {
        let [x, y, z] = XYBeforeZ3D::apply([0.4, 1.1, -0.6]);
        let [a, b, c] = XZBeforeY3D::apply([0.4, -0.6, 1.1]);
        assert!((x - a).abs() < 1e-12);
        assert!((y - c).abs() < 1e-12);
        assert!((z - b).abs() < 1e-12);
    }
}
