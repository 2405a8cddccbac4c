//! Noise modes and the dimensions they belong to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NoiseError;

/// Number of input coordinates a generator takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    /// `(x, y)`
    Two,
    /// `(x, y, z)`
    Three,
    /// `(x, y, z, w)`
    Four,
}

impl Dimension {
    /// Number of axes.
    #[must_use]
    pub const fn axes(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D", self.axes())
    }
}

/// Coordinate transform applied before lattice evaluation.
///
/// The choice only changes which axes look "square" and which look
/// "triangular"; the lattice math is the same. Each mode belongs to exactly
/// one [`Dimension`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    /// 2D, skewed onto the triangular lattice symmetrically.
    #[default]
    #[serde(rename = "standard_2d")]
    Standard2D,
    /// 2D, with Y pointing down the main diagonal. Suited to X-dominant uses.
    #[serde(rename = "x_before_y_2d")]
    XBeforeY2D,
    /// 3D, rotated so cardinal planar slices look isotropic.
    #[serde(rename = "classic_3d")]
    Classic3D,
    /// 3D, rotated so XY slices look like 2D noise. Suited to Z as time or height.
    #[serde(rename = "xy_before_z_3d")]
    XYBeforeZ3D,
    /// 3D, rotated so XZ slices look like 2D noise. Suited to Y as height.
    #[serde(rename = "xz_before_y_3d")]
    XZBeforeY3D,
    /// 4D, skewed onto the lattice symmetrically.
    #[serde(rename = "classic_4d")]
    Classic4D,
    /// 4D, with XY and ZW forming orthogonal triangular planes.
    #[serde(rename = "xy_before_zw_4d")]
    XYBeforeZW4D,
    /// 4D, with XZ and YW forming orthogonal triangular planes.
    #[serde(rename = "xz_before_yw_4d")]
    XZBeforeYW4D,
    /// 4D, with XYZ oriented like [`Mode::Classic3D`] and W pointing down the main diagonal.
    #[serde(rename = "xyz_before_w_4d")]
    XYZBeforeW4D,
}

impl Mode {
    /// Every mode, ordered by dimension.
    pub const ALL: [Self; 9] = [
        Self::Standard2D,
        Self::XBeforeY2D,
        Self::Classic3D,
        Self::XYBeforeZ3D,
        Self::XZBeforeY3D,
        Self::Classic4D,
        Self::XYBeforeZW4D,
        Self::XZBeforeYW4D,
        Self::XYZBeforeW4D,
    ];

    /// The dimension this mode evaluates in.
    #[must_use]
    pub const fn dimension(self) -> Dimension {
        match self {
            Self::Standard2D | Self::XBeforeY2D => Dimension::Two,
            Self::Classic3D | Self::XYBeforeZ3D | Self::XZBeforeY3D => Dimension::Three,
            Self::Classic4D | Self::XYBeforeZW4D | Self::XZBeforeYW4D | Self::XYZBeforeW4D => {
                Dimension::Four
            }
        }
    }

    /// Configuration name, as used by [`FromStr`] and serde.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard2D => "standard_2d",
            Self::XBeforeY2D => "x_before_y_2d",
            Self::Classic3D => "classic_3d",
            Self::XYBeforeZ3D => "xy_before_z_3d",
            Self::XZBeforeY3D => "xz_before_y_3d",
            Self::Classic4D => "classic_4d",
            Self::XYBeforeZW4D => "xy_before_zw_4d",
            Self::XZBeforeYW4D => "xz_before_yw_4d",
            Self::XYZBeforeW4D => "xyz_before_w_4d",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = NoiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| NoiseError::UnknownMode(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_cover_nine_modes() {
        let count = |d| Mode::ALL.iter().filter(|m| m.dimension() == d).count();
        assert_eq!(count(Dimension::Two), 2);
        assert_eq!(count(Dimension::Three), 3);
        assert_eq!(count(Dimension::Four), 4);
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for mode in Mode::ALL {
            assert_eq!(mode.name().parse::<Mode>().ok(), Some(mode));
            assert_eq!(mode.to_string(), mode.name());
        }
        assert_eq!("Classic_3D".parse::<Mode>().ok(), Some(Mode::Classic3D));
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "simplex_5d".parse::<Mode>().unwrap_err();
        assert!(matches!(err, NoiseError::UnknownMode(ref name) if name == "simplex_5d"));
    }

    #[test]
    fn default_mode_is_standard_2d() {
        assert_eq!(Mode::default(), Mode::Standard2D);
        assert_eq!(Dimension::Four.to_string(), "4D");
    }
}
