//! Serializable generator configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::generator::{AnyNoise2, AnyNoise3, AnyNoise4, NoiseGenerator};
use crate::mode::Mode;

/// Everything needed to build a generator: a mode and a seed.
///
/// Both fields are optional when deserializing and default to
/// [`Mode::Standard2D`] and seed `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoiseSettings {
    /// Coordinate transform, which also fixes the dimension.
    pub mode: Mode,
    /// Seed of the permutation table.
    pub seed: u64,
}

impl NoiseSettings {
    /// Settings for `mode` with `seed`.
    #[must_use]
    pub const fn new(mode: Mode, seed: u64) -> Self {
        Self { mode, seed }
    }

    /// Build a generator in whatever dimension the mode belongs to.
    #[must_use]
    pub fn build(&self) -> NoiseGenerator {
        tracing::debug!(mode = %self.mode, seed = self.seed, "building noise generator");
        NoiseGenerator::new(self.mode, self.seed)
    }

    /// Build a 2D generator.
    ///
    /// # Errors
    /// [`NoiseError::DimensionMismatch`](crate::NoiseError::DimensionMismatch) if the
    /// configured mode is not 2D.
    pub fn build_2d(&self) -> Result<AnyNoise2> {
        tracing::debug!(mode = %self.mode, seed = self.seed, "building 2D noise generator");
        AnyNoise2::new(self.mode, self.seed)
    }

    /// Build a 3D generator.
    ///
    /// # Errors
    /// [`NoiseError::DimensionMismatch`](crate::NoiseError::DimensionMismatch) if the
    /// configured mode is not 3D.
    pub fn build_3d(&self) -> Result<AnyNoise3> {
        tracing::debug!(mode = %self.mode, seed = self.seed, "building 3D noise generator");
        AnyNoise3::new(self.mode, self.seed)
    }

    /// Build a 4D generator.
    ///
    /// # Errors
    /// [`NoiseError::DimensionMismatch`](crate::NoiseError::DimensionMismatch) if the
    /// configured mode is not 4D.
    pub fn build_4d(&self) -> Result<AnyNoise4> {
        tracing::debug!(mode = %self.mode, seed = self.seed, "building 4D noise generator");
        AnyNoise4::new(self.mode, self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NoiseError;
    use crate::generator::NoiseSource3;
    use crate::mode::Dimension;

    #[test]
    fn default_settings() {
        let settings = NoiseSettings::default();
        assert_eq!(settings.mode, Mode::Standard2D);
        assert_eq!(settings.seed, 0);
        assert_eq!(settings.build().dimension(), Dimension::Two);
    }

    #[test]
    fn build_matches_requested_dimension() {
        let settings = NoiseSettings::new(Mode::XZBeforeY3D, 77);
        let noise = settings.build_3d().unwrap();
        assert_eq!(noise.mode(), Mode::XZBeforeY3D);
        assert_eq!(noise.seed(), 77);
    }

    #[test]
    fn build_rejects_wrong_dimension() {
        let settings = NoiseSettings::new(Mode::Classic4D, 0);
        assert!(matches!(
            settings.build_2d(),
            Err(NoiseError::DimensionMismatch {
                expected: Dimension::Two,
                found: Dimension::Four,
                ..
            })
        ));
        assert!(settings.build_3d().is_err());
        assert!(settings.build_4d().is_ok());
    }
}
