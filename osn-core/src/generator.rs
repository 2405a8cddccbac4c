//! Runtime-selected generators.
//!
//! The typed generators in [`crate::noise`] fix their mode at compile time. When
//! the mode comes from configuration, these closed enums hold one typed generator
//! each and dispatch through a `match` generated by `enum_dispatch`.

use enum_dispatch::enum_dispatch;
use osn_utils::noise::PermutationTable;

use crate::error::{NoiseError, Result};
use crate::mode::{Dimension, Mode};
use crate::noise::{Noise2, Noise3, Noise4};
use crate::transform::{
    Classic3D, Classic4D, CoordinateTransform, Standard2D, XBeforeY2D, XYBeforeZ3D, XYBeforeZW4D,
    XYZBeforeW4D, XZBeforeY3D, XZBeforeYW4D,
};

/// A 2D noise field.
#[enum_dispatch]
pub trait NoiseSource2 {
    /// Sample the field at `(x, y)`.
    fn evaluate(&self, x: f64, y: f64) -> f64;
    /// Seed the field was built from.
    fn seed(&self) -> u64;
    /// Mode of the field.
    fn mode(&self) -> Mode;
    /// Permutation table backing the field.
    fn permutation(&self) -> &PermutationTable<2>;
}

/// A 3D noise field.
#[enum_dispatch]
pub trait NoiseSource3 {
    /// Sample the field at `(x, y, z)`.
    fn evaluate(&self, x: f64, y: f64, z: f64) -> f64;
    /// Seed the field was built from.
    fn seed(&self) -> u64;
    /// Mode of the field.
    fn mode(&self) -> Mode;
    /// Permutation table backing the field.
    fn permutation(&self) -> &PermutationTable<3>;
}

/// A 4D noise field.
#[enum_dispatch]
pub trait NoiseSource4 {
    /// Sample the field at `(x, y, z, w)`.
    fn evaluate(&self, x: f64, y: f64, z: f64, w: f64) -> f64;
    /// Seed the field was built from.
    fn seed(&self) -> u64;
    /// Mode of the field.
    fn mode(&self) -> Mode;
    /// Permutation table backing the field.
    fn permutation(&self) -> &PermutationTable<4>;
}

impl<T: CoordinateTransform<2>> NoiseSource2 for Noise2<T> {
    #[inline]
    fn evaluate(&self, x: f64, y: f64) -> f64 {
        Noise2::evaluate(self, x, y)
    }

    fn seed(&self) -> u64 {
        Noise2::seed(self)
    }

    fn mode(&self) -> Mode {
        T::MODE
    }

    fn permutation(&self) -> &PermutationTable<2> {
        Noise2::permutation(self)
    }
}

impl<T: CoordinateTransform<3>> NoiseSource3 for Noise3<T> {
    #[inline]
    fn evaluate(&self, x: f64, y: f64, z: f64) -> f64 {
        Noise3::evaluate(self, x, y, z)
    }

    fn seed(&self) -> u64 {
        Noise3::seed(self)
    }

    fn mode(&self) -> Mode {
        T::MODE
    }

    fn permutation(&self) -> &PermutationTable<3> {
        Noise3::permutation(self)
    }
}

impl<T: CoordinateTransform<4>> NoiseSource4 for Noise4<T> {
    #[inline]
    fn evaluate(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        Noise4::evaluate(self, x, y, z, w)
    }

    fn seed(&self) -> u64 {
        Noise4::seed(self)
    }

    fn mode(&self) -> Mode {
        T::MODE
    }

    fn permutation(&self) -> &PermutationTable<4> {
        Noise4::permutation(self)
    }
}

/// A 2D generator whose mode was chosen at runtime.
#[enum_dispatch(NoiseSource2)]
#[derive(Debug, Clone)]
pub enum AnyNoise2 {
    /// [`Mode::Standard2D`]
    Standard2D(Noise2<Standard2D>),
    /// [`Mode::XBeforeY2D`]
    XBeforeY2D(Noise2<XBeforeY2D>),
}

impl AnyNoise2 {
    /// Build the generator for a 2D `mode`.
    ///
    /// # Errors
    /// [`NoiseError::DimensionMismatch`] if `mode` is not a 2D mode.
    pub fn new(mode: Mode, seed: u64) -> Result<Self> {
        if mode.dimension() != Dimension::Two {
            return Err(NoiseError::mismatch(mode, Dimension::Two));
        }
        NoiseGenerator::new(mode, seed).into_2d()
    }
}

/// A 3D generator whose mode was chosen at runtime.
#[enum_dispatch(NoiseSource3)]
#[derive(Debug, Clone)]
pub enum AnyNoise3 {
    /// [`Mode::Classic3D`]
    Classic3D(Noise3<Classic3D>),
    /// [`Mode::XYBeforeZ3D`]
    XYBeforeZ3D(Noise3<XYBeforeZ3D>),
    /// [`Mode::XZBeforeY3D`]
    XZBeforeY3D(Noise3<XZBeforeY3D>),
}

impl AnyNoise3 {
    /// Build the generator for a 3D `mode`.
    ///
    /// # Errors
    /// [`NoiseError::DimensionMismatch`] if `mode` is not a 3D mode.
    pub fn new(mode: Mode, seed: u64) -> Result<Self> {
        if mode.dimension() != Dimension::Three {
            return Err(NoiseError::mismatch(mode, Dimension::Three));
        }
        NoiseGenerator::new(mode, seed).into_3d()
    }
}

/// A 4D generator whose mode was chosen at runtime.
#[enum_dispatch(NoiseSource4)]
#[derive(Debug, Clone)]
pub enum AnyNoise4 {
    /// [`Mode::Classic4D`]
    Classic4D(Noise4<Classic4D>),
    /// [`Mode::XYBeforeZW4D`]
    XYBeforeZW4D(Noise4<XYBeforeZW4D>),
    /// [`Mode::XZBeforeYW4D`]
    XZBeforeYW4D(Noise4<XZBeforeYW4D>),
    /// [`Mode::XYZBeforeW4D`]
    XYZBeforeW4D(Noise4<XYZBeforeW4D>),
}

impl AnyNoise4 {
    /// Build the generator for a 4D `mode`.
    ///
    /// # Errors
    /// [`NoiseError::DimensionMismatch`] if `mode` is not a 4D mode.
    pub fn new(mode: Mode, seed: u64) -> Result<Self> {
        if mode.dimension() != Dimension::Four {
            return Err(NoiseError::mismatch(mode, Dimension::Four));
        }
        NoiseGenerator::new(mode, seed).into_4d()
    }
}

/// A generator of any dimension and mode, chosen once at construction.
#[derive(Debug, Clone)]
pub enum NoiseGenerator {
    /// A 2D generator.
    Two(AnyNoise2),
    /// A 3D generator.
    Three(AnyNoise3),
    /// A 4D generator.
    Four(AnyNoise4),
}

impl NoiseGenerator {
    /// Build the generator for `mode`, in the dimension `mode` belongs to.
    ///
    /// This is the only place a [`Mode`] is mapped to its generator type.
    #[must_use]
    pub fn new(mode: Mode, seed: u64) -> Self {
        match mode {
            Mode::Standard2D => Self::Two(Noise2::<Standard2D>::new(seed).into()),
            Mode::XBeforeY2D => Self::Two(Noise2::<XBeforeY2D>::new(seed).into()),
            Mode::Classic3D => Self::Three(Noise3::<Classic3D>::new(seed).into()),
            Mode::XYBeforeZ3D => Self::Three(Noise3::<XYBeforeZ3D>::new(seed).into()),
            Mode::XZBeforeY3D => Self::Three(Noise3::<XZBeforeY3D>::new(seed).into()),
            Mode::Classic4D => Self::Four(Noise4::<Classic4D>::new(seed).into()),
            Mode::XYBeforeZW4D => Self::Four(Noise4::<XYBeforeZW4D>::new(seed).into()),
            Mode::XZBeforeYW4D => Self::Four(Noise4::<XZBeforeYW4D>::new(seed).into()),
            Mode::XYZBeforeW4D => Self::Four(Noise4::<XYZBeforeW4D>::new(seed).into()),
        }
    }

    /// Dimension of the held generator.
    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        match self {
            Self::Two(_) => Dimension::Two,
            Self::Three(_) => Dimension::Three,
            Self::Four(_) => Dimension::Four,
        }
    }

    /// Mode of the held generator.
    #[must_use]
    pub fn mode(&self) -> Mode {
        match self {
            Self::Two(noise) => noise.mode(),
            Self::Three(noise) => noise.mode(),
            Self::Four(noise) => noise.mode(),
        }
    }

    /// Seed of the held generator.
    #[must_use]
    pub fn seed(&self) -> u64 {
        match self {
            Self::Two(noise) => noise.seed(),
            Self::Three(noise) => noise.seed(),
            Self::Four(noise) => noise.seed(),
        }
    }

    /// Borrow the held generator as 2D.
    ///
    /// # Errors
    /// [`NoiseError::DimensionMismatch`] if the generator is not 2D.
    pub fn as_2d(&self) -> Result<&AnyNoise2> {
        match self {
            Self::Two(noise) => Ok(noise),
            _ => Err(NoiseError::mismatch(self.mode(), Dimension::Two)),
        }
    }

    /// Borrow the held generator as 3D.
    ///
    /// # Errors
    /// [`NoiseError::DimensionMismatch`] if the generator is not 3D.
    pub fn as_3d(&self) -> Result<&AnyNoise3> {
        match self {
            Self::Three(noise) => Ok(noise),
            _ => Err(NoiseError::mismatch(self.mode(), Dimension::Three)),
        }
    }

    /// Borrow the held generator as 4D.
    ///
    /// # Errors
    /// [`NoiseError::DimensionMismatch`] if the generator is not 4D.
    pub fn as_4d(&self) -> Result<&AnyNoise4> {
        match self {
            Self::Four(noise) => Ok(noise),
            _ => Err(NoiseError::mismatch(self.mode(), Dimension::Four)),
        }
    }

    /// Unwrap the held generator as 2D.
    ///
    /// # Errors
    /// [`NoiseError::DimensionMismatch`] if the generator is not 2D.
    pub fn into_2d(self) -> Result<AnyNoise2> {
        match self {
            Self::Two(noise) => Ok(noise),
            other => Err(NoiseError::mismatch(other.mode(), Dimension::Two)),
        }
    }

    /// Unwrap the held generator as 3D.
    ///
    /// # Errors
    /// [`NoiseError::DimensionMismatch`] if the generator is not 3D.
    pub fn into_3d(self) -> Result<AnyNoise3> {
        match self {
            Self::Three(noise) => Ok(noise),
            other => Err(NoiseError::mismatch(other.mode(), Dimension::Three)),
        }
    }

    /// Unwrap the held generator as 4D.
    ///
    /// # Errors
    /// [`NoiseError::DimensionMismatch`] if the generator is not 4D.
    pub fn into_4d(self) -> Result<AnyNoise4> {
        match self {
            Self::Four(noise) => Ok(noise),
            other => Err(NoiseError::mismatch(other.mode(), Dimension::Four)),
        }
    }
}
