//! Seedable OpenSimplex2S gradient noise in 2, 3 and 4 dimensions.
//!
//! Pick a generator either at compile time:
//!
//! ```
//! use osn_core::noise::Noise3;
//! use osn_core::transform::XZBeforeY3D;
//!
//! let noise = Noise3::<XZBeforeY3D>::new(42);
//! let value = noise.evaluate(1.5, 64.0, -3.25);
//! assert!(value.abs() < 2.0);
//! ```
//!
//! or at runtime, from a [`Mode`] or [`NoiseSettings`]:
//!
//! ```
//! use osn_core::{Mode, NoiseGenerator, NoiseSource2};
//!
//! let noise = NoiseGenerator::new(Mode::Standard2D, 7);
//! let value = noise.as_2d()?.evaluate(0.5, 0.25);
//! assert!(value.is_finite());
//! # Ok::<(), osn_core::NoiseError>(())
//! ```
//!
//! Generators are immutable after construction and `Send + Sync`.

pub mod error;
pub mod generator;
pub mod mode;
pub mod noise;
pub mod settings;
pub mod transform;

pub use error::{NoiseError, Result};
pub use generator::{
    AnyNoise2, AnyNoise3, AnyNoise4, NoiseGenerator, NoiseSource2, NoiseSource3, NoiseSource4,
};
pub use mode::{Dimension, Mode};
pub use noise::{Noise2, Noise3, Noise4};
pub use settings::NoiseSettings;
