//! Typed OpenSimplex2S generators.
//!
//! - [`Noise2`] - 2D noise over a triangular lattice
//! - [`Noise3`] - 3D noise over a body-centred cubic lattice
//! - [`Noise4`] - 4D noise over the 24-cell lattice
//!
//! Each generator is parameterised by a zero-sized transform marker from
//! [`crate::transform`], so the mode is resolved at compile time. For a mode
//! chosen at runtime use [`crate::generator::NoiseGenerator`].

mod noise_2d;
mod noise_3d;
mod noise_4d;

pub use noise_2d::Noise2;
pub use noise_3d::Noise3;
pub use noise_4d::Noise4;

/// Radius-squared falloff of a 2D lattice point.
const FALLOFF_2D: f64 = 2.0 / 3.0;
/// Radius-squared falloff of a 3D lattice point.
const FALLOFF_3D: f64 = 0.75;
/// Radius-squared falloff of a 4D lattice point.
const FALLOFF_4D: f64 = 0.8;

/// Contribution of one lattice point, given its positive falloff and the dot
/// product of its gradient with the displacement.
#[inline]
fn contribution(attn: f64, extrapolation: f64) -> f64 {
    let attn = attn * attn;
    attn * attn * extrapolation
}

/// Dot product of a gradient with a displacement.
#[inline]
fn dot<const D: usize>(gradient: &[f64; D], displacement: [f64; D]) -> f64 {
    gradient
        .iter()
        .zip(displacement)
        .fold(0.0, |acc, (g, d)| acc + g * d)
}
