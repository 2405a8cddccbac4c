//! Gradient sets for each supported dimension.
//!
//! The raw direction patterns are the classical OpenSimplex2S sets. Each set is
//! divided once by its normalisation constant so that the falloff-weighted dot
//! products of the evaluators land in roughly `[-1, 1]`.
//!
//! Callers never index a set directly with a raw hash; [`gradient`] wraps the
//! index modulo the set length.

use std::sync::LazyLock;

/// Number of gradient vectors in the 2D set.
pub const GRADIENT_COUNT_2D: usize = 24;
/// Number of gradient vectors in the 3D set.
pub const GRADIENT_COUNT_3D: usize = 48;
/// Number of gradient vectors in the 4D set.
pub const GRADIENT_COUNT_4D: usize = 160;

/// Divisor applied to every component of the 2D set.
pub const NORMALIZER_2D: f64 = 0.05481866495625118;
/// Divisor applied to every component of the 3D set.
pub const NORMALIZER_3D: f64 = 0.2781926117527186;
/// Divisor applied to every component of the 4D set.
pub const NORMALIZER_4D: f64 = 0.11127401889945551;

/// Normalised 2D gradients.
pub static GRADIENTS_2D: LazyLock<[[f64; 2]; GRADIENT_COUNT_2D]> =
    LazyLock::new(|| normalize(&RAW_2D, NORMALIZER_2D));

/// Normalised 3D gradients.
pub static GRADIENTS_3D: LazyLock<[[f64; 3]; GRADIENT_COUNT_3D]> =
    LazyLock::new(|| normalize(&RAW_3D, NORMALIZER_3D));

/// Normalised 4D gradients.
pub static GRADIENTS_4D: LazyLock<[[f64; 4]; GRADIENT_COUNT_4D]> =
    LazyLock::new(|| normalize(&RAW_4D, NORMALIZER_4D));

/// Look up a gradient, wrapping `index` modulo the set length.
#[inline]
#[must_use]
pub fn gradient<const D: usize>(set: &[[f64; D]], index: usize) -> [f64; D] {
    set[index % set.len()]
}

fn normalize<const D: usize, const N: usize>(raw: &[[f64; D]; N], divisor: f64) -> [[f64; D]; N] {
    raw.map(|vector| vector.map(|component| component / divisor))
}

const RAW_2D: [[f64; 2]; GRADIENT_COUNT_2D] = [
    [0.130526192220052, 0.99144486137381],
    [0.38268343236509, 0.923879532511287],
    [0.608761429008721, 0.793353340291235],
    [0.793353340291235, 0.608761429008721],
    [0.923879532511287, 0.38268343236509],
    [0.99144486137381, 0.130526192220051],
    [0.99144486137381, -0.130526192220051],
    [0.923879532511287, -0.38268343236509],
    [0.793353340291235, -0.60876142900872],
    [0.608761429008721, -0.793353340291235],
    [0.38268343236509, -0.923879532511287],
    [0.130526192220052, -0.99144486137381],
    [-0.130526192220052, -0.99144486137381],
    [-0.38268343236509, -0.923879532511287],
    [-0.608761429008721, -0.793353340291235],
    [-0.793353340291235, -0.608761429008721],
    [-0.923879532511287, -0.38268343236509],
    [-0.99144486137381, -0.130526192220052],
    [-0.99144486137381, 0.130526192220051],
    [-0.923879532511287, 0.38268343236509],
    [-0.793353340291235, 0.608761429008721],
    [-0.608761429008721, 0.793353340291235],
    [-0.38268343236509, 0.923879532511287],
    [-0.130526192220052, 0.99144486137381],
];

const RAW_3D: [[f64; 3]; GRADIENT_COUNT_3D] = [
    [-2.22474487139, -2.22474487139, -1.0],
    [-2.22474487139, -2.22474487139, 1.0],
    [-3.0862664687972017, -1.1721513422464978, 0.0],
    [-1.1721513422464978, -3.0862664687972017, 0.0],
    [-2.22474487139, -1.0, -2.22474487139],
    [-2.22474487139, 1.0, -2.22474487139],
    [-1.1721513422464978, 0.0, -3.0862664687972017],
    [-3.0862664687972017, 0.0, -1.1721513422464978],
    [-2.22474487139, -1.0, 2.22474487139],
    [-2.22474487139, 1.0, 2.22474487139],
    [-3.0862664687972017, 0.0, 1.1721513422464978],
    [-1.1721513422464978, 0.0, 3.0862664687972017],
    [-2.22474487139, 2.22474487139, -1.0],
    [-2.22474487139, 2.22474487139, 1.0],
    [-1.1721513422464978, 3.0862664687972017, 0.0],
    [-3.0862664687972017, 1.1721513422464978, 0.0],
    [-1.0, -2.22474487139, -2.22474487139],
    [1.0, -2.22474487139, -2.22474487139],
    [0.0, -3.0862664687972017, -1.1721513422464978],
    [0.0, -1.1721513422464978, -3.0862664687972017],
    [-1.0, -2.22474487139, 2.22474487139],
    [1.0, -2.22474487139, 2.22474487139],
    [0.0, -1.1721513422464978, 3.0862664687972017],
    [0.0, -3.0862664687972017, 1.1721513422464978],
    [-1.0, 2.22474487139, -2.22474487139],
    [1.0, 2.22474487139, -2.22474487139],
    [0.0, 1.1721513422464978, -3.0862664687972017],
    [0.0, 3.0862664687972017, -1.1721513422464978],
    [-1.0, 2.22474487139, 2.22474487139],
    [1.0, 2.22474487139, 2.22474487139],
    [0.0, 3.0862664687972017, 1.1721513422464978],
    [0.0, 1.1721513422464978, 3.0862664687972017],
    [2.22474487139, -2.22474487139, -1.0],
    [2.22474487139, -2.22474487139, 1.0],
    [1.1721513422464978, -3.0862664687972017, 0.0],
    [3.0862664687972017, -1.1721513422464978, 0.0],
    [2.22474487139, -1.0, -2.22474487139],
    [2.22474487139, 1.0, -2.22474487139],
    [3.0862664687972017, 0.0, -1.1721513422464978],
    [1.1721513422464978, 0.0, -3.0862664687972017],
    [2.22474487139, -1.0, 2.22474487139],
    [2.22474487139, 1.0, 2.22474487139],
    [1.1721513422464978, 0.0, 3.0862664687972017],
    [3.0862664687972017, 0.0, 1.1721513422464978],
    [2.22474487139, 2.22474487139, -1.0],
    [2.22474487139, 2.22474487139, 1.0],
    [3.0862664687972017, 1.1721513422464978, 0.0],
    [1.1721513422464978, 3.0862664687972017, 0.0],
];

const RAW_4D: [[f64; 4]; GRADIENT_COUNT_4D] = [
    [-0.753341017856078, -0.37968289875261624, -0.37968289875261624, -0.37968289875261624],
    [-0.7821684431180708, -0.4321472685365301, -0.4321472685365301, 0.12128480194602098],
    [-0.7821684431180708, -0.4321472685365301, 0.12128480194602098, -0.4321472685365301],
    [-0.7821684431180708, 0.12128480194602098, -0.4321472685365301, -0.4321472685365301],
    [-0.8586508742123365, -0.508629699630796, 0.044802370851755174, 0.044802370851755174],
    [-0.8586508742123365, 0.044802370851755174, -0.508629699630796, 0.044802370851755174],
    [-0.8586508742123365, 0.044802370851755174, 0.044802370851755174, -0.508629699630796],
    [-0.9982828964265062, -0.03381941603233842, -0.03381941603233842, -0.03381941603233842],
    [-0.37968289875261624, -0.753341017856078, -0.37968289875261624, -0.37968289875261624],
    [-0.4321472685365301, -0.7821684431180708, -0.4321472685365301, 0.12128480194602098],
    [-0.4321472685365301, -0.7821684431180708, 0.12128480194602098, -0.4321472685365301],
    [0.12128480194602098, -0.7821684431180708, -0.4321472685365301, -0.4321472685365301],
    [-0.508629699630796, -0.8586508742123365, 0.044802370851755174, 0.044802370851755174],
    [0.044802370851755174, -0.8586508742123365, -0.508629699630796, 0.044802370851755174],
    [0.044802370851755174, -0.8586508742123365, 0.044802370851755174, -0.508629699630796],
    [-0.03381941603233842, -0.9982828964265062, -0.03381941603233842, -0.03381941603233842],
    [-0.37968289875261624, -0.37968289875261624, -0.753341017856078, -0.37968289875261624],
    [-0.4321472685365301, -0.4321472685365301, -0.7821684431180708, 0.12128480194602098],
    [-0.4321472685365301, 0.12128480194602098, -0.7821684431180708, -0.4321472685365301],
    [0.12128480194602098, -0.4321472685365301, -0.7821684431180708, -0.4321472685365301],
    [-0.508629699630796, 0.044802370851755174, -0.8586508742123365, 0.044802370851755174],
    [0.044802370851755174, -0.508629699630796, -0.8586508742123365, 0.044802370851755174],
    [0.044802370851755174, 0.044802370851755174, -0.8586508742123365, -0.508629699630796],
    [-0.03381941603233842, -0.03381941603233842, -0.9982828964265062, -0.03381941603233842],
    [-0.37968289875261624, -0.37968289875261624, -0.37968289875261624, -0.753341017856078],
    [-0.4321472685365301, -0.4321472685365301, 0.12128480194602098, -0.7821684431180708],
    [-0.4321472685365301, 0.12128480194602098, -0.4321472685365301, -0.7821684431180708],
    [0.12128480194602098, -0.4321472685365301, -0.4321472685365301, -0.7821684431180708],
    [-0.508629699630796, 0.044802370851755174, 0.044802370851755174, -0.8586508742123365],
    [0.044802370851755174, -0.508629699630796, 0.044802370851755174, -0.8586508742123365],
    [0.044802370851755174, 0.044802370851755174, -0.508629699630796, -0.8586508742123365],
    [-0.03381941603233842, -0.03381941603233842, -0.03381941603233842, -0.9982828964265062],
    [-0.6740059517812944, -0.3239847771997537, -0.3239847771997537, 0.5794684678643381],
    [-0.7504883828755602, -0.4004672082940195, 0.15296486218853164, 0.5029860367700724],
    [-0.7504883828755602, 0.15296486218853164, -0.4004672082940195, 0.5029860367700724],
    [-0.8828161875373585, 0.08164729285680945, 0.08164729285680945, 0.4553054119602712],
    [-0.4553054119602712, -0.08164729285680945, -0.08164729285680945, 0.8828161875373585],
    [-0.5029860367700724, -0.15296486218853164, 0.4004672082940195, 0.7504883828755602],
    [-0.5029860367700724, 0.4004672082940195, -0.15296486218853164, 0.7504883828755602],
    [-0.5794684678643381, 0.3239847771997537, 0.3239847771997537, 0.6740059517812944],
    [-0.3239847771997537, -0.6740059517812944, -0.3239847771997537, 0.5794684678643381],
    [-0.4004672082940195, -0.7504883828755602, 0.15296486218853164, 0.5029860367700724],
    [0.15296486218853164, -0.7504883828755602, -0.4004672082940195, 0.5029860367700724],
    [0.08164729285680945, -0.8828161875373585, 0.08164729285680945, 0.4553054119602712],
    [-0.08164729285680945, -0.4553054119602712, -0.08164729285680945, 0.8828161875373585],
    [-0.15296486218853164, -0.5029860367700724, 0.4004672082940195, 0.7504883828755602],
    [0.4004672082940195, -0.5029860367700724, -0.15296486218853164, 0.7504883828755602],
    [0.3239847771997537, -0.5794684678643381, 0.3239847771997537, 0.6740059517812944],
    [-0.3239847771997537, -0.3239847771997537, -0.6740059517812944, 0.5794684678643381],
    [-0.4004672082940195, 0.15296486218853164, -0.7504883828755602, 0.5029860367700724],
    [0.15296486218853164, -0.4004672082940195, -0.7504883828755602, 0.5029860367700724],
    [0.08164729285680945, 0.08164729285680945, -0.8828161875373585, 0.4553054119602712],
    [-0.08164729285680945, -0.08164729285680945, -0.4553054119602712, 0.8828161875373585],
    [-0.15296486218853164, 0.4004672082940195, -0.5029860367700724, 0.7504883828755602],
    [0.4004672082940195, -0.15296486218853164, -0.5029860367700724, 0.7504883828755602],
    [0.3239847771997537, 0.3239847771997537, -0.5794684678643381, 0.6740059517812944],
    [-0.6740059517812944, -0.3239847771997537, 0.5794684678643381, -0.3239847771997537],
    [-0.7504883828755602, -0.4004672082940195, 0.5029860367700724, 0.15296486218853164],
    [-0.7504883828755602, 0.15296486218853164, 0.5029860367700724, -0.4004672082940195],
    [-0.8828161875373585, 0.08164729285680945, 0.4553054119602712, 0.08164729285680945],
    [-0.4553054119602712, -0.08164729285680945, 0.8828161875373585, -0.08164729285680945],
    [-0.5029860367700724, -0.15296486218853164, 0.7504883828755602, 0.4004672082940195],
    [-0.5029860367700724, 0.4004672082940195, 0.7504883828755602, -0.15296486218853164],
    [-0.5794684678643381, 0.3239847771997537, 0.6740059517812944, 0.3239847771997537],
    [-0.3239847771997537, -0.6740059517812944, 0.5794684678643381, -0.3239847771997537],
    [-0.4004672082940195, -0.7504883828755602, 0.5029860367700724, 0.15296486218853164],
    [0.15296486218853164, -0.7504883828755602, 0.5029860367700724, -0.4004672082940195],
    [0.08164729285680945, -0.8828161875373585, 0.4553054119602712, 0.08164729285680945],
    [-0.08164729285680945, -0.4553054119602712, 0.8828161875373585, -0.08164729285680945],
    [-0.15296486218853164, -0.5029860367700724, 0.7504883828755602, 0.4004672082940195],
    [0.4004672082940195, -0.5029860367700724, 0.7504883828755602, -0.15296486218853164],
    [0.3239847771997537, -0.5794684678643381, 0.6740059517812944, 0.3239847771997537],
    [-0.3239847771997537, -0.3239847771997537, 0.5794684678643381, -0.6740059517812944],
    [-0.4004672082940195, 0.15296486218853164, 0.5029860367700724, -0.7504883828755602],
    [0.15296486218853164, -0.4004672082940195, 0.5029860367700724, -0.7504883828755602],
    [0.08164729285680945, 0.08164729285680945, 0.4553054119602712, -0.8828161875373585],
    [-0.08164729285680945, -0.08164729285680945, 0.8828161875373585, -0.4553054119602712],
    [-0.15296486218853164, 0.4004672082940195, 0.7504883828755602, -0.5029860367700724],
    [0.4004672082940195, -0.15296486218853164, 0.7504883828755602, -0.5029860367700724],
    [0.3239847771997537, 0.3239847771997537, 0.6740059517812944, -0.5794684678643381],
    [-0.6740059517812944, 0.5794684678643381, -0.3239847771997537, -0.3239847771997537],
    [-0.7504883828755602, 0.5029860367700724, -0.4004672082940195, 0.15296486218853164],
    [-0.7504883828755602, 0.5029860367700724, 0.15296486218853164, -0.4004672082940195],
    [-0.8828161875373585, 0.4553054119602712, 0.08164729285680945, 0.08164729285680945],
    [-0.4553054119602712, 0.8828161875373585, -0.08164729285680945, -0.08164729285680945],
    [-0.5029860367700724, 0.7504883828755602, -0.15296486218853164, 0.4004672082940195],
    [-0.5029860367700724, 0.7504883828755602, 0.4004672082940195, -0.15296486218853164],
    [-0.5794684678643381, 0.6740059517812944, 0.3239847771997537, 0.3239847771997537],
    [-0.3239847771997537, 0.5794684678643381, -0.6740059517812944, -0.3239847771997537],
    [-0.4004672082940195, 0.5029860367700724, -0.7504883828755602, 0.15296486218853164],
    [0.15296486218853164, 0.5029860367700724, -0.7504883828755602, -0.4004672082940195],
    [0.08164729285680945, 0.4553054119602712, -0.8828161875373585, 0.08164729285680945],
    [-0.08164729285680945, 0.8828161875373585, -0.4553054119602712, -0.08164729285680945],
    [-0.15296486218853164, 0.7504883828755602, -0.5029860367700724, 0.4004672082940195],
    [0.4004672082940195, 0.7504883828755602, -0.5029860367700724, -0.15296486218853164],
    [0.3239847771997537, 0.6740059517812944, -0.5794684678643381, 0.3239847771997537],
    [-0.3239847771997537, 0.5794684678643381, -0.3239847771997537, -0.6740059517812944],
    [-0.4004672082940195, 0.5029860367700724, 0.15296486218853164, -0.7504883828755602],
    [0.15296486218853164, 0.5029860367700724, -0.4004672082940195, -0.7504883828755602],
    [0.08164729285680945, 0.4553054119602712, 0.08164729285680945, -0.8828161875373585],
    [-0.08164729285680945, 0.8828161875373585, -0.08164729285680945, -0.4553054119602712],
    [-0.15296486218853164, 0.7504883828755602, 0.4004672082940195, -0.5029860367700724],
    [0.4004672082940195, 0.7504883828755602, -0.15296486218853164, -0.5029860367700724],
    [0.3239847771997537, 0.6740059517812944, 0.3239847771997537, -0.5794684678643381],
    [0.5794684678643381, -0.6740059517812944, -0.3239847771997537, -0.3239847771997537],
    [0.5029860367700724, -0.7504883828755602, -0.4004672082940195, 0.15296486218853164],
    [0.5029860367700724, -0.7504883828755602, 0.15296486218853164, -0.4004672082940195],
    [0.4553054119602712, -0.8828161875373585, 0.08164729285680945, 0.08164729285680945],
    [0.8828161875373585, -0.4553054119602712, -0.08164729285680945, -0.08164729285680945],
    [0.7504883828755602, -0.5029860367700724, -0.15296486218853164, 0.4004672082940195],
    [0.7504883828755602, -0.5029860367700724, 0.4004672082940195, -0.15296486218853164],
    [0.6740059517812944, -0.5794684678643381, 0.3239847771997537, 0.3239847771997537],
    [0.5794684678643381, -0.3239847771997537, -0.6740059517812944, -0.3239847771997537],
    [0.5029860367700724, -0.4004672082940195, -0.7504883828755602, 0.15296486218853164],
    [0.5029860367700724, 0.15296486218853164, -0.7504883828755602, -0.4004672082940195],
    [0.4553054119602712, 0.08164729285680945, -0.8828161875373585, 0.08164729285680945],
    [0.8828161875373585, -0.08164729285680945, -0.4553054119602712, -0.08164729285680945],
    [0.7504883828755602, -0.15296486218853164, -0.5029860367700724, 0.4004672082940195],
    [0.7504883828755602, 0.4004672082940195, -0.5029860367700724, -0.15296486218853164],
    [0.6740059517812944, 0.3239847771997537, -0.5794684678643381, 0.3239847771997537],
    [0.5794684678643381, -0.3239847771997537, -0.3239847771997537, -0.6740059517812944],
    [0.5029860367700724, -0.4004672082940195, 0.15296486218853164, -0.7504883828755602],
    [0.5029860367700724, 0.15296486218853164, -0.4004672082940195, -0.7504883828755602],
    [0.4553054119602712, 0.08164729285680945, 0.08164729285680945, -0.8828161875373585],
    [0.8828161875373585, -0.08164729285680945, -0.08164729285680945, -0.4553054119602712],
    [0.7504883828755602, -0.15296486218853164, 0.4004672082940195, -0.5029860367700724],
    [0.7504883828755602, 0.4004672082940195, -0.15296486218853164, -0.5029860367700724],
    [0.6740059517812944, 0.3239847771997537, 0.3239847771997537, -0.5794684678643381],
    [0.03381941603233842, 0.03381941603233842, 0.03381941603233842, 0.9982828964265062],
    [-0.044802370851755174, -0.044802370851755174, 0.508629699630796, 0.8586508742123365],
    [-0.044802370851755174, 0.508629699630796, -0.044802370851755174, 0.8586508742123365],
    [-0.12128480194602098, 0.4321472685365301, 0.4321472685365301, 0.7821684431180708],
    [0.508629699630796, -0.044802370851755174, -0.044802370851755174, 0.8586508742123365],
    [0.4321472685365301, -0.12128480194602098, 0.4321472685365301, 0.7821684431180708],
    [0.4321472685365301, 0.4321472685365301, -0.12128480194602098, 0.7821684431180708],
    [0.37968289875261624, 0.37968289875261624, 0.37968289875261624, 0.753341017856078],
    [0.03381941603233842, 0.03381941603233842, 0.9982828964265062, 0.03381941603233842],
    [-0.044802370851755174, 0.044802370851755174, 0.8586508742123365, 0.508629699630796],
    [-0.044802370851755174, 0.508629699630796, 0.8586508742123365, -0.044802370851755174],
    [-0.12128480194602098, 0.4321472685365301, 0.7821684431180708, 0.4321472685365301],
    [0.508629699630796, -0.044802370851755174, 0.8586508742123365, -0.044802370851755174],
    [0.4321472685365301, -0.12128480194602098, 0.7821684431180708, 0.4321472685365301],
    [0.4321472685365301, 0.4321472685365301, 0.7821684431180708, -0.12128480194602098],
    [0.37968289875261624, 0.37968289875261624, 0.753341017856078, 0.37968289875261624],
    [0.03381941603233842, 0.9982828964265062, 0.03381941603233842, 0.03381941603233842],
    [-0.044802370851755174, 0.8586508742123365, -0.044802370851755174, 0.508629699630796],
    [-0.044802370851755174, 0.8586508742123365, 0.508629699630796, -0.044802370851755174],
    [-0.12128480194602098, 0.7821684431180708, 0.4321472685365301, 0.4321472685365301],
    [0.508629699630796, 0.8586508742123365, -0.044802370851755174, -0.044802370851755174],
    [0.4321472685365301, 0.7821684431180708, -0.12128480194602098, 0.4321472685365301],
    [0.4321472685365301, 0.7821684431180708, 0.4321472685365301, -0.12128480194602098],
    [0.37968289875261624, 0.753341017856078, 0.37968289875261624, 0.37968289875261624],
    [0.9982828964265062, 0.03381941603233842, 0.03381941603233842, 0.03381941603233842],
    [0.8586508742123365, -0.044802370851755174, -0.044802370851755174, 0.508629699630796],
    [0.8586508742123365, -0.044802370851755174, 0.508629699630796, -0.044802370851755174],
    [0.7821684431180708, -0.12128480194602098, 0.4321472685365301, 0.4321472685365301],
    [0.8586508742123365, 0.508629699630796, -0.044802370851755174, -0.044802370851755174],
    [0.7821684431180708, 0.4321472685365301, -0.12128480194602098, 0.4321472685365301],
    [0.7821684431180708, 0.4321472685365301, 0.4321472685365301, -0.12128480194602098],
    [0.753341017856078, 0.37968289875261624, 0.37968289875261624, 0.37968289875261624],
];

#[cfg(test)]
mod tests {
    use super::*;

    fn length<const D: usize>(v: &[f64; D]) -> f64 {
        v.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    #[test]
    fn set_sizes() {
        assert_eq!(GRADIENTS_2D.len(), 24);
        assert_eq!(GRADIENTS_3D.len(), 48);
        assert_eq!(GRADIENTS_4D.len(), 160);
    }

    #[test]
    fn vectors_share_one_length_per_dimension() {
        // Every raw direction in a set has the same magnitude, so after
        // normalisation all lengths equal `raw_len / divisor`.
        for lengths in [
            GRADIENTS_2D.iter().map(length).collect::<Vec<_>>(),
            GRADIENTS_3D.iter().map(length).collect::<Vec<_>>(),
            GRADIENTS_4D.iter().map(length).collect::<Vec<_>>(),
        ] {
            let first = lengths[0];
            for len in lengths {
                assert!((len - first).abs() < 1e-9 * first, "{len} vs {first}");
            }
        }
    }

    #[test]
    fn normalisation_divides_raw_components() {
        let raw = RAW_3D[5];
        let normalized = GRADIENTS_3D[5];
        for axis in 0..3 {
            assert!((normalized[axis] * NORMALIZER_3D - raw[axis]).abs() < 1e-12);
        }
    }

    #[test]
    fn lookup_wraps_modulo_set_length() {
        assert_eq!(gradient(&*GRADIENTS_2D, 24), GRADIENTS_2D[0]);
        assert_eq!(gradient(&*GRADIENTS_3D, 2047), GRADIENTS_3D[2047 % 48]);
        assert_eq!(gradient(&*GRADIENTS_4D, 161), GRADIENTS_4D[1]);
    }
}
