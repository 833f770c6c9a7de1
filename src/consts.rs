//! This file provides the constant matrices that color space conversion uses, along with the shared
//! precision for conversion tests. Only the forward matrices are written out as literals: inverses
//! are computed once at first use, because hand-copied inverses of rounded matrices are slightly
//! off and let errors creep into conversions that should be exact.

use rulinalg::matrix::Matrix;

lazy_static! {
    /// The Bradford cone response matrix. Multiplying an XYZ white point by this gives the LMS-like
    /// response the chromatic adaptation transform scales channel by channel.
    pub static ref BRADFORD_TRANSFORM: Matrix<f64> = matrix![
        00.8951, 00.2664, -0.1614;
        -0.7502, 01.7135, 00.0367;
        00.0389, -0.0685, 01.0296
    ];

    /// The inverse of the Bradford matrix, for getting back from scaled cone responses to XYZ.
    /// `inverse` consumes its receiver, so the static is cloned out of first.
    pub static ref BRADFORD_TRANSFORM_INV: Matrix<f64> = BRADFORD_TRANSFORM
        .clone()
        .inverse()
        .expect("Matrix is invertible.");

    /// The matrix taking XYZ coordinates relative to D65 to linear-light sRGB, as tabulated in IEC
    /// 61966-2-1. Gamma encoding happens after this.
    pub static ref STANDARD_RGB_TRANSFORM: Matrix<f64> = matrix![
        03.2406, -1.5372, -0.4986;
        -0.9689, 01.8758, 00.0415;
        00.0557, -0.2040, 01.0570
    ];
}

/// The largest amount two floating-point color components can differ by in tests and still count
/// as the same value.
pub const TEST_PRECISION: f64 = 1e-4;
