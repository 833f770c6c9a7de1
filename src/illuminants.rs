//! This module provides an enum of the illuminants the conversion pipeline is pinned to, a table
//! of their white point values, and the tabulated spectral power of D50 itself. The white points
//! come from the [ASTM E308 standard](https://www.astm.org/Standards/E308.htm), normalized so that
//! the Y (luminance) value is 100. The D50 power distribution is the CIE publication 15 table,
//! relative to 100 at 560 nm, resampled onto the same grid as
//! [`ReflectanceSpectrum`](../spectrum/struct.ReflectanceSpectrum.html).

use spectrum::SPECTRUM_BANDS;

/// The two CIE standard illuminants the pipeline computes under. Spectral integration and Lab values
/// are referred to D50, the graphic-arts standard that CXF measurement conditions specify, while the
/// sRGB output space is defined relative to D65: converting between them is what the chromatic
/// adaptation step is for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Illuminant {
    /// Horizon daylight at roughly 5000 kelvin, the reference illuminant for printing and for the
    /// Lab values in this crate.
    D50,
    /// Noon daylight at roughly 6500 kelvin, the reference illuminant of the sRGB standard.
    D65,
}

/// A table of white point values for the supported illuminants, in the order of the enum
/// definition. Each white point is an array of 3 `f64` values X, Y, and Z, normalized so that Y is
/// 100.
pub static ILLUMINANT_WHITE_POINTS: [[f64; 3]; 2] = [
    [96.422, 100.000, 82.521],
    [95.047, 100.000, 108.884],
];

/// The relative spectral power of illuminant D50, one value per canonical band from 340 nm to 830
/// nm, scaled so that the 560 nm band is exactly 100. This is the weighting applied to reflectance
/// factors when integrating a spectrum into XYZ coordinates.
pub static D50_SPECTRAL_POWER: [f64; SPECTRUM_BANDS] = [
    14.75, 17.34, 20.24, 23.94, 24.49, 29.87, 49.31, 56.51, 60.03, 57.82, 74.82, 87.25, 90.61,
    91.37, 95.11, 91.96, 95.72, 96.61, 97.13, 102.10, 100.75, 102.32, 100.00, 97.74, 98.92, 93.50,
    97.69, 99.27, 99.04, 95.72, 98.86, 95.67, 98.19, 103.00, 99.13, 87.38, 91.60, 92.89, 76.85,
    86.51, 92.58, 78.23, 57.69, 82.92, 78.27, 79.34, 73.94, 64.36, 65.21, 63.38,
];

impl Illuminant {
    /// Gets the XYZ coordinates of the white point value of the illuminant, normalized so that Y
    /// is 100.
    pub fn white_point(&self) -> [f64; 3] {
        match *self {
            Illuminant::D50 => ILLUMINANT_WHITE_POINTS[0],
            Illuminant::D65 => ILLUMINANT_WHITE_POINTS[1],
        }
    }
}
