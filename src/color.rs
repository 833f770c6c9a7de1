//! This module provides the color value types that measurements are converted into, along with the
//! conversions between them. Everything here is pinned to one viewing condition: reflectance is
//! integrated under illuminant D50 with the CIE 1931 2-degree observer, Lab values are relative to
//! the D50 white point (the convention CXF measurement conditions and programs like Photoshop
//! share), and sRGB output is produced by chromatically adapting to D65 first, since that's the
//! illuminant sRGB is defined against. The conversions are plain functions rather than methods so
//! that each step of the chain (spectrum to XYZ to Lab, then Lab to sRGB or LCh on demand) can be
//! used and tested on its own.

use rulinalg::matrix::Matrix;
use rulinalg::vector::Vector;

use consts::{BRADFORD_TRANSFORM, BRADFORD_TRANSFORM_INV, STANDARD_RGB_TRANSFORM};
use illuminants::{Illuminant, D50_SPECTRAL_POWER};
use observer::{X_BAR, Y_BAR, Z_BAR};
use spectrum::ReflectanceSpectrum;

use std::fmt;

/// A color in the CIE 1931 XYZ space: the tristimulus values a standard human observer would
/// register looking at the measured surface. In this crate XYZ values are relative to illuminant
/// D50 and scaled so that a perfect diffuse white has a Y (luminance) of 1.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct XYZColor {
    /// The X component: a mix of cone responses chosen by the CIE so that all visible colors have
    /// nonnegative coordinates. Roughly 0.96 for D50 white.
    pub x: f64,
    /// The Y component, which is exactly luminance: 0 is black and 1 is a perfect diffuse white.
    pub y: f64,
    /// The Z component, loosely corresponding to short-wavelength (blue-ish) response. Roughly
    /// 0.83 for D50 white.
    pub z: f64,
}

/// A color in the CIELAB color space, relative to the D50 white point. CIELAB is
/// device-independent and roughly perceptually uniform, which is what makes plain Euclidean
/// distance a usable color difference here.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELABColor {
    /// The luminance (loosely, brightness) of a given color. 0 is black and 100 is the value of
    /// diffuse white; reflective surfaces can in principle go slightly higher.
    pub l: f64,
    /// The first opponent color axis, negative towards green and positive towards magenta. By
    /// convention this usually falls between -128 and 127, but nothing enforces that range.
    pub a: f64,
    /// The second opponent color axis, negative towards blue and positive towards yellow. The same
    /// conventional range as `a` applies.
    pub b: f64,
}

/// A cylindrical form of CIELAB, analogous to the relationship between HSL and RGB: instead of two
/// opponent axes it uses a radius (chroma) and an angle (hue), which is usually the more intuitive
/// way to read a measured color.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct CIELCHColor {
    /// The luminance component, identical to CIELAB's. Ranges between 0 and 100.
    pub l: f64,
    /// The chroma component: the distance from the grayscale color of the same luminance, or the
    /// radius in cylindrical coordinates. 0 is fully neutral; most physical colors stay under
    /// roughly 150.
    pub c: f64,
    /// The hue component, in degrees from 0 up to but not including 360. 90 degrees corresponds to
    /// yellow, 180 to green, 270 to blue.
    pub h: f64,
}

/// A color in the 8-bit sRGB space that screens actually display, gamma-encoded and clamped to
/// gamut. This is the lossy end of the pipeline: out-of-gamut colors saturate at the channel
/// limits, so don't convert to RGB and back expecting the same color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel, 0 to 255.
    pub r: u8,
    /// The green channel, 0 to 255.
    pub g: u8,
    /// The blue channel, 0 to 255.
    pub b: u8,
}

impl fmt::Display for RGBColor {
    /// Formats the color as an uppercase hex code, the way it would appear in CSS: bright red is
    /// `#FA0006`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Integrates a reflectance spectrum into XYZ coordinates under illuminant D50 and the CIE 1931
/// 2-degree observer. Each band's reflectance is weighted by the illuminant power and the three
/// color matching functions, and the sums are normalized so that a spectrum reflecting everything
/// comes out with a luminance of exactly 1.
pub fn spectrum_to_xyz(spectrum: &ReflectanceSpectrum) -> XYZColor {
    let mut x = 0.0;
    let mut y = 0.0;
    let mut z = 0.0;
    let mut luminance = 0.0;
    for (band, reflectance) in spectrum.values().iter().enumerate() {
        let power = D50_SPECTRAL_POWER[band];
        x += reflectance * X_BAR[band] * power;
        y += reflectance * Y_BAR[band] * power;
        z += reflectance * Z_BAR[band] * power;
        luminance += Y_BAR[band] * power;
    }
    XYZColor {
        x: x / luminance,
        y: y / luminance,
        z: z / luminance,
    }
}

/// Converts XYZ coordinates to CIELAB, treating the input as D50-relative.
pub fn xyz_to_lab(xyz: XYZColor) -> CIELABColor {
    // https://en.wikipedia.org/wiki/Lab_color_space#CIELAB-CIEXYZ_conversions
    let f = |t: f64| {
        let delta: f64 = 6.0 / 29.0;
        if t <= delta.powf(3.0) {
            t / (3.0 * delta * delta) + 4.0 / 29.0
        } else {
            t.powf(1.0 / 3.0)
        }
    };
    // normalize against the white point, accounting for its luminance being scaled to 100
    let white_point = Illuminant::D50.white_point();
    let fx = f(xyz.x * 100.0 / white_point[0]);
    let fy = f(xyz.y * 100.0 / white_point[1]);
    let fz = f(xyz.z * 100.0 / white_point[2]);
    // the nonlinearity accounts for human vision: from here it's linear formulae, with a and b as
    // opponent color axes
    CIELABColor {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Returns the D50-relative XYZ color that corresponds to a CIELAB color: the exact inverse of
/// [`xyz_to_lab`](fn.xyz_to_lab.html).
pub fn lab_to_xyz(lab: CIELABColor) -> XYZColor {
    // the inverse of the nonlinearity introduced in xyz_to_lab
    let f_inv = |t: f64| {
        let delta: f64 = 6.0 / 29.0;
        if t > delta {
            t * t * t
        } else {
            3.0 * delta * delta * (t - 4.0 / 29.0)
        }
    };
    let white_point = Illuminant::D50.white_point();
    let fy = (lab.l + 16.0) / 116.0;
    XYZColor {
        x: white_point[0] / 100.0 * f_inv(fy + lab.a / 500.0),
        y: white_point[1] / 100.0 * f_inv(fy),
        z: white_point[2] / 100.0 * f_inv(fy - lab.b / 200.0),
    }
}

/// Integrates a reflectance spectrum all the way to CIELAB. This is the composition of
/// [`spectrum_to_xyz`](fn.spectrum_to_xyz.html) and [`xyz_to_lab`](fn.xyz_to_lab.html), and the
/// path every spectral measurement takes through the pipeline.
pub fn spectrum_to_lab(spectrum: &ReflectanceSpectrum) -> CIELABColor {
    xyz_to_lab(spectrum_to_xyz(spectrum))
}

/// The matrix that takes XYZ coordinates under the source illuminant to XYZ coordinates under the
/// target: cone responses via Bradford, a per-channel gain that maps one white onto the other, and
/// back.
fn adaptation_matrix(source: Illuminant, target: Illuminant) -> Matrix<f64> {
    let source_cone = &*BRADFORD_TRANSFORM * &Vector::new(source.white_point().to_vec());
    let target_cone = &*BRADFORD_TRANSFORM * &Vector::new(target.white_point().to_vec());
    let gain = matrix![
        target_cone[0] / source_cone[0], 0.0, 0.0;
        0.0, target_cone[1] / source_cone[1], 0.0;
        0.0, 0.0, target_cone[2] / source_cone[2]
    ];
    &*BRADFORD_TRANSFORM_INV * &(&gain * &*BRADFORD_TRANSFORM)
}

/// Chromatically adapts an XYZ color from one illuminant to another using the Bradford transform:
/// the best available answer to "what would this surface look like under that light instead?". By
/// construction the source white point maps exactly onto the target white point.
pub fn chromatic_adapt(xyz: XYZColor, source: Illuminant, target: Illuminant) -> XYZColor {
    let adapted = &adaptation_matrix(source, target) * &vector![xyz.x, xyz.y, xyz.z];
    XYZColor {
        x: adapted[0],
        y: adapted[1],
        z: adapted[2],
    }
}

/// Converts a CIELAB color to the closest displayable 8-bit sRGB color. The Lab value goes back to
/// D50 XYZ, is adapted to D65 (the illuminant sRGB is defined against), becomes linear-light RGB
/// through the standard matrix, and is then gamma-encoded. Channels are clamped to gamut and
/// truncated to integers, so highly saturated measurements will hit 0 or 255.
///
/// # Example
///
/// ```
/// # use cxflab::color::{lab_to_rgb, CIELABColor};
/// let red = CIELABColor { l: 53.24, a: 80.09, b: 67.20 };
/// assert_eq!(lab_to_rgb(red).to_string(), "#FA0006");
/// ```
pub fn lab_to_rgb(lab: CIELABColor) -> RGBColor {
    let xyz = chromatic_adapt(lab_to_xyz(lab), Illuminant::D50, Illuminant::D65);
    let linear = &*STANDARD_RGB_TRANSFORM * &vector![xyz.x, xyz.y, xyz.z];
    // like other RGB spaces, sRGB's gamma has a linear part near black and an exponential part
    // everywhere else
    let gamma = |x: f64| {
        if x <= 0.0031308 {
            12.92 * x
        } else {
            1.055 * x.powf(1.0 / 2.4) - 0.055
        }
    };
    // clamp to gamut between 0 and 1
    let clamp = |x: f64| {
        if x < 0.0 {
            0.0
        } else if x > 1.0 {
            1.0
        } else {
            x
        }
    };
    RGBColor {
        r: (clamp(gamma(linear[0])) * 255.0) as u8,
        g: (clamp(gamma(linear[1])) * 255.0) as u8,
        b: (clamp(gamma(linear[2])) * 255.0) as u8,
    }
}

/// Converts a CIELAB color to its cylindrical CIELCH form. The luminance carries over unchanged;
/// chroma is the radius sqrt(a^2 + b^2) and hue is the angle of (a, b), in degrees wrapped to [0,
/// 360). A fully neutral color (a and b both zero) gets a hue of 0.
pub fn lab_to_lch(lab: CIELABColor) -> CIELCHColor {
    let c = lab.b.hypot(lab.a);
    let unbounded_h = lab.b.atan2(lab.a).to_degrees();
    // atan2 lands in (-180, 180], so one addition wraps into range
    let h = if unbounded_h < 0.0 {
        unbounded_h + 360.0
    } else {
        unbounded_h
    };
    CIELCHColor { l: lab.l, c, h }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use consts::TEST_PRECISION;
    use spectrum::{pad, PaddingMode, SPECTRUM_BANDS};

    #[test]
    fn test_spectrum_to_xyz_of_perfect_reflector() {
        // a surface reflecting every band completely reproduces the illuminant itself
        let spectrum = ReflectanceSpectrum::new([1.0; SPECTRUM_BANDS]);
        let xyz = spectrum_to_xyz(&spectrum);
        assert!((xyz.x - 0.963924).abs() <= 1e-5);
        assert!((xyz.y - 1.0).abs() <= 1e-12);
        assert!((xyz.z - 0.824546).abs() <= 1e-5);
    }

    #[test]
    fn test_padded_ones_is_nearly_white() {
        // the visible bands reflect fully and only the padding is dark, so the result should sit
        // right next to diffuse white
        let samples = vec!["1.0"; 31];
        let spectrum = pad(&samples, Some(PaddingMode::NarrowVisible)).unwrap();
        let lab = spectrum_to_lab(&spectrum);
        assert!(lab.l > 99.0);
        let lch = lab_to_lch(lab);
        assert!(lch.c < 1.0);
    }

    #[test]
    fn test_xyz_to_lab_of_white_point() {
        let wp = Illuminant::D50.white_point();
        let xyz = XYZColor {
            x: wp[0] / 100.0,
            y: wp[1] / 100.0,
            z: wp[2] / 100.0,
        };
        let lab = xyz_to_lab(xyz);
        assert!((lab.l - 100.0).abs() <= TEST_PRECISION);
        assert!(lab.a.abs() <= TEST_PRECISION);
        assert!(lab.b.abs() <= TEST_PRECISION);
    }

    #[test]
    fn test_lab_xyz_round_trip() {
        let lab = CIELABColor {
            l: 53.24,
            a: 80.09,
            b: 67.20,
        };
        let lab2 = xyz_to_lab(lab_to_xyz(lab));
        assert!((lab.l - lab2.l).abs() <= TEST_PRECISION);
        assert!((lab.a - lab2.a).abs() <= TEST_PRECISION);
        assert!((lab.b - lab2.b).abs() <= TEST_PRECISION);
    }

    #[test]
    fn test_bradford_inverse_undoes_the_forward_matrix() {
        let product = &*BRADFORD_TRANSFORM_INV * &*BRADFORD_TRANSFORM;
        for row in 0..3 {
            for col in 0..3 {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert!((product[[row, col]] - expected).abs() <= TEST_PRECISION);
            }
        }
    }

    #[test]
    fn test_chromatic_adapt_maps_white_to_white() {
        let wp_d50 = Illuminant::D50.white_point();
        let wp_d65 = Illuminant::D65.white_point();
        let white = XYZColor {
            x: wp_d50[0] / 100.0,
            y: wp_d50[1] / 100.0,
            z: wp_d50[2] / 100.0,
        };
        let adapted = chromatic_adapt(white, Illuminant::D50, Illuminant::D65);
        assert!((adapted.x - wp_d65[0] / 100.0).abs() <= TEST_PRECISION);
        assert!((adapted.y - wp_d65[1] / 100.0).abs() <= TEST_PRECISION);
        assert!((adapted.z - wp_d65[2] / 100.0).abs() <= TEST_PRECISION);
    }

    #[test]
    fn test_lab_to_rgb_bright_red() {
        let rgb = lab_to_rgb(CIELABColor {
            l: 53.24,
            a: 80.09,
            b: 67.20,
        });
        assert_eq!(rgb, RGBColor { r: 250, g: 0, b: 6 });
    }

    #[test]
    fn test_lab_to_rgb_extremes() {
        let black = lab_to_rgb(CIELABColor {
            l: 0.0,
            a: 0.0,
            b: 0.0,
        });
        assert_eq!(black, RGBColor { r: 0, g: 0, b: 0 });
        // truncation may shave one step off a channel that lands just under the limit, so white is
        // only guaranteed to be within a step of full
        let white = lab_to_rgb(CIELABColor {
            l: 100.0,
            a: 0.0,
            b: 0.0,
        });
        assert!(white.r >= 254);
        assert!(white.g >= 254);
        assert!(white.b >= 254);
        // far outside the gamut in every direction: the channels saturate instead of wrapping
        let imaginary = lab_to_rgb(CIELABColor {
            l: 150.0,
            a: 200.0,
            b: -200.0,
        });
        assert_eq!(
            imaginary,
            RGBColor {
                r: 255,
                g: 128,
                b: 255,
            }
        );
    }

    #[test]
    fn test_lab_to_rgb_neutral_gray_is_gray() {
        let gray = lab_to_rgb(CIELABColor {
            l: 50.0,
            a: 0.0,
            b: 0.0,
        });
        assert_eq!(gray.r, gray.g);
        assert_eq!(gray.g, gray.b);
        assert_eq!(gray.r, 118);
    }

    #[test]
    fn test_lab_to_lch_quadrants() {
        let first = lab_to_lch(CIELABColor {
            l: 50.0,
            a: 3.0,
            b: 4.0,
        });
        assert!((first.c - 5.0).abs() <= TEST_PRECISION);
        assert!((first.h - 53.130102).abs() <= TEST_PRECISION);
        // a negative angle from atan2 wraps around instead of going negative
        let third = lab_to_lch(CIELABColor {
            l: 50.0,
            a: -3.0,
            b: -4.0,
        });
        assert!((third.h - 233.130102).abs() <= TEST_PRECISION);
        assert!(third.h < 360.0);
    }

    #[test]
    fn test_lch_recovers_opponent_axes() {
        // c and h carry the same information as a and b
        let lab = CIELABColor {
            l: 61.5,
            a: -37.2,
            b: 14.8,
        };
        let lch = lab_to_lch(lab);
        let a = lch.c * lch.h.to_radians().cos();
        let b = lch.c * lch.h.to_radians().sin();
        assert!((a - lab.a).abs() <= TEST_PRECISION);
        assert!((b - lab.b).abs() <= TEST_PRECISION);
        assert_eq!(lch.l, lab.l);
    }

    #[test]
    fn test_lab_to_lch_neutral_has_zero_hue() {
        let lch = lab_to_lch(CIELABColor {
            l: 50.0,
            a: 0.0,
            b: 0.0,
        });
        assert_eq!(lch.c, 0.0);
        assert_eq!(lch.h, 0.0);
        assert_eq!(lch.l, 50.0);
    }

    #[test]
    fn test_rgb_hex_display() {
        let rgb = RGBColor {
            r: 255,
            g: 0,
            b: 128,
        };
        assert_eq!(rgb.to_string(), "#FF0080");
        let dark = RGBColor { r: 1, g: 2, b: 3 };
        assert_eq!(dark.to_string(), "#010203");
    }
}
