//! This file provides the standard idea of **Euclidean distance**, applied to CIELAB: treating two
//! colors as points in 3D space and returning the length of the line between them. Because CIELAB
//! is roughly perceptually uniform, this is the classic delta E 1976 color difference, where a
//! value around 2 is the smallest difference most observers can see and anything past 10 or so
//! reads as a different color outright. It is a true metric (0 exactly when the two colors are
//! identical, and symmetric), but it's the 1976 formula on purpose: later refinements like CIEDE2000
//! are more accurate near saturated blues and grays and considerably harder to reason about.

use color::CIELABColor;

/// Gets the Euclidean distance between two CIELAB colors, also known as their delta E (1976).
///
/// # Example
///
/// ```
/// # use cxflab::color::CIELABColor;
/// # use cxflab::distance::delta_e;
/// let patch = CIELABColor { l: 50.0, a: 0.0, b: 0.0 };
/// let target = CIELABColor { l: 55.0, a: 0.0, b: 0.0 };
/// assert_eq!(delta_e(patch, target), 5.0);
/// ```
pub fn delta_e(color1: CIELABColor, color2: CIELABColor) -> f64 {
    ((color1.l - color2.l).powi(2)
        + (color1.a - color2.a).powi(2)
        + (color1.b - color2.b).powi(2))
    .sqrt()
}
