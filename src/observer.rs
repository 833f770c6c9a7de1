//! This module holds the CIE 1931 2-degree standard observer color matching functions, tabulated
//! on the same 10 nm grid as [`ReflectanceSpectrum`](../spectrum/struct.ReflectanceSpectrum.html).
//! These three curves describe how much each wavelength band contributes to the X, Y, and Z
//! tristimulus coordinates of whatever light reaches the eye, and they're the fixed half of the
//! spectral integration: the other half is the illuminant power in
//! [`illuminants`](../illuminants/index.html).

use spectrum::SPECTRUM_BANDS;

/// The x-bar color matching function, one value per canonical band from 340 nm to 830 nm.
pub static X_BAR: [f64; SPECTRUM_BANDS] = [
    0.0, 0.0, 0.0001299, 0.0004149, 0.001368, 0.004243, 0.014310, 0.043510, 0.134380, 0.283900,
    0.348280, 0.336200, 0.290800, 0.195360, 0.095640, 0.032010, 0.004900, 0.009300, 0.063270,
    0.165500, 0.290400, 0.433450, 0.594500, 0.762100, 0.916300, 1.026300, 1.062200, 1.002600,
    0.854450, 0.642400, 0.447900, 0.283500, 0.164900, 0.087400, 0.046770, 0.022700, 0.011359,
    0.005790, 0.002899, 0.001440, 0.000690, 0.000332, 0.000166, 0.000083, 0.0000415, 0.0000209,
    0.0000107, 0.0000053, 0.0000026, 0.0000013,
];

/// The y-bar color matching function, one value per canonical band from 340 nm to 830 nm. This
/// curve doubles as the photopic luminosity function, which is why the Y coordinate it produces is
/// the one that gets normalized against the illuminant.
pub static Y_BAR: [f64; SPECTRUM_BANDS] = [
    0.0, 0.0, 0.000003917, 0.00001239, 0.000039, 0.000120, 0.000396, 0.001210, 0.004000, 0.011600,
    0.023000, 0.038000, 0.060000, 0.090980, 0.139020, 0.208020, 0.323000, 0.503000, 0.710000,
    0.862000, 0.954000, 0.994950, 0.995000, 0.952000, 0.870000, 0.757000, 0.631000, 0.503000,
    0.381000, 0.265000, 0.175000, 0.107000, 0.061000, 0.032000, 0.017000, 0.008210, 0.004102,
    0.002091, 0.001047, 0.000520, 0.000249, 0.000120, 0.000060, 0.000030, 0.0000150, 0.0000075,
    0.0000037, 0.0000019, 0.0000009, 0.0000005,
];

/// The z-bar color matching function, one value per canonical band from 340 nm to 830 nm. It is
/// effectively zero above 650 nm: long wavelengths contribute nothing to the blue-ish Z
/// coordinate.
pub static Z_BAR: [f64; SPECTRUM_BANDS] = [
    0.0, 0.0, 0.000606, 0.001946, 0.006450, 0.020050, 0.067850, 0.207400, 0.645600, 1.385600,
    1.747060, 1.772110, 1.669200, 1.287640, 0.812950, 0.465180, 0.272000, 0.158200, 0.078250,
    0.042160, 0.020300, 0.008750, 0.003900, 0.002100, 0.001650, 0.001100, 0.000800, 0.000340,
    0.000190, 0.000050, 0.000020, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
];
