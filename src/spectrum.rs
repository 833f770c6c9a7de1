//! This module describes reflectance spectra as they appear in CXF documents and the canonical
//! wavelength grid they are reconstructed onto. Measurement devices only report the visible bands
//! they actually sampled, and different devices sample different ranges, so a raw reading is a
//! partial spectrum: before any colorimetry can happen it has to be placed at the right offset
//! inside a full-range spectrum and surrounded with zeros. The [`PaddingMode`](enum.PaddingMode.html)
//! enum captures the two supported placements, and [`pad`](fn.pad.html) performs the
//! reconstruction.

use std::collections::HashMap;

use error::CxfError;

/// The number of bands in a canonical spectrum: one reflectance value every 10 nanometers from 340
/// nm to 830 nm inclusive.
pub const SPECTRUM_BANDS: usize = 50;
/// The wavelength of the first canonical band, in nanometers.
pub const SPECTRUM_START_NM: u16 = 340;
/// The spacing between adjacent canonical bands, in nanometers.
pub const SPECTRUM_STEP_NM: u16 = 10;

/// How a partial reflectance reading is placed on the canonical grid. Each mode fixes the number
/// of zero bands inserted before and after the measured samples, which together determine the
/// wavelength the first sample lands on and the widest reading the mode can hold.
///
/// A mode is resolved from the `ColorSpecification` attribute of a `ReflectanceSpectrum` element:
/// a short table of exactly-known codes is consulted first, and any remaining code containing the
/// measurement-condition marker `M0D50` is treated as a wide reading. The table takes precedence
/// because some codes (`CSM0D502`, most prominently) contain the marker yet describe narrow data.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaddingMode {
    /// A reading that covers 400 nm through 700 nm: 6 zero bands are inserted before the samples
    /// and 13 after, leaving room for 31 measured values.
    NarrowVisible,
    /// A reading that covers 380 nm through 730 nm: 4 zero bands are inserted before the samples
    /// and 10 after, leaving room for 36 measured values.
    WideVisible,
}

lazy_static! {
    /// Specification codes whose padding is known exactly, checked before the substring rule.
    static ref EXACT_SPEC_CODES: HashMap<&'static str, PaddingMode> = hashmap! {
        "CSM0D502" => PaddingMode::NarrowVisible,
        "CS000" => PaddingMode::NarrowVisible,
        "CSeXact_Advanced009489M0-NPD50-2" => PaddingMode::WideVisible,
    };
}

impl PaddingMode {
    /// Resolves a `ColorSpecification` code to the padding mode it implies, or `None` if the code
    /// is not recognized. Colors whose codes resolve to `None` are dropped during parsing rather
    /// than reconstructed incorrectly.
    ///
    /// # Example
    ///
    /// ```
    /// # use cxflab::spectrum::PaddingMode;
    /// // an exactly-known narrow code, despite containing "M0D50"
    /// assert_eq!(PaddingMode::from_spec_code("CSM0D502"), Some(PaddingMode::NarrowVisible));
    /// // any other code with the measurement-condition marker is wide
    /// assert_eq!(PaddingMode::from_spec_code("CSM0D50-X7"), Some(PaddingMode::WideVisible));
    /// assert_eq!(PaddingMode::from_spec_code("CSD65"), None);
    /// ```
    pub fn from_spec_code(code: &str) -> Option<PaddingMode> {
        if let Some(&mode) = EXACT_SPEC_CODES.get(code) {
            return Some(mode);
        }
        if code.contains("M0D50") {
            return Some(PaddingMode::WideVisible);
        }
        None
    }

    /// The number of zero bands inserted before the measured samples.
    pub fn leading_bands(&self) -> usize {
        match *self {
            PaddingMode::NarrowVisible => 6,
            PaddingMode::WideVisible => 4,
        }
    }

    /// The number of zero bands inserted after the measured samples.
    pub fn trailing_bands(&self) -> usize {
        match *self {
            PaddingMode::NarrowVisible => 13,
            PaddingMode::WideVisible => 10,
        }
    }

    /// The widest sequence of measured samples this mode can place on the canonical grid. Shorter
    /// readings are accepted and zero-filled at the tail; longer ones are an error.
    pub fn sample_bands(&self) -> usize {
        SPECTRUM_BANDS - self.leading_bands() - self.trailing_bands()
    }
}

/// A full-range reflectance spectrum on the canonical grid: a reflectance factor for each of the
/// [`SPECTRUM_BANDS`](constant.SPECTRUM_BANDS.html) wavelength bands, where 0 means no light
/// reflected and 1 means all of it. Values outside that range are physically implausible but are
/// carried through arithmetic untouched. Construct one directly from measured values with
/// [`new`](#method.new), or reconstruct one from a partial reading with [`pad`](fn.pad.html).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ReflectanceSpectrum([f64; SPECTRUM_BANDS]);

impl ReflectanceSpectrum {
    /// Wraps a full set of per-band reflectance factors, first band at 340 nm.
    pub fn new(values: [f64; SPECTRUM_BANDS]) -> ReflectanceSpectrum {
        ReflectanceSpectrum(values)
    }

    /// The per-band reflectance factors, first band at 340 nm.
    pub fn values(&self) -> &[f64; SPECTRUM_BANDS] {
        &self.0
    }
}

/// Reconstructs a full-range spectrum from the sample tokens of a partial reading. The tokens are
/// parsed as decimals and written after `mode`'s leading zero bands, in order; every band the
/// tokens don't reach stays zero. Errors if no mode is given, if there are more tokens than the
/// mode has room for, or if any token fails to parse.
///
/// # Example
///
/// ```
/// # use cxflab::spectrum::{pad, PaddingMode};
/// let samples = vec!["0.25"; 31];
/// let spectrum = pad(&samples, Some(PaddingMode::NarrowVisible)).unwrap();
/// // 400 nm is the 7th band: six leading zeros, then the first sample
/// assert_eq!(spectrum.values()[5], 0.0);
/// assert_eq!(spectrum.values()[6], 0.25);
/// ```
pub fn pad<S: AsRef<str>>(
    samples: &[S],
    mode: Option<PaddingMode>,
) -> Result<ReflectanceSpectrum, CxfError> {
    let mode = mode.ok_or(CxfError::MissingMode)?;
    if samples.len() > mode.sample_bands() {
        return Err(CxfError::TooManySamples {
            count: samples.len(),
            limit: mode.sample_bands(),
        });
    }
    let mut values = [0.0; SPECTRUM_BANDS];
    for (band, token) in values[mode.leading_bands()..].iter_mut().zip(samples) {
        let token = token.as_ref();
        *band = token
            .parse()
            .map_err(|_| CxfError::InvalidSample(token.to_owned()))?;
    }
    Ok(ReflectanceSpectrum(values))
}
