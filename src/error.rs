//! This module defines the single error type that the parsing and reconstruction half of the crate
//! reports. The colorimetric conversions themselves are total functions and never fail: every
//! fallible step lives between the raw byte buffer and the padded spectrum, so one enum covers the
//! whole pipeline.

use std::error::Error;
use std::fmt;

/// An error encountered while turning a CXF document into color records. Structural problems with
/// the document abort the whole run; per-color problems are reported for the color that caused
/// them. Anything recoverable (an unrecognized specification code, a malformed `ColorCIELab`
/// element) is skipped during parsing instead of surfacing here.
#[derive(Debug, Clone, PartialEq)]
pub enum CxfError {
    /// The byte buffer could not be parsed as XML at all, either because it is not UTF-8 text or
    /// because the markup itself is broken. The payload is a human-readable description of the
    /// underlying failure. Nothing can be salvaged from such a document: no partial output is
    /// produced.
    MalformedDocument(String),
    /// A reflectance sample token could not be parsed as a decimal number. The payload is the
    /// offending token. Note the asymmetry with direct Lab values, which are skipped when
    /// malformed: a bad spectral token is only discovered during reconstruction, after parsing has
    /// committed to the color, and so aborts that color's conversion.
    InvalidSample(String),
    /// A reflectance reading holds more samples than fit between its padding mode's leading and
    /// trailing zero bands. `count` is the number of samples in the reading and `limit` is the
    /// widest sequence the mode can place on the canonical grid.
    TooManySamples {
        /// How many samples the reading actually carried.
        count: usize,
        /// How many samples the padding mode has room for.
        limit: usize,
    },
    /// Spectrum reconstruction was requested without a resolved padding mode. This is a caller
    /// error: a document that produced a reflectance reading always carries the mode alongside it.
    MissingMode,
}

impl fmt::Display for CxfError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CxfError::MalformedDocument(ref cause) => {
                write!(f, "document is not well-formed CXF XML: {}", cause)
            }
            CxfError::InvalidSample(ref token) => {
                write!(f, "reflectance sample {:?} is not a decimal number", token)
            }
            CxfError::TooManySamples { count, limit } => write!(
                f,
                "reflectance spectrum has {} samples but at most {} fit the padded range",
                count, limit
            ),
            CxfError::MissingMode => {
                write!(f, "cannot reconstruct a spectrum without a padding mode")
            }
        }
    }
}

impl Error for CxfError {}
