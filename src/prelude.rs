//! This module simply brings the most common functionality under a single namespace, to prevent
//! excessive imports. The prelude includes the one-call [`process`] entry point and the pieces it
//! is built from: parsing into a [`CxfDocument`], the color value types a [`ColorRecord`] carries,
//! the [`delta_e`] color difference, and the error type everything fallible reports. The spectral
//! internals (padding modes, observer data, illuminant tables) are not included: reach into their
//! modules when you need them.

pub use color::{CIELABColor, CIELCHColor, RGBColor, XYZColor};
pub use cxf::{parse_cxf, CxfDocument};
pub use distance::delta_e;
pub use error::CxfError;
pub use pipeline::{color_records, process, ColorRecord};
