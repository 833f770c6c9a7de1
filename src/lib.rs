//! Cxflab is a library for getting usable color values out of CXF files, the XML-based Color
//! Exchange Format that spectrophotometers and print tooling speak. The annoying thing about CXF
//! in practice is that the interesting numbers come in two unlike shapes: some colors carry an
//! explicit CIELAB value, while others carry a raw reflectance spectrum that only covers the bands
//! the device actually measured, with the covered range hidden inside a cryptic
//! `ColorSpecification` code. Cxflab reads both, reconstructs partial spectra onto a full
//! wavelength grid, integrates them under illuminant D50 with the CIE 1931 2-degree observer, and
//! hands back one record per color with its Lab, sRGB, and LCh values, sorted by name. Everything
//! is pinned to that single viewing condition on purpose: two runs over the same file always agree,
//! and so do two machines.
//!
//! # Example
//!
//! ```
//! use cxflab::prelude::*;
//!
//! let doc = br#"<cc:CxF xmlns:cc="http://colorexchangeformat.com/CxF3-core">
//!   <cc:ObjectCollection>
//!     <cc:Object Name="Sample">
//!       <cc:ColorCIELab><cc:L>53.24</cc:L><cc:A>80.09</cc:A><cc:B>67.20</cc:B></cc:ColorCIELab>
//!     </cc:Object>
//!   </cc:ObjectCollection>
//! </cc:CxF>"#;
//!
//! let records = process(doc).unwrap();
//! assert_eq!(records[0].name, "Sample");
//! assert_eq!(records[0].rgb.to_string(), "#FA0006");
//! ```

#![doc(html_root_url = "https://docs.rs/cxflab/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare 0.963924 with 0.963_924
#![allow(clippy::unreadable_literal)]

extern crate roxmltree;
#[macro_use]
extern crate rulinalg;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate maplit;

pub mod color;
mod consts;
pub mod cxf;
pub mod distance;
pub mod error;
pub mod illuminants;
mod observer;
pub mod pipeline;
pub mod prelude;
pub mod spectrum;
