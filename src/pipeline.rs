//! This module ties the rest of the crate together: it walks a parsed
//! [`CxfDocument`](../cxf/struct.CxfDocument.html) and produces one finished
//! [`ColorRecord`](struct.ColorRecord.html) per color name, with the Lab, sRGB, and LCh values all
//! filled in. Two rules give the output its shape. First, records come out sorted by name, so the
//! same document always produces the same listing. Second, when a color was both measured
//! spectrally and tagged with an explicit `ColorCIELab` value, the explicit value wins: it's the
//! number a person wrote down or a device certified, while the spectral integration is our model
//! of one.

use color::{lab_to_lch, lab_to_rgb, spectrum_to_lab, CIELABColor, CIELCHColor, RGBColor};
use cxf::{parse_cxf, CxfDocument};
use error::CxfError;
use spectrum::pad;

/// One color, fully converted: the name it had in the document and its value in each output space.
/// The Lab value is the source of truth the other two are derived from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorRecord {
    /// The object's name from the document, or the default for nameless objects.
    pub name: String,
    /// The CIELAB value, either straight from the document or integrated from reflectance.
    pub lab: CIELABColor,
    /// The displayable sRGB rendering of `lab`.
    pub rgb: RGBColor,
    /// The cylindrical LCh form of `lab`.
    pub lch: CIELCHColor,
}

/// Converts every color in a parsed document, returning the records sorted by name. Colors with a
/// direct Lab value use it as-is; purely spectral colors are padded onto the canonical grid and
/// integrated. A reflectance reading that can't be reconstructed (a malformed sample token, or
/// more samples than its mode has room for) fails the whole conversion, unlike the per-color
/// skipping that happens during parsing: by this point the document told us the color is there,
/// so losing it silently would misrepresent the measurement session.
pub fn color_records(document: &CxfDocument) -> Result<Vec<ColorRecord>, CxfError> {
    let mut records = Vec::new();
    for name in document.names() {
        let lab = if let Some(&lab) = document.lab.get(name) {
            lab
        } else if let Some(reading) = document.reflectance.get(name) {
            spectrum_to_lab(&pad(&reading.samples, Some(reading.mode))?)
        } else {
            // names() only yields keys of the two maps
            continue;
        };
        records.push(ColorRecord {
            name: name.to_owned(),
            lab,
            rgb: lab_to_rgb(lab),
            lch: lab_to_lch(lab),
        });
    }
    Ok(records)
}

/// Parses a CXF byte buffer and converts everything in it, in one call: the whole crate as a
/// single function.
///
/// # Example
///
/// ```
/// # use cxflab::pipeline::process;
/// let doc = br#"<cc:CxF xmlns:cc="http://colorexchangeformat.com/CxF3-core">
///   <cc:ObjectCollection>
///     <cc:Object Name="Red">
///       <cc:ColorCIELab><cc:L>53.24</cc:L><cc:A>80.09</cc:A><cc:B>67.20</cc:B></cc:ColorCIELab>
///     </cc:Object>
///   </cc:ObjectCollection>
/// </cc:CxF>"#;
/// let records = process(doc).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].rgb.to_string(), "#FA0006");
/// ```
pub fn process(buffer: &[u8]) -> Result<Vec<ColorRecord>, CxfError> {
    color_records(&parse_cxf(buffer)?)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use consts::TEST_PRECISION;
    use cxf::ReflectanceReading;
    use distance::delta_e;
    use spectrum::PaddingMode;

    fn reading(samples: Vec<&str>, mode: PaddingMode) -> ReflectanceReading {
        ReflectanceReading {
            samples: samples.into_iter().map(str::to_owned).collect(),
            mode,
        }
    }

    #[test]
    fn test_direct_lab_wins_over_reflectance() {
        let mut document = CxfDocument::default();
        document.reflectance.insert(
            "Patch".to_string(),
            reading(vec!["1.0"; 31], PaddingMode::NarrowVisible),
        );
        document.lab.insert(
            "Patch".to_string(),
            CIELABColor {
                l: 50.0,
                a: 0.0,
                b: 0.0,
            },
        );
        let records = color_records(&document).unwrap();
        assert_eq!(records.len(), 1);
        // the explicit value passes through untouched, so this is exact
        assert_eq!(
            records[0].lab,
            CIELABColor {
                l: 50.0,
                a: 0.0,
                b: 0.0,
            }
        );
    }

    #[test]
    fn test_records_come_out_sorted_by_name() {
        let mut document = CxfDocument::default();
        for name in ["b", "A", "Z"].iter() {
            document.lab.insert(
                name.to_string(),
                CIELABColor {
                    l: 50.0,
                    a: 0.0,
                    b: 0.0,
                },
            );
        }
        let records = color_records(&document).unwrap();
        let names: Vec<&str> = records.iter().map(|record| record.name.as_str()).collect();
        assert_eq!(names, vec!["A", "Z", "b"]);
    }

    #[test]
    fn test_spectral_color_is_integrated() {
        let mut document = CxfDocument::default();
        document.reflectance.insert(
            "HalfGray".to_string(),
            reading(vec!["0.5"; 31], PaddingMode::NarrowVisible),
        );
        let records = color_records(&document).unwrap();
        assert_eq!(records.len(), 1);
        // half reflectance across the visible range: a light neutral gray
        assert!((records[0].lab.l - 76.0586).abs() <= 1e-3);
        assert!(records[0].lch.c < 1.0);
    }

    #[test]
    fn test_bad_sample_token_fails_the_conversion() {
        let mut document = CxfDocument::default();
        document.reflectance.insert(
            "Broken".to_string(),
            reading(vec!["0.5", "oops"], PaddingMode::WideVisible),
        );
        let err = color_records(&document).unwrap_err();
        assert_eq!(err, CxfError::InvalidSample("oops".to_string()));
    }

    #[test]
    fn test_overfull_reading_fails_the_conversion() {
        let mut document = CxfDocument::default();
        document.reflectance.insert(
            "Crowded".to_string(),
            reading(vec!["0.5"; 32], PaddingMode::NarrowVisible),
        );
        let err = color_records(&document).unwrap_err();
        assert_eq!(
            err,
            CxfError::TooManySamples {
                count: 32,
                limit: 31,
            }
        );
    }

    #[test]
    fn test_process_end_to_end() {
        let doc = br#"<cc:CxF xmlns:cc="http://colorexchangeformat.com/CxF3-core">
          <cc:Resources>
            <cc:ObjectCollection>
              <cc:Object Name="Red">
                <cc:ColorValues>
                  <cc:ColorCIELab>
                    <cc:L>53.24</cc:L><cc:A>80.09</cc:A><cc:B>67.20</cc:B>
                  </cc:ColorCIELab>
                </cc:ColorValues>
              </cc:Object>
              <cc:Object Name="Patch2">
                <cc:ColorCIELab><cc:L>55</cc:L><cc:A>0</cc:A><cc:B>0</cc:B></cc:ColorCIELab>
              </cc:Object>
              <cc:Object Name="Patch1">
                <cc:ColorCIELab><cc:L>50</cc:L><cc:A>0</cc:A><cc:B>0</cc:B></cc:ColorCIELab>
              </cc:Object>
              <cc:Object Name="Ink">
                <cc:ReflectanceSpectrum ColorSpecification="CS000">
                  1.0 1.0 1.0 1.0 1.0 1.0 1.0 1.0 1.0 1.0 1.0 1.0 1.0 1.0 1.0 1.0
                  1.0 1.0 1.0 1.0 1.0 1.0 1.0 1.0 1.0 1.0 1.0 1.0 1.0 1.0 1.0
                </cc:ReflectanceSpectrum>
              </cc:Object>
            </cc:ObjectCollection>
          </cc:Resources>
        </cc:CxF>"#;
        let records = process(doc).unwrap();
        let names: Vec<&str> = records.iter().map(|record| record.name.as_str()).collect();
        assert_eq!(names, vec!["Ink", "Patch1", "Patch2", "Red"]);

        // a fully reflective ink is as close to paper white as the pipeline gets
        assert!(records[0].lab.l > 99.0);
        assert!(records[0].lch.c < 1.0);

        // two neutral patches five L apart: delta E of exactly 5
        assert_eq!(delta_e(records[1].lab, records[2].lab), 5.0);

        // the red patch renders to the sRGB red corner, with a hue right around 40 degrees
        assert_eq!(
            records[3].rgb,
            RGBColor {
                r: 250,
                g: 0,
                b: 6,
            }
        );
        assert!((records[3].lch.h - 39.998535).abs() <= TEST_PRECISION);
    }

    #[test]
    fn test_same_name_compares_across_documents() {
        // the classic workflow: measure the same patch twice and see how far it drifted
        let before = br#"<cc:CxF xmlns:cc="http://colorexchangeformat.com/CxF3-core">
          <cc:ObjectCollection>
            <cc:Object Name="Patch1">
              <cc:ColorCIELab><cc:L>50</cc:L><cc:A>0</cc:A><cc:B>0</cc:B></cc:ColorCIELab>
            </cc:Object>
          </cc:ObjectCollection>
        </cc:CxF>"#;
        let after = br#"<cc:CxF xmlns:cc="http://colorexchangeformat.com/CxF3-core">
          <cc:ObjectCollection>
            <cc:Object Name="Patch1">
              <cc:ColorCIELab><cc:L>55</cc:L><cc:A>0</cc:A><cc:B>0</cc:B></cc:ColorCIELab>
            </cc:Object>
          </cc:ObjectCollection>
        </cc:CxF>"#;
        let first = process(before).unwrap();
        let second = process(after).unwrap();
        assert_eq!(first[0].name, second[0].name);
        assert_eq!(delta_e(first[0].lab, second[0].lab), 5.0);
    }

    #[test]
    fn test_empty_document_gives_no_records() {
        let records =
            process(br#"<cc:CxF xmlns:cc="http://colorexchangeformat.com/CxF3-core"></cc:CxF>"#)
                .unwrap();
        assert!(records.is_empty());
    }
}
