//! This module reads CXF documents, the XML-based Color Exchange Format that measurement devices
//! and print tooling pass color data around in. A full CXF file describes a lot more than this
//! crate cares about (devices, measurement conditions, custom resources); what gets extracted is
//! exactly what the conversion pipeline needs, namely every color object's reflectance reading
//! and/or directly-embedded CIELAB value, keyed by the object's name.
//!
//! Parsing is deliberately forgiving about individual colors and strict about structure. A
//! document that isn't well-formed XML is an error, but a color whose `ColorSpecification` code
//! can't be resolved to a padding mode, or whose `ColorCIELab` element is incomplete or
//! unparseable, is silently dropped: one bad object in a measurement session shouldn't take down
//! the other two hundred.

use std::collections::{BTreeMap, BTreeSet};
use std::str::from_utf8;

use roxmltree::{Document, Node};

use color::CIELABColor;
use error::CxfError;
use spectrum::PaddingMode;

/// The XML namespace that CXF3 core elements live in. Elements with the right local name but the
/// wrong (or no) namespace are ignored.
pub const CXF_NAMESPACE: &'static str = "http://colorexchangeformat.com/CxF3-core";

/// The name given to color objects that carry no `Name` attribute. Names key everything downstream,
/// so several anonymous objects in one document overwrite each other rather than accumulate.
pub const DEFAULT_NAME: &'static str = "Unnamed";

/// One reflectance reading as it appears in a document: the raw sample tokens, still unparsed, and
/// the padding mode its `ColorSpecification` attribute resolved to. Tokens stay strings here
/// because a malformed token is only an error for the color it belongs to, and not before
/// reconstruction actually needs the number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReflectanceReading {
    /// The whitespace-separated sample tokens, in wavelength order.
    pub samples: Vec<String>,
    /// How the samples are to be placed on the canonical grid.
    pub mode: PaddingMode,
}

/// Everything the pipeline wants from one CXF document: reflectance readings and direct Lab
/// values, each keyed by object name. A single color can appear in both maps (measured spectrally
/// and tagged with a Lab value), and it's the pipeline's job to pick which one wins. The maps are
/// ordered so that everything downstream comes out sorted by name without further work.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CxfDocument {
    /// Reflectance readings by object name. Later readings for the same name overwrite earlier
    /// ones.
    pub reflectance: BTreeMap<String, ReflectanceReading>,
    /// Direct CIELAB values by object name. Later values for the same name overwrite earlier ones.
    pub lab: BTreeMap<String, CIELABColor>,
}

impl CxfDocument {
    /// Every object name the document mentions, spectral or Lab or both, in sorted order.
    pub fn names(&self) -> BTreeSet<&str> {
        self.reflectance
            .keys()
            .chain(self.lab.keys())
            .map(|name| name.as_str())
            .collect()
    }
}

/// Parses the raw bytes of a CXF file into a [`CxfDocument`](struct.CxfDocument.html). Bytes that
/// aren't UTF-8 text or aren't well-formed XML produce a
/// [`MalformedDocument`](../error/enum.CxfError.html) error; after that, every element child of
/// every `ObjectCollection` is treated as a color object and mined for `ReflectanceSpectrum` and
/// `ColorCIELab` elements, skipping whatever doesn't resolve cleanly.
///
/// # Example
///
/// ```
/// # use cxflab::cxf::parse_cxf;
/// let doc = br#"<cc:CxF xmlns:cc="http://colorexchangeformat.com/CxF3-core">
///   <cc:ObjectCollection>
///     <cc:Object Name="Patch1">
///       <cc:ColorCIELab><cc:L>50</cc:L><cc:A>0</cc:A><cc:B>0</cc:B></cc:ColorCIELab>
///     </cc:Object>
///   </cc:ObjectCollection>
/// </cc:CxF>"#;
/// let parsed = parse_cxf(doc).unwrap();
/// assert!(parsed.lab.contains_key("Patch1"));
/// ```
pub fn parse_cxf(buffer: &[u8]) -> Result<CxfDocument, CxfError> {
    let text = from_utf8(buffer).map_err(|err| CxfError::MalformedDocument(err.to_string()))?;
    let xml = Document::parse(text).map_err(|err| CxfError::MalformedDocument(err.to_string()))?;

    let mut document = CxfDocument::default();
    for collection in xml
        .descendants()
        .filter(|node| node.has_tag_name((CXF_NAMESPACE, "ObjectCollection")))
    {
        for object in collection.children().filter(|node| node.is_element()) {
            let name = object.attribute("Name").unwrap_or(DEFAULT_NAME);
            read_object(object, name, &mut document);
        }
    }
    Ok(document)
}

/// Pulls the reflectance readings and Lab values out of one color object. Only proper descendants
/// are searched: a value element sitting directly in a collection is an empty object, not a
/// reading of itself.
fn read_object(object: Node, name: &str, document: &mut CxfDocument) {
    // descendants() starts with the object node itself
    for node in object.descendants().filter(|node| {
        node.id() != object.id() && node.has_tag_name((CXF_NAMESPACE, "ReflectanceSpectrum"))
    }) {
        let mode = node
            .attribute("ColorSpecification")
            .and_then(PaddingMode::from_spec_code);
        // a missing or unrecognized specification drops the reading: better no answer than a
        // spectrum reconstructed at the wrong wavelengths
        if let Some(mode) = mode {
            let samples = node
                .text()
                .unwrap_or("")
                .split_whitespace()
                .map(|token| token.to_owned())
                .collect();
            document
                .reflectance
                .insert(name.to_owned(), ReflectanceReading { samples, mode });
        }
    }
    for node in object.descendants().filter(|node| {
        node.id() != object.id() && node.has_tag_name((CXF_NAMESPACE, "ColorCIELab"))
    }) {
        if let Some(lab) = read_lab(node) {
            document.lab.insert(name.to_owned(), lab);
        }
    }
}

/// Reads one named component of a `ColorCIELab` element, or `None` if the child is missing, empty,
/// or not a number.
fn lab_component(node: Node, tag: &str) -> Option<f64> {
    let child = node
        .children()
        .find(|child| child.has_tag_name((CXF_NAMESPACE, tag)))?;
    child.text()?.trim().parse().ok()
}

/// Assembles a Lab color from a `ColorCIELab` element's L, A, and B children. All three components
/// have to be present and numeric or the whole value is discarded.
fn read_lab(node: Node) -> Option<CIELABColor> {
    Some(CIELABColor {
        l: lab_component(node, "L")?,
        a: lab_component(node, "A")?,
        b: lab_component(node, "B")?,
    })
}
