//! Office Open XML packaging
//!
//! Both document formats are zip archives of XML parts wired together by
//! `[Content_Types].xml` and `.rels` relationship parts. Entries are written
//! with a fixed timestamp so the same parts always produce the same bytes.

use super::RenderError;
use std::borrow::Cow;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

pub const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
pub const REL_CORE_PROPERTIES: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
pub const REL_SLIDE_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
pub const REL_SLIDE_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
pub const REL_SLIDE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
pub const REL_THEME: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
pub const REL_STYLES: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";

pub const CT_RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
pub const CT_CORE_PROPERTIES: &str = "application/vnd.openxmlformats-package.core-properties+xml";

/// Escape text for element content and attribute values
pub fn escape(text: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(text)
}

/// One entry of a `.rels` part
#[derive(Debug, Clone)]
pub struct Relationship {
    pub id: String,
    pub rel_type: &'static str,
    pub target: String,
}

impl Relationship {
    pub fn new(id: impl Into<String>, rel_type: &'static str, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rel_type,
            target: target.into(),
        }
    }
}

pub fn relationships_xml(rels: &[Relationship]) -> String {
    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    for rel in rels {
        xml.push_str(&format!(
            r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
            escape(&rel.id),
            rel.rel_type,
            escape(&rel.target)
        ));
    }
    xml.push_str("</Relationships>");
    xml
}

/// `[Content_Types].xml`: `.rels` and `.xml` defaults plus per-part overrides
#[derive(Debug, Default)]
pub struct ContentTypes {
    overrides: Vec<(String, &'static str)>,
}

impl ContentTypes {
    /// Register `part_name` (absolute, e.g. `/word/document.xml`)
    pub fn add_override(&mut self, part_name: impl Into<String>, content_type: &'static str) {
        self.overrides.push((part_name.into(), content_type));
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::from(XML_DECLARATION);
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );
        xml.push_str(&format!(
            r#"<Default Extension="rels" ContentType="{}"/>"#,
            CT_RELATIONSHIPS
        ));
        xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
        for (part_name, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape(part_name),
                content_type
            ));
        }
        xml.push_str("</Types>");
        xml
    }
}

/// `docProps/core.xml` carrying the document title and author. No dates, so
/// the part stays identical across renders.
pub fn core_properties_xml(title: &str, creator: &str) -> String {
    format!(
        concat!(
            "{}",
            r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
            r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
            r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
            "<dc:title>{}</dc:title><dc:creator>{}</dc:creator>",
            "</cp:coreProperties>"
        ),
        XML_DECLARATION,
        escape(title),
        escape(creator)
    )
}

/// An OOXML package under construction; parts are written in insertion order
#[derive(Debug, Default)]
pub struct Package {
    parts: Vec<(String, String)>,
}

impl Package {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part by its zip path (no leading slash)
    pub fn add_part(&mut self, path: impl Into<String>, xml: impl Into<String>) {
        self.parts.push((path.into(), xml.into()));
    }

    /// Serialize to zip bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, RenderError> {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (path, xml) in &self.parts {
            zip.start_file(path.as_str(), options)?;
            zip.write_all(xml.as_bytes())?;
        }
        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}
