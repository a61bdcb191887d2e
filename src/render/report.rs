//! Written report rendering (`.docx`)

use super::ooxml::{
    self, escape, ContentTypes, Package, Relationship, CT_CORE_PROPERTIES, REL_CORE_PROPERTIES,
    REL_OFFICE_DOCUMENT, REL_STYLES, XML_DECLARATION,
};
use super::RenderError;
use crate::models::{ContentPackage, QnAPair, Section, StudentInfo};

const CT_DOCUMENT: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
const CT_STYLES: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";

const W_NAMESPACE: &str = r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main""#;

/// One paragraph-level element of the report, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportBlock {
    Title(String),
    Heading1(String),
    Heading3(String),
    /// Body text; an empty string is a spacer
    Paragraph(String),
    PageBreak,
}

impl ReportBlock {
    pub fn text(&self) -> Option<&str> {
        match self {
            ReportBlock::Title(text)
            | ReportBlock::Heading1(text)
            | ReportBlock::Heading3(text)
            | ReportBlock::Paragraph(text) => Some(text),
            ReportBlock::PageBreak => None,
        }
    }

    fn style_id(&self) -> Option<&'static str> {
        match self {
            ReportBlock::Title(_) => Some("Title"),
            ReportBlock::Heading1(_) => Some("Heading1"),
            ReportBlock::Heading3(_) => Some("Heading3"),
            ReportBlock::Paragraph(_) | ReportBlock::PageBreak => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    title: String,
    author: String,
    blocks: Vec<ReportBlock>,
}

fn paragraph(text: impl Into<String>) -> ReportBlock {
    ReportBlock::Paragraph(text.into())
}

/// Lay out the report: cover, contents, sections, Q&A, conclusion
pub fn build_report(content: &ContentPackage, student: &StudentInfo) -> ReportDocument {
    let sections = content.sections();
    let qna_number = sections.len() + 1;
    let conclusion_number = sections.len() + 2;

    let mut blocks = cover(content.topic(), student);

    blocks.push(ReportBlock::Heading1("TABLE OF CONTENTS".to_string()));
    blocks.extend(
        sections
            .iter()
            .enumerate()
            .map(|(i, section)| paragraph(format!("{}. {}", i + 1, section.title()))),
    );
    blocks.push(paragraph(format!("{}. Questions & Answers", qna_number)));
    blocks.push(paragraph(format!("{}. Conclusion", conclusion_number)));
    blocks.push(ReportBlock::PageBreak);

    for (i, section) in sections.iter().enumerate() {
        blocks.extend(section_blocks(i + 1, section));
    }

    blocks.push(ReportBlock::Heading1(format!(
        "{}. Questions & Answers",
        qna_number
    )));
    for (i, pair) in content.qna().iter().enumerate() {
        blocks.extend(qna_blocks(i + 1, pair));
    }

    blocks.push(ReportBlock::Heading1(format!(
        "{}. Conclusion",
        conclusion_number
    )));
    blocks.push(paragraph(conclusion_text(content.topic())));

    ReportDocument {
        title: content.topic().to_string(),
        author: student.name.clone(),
        blocks,
    }
}

fn cover(topic: &str, student: &StudentInfo) -> Vec<ReportBlock> {
    vec![
        ReportBlock::Title(topic.to_uppercase()),
        paragraph("Seminar Report"),
        paragraph(""),
        paragraph(format!("Submitted by: {}", student.name)),
        paragraph(format!("Roll Number: {}", student.roll)),
        paragraph(format!("College: {}", student.college)),
        paragraph(format!("Semester: {}", student.semester)),
        paragraph(format!("Branch: {}", student.branch)),
        ReportBlock::PageBreak,
    ]
}

fn section_blocks(number: usize, section: &Section) -> Vec<ReportBlock> {
    let mut blocks = vec![ReportBlock::Heading1(format!("{}. {}", number, section.title()))];
    blocks.extend(section.points().iter().map(|point| paragraph(format!("• {}", point))));

    if !section.sub_points().is_empty() {
        blocks.push(paragraph("Detailed Information:"));
        blocks.extend(
            section
                .sub_points()
                .iter()
                .map(|sub| paragraph(format!("  ◦ {}", sub))),
        );
    }

    blocks.push(paragraph(""));
    blocks
}

fn qna_blocks(number: usize, pair: &QnAPair) -> [ReportBlock; 3] {
    [
        ReportBlock::Heading3(format!("Q{}: {}", number, pair.question())),
        paragraph(format!("Answer: {}", pair.answer())),
        paragraph(""),
    ]
}

fn conclusion_text(topic: &str) -> String {
    format!(
        "This seminar on {topic} has provided comprehensive insights into the subject matter. \
         The discussion covered various aspects including technical details, applications, and \
         future scope. The research and analysis presented demonstrate the significance of \
         {topic} in current technological advancements."
    )
}

impl ReportDocument {
    pub fn blocks(&self) -> &[ReportBlock] {
        &self.blocks
    }

    /// Serialize as a WordprocessingML package
    pub fn to_docx(&self) -> Result<Vec<u8>, RenderError> {
        let mut types = ContentTypes::default();
        types.add_override("/word/document.xml", CT_DOCUMENT);
        types.add_override("/word/styles.xml", CT_STYLES);
        types.add_override("/docProps/core.xml", CT_CORE_PROPERTIES);

        let mut package = Package::new();
        package.add_part("[Content_Types].xml", types.to_xml());
        package.add_part(
            "_rels/.rels",
            ooxml::relationships_xml(&[
                Relationship::new("rId1", REL_OFFICE_DOCUMENT, "word/document.xml"),
                Relationship::new("rId2", REL_CORE_PROPERTIES, "docProps/core.xml"),
            ]),
        );
        package.add_part(
            "docProps/core.xml",
            ooxml::core_properties_xml(&self.title, &self.author),
        );
        package.add_part("word/document.xml", self.document_xml());
        package.add_part(
            "word/_rels/document.xml.rels",
            ooxml::relationships_xml(&[Relationship::new("rId1", REL_STYLES, "styles.xml")]),
        );
        package.add_part("word/styles.xml", STYLES_XML);

        package.to_bytes()
    }

    fn document_xml(&self) -> String {
        let mut xml = format!("{}<w:document {}><w:body>", XML_DECLARATION, W_NAMESPACE);
        for block in &self.blocks {
            xml.push_str(&block_xml(block));
        }
        xml.push_str(concat!(
            r#"<w:sectPr><w:pgSz w:w="12240" w:h="15840"/>"#,
            r#"<w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="720" w:footer="720" w:gutter="0"/>"#,
            "</w:sectPr></w:body></w:document>"
        ));
        xml
    }
}

fn block_xml(block: &ReportBlock) -> String {
    let text = match block {
        ReportBlock::PageBreak => return r#"<w:p><w:r><w:br w:type="page"/></w:r></w:p>"#.to_string(),
        _ => block.text().unwrap_or_default(),
    };

    let ppr = block
        .style_id()
        .map(|style| format!(r#"<w:pPr><w:pStyle w:val="{}"/></w:pPr>"#, style))
        .unwrap_or_default();

    if text.is_empty() {
        format!("<w:p>{}</w:p>", ppr)
    } else {
        format!(
            r#"<w:p>{}<w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
            ppr,
            escape(text)
        )
    }
}

const STYLES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
    r#"<w:docDefaults><w:rPrDefault><w:rPr>"#,
    r#"<w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:eastAsia="Calibri" w:cs="Calibri"/>"#,
    r#"<w:sz w:val="22"/><w:szCs w:val="22"/><w:lang w:val="en-US"/>"#,
    r#"</w:rPr></w:rPrDefault><w:pPrDefault><w:pPr><w:spacing w:after="200" w:line="276" w:lineRule="auto"/></w:pPr></w:pPrDefault></w:docDefaults>"#,
    r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style>"#,
    r#"<w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/>"#,
    r#"<w:pPr><w:spacing w:after="300"/></w:pPr><w:rPr><w:color w:val="17365D"/><w:sz w:val="52"/><w:szCs w:val="52"/></w:rPr></w:style>"#,
    r#"<w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/>"#,
    r#"<w:pPr><w:keepNext/><w:spacing w:before="480" w:after="0"/><w:outlineLvl w:val="0"/></w:pPr>"#,
    r#"<w:rPr><w:b/><w:color w:val="365F91"/><w:sz w:val="28"/><w:szCs w:val="28"/></w:rPr></w:style>"#,
    r#"<w:style w:type="paragraph" w:styleId="Heading3"><w:name w:val="heading 3"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/>"#,
    r#"<w:pPr><w:keepNext/><w:spacing w:before="200" w:after="0"/><w:outlineLvl w:val="2"/></w:pPr>"#,
    r#"<w:rPr><w:b/><w:color w:val="4F81BD"/></w:rPr></w:style>"#,
    r#"</w:styles>"#
);
