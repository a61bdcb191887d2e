//! Slide deck rendering (`.pptx`)
//!
//! Deck order is fixed: title slide, agenda, one slide per section,
//! conclusion. [`build_deck`] lays the deck out; [`SlideDeck::to_pptx`] writes
//! the PresentationML package.

use super::ooxml::{
    self, escape, ContentTypes, Package, Relationship, CT_CORE_PROPERTIES, REL_CORE_PROPERTIES,
    REL_OFFICE_DOCUMENT, REL_SLIDE, REL_SLIDE_LAYOUT, REL_SLIDE_MASTER, REL_THEME, XML_DECLARATION,
};
use super::{RenderError, Rgb, ACCENT};
use crate::models::{ContentPackage, Section, StudentInfo};

const CT_PRESENTATION: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
const CT_SLIDE_MASTER: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
const CT_SLIDE_LAYOUT: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
const CT_SLIDE: &str = "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
const CT_THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";

const NAMESPACES: &str = concat!(
    r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
    r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#
);

// 4:3, 10in x 7.5in, in EMU
const SLIDE_WIDTH: i64 = 9_144_000;
const SLIDE_HEIGHT: i64 = 6_858_000;

const AGENDA_TITLE: &str = "PRESENTATION AGENDA";
const CONCLUSION_TITLE: &str = "CONCLUSION & FUTURE SCOPE";
const CONCLUSION_POINTS: [&str; 4] = [
    "Widespread applications across multiple industries",
    "Continuous research and development ongoing",
    "Future implementation will revolutionize current practices",
    "Potential for further innovation and improvement",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

/// One paragraph holding a single run of uniformly formatted text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextParagraph {
    pub text: String,
    pub size_pt: u16,
    pub bold: bool,
    pub color: Option<Rgb>,
    pub alignment: Alignment,
    pub space_after_pt: Option<u16>,
}

impl TextParagraph {
    pub fn new(text: impl Into<String>, size_pt: u16) -> Self {
        Self {
            text: text.into(),
            size_pt,
            bold: false,
            color: None,
            alignment: Alignment::Left,
            space_after_pt: None,
        }
    }

    /// Bold accent-colored slide title
    pub fn heading(text: impl Into<String>, size_pt: u16) -> Self {
        Self::new(text, size_pt).bold().colored(ACCENT)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn colored(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    pub fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    pub fn space_after(mut self, pt: u16) -> Self {
        self.space_after_pt = Some(pt);
        self
    }
}

/// Placeholder position in EMU
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: i64,
    y: i64,
    cx: i64,
    cy: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideLayout {
    /// Centered title with a subtitle block
    Title,
    /// Title bar above a text body
    TitleAndContent,
}

impl SlideLayout {
    const ALL: [SlideLayout; 2] = [SlideLayout::Title, SlideLayout::TitleAndContent];

    /// 1-based part number of the layout inside the package
    fn number(self) -> usize {
        match self {
            SlideLayout::Title => 1,
            SlideLayout::TitleAndContent => 2,
        }
    }

    fn name(self) -> &'static str {
        match self {
            SlideLayout::Title => "Title Slide",
            SlideLayout::TitleAndContent => "Title and Content",
        }
    }

    fn type_attr(self) -> &'static str {
        match self {
            SlideLayout::Title => "title",
            SlideLayout::TitleAndContent => "obj",
        }
    }

    fn title_placeholder(self) -> &'static str {
        match self {
            SlideLayout::Title => r#"<p:ph type="ctrTitle"/>"#,
            SlideLayout::TitleAndContent => r#"<p:ph type="title"/>"#,
        }
    }

    fn body_placeholder(self) -> &'static str {
        match self {
            SlideLayout::Title => r#"<p:ph type="subTitle" idx="1"/>"#,
            SlideLayout::TitleAndContent => r#"<p:ph idx="1"/>"#,
        }
    }

    fn frames(self) -> (Frame, Frame) {
        match self {
            SlideLayout::Title => (
                Frame { x: 685_800, y: 2_130_425, cx: 7_772_400, cy: 1_470_025 },
                Frame { x: 1_371_600, y: 3_886_200, cx: 6_400_800, cy: 1_752_600 },
            ),
            SlideLayout::TitleAndContent => (
                Frame { x: 457_200, y: 274_638, cx: 8_229_600, cy: 1_143_000 },
                Frame { x: 457_200, y: 1_600_200, cx: 8_229_600, cy: 4_525_963 },
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub layout: SlideLayout,
    pub title: TextParagraph,
    pub body: Vec<TextParagraph>,
}

/// Laid-out deck, ready to serialize
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDeck {
    title: String,
    author: String,
    slides: Vec<Slide>,
}

/// Lay out the deck for one content package
pub fn build_deck(content: &ContentPackage, student: &StudentInfo) -> SlideDeck {
    let mut slides = Vec::with_capacity(content.slide_count());
    slides.push(title_slide(content.topic(), student));
    slides.push(agenda_slide(content.sections()));
    slides.extend(content.sections().iter().map(section_slide));
    slides.push(conclusion_slide(content.topic()));

    SlideDeck {
        title: content.topic().to_string(),
        author: student.name.clone(),
        slides,
    }
}

fn title_slide(topic: &str, student: &StudentInfo) -> Slide {
    let subtitle = [
        format!("Presented by: {}", student.name),
        format!("Roll No: {}", student.roll),
        student.college.clone(),
        format!("Semester: {} | Branch: {}", student.semester, student.branch),
        String::new(),
        "Academic Seminar Presentation".to_string(),
    ];

    Slide {
        layout: SlideLayout::Title,
        title: TextParagraph::heading(topic.to_uppercase(), 44).centered(),
        body: subtitle
            .into_iter()
            .map(|line| TextParagraph::new(line, 18).centered())
            .collect(),
    }
}

fn agenda_slide(sections: &[Section]) -> Slide {
    Slide {
        layout: SlideLayout::TitleAndContent,
        title: TextParagraph::heading(AGENDA_TITLE, 36),
        body: sections
            .iter()
            .enumerate()
            .map(|(i, section)| {
                TextParagraph::new(format!("{}. {}", i + 1, section.title()), 24).space_after(12)
            })
            .collect(),
    }
}

fn section_slide(section: &Section) -> Slide {
    let mut body: Vec<TextParagraph> = section
        .points()
        .iter()
        .map(|point| TextParagraph::new(format!("• {}", point), 20).bold().space_after(8))
        .collect();

    if !section.sub_points().is_empty() {
        body.push(TextParagraph::new("", 20).space_after(8));
        body.push(TextParagraph::new("Key Details:", 20).space_after(8));
        body.extend(
            section
                .sub_points()
                .iter()
                .map(|sub| TextParagraph::new(format!("  ◦ {}", sub), 18).space_after(8)),
        );
    }

    Slide {
        layout: SlideLayout::TitleAndContent,
        title: TextParagraph::heading(section.title().to_uppercase(), 32),
        body,
    }
}

fn conclusion_slide(topic: &str) -> Slide {
    let lines = std::iter::once(format!(
        "• {} represents a significant advancement in technology",
        topic
    ))
    .chain(CONCLUSION_POINTS.iter().map(|point| format!("• {}", point)))
    .chain([
        String::new(),
        "Thank you for your attention!".to_string(),
        "Questions & Discussion".to_string(),
    ]);

    Slide {
        layout: SlideLayout::TitleAndContent,
        title: TextParagraph::heading(CONCLUSION_TITLE, 32),
        body: lines
            .map(|line| TextParagraph::new(line, 20).space_after(8))
            .collect(),
    }
}

impl SlideDeck {
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Serialize as a PresentationML package
    pub fn to_pptx(&self) -> Result<Vec<u8>, RenderError> {
        let mut types = ContentTypes::default();
        types.add_override("/ppt/presentation.xml", CT_PRESENTATION);
        types.add_override("/ppt/slideMasters/slideMaster1.xml", CT_SLIDE_MASTER);
        for layout in SlideLayout::ALL {
            types.add_override(
                format!("/ppt/slideLayouts/slideLayout{}.xml", layout.number()),
                CT_SLIDE_LAYOUT,
            );
        }
        types.add_override("/ppt/theme/theme1.xml", CT_THEME);
        for n in 1..=self.slides.len() {
            types.add_override(format!("/ppt/slides/slide{}.xml", n), CT_SLIDE);
        }
        types.add_override("/docProps/core.xml", CT_CORE_PROPERTIES);

        let mut package = Package::new();
        package.add_part("[Content_Types].xml", types.to_xml());
        package.add_part(
            "_rels/.rels",
            ooxml::relationships_xml(&[
                Relationship::new("rId1", REL_OFFICE_DOCUMENT, "ppt/presentation.xml"),
                Relationship::new("rId2", REL_CORE_PROPERTIES, "docProps/core.xml"),
            ]),
        );
        package.add_part(
            "docProps/core.xml",
            ooxml::core_properties_xml(&self.title, &self.author),
        );

        // rId1 master, rId2 theme, rId3.. slides in order
        let mut presentation_rels = vec![
            Relationship::new("rId1", REL_SLIDE_MASTER, "slideMasters/slideMaster1.xml"),
            Relationship::new("rId2", REL_THEME, "theme/theme1.xml"),
        ];
        presentation_rels.extend((1..=self.slides.len()).map(|n| {
            Relationship::new(format!("rId{}", n + 2), REL_SLIDE, format!("slides/slide{}.xml", n))
        }));
        package.add_part("ppt/presentation.xml", presentation_xml(self.slides.len()));
        package.add_part(
            "ppt/_rels/presentation.xml.rels",
            ooxml::relationships_xml(&presentation_rels),
        );

        let mut master_rels: Vec<Relationship> = SlideLayout::ALL
            .iter()
            .map(|layout| {
                Relationship::new(
                    format!("rId{}", layout.number()),
                    REL_SLIDE_LAYOUT,
                    format!("../slideLayouts/slideLayout{}.xml", layout.number()),
                )
            })
            .collect();
        master_rels.push(Relationship::new(
            format!("rId{}", SlideLayout::ALL.len() + 1),
            REL_THEME,
            "../theme/theme1.xml",
        ));
        package.add_part("ppt/slideMasters/slideMaster1.xml", slide_master_xml());
        package.add_part(
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            ooxml::relationships_xml(&master_rels),
        );

        for layout in SlideLayout::ALL {
            package.add_part(
                format!("ppt/slideLayouts/slideLayout{}.xml", layout.number()),
                slide_layout_xml(layout),
            );
            package.add_part(
                format!("ppt/slideLayouts/_rels/slideLayout{}.xml.rels", layout.number()),
                ooxml::relationships_xml(&[Relationship::new(
                    "rId1",
                    REL_SLIDE_MASTER,
                    "../slideMasters/slideMaster1.xml",
                )]),
            );
        }

        package.add_part("ppt/theme/theme1.xml", THEME_XML);

        for (i, slide) in self.slides.iter().enumerate() {
            let n = i + 1;
            package.add_part(format!("ppt/slides/slide{}.xml", n), slide_xml(slide));
            package.add_part(
                format!("ppt/slides/_rels/slide{}.xml.rels", n),
                ooxml::relationships_xml(&[Relationship::new(
                    "rId1",
                    REL_SLIDE_LAYOUT,
                    format!("../slideLayouts/slideLayout{}.xml", slide.layout.number()),
                )]),
            );
        }

        package.to_bytes()
    }
}

fn presentation_xml(slide_count: usize) -> String {
    let mut xml = format!(
        r#"{}<p:presentation {}><p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst><p:sldIdLst>"#,
        XML_DECLARATION, NAMESPACES
    );
    for i in 0..slide_count {
        xml.push_str(&format!(
            r#"<p:sldId id="{}" r:id="rId{}"/>"#,
            256 + i,
            i + 3
        ));
    }
    xml.push_str(&format!(
        r#"</p:sldIdLst><p:sldSz cx="{}" cy="{}" type="screen4x3"/><p:notesSz cx="{}" cy="{}"/></p:presentation>"#,
        SLIDE_WIDTH, SLIDE_HEIGHT, SLIDE_HEIGHT, SLIDE_WIDTH
    ));
    xml
}

const EMPTY_SHAPE_TREE: &str = concat!(
    r#"<p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#
);

fn slide_master_xml() -> String {
    let mut layout_ids = String::new();
    for layout in SlideLayout::ALL {
        layout_ids.push_str(&format!(
            r#"<p:sldLayoutId id="{}" r:id="rId{}"/>"#,
            2_147_483_648u64 + layout.number() as u64,
            layout.number()
        ));
    }

    format!(
        concat!(
            "{}<p:sldMaster {}><p:cSld>{}</p:spTree></p:cSld>",
            r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
            r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#,
            "<p:sldLayoutIdLst>{}</p:sldLayoutIdLst></p:sldMaster>"
        ),
        XML_DECLARATION, NAMESPACES, EMPTY_SHAPE_TREE, layout_ids
    )
}

fn slide_layout_xml(layout: SlideLayout) -> String {
    format!(
        concat!(
            r#"{}<p:sldLayout {} type="{}" preserve="1"><p:cSld name="{}">{}</p:spTree></p:cSld>"#,
            "<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>"
        ),
        XML_DECLARATION,
        NAMESPACES,
        layout.type_attr(),
        layout.name(),
        EMPTY_SHAPE_TREE
    )
}

fn slide_xml(slide: &Slide) -> String {
    let (title_frame, body_frame) = slide.layout.frames();
    let title = shape_xml(
        2,
        "Title 1",
        slide.layout.title_placeholder(),
        title_frame,
        std::slice::from_ref(&slide.title),
        false,
    );
    let body = shape_xml(
        3,
        "Content 2",
        slide.layout.body_placeholder(),
        body_frame,
        &slide.body,
        slide.layout == SlideLayout::TitleAndContent,
    );

    format!(
        "{}<p:sld {}><p:cSld>{}{}{}</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>",
        XML_DECLARATION, NAMESPACES, EMPTY_SHAPE_TREE, title, body
    )
}

fn shape_xml(
    id: u32,
    name: &str,
    placeholder: &str,
    frame: Frame,
    paragraphs: &[TextParagraph],
    suppress_bullets: bool,
) -> String {
    let mut text = String::new();
    for paragraph in paragraphs {
        text.push_str(&paragraph_xml(paragraph, suppress_bullets));
    }
    // a text body needs at least one paragraph
    if text.is_empty() {
        text.push_str(r#"<a:p><a:endParaRPr lang="en-US"/></a:p>"#);
    }

    format!(
        concat!(
            r#"<p:sp><p:nvSpPr><p:cNvPr id="{}" name="{}"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#,
            "<p:nvPr>{}</p:nvPr></p:nvSpPr>",
            r#"<p:spPr><a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm></p:spPr>"#,
            "<p:txBody><a:bodyPr><a:normAutofit/></a:bodyPr><a:lstStyle/>{}</p:txBody></p:sp>"
        ),
        id, name, placeholder, frame.x, frame.y, frame.cx, frame.cy, text
    )
}

fn paragraph_xml(paragraph: &TextParagraph, suppress_bullets: bool) -> String {
    let mut ppr_attrs = String::new();
    if suppress_bullets {
        ppr_attrs.push_str(r#" marL="0" indent="0""#);
    }
    if paragraph.alignment == Alignment::Center {
        ppr_attrs.push_str(r#" algn="ctr""#);
    }

    let mut ppr_children = String::new();
    if let Some(pt) = paragraph.space_after_pt {
        ppr_children.push_str(&format!(
            r#"<a:spcAft><a:spcPts val="{}"/></a:spcAft>"#,
            u32::from(pt) * 100
        ));
    }
    if suppress_bullets {
        ppr_children.push_str("<a:buNone/>");
    }

    let ppr = match (ppr_attrs.is_empty(), ppr_children.is_empty()) {
        (true, true) => String::new(),
        (_, true) => format!("<a:pPr{}/>", ppr_attrs),
        _ => format!("<a:pPr{}>{}</a:pPr>", ppr_attrs, ppr_children),
    };

    let mut rpr_attrs = format!(r#" lang="en-US" sz="{}""#, u32::from(paragraph.size_pt) * 100);
    if paragraph.bold {
        rpr_attrs.push_str(r#" b="1""#);
    }
    let fill = paragraph
        .color
        .map(|color| format!(r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color.hex()))
        .unwrap_or_default();

    if paragraph.text.is_empty() {
        format!("<a:p>{}<a:endParaRPr{}/></a:p>", ppr, rpr_attrs)
    } else {
        format!(
            "<a:p>{}<a:r><a:rPr{}>{}</a:rPr><a:t>{}</a:t></a:r></a:p>",
            ppr,
            rpr_attrs,
            fill,
            escape(&paragraph.text)
        )
    }
}

const THEME_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme"><a:themeElements>"#,
    r#"<a:clrScheme name="Office">"#,
    r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1><a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#,
    r#"<a:dk2><a:srgbClr val="1F497D"/></a:dk2><a:lt2><a:srgbClr val="EEECE1"/></a:lt2>"#,
    r#"<a:accent1><a:srgbClr val="4472C4"/></a:accent1><a:accent2><a:srgbClr val="C0504D"/></a:accent2>"#,
    r#"<a:accent3><a:srgbClr val="9BBB59"/></a:accent3><a:accent4><a:srgbClr val="8064A2"/></a:accent4>"#,
    r#"<a:accent5><a:srgbClr val="4BACC6"/></a:accent5><a:accent6><a:srgbClr val="F79646"/></a:accent6>"#,
    r#"<a:hlink><a:srgbClr val="0000FF"/></a:hlink><a:folHlink><a:srgbClr val="800080"/></a:folHlink>"#,
    r#"</a:clrScheme>"#,
    r#"<a:fontScheme name="Office">"#,
    r#"<a:majorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#,
    r#"<a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#,
    r#"</a:fontScheme>"#,
    r#"<a:fmtScheme name="Office"><a:fillStyleLst>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"</a:fillStyleLst><a:lnStyleLst>"#,
    r#"<a:ln w="9525"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
    r#"<a:ln w="25400"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
    r#"<a:ln w="38100"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
    r#"</a:lnStyleLst><a:effectStyleLst>"#,
    r#"<a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle>"#,
    r#"</a:effectStyleLst><a:bgFillStyleLst>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"</a:bgFillStyleLst></a:fmtScheme></a:themeElements></a:theme>"#
);
