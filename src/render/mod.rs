//! Document renderers
//!
//! Each renderer first builds a plain layout model from the content package
//! (what text goes where, at what size) and then serializes that model. Tests
//! assert on the layout model; the serializers only translate it.

pub mod ooxml;
pub mod report;
pub mod slides;
pub mod transcript;

pub use report::{build_report, ReportBlock, ReportDocument};
pub use slides::{build_deck, Slide, SlideDeck, SlideLayout, TextParagraph};
pub use transcript::render_transcript;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to build document archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error while rendering: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

/// 24-bit color used for run text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `RRGGBB`, as OOXML color attributes expect
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Heading color of every slide title
pub const ACCENT: Rgb = Rgb(68, 114, 196);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_hex() {
        assert_eq!(ACCENT.hex(), "4472C4");
        assert_eq!(Rgb(0, 15, 255).hex(), "000FFF");
    }
}
