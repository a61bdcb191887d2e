//! Content pipeline
//!
//! Prompt -> text source -> parser -> fallback policy, once for the outline and
//! once for the Q&A, then both halves are frozen into a [`ContentPackage`].

use crate::config::ProviderConfig;
use crate::fallback::{self, Chosen, ContentOrigin};
use crate::models::{ContentPackage, QnAPair, Section};
use crate::parsers::{parse_outline, parse_qna};
use crate::templates;
use crate::text_source::{self, TextSource};

/// An assembled package plus where each half of it came from
#[derive(Debug, Clone)]
pub struct BuiltContent {
    pub package: ContentPackage,
    pub sections_origin: ContentOrigin,
    pub qna_origin: ContentOrigin,
}

/// Generate, parse and (if too sparse) replace the outline for `topic`
pub fn build_sections(
    topic: &str,
    source: &dyn TextSource,
    provider: &ProviderConfig,
) -> tera::Result<Chosen<Section>> {
    let prompt = templates::render_outline_prompt(topic)?;
    let text = text_source::generate(source, &prompt, provider.outline_max_tokens);
    let chosen = fallback::choose_sections(parse_outline(&text), topic);
    log_origin("sections", &chosen.origin, fallback::MIN_SECTIONS);
    Ok(chosen)
}

/// Generate, parse and (if too sparse) replace the Q&A for `topic`
pub fn build_qna(
    topic: &str,
    source: &dyn TextSource,
    provider: &ProviderConfig,
) -> tera::Result<Chosen<QnAPair>> {
    let prompt = templates::render_qna_prompt(topic)?;
    let text = text_source::generate(source, &prompt, provider.qna_max_tokens);
    let chosen = fallback::choose_qna(parse_qna(&text), topic);
    log_origin("Q&A pairs", &chosen.origin, fallback::MIN_QNA_PAIRS);
    Ok(chosen)
}

/// Build the complete content package for one request
pub fn build_content(
    topic: &str,
    source: &dyn TextSource,
    provider: &ProviderConfig,
) -> tera::Result<BuiltContent> {
    let sections = build_sections(topic, source, provider)?;
    log::info!("Generated {} sections", sections.items.len());

    let qna = build_qna(topic, source, provider)?;
    log::info!("Generated {} Q&A pairs", qna.items.len());

    Ok(BuiltContent {
        package: ContentPackage::assemble(topic, sections.items, qna.items),
        sections_origin: sections.origin,
        qna_origin: qna.origin,
    })
}

fn log_origin(what: &str, origin: &ContentOrigin, threshold: usize) {
    if let ContentOrigin::Fallback { parsed_count } = origin {
        log::warn!(
            "Parsed only {} {} (need {}), using fallback template",
            parsed_count,
            what,
            threshold
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text_source::{OfflineTextSource, ProviderError};

    /// Answers the outline prompt and the Q&A prompt with fixed text
    struct Canned {
        outline: &'static str,
        qna: &'static str,
    }

    impl TextSource for Canned {
        fn complete(&self, prompt: &str, _max_tokens: u32) -> Result<String, ProviderError> {
            if prompt.starts_with("Create a detailed seminar presentation structure") {
                Ok(self.outline.to_string())
            } else {
                Ok(self.qna.to_string())
            }
        }
    }

    const FOUR_SECTIONS: &str = "\
Section 1: Introduction
- What it is
Section 2: History
- Early days
Section 3: Uses
- Industry
Section 4: Outlook
- Next steps";

    const FIVE_PAIRS: &str = "\
Q: One?
A: First.
Q: Two?
A: Second.
Q: Three?
A: Third.
Q: Four?
A: Fourth.
Q: Five?
A: Fifth.";

    #[test]
    fn test_parsed_content_is_kept() {
        let source = Canned {
            outline: FOUR_SECTIONS,
            qna: FIVE_PAIRS,
        };
        let built = build_content("Rust", &source, &ProviderConfig::default()).unwrap();

        assert_eq!(built.sections_origin, ContentOrigin::Parsed);
        assert_eq!(built.qna_origin, ContentOrigin::Parsed);
        assert_eq!(built.package.sections().len(), 4);
        assert_eq!(built.package.sections()[3].title(), "Outlook");
        assert_eq!(built.package.qna().len(), 5);
        assert_eq!(built.package.topic(), "Rust");
    }

    #[test]
    fn test_offline_source_falls_back_for_both_halves() {
        let built =
            build_content("Quantum Computing", &OfflineTextSource, &ProviderConfig::default())
                .unwrap();

        assert_eq!(
            built.sections_origin,
            ContentOrigin::Fallback { parsed_count: 0 }
        );
        assert_eq!(built.qna_origin, ContentOrigin::Fallback { parsed_count: 0 });
        assert_eq!(built.package.sections().len(), 6);
        assert_eq!(built.package.qna().len(), 8);
        assert_eq!(built.package.slide_count(), 9);
    }

    #[test]
    fn test_halves_fall_back_independently() {
        let source = Canned {
            outline: FOUR_SECTIONS,
            qna: "Q: lonely?\nA: yes",
        };
        let built = build_content("Rust", &source, &ProviderConfig::default()).unwrap();

        assert_eq!(built.sections_origin, ContentOrigin::Parsed);
        assert_eq!(built.qna_origin, ContentOrigin::Fallback { parsed_count: 1 });
        assert_eq!(built.package.qna().len(), 8);
    }
}
