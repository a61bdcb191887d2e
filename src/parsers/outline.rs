// Outline parser - turns generated "Section N: Title" text into sections

use crate::models::Section;

/// What a single trimmed line of outline text means
#[derive(Debug, Clone, PartialEq, Eq)]
enum OutlineLine<'a> {
    Blank,
    /// `Section <anything>: <title>`
    SectionStart(&'a str),
    /// `- point` or `• point`, marker stripped
    Bullet(&'a str),
    Ignored,
}

impl<'a> OutlineLine<'a> {
    /// Section-start wins over bullet when both could apply
    fn classify(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Blank;
        }

        if line.starts_with("Section") {
            if let Some((label, title)) = line.split_once(':') {
                let title = title.trim();
                // "Section 3:" with nothing after the colon keeps its label as the title
                return Self::SectionStart(if title.is_empty() { label.trim() } else { title });
            }
        }

        for marker in ['-', '•'] {
            if line.starts_with(marker) {
                let point = line
                    .trim_start_matches(|c: char| c == marker || c.is_whitespace())
                    .trim();
                return Self::Bullet(point);
            }
        }

        Self::Ignored
    }
}

/// Automaton state: either no section is open yet, or one is accumulating points
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum OutlineState {
    #[default]
    Idle,
    InSection(Section),
}

/// Accumulator threaded through the fold over lines
#[derive(Debug, Default)]
struct OutlineAccumulator {
    sections: Vec<Section>,
    state: OutlineState,
}

impl OutlineAccumulator {
    fn step(mut self, line: OutlineLine<'_>) -> Self {
        let state = std::mem::take(&mut self.state);
        let next = match (state, line) {
            (state, OutlineLine::SectionStart(title)) => {
                if let OutlineState::InSection(done) = state {
                    self.sections.push(done);
                }
                OutlineState::InSection(Section::new(title))
            }
            (OutlineState::InSection(mut section), OutlineLine::Bullet(point)) => {
                if !point.is_empty() {
                    section.push_point(point);
                }
                OutlineState::InSection(section)
            }
            // Bullets before the first heading, blanks and free text are dropped
            (state, _) => state,
        };
        self.state = next;
        self
    }

    fn finish(mut self) -> Vec<Section> {
        if let OutlineState::InSection(section) = std::mem::take(&mut self.state) {
            self.sections.push(section);
        }
        self.sections
    }
}

/// Parse generated outline text into sections, in line order.
///
/// Expected shape:
/// ```text
/// Section 1: Introduction
/// - Brief overview
/// • Importance and relevance
/// ```
///
/// Pure function of its input. Nested sub-points are not recognized, so parsed
/// sections always have empty `sub_points`.
pub fn parse_outline(text: &str) -> Vec<Section> {
    text.lines()
        .map(OutlineLine::classify)
        .filter(|line| *line != OutlineLine::Blank)
        .fold(OutlineAccumulator::default(), OutlineAccumulator::step)
        .finish()
}
