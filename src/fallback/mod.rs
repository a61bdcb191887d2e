// Fallback policy - hard-coded replacement content for sparse parses

use crate::models::{QnAPair, Section};
use serde::Serialize;

/// Fewer parsed sections than this and the outline is replaced
pub const MIN_SECTIONS: usize = 4;

/// Fewer parsed pairs than this and the Q&A is replaced
pub const MIN_QNA_PAIRS: usize = 5;

/// Where a piece of content came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentOrigin {
    Parsed,
    /// Parsed output was below threshold and discarded
    Fallback { parsed_count: usize },
}

/// Outcome of the fallback decision: the content to use and its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chosen<T> {
    pub items: Vec<T>,
    pub origin: ContentOrigin,
}

impl<T> Chosen<T> {
    pub fn used_fallback(&self) -> bool {
        matches!(self.origin, ContentOrigin::Fallback { .. })
    }
}

/// Keep `parsed` when it has at least `threshold` items, otherwise discard it
/// whole and take the template. Never merges the two.
pub fn choose<T, F>(parsed: Vec<T>, threshold: usize, template: F) -> Chosen<T>
where
    F: FnOnce() -> Vec<T>,
{
    if parsed.len() >= threshold {
        Chosen {
            items: parsed,
            origin: ContentOrigin::Parsed,
        }
    } else {
        Chosen {
            origin: ContentOrigin::Fallback {
                parsed_count: parsed.len(),
            },
            items: template(),
        }
    }
}

/// Apply the section threshold for `topic`
pub fn choose_sections(parsed: Vec<Section>, topic: &str) -> Chosen<Section> {
    choose(parsed, MIN_SECTIONS, || fallback_sections(topic))
}

/// Apply the Q&A threshold for `topic`
pub fn choose_qna(parsed: Vec<QnAPair>, topic: &str) -> Chosen<QnAPair> {
    choose(parsed, MIN_QNA_PAIRS, || fallback_qna(topic))
}

/// Six-section outline used when the generated outline is unusable
pub fn fallback_sections(topic: &str) -> Vec<Section> {
    vec![
        Section::new("Introduction and Overview").with_points([
            format!("Definition and scope of {}", topic),
            "Importance in current technological landscape".to_string(),
            "Objectives of this presentation".to_string(),
            "Expected outcomes and benefits".to_string(),
        ]),
        Section::new("Literature Review and Background").with_points([
            "Historical development and evolution".to_string(),
            "Key research contributions".to_string(),
            "Current state of technology".to_string(),
            "Gaps in existing knowledge".to_string(),
        ]),
        Section::new("Core Concepts and Methodology").with_points([
            "Fundamental principles and theories".to_string(),
            "Technical architecture and design".to_string(),
            "Implementation methodologies".to_string(),
            "Performance metrics and evaluation".to_string(),
        ]),
        Section::new("Applications and Case Studies").with_points([
            "Industry applications and use cases".to_string(),
            "Real-world implementation examples".to_string(),
            "Success stories and best practices".to_string(),
            "Comparative analysis with alternatives".to_string(),
        ]),
        Section::new("Challenges and Limitations").with_points([
            "Technical challenges and constraints".to_string(),
            "Implementation barriers".to_string(),
            "Cost and resource considerations".to_string(),
            "Scalability and performance issues".to_string(),
        ]),
        Section::new("Future Scope and Recommendations").with_points([
            "Emerging trends and opportunities".to_string(),
            "Research directions and possibilities".to_string(),
            "Recommendations for implementation".to_string(),
            "Expected future developments".to_string(),
        ]),
    ]
}

/// Eight question/answer pairs used when the generated Q&A is unusable
pub fn fallback_qna(topic: &str) -> Vec<QnAPair> {
    let t = topic;
    let pairs = [
        (
            format!("What is {t} and why is it important?"),
            format!("{t} is a significant technological advancement that plays a crucial role in modern applications. Its importance lies in its ability to solve complex problems and improve efficiency in various domains."),
        ),
        (
            format!("What are the key technical components of {t}?"),
            "The main technical components include core algorithms, implementation frameworks, and supporting infrastructure. These components work together to provide comprehensive functionality.".to_string(),
        ),
        (
            format!("What are the real-world applications of {t}?"),
            format!("{t} finds applications in multiple industries including healthcare, finance, manufacturing, and telecommunications. It enables automation and optimization of complex processes."),
        ),
        (
            format!("What are the main advantages and limitations of {t}?"),
            "Key advantages include improved efficiency, scalability, and cost-effectiveness. However, limitations may include implementation complexity, resource requirements, and technical constraints.".to_string(),
        ),
        (
            format!("What does the future hold for {t}?"),
            format!("Future developments in {t} are expected to focus on enhanced performance, broader applications, and integration with emerging technologies. Research continues to address current limitations."),
        ),
        (
            format!("How does {t} compare with alternative approaches?"),
            format!("Compared to traditional methods, {t} offers superior performance in terms of speed, accuracy, and scalability. However, the choice depends on specific requirements and constraints."),
        ),
        (
            format!("What are the main challenges in implementing {t}?"),
            "Implementation challenges include technical complexity, resource allocation, skill requirements, and integration with existing systems. Proper planning and expertise are essential for success.".to_string(),
        ),
        (
            format!("What research opportunities exist in {t}?"),
            "Research opportunities include algorithm optimization, new application domains, performance enhancement, and addressing current limitations. Interdisciplinary collaboration can lead to breakthrough innovations.".to_string(),
        ),
    ];

    pairs
        .into_iter()
        .filter_map(|(question, answer)| QnAPair::new(question, answer))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(n: usize) -> Vec<Section> {
        (1..=n)
            .map(|i| Section::new(format!("Parsed {}", i)).with_points(["p"]))
            .collect()
    }

    fn pairs(n: usize) -> Vec<QnAPair> {
        (1..=n)
            .filter_map(|i| QnAPair::new(format!("Q{}", i), format!("A{}", i)))
            .collect()
    }

    #[test]
    fn test_three_sections_are_replaced() {
        let chosen = choose_sections(sections(3), "Robotics");
        assert_eq!(chosen.items, fallback_sections("Robotics"));
        assert_eq!(chosen.origin, ContentOrigin::Fallback { parsed_count: 3 });
        assert!(chosen.used_fallback());
    }

    #[test]
    fn test_four_sections_are_kept() {
        let parsed = sections(4);
        let chosen = choose_sections(parsed.clone(), "Robotics");
        assert_eq!(chosen.items, parsed);
        assert_eq!(chosen.origin, ContentOrigin::Parsed);
    }

    #[test]
    fn test_four_pairs_are_replaced() {
        let chosen = choose_qna(pairs(4), "Robotics");
        assert_eq!(chosen.items.len(), 8);
        assert_eq!(chosen.items, fallback_qna("Robotics"));
    }

    #[test]
    fn test_five_pairs_are_kept() {
        let parsed = pairs(5);
        let chosen = choose_qna(parsed.clone(), "Robotics");
        assert_eq!(chosen.items, parsed);
        assert!(!chosen.used_fallback());
    }

    #[test]
    fn test_template_is_not_built_when_parsed_suffices() {
        let chosen = choose(vec![1, 2, 3], 2, || -> Vec<i32> { panic!("template built") });
        assert_eq!(chosen.items, vec![1, 2, 3]);
    }

    #[test]
    fn test_fallback_sections_shape() {
        let sections = fallback_sections("Quantum Computing");
        assert_eq!(sections.len(), 6);
        assert!(sections.iter().all(|s| s.points().len() == 4));
        assert!(sections.iter().all(|s| s.sub_points().is_empty()));
        assert_eq!(sections[0].points()[0], "Definition and scope of Quantum Computing");
        assert_eq!(sections[1].points()[0], "Historical development and evolution");
        // only the opening bullet names the topic
        let mentions = sections
            .iter()
            .flat_map(|s| s.points())
            .filter(|p| p.contains("Quantum Computing"))
            .count();
        assert_eq!(mentions, 1);
        assert_eq!(sections[5].title(), "Future Scope and Recommendations");
    }

    #[test]
    fn test_fallback_qna_interpolates_topic() {
        let qna = fallback_qna("Blockchain");
        assert_eq!(qna.len(), 8);
        assert!(qna.iter().all(|p| p.question().contains("Blockchain")));
        assert_eq!(qna[0].question(), "What is Blockchain and why is it important?");
    }
}
