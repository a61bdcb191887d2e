// Plain-text Q&A transcript

use super::RenderError;
use crate::models::{ContentPackage, StudentInfo};
use crate::templates::{builtin, TemplateEngine};
use tera::Context;

const HEAVY_RULE_WIDTH: usize = 80;
const LIGHT_RULE_WIDTH: usize = 60;

/// Render the Q&A transcript for a content package
pub fn render_transcript(
    content: &ContentPackage,
    student: &StudentInfo,
) -> Result<String, RenderError> {
    let engine = TemplateEngine::new()?;

    let mut context = Context::new();
    context.insert("topic", content.topic());
    context.insert("student", student);
    context.insert("qna", content.qna());
    context.insert("heavy_rule", &"=".repeat(HEAVY_RULE_WIDTH));
    context.insert("light_rule", &"-".repeat(LIGHT_RULE_WIDTH));

    Ok(engine.render(builtin::QNA_TRANSCRIPT, &context)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QnAPair;

    fn student() -> StudentInfo {
        StudentInfo {
            name: "Asha Rao".to_string(),
            roll: "CS-042".to_string(),
            college: "City Engineering College".to_string(),
            semester: "6".to_string(),
            branch: "CSE".to_string(),
        }
    }

    #[test]
    fn test_transcript_layout() {
        let content = ContentPackage::assemble(
            "Edge & Fog",
            Vec::new(),
            vec![
                QnAPair::new("What is it?", "A <layer> near devices.").unwrap(),
                QnAPair::new("Why?", "Latency.").unwrap(),
            ],
        );

        let text = render_transcript(&content, &student()).unwrap();
        let heavy = "=".repeat(80);
        let light = "-".repeat(60);
        let expected = format!(
            "COMPREHENSIVE QUESTIONS & ANSWERS\n\
             Topic: Edge & Fog\n\
             Prepared for: Asha Rao (CS-042)\n\
             College: City Engineering College\n\
             Semester: 6 | Branch: CSE\n\
             {heavy}\n\
             \n\
             QUESTION 1:\n\
             What is it?\n\
             \n\
             ANSWER 1:\n\
             A <layer> near devices.\n\
             {light}\n\
             \n\
             QUESTION 2:\n\
             Why?\n\
             \n\
             ANSWER 2:\n\
             Latency.\n\
             {light}\n\
             \n"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_transcript_without_pairs_is_header_only() {
        let content = ContentPackage::assemble("Topic", Vec::new(), Vec::new());
        let text = render_transcript(&content, &student()).unwrap();
        assert!(text.ends_with(&format!("{}\n\n", "=".repeat(80))));
        assert!(text.starts_with("COMPREHENSIVE QUESTIONS & ANSWERS\nTopic: Topic\n"));
        assert!(!text.contains("QUESTION 1:"));
    }
}
