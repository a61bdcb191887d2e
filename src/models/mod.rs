// Data models for one seminar kit generation request

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One topic unit of the seminar: a slide in the deck, a chapter in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    title: String,
    points: Vec<String>,
    /// "Key details" nested under the points. Empty means absent.
    sub_points: Vec<String>,
}

impl Section {
    /// Create a section with a trimmed title and no points
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into().trim().to_string(),
            points: Vec::new(),
            sub_points: Vec::new(),
        }
    }

    /// Replace the bullet points
    pub fn with_points<I, S>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.points = points.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the nested key details
    pub fn with_sub_points<I, S>(mut self, sub_points: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sub_points = sub_points.into_iter().map(Into::into).collect();
        self
    }

    /// Append a bullet point. Only the parsers grow a section.
    pub(crate) fn push_point(&mut self, point: impl Into<String>) {
        self.points.push(point.into());
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn points(&self) -> &[String] {
        &self.points
    }

    pub fn sub_points(&self) -> &[String] {
        &self.sub_points
    }

    /// A section without points renders as a bare heading
    pub fn is_degenerate(&self) -> bool {
        self.points.is_empty()
    }
}

/// One question with its (possibly multi-line) answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QnAPair {
    question: String,
    answer: String,
}

impl QnAPair {
    /// Build a pair, or `None` unless both halves are non-empty
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Option<Self> {
        let question = question.into();
        let answer = answer.into();
        if question.is_empty() || answer.is_empty() {
            return None;
        }
        Some(Self { question, answer })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

/// Presenter metadata, passed through to the rendered documents untouched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentInfo {
    pub name: String,
    pub roll: String,
    pub college: String,
    pub semester: String,
    pub branch: String,
}

/// Frozen, render-ready content for one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPackage {
    topic: String,
    sections: Vec<Section>,
    qna: Vec<QnAPair>,
}

impl ContentPackage {
    /// Freeze post-fallback content. No transformation happens here.
    pub fn assemble(topic: impl Into<String>, sections: Vec<Section>, qna: Vec<QnAPair>) -> Self {
        Self {
            topic: topic.into(),
            sections,
            qna,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn qna(&self) -> &[QnAPair] {
        &self.qna
    }

    /// Slide count of the rendered deck: title, agenda, one per section, conclusion
    pub fn slide_count(&self) -> usize {
        self.sections.len() + 3
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("Field '{0}' is required and must not be empty")]
    MissingField(&'static str),
}

/// Incoming generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub topic: String,
    pub name: String,
    pub roll: String,
    pub college: String,
    pub semester: String,
    pub branch: String,
}

impl GenerationRequest {
    /// Presence check on every field; no other validation is applied
    pub fn validate(&self) -> Result<(), RequestError> {
        let fields = [
            ("topic", &self.topic),
            ("name", &self.name),
            ("roll", &self.roll),
            ("college", &self.college),
            ("semester", &self.semester),
            ("branch", &self.branch),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(RequestError::MissingField(field));
            }
        }
        Ok(())
    }

    pub fn student_info(&self) -> StudentInfo {
        StudentInfo {
            name: self.name.clone(),
            roll: self.roll.clone(),
            college: self.college.clone(),
            semester: self.semester.clone(),
            branch: self.branch.clone(),
        }
    }
}

/// Counts reported alongside the artifact links
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitDetails {
    pub sections_generated: usize,
    pub questions_generated: usize,
    pub presentation_slides: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest {
            topic: "Edge Computing".to_string(),
            name: "Asha".to_string(),
            roll: "CS-042".to_string(),
            college: "Govt. Engineering College".to_string(),
            semester: "7".to_string(),
            branch: "CSE".to_string(),
        }
    }

    #[test]
    fn test_section_title_is_trimmed_not_uppercased() {
        let section = Section::new("  Core Concepts ");
        assert_eq!(section.title(), "Core Concepts");
        assert!(section.is_degenerate());
    }

    #[test]
    fn test_qna_pair_requires_both_halves() {
        assert!(QnAPair::new("What?", "").is_none());
        assert!(QnAPair::new("", "Because.").is_none());
        let pair = QnAPair::new("What?", "Because.").unwrap();
        assert_eq!(pair.question(), "What?");
        assert_eq!(pair.answer(), "Because.");
    }

    #[test]
    fn test_slide_count() {
        let package = ContentPackage::assemble(
            "Topic",
            vec![Section::new("A"), Section::new("B")],
            Vec::new(),
        );
        assert_eq!(package.slide_count(), 5);
    }

    #[test]
    fn test_request_validation() {
        assert!(request().validate().is_ok());

        let mut missing = request();
        missing.college = "   ".to_string();
        assert_eq!(
            missing.validate(),
            Err(RequestError::MissingField("college"))
        );
    }

    #[test]
    fn test_request_deserializes_from_json() {
        let json = r#"{"topic":"T","name":"N","roll":"R","college":"C","semester":"S","branch":"B"}"#;
        let request: GenerationRequest = serde_json::from_str(json).unwrap();
        let info = request.student_info();
        assert_eq!(info.name, "N");
        assert_eq!(info.branch, "B");
    }

    #[test]
    fn test_details_serialize_with_snake_case_keys() {
        let details = KitDetails {
            sections_generated: 6,
            questions_generated: 8,
            presentation_slides: 9,
        };
        assert_eq!(
            serde_json::to_value(details).unwrap(),
            serde_json::json!({
                "sections_generated": 6,
                "questions_generated": 8,
                "presentation_slides": 9
            })
        );
    }
}
