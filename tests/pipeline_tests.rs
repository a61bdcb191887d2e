// End-to-end tests: canned provider text in, persisted documents out
// Documents are read back from disk and unpacked to check their contents

use quick_xml::events::Event;
use quick_xml::Reader;
use seminar_kit_lib::config::ProviderConfig;
use seminar_kit_lib::fallback::ContentOrigin;
use seminar_kit_lib::file_storage::{ArtifactStore, ArtifactKind};
use seminar_kit_lib::render::{build_deck, build_report};
use seminar_kit_lib::text_source::{ProviderError, TextSource};
use seminar_kit_lib::{content, generate_kit, GenerationRequest, StudentInfo};
use std::io::{Cursor, Read};
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

/// Replies to the outline prompt and the Q&A prompt with fixed text
struct CannedSource {
    outline: String,
    qna: String,
    calls: AtomicUsize,
}

impl CannedSource {
    fn new(outline: impl Into<String>, qna: impl Into<String>) -> Self {
        Self {
            outline: outline.into(),
            qna: qna.into(),
            calls: AtomicUsize::new(0),
        }
    }
}

impl TextSource for CannedSource {
    fn complete(&self, prompt: &str, _max_tokens: u32) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if prompt.contains("seminar presentation structure") {
            Ok(self.outline.clone())
        } else {
            Ok(self.qna.clone())
        }
    }
}

fn outline_with(k: usize) -> String {
    (1..=k)
        .map(|i| format!("Section {}: Topic part {}\n- First point of {}\n- Second point of {}\n", i, i, i, i))
        .collect()
}

fn qna_with(n: usize) -> String {
    (1..=n)
        .map(|i| format!("Q: Question number {}?\nA: Answer number {}.\n", i, i))
        .collect()
}

fn request(topic: &str) -> GenerationRequest {
    GenerationRequest {
        topic: topic.to_string(),
        name: "Asha Rao".to_string(),
        roll: "CS-042".to_string(),
        college: "City Engineering College".to_string(),
        semester: "6".to_string(),
        branch: "CSE".to_string(),
    }
}

fn student() -> StudentInfo {
    request("unused").student_info()
}

fn read_entry(bytes: &[u8], name: &str) -> Option<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut entry = archive.by_name(name).ok()?;
    let mut xml = String::new();
    entry.read_to_string(&mut xml).unwrap();
    Some(xml)
}

/// Text of every paragraph (`a:p` or `w:p`) in an XML part, in order
fn paragraphs(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) => match e.name().as_ref() {
                b"a:t" | b"w:t" => in_text = true,
                b"a:p" | b"w:p" => current.clear(),
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"a:t" | b"w:t" => in_text = false,
                b"a:p" | b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Event::Empty(e) if matches!(e.name().as_ref(), b"w:p") => paragraphs.push(String::new()),
            Event::Text(e) if in_text => current.push_str(&e.unescape().unwrap()),
            Event::Eof => break,
            _ => {}
        }
    }
    paragraphs
}

#[test]
fn test_full_kit_from_parsed_content() {
    let temp_dir = TempDir::new().unwrap();
    let store = ArtifactStore::open(temp_dir.path().join("out")).unwrap();
    let source = CannedSource::new(outline_with(5), qna_with(6));

    let result = generate_kit(
        &request("Edge & Fog Computing"),
        &source,
        &ProviderConfig::default(),
        &store,
    )
    .unwrap();

    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    assert_eq!(result.sections_origin, ContentOrigin::Parsed);
    assert_eq!(result.qna_origin, ContentOrigin::Parsed);
    assert_eq!(result.details.sections_generated, 5);
    assert_eq!(result.details.questions_generated, 6);
    assert_eq!(result.details.presentation_slides, 8);

    // Deck: k + 3 slides, section slides in outline order
    let pptx = store.retrieve(&result.pptx).unwrap();
    assert!(read_entry(&pptx, "ppt/slides/slide8.xml").is_some());
    assert!(read_entry(&pptx, "ppt/slides/slide9.xml").is_none());

    let title = paragraphs(&read_entry(&pptx, "ppt/slides/slide1.xml").unwrap());
    assert_eq!(title[0], "EDGE & FOG COMPUTING");
    assert_eq!(title[1], "Presented by: Asha Rao");

    let agenda = paragraphs(&read_entry(&pptx, "ppt/slides/slide2.xml").unwrap());
    assert_eq!(agenda[1], "1. Topic part 1");
    assert_eq!(agenda[5], "5. Topic part 5");

    let third_section = paragraphs(&read_entry(&pptx, "ppt/slides/slide5.xml").unwrap());
    assert_eq!(
        third_section,
        vec!["TOPIC PART 3", "• First point of 3", "• Second point of 3"]
    );

    // Report: TOC numbers Q&A and conclusion after the sections
    let docx = store.retrieve(&result.docx).unwrap();
    let report = paragraphs(&read_entry(&docx, "word/document.xml").unwrap());
    assert!(report.contains(&"6. Questions & Answers".to_string()));
    assert!(report.contains(&"7. Conclusion".to_string()));
    assert!(report.contains(&"Q6: Question number 6?".to_string()));
    assert!(report.contains(&"Answer: Answer number 6.".to_string()));

    // Transcript
    let transcript = String::from_utf8(store.retrieve(&result.qna).unwrap()).unwrap();
    assert!(transcript.starts_with("COMPREHENSIVE QUESTIONS & ANSWERS\nTopic: Edge & Fog Computing\n"));
    assert!(transcript.contains("QUESTION 6:\nQuestion number 6?\n\nANSWER 6:\nAnswer number 6.\n"));
}

#[test]
fn test_sparse_provider_output_is_replaced_whole() {
    let temp_dir = TempDir::new().unwrap();
    let store = ArtifactStore::open(temp_dir.path()).unwrap();
    let source = CannedSource::new(outline_with(3), qna_with(4));

    let result = generate_kit(&request("Robotics"), &source, &ProviderConfig::default(), &store)
        .unwrap();

    assert_eq!(result.sections_origin, ContentOrigin::Fallback { parsed_count: 3 });
    assert_eq!(result.qna_origin, ContentOrigin::Fallback { parsed_count: 4 });
    assert_eq!(result.details.sections_generated, 6);
    assert_eq!(result.details.questions_generated, 8);
    assert_eq!(result.details.presentation_slides, 9);

    let pptx = store.retrieve(&result.pptx).unwrap();
    let agenda = paragraphs(&read_entry(&pptx, "ppt/slides/slide2.xml").unwrap());
    assert_eq!(agenda[1], "1. Introduction and Overview");
    assert!(!agenda.iter().any(|line| line.contains("Topic part")));
}

#[test]
fn test_failed_provider_still_produces_a_kit() {
    struct Down;
    impl TextSource for Down {
        fn complete(&self, _prompt: &str, _max_tokens: u32) -> Result<String, ProviderError> {
            Err(ProviderError::Status {
                status: 503,
                body: "overloaded".to_string(),
            })
        }
    }

    let temp_dir = TempDir::new().unwrap();
    let store = ArtifactStore::open(temp_dir.path()).unwrap();
    let result =
        generate_kit(&request("Robotics"), &Down, &ProviderConfig::default(), &store).unwrap();

    assert_eq!(result.details.presentation_slides, 9);
    assert_eq!(result.details.questions_generated, 8);
}

#[test]
fn test_rendering_twice_gives_new_names_and_same_content() {
    let built = content::build_content(
        "Robotics",
        &CannedSource::new(outline_with(4), qna_with(5)),
        &ProviderConfig::default(),
    )
    .unwrap();

    let temp_dir = TempDir::new().unwrap();
    let store = ArtifactStore::open(temp_dir.path()).unwrap();

    let deck = build_deck(&built.package, &student());
    let first = store.write(ArtifactKind::SlideDeck, &deck.to_pptx().unwrap()).unwrap();
    let second = store
        .write(ArtifactKind::SlideDeck, &build_deck(&built.package, &student()).to_pptx().unwrap())
        .unwrap();
    assert_ne!(first, second);
    assert_eq!(store.retrieve(&first).unwrap(), store.retrieve(&second).unwrap());

    let report = build_report(&built.package, &student());
    let first = store.write(ArtifactKind::Report, &report.to_docx().unwrap()).unwrap();
    let second = store.write(ArtifactKind::Report, &report.to_docx().unwrap()).unwrap();
    assert_ne!(first, second);
    assert_eq!(store.retrieve(&first).unwrap(), store.retrieve(&second).unwrap());
}

#[test]
fn test_every_artifact_is_non_empty_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let store = ArtifactStore::open(temp_dir.path()).unwrap();
    let source = CannedSource::new(outline_with(4), qna_with(5));

    let result = generate_kit(&request("Robotics"), &source, &ProviderConfig::default(), &store)
        .unwrap();

    for name in [&result.pptx, &result.docx, &result.qna] {
        let metadata = std::fs::metadata(temp_dir.path().join(name)).unwrap();
        assert!(metadata.len() > 0, "{} is empty", name);
    }
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 3);
}
