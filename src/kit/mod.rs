//! Seminar kit generation
//!
//! One request end to end: validate, build content, render the deck, the
//! report and the transcript, persist all three.

use crate::config::ProviderConfig;
use crate::content::{self, BuiltContent};
use crate::fallback::ContentOrigin;
use crate::file_storage::{ArtifactError, ArtifactKind, ArtifactStore};
use crate::models::{GenerationRequest, KitDetails, RequestError};
use crate::render::{self, RenderError};
use crate::text_source::TextSource;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KitError {
    #[error(transparent)]
    InvalidRequest(#[from] RequestError),

    #[error("Failed to render seminar kit: {0}")]
    Render(#[from] RenderError),

    #[error("Failed to store seminar kit: {0}")]
    Artifact(#[from] ArtifactError),
}

impl From<tera::Error> for KitError {
    fn from(e: tera::Error) -> Self {
        KitError::Render(RenderError::Template(e))
    }
}

/// Names of the persisted artifacts plus the counts reported to the caller
#[derive(Debug, Clone, Serialize)]
pub struct KitResult {
    pub pptx: String,
    pub docx: String,
    pub qna: String,
    pub details: KitDetails,
    pub sections_origin: ContentOrigin,
    pub qna_origin: ContentOrigin,
}

/// Generate and persist a complete seminar kit
pub fn generate_kit(
    request: &GenerationRequest,
    source: &dyn TextSource,
    provider: &ProviderConfig,
    store: &ArtifactStore,
) -> Result<KitResult, KitError> {
    request.validate()?;
    log::info!("Generating seminar kit for topic: {}", request.topic);

    let student = request.student_info();
    let BuiltContent {
        package,
        sections_origin,
        qna_origin,
    } = content::build_content(&request.topic, source, provider)?;

    let deck = render::build_deck(&package, &student);
    let pptx = store.write(ArtifactKind::SlideDeck, &deck.to_pptx()?)?;

    let report = render::build_report(&package, &student);
    let docx = store.write(ArtifactKind::Report, &report.to_docx()?)?;

    let transcript = render::render_transcript(&package, &student)?;
    let qna = store.write(ArtifactKind::Transcript, transcript.as_bytes())?;

    let details = KitDetails {
        sections_generated: package.sections().len(),
        questions_generated: package.qna().len(),
        presentation_slides: deck.len(),
    };
    log::info!(
        "Seminar kit ready: {} sections, {} questions, {} slides",
        details.sections_generated,
        details.questions_generated,
        details.presentation_slides
    );

    Ok(KitResult {
        pptx,
        docx,
        qna,
        details,
        sections_origin,
        qna_origin,
    })
}
