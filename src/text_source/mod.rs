//! Text source adapter
//!
//! Wraps a generative-text provider. Provider failures never leave this module:
//! [`generate`] turns them into a short placeholder string, which the parsers
//! read as "nothing recognizable" and the fallback policy then replaces.

mod openai;

pub use openai::OpenAiTextSource;

use thiserror::Error;

/// Prefix of the placeholder returned when the provider fails
pub const FAILURE_PREFIX: &str = "Error generating content for: ";

/// How many prompt characters the placeholder quotes
const PLACEHOLDER_PROMPT_CHARS: usize = 50;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("API key not found in environment variable '{0}'")]
    MissingApiKey(String),

    #[error("Provider is disabled (offline mode)")]
    Offline,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Provider returned no content")]
    EmptyResponse,
}

/// A generative-text provider. Blocking: the call may wait on network I/O.
pub trait TextSource: Send + Sync {
    /// Complete `prompt`, producing at most `max_tokens` tokens
    fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, ProviderError>;
}

/// Provider that is never reachable; every request ends up on fallback content
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineTextSource;

impl TextSource for OfflineTextSource {
    fn complete(&self, _prompt: &str, _max_tokens: u32) -> Result<String, ProviderError> {
        Err(ProviderError::Offline)
    }
}

/// Placeholder text standing in for a failed generation
pub fn failure_placeholder(prompt: &str) -> String {
    let head: String = prompt.chars().take(PLACEHOLDER_PROMPT_CHARS).collect();
    format!("{}{}...", FAILURE_PREFIX, head)
}

/// Ask `source` for text. Always returns a string: on failure it is the
/// placeholder from [`failure_placeholder`].
pub fn generate(source: &dyn TextSource, prompt: &str, max_tokens: u32) -> String {
    match source.complete(prompt, max_tokens) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Text generation failed, using placeholder: {}", e);
            failure_placeholder(prompt)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl TextSource for Echo {
        fn complete(&self, prompt: &str, _max_tokens: u32) -> Result<String, ProviderError> {
            Ok(format!("echo: {}", prompt))
        }
    }

    #[test]
    fn test_generate_passes_text_through() {
        assert_eq!(generate(&Echo, "hi", 10), "echo: hi");
    }

    #[test]
    fn test_generate_failure_becomes_placeholder() {
        let prompt = "Create a detailed seminar presentation structure for the topic \"X\".";
        let text = generate(&OfflineTextSource, prompt, 10);

        assert_eq!(
            text,
            "Error generating content for: Create a detailed seminar presentation structure f...",
        );
    }

    #[test]
    fn test_placeholder_counts_characters_not_bytes() {
        let prompt = "•".repeat(60);
        let text = failure_placeholder(&prompt);
        assert_eq!(text, format!("{}{}...", FAILURE_PREFIX, "•".repeat(50)));
    }

    #[test]
    fn test_short_prompt_placeholder() {
        assert_eq!(failure_placeholder("abc"), "Error generating content for: abc...");
    }
}
