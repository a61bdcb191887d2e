// Template system for prompts and plain-text output

pub mod builtin;
pub mod engine;

pub use engine::TemplateEngine;

use tera::Context;

/// Render the outline generation prompt for a topic
pub fn render_outline_prompt(topic: &str) -> tera::Result<String> {
    render_topic_prompt(builtin::OUTLINE_PROMPT, topic)
}

/// Render the Q&A generation prompt for a topic
pub fn render_qna_prompt(topic: &str) -> tera::Result<String> {
    render_topic_prompt(builtin::QNA_PROMPT, topic)
}

fn render_topic_prompt(template_name: &str, topic: &str) -> tera::Result<String> {
    let engine = TemplateEngine::new()?;
    let mut context = Context::new();
    context.insert("topic", topic);
    engine.render(template_name, &context)
}
