// Built-in Tera templates: generation prompts and the Q&A transcript

/// Built-in template names
pub const OUTLINE_PROMPT: &str = "outline_prompt";
pub const QNA_PROMPT: &str = "qna_prompt";
pub const QNA_TRANSCRIPT: &str = "qna_transcript";

/// Get a built-in template by name
pub fn get_builtin_template(name: &str) -> Option<&'static str> {
    match name {
        OUTLINE_PROMPT => Some(OUTLINE_PROMPT_TEMPLATE),
        QNA_PROMPT => Some(QNA_PROMPT_TEMPLATE),
        QNA_TRANSCRIPT => Some(QNA_TRANSCRIPT_TEMPLATE),
        _ => None,
    }
}

/// List all built-in template names
pub fn list_builtin_templates() -> Vec<&'static str> {
    vec![OUTLINE_PROMPT, QNA_PROMPT, QNA_TRANSCRIPT]
}

// =============================================================================
// Template Content
// =============================================================================

const OUTLINE_PROMPT_TEMPLATE: &str = r#"Create a detailed seminar presentation structure for the topic "{{ topic }}".

Generate exactly 6 main sections with the following format:

Section 1: Introduction
- Brief overview
- Importance and relevance
- Scope of discussion

Section 2: Historical Background / Literature Review
- Origins and development
- Key milestones
- Previous research

Section 3: Core Concepts / Theoretical Framework
- Fundamental principles
- Key definitions
- Technical aspects

Section 4: Applications / Implementation
- Real-world applications
- Use cases
- Industry adoption

Section 5: Challenges and Solutions
- Current limitations
- Technical challenges
- Proposed solutions

Section 6: Future Trends / Research Directions
- Emerging trends
- Future possibilities
- Research opportunities

For each section, provide:
- 3-4 main bullet points
- 2-3 detailed sub-points for each main point

Make the content technical and suitable for academic presentation."#;

const QNA_PROMPT_TEMPLATE: &str = r#"Generate exactly 8 comprehensive questions and detailed answers for a student seminar presentation on '{{ topic }}'.

Include questions about:
- Basic concepts and definitions
- Technical implementation
- Applications and use cases
- Advantages and disadvantages
- Future scope and trends
- Comparison with alternatives
- Challenges and solutions
- Research opportunities

Format each as:
Q: [detailed question]
A: [comprehensive answer in 2-3 sentences]

Make answers technical and suitable for academic presentation."#;

const QNA_TRANSCRIPT_TEMPLATE: &str = r#"COMPREHENSIVE QUESTIONS & ANSWERS
Topic: {{ topic }}
Prepared for: {{ student.name }} ({{ student.roll }})
College: {{ student.college }}
Semester: {{ student.semester }} | Branch: {{ student.branch }}
{{ heavy_rule }}

{% for pair in qna -%}
QUESTION {{ loop.index }}:
{{ pair.question }}

ANSWER {{ loop.index }}:
{{ pair.answer }}
{{ light_rule }}

{% endfor -%}
"#;
