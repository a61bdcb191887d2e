// Q&A parser - turns generated "Q: ... / A: ..." text into question/answer pairs

use crate::models::QnAPair;
use regex::Regex;
use std::sync::OnceLock;

/// `Q:`, `Question:` or a numbered `Question 3:`
fn question_label() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:Q:|Question(?:\s*\d+)?\s*:)").expect("question label pattern"))
}

/// `A:`, `Answer:` or a numbered `Answer 3:`
fn answer_label() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:A:|Answer(?:\s*\d+)?\s*:)").expect("answer label pattern"))
}

/// Text after a matched label, or the whole line when it only starts with
/// the bare word (`Questions about ...`)
fn labelled<'a>(line: &'a str, label: &Regex, word: &str) -> Option<&'a str> {
    match label.find(line) {
        Some(m) => Some(line[m.end()..].trim()),
        None if line.starts_with(word) => Some(line),
        None => None,
    }
}

/// What a single trimmed line of Q&A text means
#[derive(Debug, Clone, PartialEq, Eq)]
enum QnaLine<'a> {
    Blank,
    Question(&'a str),
    Answer(&'a str),
    Text(&'a str),
}

impl<'a> QnaLine<'a> {
    fn classify(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Blank;
        }
        if let Some(question) = labelled(line, question_label(), "Question") {
            return Self::Question(question);
        }
        if let Some(answer) = labelled(line, answer_label(), "Answer") {
            return Self::Answer(answer);
        }
        Self::Text(line)
    }
}

/// Automaton state.
///
/// `Asked` holds a question still waiting for its answer; `Answering` has a
/// non-empty answer that continuation lines extend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum QnaState {
    #[default]
    Idle,
    Asked(String),
    Answering { question: String, answer: String },
}

impl QnaState {
    fn asked(question: String) -> Self {
        if question.is_empty() {
            Self::Idle
        } else {
            Self::Asked(question)
        }
    }

    fn into_question(self) -> String {
        match self {
            Self::Idle => String::new(),
            Self::Asked(question) | Self::Answering { question, .. } => question,
        }
    }
}

#[derive(Debug, Default)]
struct QnaAccumulator {
    pairs: Vec<QnAPair>,
    state: QnaState,
}

impl QnaAccumulator {
    fn step(mut self, line: QnaLine<'_>) -> Self {
        let state = std::mem::take(&mut self.state);
        self.state = match (state, line) {
            (state, QnaLine::Question(question)) => {
                // A question with no answer yet is dropped here
                self.flush(state);
                QnaState::asked(question.to_string())
            }
            (state, QnaLine::Answer(answer)) => {
                let question = state.into_question();
                if answer.is_empty() {
                    QnaState::asked(question)
                } else {
                    QnaState::Answering {
                        question,
                        answer: answer.to_string(),
                    }
                }
            }
            (QnaState::Answering { question, mut answer }, QnaLine::Text(more)) => {
                answer.push(' ');
                answer.push_str(more);
                QnaState::Answering { question, answer }
            }
            (state, _) => state,
        };
        self
    }

    fn flush(&mut self, state: QnaState) {
        if let QnaState::Answering { question, answer } = state {
            if let Some(pair) = QnAPair::new(question, answer) {
                self.pairs.push(pair);
            }
        }
    }

    fn finish(mut self) -> Vec<QnAPair> {
        let state = std::mem::take(&mut self.state);
        self.flush(state);
        self.pairs
    }
}

/// Parse generated Q&A text into pairs, in line order.
///
/// ```text
/// Q: What is edge computing?
/// A: Processing data close to where it is produced.
/// It reduces latency.
/// ```
///
/// Lines after an answer are continuation text joined with single spaces.
/// A pair is only emitted once both its question and answer are non-empty.
pub fn parse_qna(text: &str) -> Vec<QnAPair> {
    text.lines()
        .map(QnaLine::classify)
        .fold(QnaAccumulator::default(), QnaAccumulator::step)
        .finish()
}
