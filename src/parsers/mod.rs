// Parsers for loosely formatted generated text
//
// Both parsers are line-driven automata folded over the input. They never fail:
// text they do not understand simply yields fewer items, which the fallback
// policy then deals with.

pub mod outline;
pub mod qna;

pub use outline::parse_outline;
pub use qna::parse_qna;
