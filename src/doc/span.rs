use serde::{Deserialize, Serialize};

/// A contiguous token range `[start, end)` together with its byte offsets
/// `[start_char, end_char)` in the document text.
///
/// Spans are built through [`Doc::span`](super::Doc::span) so the two ranges
/// always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub start_char: usize,
    pub end_char: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Byte offsets into the document text reported by a provider, not yet
/// anchored to tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CharSpan {
    pub start: usize,
    pub end: usize,
}

impl CharSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A labelled named-entity span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub span: Span,
    pub label: String,
}

impl Entity {
    pub fn is_person(&self) -> bool {
        self.label == crate::lexicon::PERSON_LABEL
    }
}
