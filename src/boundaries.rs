//! Text boundaries shared by tokens, spans and quote records.

use serde::Serialize;

use crate::doc::{Span, Token};
use crate::error::{AttributionError, Result};
use crate::quotes::QuoteRecord;

/// `[start, end)` byte offsets into the document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Boundaries {
    pub start: usize,
    pub end: usize,
}

impl Boundaries {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// `self` fully encloses `other`.
    pub fn encloses(&self, other: &Boundaries) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// Anything that occupies a range of the document text.
pub trait HasBoundaries {
    fn boundaries(&self) -> Result<Boundaries>;
}

impl From<&Token> for Boundaries {
    fn from(token: &Token) -> Self {
        Boundaries::new(token.idx, token.end_char())
    }
}

impl From<&Span> for Boundaries {
    fn from(span: &Span) -> Self {
        Boundaries::new(span.start_char, span.end_char)
    }
}

impl HasBoundaries for Token {
    fn boundaries(&self) -> Result<Boundaries> {
        Ok(Boundaries::from(self))
    }
}

impl HasBoundaries for Span {
    fn boundaries(&self) -> Result<Boundaries> {
        Ok(Boundaries::from(self))
    }
}

/// A quote record is bounded by its speaker phrase.
impl HasBoundaries for QuoteRecord {
    fn boundaries(&self) -> Result<Boundaries> {
        match (self.speaker.first(), self.speaker.last()) {
            (Some(first), Some(last)) => Ok(Boundaries::new(first.idx, last.end_char())),
            _ => Err(AttributionError::EmptyPhrase { kind: "speaker" }),
        }
    }
}

/// Containment in either direction.
pub fn span_contains(a: &Boundaries, b: &Boundaries) -> bool {
    a.encloses(b) || b.encloses(a)
}
