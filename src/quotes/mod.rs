//! Direct quotation detection.
//!
//! Quotation marks are paired into spans ([`pairer`]), spans that are too
//! short or look like titles are dropped, and each remaining span is handed
//! to the [`locator`] to find who said it. Quotes without a cue and speaker
//! never become records.

pub mod locator;
pub mod pairer;

use serde::Serialize;
use tracing::debug;

use crate::doc::{Doc, Span, Token};

pub use locator::{expand_noun, expand_verb, locate, Window};
pub use pairer::{pair_quotation_marks, QuotePair};

/// An attributed direct quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteRecord {
    /// Speaker phrase, sorted by token index
    pub speaker: Vec<Token>,
    /// Cue verb phrase, sorted by token index
    pub cue: Vec<Token>,
    /// The quote, marks included
    pub content: Span,
}

impl QuoteRecord {
    pub fn speaker_text(&self) -> String {
        join_texts(&self.speaker)
    }

    pub fn cue_text(&self) -> String {
        join_texts(&self.cue)
    }

    /// Whether the speaker is a lone pronoun.
    pub fn is_pronoun_speaker(&self) -> bool {
        self.speaker.len() == 1 && self.speaker[0].is_pronoun()
    }
}

fn join_texts(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Finds and attributes every direct quote of `doc`, in document order.
pub fn find_quotes(doc: &Doc) -> Vec<QuoteRecord> {
    let pairs = pair_quotation_marks(doc);
    debug!(pairs = pairs.len(), "paired quotation marks");

    pairs
        .iter()
        .filter(|pair| {
            let keep = pairer::is_long_enough(doc, pair) && !pairer::looks_like_title(doc, pair);
            if !keep {
                debug!(open = pair.open, close = pair.close, "skipped short or title quote");
            }
            keep
        })
        .filter_map(|pair| locate(doc, pair, &pairs))
        .collect()
}
