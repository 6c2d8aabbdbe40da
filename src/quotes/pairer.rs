//! Pairs quotation marks into quote spans.

use serde::Serialize;

use crate::doc::{Doc, Token};
use crate::lexicon::{is_compatible_pair, is_stop_word, MIN_QUOTE_LENGTH};

/// Token indices of an opening mark and the mark (or paragraph break) that
/// closes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct QuotePair {
    pub open: usize,
    pub close: usize,
}

impl QuotePair {
    /// Whether token `i` lies between the marks, marks included.
    pub fn covers(&self, i: usize) -> bool {
        self.open <= i && i <= self.close
    }

    /// Distance from token `i` to the nearer mark.
    pub fn distance(&self, i: usize) -> usize {
        i.abs_diff(self.open).min(i.abs_diff(self.close))
    }
}

/// Greedy left-to-right pairing.
///
/// A candidate opens a pair only when it has no trailing whitespace, has not
/// already closed a pair and lies after the last close. The first later
/// candidate forming a compatible pair closes it. No nesting: an opener is
/// never reused and neither is a closer.
pub fn pair_quotation_marks(doc: &Doc) -> Vec<QuotePair> {
    let candidates: Vec<(&Token, u32)> = doc
        .tokens()
        .iter()
        .filter_map(|t| t.code_point().map(|code| (t, code)))
        .collect();

    let mut pairs: Vec<QuotePair> = Vec::new();
    for (n, (open, open_code)) in candidates.iter().enumerate() {
        let after_last_close = pairs.last().map_or(true, |p| open.i > p.close);
        let is_closer = pairs.iter().any(|p| p.close == open.i);
        if open.whitespace || is_closer || !after_last_close {
            continue;
        }
        let close = candidates[n + 1..]
            .iter()
            .find(|(_, close_code)| is_compatible_pair(*open_code, *close_code));
        if let Some((close, _)) = close {
            pairs.push(QuotePair {
                open: open.i,
                close: close.i,
            });
        }
    }
    pairs
}

/// Tokens between the marks, from the opening mark up to the closing one.
fn interior<'a>(doc: &'a Doc, pair: &QuotePair) -> &'a [Token] {
    &doc.tokens()[pair.open..pair.close]
}

/// Quotes shorter than [`MIN_QUOTE_LENGTH`] words are not worth attributing.
pub fn is_long_enough(doc: &Doc, pair: &QuotePair) -> bool {
    let text: String = interior(doc, pair).iter().map(Token::text_with_ws).collect();
    text.split_whitespace().count() >= MIN_QUOTE_LENGTH
}

/// Quoted titles ("One Hundred Years of Solitude") rather than speech: every
/// content word is title-cased. A quote with no content words counts too.
pub fn looks_like_title(doc: &Doc, pair: &QuotePair) -> bool {
    interior(doc, pair)
        .iter()
        .filter(|t| !(t.is_punct() || is_stop_word(&t.text)))
        .all(Token::is_title)
}
