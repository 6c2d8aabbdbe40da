//! Finds the cue verb and speaker of a paired quote.

use tracing::debug;

use super::pairer::QuotePair;
use super::QuoteRecord;
use crate::doc::{Dep, Doc, Pos, Span, Token};
use crate::lexicon::is_reporting_verb;

/// Sentence windows searched for a cue, narrowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// Sentences the quote runs into or out of.
    Overlap,
    /// Sentences touching the quote plus one on each side, cut at the
    /// paragraph break following the quote.
    Paragraph,
}

impl Window {
    pub const SEARCH_ORDER: [Window; 2] = [Window::Overlap, Window::Paragraph];

    /// Sentences of `doc` in this window around `pair`, where the quote is
    /// taken as the tokens `[open, close)`.
    pub fn sentences(self, doc: &Doc, pair: &QuotePair) -> Vec<Span> {
        let (start, end) = (pair.open, pair.close);
        let sents = doc.sents();
        match self {
            Window::Overlap => sents
                .iter()
                .filter(|s| (s.start < start && start < s.end) || (s.start < end && end < s.end))
                .copied()
                .collect(),
            Window::Paragraph => {
                let touching: Vec<usize> = sents
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| {
                        (s.start <= start && start <= s.end) || (s.start <= end && end <= s.end)
                    })
                    .map(|(n, _)| n)
                    .collect();
                let (Some(&first), Some(&last)) = (touching.first(), touching.last()) else {
                    return Vec::new();
                };
                let from = first.saturating_sub(1);
                let to = (last + 2).min(sents.len());
                let window = &sents[from..to];
                let Some(window_start) = window.first().map(|s| s.start) else {
                    return Vec::new();
                };

                let limit = paragraph_limits(doc)
                    .filter(|&lb| window_start < lb && lb <= end + 1)
                    .max();
                match limit {
                    Some(limit) => window.iter().filter(|s| s.end <= limit).copied().collect(),
                    None => window.to_vec(),
                }
            }
        }
    }
}

/// The document start, every paragraph break and the last token.
fn paragraph_limits(doc: &Doc) -> impl Iterator<Item = usize> + '_ {
    let breaks = doc
        .tokens()
        .iter()
        .filter(|t| t.is_paragraph_break())
        .map(|t| t.i);
    std::iter::once(0)
        .chain(breaks)
        .chain(doc.len().checked_sub(1))
}

/// Searches the windows around `pair` for a reporting verb with an active
/// subject outside every quote. `pairs` holds all quotes of the document.
pub fn locate(doc: &Doc, pair: &QuotePair, pairs: &[QuotePair]) -> Option<QuoteRecord> {
    let quoted = |i: usize| pairs.iter().any(|p| p.covers(i));

    for window in Window::SEARCH_ORDER {
        let mut cues: Vec<&Token> = window
            .sentences(doc, pair)
            .iter()
            .flat_map(|s| doc.span_tokens(s))
            .filter(|t| t.pos == Pos::Verb && is_reporting_verb(&t.lemma) && !quoted(t.i))
            .collect();
        cues.sort_by_key(|t| pair.distance(t.i));

        let found = cues.iter().find_map(|cue| {
            doc.children(cue.i)
                .filter(|c| c.pos != Pos::Punct && !quoted(c.i))
                .filter(|c| c.i >= pair.close || c.i <= pair.open)
                .find(|c| c.dep.is_active_subject())
                .map(|speaker| (*cue, speaker))
        });

        if let Some((cue, speaker)) = found {
            let content = doc.span(pair.open, pair.close + 1).ok()?;
            debug!(
                open = pair.open,
                close = pair.close,
                cue = cue.i,
                speaker = speaker.i,
                ?window,
                "attributed quote"
            );
            return Some(QuoteRecord {
                speaker: expand_noun(doc, speaker),
                cue: expand_verb(doc, cue),
                content,
            });
        }
    }
    debug!(open = pair.open, close = pair.close, "no cue or speaker for quote");
    None
}

/// The noun, its conjuncts and the compound modifiers of each, in token order.
pub fn expand_noun(doc: &Doc, token: &Token) -> Vec<Token> {
    let mut heads = vec![token.i];
    heads.extend(doc.conjuncts(token.i));
    let compounds: Vec<usize> = heads
        .iter()
        .flat_map(|&h| doc.children(h))
        .filter(|c| c.dep == Dep::Compound)
        .map(|c| c.i)
        .collect();
    heads.extend(compounds);
    collect_sorted(doc, heads)
}

/// The verb with its auxiliaries and negation, in token order.
pub fn expand_verb(doc: &Doc, token: &Token) -> Vec<Token> {
    let mut phrase = vec![token.i];
    phrase.extend(
        doc.children(token.i)
            .filter(|c| c.dep.is_verb_modifier())
            .map(|c| c.i),
    );
    collect_sorted(doc, phrase)
}

fn collect_sorted(doc: &Doc, mut indices: Vec<usize>) -> Vec<Token> {
    indices.sort_unstable();
    indices.dedup();
    indices
        .into_iter()
        .filter_map(|i| doc.tokens().get(i).cloned())
        .collect()
}
