//! The annotated document the core operates on.
//!
//! A [`Doc`] owns the document text, its tokens, sentence spans and entity
//! spans. All indices handed out by the core (quotes, clusters, persons)
//! refer back into one `Doc`.

mod span;
mod token;

pub use span::{CharSpan, Entity, Span};
pub use token::{Dep, Pos, Token};

use crate::error::{AttributionError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doc {
    text: String,
    tokens: Vec<Token>,
    sents: Vec<Span>,
    ents: Vec<Entity>,
}

impl Doc {
    /// Assembles a document from provider output.
    ///
    /// Tokens must be numbered in order, match the text at their offsets and
    /// point at heads within the document. Sentence indices start at zero and
    /// never skip or go backwards. Entities are given as
    /// `(start_token, end_token, label)`.
    pub fn from_parts(
        text: impl Into<String>,
        tokens: Vec<Token>,
        ents: Vec<(usize, usize, String)>,
    ) -> Result<Self> {
        let text = text.into();
        let len = tokens.len();
        let mut sents: Vec<Span> = Vec::new();
        let mut sent_start = 0;

        for (position, token) in tokens.iter().enumerate() {
            if token.i != position {
                return Err(AttributionError::TokenOutOfRange {
                    index: token.i,
                    len,
                });
            }
            if text.get(token.idx..token.end_char()) != Some(token.text.as_str()) {
                return Err(AttributionError::MisalignedToken {
                    index: token.i,
                    offset: token.idx,
                });
            }
            if token.head >= len {
                return Err(AttributionError::TokenOutOfRange {
                    index: token.head,
                    len,
                });
            }
            if position > 0 {
                let previous = &tokens[position - 1];
                if token.idx < previous.end_char() {
                    return Err(AttributionError::MisalignedToken {
                        index: token.i,
                        offset: token.idx,
                    });
                }
                if token.sent == previous.sent + 1 {
                    sents.push(span_over(&tokens, sent_start, position));
                    sent_start = position;
                } else if token.sent != previous.sent {
                    return Err(AttributionError::InvalidSpan {
                        start: sent_start,
                        end: position,
                        len,
                    });
                }
            } else if token.sent != 0 {
                return Err(AttributionError::InvalidSpan {
                    start: 0,
                    end: 0,
                    len,
                });
            }
        }
        if len > 0 {
            sents.push(span_over(&tokens, sent_start, len));
        }

        let mut doc = Doc {
            text,
            tokens,
            sents,
            ents: Vec::new(),
        };
        let mut entities = Vec::with_capacity(ents.len());
        for (start, end, label) in ents {
            entities.push(Entity {
                span: doc.span(start, end)?,
                label,
            });
        }
        doc.ents = entities;
        Ok(doc)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn token(&self, i: usize) -> Result<&Token> {
        self.tokens.get(i).ok_or(AttributionError::TokenOutOfRange {
            index: i,
            len: self.tokens.len(),
        })
    }

    pub fn sents(&self) -> &[Span] {
        &self.sents
    }

    pub fn ents(&self) -> &[Entity] {
        &self.ents
    }

    /// Builds the span over tokens `[start, end)`.
    pub fn span(&self, start: usize, end: usize) -> Result<Span> {
        if start > end || end > self.tokens.len() {
            return Err(AttributionError::InvalidSpan {
                start,
                end,
                len: self.tokens.len(),
            });
        }
        Ok(span_over(&self.tokens, start, end).with_empty_offset(self, start))
    }

    /// Tokens of `span`; empty when the span lies outside this document.
    pub fn span_tokens(&self, span: &Span) -> &[Token] {
        self.tokens.get(span.start..span.end).unwrap_or(&[])
    }

    /// Text of `span`; empty when the span lies outside this document.
    pub fn span_text(&self, span: &Span) -> &str {
        self.text.get(span.start_char..span.end_char).unwrap_or("")
    }

    /// Number of characters (code points) before byte offset `byte`.
    pub fn char_offset(&self, byte: usize) -> usize {
        self.text
            .char_indices()
            .take_while(|(at, _)| *at < byte)
            .count()
    }

    /// Maps byte offsets onto the token space. Both ends must fall on token
    /// boundaries.
    pub fn char_span(&self, start_char: usize, end_char: usize) -> Option<Span> {
        let start = self.tokens.iter().position(|t| t.idx == start_char)?;
        let last = self.tokens[start..]
            .iter()
            .position(|t| t.end_char() == end_char)?;
        self.span(start, start + last + 1).ok()
    }

    /// Direct syntactic children of token `i`, in document order.
    pub fn children(&self, i: usize) -> impl Iterator<Item = &Token> + '_ {
        self.tokens
            .iter()
            .filter(move |t| t.head == i && t.i != i)
    }

    /// Tokens coordinated with token `i`, excluding `i` itself.
    ///
    /// Climbs `conj` arcs to the first conjunct, then collects every `conj`
    /// descendant of it.
    pub fn conjuncts(&self, i: usize) -> Vec<usize> {
        let mut root = i;
        while let Some(token) = self.tokens.get(root) {
            if token.dep != Dep::Conj || token.head == root {
                break;
            }
            root = token.head;
        }

        let mut found = vec![root];
        let mut queue = vec![root];
        while let Some(current) = queue.pop() {
            for child in self.children(current) {
                if child.dep == Dep::Conj && !found.contains(&child.i) {
                    found.push(child.i);
                    queue.push(child.i);
                }
            }
        }
        found.retain(|&j| j != i);
        found.sort_unstable();
        found
    }

    /// Sentence containing token `i`.
    pub fn sent_of(&self, i: usize) -> Option<&Span> {
        self.tokens.get(i).and_then(|t| self.sents.get(t.sent))
    }

    /// Entities lying entirely inside `span`, in document order.
    pub fn ents_within<'a>(&'a self, span: &'a Span) -> impl Iterator<Item = &'a Entity> + 'a {
        self.ents
            .iter()
            .filter(move |e| span.start <= e.span.start && e.span.end <= span.end)
    }
}

fn span_over(tokens: &[Token], start: usize, end: usize) -> Span {
    let (start_char, end_char) = if start < end {
        (tokens[start].idx, tokens[end - 1].end_char())
    } else {
        (0, 0)
    };
    Span {
        start,
        end,
        start_char,
        end_char,
    }
}

impl Span {
    fn with_empty_offset(mut self, doc: &Doc, at: usize) -> Span {
        if self.is_empty() {
            let offset = doc
                .tokens
                .get(at)
                .map(|t| t.idx)
                .unwrap_or_else(|| doc.text.len());
            self.start_char = offset;
            self.end_char = offset;
        }
        self
    }
}
