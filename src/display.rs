//! Plain-text rendering of attributed quotes.
//!
//! ```text
//! Burton  said  ,  “  I  love  those  cats  !  ”
//! ╰────╯speaker
//!         ╰──╯cue
//!                  ╰───────────────────────────╯content
//! ```

use std::fmt::Write;

use unicode_width::UnicodeWidthStr;

use crate::doc::{Doc, Span, Token};
use crate::quotes::QuoteRecord;

/// Token range `[first, last]` and the label written after its underline.
struct Underline {
    first: usize,
    last: usize,
    label: String,
}

pub struct QuoteDisplay<'a> {
    doc: &'a Doc,
    first: usize,
    last: usize,
    underlines: Vec<Underline>,
}

fn display_text(token: &Token) -> &str {
    if token.is_paragraph_break() {
        "\\n"
    } else {
        &token.text
    }
}

impl<'a> std::fmt::Display for QuoteDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SPACE_PADDING: usize = 2;
        let mut starts = Vec::new();
        let mut ends = Vec::new();

        let mut line = String::new();
        for (n, token) in self.doc.tokens()[self.first..=self.last].iter().enumerate() {
            if n > 0 {
                line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            starts.push(UnicodeWidthStr::width(&*line));
            line.push_str(display_text(token));
            ends.push(UnicodeWidthStr::width(&*line));
        }
        f.write_str(&line)?;

        for underline in &self.underlines {
            f.write_char('\n')?;
            let start = starts[underline.first - self.first];
            let end = ends[underline.last - self.first];
            for _ in 0..start {
                f.write_char(' ')?;
            }
            f.write_char('╰')?;
            for _ in (start + 1)..end.saturating_sub(1) {
                f.write_char('─')?;
            }
            if end - start > 1 {
                f.write_char('╯')?;
            }
            f.write_str(&underline.label)?;
        }
        Ok(())
    }
}

impl<'a> QuoteDisplay<'a> {
    /// Shows the tokens from the first to the last part of `quote`, with
    /// its speaker, cue and content underlined.
    pub fn new(doc: &'a Doc, quote: &QuoteRecord) -> Self {
        let phrase_ends = quote
            .speaker
            .iter()
            .chain(&quote.cue)
            .map(|t| t.i)
            .chain([quote.content.start, quote.content.end.saturating_sub(1)]);
        let first = phrase_ends.clone().min().unwrap_or(0);
        let last = phrase_ends.max().unwrap_or(0);

        let mut display = QuoteDisplay {
            doc,
            first,
            last,
            underlines: Vec::new(),
        };
        display.include_phrase(&quote.speaker, "speaker");
        display.include_phrase(&quote.cue, "cue");
        display.include(&quote.content, "content");
        display
    }

    fn include_phrase(&mut self, phrase: &[Token], label: &str) {
        if let (Some(first), Some(last)) = (phrase.first(), phrase.last()) {
            self.push(first.i, last.i, label);
        }
    }

    fn push(&mut self, first: usize, last: usize, label: &str) {
        if first < self.first || last > self.last || first > last {
            return;
        }
        self.underlines.push(Underline {
            first,
            last,
            label: label.to_string(),
        });
    }

    /// Underlines `span` if it falls inside the displayed tokens.
    pub fn include(&mut self, span: &Span, label: &str) {
        if !span.is_empty() {
            self.push(span.start, span.end - 1, label);
        }
    }

    /// Builder form of [`include`](Self::include).
    pub fn with(mut self, span: &Span, label: &str) -> Self {
        self.include(span, label);
        self
    }
}
