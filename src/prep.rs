//! Quotation mark cleanup applied to raw text before annotation.
//!
//! News copy often carries quotation marks that confuse pairing: doubled
//! apostrophes standing in for a double quote, quotes glued to the words on
//! both sides, plural possessives whose apostrophe looks like a closing
//! mark, and continued quotes whose paragraph deliberately leaves the quote
//! open. [`QuotePrep`] repairs these one paragraph at a time.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicon::{ALL_QUOTES, DOUBLE_QUOTES};

/// A text-to-text pass run before annotation.
pub trait TextPrep {
    fn prep(&self, text: &str) -> String;
}

static PLURAL_POSSESSIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(.{3,8}s')(\s)").expect("Invalid plural possessive regex"));

#[derive(Debug, Clone)]
pub struct QuotePrep {
    /// Append an `x` to plural possessives (`the players' union` becomes
    /// `the players'x union`) so the apostrophe is not read as a quote.
    pub fix_plural_possessives: bool,
    /// Paragraph separator.
    pub paragraph: char,
}

impl Default for QuotePrep {
    fn default() -> Self {
        Self {
            fix_plural_possessives: true,
            paragraph: '\n',
        }
    }
}

impl QuotePrep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repairs one paragraph. Returns `None` for a blank paragraph.
    pub fn prep_paragraph(&self, paragraph: &str) -> Option<String> {
        let trimmed = paragraph.trim();
        if trimmed.is_empty() {
            return None;
        }

        let mut p = trimmed.replace("''", "\"");
        if self.fix_plural_possessives {
            p = PLURAL_POSSESSIVE.replace_all(&p, "${1}x${2}").into_owned();
        }

        while let Some((at, len)) = glued_double_quote(&p) {
            let replacement = if count_double_quotes(&p[..at]) % 2 != 0 {
                "\" "
            } else {
                " \""
            };
            p.replace_range(at..at + len, replacement);
        }

        let mut chars = p.chars();
        let first = chars.next();
        let last = p.chars().last();
        let single_quoted = first == Some('\'') && last == Some('\'');
        if let Some(first) = first {
            if !single_quoted
                && ALL_QUOTES.contains(&first)
                && count_double_quotes(chars.as_str()) % 2 == 0
            {
                p.push('"');
            }
        }
        Some(p)
    }
}

impl TextPrep for QuotePrep {
    fn prep(&self, text: &str) -> String {
        let paragraph = self.paragraph.to_string();
        text.split(self.paragraph)
            .filter_map(|p| self.prep_paragraph(p))
            .collect::<Vec<_>>()
            .join(&paragraph)
    }
}

fn count_double_quotes(text: &str) -> usize {
    text.chars().filter(|c| DOUBLE_QUOTES.contains(c)).count()
}

/// Byte offset and length of the first double quote with non-whitespace on
/// both sides.
fn glued_double_quote(text: &str) -> Option<(usize, usize)> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    chars.windows(3).find_map(|w| {
        let [(_, before), (at, quote), (_, after)] = [w[0], w[1], w[2]];
        (DOUBLE_QUOTES.contains(&quote) && !before.is_whitespace() && !after.is_whitespace())
            .then(|| (at, quote.len_utf8()))
    })
}
