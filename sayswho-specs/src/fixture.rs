//! Fixture files: CoNLL-U annotations plus the attribution expected of them.
//!
//! ```toml
//! title = "Speaker before the quote"
//! conllu = '''
//! 1	Burton	Burton	PROPN	_	_	2	nsubj	_	NER=B-PERSON|Coref=(0)
//! ...
//! '''
//!
//! [config]
//! quote_person_anchor = "speaker"
//!
//! [[quotes]]
//! speaker = "Burton"
//! cue = "said"
//! content = "“I love those cats!”"
//!
//! [[matches]]
//! quote = 0
//! cluster = 0
//! names = ["Burton"]
//! ```
//!
//! `quotes` and `matches` are exhaustive: an attribution with more quotes or
//! matches than listed fails.

use serde::{Deserialize, Serialize};

use sayswho::AttributionConfig;

use crate::errors::{SpecError, SpecResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuoteFixture {
    #[serde(default)]
    pub title: Option<String>,
    /// Settings the fixture is attributed with
    #[serde(default)]
    pub config: AttributionConfig,
    pub conllu: String,
    #[serde(default)]
    pub quotes: Vec<ExpectedQuote>,
    #[serde(default)]
    pub matches: Vec<ExpectedMatch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpectedQuote {
    /// Speaker tokens joined by single spaces
    pub speaker: String,
    /// Cue tokens joined by single spaces
    pub cue: String,
    /// Document text of the quote, marks included
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpectedMatch {
    pub quote: usize,
    pub cluster: usize,
    /// Non-pronoun member texts of the cluster, sorted
    #[serde(default)]
    pub names: Option<Vec<String>>,
}

/// Parses a fixture from TOML.
pub fn parse_fixture(input: &str) -> SpecResult<QuoteFixture> {
    toml::from_str(input).map_err(|e| SpecError::Parse {
        line: e.span().map_or(0, |span| line_of(input, span.start)),
        message: e.message().to_string(),
    })
}

fn line_of(input: &str, offset: usize) -> usize {
    let offset = offset.min(input.len());
    input.as_bytes()[..offset].iter().filter(|b| **b == b'\n').count() + 1
}
