#![doc(issue_tracker_base_url = "https://github.com/sayswho/sayswho/issues/")]

//! Quote attribution for news text.
//!
//! Direct quotes are found by pairing quotation marks, each quote's cue verb
//! and speaker are located in the surrounding sentences, and speakers are
//! reconciled with coreference clusters and person entities so that "he",
//! "she" and partial names resolve to one entity across a document.
//!
//! ## Pipeline
//!
//! - [`pair_quotation_marks`] - Greedy pairing of quotation marks into spans
//! - [`find_quotes`] - Length and title filters, then cue and speaker search
//! - [`cluster::reanchor`] / [`cluster::prune`] - Coreference clusters mapped
//!   onto the document and cleared of outlier persons
//! - [`Relations`] - Quote ↔ person, quote ↔ cluster, cluster ↔ person
//! - [`resolve`] - Direct and transitive quote → cluster matches
//!
//! [`Attributor`] runs the whole pipeline against an [`AnnotationProvider`],
//! which supplies tokens, tags, dependency parses, entities and clusters.
//! [`ConlluProvider`] replays annotations stored as CoNLL-U.
//!
//! ## Example
//!
//! ```ignore
//! use sayswho::{AttributionConfig, Attributor, ConlluProvider};
//!
//! let provider = ConlluProvider::parse(&std::fs::read_to_string("story.conllu")?)?;
//! let attribution = Attributor::new(AttributionConfig::default())
//!     .attribute(&provider, provider.text())?;
//!
//! for m in attribution.matches() {
//!     println!("{}", attribution.describe(m.quote_index).unwrap_or_default());
//!     println!("{:?}", attribution.cluster_names(m.cluster_index));
//! }
//! ```

pub mod attributor;
pub mod boundaries;
pub mod cluster;
pub mod config;
pub mod conllu;
pub mod display;
pub mod doc;
pub mod error;
pub mod lexicon;
pub mod prep;
pub mod provider;
pub mod quotes;
pub mod relations;
pub mod resolver;
pub mod similarity;

#[cfg(test)]
mod tests;

pub use attributor::{Attribution, AttributionReport, Attributor, MatchReport, MatchTarget};
pub use boundaries::{span_contains, Boundaries, HasBoundaries};
pub use cluster::CoreferenceCluster;
pub use config::{AttributionConfig, ModelConfig};
pub use conllu::ConlluProvider;
pub use display::QuoteDisplay;
pub use doc::{CharSpan, Dep, Doc, Entity, Pos, Span, Token};
pub use error::{AttributionError, Result};
pub use prep::{QuotePrep, TextPrep};
pub use provider::AnnotationProvider;
pub use quotes::{find_quotes, pair_quotation_marks, QuotePair, QuoteRecord};
pub use relations::{
    ClusterIndex, PersonIndex, QuoteIndex, QuotePersonAnchor, Relation, Relations,
};
pub use resolver::{resolve, QuoteClusterMatch};
