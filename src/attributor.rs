//! Attributes the direct quotes of a document to coreference clusters.

use serde::Serialize;
use tracing::debug;

use crate::cluster::{self, CoreferenceCluster};
use crate::config::AttributionConfig;
use crate::display::QuoteDisplay;
use crate::doc::{Doc, Span};
use crate::error::{AttributionError, Result};
use crate::prep::{QuotePrep, TextPrep};
use crate::provider::AnnotationProvider;
use crate::quotes::{find_quotes, QuoteRecord};
use crate::relations::{ClusterIndex, PersonIndex, QuoteIndex, Relations};
use crate::resolver::{resolve, QuoteClusterMatch};

/// One of the entities an attribution indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTarget {
    Quote(QuoteIndex),
    Cluster(ClusterIndex),
    Person(PersonIndex),
}

impl From<QuoteIndex> for MatchTarget {
    fn from(index: QuoteIndex) -> Self {
        MatchTarget::Quote(index)
    }
}

impl From<ClusterIndex> for MatchTarget {
    fn from(index: ClusterIndex) -> Self {
        MatchTarget::Cluster(index)
    }
}

impl From<PersonIndex> for MatchTarget {
    fn from(index: PersonIndex) -> Self {
        MatchTarget::Person(index)
    }
}

/// Runs attribution with a fixed configuration. The annotation provider is
/// owned by the caller and lent to each call.
#[derive(Debug, Clone, Default)]
pub struct Attributor {
    config: AttributionConfig,
}

impl Attributor {
    pub fn new(config: AttributionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AttributionConfig {
        &self.config
    }

    /// Attributes every direct quote of `text`.
    pub fn attribute<P>(&self, provider: &P, text: &str) -> Result<Attribution>
    where
        P: AnnotationProvider + ?Sized,
    {
        self.check_models(provider)?;

        let prepped;
        let text = if self.config.prep_text {
            prepped = QuotePrep::new().prep(text);
            prepped.as_str()
        } else {
            text
        };

        let doc = provider.tokenize_and_annotate(text)?;
        let quotes = find_quotes(&doc);

        let provider_clusters = provider.coreference_clusters(text)?;
        let mut clusters = cluster::reanchor(&doc, &provider_clusters);
        if self.config.prune {
            clusters = clusters.iter().map(|c| cluster::prune(&doc, c)).collect();
        }

        let persons: Vec<Span> = provider
            .named_entities(&doc)
            .into_iter()
            .filter(|e| e.is_person())
            .map(|e| e.span)
            .collect();

        let relations = Relations::build(
            &doc,
            &quotes,
            &clusters,
            &persons,
            self.config.quote_person_anchor,
        )?;
        let matches = resolve(&relations);
        debug!(
            quotes = quotes.len(),
            clusters = clusters.len(),
            persons = persons.len(),
            matches = matches.len(),
            "attributed document"
        );

        Ok(Attribution {
            doc,
            quotes,
            clusters,
            persons,
            relations,
            matches,
        })
    }

    fn check_models<P>(&self, provider: &P) -> Result<()>
    where
        P: AnnotationProvider + ?Sized,
    {
        let models = &self.config.models;
        let checks = [
            ("base", &models.base_model, provider.base_model()),
            ("coref", &models.coref_model, provider.coref_model()),
        ];
        for (kind, configured, reported) in checks {
            if let Some(reported) = reported {
                if reported != configured.as_str() {
                    return Err(AttributionError::ModelMismatch {
                        kind,
                        configured: configured.clone(),
                        reported: reported.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// The result of attributing one document.
#[derive(Debug, Clone)]
pub struct Attribution {
    doc: Doc,
    quotes: Vec<QuoteRecord>,
    clusters: Vec<CoreferenceCluster>,
    persons: Vec<Span>,
    relations: Relations,
    matches: Vec<QuoteClusterMatch>,
}

impl Attribution {
    pub fn doc(&self) -> &Doc {
        &self.doc
    }

    pub fn quotes(&self) -> &[QuoteRecord] {
        &self.quotes
    }

    pub fn clusters(&self) -> &[CoreferenceCluster] {
        &self.clusters
    }

    pub fn persons(&self) -> &[Span] {
        &self.persons
    }

    pub fn relations(&self) -> &Relations {
        &self.relations
    }

    /// Quote to cluster matches, sorted by quote then cluster.
    pub fn matches(&self) -> &[QuoteClusterMatch] {
        &self.matches
    }

    pub fn quote(&self, index: QuoteIndex) -> Option<&QuoteRecord> {
        self.quotes.get(index.0)
    }

    pub fn cluster(&self, index: ClusterIndex) -> Option<&CoreferenceCluster> {
        self.clusters.get(index.0)
    }

    pub fn person(&self, index: PersonIndex) -> Option<&Span> {
        self.persons.get(index.0)
    }

    /// Clusters matched to one quote.
    pub fn matches_for(&self, index: QuoteIndex) -> impl Iterator<Item = ClusterIndex> + '_ {
        self.matches
            .iter()
            .filter(move |m| m.quote_index == index)
            .map(|m| m.cluster_index)
    }

    /// Distinct member texts of a cluster, sorted, skipping members that
    /// start with a pronoun.
    pub fn cluster_names(&self, index: ClusterIndex) -> Vec<String> {
        let Some(cluster) = self.cluster(index) else {
            return Vec::new();
        };
        let mut names: Vec<String> = cluster
            .members
            .iter()
            .filter(|m| {
                self.doc
                    .span_tokens(m)
                    .first()
                    .map_or(false, |t| !t.is_pronoun())
            })
            .map(|m| self.doc.span_text(m).to_string())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Human-readable view of a quote, cluster or person.
    pub fn describe(&self, target: impl Into<MatchTarget>) -> Option<String> {
        match target.into() {
            MatchTarget::Quote(index) => {
                let quote = self.quote(index)?;
                Some(format!(
                    "QUOTE {index}\n{}",
                    QuoteDisplay::new(&self.doc, quote)
                ))
            }
            MatchTarget::Cluster(index) => {
                self.cluster(index)?;
                Some(format!(
                    "CLUSTER {index}\n{}",
                    self.cluster_names(index).join(", ")
                ))
            }
            MatchTarget::Person(index) => {
                let person = self.person(index)?;
                Some(format!("PERSON {index}\n{}", self.doc.span_text(person)))
            }
        }
    }

    /// Serializable summary of every match.
    pub fn report(&self) -> AttributionReport {
        let matches = self
            .matches
            .iter()
            .filter_map(|m| {
                let quote = self.quote(m.quote_index)?;
                Some(MatchReport {
                    quote_index: m.quote_index,
                    cluster_index: m.cluster_index,
                    content: self.doc.span_text(&quote.content).to_string(),
                    cue: quote.cue_text(),
                    speaker: quote.speaker_text(),
                    cluster_names: self.cluster_names(m.cluster_index),
                })
            })
            .collect();
        let unmatched_quotes = (0..self.quotes.len())
            .map(QuoteIndex)
            .filter(|&q| self.matches_for(q).next().is_none())
            .collect();
        AttributionReport {
            quotes: self.quotes.len(),
            clusters: self.clusters.len(),
            persons: self.persons.len(),
            matches,
            unmatched_quotes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    pub quote_index: QuoteIndex,
    pub cluster_index: ClusterIndex,
    pub content: String,
    pub cue: String,
    pub speaker: String,
    pub cluster_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributionReport {
    pub quotes: usize,
    pub clusters: usize,
    pub persons: usize,
    pub matches: Vec<MatchReport>,
    /// Attributed quotes no cluster was found for
    pub unmatched_quotes: Vec<QuoteIndex>,
}

impl AttributionReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
