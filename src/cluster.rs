//! Coreference clusters: re-anchoring provider output onto the document's
//! tokens and pruning members that do not belong.

use serde::Serialize;
use tracing::{debug, warn};

use crate::doc::{CharSpan, Doc, Span};
use crate::similarity::{mean, partial_ratio, sample_stdev};

/// Spans the provider judged to refer to one entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoreferenceCluster {
    pub members: Vec<Span>,
}

impl CoreferenceCluster {
    pub fn new(members: Vec<Span>) -> Self {
        Self { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn texts<'a>(&'a self, doc: &'a Doc) -> impl Iterator<Item = &'a str> + 'a {
        self.members.iter().map(move |m| doc.span_text(m))
    }
}

/// Maps provider clusters onto `doc` by byte offsets.
///
/// A member whose offsets do not fall on token boundaries is dropped with a
/// warning. Every provider cluster yields a cluster, possibly empty, so
/// cluster indices line up with the provider's.
pub fn reanchor(doc: &Doc, clusters: &[Vec<CharSpan>]) -> Vec<CoreferenceCluster> {
    clusters
        .iter()
        .enumerate()
        .map(|(k, members)| {
            let anchored = members
                .iter()
                .filter_map(|m| {
                    let span = doc.char_span(m.start, m.end);
                    if span.is_none() {
                        warn!(
                            cluster = k,
                            start = m.start,
                            end = m.end,
                            "cluster member does not align with tokens"
                        );
                    }
                    span
                })
                .collect();
            CoreferenceCluster::new(anchored)
        })
        .collect()
}

/// Whether the first entity inside `span` is a person.
pub fn is_person_member(doc: &Doc, span: &Span) -> bool {
    doc.ents_within(span).next().map_or(false, |e| e.is_person())
}

/// Removes person members whose average similarity to the other person
/// members falls more than two standard deviations below the mean.
///
/// Members that are not persons are never scored or removed. A cluster with
/// fewer than two person members is returned unchanged.
pub fn prune(doc: &Doc, cluster: &CoreferenceCluster) -> CoreferenceCluster {
    let persons: Vec<&Span> = cluster
        .members
        .iter()
        .filter(|m| is_person_member(doc, m))
        .collect();
    if persons.len() < 2 {
        return cluster.clone();
    }

    let texts: Vec<&str> = persons.iter().map(|m| doc.span_text(m)).collect();
    let scores: Vec<f64> = texts
        .iter()
        .enumerate()
        .map(|(n, text)| {
            let others: Vec<f64> = texts
                .iter()
                .enumerate()
                .filter(|(m, _)| *m != n)
                .map(|(_, other)| partial_ratio(text, other))
                .collect();
            mean(&others).unwrap_or(0.0)
        })
        .collect();

    let (Some(average), Some(stdev)) = (mean(&scores), sample_stdev(&scores)) else {
        return cluster.clone();
    };
    let cutoff = average - 2.0 * stdev;

    let outliers: Vec<Span> = persons
        .iter()
        .zip(&scores)
        .filter(|(_, score)| **score < cutoff)
        .map(|(span, _)| **span)
        .collect();
    if !outliers.is_empty() {
        debug!(
            cutoff,
            removed = ?outliers.iter().map(|s| doc.span_text(s)).collect::<Vec<_>>(),
            "pruned cluster outliers"
        );
    }

    CoreferenceCluster::new(
        cluster
            .members
            .iter()
            .filter(|m| !outliers.contains(m))
            .copied()
            .collect(),
    )
}
