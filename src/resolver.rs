//! Final quote → cluster attribution.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::relations::{ClusterIndex, QuoteIndex, Relations};

/// A quote attributed to a coreference cluster. Ordered by quote, then
/// cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuoteClusterMatch {
    pub quote_index: QuoteIndex,
    pub cluster_index: ClusterIndex,
}

impl QuoteClusterMatch {
    pub fn new(quote_index: usize, cluster_index: usize) -> Self {
        Self {
            quote_index: QuoteIndex(quote_index),
            cluster_index: ClusterIndex(cluster_index),
        }
    }
}

/// Direct quote ↔ cluster matches together with the transitive ones, where
/// a quote and a cluster share a person. Sorted and free of duplicates.
pub fn resolve(relations: &Relations) -> Vec<QuoteClusterMatch> {
    let transitive = relations
        .quotes_persons
        .join_on_right(&relations.clusters_persons);

    let matches: BTreeSet<QuoteClusterMatch> = relations
        .quotes_clusters
        .iter()
        .chain(transitive.iter())
        .map(|(quote_index, cluster_index)| QuoteClusterMatch {
            quote_index,
            cluster_index,
        })
        .collect();

    debug!(
        direct = relations.quotes_clusters.len(),
        transitive = transitive.len(),
        total = matches.len(),
        "resolved quote matches"
    );
    matches.into_iter().collect()
}
