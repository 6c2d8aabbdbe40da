//! Pairwise relations between quotes, coreference clusters and persons.
//!
//! Each relation is a set of index pairs. Three are built per document:
//!
//! - quote ↔ person: the quote (its content, or its speaker phrase) and the
//!   person entity contain one another
//! - quote ↔ cluster: the quote's speaker corresponds to some cluster member,
//!   with a textual fallback for otherwise unmatched quotes
//! - cluster ↔ person: some non-pronoun member and the person contain one
//!   another

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::boundaries::{span_contains, Boundaries, HasBoundaries};
use crate::cluster::CoreferenceCluster;
use crate::doc::{Doc, Span};
use crate::error::Result;
use crate::lexicon::MIN_SPEAKER_DIFF;
use crate::quotes::QuoteRecord;

macro_rules! index_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub usize);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<usize> for $name {
            fn from(index: usize) -> Self {
                Self(index)
            }
        }
    };
}

index_type!(
    /// Position in an attribution's quote list.
    QuoteIndex
);
index_type!(
    /// Position in an attribution's cluster list.
    ClusterIndex
);
index_type!(
    /// Position in an attribution's person list.
    PersonIndex
);

/// A set of `(A, B)` index pairs, kept sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relation<A: Ord, B: Ord> {
    pairs: BTreeSet<(A, B)>,
}

impl<A: Ord, B: Ord> Default for Relation<A, B> {
    fn default() -> Self {
        Self {
            pairs: BTreeSet::new(),
        }
    }
}

impl<A: Ord + Copy, B: Ord + Copy> Relation<A, B> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, a: A, b: B) -> bool {
        self.pairs.insert((a, b))
    }

    pub fn contains(&self, a: A, b: B) -> bool {
        self.pairs.contains(&(a, b))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (A, B)> + '_ {
        self.pairs.iter().copied()
    }

    /// Whether `a` is related to anything.
    pub fn has_left(&self, a: A) -> bool {
        self.pairs.iter().any(|(x, _)| *x == a)
    }

    /// `(a, c)` for every `(a, b)` here and `(c, b)` in `other`.
    pub fn join_on_right<C: Ord + Copy>(&self, other: &Relation<C, B>) -> Relation<A, C> {
        let mut joined = Relation::new();
        for (a, b) in self.iter() {
            for (c, b2) in other.iter() {
                if b == b2 {
                    joined.insert(a, c);
                }
            }
        }
        joined
    }
}

impl<A: Ord + Copy, B: Ord + Copy> FromIterator<(A, B)> for Relation<A, B> {
    fn from_iter<I: IntoIterator<Item = (A, B)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

/// Which part of a quote is compared with person entities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuotePersonAnchor {
    /// The quoted content, marks included.
    #[default]
    Content,
    /// The speaker phrase.
    Speaker,
}

/// The three relations of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Relations {
    pub quotes_persons: Relation<QuoteIndex, PersonIndex>,
    pub quotes_clusters: Relation<QuoteIndex, ClusterIndex>,
    pub clusters_persons: Relation<ClusterIndex, PersonIndex>,
}

impl Relations {
    pub fn build(
        doc: &Doc,
        quotes: &[QuoteRecord],
        clusters: &[CoreferenceCluster],
        persons: &[Span],
        anchor: QuotePersonAnchor,
    ) -> Result<Self> {
        let relations = Relations {
            quotes_persons: quotes_persons(quotes, persons, anchor)?,
            quotes_clusters: quotes_clusters(doc, quotes, clusters)?,
            clusters_persons: clusters_persons(doc, clusters, persons),
        };
        debug!(
            quotes_persons = relations.quotes_persons.len(),
            quotes_clusters = relations.quotes_clusters.len(),
            clusters_persons = relations.clusters_persons.len(),
            "built relations"
        );
        Ok(relations)
    }
}

pub fn quotes_persons(
    quotes: &[QuoteRecord],
    persons: &[Span],
    anchor: QuotePersonAnchor,
) -> Result<Relation<QuoteIndex, PersonIndex>> {
    let mut relation = Relation::new();
    for (q, quote) in quotes.iter().enumerate() {
        let bounds = match anchor {
            QuotePersonAnchor::Content => quote.content.boundaries()?,
            QuotePersonAnchor::Speaker => quote.boundaries()?,
        };
        for (p, person) in persons.iter().enumerate() {
            if span_contains(&bounds, &Boundaries::from(person)) {
                relation.insert(QuoteIndex(q), PersonIndex(p));
            }
        }
    }
    Ok(relation)
}

/// Whether a quote's speaker and a cluster member name the same mention.
///
/// Very short single-token members that are not pronouns never match. Two
/// mentions correspond when both their sentences and their starts lie within
/// [`MIN_SPEAKER_DIFF`] characters of each other, or when the member encloses
/// the whole speaker phrase.
pub fn speaker_matches_member(doc: &Doc, quote: &QuoteRecord, member: &Span) -> Result<bool> {
    let speaker = quote.boundaries()?;
    let Some(first) = doc.span_tokens(member).first() else {
        return Ok(false);
    };
    if !first.is_pronoun() && member.len() < 2 && first.char_len() < 4 {
        return Ok(false);
    }

    // Distances are counted in characters, not bytes.
    let chars = |byte: usize| doc.char_offset(byte);
    let sentence_start = |i: usize| doc.sent_of(i).map(|s| chars(s.start_char));
    if let (Some(speaker_sent), Some(member_sent)) =
        (sentence_start(quote.speaker[0].i), sentence_start(member.start))
    {
        if speaker_sent.abs_diff(member_sent) < MIN_SPEAKER_DIFF
            && chars(speaker.start).abs_diff(chars(member.start_char)) < MIN_SPEAKER_DIFF
        {
            return Ok(true);
        }
    }
    Ok(Boundaries::from(member).encloses(&speaker))
}

/// Fallback for quotes with no structural match: the speaker text appears
/// verbatim inside a member ("Rosenberg" in "Detective Jeff Rosenberg").
/// Lone pronoun speakers are never matched this way.
pub fn speaker_in_member_text(doc: &Doc, quote: &QuoteRecord, cluster: &CoreferenceCluster) -> bool {
    if quote.speaker.is_empty() || quote.is_pronoun_speaker() {
        return false;
    }
    let speaker = quote.speaker_text();
    cluster.texts(doc).any(|text| text.contains(&speaker))
}

pub fn quotes_clusters(
    doc: &Doc,
    quotes: &[QuoteRecord],
    clusters: &[CoreferenceCluster],
) -> Result<Relation<QuoteIndex, ClusterIndex>> {
    let mut relation = Relation::new();
    for (q, quote) in quotes.iter().enumerate() {
        for (k, cluster) in clusters.iter().enumerate() {
            for member in &cluster.members {
                if speaker_matches_member(doc, quote, member)? {
                    relation.insert(QuoteIndex(q), ClusterIndex(k));
                    break;
                }
            }
        }
    }

    // The fallback runs once every direct match is known, and adds only the
    // earliest matching cluster.
    for (q, quote) in quotes.iter().enumerate() {
        if relation.has_left(QuoteIndex(q)) {
            continue;
        }
        if let Some(k) = clusters
            .iter()
            .position(|cluster| speaker_in_member_text(doc, quote, cluster))
        {
            debug!(quote = q, cluster = k, "matched speaker by member text");
            relation.insert(QuoteIndex(q), ClusterIndex(k));
        }
    }
    Ok(relation)
}

pub fn clusters_persons(
    doc: &Doc,
    clusters: &[CoreferenceCluster],
    persons: &[Span],
) -> Relation<ClusterIndex, PersonIndex> {
    let mut relation = Relation::new();
    for (k, cluster) in clusters.iter().enumerate() {
        for member in &cluster.members {
            let tokens = doc.span_tokens(member);
            if tokens.len() == 1 && tokens[0].is_pronoun() {
                continue;
            }
            let member_bounds = Boundaries::from(member);
            for (p, person) in persons.iter().enumerate() {
                if span_contains(&member_bounds, &Boundaries::from(person)) {
                    relation.insert(ClusterIndex(k), PersonIndex(p));
                }
            }
        }
    }
    relation
}
