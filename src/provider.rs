//! The contract between the core and an external annotation provider.
//!
//! Tokenization, tagging, parsing, entity recognition and coreference are
//! supplied from outside. The caller owns the provider and lends it to
//! [`Attributor::attribute`](crate::Attributor::attribute) for each document.

use crate::doc::{CharSpan, Doc, Entity};
use crate::error::Result;

pub trait AnnotationProvider {
    /// Tokenizes and annotates `text`.
    fn tokenize_and_annotate(&self, text: &str) -> Result<Doc>;

    /// Named entities of a document produced by this provider.
    fn named_entities(&self, doc: &Doc) -> Vec<Entity> {
        doc.ents().to_vec()
    }

    /// Coreference clusters as byte-offset spans into `text`.
    fn coreference_clusters(&self, text: &str) -> Result<Vec<Vec<CharSpan>>>;

    /// Identifier of the model behind tokens, tags, parses and entities.
    fn base_model(&self) -> Option<&str> {
        None
    }

    /// Identifier of the coreference model.
    fn coref_model(&self) -> Option<&str> {
        None
    }
}

impl<P: AnnotationProvider + ?Sized> AnnotationProvider for &P {
    fn tokenize_and_annotate(&self, text: &str) -> Result<Doc> {
        (**self).tokenize_and_annotate(text)
    }

    fn named_entities(&self, doc: &Doc) -> Vec<Entity> {
        (**self).named_entities(doc)
    }

    fn coreference_clusters(&self, text: &str) -> Result<Vec<Vec<CharSpan>>> {
        (**self).coreference_clusters(text)
    }

    fn base_model(&self) -> Option<&str> {
        (**self).base_model()
    }

    fn coref_model(&self) -> Option<&str> {
        (**self).coref_model()
    }
}
