//! Attribution configuration.
//!
//! ```toml
//! prune = true
//! prep_text = false
//! quote_person_anchor = "content"
//!
//! [models]
//! base_model = "en_core_web_lg"
//! coref_model = "en_coreference_web_trf"
//! ```
//!
//! Every key is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AttributionError, Result};
use crate::relations::QuotePersonAnchor;

pub const DEFAULT_BASE_MODEL: &str = "en_core_web_lg";
pub const DEFAULT_COREF_MODEL: &str = "en_coreference_web_trf";

/// Models the provider is expected to run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Tokens, tags, parses and entities
    pub base_model: String,
    /// Coreference clusters
    pub coref_model: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_model: DEFAULT_BASE_MODEL.to_string(),
            coref_model: DEFAULT_COREF_MODEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributionConfig {
    /// Remove outlier person members from coreference clusters
    pub prune: bool,
    /// Normalize quotation marks before annotation
    pub prep_text: bool,
    /// Part of a quote compared with person entities
    pub quote_person_anchor: QuotePersonAnchor,
    pub models: ModelConfig,
}

impl Default for AttributionConfig {
    fn default() -> Self {
        Self {
            prune: true,
            prep_text: false,
            quote_person_anchor: QuotePersonAnchor::default(),
            models: ModelConfig::default(),
        }
    }
}

impl AttributionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable or enable cluster pruning.
    pub fn with_prune(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    pub fn with_prep_text(mut self, prep_text: bool) -> Self {
        self.prep_text = prep_text;
        self
    }

    pub fn with_quote_person_anchor(mut self, anchor: QuotePersonAnchor) -> Self {
        self.quote_person_anchor = anchor;
        self
    }

    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| AttributionError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
