//! Expected failures tracking via TOML file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::{SpecError, SpecResult};

/// Loaded expected failures configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpectedFailures {
    /// Known failures (won't fix soon).
    #[serde(default)]
    pub known: Vec<FailureEntry>,
    /// Pending failures (awaiting fix).
    #[serde(default)]
    pub pending: Vec<FailureEntry>,
}

/// A single expected failure entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureEntry {
    /// Fixture path relative to the fixtures directory.
    pub fixture: String,
    /// Check reference (e.g. "quote[1].speaker" or "matches").
    pub assertion: String,
    /// Human-readable reason.
    #[serde(default)]
    pub reason: Option<String>,
}

/// Failure lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureState {
    /// Known limitation, won't fix soon.
    Known,
    /// Awaiting fix, not blocking.
    Pending,
    /// Expected to pass - failure is a regression.
    Regression,
}

impl ExpectedFailures {
    /// Load from a TOML file. A missing file means no expected failures.
    pub fn load(path: &Path) -> SpecResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let load_error = |message: String| SpecError::Load {
            path: path.display().to_string(),
            message,
        };
        let content = fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
        toml::from_str(&content).map_err(|e| load_error(e.to_string()))
    }

    /// Check if a failure is expected.
    pub fn is_expected(&self, fixture: &str, assertion_ref: &str) -> FailureState {
        if self.known.iter().any(|e| e.matches(fixture, assertion_ref)) {
            return FailureState::Known;
        }
        if self.pending.iter().any(|e| e.matches(fixture, assertion_ref)) {
            return FailureState::Pending;
        }
        FailureState::Regression
    }

    /// Count total expected failures.
    pub fn count(&self) -> usize {
        self.known.len() + self.pending.len()
    }

    /// Get entry for a specific failure (if expected).
    pub fn get_entry(&self, fixture: &str, assertion_ref: &str) -> Option<&FailureEntry> {
        self.known
            .iter()
            .chain(self.pending.iter())
            .find(|e| e.matches(fixture, assertion_ref))
    }
}

impl FailureEntry {
    fn matches(&self, fixture: &str, assertion_ref: &str) -> bool {
        self.fixture == fixture && self.assertion == assertion_ref
    }
}

/// Result of running the harness.
#[derive(Debug, Clone, Default)]
pub struct HarnessResult {
    /// Total checks.
    pub total: usize,
    /// Passed checks.
    pub passed: usize,
    /// Expected failures (known + pending).
    pub expected_failures: usize,
    /// Regressions (unexpected failures).
    pub regressions: usize,
}

impl HarnessResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all tests passed (no regressions).
    pub fn success(&self) -> bool {
        self.regressions == 0
    }

    /// Record a passed check.
    pub fn record_pass(&mut self) {
        self.total += 1;
        self.passed += 1;
    }

    /// Record a failed check with its state.
    pub fn record_failure(&mut self, state: FailureState) {
        self.total += 1;
        match state {
            FailureState::Known | FailureState::Pending => {
                self.expected_failures += 1;
            }
            FailureState::Regression => {
                self.regressions += 1;
            }
        }
    }
}
