#![doc(issue_tracker_base_url = "https://github.com/sayswho/sayswho/issues/")]

//! Fixture-driven regression tests for sayswho.
//!
//! Each fixture is a TOML file holding a CoNLL-U document (tokens, tags,
//! dependency parses, entities and coreference brackets) together with the
//! quotes and quote → cluster matches attribution should produce for it.
//!
//! ## Modules
//!
//! - [`fixture`] - Fixture format and parsing
//! - [`loader`] - Loading fixture files and directories
//! - [`runner`] - Attributing fixtures and comparing expectations
//! - [`formatter`] - Failure and summary formatting
//! - [`failures`] - Expected failures tracking via TOML
//! - [`errors`] - Error types for the harness

pub mod errors;
pub mod failures;
pub mod fixture;
pub mod formatter;
pub mod loader;
pub mod runner;

pub use errors::{SpecError, SpecResult};
pub use failures::{ExpectedFailures, FailureEntry, FailureState, HarnessResult};
pub use fixture::{parse_fixture, ExpectedMatch, ExpectedQuote, QuoteFixture};
pub use formatter::{format_failure, format_summary};
pub use loader::{load_all_fixtures, load_fixture};
pub use runner::{check_fixture, run_fixture, run_harness, Check};
