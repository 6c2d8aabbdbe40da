//! Runs fixtures through attribution and checks the expectations.

use sayswho::{Attribution, Attributor, ClusterIndex, ConlluProvider, QuoteIndex};

use crate::errors::SpecResult;
use crate::failures::{ExpectedFailures, HarnessResult};
use crate::fixture::QuoteFixture;
use crate::formatter::{format_failure, format_summary};

/// One compared value of a fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    /// Where the value lives, e.g. `quote[1].speaker`
    pub reference: String,
    pub expected: String,
    pub found: String,
}

impl Check {
    fn new(reference: impl Into<String>, expected: impl ToString, found: impl ToString) -> Self {
        Self {
            reference: reference.into(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    pub fn passed(&self) -> bool {
        self.expected == self.found
    }
}

/// Attributes the fixture's document with the fixture's config.
pub fn run_fixture(fixture: &QuoteFixture) -> SpecResult<Attribution> {
    let provider = ConlluProvider::parse(&fixture.conllu)?;
    let attribution = Attributor::new(fixture.config.clone()).attribute(&provider, provider.text())?;
    Ok(attribution)
}

fn format_pairs(pairs: impl Iterator<Item = (usize, usize)>) -> String {
    pairs
        .map(|(q, c)| format!("({q}, {c})"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Compares an attribution with the fixture's expectations.
pub fn check_fixture(fixture: &QuoteFixture, attribution: &Attribution) -> Vec<Check> {
    let mut checks = vec![Check::new(
        "quotes",
        fixture.quotes.len(),
        attribution.quotes().len(),
    )];

    for (n, expected) in fixture.quotes.iter().enumerate() {
        let Some(quote) = attribution.quote(QuoteIndex(n)) else {
            continue;
        };
        checks.push(Check::new(
            format!("quote[{n}].speaker"),
            &expected.speaker,
            quote.speaker_text(),
        ));
        checks.push(Check::new(
            format!("quote[{n}].cue"),
            &expected.cue,
            quote.cue_text(),
        ));
        if let Some(content) = &expected.content {
            checks.push(Check::new(
                format!("quote[{n}].content"),
                content,
                attribution.doc().span_text(&quote.content),
            ));
        }
    }

    let mut expected_pairs: Vec<(usize, usize)> =
        fixture.matches.iter().map(|m| (m.quote, m.cluster)).collect();
    expected_pairs.sort_unstable();
    expected_pairs.dedup();
    checks.push(Check::new(
        "matches",
        format_pairs(expected_pairs.into_iter()),
        format_pairs(
            attribution
                .matches()
                .iter()
                .map(|m| (m.quote_index.0, m.cluster_index.0)),
        ),
    ));

    for expected in &fixture.matches {
        if let Some(names) = &expected.names {
            checks.push(Check::new(
                format!("cluster[{}].names", expected.cluster),
                names.join(", "),
                attribution
                    .cluster_names(ClusterIndex(expected.cluster))
                    .join(", "),
            ));
        }
    }
    checks
}

/// Runs every fixture, records each check against the expected failures and
/// returns the totals with a printable report.
pub fn run_harness(
    fixtures: &[(String, QuoteFixture)],
    failures: &ExpectedFailures,
) -> (HarnessResult, String) {
    let mut result = HarnessResult::new();
    let mut report = String::new();

    for (name, fixture) in fixtures {
        let checks = match run_fixture(fixture) {
            Ok(attribution) => check_fixture(fixture, &attribution),
            Err(err) => vec![Check::new("attribute", "ok", err)],
        };
        let text = ConlluProvider::parse(&fixture.conllu)
            .map(|p| p.text().to_string())
            .unwrap_or_default();

        let before = result.clone();
        for check in &checks {
            if check.passed() {
                result.record_pass();
            } else {
                let state = failures.is_expected(name, &check.reference);
                result.record_failure(state);
                report.push_str(&format_failure(name, check, state, &text));
            }
        }
        report.push_str(&format_summary(
            name,
            result.passed - before.passed,
            (result.total - before.total) - (result.passed - before.passed),
            result.expected_failures - before.expected_failures,
            result.regressions - before.regressions,
        ));
    }
    (result, report)
}
