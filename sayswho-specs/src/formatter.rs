//! Failure and summary formatting for the harness report.

use crate::failures::FailureState;
use crate::runner::Check;

/// Format a failed check with the document text for context.
pub fn format_failure(fixture_name: &str, check: &Check, state: FailureState, text: &str) -> String {
    let label = match state {
        FailureState::Regression => "FAIL",
        FailureState::Known => "KNOWN",
        FailureState::Pending => "PENDING",
    };
    let mut output = format!("\n{label}: {fixture_name}: {}\n\n", check.reference);

    if !text.is_empty() {
        output.push_str(&format!("  {}\n", text.replace('\n', "\\n")));
        // Underline the expected text when it occurs in the document.
        if let Some(pos) = text.find(check.expected.as_str()).filter(|_| !check.expected.is_empty()) {
            let width = |s: &str| s.replace('\n', "\\n").chars().count();
            output.push_str(&format!(
                "{}{}\n",
                " ".repeat(width(&text[..pos]) + 2),
                "^".repeat(width(&check.expected))
            ));
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "    \u{2717} expected `{}`, found `{}`\n",
        check.expected, check.found
    ));
    output
}

/// Format the totals of one fixture.
pub fn format_summary(
    fixture_name: &str,
    passed: usize,
    failed: usize,
    expected_failures: usize,
    regressions: usize,
) -> String {
    let status = if regressions > 0 { "FAIL" } else { "PASS" };
    format!(
        "\n{status}: {fixture_name}\n  {passed} passed, {failed} failed ({expected_failures} expected, {regressions} regressions)\n"
    )
}
