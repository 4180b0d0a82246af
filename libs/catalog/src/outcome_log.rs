//! Outcome log: what the harness observed, judged against the oracle
//!
//! Free-form lines and per-scenario results accumulate in order and render
//! as plain text, one line each. Every recorded result is also emitted as a
//! tracing event so a harness run can be followed in the service logs.

use crate::case::{DisconnectExpectation, TestCase};
use crate::category::TestCategory;
use crate::error::CatalogError;
use crate::oracle::{Oracle, Outcome};
use crate::tables::catalog;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};

/// Judgement of one observed outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Pass,
    Fail,
    /// A disconnect was observed where none was specified either way
    Inconclusive,
}

impl Verdict {
    /// Compare an observation with the oracle's expectation
    pub fn judge(case: &TestCase, expected: Outcome, observed: Outcome) -> Self {
        if expected == observed {
            Verdict::Pass
        } else if case.disconnect == DisconnectExpectation::Unspecified
            && observed == Outcome::Disconnect
        {
            Verdict::Inconclusive
        } else {
            Verdict::Fail
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Fail => "FAIL",
            Verdict::Inconclusive => "INCONCLUSIVE",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One judged scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseResult {
    pub category: TestCategory,
    pub ordinal: usize,
    pub expected: Outcome,
    pub observed: Outcome,
    pub verdict: Verdict,
}

impl fmt::Display for CaseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Test {}: {} ({} expected {}, observed {})",
            self.ordinal, self.verdict, self.category, self.expected, self.observed
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LogEntry {
    Message { text: String },
    Result(CaseResult),
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogEntry::Message { text } => f.write_str(text),
            LogEntry::Result(result) => write!(f, "{}", result),
        }
    }
}

/// Verdict totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSummary {
    pub passed: usize,
    pub failed: usize,
    pub inconclusive: usize,
}

impl LogSummary {
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.inconclusive
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.inconclusive == 0
    }
}

impl fmt::Display for LogSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} passed, {} failed, {} inconclusive",
            self.passed, self.failed, self.inconclusive
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct OutcomeLog {
    entries: Vec<LogEntry>,
}

impl OutcomeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Append a free-form line
    pub fn log(&mut self, line: impl Into<String>) {
        let text = line.into();
        info!(line = %text, "Harness log");
        self.entries.push(LogEntry::Message { text });
    }

    /// Judge the observed outcome of `Test ordinal` in `category`
    pub fn record(
        &mut self,
        oracle: &Oracle<'_>,
        category: TestCategory,
        ordinal: usize,
        observed: Outcome,
    ) -> Result<Verdict, CatalogError> {
        let cases = catalog(category);
        let case = ordinal
            .checked_sub(1)
            .and_then(|index| cases.get(index))
            .ok_or(CatalogError::OrdinalOutOfRange {
                category,
                ordinal,
                len: cases.len(),
            })?;
        Ok(self.record_case(oracle, case, observed))
    }

    /// Judge the observed outcome of an explicit scenario
    pub fn record_case(
        &mut self,
        oracle: &Oracle<'_>,
        case: &TestCase,
        observed: Outcome,
    ) -> Verdict {
        let expected = oracle.expected_outcome(case);
        let verdict = Verdict::judge(case, expected, observed);
        let result = CaseResult {
            category: case.category,
            ordinal: case.ordinal,
            expected,
            observed,
            verdict,
        };

        match verdict {
            Verdict::Fail => warn!(
                category = %result.category,
                ordinal = result.ordinal,
                %expected,
                %observed,
                "Scenario failed"
            ),
            _ => info!(
                category = %result.category,
                ordinal = result.ordinal,
                %verdict,
                "Scenario judged"
            ),
        }

        self.entries.push(LogEntry::Result(result));
        verdict
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn results(&self) -> impl Iterator<Item = &CaseResult> {
        self.entries.iter().filter_map(|entry| match entry {
            LogEntry::Result(result) => Some(result),
            LogEntry::Message { .. } => None,
        })
    }

    pub fn summary(&self) -> LogSummary {
        let mut summary = LogSummary::default();
        for result in self.results() {
            match result.verdict {
                Verdict::Pass => summary.passed += 1,
                Verdict::Fail => summary.failed += 1,
                Verdict::Inconclusive => summary.inconclusive += 1,
            }
        }
        summary
    }

    /// Every entry on its own line, each terminated by a newline
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{}\n", entry))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::RejectReason;

    #[test]
    fn test_record_pass_and_fail() {
        let oracle = Oracle::standard();
        let mut log = OutcomeLog::new();
        let verdict = log
            .record(&oracle, TestCategory::CharacteristicReadValue, 1, Outcome::Disconnect)
            .unwrap();
        assert_eq!(verdict, Verdict::Pass);

        let verdict = log
            .record(&oracle, TestCategory::CharacteristicReadValue, 2, Outcome::Success)
            .unwrap();
        assert_eq!(verdict, Verdict::Fail);

        assert_eq!(
            log.summary(),
            LogSummary {
                passed: 1,
                failed: 1,
                inconclusive: 0
            }
        );
    }

    #[test]
    fn test_unspecified_disconnect_is_inconclusive() {
        let oracle = Oracle::standard();
        let mut log = OutcomeLog::new();
        let verdict = log
            .record(&oracle, TestCategory::CharacteristicWriteValue, 11, Outcome::Disconnect)
            .unwrap();
        assert_eq!(verdict, Verdict::Inconclusive);

        // An explicit mustDisconnect: false makes the same observation a failure
        let verdict = log
            .record(&oracle, TestCategory::CharacteristicWriteValue, 12, Outcome::Disconnect)
            .unwrap();
        assert_eq!(verdict, Verdict::Fail);
    }

    #[test]
    fn test_ordinal_out_of_range() {
        let oracle = Oracle::standard();
        let mut log = OutcomeLog::new();
        for ordinal in [0, 7] {
            let error = log
                .record(&oracle, TestCategory::DescriptorReadValue, ordinal, Outcome::Success)
                .unwrap_err();
            assert_eq!(
                error,
                CatalogError::OrdinalOutOfRange {
                    category: TestCategory::DescriptorReadValue,
                    ordinal,
                    len: 6
                }
            );
        }
        assert!(log.entries().is_empty());
    }

    #[test]
    fn test_render_and_clear() {
        let oracle = Oracle::standard();
        let mut log = OutcomeLog::new();
        log.log("Requesting Bluetooth Device...");
        log.record(
            &oracle,
            TestCategory::GetCharacteristic,
            1,
            Outcome::Rejected(RejectReason::NotFound),
        )
        .unwrap();
        assert_eq!(
            log.render(),
            "Requesting Bluetooth Device...\n\
             Test 1: PASS (getCharacteristic expected rejected (not-found), observed rejected (not-found))\n"
        );

        log.clear();
        assert_eq!(log.render(), "");
        assert_eq!(log.summary().total(), 0);
    }
}
