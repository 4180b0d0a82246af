//! Catalog validation and outcome statistics
//!
//! [`validate_catalog`] walks every category, checks each scenario's shape
//! and counts the outcomes the oracle predicts for it.

use crate::case::{DisconnectExpectation, TestCase};
use crate::category::TestCategory;
use crate::error::CatalogError;
use crate::oracle::{Limits, Oracle, Outcome, RejectReason};
use crate::tables::{all_catalogs, catalog};
use gatt_types::AttributeKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// A scenario that breaks a structural rule of its category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub category: TestCategory,
    pub ordinal: Option<usize>,
    pub rule: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ordinal {
            Some(ordinal) => write!(
                f,
                "[{} Test {}] {}: {}",
                self.category, ordinal, self.rule, self.message
            ),
            None => write!(f, "[{}] {}: {}", self.category, self.rule, self.message),
        }
    }
}

/// Outcome counts for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: TestCategory,
    pub total: usize,
    pub disconnect: usize,
    pub success: usize,
    pub rejected: BTreeMap<RejectReason, usize>,
    /// Scenarios with no recorded disconnect expectation
    pub unspecified_disconnect: usize,
}

impl CategorySummary {
    fn new(category: TestCategory) -> Self {
        Self {
            category,
            total: 0,
            disconnect: 0,
            success: 0,
            rejected: BTreeMap::new(),
            unspecified_disconnect: 0,
        }
    }

    fn count(&mut self, case: &TestCase, outcome: Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Disconnect => self.disconnect += 1,
            Outcome::Success => self.success += 1,
            Outcome::Rejected(reason) => *self.rejected.entry(reason).or_default() += 1,
        }
        if case.disconnect == DisconnectExpectation::Unspecified {
            self.unspecified_disconnect += 1;
        }
    }

    pub fn rejected(&self, reason: RejectReason) -> usize {
        self.rejected.get(&reason).copied().unwrap_or(0)
    }

    pub fn rejected_total(&self) -> usize {
        self.rejected.values().sum()
    }
}

/// Result of validating every catalog against one oracle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogReport {
    pub limits: Limits,
    pub categories: Vec<CategorySummary>,
    pub violations: Vec<Violation>,
}

impl CatalogReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn total_cases(&self) -> usize {
        self.categories.iter().map(|summary| summary.total).sum()
    }

    pub fn summary(&self, category: TestCategory) -> Option<&CategorySummary> {
        self.categories
            .iter()
            .find(|summary| summary.category == category)
    }

    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A scenario paired with the outcome the oracle expects for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedCase {
    #[serde(flatten)]
    pub case: TestCase,
    pub expected: Outcome,
}

/// Scenarios of `category` with their expected outcomes
pub fn annotate(category: TestCategory, oracle: &Oracle<'_>) -> Vec<AnnotatedCase> {
    catalog(category)
        .iter()
        .map(|case| AnnotatedCase {
            case: case.clone(),
            expected: oracle.expected_outcome(case),
        })
        .collect()
}

/// Check every scenario's shape and count predicted outcomes
pub fn validate_catalog(oracle: &Oracle<'_>) -> CatalogReport {
    let mut categories = Vec::with_capacity(TestCategory::ALL.len());
    let mut violations = Vec::new();

    for (category, cases) in all_catalogs() {
        let mut summary = CategorySummary::new(category);
        if cases.is_empty() {
            violations.push(Violation {
                category,
                ordinal: None,
                rule: "non-empty".to_string(),
                message: "category has no scenarios".to_string(),
            });
        }
        for (index, case) in cases.iter().enumerate() {
            check_case(oracle, category, index, case, &mut violations);
            summary.count(case, oracle.expected_outcome(case));
        }
        debug!(
            %category,
            total = summary.total,
            disconnect = summary.disconnect,
            rejected = summary.rejected_total(),
            success = summary.success,
            "Validated catalog"
        );
        categories.push(summary);
    }

    CatalogReport {
        limits: oracle.limits,
        categories,
        violations,
    }
}

fn check_case(
    oracle: &Oracle<'_>,
    category: TestCategory,
    index: usize,
    case: &TestCase,
    violations: &mut Vec<Violation>,
) {
    let mut violation = |rule: &str, message: String| {
        violations.push(Violation {
            category,
            ordinal: Some(case.ordinal),
            rule: rule.to_string(),
            message,
        })
    };

    if case.ordinal != index + 1 {
        violation(
            "ordinal",
            format!("declared at position {} but numbered {}", index + 1, case.ordinal),
        );
    }
    if case.category != category {
        violation(
            "category",
            format!("listed under {} but tagged {}", category, case.category),
        );
    }
    if category.requires_target() && case.target.is_none() {
        violation("target", "scenario has no target identifier".to_string());
    }
    match (category.requires_value(), case.value.is_some()) {
        (true, false) => violation("value", "write scenario has no payload".to_string()),
        (false, true) => violation("value", "non-write scenario carries a payload".to_string()),
        _ => {}
    }

    if category.requires_service() {
        match (&case.service, &case.options) {
            (Some(service), Some(options)) => {
                let service_record = oracle
                    .registry
                    .resolve_kind(AttributeKind::Service, service)
                    .ok();
                let granted = options.services().any(|granted| {
                    let granted_record = oracle
                        .registry
                        .resolve_kind(AttributeKind::Service, granted)
                        .ok();
                    granted == service
                        || (service_record.is_some() && granted_record == service_record)
                });
                if !granted {
                    violation(
                        "service-access",
                        format!("request options do not grant access to {}", service),
                    );
                }
                for granted in options.services() {
                    if let Err(e) = oracle.registry.resolve_kind(AttributeKind::Service, granted) {
                        violation("options", format!("request options name {}", e));
                    }
                }
            }
            _ => violation(
                "service",
                "discovery scenario needs a service and request options".to_string(),
            ),
        }
    }
}
