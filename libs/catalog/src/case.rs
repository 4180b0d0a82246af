//! Test case records and the builder the catalog tables are written with

use crate::category::TestCategory;
use gatt_types::Identifier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the mock device is expected to drop the connection mid-operation
///
/// Several scenarios leave this unset. `Unspecified` keeps that distinct from
/// an explicit `false` so a harness can treat a disconnect there as
/// inconclusive rather than a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisconnectExpectation {
    Expected,
    NotExpected,
    #[default]
    Unspecified,
}

impl DisconnectExpectation {
    pub fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => DisconnectExpectation::Expected,
            Some(false) => DisconnectExpectation::NotExpected,
            None => DisconnectExpectation::Unspecified,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            DisconnectExpectation::Expected => Some(true),
            DisconnectExpectation::NotExpected => Some(false),
            DisconnectExpectation::Unspecified => None,
        }
    }

    pub fn is_expected(&self) -> bool {
        *self == DisconnectExpectation::Expected
    }
}

/// One entry of `requestDevice({filters: [...]})`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScanFilter {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<Identifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_prefix: Option<String>,
}

/// Device request options used to reach the service under test
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RequestOptions {
    pub filters: Vec<ScanFilter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub optional_services: Vec<Identifier>,
}

impl RequestOptions {
    /// A single filter matching devices advertising all of `services`
    pub fn filter_services<I, T>(services: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Identifier>,
    {
        Self {
            filters: vec![ScanFilter {
                services: services.into_iter().map(Into::into).collect(),
                ..ScanFilter::default()
            }],
            optional_services: Vec::new(),
        }
    }

    pub fn optional_services<I, T>(mut self, services: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Identifier>,
    {
        self.optional_services = services.into_iter().map(Into::into).collect();
        self
    }

    /// Every service identifier the options mention, filters first
    pub fn services(&self) -> impl Iterator<Item = &Identifier> {
        self.filters
            .iter()
            .flat_map(|filter| filter.services.iter())
            .chain(self.optional_services.iter())
    }
}

/// One conformance scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// 1-based position in its category, reported as "Test N"
    pub ordinal: usize,
    pub category: TestCategory,
    /// Characteristic or descriptor the operation targets
    pub target: Option<Identifier>,
    /// Service the target is looked up in
    pub service: Option<Identifier>,
    /// Payload for write scenarios
    pub value: Option<Vec<u8>>,
    pub options: Option<RequestOptions>,
    pub disconnect: DisconnectExpectation,
}

impl TestCase {
    pub fn label(&self) -> String {
        format!("Test {}", self.ordinal)
    }

    pub fn value_len(&self) -> Option<usize> {
        self.value.as_ref().map(Vec::len)
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label(), self.category)?;
        if let Some(target) = &self.target {
            write!(f, " target={}", target)?;
        }
        if let Some(service) = &self.service {
            write!(f, " service={}", service)?;
        }
        if let Some(len) = self.value_len() {
            write!(f, " value={} bytes", len)?;
        }
        if let Some(flag) = self.disconnect.as_flag() {
            write!(f, " mustDisconnect={}", flag)?;
        }
        Ok(())
    }
}

/// Scenario fields before an ordinal is assigned
#[derive(Debug, Clone, Default)]
pub(crate) struct Case {
    target: Option<Identifier>,
    service: Option<Identifier>,
    value: Option<Vec<u8>>,
    options: Option<RequestOptions>,
    disconnect: DisconnectExpectation,
}

impl Case {
    pub(crate) fn target(target: impl Into<Identifier>) -> Self {
        Self {
            target: Some(target.into()),
            ..Self::default()
        }
    }

    pub(crate) fn in_service(service: impl Into<Identifier>) -> Self {
        Self {
            service: Some(service.into()),
            ..Self::default()
        }
    }

    pub(crate) fn service(mut self, service: impl Into<Identifier>) -> Self {
        self.service = Some(service.into());
        self
    }

    pub(crate) fn write(mut self, value: impl Into<Vec<u8>>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub(crate) fn options(mut self, options: RequestOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub(crate) fn must_disconnect(mut self, flag: bool) -> Self {
        self.disconnect = DisconnectExpectation::from_flag(Some(flag));
        self
    }
}

/// Assigns ordinals in declaration order
pub(crate) struct CaseList {
    category: TestCategory,
    cases: Vec<TestCase>,
}

impl CaseList {
    pub(crate) fn new(category: TestCategory) -> Self {
        Self {
            category,
            cases: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, case: Case) {
        let ordinal = self.cases.len() + 1;
        self.cases.push(TestCase {
            ordinal,
            category: self.category,
            target: case.target,
            service: case.service,
            value: case.value,
            options: case.options,
            disconnect: case.disconnect,
        });
    }

    pub(crate) fn finish(self) -> Vec<TestCase> {
        self.cases
    }
}
