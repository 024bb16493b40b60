//! Findings produced by the structural and arithmetic checks

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Points deducted from the consistency score per issue
pub const ISSUE_PENALTY: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelatedValues {
    pub expected: f64,
    pub actual: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub severity: Severity,
    pub code: String,
    pub message: String,
    pub location: String,
    pub related_values: RelatedValues,
    /// Stable across runs on identical input
    pub fingerprint: String,
}

impl ValidationIssue {
    pub fn new(
        severity: Severity,
        code: &str,
        location: impl Into<String>,
        message: impl Into<String>,
        expected: f64,
        actual: f64,
    ) -> Self {
        let location = location.into();
        let fingerprint = fingerprint(code, &location);
        Self {
            severity,
            code: code.to_string(),
            message: message.into(),
            location,
            related_values: RelatedValues { expected, actual },
            fingerprint,
        }
    }

    pub fn error(
        code: &str,
        location: impl Into<String>,
        message: impl Into<String>,
        expected: f64,
        actual: f64,
    ) -> Self {
        Self::new(Severity::Error, code, location, message, expected, actual)
    }

    pub fn warning(
        code: &str,
        location: impl Into<String>,
        message: impl Into<String>,
        expected: f64,
        actual: f64,
    ) -> Self {
        Self::new(Severity::Warning, code, location, message, expected, actual)
    }
}

/// First 16 hex digits of SHA-256 over `code:location`
pub fn fingerprint(code: &str, location: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(code.as_bytes());
    hasher.update(b":");
    hasher.update(location.as_bytes());
    let mut digest = hex::encode(hasher.finalize());
    digest.truncate(16);
    digest
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub issues: Vec<ValidationIssue>,
    pub score: u32,
}

impl ValidationResult {
    pub fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        let score = score_for(issues.len());
        Self { issues, score }
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::from_issues(Vec::new())
    }
}

/// `max(0, 100 - 10 * issue_count)`
pub fn score_for(issue_count: usize) -> u32 {
    let penalty = u32::try_from(issue_count)
        .unwrap_or(u32::MAX)
        .saturating_mul(ISSUE_PENALTY);
    100u32.saturating_sub(penalty)
}

/// Outcome of the structural shape check on a normalized document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureReport {
    pub valid: bool,
    pub issues: Vec<String>,
}
