//! Arithmetic consistency checks for annual disclosure tables
//!
//! Runs independently of the diff: one year's request-handling and dispute
//! tables are cross-footed, optionally linked to the previous year and
//! compared with the figures the report narrative quotes. Findings are data,
//! never errors; the score drops by a fixed penalty per finding.

pub mod extractors;
pub mod rules;

use report_types::{
    ApplicationStats, DisclosureTables, DisputeStats, StructuredDocument, ValidationIssue,
    ValidationResult,
};

/// ConsistencyEngine entry point
pub struct ConsistencyEngine;

impl ConsistencyEngine {
    pub fn new() -> Self {
        Self
    }

    /// Horizontal, vertical and balance checks on one year's request table
    pub fn validate_year(&self, stats: &ApplicationStats, year_label: &str) -> ValidationResult {
        ValidationResult::from_issues(self.year_issues(stats, year_label))
    }

    /// Carried-forward to carried-over linkage between adjacent years
    pub fn validate_cross_year(
        &self,
        previous: &ApplicationStats,
        current: &ApplicationStats,
        previous_label: &str,
        current_label: &str,
    ) -> Vec<ValidationIssue> {
        rules::cross_year::check_cross_year(previous, current, previous_label, current_label)
    }

    pub fn validate_disputes(&self, disputes: &DisputeStats, year_label: &str) -> Vec<ValidationIssue> {
        rules::disputes::check_dispute_totals(disputes, year_label)
    }

    pub fn check_narrative(
        &self,
        document: &StructuredDocument,
        applications: Option<&ApplicationStats>,
        disputes: Option<&DisputeStats>,
    ) -> Vec<ValidationIssue> {
        rules::narrative::check_narrative(document, applications, disputes)
    }

    /// Every check that the supplied inputs allow, combined into one score
    #[tracing::instrument(skip_all, fields(year = %current.year_label))]
    pub fn validate_report(
        &self,
        current: &DisclosureTables,
        previous: Option<&DisclosureTables>,
        document: Option<&StructuredDocument>,
    ) -> ValidationResult {
        let mut issues = Vec::new();

        if let Some(stats) = &current.applications {
            issues.extend(self.year_issues(stats, &current.year_label));
        }

        if let Some(disputes) = &current.disputes {
            issues.extend(self.validate_disputes(disputes, &current.year_label));
        }

        if let (Some(prev), Some(curr)) = (
            previous.and_then(|p| p.applications.as_ref()),
            current.applications.as_ref(),
        ) {
            let previous_label = previous.map(|p| p.year_label.as_str()).unwrap_or_default();
            issues.extend(self.validate_cross_year(prev, curr, previous_label, &current.year_label));
        }

        if let Some(document) = document {
            issues.extend(self.check_narrative(
                document,
                current.applications.as_ref(),
                current.disputes.as_ref(),
            ));
        }

        let result = ValidationResult::from_issues(issues);
        if result.issues.is_empty() {
            tracing::debug!("disclosure tables are consistent");
        } else {
            tracing::warn!(
                issues = result.issues.len(),
                score = result.score,
                "consistency issues found"
            );
        }
        result
    }

    fn year_issues(&self, stats: &ApplicationStats, year_label: &str) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        issues.extend(rules::horizontal::check_horizontal_sums(stats, year_label));
        issues.extend(rules::vertical::check_vertical_sums(stats, year_label));
        issues.extend(rules::balance::check_balance(&stats.total, year_label));
        issues
    }
}

impl Default for ConsistencyEngine {
    fn default() -> Self {
        Self::new()
    }
}
