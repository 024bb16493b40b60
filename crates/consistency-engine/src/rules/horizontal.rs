// Natural person + legal-person categories = total, per figure
use report_types::{ApplicationStats, EntityStats, ValidationIssue};

use super::{same_figure, APPLICATION_TABLE, HORIZONTAL_SUM_MISMATCH};

type Getter = fn(&EntityStats) -> f64;

/// Figures cross-footed across applicant columns, keyed by their JSON path
pub const CROSS_FOOTED_FIELDS: [(&str, Getter); 6] = [
    ("newReceived", |e| e.new_received.0),
    ("carriedOver", |e| e.carried_over.0),
    ("results.granted", |e| e.results.granted.0),
    ("results.partialGrant", |e| e.results.partial_grant.0),
    ("results.totalProcessed", |e| e.results.total_processed.0),
    ("results.carriedForward", |e| e.results.carried_forward.0),
];

pub fn check_horizontal_sums(stats: &ApplicationStats, year_label: &str) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (path, get) in CROSS_FOOTED_FIELDS {
        let natural = get(&stats.natural_person);
        let legal: f64 = stats
            .legal_person
            .categories()
            .iter()
            .map(|(_, entity)| get(entity))
            .sum();
        let total = get(&stats.total);
        let expected = natural + legal;

        if !same_figure(expected, total) {
            issues.push(ValidationIssue::error(
                HORIZONTAL_SUM_MISMATCH,
                format!("{} - {}", APPLICATION_TABLE, path),
                format!(
                    "{} - 横向合计错误: 自然人({}) + 法人或其他组织({}) ≠ 总计({}) [{}]",
                    year_label, natural, legal, total, path
                ),
                expected,
                total,
            ));
        }
    }

    issues
}
