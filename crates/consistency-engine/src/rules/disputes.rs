// Review and litigation outcomes reconcile to their totals
use report_types::{DisputeStats, ValidationIssue};

use super::{same_figure, DISPUTE_TABLE, DISPUTE_TOTAL_MISMATCH};

fn display_name(key: &str) -> &'static str {
    match key {
        "review" => "行政复议",
        "litigationDirect" => "未经复议直接起诉",
        "litigationPostReview" => "复议后起诉",
        _ => "其他",
    }
}

/// `maintain + correct + other + unfinished == total` per category
pub fn check_dispute_totals(disputes: &DisputeStats, year_label: &str) -> Vec<ValidationIssue> {
    disputes
        .categories()
        .into_iter()
        .filter_map(|(key, category)| {
            let sum = category.outcome_sum();
            let total = category.total.0;
            if same_figure(sum, total) {
                return None;
            }
            Some(ValidationIssue::error(
                DISPUTE_TOTAL_MISMATCH,
                format!("{} - {}", DISPUTE_TABLE, key),
                format!(
                    "{} - 表四合计错误 ({}): 维持+纠正+其他+尚未审结 ({}) ≠ 总计 ({})",
                    year_label,
                    display_name(key),
                    sum,
                    total
                ),
                sum,
                total,
            ))
        })
        .collect()
}
