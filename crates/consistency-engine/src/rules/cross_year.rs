// Previous year's carried-forward must reappear as this year's carried-over
use report_types::{ApplicationStats, ValidationIssue};

use super::{same_figure, CROSS_YEAR_MISMATCH};

/// Only the total column is linked across years
pub fn check_cross_year(
    previous: &ApplicationStats,
    current: &ApplicationStats,
    previous_label: &str,
    current_label: &str,
) -> Vec<ValidationIssue> {
    let forward = previous.total.results.carried_forward.0;
    let over = current.total.carried_over.0;

    if same_figure(forward, over) {
        return Vec::new();
    }

    vec![ValidationIssue::warning(
        CROSS_YEAR_MISMATCH,
        "跨年勾稽关系",
        format!(
            "跨年数据不一致: {}年\"结转下年度\" ({}) 不等于 {}年\"上年结转\" ({})",
            previous_label, forward, current_label, over
        ),
        forward,
        over,
    )]
}
