// Input = output + pending, on the total column
use report_types::{EntityStats, ValidationIssue};

use super::{same_figure, APPLICATION_TABLE, BALANCE_MISMATCH};

/// `newReceived + carriedOver == totalProcessed + carriedForward`
pub fn check_balance(total: &EntityStats, year_label: &str) -> Vec<ValidationIssue> {
    let input = total.new_received.0 + total.carried_over.0;
    let output = total.results.total_processed.0 + total.results.carried_forward.0;

    if same_figure(input, output) {
        return Vec::new();
    }

    vec![ValidationIssue::error(
        BALANCE_MISMATCH,
        format!("{} - 总计", APPLICATION_TABLE),
        format!(
            "{} - 收支平衡错误 (总计): (新收+上年结转) {} ≠ (办理+结转下年度) {}",
            year_label, input, output
        ),
        input,
        output,
    )]
}
