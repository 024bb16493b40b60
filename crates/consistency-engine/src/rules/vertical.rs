// Result buckets sum to the processed total
use report_types::{ApplicationStats, ValidationIssue};

use super::{same_figure, APPLICATION_TABLE, VERTICAL_SUM_MISMATCH};

pub fn check_vertical_sums(stats: &ApplicationStats, year_label: &str) -> Vec<ValidationIssue> {
    let entities = [("总计", &stats.total), ("自然人", &stats.natural_person)];
    let mut issues = Vec::new();

    for (name, entity) in entities {
        let sum = entity.results.bucket_sum();
        let processed = entity.results.total_processed.0;

        if !same_figure(sum, processed) {
            issues.push(ValidationIssue::error(
                VERTICAL_SUM_MISMATCH,
                format!("{} - {}", APPLICATION_TABLE, name),
                format!(
                    "{} - 纵向合计错误 ({}): 各分项之和({}) ≠ 本年处理总数({})",
                    year_label, name, sum, processed
                ),
                sum,
                processed,
            ));
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use report_types::Count;

    #[test]
    fn test_vertical_mismatch_on_total() {
        let mut stats = ApplicationStats::default();
        stats.total.results.granted = Count(60.0);
        stats.total.results.denied.state_secret = Count(5.0);
        stats.total.results.not_processed.repeat = Count(4.0);
        stats.total.results.total_processed = Count(70.0);

        let issues = check_vertical_sums(&stats, "2023");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].location, "表三 - 总计");
        assert_eq!(issues[0].related_values.expected, 69.0);
        assert_eq!(issues[0].related_values.actual, 70.0);
    }

    #[test]
    fn test_legal_categories_not_checked() {
        let mut stats = ApplicationStats::default();
        stats.legal_person.commercial.results.total_processed = Count(9.0);
        assert!(check_vertical_sums(&stats, "2023").is_empty());
    }

    #[test]
    fn test_natural_person_checked() {
        let mut stats = ApplicationStats::default();
        stats.natural_person.results.other.overdue_fee = Count(1.0);
        let issues = check_vertical_sums(&stats, "2023");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].location, "表三 - 自然人");
    }
}
