// Numeric token extraction for before/after text pairs
use lazy_static::lazy_static;
use regex::Regex;
use report_types::disclosure::to_ascii_digits;
use report_types::NumberChangeType;

lazy_static! {
    /// Integers and decimals; `\d` is Unicode-aware
    static ref NUMBER_PATTERN: Regex = Regex::new(r"\d+(?:\.\d+)?").unwrap();
}

/// Numeric tokens of `text` in reading order
pub fn extract_numbers(text: &str) -> Vec<&str> {
    NUMBER_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Pair tokens positionally and keep the pairs whose text differs
///
/// Extra tokens on the longer side have no counterpart and are ignored.
pub fn changed_numbers<'a>(
    before: &'a str,
    after: &'a str,
) -> Vec<(&'a str, &'a str, NumberChangeType)> {
    extract_numbers(before)
        .into_iter()
        .zip(extract_numbers(after))
        .filter(|(old, new)| old != new)
        .map(|(old, new)| (old, new, classify(old, new)))
        .collect()
}

/// Direction of change; equal or unparseable values are a plain change
///
/// Full-width digits compare by value; the token text itself is left as is.
pub fn classify(old: &str, new: &str) -> NumberChangeType {
    let parse = |token: &str| to_ascii_digits(token).parse::<f64>();
    match (parse(old), parse(new)) {
        (Ok(o), Ok(n)) if n > o => NumberChangeType::Increase,
        (Ok(o), Ok(n)) if n < o => NumberChangeType::Decrease,
        _ => NumberChangeType::Change,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_numbers() {
        assert_eq!(extract_numbers("共收到120件，办结98.5%"), vec!["120", "98.5"]);
        assert!(extract_numbers("无数字").is_empty());
    }

    #[test]
    fn test_changed_numbers_pairs_by_position() {
        let changes = changed_numbers("新收120件，结转10件", "新收150件，结转10件");
        assert_eq!(changes, vec![("120", "150", NumberChangeType::Increase)]);
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("5", "2"), NumberChangeType::Decrease);
        assert_eq!(classify("1.0", "1"), NumberChangeType::Change);
        assert_eq!(classify("3", "4"), NumberChangeType::Increase);
    }

    #[test]
    fn test_full_width_digits_keep_direction() {
        let changes = changed_numbers("共收到１２０件", "共收到１５０件");
        assert_eq!(changes, vec![("１２０", "１５０", NumberChangeType::Increase)]);
        assert_eq!(classify("１２０", "98"), NumberChangeType::Decrease);
        assert_eq!(classify("１２０", "120"), NumberChangeType::Change);
    }

    #[test]
    fn test_unbalanced_token_counts() {
        let changes = changed_numbers("1 2 3", "1 5");
        assert_eq!(changes, vec![("2", "5", NumberChangeType::Increase)]);
    }
}
