//! Subcommand bodies, operating on already-read JSON text

use anyhow::Context;
use consistency_engine::ConsistencyEngine;
use diff_engine::{normalize, validate_structure, Comparison, DiffEngine};
use report_types::{
    DisclosureTables, RawDocument, StructureReport, StructuredDocument, ValidationResult,
};
use std::fs;
use std::path::Path;

use crate::config::CompareConfig;

pub fn read_input(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read input: {}", path.display()))
}

fn parse_document(json: &str, what: &str) -> anyhow::Result<StructuredDocument> {
    let raw = RawDocument::from_json(json).with_context(|| format!("Invalid {} document", what))?;
    Ok(normalize(raw))
}

/// Normalize both documents, diff them and summarize the result
pub fn run_diff(json_a: &str, json_b: &str, config: &CompareConfig) -> anyhow::Result<Comparison> {
    let doc_a = parse_document(json_a, "first")?;
    let doc_b = parse_document(json_b, "second")?;

    for (label, doc) in [("first", &doc_a), ("second", &doc_b)] {
        let report = validate_structure(doc);
        if !report.valid {
            tracing::warn!(document = label, issues = report.issues.len(), "structural defects");
        }
    }

    let engine = DiffEngine::new(config.diff, config.summary);
    Ok(engine.compare(&doc_a, &doc_b))
}

/// Validate one year's tables, optionally against the previous year and the narrative
pub fn run_check(
    tables_json: &str,
    previous_json: Option<&str>,
    document_json: Option<&str>,
) -> anyhow::Result<ValidationResult> {
    let current = DisclosureTables::from_json(tables_json).context("Invalid disclosure tables")?;
    let previous = previous_json
        .map(|json| DisclosureTables::from_json(json).context("Invalid previous-year tables"))
        .transpose()?;
    let document = document_json
        .map(|json| parse_document(json, "narrative"))
        .transpose()?;

    Ok(ConsistencyEngine::new().validate_report(&current, previous.as_ref(), document.as_ref()))
}

pub fn run_structure(json: &str) -> anyhow::Result<StructureReport> {
    let document = parse_document(json, "input")?;
    Ok(validate_structure(&document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use report_types::OverallAssessment;

    const DOC_A: &str = r#"{"documentId":"a","sections":[{"id":"s1","level":1,"title":"一","content":[{"text":"共收到申请  120件。"}]}]}"#;
    const DOC_B: &str = r#"{"documentId":"b","sections":[{"id":"s1","level":1,"title":"一","content":[{"text":"共收到申请 120件。"}]}]}"#;

    #[test]
    fn test_run_diff_respects_config() {
        let strict = run_diff(DOC_A, DOC_B, &CompareConfig::default()).unwrap();
        assert_eq!(strict.summary.statistics.total_changes(), 2);

        let mut config = CompareConfig::default();
        config.diff.ignore_whitespace = true;
        let lenient = run_diff(DOC_A, DOC_B, &config).unwrap();
        assert_eq!(lenient.summary.statistics.modified_paragraphs, 1);
        assert_eq!(lenient.summary.overall_assessment, OverallAssessment::Minor);
    }

    #[test]
    fn test_run_diff_rejects_table_without_rows() {
        let broken = r#"{"sections":[{"id":"s","level":1,"title":"一","tables":[{"id":"t1"}]}]}"#;
        let err = run_diff(DOC_A, broken, &CompareConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Invalid second document"));
    }

    #[test]
    fn test_run_check_without_optional_inputs() {
        let result = run_check(r#"{"yearLabel":"2023"}"#, None, None).unwrap();
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_run_check_reports_invalid_previous() {
        let err = run_check(r#"{"yearLabel":"2023"}"#, Some("not json"), None).unwrap_err();
        assert!(err.to_string().contains("previous-year"));
    }

    #[test]
    fn test_run_structure_reports_defects() {
        let report =
            run_structure(r#"{"sections":[{"id":"","level":2,"title":"一"}]}"#).unwrap();
        assert!(!report.valid);
        assert_eq!(report.issues.len(), 2);
    }
}
