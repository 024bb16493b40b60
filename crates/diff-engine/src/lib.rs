//! Structural diff of two parsed annual reports
//!
//! Documents are normalized, sections paired by title, paragraphs aligned
//! with an LCS over normalized text and tables reconciled on a unified cell
//! grid. [`generate_summary`] condenses the resulting tree into statistics,
//! the most-changed sections and numeric highlights.

pub mod lcs;
pub mod normalize;
pub mod options;
pub mod paragraphs;
pub mod sections;
pub mod summary;
pub mod tables;

mod pairing;

pub use normalize::{normalize, validate_structure};
pub use options::{DiffOptions, SummaryOptions};
pub use sections::diff_documents;
pub use summary::generate_summary;

use report_types::{DiffResult, DiffSummary, RawDocument, StructuredDocument};
use serde::Serialize;

/// Diff tree together with its summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub diff: DiffResult,
    pub summary: DiffSummary,
}

/// DiffEngine entry point
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    diff_options: DiffOptions,
    summary_options: SummaryOptions,
}

impl DiffEngine {
    pub fn new(diff_options: DiffOptions, summary_options: SummaryOptions) -> Self {
        Self {
            diff_options,
            summary_options,
        }
    }

    pub fn compare(&self, doc_a: &StructuredDocument, doc_b: &StructuredDocument) -> Comparison {
        let diff = diff_documents(doc_a, doc_b, &self.diff_options);
        let summary = generate_summary(&diff, &self.summary_options);
        Comparison { diff, summary }
    }

    /// Normalize both raw inputs, then compare
    pub fn compare_raw(&self, raw_a: RawDocument, raw_b: RawDocument) -> Comparison {
        self.compare(&normalize(raw_a), &normalize(raw_b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use report_types::{OverallAssessment, RawSection};

    fn raw(texts: &[&str]) -> RawDocument {
        RawDocument {
            document_id: "d".to_string(),
            sections: vec![RawSection {
                id: "s1".to_string(),
                level: 1,
                title: "一、总体情况".to_string(),
                content: Some(
                    texts
                        .iter()
                        .map(|t| report_types::Paragraph {
                            id: String::new(),
                            text: t.to_string(),
                            kind: Default::default(),
                        })
                        .collect(),
                ),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_engine_compares_raw_documents() {
        let engine = DiffEngine::default();
        let comparison = engine.compare_raw(raw(&["甲", "乙"]), raw(&["甲", "丙"]));
        assert_eq!(comparison.summary.statistics.total_changes(), 2);
        assert_eq!(comparison.summary.overall_assessment, OverallAssessment::Minor);
    }

    #[test]
    fn test_engine_honours_diff_options() {
        let engine = DiffEngine::new(
            DiffOptions {
                ignore_whitespace: true,
                ignore_case: true,
            },
            SummaryOptions::default(),
        );
        let comparison = engine.compare_raw(raw(&["Annual  Report"]), raw(&["annual report"]));
        assert_eq!(comparison.summary.statistics.modified_paragraphs, 1);
    }
}
