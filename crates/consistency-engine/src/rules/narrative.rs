//! Narrative figures against the tables they summarize
//!
//! For each headline figure, the first paragraph in section pre-order that
//! states it is compared with the table value. Figures whose table is
//! absent are skipped.

use report_types::{ApplicationStats, DisputeStats, StructuredDocument, ValidationIssue};

use super::{same_figure, APPLICATION_TABLE, DISPUTE_TABLE, NARRATIVE_TABLE_MISMATCH};
use crate::extractors::HeadlineFigure;

/// Table value a headline figure should equal
pub fn table_value(
    figure: HeadlineFigure,
    applications: Option<&ApplicationStats>,
    disputes: Option<&DisputeStats>,
) -> Option<f64> {
    match figure {
        HeadlineFigure::NewReceived => applications.map(|a| a.total.new_received.0),
        HeadlineFigure::CarriedOver => applications.map(|a| a.total.carried_over.0),
        HeadlineFigure::TotalApplications => applications
            .map(|a| a.total.results.total_processed.0 + a.total.results.carried_forward.0),
        HeadlineFigure::CarriedForward => applications.map(|a| a.total.results.carried_forward.0),
        HeadlineFigure::ReviewTotal => disputes.map(|d| d.review.total.0),
        HeadlineFigure::LitigationTotal => {
            disputes.map(|d| d.litigation_direct.total.0 + d.litigation_post_review.total.0)
        }
    }
}

/// First stated value of `figure` with the title of the section stating it
fn first_mention(figure: HeadlineFigure, document: &StructuredDocument) -> Option<(f64, &str)> {
    document.walk_sections().find_map(|section| {
        section
            .content
            .iter()
            .find_map(|paragraph| figure.find_in(&paragraph.text))
            .map(|(value, _)| (value, section.title.as_str()))
    })
}

pub fn check_narrative(
    document: &StructuredDocument,
    applications: Option<&ApplicationStats>,
    disputes: Option<&DisputeStats>,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for figure in HeadlineFigure::ALL {
        let Some(expected) = table_value(figure, applications, disputes) else {
            continue;
        };
        let Some((stated, section_title)) = first_mention(figure, document) else {
            continue;
        };
        if same_figure(stated, expected) {
            continue;
        }

        let table = if figure.is_dispute_figure() {
            DISPUTE_TABLE
        } else {
            APPLICATION_TABLE
        };
        issues.push(ValidationIssue::warning(
            NARRATIVE_TABLE_MISMATCH,
            format!("正文 - {}", figure.label()),
            format!(
                "正文\"{}\"所述{}件与{}数据{}件不一致 ({})",
                figure.label(),
                stated,
                table,
                expected,
                section_title
            ),
            expected,
            stated,
        ));
    }

    tracing::debug!(issues = issues.len(), "checked narrative figures");
    issues
}
