//! Statistics, section ranking and numeric highlights over a diff tree

pub mod numbers;

use std::collections::HashSet;

use report_types::{
    ChangeBreakdown, DiffResult, DiffSection, DiffStatistics, DiffSummary, DiffType,
    KeyNumberChange, OverallAssessment, TopChangedSection,
};

use crate::options::SummaryOptions;
use numbers::changed_numbers;

const PARAGRAPH_SUFFIX: &str = "段落";
const TABLE_SUFFIX: &str = "表格";

/// Summarize a diff tree in one pre-order walk
#[tracing::instrument(skip_all)]
pub fn generate_summary(diff: &DiffResult, options: &SummaryOptions) -> DiffSummary {
    let mut walker = SummaryWalker::default();
    for section in &diff.sections {
        walker.visit(section, &section.section_title);
    }

    let SummaryWalker {
        statistics,
        mut sections,
        key_changes,
    } = walker;

    // Stable sort keeps pre-order among equal counts
    sections.sort_by(|a, b| b.total_change_count.cmp(&a.total_change_count));
    sections.truncate(options.top_sections_count);

    let mut seen = HashSet::new();
    let mut key_number_changes: Vec<KeyNumberChange> = key_changes
        .into_iter()
        .filter(|change| seen.insert(change.clone()))
        .collect();
    key_number_changes.truncate(options.max_key_number_changes);

    let overall_assessment = OverallAssessment::from_total_changes(statistics.total_changes());

    tracing::debug!(
        total_changes = statistics.total_changes(),
        key_number_changes = key_number_changes.len(),
        %overall_assessment,
        "generated summary"
    );

    DiffSummary {
        top_changed_sections: sections,
        statistics,
        key_number_changes,
        overall_assessment,
    }
}

#[derive(Default)]
struct SummaryWalker {
    statistics: DiffStatistics,
    sections: Vec<TopChangedSection>,
    key_changes: Vec<KeyNumberChange>,
}

impl SummaryWalker {
    fn visit(&mut self, section: &DiffSection, path: &str) {
        let mut breakdown = ChangeBreakdown::default();

        for paragraph in &section.paragraphs {
            match paragraph.kind {
                DiffType::Added => self.statistics.added_paragraphs += 1,
                DiffType::Deleted => self.statistics.deleted_paragraphs += 1,
                DiffType::Modified => self.statistics.modified_paragraphs += 1,
            }
            tally(&mut breakdown, paragraph.kind);

            if paragraph.kind == DiffType::Modified {
                if let (Some(before), Some(after)) = (&paragraph.before, &paragraph.after) {
                    self.record_numbers(path, PARAGRAPH_SUFFIX, before, after);
                }
            }
        }

        for table in &section.tables {
            match table.kind {
                DiffType::Added => self.statistics.added_tables += 1,
                DiffType::Deleted => self.statistics.deleted_tables += 1,
                DiffType::Modified => self.statistics.modified_tables += 1,
            }
            tally(&mut breakdown, table.kind);

            if table.kind == DiffType::Modified {
                for cell in &table.cell_changes {
                    if cell.kind != DiffType::Modified {
                        continue;
                    }
                    if let (Some(before), Some(after)) = (&cell.before, &cell.after) {
                        self.record_numbers(path, TABLE_SUFFIX, before, after);
                    }
                }
            }
        }

        if breakdown.total() > 0 {
            self.sections.push(TopChangedSection {
                section_id: section.section_id.clone(),
                section_name: section.section_title.clone(),
                total_change_count: breakdown.total(),
                change_breakdown: breakdown,
            });
        }

        for child in &section.subsections {
            let child_path = format!("{}/{}", path, child.section_title);
            self.visit(child, &child_path);
        }
    }

    fn record_numbers(&mut self, path: &str, suffix: &str, before: &str, after: &str) {
        for (old, new, change_type) in changed_numbers(before, after) {
            self.key_changes.push(KeyNumberChange {
                location: format!("{} - {}", path, suffix),
                old_value: old.to_string(),
                new_value: new.to_string(),
                change_type,
            });
        }
    }
}

fn tally(breakdown: &mut ChangeBreakdown, kind: DiffType) {
    match kind {
        DiffType::Added => breakdown.added += 1,
        DiffType::Deleted => breakdown.deleted += 1,
        DiffType::Modified => breakdown.modified += 1,
    }
}
