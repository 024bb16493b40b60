//! Section-tree matching
//!
//! Sections pair by exact title within one tree level. Paired sections
//! recurse into paragraphs, tables and subsections; unpaired ones are
//! reported as whole added or deleted subtrees.

use report_types::{DiffResult, DiffSection, DiffType, Section, StructuredDocument};

use crate::options::DiffOptions;
use crate::pairing::pair_by_key;
use crate::paragraphs::{self, diff_paragraphs};
use crate::tables::{diff_tables, whole_table};

/// Diff two normalized documents
#[tracing::instrument(skip_all, fields(a = %doc_a.document_id, b = %doc_b.document_id))]
pub fn diff_documents(
    doc_a: &StructuredDocument,
    doc_b: &StructuredDocument,
    options: &DiffOptions,
) -> DiffResult {
    let result = DiffResult {
        sections: diff_section_lists(&doc_a.sections, &doc_b.sections, options),
    };

    tracing::debug!(sections = result.sections.len(), "diffed documents");
    result
}

/// Diff the sections of one tree level; A order first, then B-only sections
pub fn diff_section_lists(
    sections_a: &[Section],
    sections_b: &[Section],
    options: &DiffOptions,
) -> Vec<DiffSection> {
    let pairing = pair_by_key(sections_a, sections_b, |s| s.title.as_str());
    let mut diffs = Vec::with_capacity(pairing.pairs.len() + pairing.unmatched_b.len());

    for (idx_a, idx_b) in pairing.pairs {
        let section_a = &sections_a[idx_a];
        diffs.push(match idx_b {
            Some(idx_b) => diff_section(section_a, &sections_b[idx_b], options),
            None => whole_section(section_a, DiffType::Deleted),
        });
    }

    for idx_b in pairing.unmatched_b {
        diffs.push(whole_section(&sections_b[idx_b], DiffType::Added));
    }

    diffs
}

/// Diff a paired section: paragraphs, then tables, then subsections
pub fn diff_section(section_a: &Section, section_b: &Section, options: &DiffOptions) -> DiffSection {
    DiffSection {
        section_id: section_a.id.clone(),
        section_title: section_a.title.clone(),
        level: section_a.level,
        paragraphs: diff_paragraphs(&section_a.content, &section_b.content, options),
        tables: diff_tables(&section_a.tables, &section_b.tables),
        subsections: diff_section_lists(&section_a.subsections, &section_b.subsections, options),
    }
}

/// Report a section present on one side only, with every descendant
pub fn whole_section(section: &Section, kind: DiffType) -> DiffSection {
    let paragraphs = section
        .content
        .iter()
        .enumerate()
        .map(|(idx, paragraph)| match kind {
            DiffType::Added => paragraphs::added(idx, paragraph),
            _ => paragraphs::deleted(idx, paragraph),
        })
        .collect();

    DiffSection {
        section_id: section.id.clone(),
        section_title: section.title.clone(),
        level: section.level,
        paragraphs,
        tables: section
            .tables
            .iter()
            .map(|table| whole_table(table, kind))
            .collect(),
        subsections: section
            .subsections
            .iter()
            .map(|child| whole_section(child, kind))
            .collect(),
    }
}
