//! Paragraph alignment within a matched section pair

use report_types::{DiffParagraph, DiffType, Paragraph};

use crate::lcs::longest_common_subsequence;
use crate::options::DiffOptions;

/// Align two paragraph lists and emit the non-identical entries
///
/// Output order: modified pairs in alignment order, then deletions in A
/// order, then additions in B order. Identical paragraphs are omitted.
pub fn diff_paragraphs(
    paragraphs_a: &[Paragraph],
    paragraphs_b: &[Paragraph],
    options: &DiffOptions,
) -> Vec<DiffParagraph> {
    let text_a: Vec<String> = paragraphs_a
        .iter()
        .map(|p| normalize_text(&p.text, options))
        .collect();
    let text_b: Vec<String> = paragraphs_b
        .iter()
        .map(|p| normalize_text(&p.text, options))
        .collect();

    let pairs = longest_common_subsequence(&text_a, &text_b);
    let mut matched_a = vec![false; paragraphs_a.len()];
    let mut matched_b = vec![false; paragraphs_b.len()];
    let mut diffs = Vec::new();

    for &(idx_a, idx_b) in &pairs {
        matched_a[idx_a] = true;
        matched_b[idx_b] = true;

        let before = &paragraphs_a[idx_a].text;
        let after = &paragraphs_b[idx_b].text;
        if before != after {
            diffs.push(DiffParagraph {
                id: format!("para_{}_{}", idx_a, idx_b),
                kind: DiffType::Modified,
                before: Some(before.clone()),
                after: Some(after.clone()),
                anchor: anchor(idx_a),
            });
        }
    }

    for (idx, paragraph) in paragraphs_a.iter().enumerate() {
        if !matched_a[idx] {
            diffs.push(deleted(idx, paragraph));
        }
    }

    for (idx, paragraph) in paragraphs_b.iter().enumerate() {
        if !matched_b[idx] {
            diffs.push(added(idx, paragraph));
        }
    }

    diffs
}

pub(crate) fn added(idx: usize, paragraph: &Paragraph) -> DiffParagraph {
    DiffParagraph {
        id: format!("para_add_{}", idx),
        kind: DiffType::Added,
        before: None,
        after: Some(paragraph.text.clone()),
        anchor: anchor(idx),
    }
}

pub(crate) fn deleted(idx: usize, paragraph: &Paragraph) -> DiffParagraph {
    DiffParagraph {
        id: format!("para_del_{}", idx),
        kind: DiffType::Deleted,
        before: Some(paragraph.text.clone()),
        after: None,
        anchor: anchor(idx),
    }
}

fn anchor(idx: usize) -> String {
    format!("para_{}", idx)
}

/// Comparison key for a paragraph under the given options
pub fn normalize_text(text: &str, options: &DiffOptions) -> String {
    let mut normalized = if options.ignore_whitespace {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    } else {
        text.to_string()
    };

    if options.ignore_case {
        normalized = normalized.to_lowercase();
    }

    normalized
}
