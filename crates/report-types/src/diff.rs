//! Diff tree mirroring the section tree of the compared documents

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffType {
    Added,
    Deleted,
    Modified,
}

/// Confidence that two matched tables share the same grid
///
/// `Failed` is part of the exchange format but no current comparison path
/// produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentQuality {
    Perfect,
    Partial,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    pub sections: Vec<DiffSection>,
}

impl DiffResult {
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(DiffSection::is_unchanged)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffSection {
    pub section_id: String,
    pub section_title: String,
    pub level: u32,
    pub paragraphs: Vec<DiffParagraph>,
    pub tables: Vec<DiffTable>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subsections: Vec<DiffSection>,
}

impl DiffSection {
    /// Number of changed paragraphs and tables at this node, excluding descendants
    pub fn own_change_count(&self) -> usize {
        self.paragraphs.len() + self.tables.len()
    }

    /// True when neither this node nor any descendant carries a change
    pub fn is_unchanged(&self) -> bool {
        self.own_change_count() == 0 && self.subsections.iter().all(DiffSection::is_unchanged)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffParagraph {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: DiffType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    pub anchor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffTable {
    pub table_id: String,
    #[serde(rename = "type")]
    pub kind: DiffType,
    pub alignment_quality: AlignmentQuality,
    pub cell_changes: Vec<CellChange>,
}

/// One differing grid coordinate, annotated with the schema labels of the cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellChange {
    pub row_index: usize,
    pub col_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: DiffType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

impl CellChange {
    /// Human-readable coordinate, preferring schema labels over grid indices
    pub fn describe_location(&self) -> String {
        match (&self.row_label, &self.col_name) {
            (Some(row), Some(col)) => format!("{} / {}", row, col),
            (Some(row), None) => format!("{} [{}]", row, self.col_index),
            (None, Some(col)) => format!("[{}] {}", self.row_index, col),
            (None, None) => format!("[{}][{}]", self.row_index, self.col_index),
        }
    }
}
