//! Structured report tree produced by the extraction step
//!
//! Two shapes live here: the `Raw*` types accept whatever the extractor
//! emitted (optional lists may be missing), and the canonical types that every
//! downstream stage consumes. Children are owned `Vec`s, so the tree is
//! acyclic and single-owner by construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Canonical report tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredDocument {
    pub document_id: String,
    pub asset_id: String,
    pub title: String,
    pub sections: Vec<Section>,
    #[serde(default)]
    pub metadata: DocumentMetadata,
}

impl StructuredDocument {
    /// Decode an already-normalized document from JSON
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Visit every section in pre-order
    pub fn walk_sections(&self) -> SectionWalk<'_> {
        SectionWalk {
            stack: self.sections.iter().rev().collect(),
        }
    }
}

/// Pre-order iterator over a section tree
pub struct SectionWalk<'a> {
    stack: Vec<&'a Section>,
}

impl<'a> Iterator for SectionWalk<'a> {
    type Item = &'a Section;

    fn next(&mut self) -> Option<Self::Item> {
        let section = self.stack.pop()?;
        self.stack.extend(section.subsections.iter().rev());
        Some(section)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentMetadata {
    pub total_pages: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_at: Option<DateTime<Utc>>,
    pub parse_version: String,
}

/// A titled node of the report; `level` is 1 for root sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub level: u32,
    pub title: String,
    pub content: Vec<Paragraph>,
    pub tables: Vec<Table>,
    pub subsections: Vec<Section>,
}

/// Atomic diffable text unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    #[serde(default)]
    pub id: String,
    pub text: String,
    #[serde(rename = "type", default)]
    pub kind: ParagraphKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParagraphKind {
    #[default]
    Normal,
    List,
    Quote,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub rows: Vec<TableRow>,
    pub columns: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
}

impl Table {
    /// Key used to pair tables across versions: the title when present, else the id
    pub fn match_key(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => &self.id,
        }
    }

    /// Cell count of the widest row
    pub fn widest_row(&self) -> usize {
        self.rows.iter().map(|row| row.cells.len()).max().unwrap_or(0)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        self.rows.get(row).and_then(|r| r.cells.get(col))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub row_index: usize,
    /// Schema-derived label of the metric this row reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_label: Option<String>,
    #[serde(default)]
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    #[serde(default)]
    pub row_index: usize,
    #[serde(default)]
    pub col_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col_key: Option<String>,
    /// Schema-derived column name, e.g. "国家秘密"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col_name: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_header: Option<bool>,
}

// ============================================================================
// Raw extractor output
// ============================================================================

/// Extractor output before normalization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument {
    #[serde(default)]
    pub document_id: String,
    #[serde(default)]
    pub asset_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sections: Vec<RawSection>,
    #[serde(default)]
    pub metadata: Option<DocumentMetadata>,
}

impl RawDocument {
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSection {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: Option<Vec<Paragraph>>,
    #[serde(default)]
    pub tables: Option<Vec<RawTable>>,
    #[serde(default)]
    pub subsections: Option<Vec<RawSection>>,
}

/// A table as extracted; `rows` is mandatory, `columns` may be inferred
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTable {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub rows: Vec<TableRow>,
    #[serde(default)]
    pub columns: Option<usize>,
    #[serde(default)]
    pub page_number: Option<u32>,
}
