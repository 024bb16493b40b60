use serde::{Deserialize, Serialize};

/// Text normalization applied before paragraphs are aligned
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Collapse whitespace runs to a single space and trim
    pub ignore_whitespace: bool,
    pub ignore_case: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryOptions {
    pub top_sections_count: usize,
    pub max_key_number_changes: usize,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            top_sections_count: 5,
            max_key_number_changes: 10,
        }
    }
}
