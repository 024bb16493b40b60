use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffSummary {
    pub top_changed_sections: Vec<TopChangedSection>,
    pub statistics: DiffStatistics,
    pub key_number_changes: Vec<KeyNumberChange>,
    pub overall_assessment: OverallAssessment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopChangedSection {
    pub section_id: String,
    pub section_name: String,
    pub total_change_count: usize,
    pub change_breakdown: ChangeBreakdown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeBreakdown {
    pub added: usize,
    pub deleted: usize,
    pub modified: usize,
}

impl ChangeBreakdown {
    pub fn total(&self) -> usize {
        self.added + self.deleted + self.modified
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffStatistics {
    pub added_paragraphs: usize,
    pub deleted_paragraphs: usize,
    pub modified_paragraphs: usize,
    pub added_tables: usize,
    pub deleted_tables: usize,
    pub modified_tables: usize,
}

impl DiffStatistics {
    pub fn total_changes(&self) -> usize {
        self.added_paragraphs
            + self.deleted_paragraphs
            + self.modified_paragraphs
            + self.added_tables
            + self.deleted_tables
            + self.modified_tables
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyNumberChange {
    pub location: String,
    pub old_value: String,
    pub new_value: String,
    pub change_type: NumberChangeType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberChangeType {
    Increase,
    Decrease,
    /// Textually different but numerically equal (e.g. "1.0" -> "1"), or not comparable
    Change,
}

/// Qualitative label derived from the total change count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallAssessment {
    NoMaterialDifference,
    Minor,
    Moderate,
    Major,
}

impl OverallAssessment {
    pub const MINOR_LIMIT: usize = 5;
    pub const MODERATE_LIMIT: usize = 20;

    pub fn from_total_changes(total: usize) -> Self {
        match total {
            0 => Self::NoMaterialDifference,
            n if n <= Self::MINOR_LIMIT => Self::Minor,
            n if n <= Self::MODERATE_LIMIT => Self::Moderate,
            _ => Self::Major,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::NoMaterialDifference => "no material difference",
            Self::Minor => "minor",
            Self::Moderate => "moderate",
            Self::Major => "major, recommend full review",
        }
    }
}

impl std::fmt::Display for OverallAssessment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assessment_thresholds() {
        assert_eq!(
            OverallAssessment::from_total_changes(0),
            OverallAssessment::NoMaterialDifference
        );
        assert_eq!(OverallAssessment::from_total_changes(1), OverallAssessment::Minor);
        assert_eq!(OverallAssessment::from_total_changes(5), OverallAssessment::Minor);
        assert_eq!(OverallAssessment::from_total_changes(6), OverallAssessment::Moderate);
        assert_eq!(OverallAssessment::from_total_changes(20), OverallAssessment::Moderate);
        assert_eq!(OverallAssessment::from_total_changes(21), OverallAssessment::Major);
    }

    #[test]
    fn test_statistics_total() {
        let stats = DiffStatistics {
            added_paragraphs: 3,
            deleted_paragraphs: 2,
            modified_tables: 1,
            ..Default::default()
        };
        assert_eq!(stats.total_changes(), 6);
    }
}
