//! Numeric breakdown tables of an annual information-disclosure report
//!
//! The request-handling table breaks every figure down by applicant type
//! (natural person, five legal-person categories, total) and by result
//! bucket. The dispute table counts administrative review and litigation
//! outcomes. Every number is lenient on input: missing, `null` and
//! placeholder cells read as zero.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ReportError;

/// Placeholder strings extractors emit for empty cells
const EMPTY_MARKERS: &[&str] = &["", "-", "—", "/", "N/A"];

/// A table figure; absent or unreadable input is zero
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Count(pub f64);

impl Count {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Count {
    fn from(value: f64) -> Self {
        Count(value)
    }
}

impl From<u32> for Count {
    fn from(value: u32) -> Self {
        Count(f64::from(value))
    }
}

impl Serialize for Count {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Count {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Count(coerce_number(&value)))
    }
}

/// Read a JSON cell as a number, treating anything unreadable as zero
pub fn coerce_number(value: &serde_json::Value) -> f64 {
    match value {
        serde_json::Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
        serde_json::Value::String(s) => parse_count(s).unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Rewrite full-width digits (U+FF10..U+FF19) as ASCII digits
pub fn to_ascii_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
            _ => c,
        })
        .collect()
}

/// Parse a textual cell such as `"1,234"` or `"１２０"`; placeholders yield `None`
pub fn parse_count(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if EMPTY_MARKERS.contains(&trimmed) {
        return None;
    }
    to_ascii_digits(trimmed)
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// One reporting year's tables as handed to the validator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisclosureTables {
    pub year_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applications: Option<ApplicationStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disputes: Option<DisputeStats>,
}

impl DisclosureTables {
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(json)?)
    }
}

// ============================================================================
// Request handling table
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationStats {
    pub natural_person: EntityStats,
    pub legal_person: LegalPersonStats,
    pub total: EntityStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegalPersonStats {
    pub commercial: EntityStats,
    pub research: EntityStats,
    pub social: EntityStats,
    pub legal: EntityStats,
    pub other: EntityStats,
}

impl LegalPersonStats {
    pub fn categories(&self) -> [(&'static str, &EntityStats); 5] {
        [
            ("commercial", &self.commercial),
            ("research", &self.research),
            ("social", &self.social),
            ("legal", &self.legal),
            ("other", &self.other),
        ]
    }
}

/// One applicant column of the request table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntityStats {
    pub new_received: Count,
    pub carried_over: Count,
    pub results: ResultStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResultStats {
    pub granted: Count,
    pub partial_grant: Count,
    pub denied: DeniedReasons,
    pub unable_to_provide: UnableReasons,
    pub not_processed: NotProcessedReasons,
    pub other: OtherReasons,
    pub total_processed: Count,
    pub carried_forward: Count,
}

impl ResultStats {
    /// Sum of every result-bucket leaf
    pub fn bucket_sum(&self) -> f64 {
        self.granted.0
            + self.partial_grant.0
            + self.denied.sum()
            + self.unable_to_provide.sum()
            + self.not_processed.sum()
            + self.other.sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeniedReasons {
    pub state_secret: Count,
    pub law_forbidden: Count,
    pub safety_stability: Count,
    pub third_party_rights: Count,
    pub internal_affairs: Count,
    pub process_info: Count,
    pub enforcement_case: Count,
    pub admin_query: Count,
}

impl DeniedReasons {
    pub fn sum(&self) -> f64 {
        [
            self.state_secret,
            self.law_forbidden,
            self.safety_stability,
            self.third_party_rights,
            self.internal_affairs,
            self.process_info,
            self.enforcement_case,
            self.admin_query,
        ]
        .iter()
        .map(|c| c.0)
        .sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnableReasons {
    pub no_info: Count,
    pub need_creation: Count,
    pub unclear: Count,
}

impl UnableReasons {
    pub fn sum(&self) -> f64 {
        self.no_info.0 + self.need_creation.0 + self.unclear.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotProcessedReasons {
    pub complaint: Count,
    pub repeat: Count,
    pub publication: Count,
    pub massive_requests: Count,
    pub confirm_info: Count,
}

impl NotProcessedReasons {
    pub fn sum(&self) -> f64 {
        self.complaint.0
            + self.repeat.0
            + self.publication.0
            + self.massive_requests.0
            + self.confirm_info.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OtherReasons {
    pub overdue_correction: Count,
    pub overdue_fee: Count,
    pub other_reasons: Count,
}

impl OtherReasons {
    pub fn sum(&self) -> f64 {
        self.overdue_correction.0 + self.overdue_fee.0 + self.other_reasons.0
    }
}

// ============================================================================
// Administrative review and litigation table
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisputeStats {
    pub review: DisputeCategory,
    pub litigation_direct: DisputeCategory,
    pub litigation_post_review: DisputeCategory,
}

impl DisputeStats {
    pub fn categories(&self) -> [(&'static str, &DisputeCategory); 3] {
        [
            ("review", &self.review),
            ("litigationDirect", &self.litigation_direct),
            ("litigationPostReview", &self.litigation_post_review),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisputeCategory {
    pub maintain: Count,
    pub correct: Count,
    pub other: Count,
    pub unfinished: Count,
    pub total: Count,
}

impl DisputeCategory {
    pub fn outcome_sum(&self) -> f64 {
        self.maintain.0 + self.correct.0 + self.other.0 + self.unfinished.0
    }
}
