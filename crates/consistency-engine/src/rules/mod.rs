//! Arithmetic invariants of the disclosure tables
//!
//! Each rule is a free function returning the issues it found; an empty
//! vector means the invariant holds.

pub mod balance;
pub mod cross_year;
pub mod disputes;
pub mod horizontal;
pub mod narrative;
pub mod vertical;

/// Issue codes
pub const HORIZONTAL_SUM_MISMATCH: &str = "HORIZONTAL_SUM_MISMATCH";
pub const VERTICAL_SUM_MISMATCH: &str = "VERTICAL_SUM_MISMATCH";
pub const BALANCE_MISMATCH: &str = "BALANCE_MISMATCH";
pub const CROSS_YEAR_MISMATCH: &str = "CROSS_YEAR_MISMATCH";
pub const DISPUTE_TOTAL_MISMATCH: &str = "DISPUTE_TOTAL_MISMATCH";
pub const NARRATIVE_TABLE_MISMATCH: &str = "NARRATIVE_TABLE_MISMATCH";

/// Request-handling table label used in issue locations
pub(crate) const APPLICATION_TABLE: &str = "表三";
/// Review and litigation table label used in issue locations
pub(crate) const DISPUTE_TABLE: &str = "表四";

const TOLERANCE: f64 = 1e-6;

/// Figures are counts, but decimal inputs must not fail on rounding noise
pub(crate) fn same_figure(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}
