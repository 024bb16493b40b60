//! Shared data model for annual report comparison
//!
//! The extractor produces [`RawDocument`] trees, the normalizer turns them
//! into [`StructuredDocument`]s, the differencer emits a [`DiffResult`], the
//! aggregator a [`DiffSummary`], and the arithmetic validator a
//! [`ValidationResult`] over [`DisclosureTables`].

pub mod diff;
pub mod disclosure;
pub mod document;
pub mod error;
pub mod summary;
pub mod validation;

pub use diff::{AlignmentQuality, CellChange, DiffParagraph, DiffResult, DiffSection, DiffTable, DiffType};
pub use disclosure::{
    ApplicationStats, Count, DisclosureTables, DisputeCategory, DisputeStats, EntityStats,
    LegalPersonStats, ResultStats,
};
pub use document::{
    DocumentMetadata, Paragraph, ParagraphKind, RawDocument, RawSection, RawTable, Section,
    StructuredDocument, Table, TableCell, TableRow,
};
pub use error::ReportError;
pub use summary::{
    ChangeBreakdown, DiffStatistics, DiffSummary, KeyNumberChange, NumberChangeType,
    OverallAssessment, TopChangedSection,
};
pub use validation::{
    RelatedValues, Severity, StructureReport, ValidationIssue, ValidationResult,
};
