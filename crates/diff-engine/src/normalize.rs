//! Canonicalization of extractor output
//!
//! `normalize` only fills in what the extractor left out; it never reorders
//! or renames. `validate_structure` reports shape defects without rejecting
//! the document, so comparison can still proceed on an imperfect tree.

use report_types::{
    RawDocument, RawSection, RawTable, Section, StructureReport, StructuredDocument, Table,
};

/// Fill in absent lists and metadata, producing the canonical tree
pub fn normalize(raw: RawDocument) -> StructuredDocument {
    let document = StructuredDocument {
        document_id: raw.document_id,
        asset_id: raw.asset_id,
        title: raw.title,
        sections: raw.sections.into_iter().map(normalize_section).collect(),
        metadata: raw.metadata.unwrap_or_default(),
    };

    tracing::debug!(
        document_id = %document.document_id,
        sections = document.walk_sections().count(),
        "normalized document"
    );

    document
}

fn normalize_section(raw: RawSection) -> Section {
    Section {
        id: raw.id,
        level: raw.level,
        title: raw.title,
        content: raw.content.unwrap_or_default(),
        tables: raw
            .tables
            .unwrap_or_default()
            .into_iter()
            .map(normalize_table)
            .collect(),
        subsections: raw
            .subsections
            .unwrap_or_default()
            .into_iter()
            .map(normalize_section)
            .collect(),
    }
}

fn normalize_table(raw: RawTable) -> Table {
    let widest = raw.rows.iter().map(|row| row.cells.len()).max().unwrap_or(0);
    Table {
        id: raw.id,
        title: raw.title,
        columns: raw.columns.unwrap_or(widest),
        rows: raw.rows,
        page_number: raw.page_number,
    }
}

/// Check ids, titles and level/depth agreement across the whole tree
pub fn validate_structure(document: &StructuredDocument) -> StructureReport {
    let mut issues = Vec::new();

    for (index, section) in document.sections.iter().enumerate() {
        check_section(section, 1, &format!("sections[{}]", index), &mut issues);
    }

    if !issues.is_empty() {
        tracing::warn!(
            document_id = %document.document_id,
            issues = issues.len(),
            "document structure has defects"
        );
    }

    StructureReport {
        valid: issues.is_empty(),
        issues,
    }
}

fn check_section(section: &Section, depth: u32, path: &str, issues: &mut Vec<String>) {
    if section.id.trim().is_empty() {
        issues.push(format!("{}: section is missing an id", path));
    }
    if section.title.trim().is_empty() {
        issues.push(format!("{}: section is missing a title", path));
    }
    if section.level != depth {
        issues.push(format!(
            "{}: section '{}' has level {} but sits at depth {}",
            path, section.title, section.level, depth
        ));
    }

    for (index, table) in section.tables.iter().enumerate() {
        if table.id.trim().is_empty() {
            issues.push(format!("{}.tables[{}]: table is missing an id", path, index));
        }
    }

    for (index, child) in section.subsections.iter().enumerate() {
        check_section(
            child,
            depth + 1,
            &format!("{}.subsections[{}]", path, index),
            issues,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use report_types::{TableCell, TableRow};

    fn raw_section(id: &str, level: u32, title: &str) -> RawSection {
        RawSection {
            id: id.to_string(),
            level,
            title: title.to_string(),
            ..Default::default()
        }
    }

    fn row(cells: usize) -> TableRow {
        TableRow {
            id: String::new(),
            row_index: 0,
            row_label: None,
            cells: (0..cells)
                .map(|col| TableCell {
                    row_index: 0,
                    col_index: col,
                    col_key: None,
                    col_name: None,
                    content: col.to_string(),
                    is_header: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_normalize_defaults_missing_lists() {
        let mut parent = raw_section("s1", 1, "一、总体情况");
        parent.subsections = Some(vec![raw_section("s1.1", 2, "（一）主动公开")]);
        let raw = RawDocument {
            document_id: "doc".to_string(),
            sections: vec![parent],
            ..Default::default()
        };

        let doc = normalize(raw);
        assert_eq!(doc.sections[0].content.len(), 0);
        assert_eq!(doc.sections[0].tables.len(), 0);
        assert_eq!(doc.sections[0].subsections[0].title, "（一）主动公开");
        assert!(doc.sections[0].subsections[0].subsections.is_empty());
    }

    #[test]
    fn test_normalize_infers_missing_column_count() {
        let mut section = raw_section("s1", 1, "表格");
        section.tables = Some(vec![RawTable {
            id: "t1".to_string(),
            title: None,
            rows: vec![row(2), row(4)],
            columns: None,
            page_number: None,
        }]);
        let doc = normalize(RawDocument {
            sections: vec![section],
            ..Default::default()
        });
        assert_eq!(doc.sections[0].tables[0].columns, 4);
    }

    #[test]
    fn test_normalize_keeps_order_and_names() {
        let raw = RawDocument {
            sections: vec![raw_section("b", 1, "B"), raw_section("a", 1, "A")],
            ..Default::default()
        };
        let titles: Vec<_> = normalize(raw)
            .sections
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, vec!["B".to_string(), "A".to_string()]);
    }

    #[test]
    fn test_validate_structure_accepts_well_formed_tree() {
        let mut parent = raw_section("s1", 1, "一");
        parent.subsections = Some(vec![raw_section("s1.1", 2, "（一）")]);
        let doc = normalize(RawDocument {
            sections: vec![parent],
            ..Default::default()
        });
        let report = validate_structure(&doc);
        assert!(report.valid);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_validate_structure_reports_defects() {
        let mut parent = raw_section("", 1, "一");
        parent.subsections = Some(vec![raw_section("s1.1", 3, "")]);
        parent.tables = Some(vec![RawTable {
            id: String::new(),
            title: None,
            rows: vec![],
            columns: Some(0),
            page_number: None,
        }]);
        let doc = normalize(RawDocument {
            sections: vec![parent],
            ..Default::default()
        });

        let report = validate_structure(&doc);
        assert!(!report.valid);
        assert_eq!(report.issues.len(), 4);
        assert!(report.issues[0].contains("missing an id"));
        assert!(report.issues.iter().any(|i| i.contains("level 3 but sits at depth 2")));
        assert!(report.issues.iter().any(|i| i.contains("tables[0]")));
    }
}
