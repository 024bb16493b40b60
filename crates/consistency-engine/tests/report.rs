use consistency_engine::rules::{
    BALANCE_MISMATCH, CROSS_YEAR_MISMATCH, DISPUTE_TOTAL_MISMATCH, HORIZONTAL_SUM_MISMATCH,
    NARRATIVE_TABLE_MISMATCH,
};
use consistency_engine::ConsistencyEngine;
use pretty_assertions::assert_eq;
use report_types::{DisclosureTables, Severity, StructuredDocument};

const TABLES_2022: &str = r#"{
  "yearLabel": "2022",
  "applications": {
    "naturalPerson": {
      "newReceived": 80, "carriedOver": 5,
      "results": { "granted": 60, "partialGrant": 5, "denied": { "stateSecret": 3 },
                   "unableToProvide": { "noInfo": 10 }, "totalProcessed": 78, "carriedForward": 7 }
    },
    "legalPerson": {
      "commercial": { "newReceived": 20, "carriedOver": 1,
        "results": { "granted": 18, "totalProcessed": 20, "carriedForward": 1 } }
    },
    "total": {
      "newReceived": 100, "carriedOver": 6,
      "results": { "granted": 78, "partialGrant": 5, "denied": { "stateSecret": 3 },
                   "unableToProvide": { "noInfo": 10 }, "other": { "otherReasons": 2 },
                   "totalProcessed": 98, "carriedForward": 8 }
    }
  }
}"#;

const TABLES_2023: &str = r#"{
  "yearLabel": "2023",
  "applications": {
    "naturalPerson": {
      "newReceived": "50", "carriedOver": "6",
      "results": { "granted": 40, "partialGrant": "-", "unableToProvide": { "noInfo": 11 },
                   "totalProcessed": 51, "carriedForward": 5 }
    },
    "legalPerson": {
      "commercial": { "newReceived": 20 },
      "research": { "newReceived": 15 },
      "social": { "newReceived": "5" }
    },
    "total": {
      "newReceived": 100, "carriedOver": 6,
      "results": { "granted": 40, "partialGrant": null, "unableToProvide": { "noInfo": 11 },
                   "totalProcessed": 51, "carriedForward": 55 }
    }
  },
  "disputes": {
    "review": { "maintain": 2, "correct": 1, "other": 0, "unfinished": 1, "total": 4 },
    "litigationDirect": { "maintain": 1, "correct": 0, "other": 0, "unfinished": 0, "total": 2 },
    "litigationPostReview": { "maintain": 1, "total": 1 }
  }
}"#;

const NARRATIVE_2023: &str = r#"{
  "documentId": "doc-2023",
  "assetId": "asset-2023",
  "title": "2023年政府信息公开工作年度报告",
  "sections": [
    {
      "id": "s1", "level": 1, "title": "一、总体情况", "tables": [], "subsections": [],
      "content": [
        { "id": "p0", "text": "本年新收政府信息公开申请100件，上年结转6件。", "type": "normal" },
        { "id": "p1", "text": "全年发生行政复议4件，行政诉讼2件。", "type": "normal" }
      ]
    }
  ],
  "metadata": {}
}"#;

#[test]
fn test_full_report_validation() {
    let current = DisclosureTables::from_json(TABLES_2023).unwrap();
    let previous = DisclosureTables::from_json(TABLES_2022).unwrap();
    let document = StructuredDocument::from_json(NARRATIVE_2023).unwrap();

    let result = ConsistencyEngine::new().validate_report(&current, Some(&previous), Some(&document));

    let codes: Vec<_> = result.issues.iter().map(|i| i.code.as_str()).collect();
    assert_eq!(
        codes,
        vec![
            HORIZONTAL_SUM_MISMATCH,
            HORIZONTAL_SUM_MISMATCH,
            DISPUTE_TOTAL_MISMATCH,
            CROSS_YEAR_MISMATCH,
            NARRATIVE_TABLE_MISMATCH,
        ]
    );

    let horizontal = &result.issues[0];
    assert_eq!(horizontal.location, "表三 - newReceived");
    assert_eq!(horizontal.related_values.expected, 90.0);
    assert_eq!(horizontal.related_values.actual, 100.0);

    assert_eq!(result.issues[1].location, "表三 - results.carriedForward");
    assert_eq!(result.issues[2].location, "表四 - litigationDirect");

    let cross_year = &result.issues[3];
    assert_eq!(cross_year.severity, Severity::Warning);
    assert_eq!(cross_year.related_values.expected, 8.0);
    assert_eq!(cross_year.related_values.actual, 6.0);

    assert_eq!(result.issues[4].location, "正文 - 行政诉讼总计");
    assert_eq!(result.score, 50);
    assert!(!codes.contains(&BALANCE_MISMATCH));
}

#[test]
fn test_fingerprints_are_stable_across_runs() {
    let current = DisclosureTables::from_json(TABLES_2023).unwrap();
    let engine = ConsistencyEngine::new();
    let first = engine.validate_report(&current, None, None);
    let second = engine.validate_report(&current, None, None);

    let fingerprints: Vec<_> = first.issues.iter().map(|i| i.fingerprint.clone()).collect();
    assert_eq!(
        fingerprints,
        second.issues.iter().map(|i| i.fingerprint.clone()).collect::<Vec<_>>()
    );
    assert!(fingerprints.iter().all(|f| f.len() == 16));
}

#[test]
fn test_result_serializes_lowercase_severity() {
    let current = DisclosureTables::from_json(TABLES_2023).unwrap();
    let result = ConsistencyEngine::new().validate_report(&current, None, None);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["issues"][0]["severity"], "error");
    assert_eq!(json["issues"][0]["relatedValues"]["expected"], 90.0);
}
