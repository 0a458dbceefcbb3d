//! Property-based tests for result loading and report derivation.
//!
//! Ensures derivation handles arbitrary input without panicking, and that
//! the display rules hold across random inputs.

use indexmap::IndexMap;
use lexigrade::model::{display_test_name, FailedTests, TestReport};
use lexigrade::quality::{format_ratio, QcSection, SectionKind, TestOutcome};
use lexigrade::{parse_grade_result_str, QcReport};
use proptest::prelude::*;

fn test_name() -> impl Strategy<Value = String> {
    "[a-z][a-z_]{0,20}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn display_name_is_idempotent(name in "\\PC{0,60}") {
        let once = display_test_name(&name);
        prop_assert_eq!(display_test_name(&once), once.clone());
        prop_assert!(!once.contains('_'));
        prop_assert_eq!(once.chars().count(), name.chars().count());
    }

    #[test]
    fn failed_items_match_mapping_keys(
        names in prop::collection::vec(test_name(), 0..10),
        passed in prop::collection::vec(test_name(), 0..10),
    ) {
        let failed: IndexMap<String, serde_json::Value> = names
            .iter()
            .map(|n| (n.clone(), serde_json::json!({})))
            .collect();
        let expected: Vec<String> = failed.keys().map(|k| display_test_name(k)).collect();

        let report = TestReport {
            accepted: false,
            passed_tests: passed.clone(),
            failed_tests: Some(FailedTests::Detailed(failed)),
            ..TestReport::default()
        };
        let section = QcSection::from_report(SectionKind::Hard, &report);

        let failed_labels: Vec<String> = section.failed_items().map(|i| i.label.clone()).collect();
        prop_assert_eq!(failed_labels, expected);
        prop_assert_eq!(section.passed_items().count(), passed.len());
        prop_assert_eq!(section.status, Some(TestOutcome::Failed));
    }

    #[test]
    fn ratio_has_two_decimals(ratio in 0.0f64..=1.0) {
        let text = format_ratio(ratio);
        let (_, decimals) = text.split_once('.').expect("decimal point");
        prop_assert_eq!(decimals.len(), 2);
        let parsed: f64 = text.parse().expect("numeric");
        prop_assert!((parsed - ratio).abs() <= 0.005 + f64::EPSILON);
    }

    #[test]
    fn arbitrary_text_fields_never_break_derivation(
        alert in prop::option::of("\\PC{0,80}"),
        strategy in prop::option::of("\\PC{0,20}"),
        original in prop::option::of("[A-C][12]"),
        target in prop::option::of("[A-C][12]"),
        accepted in any::<bool>(),
    ) {
        let json = serde_json::json!({
            "accepted": accepted,
            "semantic_alert": alert,
            "strategy": strategy,
            "original_cefr": original,
            "target_cefr": target,
        });
        let result = parse_grade_result_str(&json.to_string()).expect("valid JSON");
        let report = QcReport::from_result(&result);

        prop_assert_eq!(report.verdict.is_accepted(), accepted);
        prop_assert_eq!(
            report.semantic_alert.is_some(),
            alert.as_deref().is_some_and(|a| !a.is_empty())
        );
        prop_assert_eq!(report.item_count(), 0);
        prop_assert_eq!(report.hard.status_label(), "Not run");
    }
}
