//! Wire types produced by the grading service.
//!
//! Field names mirror the grader's JSON response exactly. Everything here is
//! consumed read-only: the rendering layer never mutates a result.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Graded outcome of one simplification request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeResult {
    /// Overall acceptance verdict
    pub accepted: bool,
    /// Whether the soft-test thresholds were relaxed (display only)
    #[serde(default, deserialize_with = "null_as_false")]
    pub soft_relaxed: bool,
    /// Free-text warning from the semantic reviewer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_alert: Option<String>,
    /// Hard constraint report; omitted when no simplification was needed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_hard_tests: Option<TestReport>,
    /// Soft constraint report; omitted when no simplification was needed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_soft_tests: Option<TestReport>,
    /// Simplification strategy chosen by the grader
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    /// Level estimated for the original text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_cefr: Option<String>,
    /// Level the simplification was aiming for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_cefr: Option<String>,
    /// The simplified text this result grades
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl GradeResult {
    /// The semantic alert, if there is one worth showing.
    ///
    /// An empty string counts as no alert.
    #[must_use]
    pub fn semantic_alert(&self) -> Option<&str> {
        self.semantic_alert.as_deref().filter(|alert| !alert.is_empty())
    }
}

/// Outcome of one family of automated tests (hard or soft).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestReport {
    pub accepted: bool,
    /// Names of passing tests, in display order
    #[serde(default)]
    pub passed_tests: Vec<String>,
    /// Failing tests keyed by name; the detail values are opaque
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_tests: Option<FailedTests>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tests: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_required: Option<f64>,
}

impl TestReport {
    /// Number of passing tests as listed.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.passed_tests.len()
    }

    /// Failed test names, in the mapping's order.
    #[must_use]
    pub fn failed_test_names(&self) -> Vec<&str> {
        failed_test_names(self.failed_tests.as_ref())
    }

    /// Opaque failure detail for a raw test name.
    #[must_use]
    pub fn failure_detail(&self, name: &str) -> Option<&Value> {
        match self.failed_tests.as_ref()? {
            FailedTests::Detailed(map) => map.get(name),
            FailedTests::Malformed(_) => None,
        }
    }
}

/// The `failed_tests` field as it arrives on the wire.
///
/// The grader normally sends an object keyed by test name. Any other JSON
/// value is kept as `Malformed` so that loading never fails on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FailedTests {
    Detailed(IndexMap<String, Value>),
    Malformed(Value),
}

impl FailedTests {
    /// Whether this is a well-formed mapping.
    #[must_use]
    pub fn is_mapping(&self) -> bool {
        matches!(self, Self::Detailed(_))
    }
}

/// Extract failed test names from an optional `failed_tests` value.
///
/// Absent and non-mapping values yield an empty list. This is the fallback
/// branch for backend anomalies, not an error path.
#[must_use]
pub fn failed_test_names(failed: Option<&FailedTests>) -> Vec<&str> {
    match failed {
        Some(FailedTests::Detailed(map)) => map.keys().map(String::as_str).collect(),
        Some(FailedTests::Malformed(value)) => {
            tracing::debug!("ignoring non-mapping failed_tests value: {}", value);
            Vec::new()
        }
        None => Vec::new(),
    }
}

/// Human-readable form of a test name: underscores become spaces.
#[must_use]
pub fn display_test_name(name: &str) -> String {
    name.replace('_', " ")
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
