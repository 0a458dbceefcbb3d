//! Data model for grading results.
//!
//! These types mirror the JSON response of the grading service. They are
//! deserialized once per grading request and then only read.

mod cefr;
mod grade;

pub use cefr::CefrLevel;
pub use grade::{
    display_test_name, failed_test_names, FailedTests, GradeResult, TestReport,
};
