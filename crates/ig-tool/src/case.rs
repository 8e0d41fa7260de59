use std::collections::BTreeMap;

use ig_core::ScopeEvent;
use serde::{Deserialize, Serialize};

pub const TESTCASE_SCHEMA_V1: &str = "ig-tool-case.v1";
pub const CASE_FILE_SUFFIX: &str = ".case.json";

/// One scripted scenario: a rhai script run for a number of frames against a
/// recording backend, plus the scope events each frame must produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeCase {
    pub schema_version: String,
    /// Script path, relative to the case file.
    pub script: String,
    #[serde(default = "default_entry")]
    pub entry: String,
    #[serde(default = "default_frames")]
    pub frames: usize,
    #[serde(default)]
    pub max_operations: Option<u64>,
    /// Answers for conditional begins, consumed in call order. Missing ones
    /// default to `true`.
    #[serde(default)]
    pub begin_results: BTreeMap<String, Vec<bool>>,
    #[serde(default)]
    pub expected_frames: Vec<ExpectedFrame>,
    #[serde(default = "default_true")]
    pub expect_no_native_violations: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedFrame {
    #[serde(default)]
    pub events: Vec<ScopeEvent>,
    #[serde(default)]
    pub script_error: bool,
}

fn default_entry() -> String {
    ig_runtime::DEFAULT_ENTRY_FN.to_string()
}

fn default_frames() -> usize {
    1
}

fn default_true() -> bool {
    true
}
