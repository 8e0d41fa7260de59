mod case;
mod runner;
mod source;

pub use case::{ExpectedFrame, ScopeCase, CASE_FILE_SUFFIX, TESTCASE_SCHEMA_V1};
pub use runner::{assert_case, run_case, RunReport};
pub use source::{find_case_files, read_script, read_test_case};

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IgToolError {
    #[error("Failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse testcase {path}: {source}")]
    ParseCase {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid testcase schema version \"{found}\", expected \"{expected}\".")]
    InvalidSchemaVersion { expected: String, found: String },
    #[error("No *.case.json files under {path}.")]
    CasesEmpty { path: PathBuf },
    #[error("Unknown begin operation \"{name}\" in beginResults.")]
    UnknownBeginOp { name: String },
    #[error("Engine error: {0}")]
    Engine(#[from] ig_core::ImGuardError),
    #[error("Expected frame count {expected}, actual {actual}.")]
    FrameCountMismatch { expected: usize, actual: usize },
    #[error("Frame {frame_index}: expected script error {expected}, actual {actual}.")]
    ScriptErrorMismatch {
        frame_index: u64,
        expected: bool,
        actual: String,
    },
    #[error("Frame {frame_index}: expected event count {expected}, actual {actual}. observed={observed}")]
    EventCountMismatch {
        frame_index: u64,
        expected: usize,
        actual: usize,
        observed: String,
    },
    #[error("Frame {frame_index}: event mismatch at index {index}. expected={expected} actual={actual}")]
    EventMismatch {
        frame_index: u64,
        index: usize,
        expected: String,
        actual: String,
    },
    #[error("Native nesting violated: {observed}")]
    NativeViolations { observed: String },
    #[error("Failed to serialize value for diff: {0}")]
    EventSerialize(serde_json::Error),
}
