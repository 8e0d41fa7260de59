use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{IgToolError, ScopeCase, CASE_FILE_SUFFIX, TESTCASE_SCHEMA_V1};

/// Every `*.case.json` under `cases_dir`, in path order.
pub fn find_case_files(cases_dir: &Path) -> Result<Vec<PathBuf>, IgToolError> {
    let mut cases = Vec::new();

    for entry in WalkDir::new(cases_dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().to_string_lossy().ends_with(CASE_FILE_SUFFIX) {
            cases.push(entry.into_path());
        }
    }

    if cases.is_empty() {
        return Err(IgToolError::CasesEmpty {
            path: cases_dir.to_path_buf(),
        });
    }

    Ok(cases)
}

pub fn read_script(script_path: &Path) -> Result<String, IgToolError> {
    fs::read_to_string(script_path).map_err(|source| IgToolError::ReadFile {
        path: script_path.to_path_buf(),
        source,
    })
}

pub fn read_test_case(case_path: &Path) -> Result<ScopeCase, IgToolError> {
    let raw = fs::read_to_string(case_path).map_err(|source| IgToolError::ReadFile {
        path: case_path.to_path_buf(),
        source,
    })?;
    let parsed: ScopeCase =
        serde_json::from_str(&raw).map_err(|source| IgToolError::ParseCase {
            path: case_path.to_path_buf(),
            source,
        })?;

    if parsed.schema_version != TESTCASE_SCHEMA_V1 {
        return Err(IgToolError::InvalidSchemaVersion {
            expected: TESTCASE_SCHEMA_V1.to_string(),
            found: parsed.schema_version,
        });
    }

    Ok(parsed)
}
