use std::path::PathBuf;

use ig_core::ImGuardError;
use ig_tool::{assert_case, find_case_files};

use crate::{map_cli_case, resolve_cases_dir, CheckArgs};

#[derive(Debug)]
pub(crate) struct CaseOutcome {
    pub(crate) path: PathBuf,
    pub(crate) failure: Option<ImGuardError>,
}

pub(crate) fn check_cases(args: &CheckArgs) -> Result<Vec<CaseOutcome>, ImGuardError> {
    let cases_dir = resolve_cases_dir(&args.cases_dir)?;
    let cases = find_case_files(&cases_dir).map_err(map_cli_case)?;

    let mut outcomes = Vec::with_capacity(cases.len());
    for path in cases {
        let failure = assert_case(&path).err().map(map_cli_case);
        match &failure {
            Some(error) => log::warn!("case {} failed: {}", path.display(), error),
            None => log::debug!("case {} passed", path.display()),
        }
        outcomes.push(CaseOutcome { path, failure });
    }
    Ok(outcomes)
}

pub(crate) fn render_check(outcomes: &[CaseOutcome]) -> Vec<String> {
    let failed = outcomes
        .iter()
        .filter(|outcome| outcome.failure.is_some())
        .count();
    let mut lines = vec![if failed == 0 {
        "RESULT:OK".to_string()
    } else {
        "RESULT:FAIL".to_string()
    }];

    for outcome in outcomes {
        match &outcome.failure {
            None => lines.push(format!("CASE:PASS|{}", outcome.path.display())),
            Some(error) => {
                lines.push(format!("CASE:FAIL|{}", outcome.path.display()));
                lines.push(format!("CASE_ERROR:{}", error));
            }
        }
    }
    lines.push(format!(
        "SUMMARY:{} passed, {} failed",
        outcomes.len() - failed,
        failed
    ));
    lines
}
