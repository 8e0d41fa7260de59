use std::path::Path;

use ig_api::{create_scripted_ui, CreateScriptedUiOptions};
use ig_core::{BeginOp, FrameReport};
use ig_runtime::{BeginResults, NativeViolation, RecordingBackend};

use crate::source::{read_script, read_test_case};
use crate::{IgToolError, ScopeCase};

#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub frames: Vec<FrameReport>,
    pub violations: Vec<NativeViolation>,
    pub backend_calls: usize,
}

pub fn run_case(case_dir: &Path, case: &ScopeCase) -> Result<RunReport, IgToolError> {
    let script_source = read_script(&case_dir.join(&case.script))?;
    let backend = RecordingBackend::new(begin_results_from_case(case)?);
    let mut ui = create_scripted_ui(CreateScriptedUiOptions {
        script_source,
        entry_fn: Some(case.entry.clone()),
        max_operations: case.max_operations,
        backend: Some(backend),
    })?;

    let frames = ui.run_frames(case.frames);
    let (violations, backend_calls) =
        ui.with_backend(|backend| (backend.violations().to_vec(), backend.calls().len()));
    log::debug!(
        "case script {} ran {} frame(s), {} backend call(s)",
        case.script,
        frames.len(),
        backend_calls
    );

    Ok(RunReport {
        frames,
        violations,
        backend_calls,
    })
}

pub fn assert_case(case_path: &Path) -> Result<RunReport, IgToolError> {
    let case = read_test_case(case_path)?;
    let case_dir = case_path.parent().unwrap_or_else(|| Path::new("."));
    let report = run_case(case_dir, &case)?;

    if case.expect_no_native_violations && !report.violations.is_empty() {
        let observed =
            serde_json::to_string(&report.violations).map_err(IgToolError::EventSerialize)?;
        return Err(IgToolError::NativeViolations { observed });
    }

    if report.frames.len() != case.expected_frames.len() {
        return Err(IgToolError::FrameCountMismatch {
            expected: case.expected_frames.len(),
            actual: report.frames.len(),
        });
    }

    for (expected, actual) in case.expected_frames.iter().zip(report.frames.iter()) {
        if expected.script_error != actual.script_error.is_some() {
            return Err(IgToolError::ScriptErrorMismatch {
                frame_index: actual.frame_index,
                expected: expected.script_error,
                actual: actual
                    .script_error
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "none".to_string()),
            });
        }

        if expected.events.len() != actual.events.len() {
            let observed = serde_json::to_string_pretty(&actual.events)
                .map_err(IgToolError::EventSerialize)?;
            return Err(IgToolError::EventCountMismatch {
                frame_index: actual.frame_index,
                expected: expected.events.len(),
                actual: actual.events.len(),
                observed,
            });
        }

        for (index, (expected, actual_event)) in
            expected.events.iter().zip(actual.events.iter()).enumerate()
        {
            if expected != actual_event {
                let expected =
                    serde_json::to_string(expected).map_err(IgToolError::EventSerialize)?;
                let actual_event =
                    serde_json::to_string(actual_event).map_err(IgToolError::EventSerialize)?;
                return Err(IgToolError::EventMismatch {
                    frame_index: actual.frame_index,
                    index,
                    expected,
                    actual: actual_event,
                });
            }
        }
    }

    Ok(report)
}

fn begin_results_from_case(case: &ScopeCase) -> Result<BeginResults, IgToolError> {
    let mut results = BeginResults::default();
    for (name, answers) in &case.begin_results {
        let op = BeginOp::from_name(name).ok_or_else(|| IgToolError::UnknownBeginOp {
            name: name.clone(),
        })?;
        results = results.queue(op, answers.iter().copied());
    }
    Ok(results)
}

#[cfg(test)]
mod runner_tests {
    use super::*;

    use std::collections::BTreeMap;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use ig_core::{EndOp, ScopeEvent, ScopeKind};

    use crate::{ExpectedFrame, TESTCASE_SCHEMA_V1};

    fn temp_dir(name: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time should move forward")
            .as_nanos();
        std::env::temp_dir().join(format!("ig-tool-runner-{}-{}", name, nanos))
    }

    fn write_file(path: &Path, content: &str) {
        let parent = path.parent().expect("path should have parent");
        fs::create_dir_all(parent).expect("parent dir should be created");
        fs::write(path, content).expect("file should be written");
    }

    fn simple_case(script: &str, expected_frames: Vec<ExpectedFrame>) -> ScopeCase {
        ScopeCase {
            schema_version: TESTCASE_SCHEMA_V1.to_string(),
            script: script.to_string(),
            entry: "update".to_string(),
            frames: expected_frames.len(),
            max_operations: None,
            begin_results: BTreeMap::new(),
            expected_frames,
            expect_no_native_violations: true,
        }
    }

    #[test]
    fn run_case_executes_clean_script() {
        let root = temp_dir("clean");
        write_file(
            &root.join("clean.rhai"),
            r#"fn update() { if Begin("w") { BeginGroup(); EndGroup(); End(); } }"#,
        );

        let case = simple_case("clean.rhai", vec![ExpectedFrame::default(); 2]);
        let report = run_case(&root, &case).expect("run should pass");
        assert_eq!(report.frames.len(), 2);
        assert!(report.frames.iter().all(FrameReport::is_clean));
        assert!(report.violations.is_empty());
        assert!(report.backend_calls > 0);
    }

    #[test]
    fn run_case_feeds_begin_results_in_call_order() {
        let root = temp_dir("begin-results");
        write_file(
            &root.join("menu.rhai"),
            r#"fn update() { if BeginMenu("File") { Text("open"); } }"#,
        );

        let mut case = simple_case("menu.rhai", vec![ExpectedFrame::default(); 2]);
        case.begin_results
            .insert("BeginMenu".to_string(), vec![false, true]);
        let report = run_case(&root, &case).expect("run should pass");
        assert!(report.frames[0].is_clean());
        assert_eq!(
            report.frames[1].events,
            vec![ScopeEvent::LeakedScope {
                kind: ScopeKind::Menu,
                open_sequence: 1,
                begin_op: BeginOp::BeginMenu,
                synthesized_end: EndOp::EndMenu,
            }]
        );
    }

    #[test]
    fn run_case_reports_setup_errors() {
        let root = temp_dir("setup-errors");
        write_file(&root.join("ok.rhai"), "fn update() {}");

        let missing = simple_case("missing.rhai", vec![]);
        let error = run_case(&root, &missing).expect_err("missing script");
        assert!(matches!(error, IgToolError::ReadFile { .. }));

        let mut unknown_op = simple_case("ok.rhai", vec![]);
        unknown_op
            .begin_results
            .insert("BeginWidget".to_string(), vec![true]);
        let error = run_case(&root, &unknown_op).expect_err("unknown op");
        assert!(matches!(error, IgToolError::UnknownBeginOp { .. }));

        let mut bad_entry = simple_case("ok.rhai", vec![]);
        bad_entry.entry = "draw".to_string();
        let error = run_case(&root, &bad_entry).expect_err("missing entry");
        match error {
            IgToolError::Engine(error) => assert_eq!(error.code, "RUNTIME_ENTRY_MISSING"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn assert_case_reports_frame_event_and_error_mismatches() {
        let root = temp_dir("assert");
        write_file(
            &root.join("leak.rhai"),
            r#"fn update() { BeginGroup(); }"#,
        );

        let count_case = root.join("count.case.json");
        write_file(
            &count_case,
            r#"{"schemaVersion":"ig-tool-case.v1","script":"leak.rhai","frames":2,"expectedFrames":[{}]}"#,
        );
        let error = assert_case(&count_case).expect_err("frame count mismatch");
        assert!(matches!(error, IgToolError::FrameCountMismatch { .. }));

        let events_case = root.join("events.case.json");
        write_file(
            &events_case,
            r#"{"schemaVersion":"ig-tool-case.v1","script":"leak.rhai","expectedFrames":[{}]}"#,
        );
        let error = assert_case(&events_case).expect_err("event count mismatch");
        assert!(matches!(error, IgToolError::EventCountMismatch { .. }));

        let value_case = root.join("value.case.json");
        write_file(
            &value_case,
            r#"{"schemaVersion":"ig-tool-case.v1","script":"leak.rhai","expectedFrames":[
  {"events":[{"event":"leakedScope","kind":"Group","openSequence":9,"beginOp":"BeginGroup","synthesizedEnd":"EndGroup"}]}
]}"#,
        );
        let error = assert_case(&value_case).expect_err("event value mismatch");
        assert!(matches!(error, IgToolError::EventMismatch { index: 0, .. }));

        let script_error_case = root.join("script-error.case.json");
        write_file(
            &script_error_case,
            r#"{"schemaVersion":"ig-tool-case.v1","script":"leak.rhai","expectedFrames":[
  {"scriptError":true,"events":[{"event":"leakedScope","kind":"Group","openSequence":1,"beginOp":"BeginGroup","synthesizedEnd":"EndGroup"}]}
]}"#,
        );
        let error = assert_case(&script_error_case).expect_err("script error mismatch");
        assert!(matches!(
            error,
            IgToolError::ScriptErrorMismatch {
                expected: true,
                ..
            }
        ));
    }

    #[test]
    fn assert_case_passes_with_matching_frames() {
        let root = temp_dir("assert-pass");
        write_file(
            &root.join("mismatch.rhai"),
            r#"
fn update() {
    if Begin("Main") {
        BeginGroup();
        End();
    }
}
"#,
        );
        let case_path = root.join("mismatch.case.json");
        write_file(
            &case_path,
            r#"{
  "schemaVersion":"ig-tool-case.v1",
  "script":"mismatch.rhai",
  "expectedFrames":[
    {"scriptError":true,"events":[
      {"event":"scopeMismatch","endOp":"End","expected":"Group","attempted":"Window","openSequence":2},
      {"event":"leakedScope","kind":"Group","openSequence":2,"beginOp":"BeginGroup","synthesizedEnd":"EndGroup"},
      {"event":"leakedScope","kind":"Window","openSequence":1,"beginOp":"Begin","synthesizedEnd":"End"}
    ]}
  ]
}"#,
        );

        let report = assert_case(&case_path).expect("assert should pass");
        assert!(report.violations.is_empty());
    }
}
