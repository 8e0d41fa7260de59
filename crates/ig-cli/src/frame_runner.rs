use ig_api::{create_scripted_ui, CreateScriptedUiOptions};
use ig_core::{BeginOp, FrameReport, ImGuardError};
use ig_runtime::{BeginResults, NativeViolation, RecordingBackend};

use crate::{load_script, map_cli_output_json, RunArgs};

#[derive(Debug, Clone)]
pub(crate) struct RunOutcome {
    pub(crate) frames: Vec<FrameReport>,
    pub(crate) violations: Vec<NativeViolation>,
}

pub(crate) fn run_script(args: &RunArgs) -> Result<RunOutcome, ImGuardError> {
    let script = load_script(&args.script)?;
    log::info!("running {} for {} frame(s)", script.path.display(), args.frames);

    let mut ui = create_scripted_ui(CreateScriptedUiOptions {
        script_source: script.source,
        entry_fn: args.entry.clone(),
        max_operations: args.max_operations,
        backend: Some(RecordingBackend::new(denied_begin_results(&args.deny)?)),
    })?;

    let frames = ui.run_frames(args.frames);
    let violations = ui.with_backend(|backend| backend.violations().to_vec());
    Ok(RunOutcome { frames, violations })
}

pub(crate) fn denied_begin_results(deny: &[String]) -> Result<BeginResults, ImGuardError> {
    let mut results = BeginResults::default();
    for name in deny {
        let op = BeginOp::from_name(name).ok_or_else(|| {
            ImGuardError::new(
                "CLI_DENY_UNKNOWN",
                format!("--deny expects a begin operation, got \"{}\".", name),
            )
        })?;
        results = results.fix(op, false);
    }
    Ok(results)
}

pub(crate) fn render_outcome(outcome: &RunOutcome) -> Result<Vec<String>, ImGuardError> {
    let mut lines = vec![
        "RESULT:OK".to_string(),
        format!("FRAMES:{}", outcome.frames.len()),
    ];

    for frame in &outcome.frames {
        lines.push(format!("FRAME:{}", frame.frame_index));
        for event in &frame.events {
            let json = serde_json::to_string(event).map_err(map_cli_output_json)?;
            lines.push(format!("EVENT_JSON:{}", json));
        }
        if let Some(error) = &frame.script_error {
            let json = serde_json::to_string(error).map_err(map_cli_output_json)?;
            lines.push(format!("SCRIPT_ERROR_JSON:{}", json));
        }
    }

    for violation in &outcome.violations {
        let json = serde_json::to_string(violation).map_err(map_cli_output_json)?;
        lines.push(format!("VIOLATION_JSON:{}", json));
    }
    lines.push(format!("NATIVE_VIOLATIONS:{}", outcome.violations.len()));
    Ok(lines)
}
