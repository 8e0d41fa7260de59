use ig_core::ImGuardError;
use ig_runtime::{RecordingBackend, ScriptedUi, ScriptedUiOptions, UiBackend, DEFAULT_ENTRY_FN};

#[derive(Debug, Default)]
pub struct CreateScriptedUiOptions<B = RecordingBackend> {
    pub script_source: String,
    pub entry_fn: Option<String>,
    pub max_operations: Option<u64>,
    pub backend: Option<B>,
}

impl CreateScriptedUiOptions {
    pub fn from_source(script_source: impl Into<String>) -> Self {
        Self {
            script_source: script_source.into(),
            ..Self::default()
        }
    }
}

pub fn create_scripted_ui<B>(
    options: CreateScriptedUiOptions<B>,
) -> Result<ScriptedUi<B>, ImGuardError>
where
    B: UiBackend + Default + 'static,
{
    if options.script_source.trim().is_empty() {
        return Err(ImGuardError::new(
            "API_SCRIPT_EMPTY",
            "Script source is empty.",
        ));
    }
    let entry_fn = resolve_entry_fn(options.entry_fn)?;

    let ui = ScriptedUi::new(ScriptedUiOptions {
        source: options.script_source,
        entry_fn: Some(entry_fn),
        max_operations: options.max_operations,
        backend: options.backend.unwrap_or_default(),
    })?;
    log::debug!("scripted ui created with entry \"{}\"", ui.entry_fn());
    Ok(ui)
}

fn resolve_entry_fn(explicit: Option<String>) -> Result<String, ImGuardError> {
    match explicit {
        Some(entry) if entry.trim().is_empty() => Err(ImGuardError::new(
            "API_ENTRY_FN_EMPTY",
            "Entry function name cannot be empty.",
        )),
        Some(entry) => Ok(entry),
        None => Ok(DEFAULT_ENTRY_FN.to_string()),
    }
}
