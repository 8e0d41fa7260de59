mod backend;
mod context;
mod guard;
mod helpers {
    pub(crate) mod rhai_bridge;
}
mod scripted;

pub use backend::{
    BackendCall, BeginResults, NativeViolation, RecordingBackend, UiBackend, DEFAULT_WIDGETS,
};
pub use context::UiContext;
pub use guard::ScopeGuard;
pub use scripted::{ScriptedUi, ScriptedUiOptions, DEFAULT_ENTRY_FN, SCOPE_DEPTH_FN};
