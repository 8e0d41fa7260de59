use ig_core::{BeginOp, EndOp, ImGuardError, UiValue};

mod recording;

pub use recording::{
    BackendCall, BeginResults, NativeViolation, RecordingBackend, DEFAULT_WIDGETS,
};

/// The immediate-mode library as seen from the runtime.
///
/// An `Err` from [`UiBackend::begin`] means the native call did not happen, so
/// nothing was opened and the guard is left untouched.
pub trait UiBackend {
    fn new_frame(&mut self);
    fn begin(&mut self, op: BeginOp, args: &[UiValue]) -> Result<bool, ImGuardError>;
    /// `count` is always 1 unless the end op accepts a repeat count.
    fn end(&mut self, op: EndOp, count: usize);
    fn call(&mut self, widget: &str, args: &[UiValue]) -> Result<UiValue, ImGuardError>;
    /// Stateless widget calls exposed to scripts next to the scope bindings.
    fn widget_names(&self) -> &[String];
    fn render(&mut self);
    fn destroy_context(&mut self);
    fn create_context(&mut self);
}
