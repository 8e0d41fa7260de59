use ig_core::{DiscardedFrame, FrameReport, ImGuardError};
use rhai::{CallFnOptions, Dynamic, Scope};

use super::ScriptedUi;
use crate::backend::UiBackend;

impl<B: UiBackend + 'static> ScriptedUi<B> {
    /// Runs one frame: new frame, entry call, unwind and render. A failing
    /// script still gets its frame closed; the failure lands in the report.
    pub fn run_frame(&mut self) -> FrameReport {
        if let Some(unfinished) = self.context.borrow_mut().new_frame() {
            log::warn!(
                "frame {} closed late with {} scope event(s)",
                unfinished.frame_index,
                unfinished.events.len()
            );
        }

        let result = self.call_entry();
        let mut report = self.context.borrow_mut().end_frame();
        if let Err(error) = result {
            log::error!("frame {}: {}", report.frame_index, error);
            report.script_error = Some(error);
        }
        report
    }

    pub fn run_frames(&mut self, frames: usize) -> Vec<FrameReport> {
        (0..frames).map(|_| self.run_frame()).collect()
    }

    /// Drops every open record and rebuilds the backend context. Script state
    /// is kept.
    pub fn recreate_backend_context(&mut self) -> DiscardedFrame {
        self.context.borrow_mut().recreate_backend_context()
    }

    fn call_entry(&mut self) -> Result<(), ImGuardError> {
        let options = CallFnOptions::new()
            .eval_ast(false)
            .rewind_scope(true)
            .bind_this_ptr(&mut self.state);
        self.engine
            .call_fn_with_options::<Dynamic>(
                options,
                &mut Scope::new(),
                &self.ast,
                &self.entry_fn,
                (),
            )
            .map(|_| ())
            .map_err(|error| {
                ImGuardError::new(
                    "RUNTIME_SCRIPT_EVAL",
                    format!("Entry \"{}\" failed: {}", self.entry_fn, error),
                )
            })
    }
}
