use ig_core::{BeginOp, DiscardedFrame, EndOp, FrameReport, ImGuardError, ScopeEvent, UiValue};

use crate::backend::UiBackend;
use crate::guard::ScopeGuard;


/// One UI context: a backend plus the guard that mirrors its nesting.
///
/// Every begin goes to the backend first and is recorded only if it opened
/// something. Every end is validated first and reaches the backend only when
/// it closes the innermost scope.
pub struct UiContext<B: UiBackend> {
    guard: ScopeGuard,
    backend: B,
    frame_index: u64,
    frame_open: bool,
    events: Vec<ScopeEvent>,
}

impl<B: UiBackend> UiContext<B> {
    pub fn new(backend: B) -> Self {
        Self {
            guard: ScopeGuard::new(),
            backend,
            frame_index: 0,
            frame_open: false,
            events: Vec::new(),
        }
    }

    pub fn guard(&self) -> &ScopeGuard {
        &self.guard
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn in_frame(&self) -> bool {
        self.frame_open
    }

    /// Diagnostics collected so far in the current frame.
    pub fn pending_events(&self) -> &[ScopeEvent] {
        &self.events
    }

    /// Starts a frame. A frame that was never ended is ended first and its
    /// report is returned.
    pub fn new_frame(&mut self) -> Option<FrameReport> {
        let unfinished = if self.frame_open {
            log::warn!(
                "frame {} was not ended before a new frame started",
                self.frame_index
            );
            Some(self.end_frame())
        } else {
            None
        };

        self.frame_index += 1;
        self.frame_open = true;
        self.backend.new_frame();
        log::debug!("frame {} started", self.frame_index);
        unfinished
    }

    pub fn begin(&mut self, op: BeginOp, args: &[UiValue]) -> Result<bool, ImGuardError> {
        self.ensure_frame(op.name())?;
        let result = self.backend.begin(op, args)?;
        let opened = self.guard.enter_scope(op, result);
        if let Some(token) = opened {
            log::trace!(
                "{} opened {} #{} at depth {}",
                op,
                token.kind,
                token.open_sequence,
                token.depth
            );
        }
        Ok(result || opened.is_some())
    }

    pub fn end(&mut self, op: EndOp) -> Result<(), ImGuardError> {
        self.ensure_frame(op.name())?;
        match self.guard.exit_scope(op) {
            Ok(_) => {
                self.backend.end(op, 1);
                Ok(())
            }
            Err(error) => Err(self.reject(error.into(), ScopeEvent::from(error))),
        }
    }

    /// Counted end such as `PopStyleVar(count)`. Either all `count` scopes
    /// close or none do.
    pub fn end_many(&mut self, op: EndOp, count: usize) -> Result<(), ImGuardError> {
        self.ensure_frame(op.name())?;
        if !self.guard.table().end(op).counted && count != 1 {
            return Err(ImGuardError::new(
                "RUNTIME_END_COUNT",
                format!("{} does not accept a count.", op),
            ));
        }
        if count == 0 {
            return Ok(());
        }

        match self.guard.exit_scopes(op, count) {
            Ok(_) => {
                self.backend.end(op, count);
                Ok(())
            }
            Err(error) => Err(self.reject(error.into(), ScopeEvent::from(error))),
        }
    }

    pub fn widget(&mut self, name: &str, args: &[UiValue]) -> Result<UiValue, ImGuardError> {
        self.ensure_frame(name)?;
        self.backend.call(name, args)
    }

    /// Closes every scope the frame left open, then hands the frame to the
    /// backend for rendering. Calling it outside a frame does nothing.
    pub fn end_frame(&mut self) -> FrameReport {
        if !self.frame_open {
            return FrameReport {
                frame_index: self.frame_index,
                events: Vec::new(),
                script_error: None,
            };
        }

        for leak in self.guard.end_frame() {
            log::warn!(
                "frame {}: {} #{} opened by {} was left open; closing with {}",
                self.frame_index,
                leak.kind,
                leak.open_sequence,
                leak.begin_op,
                leak.end_op
            );
            self.backend.end(leak.end_op, 1);
            self.events.push(leak.into());
        }

        self.backend.render();
        self.frame_open = false;
        let events = std::mem::take(&mut self.events);
        log::debug!(
            "frame {} ended with {} scope event(s)",
            self.frame_index,
            events.len()
        );

        FrameReport {
            frame_index: self.frame_index,
            events,
            script_error: None,
        }
    }

    /// Destroys and recreates the backend context. Open records refer to the
    /// dead context, so they are dropped rather than unwound. The frame's
    /// pending diagnostics and the dropped records are handed back.
    pub fn recreate_backend_context(&mut self) -> DiscardedFrame {
        let discarded = DiscardedFrame {
            frame_index: self.frame_index,
            events: std::mem::take(&mut self.events),
            dropped: self.guard.reset(),
        };
        self.frame_open = false;
        self.backend.destroy_context();
        self.backend.create_context();
        log::info!(
            "backend context recreated in frame {}: {} pending event(s), {} open scope record(s) dropped",
            discarded.frame_index,
            discarded.events.len(),
            discarded.dropped.len()
        );
        discarded
    }

    fn ensure_frame(&self, call: &str) -> Result<(), ImGuardError> {
        if self.frame_open {
            return Ok(());
        }
        Err(ImGuardError::new(
            "RUNTIME_FRAME_NOT_STARTED",
            format!("{} called outside of a frame.", call),
        ))
    }

    fn reject(&mut self, error: ImGuardError, event: ScopeEvent) -> ImGuardError {
        log::warn!("frame {}: {}", self.frame_index, error.message);
        self.events.push(event);
        error
    }
}
