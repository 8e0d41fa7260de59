use std::collections::{HashMap, VecDeque};

use ig_core::{BeginOp, EndOp, ImGuardError, PairingTable, ScopeKind, UiValue};
use serde::{Deserialize, Serialize};

use super::UiBackend;

pub const DEFAULT_WIDGETS: [&str; 11] = [
    "Text",
    "Button",
    "Checkbox",
    "Selectable",
    "Separator",
    "SameLine",
    "TableNextRow",
    "TableNextColumn",
    "OpenPopup",
    "CloseCurrentPopup",
    "SetDragDropPayload",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "call", rename_all = "camelCase")]
pub enum BackendCall {
    NewFrame,
    Begin {
        op: BeginOp,
        args: Vec<UiValue>,
        result: bool,
    },
    End {
        op: EndOp,
        count: usize,
    },
    Widget {
        name: String,
        args: Vec<UiValue>,
    },
    Render,
    DestroyContext,
    CreateContext,
}

/// Nesting errors the real library would assert on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "violation", rename_all = "camelCase")]
pub enum NativeViolation {
    EndWithoutBegin { op: EndOp },
    EndOutOfOrder { op: EndOp, innermost: ScopeKind },
    RenderWithOpenScopes { open: Vec<ScopeKind> },
}

/// Answers for conditional begin calls. Queued answers win over fixed ones,
/// which win over the default.
#[derive(Debug, Clone)]
pub struct BeginResults {
    default: bool,
    fixed: HashMap<BeginOp, bool>,
    queued: HashMap<BeginOp, VecDeque<bool>>,
}

impl Default for BeginResults {
    fn default() -> Self {
        Self::always(true)
    }
}

impl BeginResults {
    pub fn always(result: bool) -> Self {
        Self {
            default: result,
            fixed: HashMap::new(),
            queued: HashMap::new(),
        }
    }

    pub fn fix(mut self, op: BeginOp, result: bool) -> Self {
        self.fixed.insert(op, result);
        self
    }

    pub fn queue(mut self, op: BeginOp, results: impl IntoIterator<Item = bool>) -> Self {
        self.queued.entry(op).or_default().extend(results);
        self
    }

    fn next(&mut self, op: BeginOp) -> bool {
        if let Some(result) = self.queued.get_mut(&op).and_then(VecDeque::pop_front) {
            return result;
        }
        self.fixed.get(&op).copied().unwrap_or(self.default)
    }
}

/// Headless backend that records every call and keeps its own copy of the
/// native nesting stack, so misuse reaching the "library" is observable.
#[derive(Debug)]
pub struct RecordingBackend {
    table: &'static PairingTable,
    begin_results: BeginResults,
    widgets: Vec<String>,
    widget_results: HashMap<String, UiValue>,
    calls: Vec<BackendCall>,
    native_stack: Vec<ScopeKind>,
    violations: Vec<NativeViolation>,
    frames_rendered: u64,
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new(BeginResults::default())
    }
}

impl RecordingBackend {
    pub fn new(begin_results: BeginResults) -> Self {
        Self {
            table: PairingTable::global(),
            begin_results,
            widgets: DEFAULT_WIDGETS.iter().map(|name| name.to_string()).collect(),
            widget_results: HashMap::new(),
            calls: Vec::new(),
            native_stack: Vec::new(),
            violations: Vec::new(),
            frames_rendered: 0,
        }
    }

    pub fn with_widgets(mut self, widgets: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.widgets = widgets.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_widget_result(mut self, widget: impl Into<String>, value: UiValue) -> Self {
        self.widget_results.insert(widget.into(), value);
        self
    }

    pub fn calls(&self) -> &[BackendCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<BackendCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn violations(&self) -> &[NativeViolation] {
        &self.violations
    }

    pub fn native_depth(&self) -> usize {
        self.native_stack.len()
    }

    pub fn native_kinds(&self) -> &[ScopeKind] {
        &self.native_stack
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    fn pop_native(&mut self, op: EndOp) {
        let kind = self.table.end(op).kind;
        match self.native_stack.last() {
            None => self.violations.push(NativeViolation::EndWithoutBegin { op }),
            Some(innermost) if *innermost != kind => {
                self.violations.push(NativeViolation::EndOutOfOrder {
                    op,
                    innermost: *innermost,
                });
            }
            Some(_) => {
                self.native_stack.pop();
            }
        }
    }
}

impl UiBackend for RecordingBackend {
    fn new_frame(&mut self) {
        self.calls.push(BackendCall::NewFrame);
    }

    fn begin(&mut self, op: BeginOp, args: &[UiValue]) -> Result<bool, ImGuardError> {
        let pairing = self.table.begin(op);
        let result = if pairing.policy.is_unconditional() {
            true
        } else {
            self.begin_results.next(op)
        };
        if result {
            self.native_stack.push(pairing.kind);
        }
        self.calls.push(BackendCall::Begin {
            op,
            args: args.to_vec(),
            result,
        });
        Ok(result)
    }

    fn end(&mut self, op: EndOp, count: usize) {
        self.calls.push(BackendCall::End { op, count });
        for _ in 0..count {
            self.pop_native(op);
        }
    }

    fn call(&mut self, widget: &str, args: &[UiValue]) -> Result<UiValue, ImGuardError> {
        if !self.widgets.iter().any(|name| name == widget) {
            return Err(ImGuardError::new(
                "RUNTIME_WIDGET_UNKNOWN",
                format!("Widget \"{}\" is not provided by this backend.", widget),
            ));
        }
        self.calls.push(BackendCall::Widget {
            name: widget.to_string(),
            args: args.to_vec(),
        });
        Ok(self
            .widget_results
            .get(widget)
            .cloned()
            .unwrap_or(UiValue::Unit))
    }

    fn widget_names(&self) -> &[String] {
        &self.widgets
    }

    fn render(&mut self) {
        if !self.native_stack.is_empty() {
            self.violations.push(NativeViolation::RenderWithOpenScopes {
                open: self.native_stack.clone(),
            });
            self.native_stack.clear();
        }
        self.frames_rendered += 1;
        self.calls.push(BackendCall::Render);
    }

    fn destroy_context(&mut self) {
        self.native_stack.clear();
        self.calls.push(BackendCall::DestroyContext);
    }

    fn create_context(&mut self) {
        self.calls.push(BackendCall::CreateContext);
    }
}
