use serde::{Deserialize, Serialize};

use crate::error::{ImGuardError, ScopeError};
use crate::kind::{BeginOp, EndOp, ScopeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeRecord {
    pub kind: ScopeKind,
    pub open_sequence: u64,
    pub conditional: bool,
    pub begin_op: BeginOp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeToken {
    pub kind: ScopeKind,
    pub open_sequence: u64,
    /// Stack depth right after the push.
    pub depth: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeakedScope {
    pub kind: ScopeKind,
    pub open_sequence: u64,
    pub begin_op: BeginOp,
    pub end_op: EndOp,
}

impl From<ScopeRecord> for LeakedScope {
    fn from(record: ScopeRecord) -> Self {
        Self {
            kind: record.kind,
            open_sequence: record.open_sequence,
            begin_op: record.begin_op,
            end_op: record.kind.end_op(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Empty,
    Depth(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum ScopeEvent {
    #[serde(rename_all = "camelCase")]
    ScopeMismatch {
        end_op: EndOp,
        expected: ScopeKind,
        attempted: ScopeKind,
        open_sequence: u64,
    },
    #[serde(rename_all = "camelCase")]
    UnmatchedEnd { end_op: EndOp, attempted: ScopeKind },
    #[serde(rename_all = "camelCase")]
    LeakedScope {
        kind: ScopeKind,
        open_sequence: u64,
        begin_op: BeginOp,
        synthesized_end: EndOp,
    },
}

impl ScopeEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ScopeMismatch { .. } => "scopeMismatch",
            Self::UnmatchedEnd { .. } => "unmatchedEnd",
            Self::LeakedScope { .. } => "leakedScope",
        }
    }
}

impl From<ScopeError> for ScopeEvent {
    fn from(error: ScopeError) -> Self {
        match error {
            ScopeError::UnmatchedEnd { end_op, attempted } => {
                Self::UnmatchedEnd { end_op, attempted }
            }
            ScopeError::ScopeMismatch {
                end_op,
                expected,
                attempted,
                open_sequence,
            } => Self::ScopeMismatch {
                end_op,
                expected,
                attempted,
                open_sequence,
            },
        }
    }
}

impl From<LeakedScope> for ScopeEvent {
    fn from(leak: LeakedScope) -> Self {
        Self::LeakedScope {
            kind: leak.kind,
            open_sequence: leak.open_sequence,
            begin_op: leak.begin_op,
            synthesized_end: leak.end_op,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    pub frame_index: u64,
    pub events: Vec<ScopeEvent>,
    #[serde(default)]
    pub script_error: Option<ImGuardError>,
}

impl FrameReport {
    pub fn leaks(&self) -> impl Iterator<Item = &ScopeEvent> {
        self.events
            .iter()
            .filter(|event| matches!(event, ScopeEvent::LeakedScope { .. }))
    }

    pub fn is_clean(&self) -> bool {
        self.events.is_empty() && self.script_error.is_none()
    }
}

/// What recreating the backend context threw away from the current frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscardedFrame {
    pub frame_index: u64,
    /// Diagnostics raised before the context went away.
    pub events: Vec<ScopeEvent>,
    /// Records dropped without synthesized ends, outermost first.
    pub dropped: Vec<ScopeRecord>,
}

impl DiscardedFrame {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.dropped.is_empty()
    }
}

#[cfg(test)]
mod types_tests {
    use super::*;

    #[test]
    fn leaked_scope_uses_canonical_end() {
        let leak = LeakedScope::from(ScopeRecord {
            kind: ScopeKind::Popup,
            open_sequence: 4,
            conditional: true,
            begin_op: BeginOp::BeginPopupModal,
        });
        assert_eq!(leak.end_op, EndOp::EndPopup);
        assert_eq!(
            ScopeEvent::from(leak),
            ScopeEvent::LeakedScope {
                kind: ScopeKind::Popup,
                open_sequence: 4,
                begin_op: BeginOp::BeginPopupModal,
                synthesized_end: EndOp::EndPopup,
            }
        );
    }

    #[test]
    fn scope_event_serializes_for_logging() {
        let event = ScopeEvent::from(ScopeError::ScopeMismatch {
            end_op: EndOp::End,
            expected: ScopeKind::Group,
            attempted: ScopeKind::Window,
            open_sequence: 2,
        });
        let json = serde_json::to_value(event).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "event": "scopeMismatch",
                "endOp": "End",
                "expected": "Group",
                "attempted": "Window",
                "openSequence": 2
            })
        );
        assert_eq!(event.name(), "scopeMismatch");
        let parsed: ScopeEvent = serde_json::from_value(json).expect("deserialize");
        assert_eq!(parsed, event);
    }

    #[test]
    fn frame_report_reports_cleanliness_and_leaks() {
        let mut report = FrameReport {
            frame_index: 1,
            events: Vec::new(),
            script_error: None,
        };
        assert!(report.is_clean());
        report.events.push(ScopeEvent::UnmatchedEnd {
            end_op: EndOp::EndGroup,
            attempted: ScopeKind::Group,
        });
        report.events.push(ScopeEvent::LeakedScope {
            kind: ScopeKind::Window,
            open_sequence: 1,
            begin_op: BeginOp::Begin,
            synthesized_end: EndOp::End,
        });
        assert!(!report.is_clean());
        assert_eq!(report.leaks().count(), 1);
    }
}
