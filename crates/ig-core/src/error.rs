use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::kind::{EndOp, ScopeKind};

#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct ImGuardError {
    pub code: String,
    pub message: String,
}

impl ImGuardError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Rejected end call. The guard never pops when returning one of these.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "error", rename_all = "camelCase")]
pub enum ScopeError {
    #[error("{end_op} cannot close {attempted}: no scope is open")]
    #[serde(rename_all = "camelCase")]
    UnmatchedEnd { end_op: EndOp, attempted: ScopeKind },
    #[error(
        "{end_op} cannot close {attempted}: innermost open scope is {expected} #{open_sequence}"
    )]
    #[serde(rename_all = "camelCase")]
    ScopeMismatch {
        end_op: EndOp,
        expected: ScopeKind,
        attempted: ScopeKind,
        open_sequence: u64,
    },
}

impl ScopeError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnmatchedEnd { .. } => "SCOPE_UNMATCHED_END",
            Self::ScopeMismatch { .. } => "SCOPE_MISMATCH",
        }
    }

    pub fn end_op(&self) -> EndOp {
        match self {
            Self::UnmatchedEnd { end_op, .. } | Self::ScopeMismatch { end_op, .. } => *end_op,
        }
    }
}

impl From<ScopeError> for ImGuardError {
    fn from(error: ScopeError) -> Self {
        ImGuardError::new(error.code(), error.to_string())
    }
}
