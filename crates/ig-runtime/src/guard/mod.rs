use ig_core::{
    BeginOp, EndOp, GuardState, LeakedScope, PairingTable, ScopeError, ScopeKind, ScopeRecord,
    ScopeToken,
};

mod push_pop;
mod unwind;


/// Mirror of the backend's nesting stack for one UI context.
///
/// Records are pushed by begin calls that actually opened something and popped
/// only by a matching end; a rejected end never touches the stack. Whatever is
/// still open when the frame ends is unwound by [`ScopeGuard::end_frame`].
#[derive(Debug)]
pub struct ScopeGuard {
    table: &'static PairingTable,
    stack: Vec<ScopeRecord>,
    next_sequence: u64,
}

impl Default for ScopeGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeGuard {
    pub fn new() -> Self {
        Self {
            table: PairingTable::global(),
            stack: Vec::new(),
            next_sequence: 1,
        }
    }

    pub fn table(&self) -> &'static PairingTable {
        self.table
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn state(&self) -> GuardState {
        match self.stack.len() {
            0 => GuardState::Empty,
            depth => GuardState::Depth(depth),
        }
    }

    pub fn top(&self) -> Option<&ScopeRecord> {
        self.stack.last()
    }

    pub fn open_kinds(&self) -> Vec<ScopeKind> {
        self.stack.iter().map(|record| record.kind).collect()
    }
}
