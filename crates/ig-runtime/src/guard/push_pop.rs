use super::*;

impl ScopeGuard {
    /// Records the outcome of a begin-style call. Unconditional operations
    /// always push; conditional ones push only when `success` is true.
    pub fn enter_scope(&mut self, op: BeginOp, success: bool) -> Option<ScopeToken> {
        let unconditional = self.table.begin(op).policy.is_unconditional();
        self.enter_scope_with(op, unconditional, success)
    }

    pub fn enter_scope_with(
        &mut self,
        op: BeginOp,
        unconditional: bool,
        success: bool,
    ) -> Option<ScopeToken> {
        if !unconditional && !success {
            return None;
        }

        let kind = self.table.begin(op).kind;
        let open_sequence = self.next_sequence;
        self.next_sequence += 1;
        self.stack.push(ScopeRecord {
            kind,
            open_sequence,
            conditional: !unconditional,
            begin_op: op,
        });

        Some(ScopeToken {
            kind,
            open_sequence,
            depth: self.stack.len(),
        })
    }

    /// Pops the innermost scope if `op` is allowed to close it.
    pub fn exit_scope(&mut self, op: EndOp) -> Result<ScopeRecord, ScopeError> {
        let attempted = self.table.end(op).kind;
        let top = *self.stack.last().ok_or(ScopeError::UnmatchedEnd {
            end_op: op,
            attempted,
        })?;

        if top.kind != attempted {
            return Err(ScopeError::ScopeMismatch {
                end_op: op,
                expected: top.kind,
                attempted,
                open_sequence: top.open_sequence,
            });
        }

        self.stack.truncate(self.stack.len() - 1);
        Ok(top)
    }

    /// Pops `count` scopes of the kind `op` closes, or nothing at all.
    /// Records come back innermost first.
    pub fn exit_scopes(
        &mut self,
        op: EndOp,
        count: usize,
    ) -> Result<Vec<ScopeRecord>, ScopeError> {
        let attempted = self.table.end(op).kind;
        let Some(split_at) = self.stack.len().checked_sub(count) else {
            return Err(ScopeError::UnmatchedEnd {
                end_op: op,
                attempted,
            });
        };

        if let Some(record) = self.stack[split_at..]
            .iter()
            .rev()
            .find(|record| record.kind != attempted)
        {
            return Err(ScopeError::ScopeMismatch {
                end_op: op,
                expected: record.kind,
                attempted,
                open_sequence: record.open_sequence,
            });
        }

        let mut popped = self.stack.split_off(split_at);
        popped.reverse();
        Ok(popped)
    }
}
