use super::*;

impl ScopeGuard {
    /// Closes everything still open, innermost first. The returned leaks are
    /// in the order their synthesized end calls must reach the backend.
    pub fn end_frame(&mut self) -> Vec<LeakedScope> {
        let mut leaks = Vec::with_capacity(self.stack.len());
        while let Some(record) = self.stack.pop() {
            leaks.push(LeakedScope::from(record));
        }
        leaks
    }

    /// Drops every record without synthesizing ends and returns them,
    /// outermost first. Only valid when the backend context the records
    /// referred to no longer exists.
    pub fn reset(&mut self) -> Vec<ScopeRecord> {
        std::mem::take(&mut self.stack)
    }
}
