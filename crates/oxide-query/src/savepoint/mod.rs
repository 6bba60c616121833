//! Connection-scoped nested-transaction bookkeeping.
//!
//! A connection layers savepoints over begin/commit/rollback: `push` on
//! `BEGIN` / `SAVEPOINT`, `pop` on `COMMIT` / `ROLLBACK TO`. Positions are
//! zero-based depths in the stack of every savepoint still alive.
//!
//! [`SavepointStack`] is the baseline. [`DualSavepointStack`] additionally
//! tracks which savepoints are still un-released, for engines without
//! `RELEASE SAVEPOINT`.

mod dual;

pub use dual::DualSavepointStack;

use std::collections::HashMap;

use tracing::debug;

use crate::error::{QueryError, Result};

/// A LIFO stack of names with a per-name stack of recorded positions.
#[derive(Debug, Clone, Default)]
pub(crate) struct NameStack {
    names: Vec<(String, usize)>,
    positions: HashMap<String, Vec<usize>>,
}

impl NameStack {
    pub(crate) fn push(&mut self, name: &str, position: usize) {
        self.names.push((String::from(name), position));
        self.positions
            .entry(String::from(name))
            .or_default()
            .push(position);
    }

    /// Removes the top entry and that name's most recent position.
    pub(crate) fn pop(&mut self) -> Option<(String, usize)> {
        let (name, position) = self.names.pop()?;
        if let Some(stack) = self.positions.get_mut(&name) {
            stack.pop();
            if stack.is_empty() {
                self.positions.remove(&name);
            }
        }
        Some((name, position))
    }

    pub(crate) fn last(&self) -> Option<(&str, usize)> {
        self.names.last().map(|(name, pos)| (name.as_str(), *pos))
    }

    pub(crate) fn last_position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).and_then(|stack| stack.last().copied())
    }

    pub(crate) fn positions(&self, name: &str) -> &[usize] {
        self.positions.get(name).map_or(&[], Vec::as_slice)
    }

    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|(name, _)| name.as_str())
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }

    pub(crate) fn clear(&mut self) {
        self.names.clear();
        self.positions.clear();
    }
}

/// Single-stack savepoint bookkeeping.
///
/// ```rust
/// use oxide_query::savepoint::SavepointStack;
///
/// let mut stack = SavepointStack::new();
/// assert_eq!(stack.push("trans"), 0);
/// assert_eq!(stack.push("sp1"), 1);
/// assert_eq!(stack.position("trans"), Some(0));
/// assert_eq!(stack.pop().unwrap(), "sp1");
/// assert_eq!(stack.position("sp1"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SavepointStack {
    stack: NameStack,
}

impl SavepointStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes `name` and returns its position.
    pub fn push(&mut self, name: &str) -> usize {
        let position = self.stack.len();
        self.stack.push(name, position);
        debug!(name, position, "savepoint pushed");
        position
    }

    /// Pops the innermost savepoint.
    pub fn pop(&mut self) -> Result<String> {
        let (name, position) = self.stack.pop().ok_or(QueryError::SavepointUnderflow)?;
        debug!(name = %name, position, "savepoint popped");
        Ok(name)
    }

    /// Returns the most recent position of `name`.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.stack.last_position(name)
    }

    /// Returns the names from outermost to innermost.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.stack.names()
    }

    /// Returns the number of live savepoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns `true` when no savepoint is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.len() == 0
    }

    /// Forgets every savepoint.
    pub fn reset(&mut self) {
        self.stack.clear();
        debug!("savepoint stack reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_returns_depth() {
        let mut stack = SavepointStack::new();
        assert_eq!(stack.push("a"), 0);
        assert_eq!(stack.push("b"), 1);
        assert_eq!(stack.push("a"), 2);
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.position("a"), Some(2));
        assert_eq!(stack.position("b"), Some(1));
    }

    #[test]
    fn test_pop_restores_previous_position() {
        let mut stack = SavepointStack::new();
        stack.push("a");
        stack.push("a");
        assert_eq!(stack.pop().unwrap(), "a");
        assert_eq!(stack.position("a"), Some(0));
        assert_eq!(stack.pop().unwrap(), "a");
        assert_eq!(stack.position("a"), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_empty_is_underflow() {
        let mut stack = SavepointStack::new();
        assert!(matches!(stack.pop(), Err(QueryError::SavepointUnderflow)));
    }

    #[test]
    fn test_reset() {
        let mut stack = SavepointStack::new();
        stack.push("a");
        stack.push("b");
        stack.reset();
        assert!(stack.is_empty());
        assert_eq!(stack.position("a"), None);
        assert_eq!(stack.push("c"), 0);
    }

    #[test]
    fn test_names_outermost_first() {
        let mut stack = SavepointStack::new();
        stack.push("trans");
        stack.push("sp");
        assert_eq!(stack.names().collect::<Vec<_>>(), vec!["trans", "sp"]);
    }

    #[test]
    fn test_name_stack_positions() {
        let mut names = NameStack::default();
        names.push("a", 0);
        names.push("b", 1);
        names.push("a", 2);
        assert_eq!(names.positions("a"), &[0, 2]);
        assert_eq!(names.last(), Some(("a", 2)));
        assert_eq!(names.pop(), Some((String::from("a"), 2)));
        assert_eq!(names.positions("a"), &[0]);
        assert!(names.positions("zzz").is_empty());
    }
}
