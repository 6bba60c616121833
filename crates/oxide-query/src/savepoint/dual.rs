//! Savepoint bookkeeping for engines without `RELEASE SAVEPOINT`.
//!
//! On such an engine a committed (released) savepoint is merged into its
//! parent physically but its name stays reachable, so a later `ROLLBACK TO`
//! of a reused name could land on the wrong one. A second stack records
//! which savepoints are still un-committed.

use tracing::debug;

use super::NameStack;
use crate::error::{QueryError, Result};

/// Savepoint stack with a mirrored uncommitted stack.
///
/// The uncommitted stack is always an order-preserving subsequence of the
/// full stack, and per name its positions are a subsequence of the full
/// positions.
///
/// ```rust
/// use oxide_query::savepoint::DualSavepointStack;
///
/// let mut stack = DualSavepointStack::new();
/// stack.push("a");
/// stack.push("a");
/// assert_eq!(stack.commit().unwrap(), "a");
/// assert_eq!(stack.uncommitted_count(), 1);
/// assert_eq!(stack.full_positions("a"), &[0, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DualSavepointStack {
    full: NameStack,
    uncommitted: NameStack,
}

impl DualSavepointStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes `name` onto both stacks and returns its position.
    pub fn push(&mut self, name: &str) -> usize {
        let position = self.full.len();
        self.full.push(name, position);
        self.uncommitted.push(name, position);
        debug!(name, position, "savepoint pushed");
        position
    }

    /// Commits the innermost uncommitted savepoint and returns its name.
    pub fn commit(&mut self) -> Result<String> {
        let (name, position) = self
            .uncommitted
            .pop()
            .ok_or(QueryError::SavepointUnderflow)?;
        debug!(name = %name, position, "savepoint committed");
        Ok(name)
    }

    /// Commits savepoints until `name`'s most recent uncommitted entry is
    /// committed. Returns that entry's position, or `None` when `name` has no
    /// uncommitted entry.
    pub fn commit_to(&mut self, name: &str) -> Option<usize> {
        let target = self.uncommitted.last_position(name)?;
        // positions in the uncommitted stack increase towards the top
        while let Some((_, position)) = self.uncommitted.last() {
            if position < target {
                break;
            }
            // cannot underflow: the target entry is still on the stack
            let committed = self.commit().ok()?;
            debug!(name = %committed, target, "committed towards target");
        }
        Some(target)
    }

    /// Pops the innermost savepoint from the full stack, committing it first
    /// when it is still uncommitted.
    pub fn pop(&mut self) -> Result<String> {
        let (name, position) = self.full.last().ok_or(QueryError::SavepointUnderflow)?;
        if self.uncommitted.last_position(name) == Some(position) {
            self.commit()?;
        }
        let (name, position) = self.full.pop().ok_or(QueryError::SavepointUnderflow)?;
        debug!(name = %name, position, "savepoint popped");
        Ok(name)
    }

    /// Returns the most recent position of `name` in the full stack.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.full.last_position(name)
    }

    /// Returns the most recent uncommitted position of `name`.
    #[must_use]
    pub fn uncommitted_position(&self, name: &str) -> Option<usize> {
        self.uncommitted.last_position(name)
    }

    /// Returns every live position of `name`, oldest first.
    #[must_use]
    pub fn full_positions(&self, name: &str) -> &[usize] {
        self.full.positions(name)
    }

    /// Returns every uncommitted position of `name`, oldest first.
    #[must_use]
    pub fn uncommitted_positions(&self, name: &str) -> &[usize] {
        self.uncommitted.positions(name)
    }

    /// Returns the number of uncommitted savepoints.
    #[must_use]
    pub fn uncommitted_count(&self) -> usize {
        self.uncommitted.len()
    }

    /// Returns the full-stack names from outermost to innermost.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.full.names()
    }

    /// Returns the number of live savepoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.full.len()
    }

    /// Returns `true` when no savepoint is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.full.len() == 0
    }

    /// Clears both stacks.
    pub fn reset(&mut self) {
        self.full.clear();
        self.uncommitted.clear();
        debug!("savepoint stack reset");
    }
}
