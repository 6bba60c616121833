//! Tests for savepoint bookkeeping as a connection would drive it:
//! BEGIN / SAVEPOINT push, COMMIT / ROLLBACK TO pop, and RELEASE emulation
//! on the dual stack.

use oxide_query::{DualSavepointStack, QueryError, SavepointStack};

#[test]
fn nested_transaction_lifecycle() {
    let mut stack = SavepointStack::new();
    assert_eq!(stack.push("trans"), 0);
    assert_eq!(stack.push("sp1"), 1);
    assert_eq!(stack.push("sp2"), 2);
    assert_eq!(stack.names().collect::<Vec<_>>(), vec!["trans", "sp1", "sp2"]);

    assert_eq!(stack.pop().unwrap(), "sp2");
    assert_eq!(stack.pop().unwrap(), "sp1");
    assert_eq!(stack.position("trans"), Some(0));
    assert_eq!(stack.pop().unwrap(), "trans");
    assert!(matches!(stack.pop(), Err(QueryError::SavepointUnderflow)));
}

#[test]
fn dual_stack_duplicate_name_scenario() {
    let mut stack = DualSavepointStack::new();
    stack.push("a");
    stack.push("a");

    assert_eq!(stack.commit().unwrap(), "a");
    assert_eq!(stack.uncommitted_count(), 1);
    assert_eq!(stack.uncommitted_positions("a"), &[0]);
    assert_eq!(stack.full_positions("a"), &[0, 1]);

    assert_eq!(stack.pop().unwrap(), "a");
    assert_eq!(stack.uncommitted_count(), 1);
    assert_eq!(stack.full_positions("a"), &[0]);

    // the outer "a" is still uncommitted, so this pop releases it
    assert_eq!(stack.pop().unwrap(), "a");
    assert_eq!(stack.uncommitted_count(), 0);
    assert!(stack.is_empty());
}

#[test]
fn dual_stack_commit_to_probe() {
    let mut stack = DualSavepointStack::new();
    stack.push("trans");
    stack.push("outer");
    stack.push("inner");

    assert_eq!(stack.commit_to("missing"), None);
    assert_eq!(stack.uncommitted_count(), 3);

    assert_eq!(stack.commit_to("outer"), Some(1));
    assert_eq!(stack.uncommitted_count(), 1);
    assert_eq!(stack.uncommitted_position("inner"), None);
    assert_eq!(stack.position("inner"), Some(2));

    // popping already-committed entries leaves the uncommitted stack alone
    assert_eq!(stack.pop().unwrap(), "inner");
    assert_eq!(stack.pop().unwrap(), "outer");
    assert_eq!(stack.uncommitted_count(), 1);
    assert_eq!(stack.uncommitted_position("trans"), Some(0));
}

#[test]
fn dual_stack_reuse_after_release() {
    let mut stack = DualSavepointStack::new();
    stack.push("trans");
    stack.push("sp");
    stack.commit().unwrap();
    assert_eq!(stack.push("sp"), 2);
    assert_eq!(stack.full_positions("sp"), &[1, 2]);
    assert_eq!(stack.uncommitted_positions("sp"), &[2]);

    assert_eq!(stack.commit_to("sp"), Some(2));
    assert!(stack.uncommitted_positions("sp").is_empty());
    assert_eq!(stack.len(), 3);

    stack.reset();
    assert!(stack.is_empty());
    assert_eq!(stack.uncommitted_count(), 0);
    assert!(matches!(stack.commit(), Err(QueryError::SavepointUnderflow)));
}
