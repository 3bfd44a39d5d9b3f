//! Boundary shapes: very deep fork chains and default titles at the limit.

use crate::common::*;

#[test]
fn deep_fork_chain_tree_and_ancestry() {
    const DEPTH: u64 = 5_000;
    let store = new_store();
    create(&store, 0);
    for i in 0..DEPTH {
        store.fork(ForkRequest::of(i)).unwrap();
    }

    let tree = store.tree(PostId::new(0)).unwrap();
    assert_eq!(tree.node_count(), DEPTH as usize + 1);
    assert_eq!(tree.depth(), DEPTH as usize + 1);
    assert_eq!(tree.ids().last(), Some(&PostId::new(DEPTH)));

    let ancestry = store.ancestors(PostId::new(DEPTH)).unwrap();
    assert_eq!(ancestry.len(), DEPTH as usize);
    assert!(store.read(check_invariants).is_ok());

    // A subtree from the middle of the chain
    let mid = store.tree(PostId::new(DEPTH / 2)).unwrap();
    assert_eq!(mid.node_count(), (DEPTH - DEPTH / 2) as usize + 1);
}

#[test]
fn default_fork_of_title_at_limit() {
    let store = new_store();
    let max = store.config().limits.max_title_bytes;
    let root = store
        .create(NewPost::new("t".repeat(max - 4), "body"))
        .unwrap();

    let fork = store.fork(ForkRequest::of(root.id)).unwrap();
    assert!(fork.title.len() <= max);
    assert!(fork.title.ends_with(" (fork)"));
    assert_eq!(fork.content, "body");
}

#[test]
fn default_fork_of_multibyte_title_at_limit() {
    let store = new_store();
    let max = store.config().limits.max_title_bytes;
    // Three-byte chars so the cut point falls inside one
    let root = store
        .create(NewPost::new("語".repeat(max / 3), "body"))
        .unwrap();

    let fork = store.fork(ForkRequest::of(root.id)).unwrap();
    assert!(fork.title.len() <= max);
    assert!(fork.title.ends_with("語 (fork)"));
}

#[test]
fn repeated_default_forks_stay_within_limit() {
    let store = new_store();
    let max = store.config().limits.max_title_bytes;
    let mut id = create(&store, 0).id;
    for _ in 0..100 {
        let fork = store.fork(ForkRequest::of(id)).unwrap();
        assert!(fork.title.len() <= max);
        id = fork.id;
    }
    assert_eq!(store.len(), 101);
    assert!(store.read(check_invariants).is_ok());
}
