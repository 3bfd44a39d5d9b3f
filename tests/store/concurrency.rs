//! Concurrent access through a shared store.

use crate::common::*;
use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 8;

#[test]
fn concurrent_likes_are_not_lost() {
    let store = new_store();
    let post = create(&store, 0);
    let per_thread = 250;

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let store = store.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..per_thread {
                    store.like(post.id).unwrap();
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(
        store.get(post.id).unwrap().likes,
        (THREADS * per_thread) as u64
    );
}

#[test]
fn concurrent_creates_get_unique_dense_ids() {
    let store = new_store();
    let per_thread = 100;

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let store = store.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                (0..per_thread)
                    .map(|i| create(&store, t * per_thread + i).id)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for h in handles {
        for id in h.join().unwrap() {
            assert!(ids.insert(id), "duplicate id {}", id);
        }
    }

    let expected: HashSet<PostId> = (0..(THREADS * per_thread) as u64).map(PostId::new).collect();
    assert_eq!(ids, expected);
    assert!(store.read(check_invariants).is_ok());
}

#[test]
fn concurrent_forks_of_one_source_are_all_recorded() {
    let store = new_store();
    let root = create(&store, 0);
    let per_thread = 50;

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let store = store.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..per_thread {
                    store.fork(ForkRequest::of(root.id)).unwrap();
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    let root = store.get(root.id).unwrap();
    assert_eq!(root.forks.len(), THREADS * per_thread);
    // Forks are appended in id order
    assert!(root.forks.windows(2).all(|w| w[0] < w[1]));
    assert!(store.read(check_invariants).is_ok());
}

#[test]
fn readers_see_consistent_snapshots_during_writes() {
    let store = new_store();
    create(&store, 0);

    let writer = {
        let store = store.clone();
        thread::spawn(move || {
            for _ in 0..500 {
                let len = store.len() as u64;
                store.fork(ForkRequest::of(PostId::new(len / 2))).unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = store.clone();
            thread::spawn(move || {
                for _ in 0..200 {
                    store.read(|posts| check_invariants(posts)).unwrap();
                    let tree = store.tree(PostId::new(0)).unwrap();
                    assert!(tree.node_count() >= 1);
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for r in readers {
        r.join().unwrap();
    }
    assert_eq!(store.tree(PostId::new(0)).unwrap().node_count(), 501);
}
