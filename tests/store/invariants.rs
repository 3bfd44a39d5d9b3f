//! Structural invariants checked over random create/fork/delete sequences.

use crate::common::*;
use proptest::prelude::*;

fn steps() -> impl Strategy<Value = Vec<Step>> {
    prop::collection::vec(prop::option::of(0usize..64), 1..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ids_are_dense_and_match_positions(steps in steps()) {
        let store = new_store();
        let ids = apply_steps(&store, &steps);

        let expected: Vec<PostId> = (0..steps.len() as u64).map(PostId::new).collect();
        prop_assert_eq!(ids, expected);
        store.read(|posts| {
            for (i, p) in posts.iter().enumerate() {
                assert_eq!(p.id.as_u64(), i as u64);
            }
        });
    }

    #[test]
    fn parent_and_fork_lists_agree(steps in steps()) {
        let store = new_store();
        apply_steps(&store, &steps);
        prop_assert!(store.read(check_invariants).is_ok());

        let posts = store.export();
        for post in &posts {
            if let Some(parent) = post.parent {
                prop_assert!(parent < post.id);
                let listed = posts[parent.as_u64() as usize]
                    .forks
                    .iter()
                    .filter(|f| **f == post.id)
                    .count();
                prop_assert_eq!(listed, 1);
            }
            for f in &post.forks {
                prop_assert!(*f > post.id);
                prop_assert_eq!(posts[f.as_u64() as usize].parent, Some(post.id));
            }
        }
    }

    #[test]
    fn tree_covers_every_reachable_post(
        steps in steps(),
        deletes in prop::collection::vec(0usize..64, 0..10),
    ) {
        let store = new_store();
        let ids = apply_steps(&store, &steps);
        for d in deletes {
            store.soft_delete(ids[d % ids.len()]).unwrap();
        }

        let posts = store.export();
        for root in posts.iter().filter(|p| p.is_root()) {
            let tree = store.tree(root.id).unwrap();
            prop_assert_eq!(tree.node_count(), reachable_count(&posts, root.id));
        }
        // Roots partition the store
        let total: usize = posts
            .iter()
            .filter(|p| p.is_root())
            .map(|p| store.tree(p.id).unwrap().node_count())
            .sum();
        prop_assert_eq!(total, posts.len());
    }

    #[test]
    fn listing_hides_deleted_but_get_does_not(
        steps in steps(),
        deletes in prop::collection::vec(0usize..64, 0..10),
    ) {
        let store = new_store();
        let ids = apply_steps(&store, &steps);
        let mut deleted = std::collections::HashSet::new();
        for d in deletes {
            let id = ids[d % ids.len()];
            store.soft_delete(id).unwrap();
            deleted.insert(id);
        }

        let listed: Vec<PostId> = store.list().iter().map(|p| p.id).collect();
        for id in &ids {
            prop_assert_eq!(listed.contains(id), !deleted.contains(id));
            let post = store.get(*id).unwrap();
            prop_assert_eq!(post.deleted, deleted.contains(id));
        }
        prop_assert_eq!(store.live_count(), ids.len() - deleted.len());
    }

    #[test]
    fn ancestors_walk_back_to_a_root(steps in steps()) {
        let store = new_store();
        let ids = apply_steps(&store, &steps);
        for id in ids {
            let chain = store.ancestors(id).unwrap();
            let mut current = id;
            for a in &chain {
                prop_assert!(*a < current);
                current = *a;
            }
            prop_assert!(store.get(current).unwrap().is_root());
        }
    }
}

#[test]
fn restore_round_trips_an_exported_store() {
    let store = new_store();
    apply_steps(&store, &[None, Some(0), Some(0), None, Some(1)]);
    store.soft_delete(PostId::new(2)).unwrap();

    let restored = PostStore::restore(store.export(), BlogConfig::default()).unwrap();
    assert_eq!(restored.export(), store.export());
    assert_eq!(restored.tree(PostId::new(0)).unwrap(), store.tree(PostId::new(0)).unwrap());
}

#[test]
fn restore_rejects_broken_links() {
    let store = new_store();
    apply_steps(&store, &[None, Some(0)]);
    let mut posts = store.export();
    posts[0].forks.clear();

    let err = PostStore::restore(posts, BlogConfig::default()).unwrap_err();
    assert!(err.is_corrupt());
}
