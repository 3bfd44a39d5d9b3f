//! End-to-end fork, delete and error scenarios.

use crate::common::*;
use branchblog_core::PostUpdate;

#[test]
fn hello_fork_builds_two_node_tree() {
    let store = new_store();
    let hello = store.create(NewPost::new("Hello", "World")).unwrap();
    let v2 = store
        .fork(ForkRequest::of(hello.id).with_title("Hello v2"))
        .unwrap();

    assert_eq!(hello.id, PostId::new(0));
    assert_eq!(v2.id, PostId::new(1));
    assert_eq!(v2.parent, Some(PostId::new(0)));
    assert_eq!(v2.content, "World");
    assert_eq!(store.get(hello.id).unwrap().forks, vec![v2.id]);

    let tree = store.tree(hello.id).unwrap();
    assert_eq!(tree.title, "Hello");
    assert_eq!(tree.children.len(), 1);
    assert_eq!(tree.children[0].id, v2.id);
    assert_eq!(tree.children[0].title, "Hello v2");
    assert!(tree.children[0].children.is_empty());
}

#[test]
fn deleted_root_still_anchors_its_tree() {
    let store = new_store();
    let hello = store.create(NewPost::new("Hello", "World")).unwrap();
    store
        .fork(ForkRequest::of(hello.id).with_title("Hello v2"))
        .unwrap();

    store.soft_delete(hello.id).unwrap();

    let tree = store.tree(hello.id).unwrap();
    assert!(tree.deleted);
    assert_eq!(tree.node_count(), 2);
    assert!(!tree.children[0].deleted);

    let listed: Vec<PostId> = store.list().iter().map(|p| p.id).collect();
    assert_eq!(listed, vec![PostId::new(1)]);
    assert!(store.get(hello.id).unwrap().deleted);
}

#[test]
fn fork_of_missing_post_is_not_found_and_changes_nothing() {
    let store = new_store();
    for n in 0..3 {
        create(&store, n);
    }
    let before = store.export();

    let err = store.fork(ForkRequest::of(99u64)).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(store.export(), before);
}

#[test]
fn deleted_post_policy_governs_mutations() {
    let strict = new_store();
    let p = create(&strict, 0);
    strict.soft_delete(p.id).unwrap();
    assert!(strict.like(p.id).unwrap_err().is_deleted());
    assert!(strict.fork(ForkRequest::of(p.id)).unwrap_err().is_deleted());
    assert!(strict
        .update(
            p.id,
            PostUpdate {
                title: Some("x".into()),
                ..Default::default()
            }
        )
        .unwrap_err()
        .is_deleted());

    let lenient =
        PostStore::with_config(BlogConfig::default().with_deleted_posts(DeletedPostPolicy::Allow));
    let p = create(&lenient, 0);
    lenient.soft_delete(p.id).unwrap();
    assert_eq!(lenient.like(p.id).unwrap(), 1);
    let fork = lenient.fork(ForkRequest::of(p.id)).unwrap();
    assert!(!fork.deleted);
}

#[test]
fn blank_fields_are_rejected_before_any_write() {
    let store = new_store();
    assert!(store.create(NewPost::new("  ", "body")).unwrap_err().is_validation());
    assert!(store.create(NewPost::new("title", "")).unwrap_err().is_validation());
    assert!(store.is_empty());

    let p = create(&store, 0);
    assert!(store
        .fork(ForkRequest::of(p.id).with_title(""))
        .unwrap_err()
        .is_validation());
    assert_eq!(store.len(), 1);
    assert!(store.get(p.id).unwrap().forks.is_empty());
}

#[test]
fn deep_fork_chain_renders_to_full_depth() {
    let store = new_store();
    let mut id = create(&store, 0).id;
    for _ in 0..200 {
        id = store.fork(ForkRequest::of(id)).unwrap().id;
    }

    let tree = store.tree(PostId::new(0)).unwrap();
    assert_eq!(tree.node_count(), 201);
    assert_eq!(tree.depth(), 201);
    assert_eq!(store.ancestors(id).unwrap().len(), 200);
}
