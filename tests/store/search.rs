//! Search over live posts.

use crate::common::*;
use branchblog_core::SearchRequest;
use branchblog_search::{search_posts, PostStoreSearchExt};

fn seeded() -> std::sync::Arc<PostStore> {
    let store = new_store();
    store
        .create(NewPost::new("Rust ownership", "Borrowing rules").with_tags(["lang", "Systems"]))
        .unwrap();
    store
        .create(NewPost::new("Gardening", "Tomatoes in July").with_tags(["outdoors"]))
        .unwrap();
    store
        .create(NewPost::new("Garden tools", "A rusty rake").with_tags(["outdoors", "tools"]))
        .unwrap();
    store
}

fn ids(resp: &branchblog_core::SearchResponse) -> Vec<u64> {
    resp.hits.iter().map(|p| p.id.as_u64()).collect()
}

#[test]
fn empty_query_and_tag_equal_listing() {
    let store = seeded();
    store.soft_delete(PostId::new(1)).unwrap();

    let resp = store.query().search(&SearchRequest::all());
    assert_eq!(resp.hits, store.list());
    assert_eq!(resp.count, 2);
}

#[test]
fn query_is_case_insensitive_over_title_content_and_tags() {
    let store = seeded();
    let q = store.query();
    assert_eq!(ids(&q.search_by(Some("RUST"), None)), vec![0, 2]);
    assert_eq!(ids(&q.search_by(Some("systems"), None)), vec![0]);
    assert_eq!(ids(&q.search_by(Some("tomatoes"), None)), vec![1]);
    assert!(q.search_by(Some("zebra"), None).hits.is_empty());
}

#[test]
fn tag_filter_is_exact_membership_anded_with_query() {
    let store = seeded();
    let q = store.query();
    assert_eq!(ids(&q.search_by(None, Some("OUTDOORS"))), vec![1, 2]);
    // Membership, not substring
    assert!(q.search_by(None, Some("out")).hits.is_empty());
    assert_eq!(ids(&q.search_by(Some("rake"), Some("outdoors"))), vec![2]);
    assert!(q.search_by(Some("rake"), Some("lang")).hits.is_empty());
}

#[test]
fn deleted_posts_never_match() {
    let store = seeded();
    store.soft_delete(PostId::new(0)).unwrap();
    let resp = store.read(|posts| search_posts(posts, &SearchRequest::text("rust")));
    assert_eq!(ids(&resp), vec![2]);
}

#[test]
fn forks_are_searchable_with_inherited_tags() {
    let store = seeded();
    store
        .fork(ForkRequest::of(0u64).with_content("Lifetimes"))
        .unwrap();
    let q = store.query();
    assert_eq!(ids(&q.search_by(None, Some("lang"))), vec![0, 3]);
    assert_eq!(ids(&q.search_by(Some("lifetimes"), None)), vec![3]);
}
