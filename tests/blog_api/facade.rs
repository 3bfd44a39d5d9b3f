//! Typed facade operations.

use branchblog::{Blog, Error, PostId, PostUpdate, TagSet};

#[test]
fn fork_chain_tree_and_ancestors() {
    let blog = Blog::new();
    let hello = blog.create_post("Hello", "World", &["intro"]).unwrap();
    let v2 = blog.fork_post(hello.id, Some("Hello v2")).unwrap();
    let v3 = blog.fork_post(v2.id, None).unwrap();
    let alt = blog.fork_post(hello.id, Some("Alt")).unwrap();

    assert_eq!(v3.title, "Hello v2 (fork)");
    assert_eq!(v3.tags.as_slice(), &["intro"]);

    let tree = blog.tree(hello.id).unwrap();
    assert_eq!(tree.ids(), vec![hello.id, v2.id, v3.id, alt.id]);
    assert_eq!(blog.ancestors(v3.id).unwrap(), vec![v2.id, hello.id]);
    assert!(blog.ancestors(hello.id).unwrap().is_empty());
}

#[test]
fn likes_update_and_delete() {
    let blog = Blog::new();
    let post = blog.create_post("Draft", "v1", &[]).unwrap();
    assert_eq!(blog.like(post.id).unwrap(), 1);
    assert_eq!(blog.like(post.id).unwrap(), 2);

    let updated = blog
        .update(
            post.id,
            PostUpdate {
                content: Some("v2".into()),
                tags: Some(TagSet::parse_list("news, News, daily")),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.title, "Draft");
    assert_eq!(updated.content, "v2");
    assert_eq!(updated.tags.as_slice(), &["news", "daily"]);
    assert_eq!(updated.likes, 2);

    blog.delete(post.id).unwrap();
    assert!(blog.list().unwrap().is_empty());
    assert!(blog.get(post.id).unwrap().deleted);
    assert_eq!(blog.like(post.id), Err(Error::PostDeleted { id: 0 }));

    let stats = blog.stats().unwrap();
    assert_eq!((stats.total, stats.live), (1, 0));
}

#[test]
fn errors_carry_stable_kinds() {
    let blog = Blog::new();
    blog.create_post("a", "b", &[]).unwrap();

    let err = blog.fork_post(PostId::new(99), None).unwrap_err();
    assert_eq!(err, Error::NotFound { id: 99 });
    assert_eq!(err.kind(), "not_found");

    let err = blog.create_post("", "b", &[]).unwrap_err();
    assert_eq!(err.kind(), "validation");
    assert_eq!(blog.stats().unwrap().total, 1);
}

#[test]
fn search_counts_hits() {
    let blog = Blog::new();
    blog.create_post("Rust", "fearless", &["lang"]).unwrap();
    blog.create_post("Go", "simple", &["lang"]).unwrap();
    blog.create_post("Bread", "sourdough", &["food"]).unwrap();

    let resp = blog.search(None, Some("LANG")).unwrap();
    assert_eq!(resp.count, 2);
    let resp = blog.search(Some("sour"), None).unwrap();
    assert_eq!(resp.hits[0].title, "Bread");
    assert_eq!(blog.search(None, None).unwrap().count, 3);
}
