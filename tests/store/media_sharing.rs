//! Copy-on-write media shared between a post and its forks.

use crate::common::*;
use branchblog_core::{Blob, CoverAnalysis, MediaBundle, Rgb};
use branchblog_engine::{bind, MediaUpload};

fn bundle() -> MediaBundle {
    let analyzer = |_: &Blob| CoverAnalysis {
        dominant_color: Some(Rgb(200, 30, 30)),
        suggested_tags: vec!["red".into(), "warm".into()],
    };
    bind(
        MediaUpload::new()
            .image(Blob::new("cover.png", vec![1, 2, 3]))
            .audio(Blob::new("theme.ogg", vec![4])),
        &analyzer,
    )
}

#[test]
fn forks_share_media_until_replaced() {
    let store = new_store();
    let root = store
        .create(NewPost::new("Art", "Sketch").with_media(bundle()))
        .unwrap();
    assert_eq!(root.tags.as_slice(), &["red", "warm"]);

    let plain = store.fork(ForkRequest::of(root.id)).unwrap();
    assert!(plain.shares_media_with(&root));
    assert_eq!(plain.tags, root.tags);

    let replacement = bind(
        MediaUpload::new().video(Blob::new("clip.mp4", vec![9])),
        &|_: &Blob| CoverAnalysis::default(),
    );
    let replaced = store
        .fork(ForkRequest::of(root.id).with_media(replacement))
        .unwrap();
    assert!(!replaced.shares_media_with(&root));
    assert!(replaced.media.as_ref().unwrap().images.is_empty());

    // The source keeps its own bundle
    let root = store.get(root.id).unwrap();
    assert_eq!(root.media.as_ref().unwrap().audio.as_ref().unwrap().name, "theme.ogg");
}

#[test]
fn writing_through_a_shared_bundle_copies_it() {
    let store = new_store();
    let root = store
        .create(NewPost::new("Art", "Sketch").with_media(bundle()))
        .unwrap();
    let mut fork = store.fork(ForkRequest::of(root.id)).unwrap();
    assert!(fork.shares_media_with(&root));

    if let Some(media) = fork.media_mut() {
        media.audio = None;
    }
    assert!(!fork.shares_media_with(&root));
    assert!(store.get(root.id).unwrap().media.unwrap().audio.is_some());
}
