//! JSON command transport.

use branchblog::{Blog, Command, Output, PostId};

#[test]
fn json_script_drives_the_blog() {
    let blog = Blog::new();
    let script = [
        r#"{"CreatePost":{"title":"Hello","content":"World"}}"#,
        r#"{"ForkPost":{"source":0,"title":"Hello v2"}}"#,
        r#"{"LikePost":{"id":1}}"#,
        r#"{"DeletePost":{"id":0}}"#,
    ];
    for line in script {
        blog.executor().execute_json(line).unwrap();
    }

    match blog.executor().execute_json(r#"{"Tree":{"root":0}}"#).unwrap() {
        Output::Tree(tree) => {
            assert!(tree.deleted);
            assert_eq!(tree.children[0].title, "Hello v2");
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn outputs_serialize_for_transport() {
    let blog = Blog::new();
    let out = blog
        .executor()
        .execute(Command::CreatePost {
            title: "Hello".into(),
            content: "World".into(),
            tags: vec!["Intro".into()],
            media: None,
        })
        .unwrap();

    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["Post"]["id"], 0);
    assert_eq!(json["Post"]["tags"], serde_json::json!(["Intro"]));
    assert!(json["Post"]["created_at"].is_u64());
    assert!(json["Post"].get("media").is_none());
}

#[test]
fn batch_reports_each_result() {
    let blog = Blog::new();
    let results = blog.executor().execute_many(vec![
        Command::CreatePost {
            title: "A".into(),
            content: "a".into(),
            tags: vec![],
            media: None,
        },
        Command::Tree {
            root: PostId::new(5),
        },
        Command::Ancestors { id: PostId::new(0) },
    ]);
    assert!(results[0].is_ok());
    assert_eq!(results[1].as_ref().unwrap_err().kind(), "not_found");
    assert_eq!(results[2], Ok(Output::PostIds(vec![])));
}
