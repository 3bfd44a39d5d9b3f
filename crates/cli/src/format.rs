//! Output → human/json/raw string formatting.
//!
//! Three modes:
//! - **Human** (default): readable listings and an indented fork tree
//! - **JSON** (`--json`): `serde_json::to_string_pretty`
//! - **Raw** (`--raw`): bare ids and values, one per line

use branchblog_executor::{Error, Output, Post, TreeNode};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Raw,
}

/// Format a successful output.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json(output),
        OutputMode::Raw => format_raw(output),
        OutputMode::Human => format_human(output),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": { "kind": err.kind(), "message": err.to_string() }
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Raw => err.to_string(),
        OutputMode::Human => format!("(error) {}", err),
    }
}

/// Format a message that did not come from the executor (parse errors, I/O).
pub fn format_message_error(msg: &str, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::json!({ "error": { "kind": "cli", "message": msg } })
            .to_string(),
        OutputMode::Raw => msg.to_string(),
        OutputMode::Human => format!("(error) {}", msg),
    }
}

fn format_json(output: &Output) -> String {
    serde_json::to_string_pretty(output).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

fn format_raw(output: &Output) -> String {
    match output {
        Output::Unit => String::new(),
        Output::Pong { version } => version.clone(),
        Output::Post(post) => post.content.clone(),
        Output::Posts(posts) => join_lines(posts.iter().map(|p| p.id.to_string())),
        Output::Likes(n) => n.to_string(),
        Output::Search(resp) => join_lines(resp.hits.iter().map(|p| p.id.to_string())),
        Output::Tree(tree) => join_lines(tree.ids().into_iter().map(|id| id.to_string())),
        Output::PostIds(ids) => join_lines(ids.iter().map(|id| id.to_string())),
        Output::Stats(stats) => format!("{} {}", stats.total, stats.live),
    }
}

fn format_human(output: &Output) -> String {
    match output {
        Output::Unit => "OK".to_string(),
        Output::Pong { version } => format!("PONG {}", version),
        Output::Post(post) => format_post(post),
        Output::Posts(posts) => format_listing(posts),
        Output::Likes(n) => format!("(integer) {}", n),
        Output::Search(resp) => {
            let hits = if resp.count == 1 { "hit" } else { "hits" };
            if resp.hits.is_empty() {
                format!("(0 {})", hits)
            } else {
                format!("{}\n({} {})", format_listing(&resp.hits), resp.count, hits)
            }
        }
        Output::Tree(tree) => {
            let mut out = String::new();
            render_tree(tree, &mut out);
            out.trim_end().to_string()
        }
        Output::PostIds(ids) if ids.is_empty() => "(root)".to_string(),
        Output::PostIds(ids) => ids
            .iter()
            .map(|id| format!("#{}", id))
            .collect::<Vec<_>>()
            .join(" <- "),
        Output::Stats(stats) => format!("total: {}\nlive:  {}", stats.total, stats.live),
    }
}

fn format_post(post: &Post) -> String {
    let mut lines = vec![format!(
        "#{} {}{}",
        post.id,
        post.title,
        if post.deleted { " (deleted)" } else { "" }
    )];
    if !post.tags.is_empty() {
        lines.push(format!(
            "  tags:    {}",
            post.tags.iter().collect::<Vec<_>>().join(", ")
        ));
    }
    lines.push(format!("  likes:   {}", post.likes));
    lines.push(format!("  created: {}", post.created_at.to_rfc3339()));
    if let Some(parent) = post.parent {
        lines.push(format!("  parent:  #{}", parent));
    }
    if !post.forks.is_empty() {
        let forks: Vec<String> = post.forks.iter().map(|f| format!("#{}", f)).collect();
        lines.push(format!("  forks:   {}", forks.join(", ")));
    }
    if let Some(media) = &post.media {
        let mut parts = Vec::new();
        if !media.images.is_empty() {
            parts.push(format!("{} image(s)", media.images.len()));
        }
        if let Some(audio) = &media.audio {
            parts.push(format!("audio {}", audio.name));
        }
        if let Some(video) = &media.video {
            parts.push(format!("video {}", video.name));
        }
        if let Some(c) = media.dominant_color() {
            parts.push(format!("cover #{:02x}{:02x}{:02x}", c.0, c.1, c.2));
        }
        lines.push(format!("  media:   {}", parts.join(", ")));
    }
    lines.push(String::new());
    lines.push(post.content.clone());
    lines.join("\n")
}

fn format_listing(posts: &[Post]) -> String {
    if posts.is_empty() {
        return "(empty list)".to_string();
    }
    posts
        .iter()
        .map(|p| {
            let mut line = format!("#{} {} ({} likes)", p.id, p.title, p.likes);
            if !p.tags.is_empty() {
                line.push_str(&format!(" [{}]", p.tags.joined()));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_tree(root: &TreeNode, out: &mut String) {
    // (node, prefix, is_last); root has no connector
    let mut stack: Vec<(&TreeNode, String, Option<bool>)> = vec![(root, String::new(), None)];
    while let Some((node, prefix, last)) = stack.pop() {
        let label = format!(
            "#{} {}{}",
            node.id,
            node.title,
            if node.deleted { " (deleted)" } else { "" }
        );
        let child_prefix = match last {
            None => {
                out.push_str(&label);
                String::new()
            }
            Some(is_last) => {
                out.push_str(&prefix);
                out.push_str(if is_last { "└─ " } else { "├─ " });
                out.push_str(&label);
                format!("{}{}", prefix, if is_last { "   " } else { "│  " })
            }
        };
        out.push('\n');

        let n = node.children.len();
        for (i, child) in node.children.iter().enumerate().rev() {
            stack.push((child, child_prefix.clone(), Some(i + 1 == n)));
        }
    }
}

fn join_lines(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join("\n")
}
