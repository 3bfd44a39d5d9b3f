//! Clap command tree definition.
//!
//! Builds the `clap::Command` tree used by both shell mode (directly)
//! and REPL/pipe mode (via `try_get_matches_from`).

use clap::{Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    let cli = Command::new("branchblog")
        .about("Shell for a blog whose posts fork into trees")
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a branchblog.toml (default: ./branchblog.toml if present)")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .conflicts_with("raw")
                .global(true),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .help("Raw output mode (bare values)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log store activity to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("init").about("Write a default branchblog.toml into the current directory"),
        );
    with_blog_commands(cli)
}

/// Build the command tree for REPL and pipe mode.
///
/// Uses `multicall` so the first token is the subcommand.
pub fn build_repl_cmd() -> Command {
    with_blog_commands(Command::new("repl").multicall(true).subcommand_required(true))
}

fn with_blog_commands(cmd: Command) -> Command {
    cmd.subcommand(build_create())
        .subcommand(build_fork())
        .subcommand(id_command("like", "Like a post"))
        .subcommand(build_update())
        .subcommand(id_command("delete", "Soft-delete a post"))
        .subcommand(id_command("get", "Show a post, deleted or not"))
        .subcommand(
            Command::new("list").about("List live posts").arg(
                Arg::new("newest")
                    .long("newest")
                    .help("Newest first")
                    .action(ArgAction::SetTrue),
            ),
        )
        .subcommand(
            Command::new("search")
                .about("Search live posts by text and tag")
                .arg(Arg::new("query").help("Substring of title, content or tags"))
                .arg(Arg::new("tag").long("tag").help("Substring of one of the tags")),
        )
        .subcommand(
            Command::new("tree")
                .about("Show the fork tree under a post")
                .arg(Arg::new("root").required(true).help("Root post id")),
        )
        .subcommand(id_command("ancestors", "Show the parent chain of a post"))
        .subcommand(Command::new("stats").about("Post counts"))
        .subcommand(Command::new("ping").about("Check the executor responds"))
        .subcommand(
            Command::new("exec")
                .about("Execute a raw JSON command")
                .arg(Arg::new("command").required(true).help("Command as JSON")),
        )
}

fn id_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(Arg::new("id").required(true).help("Post id"))
}

fn media_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("image")
            .long("image")
            .help("Image file; the first one is the cover")
            .action(ArgAction::Append),
    )
    .arg(Arg::new("audio").long("audio").help("Audio file"))
    .arg(Arg::new("video").long("video").help("Video file"))
}

fn build_create() -> Command {
    media_args(
        Command::new("create")
            .about("Publish a new post")
            .arg(Arg::new("title").required(true))
            .arg(Arg::new("content").required(true))
            .arg(
                Arg::new("tags")
                    .long("tags")
                    .help("Comma-separated tags"),
            ),
    )
}

fn build_fork() -> Command {
    media_args(
        Command::new("fork")
            .about("Fork a post into a new version")
            .arg(Arg::new("source").required(true).help("Post to fork"))
            .arg(Arg::new("title").long("title").help("Title (default: source title + suffix)"))
            .arg(Arg::new("content").long("content").help("Content (default: source content)")),
    )
}

fn build_update() -> Command {
    Command::new("update")
        .about("Edit a post in place")
        .arg(Arg::new("id").required(true).help("Post id"))
        .arg(Arg::new("title").long("title"))
        .arg(Arg::new("content").long("content"))
        .arg(Arg::new("tags").long("tags").help("Comma-separated tags, replaces existing"))
}
