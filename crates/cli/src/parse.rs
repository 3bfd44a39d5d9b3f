//! ArgMatches → Command conversion.
//!
//! Translates clap's parsed arguments into the appropriate action:
//! - Blog commands → `CliAction::Execute(Command)`
//! - `init` → `CliAction::Init`
//! - REPL meta-commands are recognised before clap via [`check_meta_command`]

use std::path::Path;

use branchblog_executor::{Blob, Command, PostId, PostUpdate, TagSet, Upload};
use clap::ArgMatches;

/// The result of parsing user input.
#[derive(Debug)]
pub enum CliAction {
    /// A command to run through the executor.
    Execute(Command),
    /// Write a default config file.
    Init,
}

/// REPL-only meta-commands.
#[derive(Debug, PartialEq, Eq)]
pub enum MetaCommand {
    Quit,
    Clear,
    Help { command: Option<String> },
}

/// Recognise a meta-command line.
pub fn check_meta_command(line: &str) -> Option<MetaCommand> {
    let mut parts = line.trim().splitn(2, char::is_whitespace);
    match parts.next()? {
        "quit" | "exit" => Some(MetaCommand::Quit),
        "clear" => Some(MetaCommand::Clear),
        "help" => Some(MetaCommand::Help {
            command: parts.next().map(|s| s.trim().to_string()),
        }),
        _ => None,
    }
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, sub) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    let cmd = match sub_name {
        "init" => return Ok(CliAction::Init),
        "create" => Command::CreatePost {
            title: required(sub, "title")?,
            content: required(sub, "content")?,
            tags: sub
                .get_one::<String>("tags")
                .map(|s| Vec::from(TagSet::parse_list(s)))
                .unwrap_or_default(),
            media: parse_upload(sub)?,
        },
        "fork" => Command::ForkPost {
            source: parse_id(sub, "source")?,
            title: sub.get_one::<String>("title").cloned(),
            content: sub.get_one::<String>("content").cloned(),
            media: parse_upload(sub)?,
        },
        "like" => Command::LikePost {
            id: parse_id(sub, "id")?,
        },
        "update" => Command::UpdatePost {
            id: parse_id(sub, "id")?,
            update: PostUpdate {
                title: sub.get_one::<String>("title").cloned(),
                content: sub.get_one::<String>("content").cloned(),
                tags: sub.get_one::<String>("tags").map(|s| TagSet::parse_list(s)),
            },
        },
        "delete" => Command::DeletePost {
            id: parse_id(sub, "id")?,
        },
        "get" => Command::GetPost {
            id: parse_id(sub, "id")?,
        },
        "list" => Command::ListPosts {
            newest_first: sub.get_flag("newest"),
        },
        "search" => Command::Search {
            query: sub.get_one::<String>("query").cloned(),
            tag: sub.get_one::<String>("tag").cloned(),
        },
        "tree" => Command::Tree {
            root: parse_id(sub, "root")?,
        },
        "ancestors" => Command::Ancestors {
            id: parse_id(sub, "id")?,
        },
        "stats" => Command::Stats,
        "ping" => Command::Ping,
        "exec" => {
            let json = required(sub, "command")?;
            serde_json::from_str(&json).map_err(|e| format!("Invalid command JSON: {}", e))?
        }
        other => return Err(format!("Unknown command: {}", other)),
    };
    Ok(CliAction::Execute(cmd))
}

fn required(m: &ArgMatches, name: &str) -> Result<String, String> {
    m.get_one::<String>(name)
        .cloned()
        .ok_or_else(|| format!("Missing argument: {}", name))
}

fn parse_id(m: &ArgMatches, name: &str) -> Result<PostId, String> {
    let raw = required(m, name)?;
    raw.trim()
        .parse::<u64>()
        .map(PostId::new)
        .map_err(|_| format!("Invalid post id: {}", raw))
}

fn parse_upload(m: &ArgMatches) -> Result<Option<Upload>, String> {
    let images = m
        .get_many::<String>("image")
        .map(|paths| paths.map(|p| read_blob(p)).collect::<Result<Vec<_>, _>>())
        .transpose()?
        .unwrap_or_default();
    let audio = m.get_one::<String>("audio").map(|p| read_blob(p)).transpose()?;
    let video = m.get_one::<String>("video").map(|p| read_blob(p)).transpose()?;

    if images.is_empty() && audio.is_none() && video.is_none() {
        return Ok(None);
    }
    Ok(Some(Upload {
        images,
        audio,
        video,
    }))
}

fn read_blob(path: &str) -> Result<Blob, String> {
    let data = std::fs::read(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    let name = Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());
    Ok(Blob::new(name, data))
}
