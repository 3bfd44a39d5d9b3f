//! Branchblog CLI: a shell over an in-memory branching blog.
//!
//! Three modes:
//! - **Shell mode**: `branchblog [flags] COMMAND` runs one command against a fresh blog
//! - **REPL mode**: `branchblog [flags]` opens an interactive prompt (if stdin is a TTY)
//! - **Pipe mode**: `cat script | branchblog` runs one command per line
//!
//! Configuration comes from `--config PATH`, or `./branchblog.toml` when it
//! exists, or built-in defaults.

mod commands;
mod format;
mod parse;
mod repl;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use branchblog_executor::{BlogConfig, Executor, PostStore, CONFIG_FILE_NAME};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_message_error, OutputMode};
use parse::{matches_to_action, CliAction};

fn main() {
    let matches = build_cli().get_matches();

    let default_filter = if matches.get_flag("verbose") {
        "branchblog=debug"
    } else {
        "branchblog=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else if matches.get_flag("raw") {
        OutputMode::Raw
    } else {
        OutputMode::Human
    };

    if matches.subcommand_name() == Some("init") {
        process::exit(run_init(output_mode));
    }

    let config = match load_config(matches.get_one::<String>("config").map(Path::new)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_message_error(&e, output_mode));
            process::exit(1);
        }
    };
    let executor = Executor::new(Arc::new(PostStore::with_config(config)));

    if matches.subcommand().is_some() {
        let exit_code = match matches_to_action(&matches) {
            Ok(CliAction::Execute(cmd)) => match executor.execute(cmd) {
                Ok(output) => {
                    let formatted = format::format_output(&output, output_mode);
                    if !formatted.is_empty() {
                        println!("{}", formatted);
                    }
                    0
                }
                Err(e) => {
                    eprintln!("{}", format::format_error(&e, output_mode));
                    1
                }
            },
            Ok(CliAction::Init) => run_init(output_mode),
            Err(msg) => {
                eprintln!("{}", format_message_error(&msg, output_mode));
                1
            }
        };
        process::exit(exit_code);
    } else if std::io::stdin().is_terminal() {
        repl::run_repl(&executor, output_mode);
    } else {
        process::exit(repl::run_pipe(&executor, output_mode));
    }
}

/// Resolve the configuration: explicit path, then `./branchblog.toml`, then defaults.
fn load_config(explicit: Option<&Path>) -> Result<BlogConfig, String> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            if !local.exists() {
                debug!(target: "branchblog::cli", "No config file, using defaults");
                return Ok(BlogConfig::default());
            }
            local
        }
    };
    debug!(target: "branchblog::cli", path = %path.display(), "Loading config");
    BlogConfig::from_file(&path).map_err(|e| format!("Failed to load config: {}", e))
}

fn run_init(mode: OutputMode) -> i32 {
    match BlogConfig::write_default_if_missing(Path::new(".")) {
        Ok(path) => {
            println!("{}", path.display());
            0
        }
        Err(e) => {
            eprintln!("{}", format_message_error(&e.to_string(), mode));
            1
        }
    }
}
