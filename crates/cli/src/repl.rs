//! REPL loop with rustyline.
//!
//! Interactive mode: prompt, meta-commands, history, TAB completion.
//! Pipe mode: read lines from stdin, execute each.
//!
//! Both modes accept shell-style lines (`fork 0 --title "Hello v2"`) or a
//! raw JSON command (`{"LikePost":{"id":0}}`).

use std::io::{self, BufRead};

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};

use branchblog_executor::Executor;

use crate::commands::build_repl_cmd;
use crate::format::{format_error, format_message_error, format_output, OutputMode};
use crate::parse::{check_meta_command, matches_to_action, CliAction, MetaCommand};

const PROMPT: &str = "branchblog> ";

const TOP_LEVEL_COMMANDS: &[&str] = &[
    "create", "fork", "like", "update", "delete", "get", "list", "search", "tree", "ancestors",
    "stats", "ping", "exec", "help", "clear", "quit", "exit",
];

/// Run the interactive REPL.
pub fn run_repl(executor: &Executor, mode: OutputMode) {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .build();

    let mut rl: Editor<BlogHelper, _> = match Editor::with_config(config) {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("(error) Failed to start line editor: {}", e);
            return;
        }
    };
    rl.set_helper(Some(BlogHelper));

    let history_path = history_file();
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                if let Some(meta) = check_meta_command(trimmed) {
                    match meta {
                        MetaCommand::Quit => break,
                        MetaCommand::Clear => print!("\x1B[2J\x1B[1;1H"),
                        MetaCommand::Help { command } => print_help(command.as_deref()),
                    }
                    continue;
                }

                execute_line(trimmed, executor, mode);
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("(error) {:?}", err);
                break;
            }
        }
    }

    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }
}

/// Run in pipe mode: read lines from stdin, execute each.
///
/// Returns 1 if any line failed, 0 otherwise.
pub fn run_pipe(executor: &Executor, mode: OutputMode) -> i32 {
    let stdin = io::stdin();
    let mut exit_code = 0;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if !execute_line(trimmed, executor, mode) {
            exit_code = 1;
        }
    }

    exit_code
}

/// Execute one input line. Returns true on success.
pub fn execute_line(line: &str, executor: &Executor, mode: OutputMode) -> bool {
    if line.starts_with('{') || line.starts_with('"') {
        return report(executor.execute_json(line), mode);
    }

    let tokens = match shlex::split(line) {
        Some(t) if !t.is_empty() => t,
        Some(_) => return true,
        None => {
            eprintln!("{}", format_message_error("Invalid quoting", mode));
            return false;
        }
    };

    let matches = match build_repl_cmd().try_get_matches_from(tokens) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{}", e);
            return false;
        }
    };

    match matches_to_action(&matches) {
        Ok(CliAction::Execute(cmd)) => report(executor.execute(cmd), mode),
        Ok(CliAction::Init) => {
            eprintln!("{}", format_message_error("init is not available here", mode));
            false
        }
        Err(msg) => {
            eprintln!("{}", format_message_error(&msg, mode));
            false
        }
    }
}

fn report(result: branchblog_executor::Result<branchblog_executor::Output>, mode: OutputMode) -> bool {
    match result {
        Ok(output) => {
            let formatted = format_output(&output, mode);
            if !formatted.is_empty() {
                println!("{}", formatted);
            }
            true
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            false
        }
    }
}

fn history_file() -> Option<String> {
    std::env::var("HOME")
        .ok()
        .map(|h| format!("{}/.branchblog_history", h))
}

fn print_help(command: Option<&str>) {
    let mut cli = build_repl_cmd();
    match command {
        Some(cmd) => {
            if let Err(e) = cli.try_get_matches_from_mut(vec![cmd, "--help"]) {
                println!("{}", e);
            }
        }
        None => {
            let _ = cli.print_help();
            println!();
            println!("Meta-commands: help [command], clear, quit");
            println!("Raw JSON commands are accepted too, e.g. {{\"Tree\":{{\"root\":0}}}}");
        }
    }
}

struct BlogHelper;

impl Helper for BlogHelper {}
impl Validator for BlogHelper {}
impl Highlighter for BlogHelper {}
impl Hinter for BlogHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Completer for BlogHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_pos = &line[..pos];
        let parts: Vec<&str> = line_to_pos.split_whitespace().collect();
        let trailing_space = line_to_pos.ends_with(' ');

        // Only the command word is completed
        if parts.len() > 1 || (parts.len() == 1 && trailing_space) {
            return Ok((pos, Vec::new()));
        }

        let prefix = parts.first().copied().unwrap_or("");
        let candidates = TOP_LEVEL_COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(prefix))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((pos - prefix.len(), candidates))
    }
}
