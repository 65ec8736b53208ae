//! Interactive board front end.
//!
//! # Responsibility
//! - Stand in for the graphical views: read commands from stdin, forward
//!   form submits and move gestures into the board service.
//! - Re-render the whole board after every store notification.

use log::info;
use projectboard_core::{
    default_log_level, init_logging, render_board, BoardService, ProjectStatus, ProjectStore,
};
use std::io::{self, BufRead, Write};

const INVALID_INPUT_MESSAGE: &str = "Invalid input, please try again!";

fn main() {
    let log_dir = std::env::temp_dir().join("projectboard-logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir) {
        eprintln!("logging disabled: {err}");
    }

    let mut board = BoardService::new(ProjectStore::new());
    // The render listener captures nothing but stdout; every mutation
    // repaints the full board, like the original list views did.
    board.add_listener(|projects| {
        println!();
        print!("{}", render_board(&projects));
    });

    info!(
        "event=session_start module=cli status=ok version={}",
        projectboard_core::core_version()
    );
    println!(
        "projectboard {} -- type `help` for commands",
        projectboard_core::core_version()
    );

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("stdin error: {err}");
                break;
            }
        }
        if !dispatch(&mut board, line.trim()) {
            break;
        }
    }

    info!("event=session_end module=cli status=ok");
}

/// Handles one command line. Returns `false` when the session should end.
fn dispatch(board: &mut BoardService, line: &str) -> bool {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "" => {}
        "help" => print_help(),
        "list" => print!("{}", render_board(&board.snapshot())),
        "add" => add_project(board, rest),
        "move" => move_project(board, rest),
        "quit" | "exit" => return false,
        other => println!("unknown command `{other}`; type `help`"),
    }
    true
}

/// The form-submit path: `add <title> | <description> | <team size>`.
fn add_project(board: &mut BoardService, rest: &str) {
    let mut fields = rest.splitn(3, '|').map(str::trim);
    let title = fields.next().unwrap_or("");
    let description = fields.next().unwrap_or("");
    let team_size = fields.next().unwrap_or("");

    if board.submit_project(title, description, team_size).is_err() {
        println!("{INVALID_INPUT_MESSAGE}");
    }
}

/// The drop-gesture path: `move <id prefix> active|finished`.
///
/// Prefix resolution failures are reported here; once a project is
/// addressed, the store keeps its silent no-op semantics for moves that
/// change nothing.
fn move_project(board: &mut BoardService, rest: &str) {
    let Some((prefix, status)) = rest.split_once(char::is_whitespace) else {
        println!("usage: move <id prefix> active|finished");
        return;
    };

    let new_status = match status.trim() {
        "active" => ProjectStatus::Active,
        "finished" => ProjectStatus::Finished,
        other => {
            println!("unknown status `{other}`; expected active|finished");
            return;
        }
    };

    let snapshot = board.snapshot();
    let mut matches = snapshot
        .iter()
        .filter(|p| p.id.to_string().starts_with(prefix));
    match (matches.next(), matches.next()) {
        (Some(project), None) => board.move_project(project.id, new_status),
        (Some(_), Some(_)) => println!("id prefix `{prefix}` is ambiguous"),
        (None, _) => println!("no project matches id prefix `{prefix}`"),
    }
}

fn print_help() {
    println!("commands:");
    println!("  add <title> | <description> | <team size>");
    println!("  move <id prefix> active|finished");
    println!("  list");
    println!("  quit");
}
