use std::io::Write;

use anyhow::Result;
use directory_client::{config::MapSettings, SelectionCascade, SelectionEvent};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::render;

pub const HELP: &str = "\
commands:
  clinic <id>       select a clinic (no id clears the selection)
  location <id>     select a location of the selected clinic
  procedure <id>    select a procedure offered at the selected location
  show              print the whole browser state
  help              print this text
  quit              leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Select(SelectionEvent),
    Show,
    Help,
    Quit,
    Unknown(String),
}

/// Parses one input line; blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<ShellCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let id = rest.trim().to_string();

    let command = match verb.to_ascii_lowercase().as_str() {
        "clinic" => ShellCommand::Select(SelectionEvent::SelectClinic(id)),
        "location" => ShellCommand::Select(SelectionEvent::SelectLocation(id)),
        "procedure" => ShellCommand::Select(SelectionEvent::SelectProcedure(id)),
        "show" => ShellCommand::Show,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => ShellCommand::Unknown(other.to_string()),
    };
    Some(command)
}

pub async fn run_shell(mut cascade: SelectionCascade, map: &MapSettings) -> Result<()> {
    let initial = SelectionEvent::Initialize;
    let category = initial.fetches();
    cascade.dispatch(initial).await;
    println!("{}", render::category_lines(cascade.state(), category, map).join("\n"));
    println!("type `help` for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let Some(command) = parse_command(&line) else {
            continue;
        };
        debug!(?command, "shell: command");

        match command {
            ShellCommand::Select(event) => {
                let category = event.fetches();
                cascade.dispatch(event).await;
                let output = render::category_lines(cascade.state(), category, map);
                if output.is_empty() {
                    println!("selection cleared");
                } else {
                    println!("{}", output.join("\n"));
                }
            }
            ShellCommand::Show => println!("{}", render::render_state(cascade.state(), map)),
            ShellCommand::Help => println!("{HELP}"),
            ShellCommand::Quit => break,
            ShellCommand::Unknown(verb) => println!("unknown command `{verb}`; type `help`"),
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/shell_tests.rs"]
mod tests;
