//! Interactive session shell.
//!
//! Reads one command per line from stdin, runs it through the coordinator,
//! and prints the session after every action. Arguments are split on
//! whitespace.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use std::io::{self, BufRead, Write};

use portal_session::{SessionAction, SessionCoordinator, SessionGateway, SessionStore};

use crate::error::CliError;
use crate::render::{render_redirect, render_state};

pub const HELP: &str = "\
commands:
  whoami
  login <email> <password>
  register <name> <email> <password>
  update <name> <email> [password]
  logout
  help
  quit";

#[derive(Debug, PartialEq, Eq)]
pub enum ShellCommand {
    Action(SessionAction),
    Whoami,
    Help,
    Quit,
    Empty,
}

/// Parse one input line.
///
/// # Errors
///
/// A usage message for unknown commands or wrong argument counts.
pub fn parse_line(line: &str) -> Result<ShellCommand, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let owned = |i: usize| words[i].to_owned();
    let command = match words.as_slice() {
        [] => ShellCommand::Empty,
        ["whoami"] => ShellCommand::Whoami,
        ["help"] => ShellCommand::Help,
        ["quit" | "exit"] => ShellCommand::Quit,
        ["logout"] => ShellCommand::Action(SessionAction::Logout),
        ["login", _, _] => ShellCommand::Action(SessionAction::Login { email: owned(1), password: owned(2) }),
        ["register", _, _, _] => {
            ShellCommand::Action(SessionAction::Register { name: owned(1), email: owned(2), password: owned(3) })
        }
        ["update", _, _] => {
            ShellCommand::Action(SessionAction::UpdateProfile { name: owned(1), email: owned(2), password: None })
        }
        ["update", _, _, _] => ShellCommand::Action(SessionAction::UpdateProfile {
            name: owned(1),
            email: owned(2),
            password: Some(owned(3)),
        }),
        [name, ..] => return Err(format!("unknown or malformed command `{name}`; type `help`")),
    };
    Ok(command)
}

/// Run the shell until `quit` or end of input.
///
/// # Errors
///
/// [`CliError::Io`] when stdin or stdout fails. Action failures are printed
/// and do not end the shell.
pub async fn run<G, S>(coordinator: &SessionCoordinator<G, S>) -> Result<(), CliError>
where
    G: SessionGateway,
    S: SessionStore,
{
    println!("{}", render_state(&coordinator.state()));
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        match parse_line(&line?) {
            Ok(ShellCommand::Empty) => {}
            Ok(ShellCommand::Quit) => break,
            Ok(ShellCommand::Help) => println!("{HELP}"),
            Ok(ShellCommand::Whoami) => println!("{}", render_state(&coordinator.state())),
            Ok(ShellCommand::Action(action)) => {
                let label = action.label();
                match coordinator.dispatch(action).await {
                    Ok(Some(redirect)) => println!("{}", render_redirect(redirect)),
                    Ok(None) => {}
                    Err(err) => tracing::debug!(action = label, error = %err, "shell: action failed"),
                }
                println!("{}", render_state(&coordinator.state()));
            }
            Err(usage) => println!("{usage}"),
        }
    }
    Ok(())
}
