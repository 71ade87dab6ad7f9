//! Terminal front end for the session portal.
//!
//! Every command first restores the session (from `--session-token` when
//! given), then runs one coordinator action and prints the resulting state.
//! The process exits non-zero when that action failed.

mod error;
mod gateway;
mod render;
mod shell;

use clap::{Parser, Subcommand};
use portal_session::{MemoryStore, SessionCoordinator, SessionError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::CliError;
use crate::gateway::ReqwestGateway;
use crate::render::{export_line, render_redirect, render_state};

type CliCoordinator = SessionCoordinator<ReqwestGateway, MemoryStore>;

#[derive(Parser, Debug)]
#[command(name = "portal-cli", about = "Register, sign in and manage a portal session")]
struct Cli {
    #[arg(long, env = "PORTAL_API_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    /// Existing `jwt` session cookie value.
    #[arg(long, env = "PORTAL_SESSION_TOKEN")]
    session_token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the current session.
    Whoami,
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Update name and email, and the password when given.
    Update {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: Option<String>,
    },
    Logout,
    /// Interactive prompt sharing one session across commands.
    Shell,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let gateway = ReqwestGateway::new(&cli.base_url, cli.session_token.as_deref())?;
    let coordinator = SessionCoordinator::new(gateway, MemoryStore::new());

    let restored = coordinator.initialize().await;
    if let Err(err) = &restored {
        tracing::warn!(error = %err, "session restore failed");
    }

    match cli.command {
        Command::Whoami => {
            println!("{}", render_state(&coordinator.state()));
            restored.map_err(CliError::from)
        }
        Command::Login { email, password } => run_login(&coordinator, &email, &password).await,
        Command::Register { name, email, password } => {
            let redirect = report(&coordinator, coordinator.register(&name, &email, &password).await)?;
            println!("{}", render_redirect(redirect));
            Ok(())
        }
        Command::Update { name, email, password } => {
            let password = password.unwrap_or_default();
            report(&coordinator, coordinator.update_profile(&name, &email, &password).await)?;
            println!("{}", portal_session::coordinator::messages::PROFILE_UPDATED);
            Ok(())
        }
        Command::Logout => {
            let redirect = report(&coordinator, coordinator.logout().await)?;
            println!("{}", render_redirect(redirect));
            Ok(())
        }
        Command::Shell => shell::run(&coordinator).await,
    }
}

async fn run_login(coordinator: &CliCoordinator, email: &str, password: &str) -> Result<(), CliError> {
    let redirect = report(coordinator, coordinator.login(email, password).await)?;
    println!("{}", render_redirect(redirect));
    if let Some(token) = coordinator.gateway().session_token() {
        println!("{}", export_line(&token));
    }
    Ok(())
}

/// Print the session after an action and pass its outcome through.
fn report<T>(coordinator: &CliCoordinator, outcome: Result<T, SessionError>) -> Result<T, CliError> {
    println!("{}", render_state(&coordinator.state()));
    outcome.map_err(CliError::from)
}
