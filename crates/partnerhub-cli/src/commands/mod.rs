//! CLI command definitions and dispatch.

pub mod get;
pub mod login;
pub mod signup;
pub mod whoami;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use partnerhub_auth::client::navigator::Navigator;
use partnerhub_auth::{LoggingNavigator, SessionClient, SessionStore};
use partnerhub_core::config::AppConfig;
use partnerhub_core::error::AppError;

/// PartnerHub — partner dashboard API client
#[derive(Debug, Parser)]
#[command(name = "partnerhub", version, about, long_about = None)]
pub struct Cli {
    /// Override the configured API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log in and print the account snapshot
    Login(login::LoginArgs),
    /// Bootstrap a session from the renewal cookie and print it
    Whoami,
    /// Perform an authenticated GET against an API path
    Get(get::GetArgs),
    /// Register a new partner account
    Signup(signup::SignupArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let context = build_context(self.base_url.as_deref())?;
        match &self.command {
            Commands::Login(args) => login::execute(args, &context).await,
            Commands::Whoami => whoami::execute(&context).await,
            Commands::Get(args) => get::execute(args, &context).await,
            Commands::Signup(args) => signup::execute(args, &context).await,
        }
    }
}

/// Everything a command needs to talk to the API.
pub struct AppContext {
    /// The session-aware client.
    pub client: SessionClient,
    /// Session state, shared with the client.
    pub store: Arc<SessionStore>,
}

/// Load configuration and wire up a session client.
fn build_context(base_url: Option<&str>) -> Result<AppContext, AppError> {
    let env = std::env::var("PARTNERHUB_ENV").unwrap_or_else(|_| "development".to_string());
    let mut config = AppConfig::load(&env)?;
    if let Some(base_url) = base_url {
        config.client.base_url = base_url.to_string();
    }

    let store = Arc::new(SessionStore::new());
    let navigator: Arc<dyn Navigator> =
        Arc::new(LoggingNavigator::new(config.client.login_entry_path.clone()));
    let client = SessionClient::new(&config.client, Arc::clone(&store), navigator)?;

    Ok(AppContext { client, store })
}
