//! Signup commands.

use clap::{Args, Subcommand};
use dialoguer::Password;

use partnerhub_auth::client::{CreatorSignup, SellerSignup};
use partnerhub_core::error::AppError;

use super::AppContext;

/// Arguments for `signup`
#[derive(Debug, Args)]
pub struct SignupArgs {
    /// Signup subcommand
    #[command(subcommand)]
    pub command: SignupCommand,
}

/// Signup subcommands, one per partner role
#[derive(Debug, Subcommand)]
pub enum SignupCommand {
    /// Register a seller account
    Seller {
        /// Account email
        #[arg(short, long)]
        email: String,
        /// Business or representative name
        #[arg(short, long)]
        name: String,
    },
    /// Register a creator account
    Creator {
        /// Account email
        #[arg(short, long)]
        email: String,
        /// Public nickname shown on issued links
        #[arg(short, long)]
        nickname: String,
    },
}

/// Execute the signup command
pub async fn execute(args: &SignupArgs, context: &AppContext) -> Result<(), AppError> {
    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map_err(|e| AppError::internal(format!("Failed to read password: {e}")))?;

    let created = match &args.command {
        SignupCommand::Seller { email, name } => {
            context
                .client
                .signup_seller(&SellerSignup {
                    email: email.clone(),
                    name: name.clone(),
                    password,
                })
                .await?
        }
        SignupCommand::Creator { email, nickname } => {
            context
                .client
                .signup_creator(&CreatorSignup {
                    email: email.clone(),
                    nickname: nickname.clone(),
                    password,
                })
                .await?
        }
    };

    println!(
        "Created {} account #{} ({})",
        created.role, created.id, created.email
    );
    println!("The account is pending review; log in once it is approved.");
    Ok(())
}
