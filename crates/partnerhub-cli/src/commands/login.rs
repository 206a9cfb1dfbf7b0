//! Login command.

use clap::Args;
use dialoguer::Password;

use partnerhub_auth::PartnerRole;
use partnerhub_core::error::AppError;

use super::AppContext;

/// Arguments for `login`
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Partner role: seller or creator
    #[arg(short, long, default_value = "creator")]
    pub role: String,

    /// Account email
    #[arg(short, long)]
    pub email: String,
}

/// Execute the login command
pub async fn execute(args: &LoginArgs, context: &AppContext) -> Result<(), AppError> {
    let role: PartnerRole = args.role.parse()?;
    let password = Password::new()
        .with_prompt("Password")
        .interact()
        .map_err(|e| AppError::internal(format!("Failed to read password: {e}")))?;

    let account = context.client.login(role, &args.email, &password).await?;

    println!("Logged in as account #{}", account.subject_id);
    println!("  role:   {}", account.role);
    println!("  status: {}", account.status);
    Ok(())
}
