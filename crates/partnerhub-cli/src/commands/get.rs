//! Authenticated GET command.

use clap::Args;
use dialoguer::Password;

use partnerhub_auth::{ApiRequest, PartnerRole};
use partnerhub_core::error::AppError;

use super::AppContext;

/// Arguments for `get`
#[derive(Debug, Args)]
pub struct GetArgs {
    /// API path to fetch, e.g. /api/products
    pub path: String,

    /// Log in first with this email (prompts for the password)
    #[arg(short, long)]
    pub email: Option<String>,

    /// Partner role used when logging in: seller or creator
    #[arg(short, long, default_value = "creator")]
    pub role: String,
}

/// Execute the get command
pub async fn execute(args: &GetArgs, context: &AppContext) -> Result<(), AppError> {
    if let Some(email) = &args.email {
        let role: PartnerRole = args.role.parse()?;
        let password = Password::new()
            .with_prompt("Password")
            .interact()
            .map_err(|e| AppError::internal(format!("Failed to read password: {e}")))?;
        context.client.login(role, email, &password).await?;
    }

    let payload: serde_json::Value = context
        .client
        .fetch_json(ApiRequest::get(args.path.as_str()))
        .await?;

    println!(
        "{}",
        serde_json::to_string_pretty(&payload)
            .map_err(|e| AppError::serialization(format!("Failed to render payload: {e}")))?
    );
    Ok(())
}
