//! Whoami command.

use partnerhub_core::error::AppError;

use super::AppContext;

/// Execute the whoami command
pub async fn execute(context: &AppContext) -> Result<(), AppError> {
    let authenticated = context.client.bootstrap().await;

    if !authenticated {
        println!("Anonymous (no renewable session)");
        return Ok(());
    }

    let session = context.store.snapshot().await;
    match session.account() {
        Some(account) => {
            println!("Account #{}", account.subject_id);
            println!("  role:   {}", account.role);
            println!("  status: {}", account.status);
        }
        None => println!("Anonymous (no renewable session)"),
    }
    Ok(())
}
