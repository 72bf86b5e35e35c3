use serde_json::json;

use super::{CommandOutput, connect};
use crate::api::{PasswordReset, ResetOutcome};
use crate::cli::OutputOptions;
use crate::error::Result;

/// Request a password reset link.
///
/// The confirmation is identical whether or not the address is registered.
pub async fn cmd_forgot_password(email: &str, output: OutputOptions) -> Result<()> {
    let ResetOutcome::Submitted = PasswordReset::new(connect()?).request(email).await?;

    let json_output = json!({
        "action": "forgot_password",
        "submitted": true,
    });
    let text = "If an account exists for this email, a password reset link has been sent.";

    CommandOutput::new(json_output).with_text(text).print(output)
}
