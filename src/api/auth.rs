//! Password reset request.
//!
//! The outcome is deliberately uniform: a registered address, an unknown
//! address, a server error and an unreachable server all produce
//! [`ResetOutcome::Submitted`]. Callers cannot tell which accounts exist.

use reqwest::Method;
use serde::Serialize;

use crate::error::{CredoError, Result};

use super::{ApiClient, Auth};

const FORGOT_PASSWORD_PATH: &str = "/api/auth/forgot-password";

/// The only observable result of a reset request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// "If an account exists for this address, a reset link has been sent."
    Submitted,
}

#[derive(Debug, Serialize)]
struct ForgotPasswordRequest<'a> {
    email: &'a str,
}

#[derive(Debug, Clone)]
pub struct PasswordReset {
    client: ApiClient,
}

impl PasswordReset {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Ask the server to email a reset link.
    ///
    /// Only a blank address is rejected, locally and before any request.
    pub async fn request(&self, email: &str) -> Result<ResetOutcome> {
        let email = email.trim();
        if email.is_empty() {
            return Err(CredoError::Validation("email is required".to_string()));
        }

        let result = self
            .client
            .send_json(
                Method::POST,
                FORGOT_PASSWORD_PATH,
                &ForgotPasswordRequest { email },
                Auth::None,
            )
            .await;

        if let Err(e) = result {
            tracing::debug!("password reset request not accepted: {e}");
        }

        Ok(ResetOutcome::Submitted)
    }
}
