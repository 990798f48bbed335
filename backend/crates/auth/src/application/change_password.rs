//! Change Password Use Case
//!
//! Verifies the current password before storing a new hash.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::CredentialRepository;
use crate::domain::value_object::{
    AccountId,
    account_password::{AccountPassword, RawPassword},
};
use crate::error::{AuthError, AuthResult};

/// Change password input
pub struct ChangePasswordInput {
    pub account_id: AccountId,
    pub current_password: String,
    pub new_password: String,
}

/// Change password use case
pub struct ChangePasswordUseCase<C>
where
    C: CredentialRepository,
{
    credential_repo: Arc<C>,
    config: Arc<AuthConfig>,
}

impl<C> ChangePasswordUseCase<C>
where
    C: CredentialRepository,
{
    pub fn new(credential_repo: Arc<C>, config: Arc<AuthConfig>) -> Self {
        Self {
            credential_repo,
            config,
        }
    }

    pub async fn execute(&self, input: ChangePasswordInput) -> AuthResult<()> {
        let mut credential = self
            .credential_repo
            .find_by_account_id(&input.account_id)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        // Current password must verify before anything else is touched
        let current = RawPassword::new(input.current_password)
            .map_err(|_| AuthError::InvalidCredentials)?;
        if !credential.password.verify(&current, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let new_raw = RawPassword::new(input.new_password)
            .map_err(|e| AuthError::PasswordValidation(e.to_string()))?;
        let new_hash = AccountPassword::from_raw(&new_raw, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        credential.set_password(new_hash);
        self.credential_repo.update(&credential).await?;

        tracing::info!(account_id = %input.account_id, "Password changed");

        Ok(())
    }
}
