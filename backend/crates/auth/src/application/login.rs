//! Login Use Case
//!
//! Verifies national id + password and issues a bearer token.

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::AuthConfig;
use crate::domain::entity::account::Account;
use crate::domain::repository::{AccountRepository, CredentialRepository};
use crate::domain::value_object::{
    account_password::RawPassword, national_id::NationalId,
};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub national_id: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    pub account: Account,
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<A, C>
where
    A: AccountRepository,
    C: CredentialRepository,
{
    account_repo: Arc<A>,
    credential_repo: Arc<C>,
    config: Arc<AuthConfig>,
}

impl<A, C> LoginUseCase<A, C>
where
    A: AccountRepository,
    C: CredentialRepository,
{
    pub fn new(account_repo: Arc<A>, credential_repo: Arc<C>, config: Arc<AuthConfig>) -> Self {
        Self {
            account_repo,
            credential_repo,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let national_id = NationalId::new(&input.national_id)
            .map_err(|e| AuthError::Validation(e.to_string()))?;

        let account = self
            .account_repo
            .find_by_national_id(&national_id)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        let credential = self
            .credential_repo
            .find_by_account_id(&account.account_id)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let raw_password = RawPassword::new(input.password)
            .map_err(|_| AuthError::InvalidCredentials)?;

        if !credential.password.verify(&raw_password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = platform::token::issue_token(
            &self.config.token_secret,
            account.account_id.as_uuid(),
            self.config.token_ttl,
            Utc::now().timestamp_millis(),
        );

        tracing::info!(public_id = %account.public_id, "Account logged in");

        Ok(LoginOutput { account, token })
    }
}
