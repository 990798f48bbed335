//! Get Profile Use Case
//!
//! Resolves the bearer token on the request to the owning account.

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::AuthConfig;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::AccountId;
use crate::error::{AuthError, AuthResult};
use platform::token::TokenError;

/// Get profile use case
pub struct GetProfileUseCase<R>
where
    R: AccountRepository,
{
    account_repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> GetProfileUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(account_repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self {
            account_repo,
            config,
        }
    }

    /// Verify a bearer token and load the account it belongs to
    pub async fn execute(&self, token: &str) -> AuthResult<Account> {
        let account_id = self.verify(token)?;
        self.account_repo
            .find_by_id(&account_id)
            .await?
            .ok_or(AuthError::AccountNotFound)
    }

    /// Verify the token signature and expiry, returning the account id
    pub fn verify(&self, token: &str) -> AuthResult<AccountId> {
        let claims = platform::token::verify_token(
            &self.config.token_secret,
            token,
            Utc::now().timestamp_millis(),
        )
        .map_err(|e| match e {
            TokenError::Expired => AuthError::TokenExpired,
            TokenError::Malformed | TokenError::BadSignature => AuthError::TokenInvalid,
        })?;

        Ok(AccountId::from_uuid(claims.account_id))
    }
}
