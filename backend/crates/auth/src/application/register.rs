//! Register Use Case
//!
//! Creates a new voter or admin account and issues a bearer token.

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::AuthConfig;
use crate::domain::entity::{account::Account, credential::Credential};
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    AccountRole,
    account_password::{AccountPassword, RawPassword},
    national_id::NationalId,
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub full_name: String,
    pub age: i32,
    pub address: String,
    pub national_id: String,
    pub password: String,
    pub email: Option<String>,
    pub mobile: Option<String>,
    /// Role code ("voter" or "admin"); defaults to voter
    pub role: Option<String>,
}

/// Register output
pub struct RegisterOutput {
    pub account: Account,
    pub token: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: AccountRepository,
{
    account_repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(account_repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self {
            account_repo,
            config,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Validate national id
        let national_id = NationalId::new(&input.national_id)
            .map_err(|e| AuthError::Validation(e.to_string()))?;

        // Resolve requested role; unknown codes are malformed input
        let role = match input.role.as_deref() {
            None | Some("") => AccountRole::Voter,
            Some(code) => AccountRole::from_code(code)
                .ok_or_else(|| AuthError::Validation(format!("Unknown role '{code}'")))?,
        };

        // Duplicate identity is a uniqueness conflict, not a validation error
        if self
            .account_repo
            .exists_by_national_id(&national_id)
            .await?
        {
            return Err(AuthError::NationalIdTaken);
        }

        // At most one admin account may exist
        if role.is_admin() && self.account_repo.admin_exists().await? {
            return Err(AuthError::AdminAlreadyExists);
        }

        // Validate and hash password
        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AuthError::PasswordValidation(e.to_string()))?;
        let password_hash = AccountPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        // Create account + credential; the repository persists both in one
        // transaction so a second admin racing through the check above is
        // caught by the partial unique index
        let account = Account::new(
            national_id,
            input.full_name,
            input.age,
            input.address,
            input.email,
            input.mobile,
            role,
        )?;
        let credential = Credential::new(account.account_id.clone(), password_hash);

        self.account_repo.create(&account, &credential).await?;

        let token = platform::token::issue_token(
            &self.config.token_secret,
            account.account_id.as_uuid(),
            self.config.token_ttl,
            Utc::now().timestamp_millis(),
        );

        tracing::info!(
            public_id = %account.public_id,
            role = %account.role,
            "Account registered"
        );

        Ok(RegisterOutput { account, token })
    }
}
