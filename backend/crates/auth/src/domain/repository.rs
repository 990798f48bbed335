//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{account::Account, credential::Credential};
use crate::domain::value_object::{AccountId, national_id::NationalId};
use crate::error::AuthResult;

/// Account repository trait
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Create a new account together with its credential (single transaction)
    async fn create(&self, account: &Account, credential: &Credential) -> AuthResult<()>;

    /// Find account by ID
    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>>;

    /// Find account by national id
    async fn find_by_national_id(&self, national_id: &NationalId) -> AuthResult<Option<Account>>;

    /// Check if a national id is already registered
    async fn exists_by_national_id(&self, national_id: &NationalId) -> AuthResult<bool>;

    /// Check if an admin account already exists
    async fn admin_exists(&self) -> AuthResult<bool>;
}

/// Credential repository trait
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// Find credential by account ID
    async fn find_by_account_id(&self, account_id: &AccountId) -> AuthResult<Option<Credential>>;

    /// Update credential (password change)
    async fn update(&self, credential: &Credential) -> AuthResult<()>;
}
