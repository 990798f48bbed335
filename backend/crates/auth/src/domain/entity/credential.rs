//! Credential Entity
//!
//! Sensitive authentication data, kept separate from the Account profile
//! so the password hash never rides along in profile queries.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{AccountId, account_password::AccountPassword};

/// Credential entity
///
/// One row per account; holds the Argon2id password hash.
#[derive(Debug, Clone)]
pub struct Credential {
    /// Owning account
    pub account_id: AccountId,
    /// Hashed password (PHC string format)
    pub password: AccountPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Credential {
    /// Create a new credential for an account
    pub fn new(account_id: AccountId, password: AccountPassword) -> Self {
        let now = Utc::now();
        Self {
            account_id,
            password,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the stored password hash
    pub fn set_password(&mut self, password: AccountPassword) {
        self.password = password;
        self.updated_at = Utc::now();
    }
}
