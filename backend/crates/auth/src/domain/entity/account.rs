//! Account Entity
//!
//! Core voter/admin profile entity containing non-sensitive account data.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    AccountId, AccountRole, PublicId, national_id::NationalId,
};
use crate::error::{AuthError, AuthResult};

/// Account entity
///
/// Contains the public profile of a registered voter or admin.
/// The password hash lives in the Credential entity.
#[derive(Debug, Clone)]
pub struct Account {
    /// Internal UUID identifier
    pub account_id: AccountId,
    /// Public-facing nanoid identifier (URL-safe)
    pub public_id: PublicId,
    /// Government-issued 12-digit identity number (unique, for login)
    pub national_id: NationalId,
    /// Display name
    pub full_name: String,
    /// Age in years
    pub age: i32,
    /// Postal address
    pub address: String,
    /// Contact email (optional)
    pub email: Option<String>,
    /// Contact mobile number (optional)
    pub mobile: Option<String>,
    /// Role (Voter or Admin)
    pub role: AccountRole,
    /// Whether this account has already cast its vote
    pub has_voted: bool,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account
    ///
    /// Validates the profile fields. The `has_voted` flag always starts false.
    pub fn new(
        national_id: NationalId,
        full_name: impl Into<String>,
        age: i32,
        address: impl Into<String>,
        email: Option<String>,
        mobile: Option<String>,
        role: AccountRole,
    ) -> AuthResult<Self> {
        let full_name = full_name.into().trim().to_string();
        let address = address.into().trim().to_string();

        if full_name.is_empty() {
            return Err(AuthError::Validation("Name cannot be empty".to_string()));
        }
        if address.is_empty() {
            return Err(AuthError::Validation("Address cannot be empty".to_string()));
        }
        if !(18..=150).contains(&age) {
            return Err(AuthError::Validation(
                "Age must be between 18 and 150".to_string(),
            ));
        }

        let now = Utc::now();
        Ok(Self {
            account_id: AccountId::new(),
            public_id: PublicId::new(),
            national_id,
            full_name,
            age,
            address,
            email,
            mobile,
            role,
            has_voted: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Check if this account holds the admin role
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn national_id() -> NationalId {
        NationalId::new("123456789012").unwrap()
    }

    #[test]
    fn test_new_account_defaults() {
        let account = Account::new(
            national_id(),
            "Asha Rao",
            34,
            "12 Hill Road",
            None,
            None,
            AccountRole::Voter,
        )
        .unwrap();

        assert!(!account.has_voted);
        assert_eq!(account.role, AccountRole::Voter);
        assert_eq!(account.full_name, "Asha Rao");
    }

    #[test]
    fn test_name_is_trimmed() {
        let account = Account::new(
            national_id(),
            "  Asha Rao  ",
            34,
            "12 Hill Road",
            None,
            None,
            AccountRole::Voter,
        )
        .unwrap();
        assert_eq!(account.full_name, "Asha Rao");
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = Account::new(
            national_id(),
            "   ",
            34,
            "12 Hill Road",
            None,
            None,
            AccountRole::Voter,
        );
        assert!(matches!(result, Err(AuthError::Validation(_))));
    }

    #[test]
    fn test_underage_rejected() {
        let result = Account::new(
            national_id(),
            "Asha Rao",
            17,
            "12 Hill Road",
            None,
            None,
            AccountRole::Voter,
        );
        assert!(matches!(result, Err(AuthError::Validation(_))));
    }

    #[test]
    fn test_is_admin() {
        let account = Account::new(
            national_id(),
            "Asha Rao",
            34,
            "12 Hill Road",
            None,
            None,
            AccountRole::Admin,
        )
        .unwrap();
        assert!(account.is_admin());
    }
}
