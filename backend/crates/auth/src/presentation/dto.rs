//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::account::Account;

// ============================================================================
// Account summary
// ============================================================================

/// Public account projection
///
/// Never carries the national id or password hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub public_id: String,
    pub full_name: String,
    pub age: i32,
    pub address: String,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub role: String,
    pub has_voted: bool,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            public_id: account.public_id.to_string(),
            full_name: account.full_name.clone(),
            age: account.age,
            address: account.address.clone(),
            email: account.email.clone(),
            mobile: account.mobile.clone(),
            role: account.role.code().to_string(),
            has_voted: account.has_voted,
        }
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub full_name: String,
    pub age: i32,
    pub address: String,
    /// 12-digit government identity number
    pub national_id: String,
    pub password: String,
    pub email: Option<String>,
    pub mobile: Option<String>,
    /// "voter" (default) or "admin"
    pub role: Option<String>,
}

/// Sign up response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub account: AccountResponse,
    pub token: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub national_id: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub account: AccountResponse,
    pub token: String,
}

// ============================================================================
// Change Password
// ============================================================================

/// Change password request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}
