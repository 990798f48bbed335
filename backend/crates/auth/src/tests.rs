//! Unit tests for the auth crate
//!
//! Uses an in-memory repository so registration, login, and the account
//! uniqueness rules can be exercised without a database.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::application::{
    AuthConfig, ChangePasswordInput, ChangePasswordUseCase, GetProfileUseCase, LoginInput,
    LoginUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::entity::{account::Account, credential::Credential};
use crate::domain::repository::{AccountRepository, CredentialRepository};
use crate::domain::value_object::{AccountId, AccountRole, national_id::NationalId};
use crate::error::{AuthError, AuthResult};

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Default)]
struct MemoryState {
    accounts: HashMap<Uuid, Account>,
    credentials: HashMap<Uuid, Credential>,
}

#[derive(Clone, Default)]
struct MemoryAuthRepo {
    state: Arc<Mutex<MemoryState>>,
}

impl AccountRepository for MemoryAuthRepo {
    async fn create(&self, account: &Account, credential: &Credential) -> AuthResult<()> {
        let mut state = self.state.lock().unwrap();
        // Same arbiter the database indexes provide
        if state
            .accounts
            .values()
            .any(|a| a.national_id == account.national_id)
        {
            return Err(AuthError::NationalIdTaken);
        }
        if account.role.is_admin() && state.accounts.values().any(|a| a.role.is_admin()) {
            return Err(AuthError::AdminAlreadyExists);
        }
        let key = *account.account_id.as_uuid();
        state.accounts.insert(key, account.clone());
        state.credentials.insert(key, credential.clone());
        Ok(())
    }

    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .accounts
            .get(account_id.as_uuid())
            .cloned())
    }

    async fn find_by_national_id(&self, national_id: &NationalId) -> AuthResult<Option<Account>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .accounts
            .values()
            .find(|a| a.national_id == *national_id)
            .cloned())
    }

    async fn exists_by_national_id(&self, national_id: &NationalId) -> AuthResult<bool> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .accounts
            .values()
            .any(|a| a.national_id == *national_id))
    }

    async fn admin_exists(&self) -> AuthResult<bool> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .accounts
            .values()
            .any(|a| a.role.is_admin()))
    }
}

impl CredentialRepository for MemoryAuthRepo {
    async fn find_by_account_id(&self, account_id: &AccountId) -> AuthResult<Option<Credential>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .credentials
            .get(account_id.as_uuid())
            .cloned())
    }

    async fn update(&self, credential: &Credential) -> AuthResult<()> {
        self.state
            .lock()
            .unwrap()
            .credentials
            .insert(*credential.account_id.as_uuid(), credential.clone());
        Ok(())
    }
}

fn config() -> Arc<AuthConfig> {
    Arc::new(AuthConfig {
        token_secret: [7u8; 32],
        ..AuthConfig::default()
    })
}

fn register_input(national_id: &str, role: Option<&str>) -> RegisterInput {
    RegisterInput {
        full_name: "Asha Rao".to_string(),
        age: 34,
        address: "12 Hill Road".to_string(),
        national_id: national_id.to_string(),
        password: "CorrectHorse9!".to_string(),
        email: None,
        mobile: None,
        role: role.map(str::to_string),
    }
}

// ============================================================================
// Registration
// ============================================================================

mod register_tests {
    use super::*;

    #[tokio::test]
    async fn test_register_defaults_to_voter() {
        let repo = Arc::new(MemoryAuthRepo::default());
        let use_case = RegisterUseCase::new(repo.clone(), config());

        let output = use_case
            .execute(register_input("123456789012", None))
            .await
            .unwrap();

        assert_eq!(output.account.role, AccountRole::Voter);
        assert!(!output.account.has_voted);
        assert!(!output.token.is_empty());
    }

    #[tokio::test]
    async fn test_register_rejects_short_identity() {
        let repo = Arc::new(MemoryAuthRepo::default());
        let use_case = RegisterUseCase::new(repo, config());

        let result = use_case.execute(register_input("12345678901", None)).await;
        assert!(matches!(result, Err(AuthError::Validation(_))));
    }

    #[tokio::test]
    async fn test_duplicate_identity_is_conflict() {
        let repo = Arc::new(MemoryAuthRepo::default());
        let use_case = RegisterUseCase::new(repo, config());

        use_case
            .execute(register_input("123456789012", None))
            .await
            .unwrap();

        let result = use_case.execute(register_input("123456789012", None)).await;
        assert!(matches!(result, Err(AuthError::NationalIdTaken)));
    }

    #[tokio::test]
    async fn test_second_admin_is_conflict() {
        let repo = Arc::new(MemoryAuthRepo::default());
        let use_case = RegisterUseCase::new(repo, config());

        use_case
            .execute(register_input("123456789012", Some("admin")))
            .await
            .unwrap();

        let result = use_case
            .execute(register_input("999999999999", Some("admin")))
            .await;
        assert!(matches!(result, Err(AuthError::AdminAlreadyExists)));
    }

    #[tokio::test]
    async fn test_unknown_role_rejected() {
        let repo = Arc::new(MemoryAuthRepo::default());
        let use_case = RegisterUseCase::new(repo, config());

        let result = use_case
            .execute(register_input("123456789012", Some("moderator")))
            .await;
        assert!(matches!(result, Err(AuthError::Validation(_))));
    }
}

// ============================================================================
// Login and profile
// ============================================================================

mod login_tests {
    use super::*;

    #[tokio::test]
    async fn test_login_roundtrip() {
        let repo = Arc::new(MemoryAuthRepo::default());
        let config = config();

        RegisterUseCase::new(repo.clone(), config.clone())
            .execute(register_input("123456789012", None))
            .await
            .unwrap();

        let use_case = LoginUseCase::new(repo.clone(), repo.clone(), config.clone());
        let output = use_case
            .execute(LoginInput {
                national_id: "123456789012".to_string(),
                password: "CorrectHorse9!".to_string(),
            })
            .await
            .unwrap();

        // The issued token must resolve back to the same account
        let profile = GetProfileUseCase::new(repo, config)
            .execute(&output.token)
            .await
            .unwrap();
        assert_eq!(profile.account_id, output.account.account_id);
    }

    #[tokio::test]
    async fn test_login_unknown_identity() {
        let repo = Arc::new(MemoryAuthRepo::default());
        let use_case = LoginUseCase::new(repo.clone(), repo, config());

        let result = use_case
            .execute(LoginInput {
                national_id: "123456789012".to_string(),
                password: "CorrectHorse9!".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AuthError::AccountNotFound)));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let repo = Arc::new(MemoryAuthRepo::default());
        let config = config();

        RegisterUseCase::new(repo.clone(), config.clone())
            .execute(register_input("123456789012", None))
            .await
            .unwrap();

        let use_case = LoginUseCase::new(repo.clone(), repo, config);
        let result = use_case
            .execute(LoginInput {
                national_id: "123456789012".to_string(),
                password: "WrongHorse9!".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_profile_rejects_garbage_token() {
        let repo = Arc::new(MemoryAuthRepo::default());
        let use_case = GetProfileUseCase::new(repo, config());

        let result = use_case.execute("not-a-token").await;
        assert!(matches!(result, Err(AuthError::TokenInvalid)));
    }
}

// ============================================================================
// Change password
// ============================================================================

mod change_password_tests {
    use super::*;

    #[tokio::test]
    async fn test_change_password_roundtrip() {
        let repo = Arc::new(MemoryAuthRepo::default());
        let config = config();

        let output = RegisterUseCase::new(repo.clone(), config.clone())
            .execute(register_input("123456789012", None))
            .await
            .unwrap();

        ChangePasswordUseCase::new(repo.clone(), config.clone())
            .execute(ChangePasswordInput {
                account_id: output.account.account_id,
                current_password: "CorrectHorse9!".to_string(),
                new_password: "FreshHorse10!".to_string(),
            })
            .await
            .unwrap();

        // Old password no longer logs in, new one does
        let login = LoginUseCase::new(repo.clone(), repo.clone(), config);
        let result = login
            .execute(LoginInput {
                national_id: "123456789012".to_string(),
                password: "CorrectHorse9!".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));

        login
            .execute(LoginInput {
                national_id: "123456789012".to_string(),
                password: "FreshHorse10!".to_string(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_change_password_requires_current() {
        let repo = Arc::new(MemoryAuthRepo::default());
        let config = config();

        let output = RegisterUseCase::new(repo.clone(), config.clone())
            .execute(register_input("123456789012", None))
            .await
            .unwrap();

        let result = ChangePasswordUseCase::new(repo, config)
            .execute(ChangePasswordInput {
                account_id: output.account.account_id,
                current_password: "WrongHorse9!".to_string(),
                new_password: "FreshHorse10!".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }
}
