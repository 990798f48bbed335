//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use nid::Nanoid;
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::entity::{account::Account, credential::Credential};
use crate::domain::repository::{AccountRepository, CredentialRepository};
use crate::domain::value_object::{
    AccountId, AccountRole, PublicId, account_password::AccountPassword,
    national_id::NationalId,
};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map unique-constraint violations to their domain conflicts
///
/// The registration use case checks uniqueness up front, but two racing
/// requests can both pass the check; the database indexes are the final
/// arbiter.
fn map_unique_violation(err: sqlx::Error) -> AuthError {
    if let sqlx::Error::Database(ref db_err) = err {
        match db_err.constraint() {
            Some("accounts_national_id_key") => return AuthError::NationalIdTaken,
            Some("accounts_single_admin_idx") => return AuthError::AdminAlreadyExists,
            _ => {}
        }
    }
    AuthError::Database(err)
}

// ============================================================================
// Account Repository Implementation
// ============================================================================

impl AccountRepository for PgAuthRepository {
    async fn create(&self, account: &Account, credential: &Credential) -> AuthResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO accounts (
                account_id,
                public_id,
                national_id,
                full_name,
                age,
                address,
                email,
                mobile,
                role,
                has_voted,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.public_id.as_str())
        .bind(account.national_id.as_str())
        .bind(&account.full_name)
        .bind(account.age)
        .bind(&account.address)
        .bind(&account.email)
        .bind(&account.mobile)
        .bind(account.role.id())
        .bind(account.has_voted)
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_unique_violation)?;

        sqlx::query(
            r#"
            INSERT INTO account_credentials (
                account_id,
                password_hash,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(credential.account_id.as_uuid())
        .bind(credential.password.as_phc_string())
        .bind(credential.created_at)
        .bind(credential.updated_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                public_id,
                national_id,
                full_name,
                age,
                address,
                email,
                mobile,
                role,
                has_voted,
                created_at,
                updated_at
            FROM accounts
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn find_by_national_id(&self, national_id: &NationalId) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                public_id,
                national_id,
                full_name,
                age,
                address,
                email,
                mobile,
                role,
                has_voted,
                created_at,
                updated_at
            FROM accounts
            WHERE national_id = $1
            "#,
        )
        .bind(national_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn exists_by_national_id(&self, national_id: &NationalId) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM accounts WHERE national_id = $1)",
        )
        .bind(national_id.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn admin_exists(&self) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM accounts WHERE role = $1)",
        )
        .bind(AccountRole::Admin.id())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

// ============================================================================
// Credential Repository Implementation
// ============================================================================

impl CredentialRepository for PgAuthRepository {
    async fn find_by_account_id(&self, account_id: &AccountId) -> AuthResult<Option<Credential>> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT
                account_id,
                password_hash,
                created_at,
                updated_at
            FROM account_credentials
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_credential()).transpose()
    }

    async fn update(&self, credential: &Credential) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE account_credentials SET
                password_hash = $2,
                updated_at = $3
            WHERE account_id = $1
            "#,
        )
        .bind(credential.account_id.as_uuid())
        .bind(credential.password.as_phc_string())
        .bind(credential.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    account_id: Uuid,
    public_id: String,
    national_id: String,
    full_name: String,
    age: i32,
    address: String,
    email: Option<String>,
    mobile: Option<String>,
    role: i16,
    has_voted: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> AuthResult<Account> {
        let public_id = PublicId::from_nanoid(
            Nanoid::from_str(&self.public_id)
                .map_err(|e| AuthError::Internal(format!("Invalid public_id: {}", e)))?,
        );

        let national_id = NationalId::from_db(&self.national_id)
            .map_err(|e| AuthError::Internal(format!("Invalid national_id: {}", e)))?;

        let role = AccountRole::from_id(self.role)
            .ok_or_else(|| AuthError::Internal(format!("Unknown role id: {}", self.role)))?;

        Ok(Account {
            account_id: AccountId::from_uuid(self.account_id),
            public_id,
            national_id,
            full_name: self.full_name,
            age: self.age,
            address: self.address,
            email: self.email,
            mobile: self.mobile,
            role,
            has_voted: self.has_voted,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct CredentialRow {
    account_id: Uuid,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CredentialRow {
    fn into_credential(self) -> AuthResult<Credential> {
        let password = AccountPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(Credential {
            account_id: AccountId::from_uuid(self.account_id),
            password,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
