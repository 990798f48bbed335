//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use std::sync::Arc;

use platform::token::extract_bearer;

use crate::application::config::AuthConfig;
use crate::application::{
    ChangePasswordInput, ChangePasswordUseCase, GetProfileUseCase, LoginInput, LoginUseCase,
    RegisterInput, RegisterUseCase,
};
use crate::domain::repository::{AccountRepository, CredentialRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    AccountResponse, ChangePasswordRequest, LoginRequest, LoginResponse, SignUpRequest,
    SignUpResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: AccountRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/user/signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<(StatusCode, Json<SignUpResponse>)>
where
    R: AccountRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        full_name: req.full_name,
        age: req.age,
        address: req.address,
        national_id: req.national_id,
        password: req.password,
        email: req.email,
        mobile: req.mobile,
        role: req.role,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            account: AccountResponse::from(&output.account),
            token: output.token,
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/user/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: AccountRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = LoginInput {
        national_id: req.national_id,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(LoginResponse {
        account: AccountResponse::from(&output.account),
        token: output.token,
    }))
}

// ============================================================================
// Profile
// ============================================================================

/// GET /api/user/profile
pub async fn profile<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Json<AccountResponse>>
where
    R: AccountRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    let token = extract_bearer(&headers).ok_or(AuthError::TokenMissing)?;

    let use_case = GetProfileUseCase::new(state.repo.clone(), state.config.clone());
    let account = use_case.execute(token).await?;

    Ok(Json(AccountResponse::from(&account)))
}

// ============================================================================
// Change Password
// ============================================================================

/// PUT /api/user/profile/password
pub async fn change_password<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
    Json(req): Json<ChangePasswordRequest>,
) -> AuthResult<StatusCode>
where
    R: AccountRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    let token = extract_bearer(&headers).ok_or(AuthError::TokenMissing)?;

    // Resolve the token to an account before touching credentials
    let profile_use_case = GetProfileUseCase::new(state.repo.clone(), state.config.clone());
    let account_id = profile_use_case.verify(token)?;

    let use_case = ChangePasswordUseCase::new(state.repo.clone(), state.config.clone());
    use_case
        .execute(ChangePasswordInput {
            account_id,
            current_password: req.current_password,
            new_password: req.new_password,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
