//! Ballot Error Types
//!
//! This module provides ballot-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Ballot-specific result type alias
pub type BallotResult<T> = Result<T, BallotError>;

/// Ballot-specific error variants
#[derive(Debug, Error)]
pub enum BallotError {
    /// No bearer token on the request
    #[error("Missing bearer token")]
    TokenMissing,

    /// Token failed signature or format checks
    #[error("Invalid bearer token")]
    TokenInvalid,

    /// Token has expired
    #[error("Bearer token has expired")]
    TokenExpired,

    /// Token resolved to no known account
    #[error("Voter not found")]
    VoterNotFound,

    /// Operation requires the admin role
    #[error("Admin role required")]
    NotAdmin,

    /// Admins are barred from casting votes
    #[error("Admin accounts are not allowed to vote")]
    AdminCannotVote,

    /// Voter has already cast their vote
    #[error("Vote has already been cast")]
    AlreadyVoted,

    /// Candidate not found
    #[error("Candidate not found")]
    CandidateNotFound,

    /// Request payload validation error
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BallotError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BallotError::TokenMissing | BallotError::TokenInvalid | BallotError::TokenExpired => {
                StatusCode::UNAUTHORIZED
            }
            BallotError::VoterNotFound | BallotError::CandidateNotFound => StatusCode::NOT_FOUND,
            BallotError::NotAdmin | BallotError::AdminCannotVote => StatusCode::FORBIDDEN,
            BallotError::AlreadyVoted => StatusCode::CONFLICT,
            BallotError::Validation(_) => StatusCode::BAD_REQUEST,
            BallotError::Database(_) | BallotError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BallotError::TokenMissing | BallotError::TokenInvalid | BallotError::TokenExpired => {
                ErrorKind::Unauthorized
            }
            BallotError::VoterNotFound | BallotError::CandidateNotFound => ErrorKind::NotFound,
            BallotError::NotAdmin | BallotError::AdminCannotVote => ErrorKind::Forbidden,
            BallotError::AlreadyVoted => ErrorKind::Conflict,
            BallotError::Validation(_) => ErrorKind::BadRequest,
            BallotError::Database(_) | BallotError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BallotError::Database(e) => {
                tracing::error!(error = %e, "Ballot database error");
            }
            BallotError::Internal(msg) => {
                tracing::error!(message = %msg, "Ballot internal error");
            }
            BallotError::AlreadyVoted => {
                tracing::warn!("Duplicate vote attempt rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Ballot error");
            }
        }
    }
}

impl IntoResponse for BallotError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for BallotError {
    fn from(err: AppError) -> Self {
        BallotError::Internal(err.to_string())
    }
}
