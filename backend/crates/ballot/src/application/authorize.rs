//! Authorize Use Case
//!
//! Verifies bearer tokens and resolves them to voter projections.

use std::sync::Arc;

use chrono::Utc;

use kernel::id::AccountId;
use platform::token::TokenError;

use crate::application::config::BallotConfig;
use crate::domain::entities::Voter;
use crate::domain::repository::VoteLedgerRepository;
use crate::error::{BallotError, BallotResult};

/// Authorize use case
pub struct AuthorizeUseCase<L>
where
    L: VoteLedgerRepository,
{
    ledger: Arc<L>,
    config: Arc<BallotConfig>,
}

impl<L> AuthorizeUseCase<L>
where
    L: VoteLedgerRepository,
{
    pub fn new(ledger: Arc<L>, config: Arc<BallotConfig>) -> Self {
        Self { ledger, config }
    }

    /// Verify a bearer token and load the voter it belongs to
    pub async fn authenticate(&self, token: &str) -> BallotResult<Voter> {
        let claims = platform::token::verify_token(
            &self.config.token_secret,
            token,
            Utc::now().timestamp_millis(),
        )
        .map_err(|e| match e {
            TokenError::Expired => BallotError::TokenExpired,
            TokenError::Malformed | TokenError::BadSignature => BallotError::TokenInvalid,
        })?;

        self.ledger
            .find_voter(&AccountId::from_uuid(claims.account_id))
            .await?
            .ok_or(BallotError::VoterNotFound)
    }

    /// Authenticate and additionally require the admin role
    pub async fn require_admin(&self, token: &str) -> BallotResult<Voter> {
        let voter = self.authenticate(token).await?;
        if !voter.is_admin() {
            return Err(BallotError::NotAdmin);
        }
        Ok(voter)
    }
}
