//! Cast Vote Use Case
//!
//! Transitions a voter from "has not voted" to "has voted" while
//! appending exactly one vote record.
//!
//! ## Race model
//! The fast-path `has_voted` check below is advisory only: two requests
//! for the same voter can both pass it. The atomic `claim_ballot`
//! conditional update is the sole serialization point; exactly one of
//! the racing requests wins the claim, the rest observe `AlreadyVoted`.

use std::sync::Arc;

use kernel::public_id::PublicId;

use crate::domain::entities::{VoteRecord, Voter};
use crate::domain::repository::{CandidateRepository, VoteLedgerRepository};
use crate::error::{BallotError, BallotResult};

/// Cast vote use case
pub struct CastVoteUseCase<C, L>
where
    C: CandidateRepository,
    L: VoteLedgerRepository,
{
    candidates: Arc<C>,
    ledger: Arc<L>,
}

impl<C, L> CastVoteUseCase<C, L>
where
    C: CandidateRepository,
    L: VoteLedgerRepository,
{
    pub fn new(candidates: Arc<C>, ledger: Arc<L>) -> Self {
        Self { candidates, ledger }
    }

    pub async fn execute(&self, voter: &Voter, candidate_public_id: &str) -> BallotResult<()> {
        // Admins are barred from voting
        if voter.is_admin() {
            return Err(BallotError::AdminCannotVote);
        }

        // Fast path: reject spent ballots before touching the candidate
        if voter.has_voted {
            return Err(BallotError::AlreadyVoted);
        }

        let public_id = PublicId::parse_str(candidate_public_id)
            .map_err(|_| BallotError::CandidateNotFound)?;
        let candidate = self
            .candidates
            .find_by_public_id(&public_id)
            .await?
            .ok_or(BallotError::CandidateNotFound)?;

        // Serialization point: set has_voted only if currently false
        if !self.ledger.claim_ballot(&voter.account_id).await? {
            return Err(BallotError::AlreadyVoted);
        }

        // The claim is durable; a failure here leaves a voter marked as
        // having voted with no matching record. Loud log for operators,
        // the audit table is the reconciliation source.
        let vote = VoteRecord::new(candidate.candidate_id.clone(), voter.account_id.clone());
        if let Err(e) = self.ledger.record_vote(&vote).await {
            tracing::error!(
                account_id = %voter.account_id,
                candidate = %candidate.public_id,
                error = %e,
                "Ballot claimed but vote record failed to persist"
            );
            return Err(BallotError::Internal(
                "Vote could not be recorded".to_string(),
            ));
        }

        tracing::info!(
            voter = %voter.public_id,
            candidate = %candidate.public_id,
            "Vote cast"
        );

        Ok(())
    }
}
