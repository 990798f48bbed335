//! Delete Candidate Use Case
//!
//! Admin-only removal of a ballot entry. Does not retroactively un-vote
//! voters who chose this candidate.

use std::sync::Arc;

use kernel::public_id::PublicId;

use crate::domain::repository::CandidateRepository;
use crate::error::{BallotError, BallotResult};

/// Delete candidate use case
pub struct DeleteCandidateUseCase<C>
where
    C: CandidateRepository,
{
    candidates: Arc<C>,
}

impl<C> DeleteCandidateUseCase<C>
where
    C: CandidateRepository,
{
    pub fn new(candidates: Arc<C>) -> Self {
        Self { candidates }
    }

    pub async fn execute(&self, candidate_public_id: &str) -> BallotResult<()> {
        let public_id = PublicId::parse_str(candidate_public_id)
            .map_err(|_| BallotError::CandidateNotFound)?;

        if !self.candidates.delete(&public_id).await? {
            return Err(BallotError::CandidateNotFound);
        }

        tracing::info!(candidate = %public_id, "Candidate deleted");

        Ok(())
    }
}
