//! Update Candidate Use Case
//!
//! Admin-only partial update of a ballot entry.

use std::sync::Arc;

use kernel::public_id::PublicId;

use crate::domain::entities::{Candidate, CandidatePatch};
use crate::domain::repository::CandidateRepository;
use crate::error::{BallotError, BallotResult};

/// Update candidate use case
pub struct UpdateCandidateUseCase<C>
where
    C: CandidateRepository,
{
    candidates: Arc<C>,
}

impl<C> UpdateCandidateUseCase<C>
where
    C: CandidateRepository,
{
    pub fn new(candidates: Arc<C>) -> Self {
        Self { candidates }
    }

    pub async fn execute(
        &self,
        candidate_public_id: &str,
        patch: CandidatePatch,
    ) -> BallotResult<Candidate> {
        let public_id = PublicId::parse_str(candidate_public_id)
            .map_err(|_| BallotError::CandidateNotFound)?;

        let mut candidate = self
            .candidates
            .find_by_public_id(&public_id)
            .await?
            .ok_or(BallotError::CandidateNotFound)?;

        candidate.apply_patch(patch)?;
        self.candidates.update(&candidate).await?;

        tracing::info!(candidate = %candidate.public_id, "Candidate updated");

        Ok(candidate)
    }
}
