//! Tally Results Use Case
//!
//! Admin-only results projection: candidates ranked by vote count.

use std::sync::Arc;

use crate::domain::entities::Candidate;
use crate::domain::repository::CandidateRepository;
use crate::domain::services::rank_by_tally;
use crate::error::BallotResult;

/// Tally results use case
pub struct TallyResultsUseCase<C>
where
    C: CandidateRepository,
{
    candidates: Arc<C>,
}

impl<C> TallyResultsUseCase<C>
where
    C: CandidateRepository,
{
    pub fn new(candidates: Arc<C>) -> Self {
        Self { candidates }
    }

    /// Candidates sorted by vote count descending; ties keep insertion order
    pub async fn execute(&self) -> BallotResult<Vec<Candidate>> {
        let candidates = self.candidates.list().await?;
        Ok(rank_by_tally(candidates))
    }
}
