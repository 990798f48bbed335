//! List Candidates Use Case
//!
//! Public roster of ballot entries, in insertion order.

use std::sync::Arc;

use crate::domain::entities::Candidate;
use crate::domain::repository::CandidateRepository;
use crate::error::BallotResult;

/// List candidates use case
pub struct ListCandidatesUseCase<C>
where
    C: CandidateRepository,
{
    candidates: Arc<C>,
}

impl<C> ListCandidatesUseCase<C>
where
    C: CandidateRepository,
{
    pub fn new(candidates: Arc<C>) -> Self {
        Self { candidates }
    }

    pub async fn execute(&self) -> BallotResult<Vec<Candidate>> {
        self.candidates.list().await
    }
}
