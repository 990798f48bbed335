//! Add Candidate Use Case
//!
//! Admin-only creation of a ballot entry.

use std::sync::Arc;

use crate::domain::entities::Candidate;
use crate::domain::repository::CandidateRepository;
use crate::error::BallotResult;

/// Add candidate input
pub struct AddCandidateInput {
    pub name: String,
    pub party: String,
    pub age: i32,
    pub image_url: Option<String>,
}

/// Add candidate use case
pub struct AddCandidateUseCase<C>
where
    C: CandidateRepository,
{
    candidates: Arc<C>,
}

impl<C> AddCandidateUseCase<C>
where
    C: CandidateRepository,
{
    pub fn new(candidates: Arc<C>) -> Self {
        Self { candidates }
    }

    pub async fn execute(&self, input: AddCandidateInput) -> BallotResult<Candidate> {
        let candidate = Candidate::new(input.name, input.party, input.age, input.image_url)?;
        self.candidates.create(&candidate).await?;

        tracing::info!(
            candidate = %candidate.public_id,
            party = %candidate.party,
            "Candidate added"
        );

        Ok(candidate)
    }
}
