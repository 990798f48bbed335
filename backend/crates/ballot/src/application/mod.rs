//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod add_candidate;
pub mod authorize;
pub mod cast_vote;
pub mod config;
pub mod delete_candidate;
pub mod list_candidates;
pub mod tally_results;
pub mod update_candidate;

// Re-exports
pub use add_candidate::{AddCandidateInput, AddCandidateUseCase};
pub use authorize::AuthorizeUseCase;
pub use cast_vote::CastVoteUseCase;
pub use config::BallotConfig;
pub use delete_candidate::DeleteCandidateUseCase;
pub use list_candidates::ListCandidatesUseCase;
pub use tally_results::TallyResultsUseCase;
pub use update_candidate::UpdateCandidateUseCase;
