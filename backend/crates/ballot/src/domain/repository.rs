//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::{Candidate, VoteRecord, Voter};
use crate::error::BallotResult;
use kernel::id::AccountId;
use kernel::public_id::PublicId;

/// Candidate repository trait
#[trait_variant::make(CandidateRepository: Send)]
pub trait LocalCandidateRepository {
    /// Create a new candidate
    async fn create(&self, candidate: &Candidate) -> BallotResult<()>;

    /// Find candidate by public ID
    async fn find_by_public_id(&self, public_id: &PublicId) -> BallotResult<Option<Candidate>>;

    /// Update a candidate's editable fields
    async fn update(&self, candidate: &Candidate) -> BallotResult<()>;

    /// Delete a candidate; returns false if no row matched
    async fn delete(&self, public_id: &PublicId) -> BallotResult<bool>;

    /// List all candidates in insertion order
    async fn list(&self) -> BallotResult<Vec<Candidate>>;
}

/// Vote ledger repository trait
///
/// Owns the voter-side state of vote casting. `claim_ballot` is the
/// single serialization point for the double-vote race.
#[trait_variant::make(VoteLedgerRepository: Send)]
pub trait LocalVoteLedgerRepository {
    /// Load the voter projection for an account
    async fn find_voter(&self, account_id: &AccountId) -> BallotResult<Option<Voter>>;

    /// Atomically claim the voter's ballot
    ///
    /// Sets `has_voted = true` only if it is currently false, in one
    /// conditional update. Returns true if this call won the claim;
    /// false means the ballot was already spent.
    async fn claim_ballot(&self, account_id: &AccountId) -> BallotResult<bool>;

    /// Append a vote record and recompute the candidate's vote count
    ///
    /// Both writes happen in one transaction so the count never drifts
    /// from the record sequence.
    async fn record_vote(&self, vote: &VoteRecord) -> BallotResult<()>;
}
