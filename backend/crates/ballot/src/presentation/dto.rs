//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entities::Candidate;

// ============================================================================
// Candidate
// ============================================================================

/// Public candidate projection
///
/// Exposes the derived vote count, never the per-voter vote records.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateResponse {
    pub public_id: String,
    pub name: String,
    pub party: String,
    pub age: i32,
    pub image_url: String,
    pub vote_count: i64,
}

impl From<&Candidate> for CandidateResponse {
    fn from(candidate: &Candidate) -> Self {
        Self {
            public_id: candidate.public_id.to_string(),
            name: candidate.name.clone(),
            party: candidate.party.clone(),
            age: candidate.age,
            image_url: candidate.image_url.clone(),
            vote_count: candidate.vote_count,
        }
    }
}

/// Add candidate request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCandidateRequest {
    pub name: String,
    pub party: String,
    pub age: i32,
    pub image_url: Option<String>,
}

/// Update candidate request (all fields optional)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCandidateRequest {
    pub name: Option<String>,
    pub party: Option<String>,
    pub age: Option<i32>,
    pub image_url: Option<String>,
}

// ============================================================================
// Voting
// ============================================================================

/// Cast vote response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteResponse {
    pub message: String,
}

/// One row of the results projection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TallyEntryResponse {
    pub name: String,
    pub party: String,
    pub vote_count: i64,
}

impl From<&Candidate> for TallyEntryResponse {
    fn from(candidate: &Candidate) -> Self {
        Self {
            name: candidate.name.clone(),
            party: candidate.party.clone(),
            vote_count: candidate.vote_count,
        }
    }
}
