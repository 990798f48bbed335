//! Domain Entities
//!
//! Core business entities for the ballot domain.

use chrono::{DateTime, Utc};

use kernel::id::{AccountId, CandidateId, VoteId};
use kernel::public_id::PublicId;
use kernel::role::AccountRole;

use crate::error::{BallotError, BallotResult};

/// Image shown when a candidate is registered without one
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150";

/// Candidate entity - an entry on the ballot
///
/// `vote_count` is a derived column kept equal to the number of vote
/// records referencing this candidate; it is recomputed on every append.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub candidate_id: CandidateId,
    pub public_id: PublicId,
    pub name: String,
    pub party: String,
    pub age: i32,
    pub image_url: String,
    pub vote_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Candidate {
    /// Create a new candidate with zero votes
    pub fn new(
        name: impl Into<String>,
        party: impl Into<String>,
        age: i32,
        image_url: Option<String>,
    ) -> BallotResult<Self> {
        let name = validate_text("Name", name.into())?;
        let party = validate_text("Party", party.into())?;
        if !(18..=150).contains(&age) {
            return Err(BallotError::Validation(
                "Age must be between 18 and 150".to_string(),
            ));
        }

        let image_url = match image_url {
            Some(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => PLACEHOLDER_IMAGE_URL.to_string(),
        };

        let now = Utc::now();
        Ok(Self {
            candidate_id: CandidateId::new(),
            public_id: PublicId::new(),
            name,
            party,
            age,
            image_url,
            vote_count: 0,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a partial update; absent fields keep their current value
    pub fn apply_patch(&mut self, patch: CandidatePatch) -> BallotResult<()> {
        if let Some(name) = patch.name {
            self.name = validate_text("Name", name)?;
        }
        if let Some(party) = patch.party {
            self.party = validate_text("Party", party)?;
        }
        if let Some(age) = patch.age {
            if !(18..=150).contains(&age) {
                return Err(BallotError::Validation(
                    "Age must be between 18 and 150".to_string(),
                ));
            }
            self.age = age;
        }
        if let Some(image_url) = patch.image_url {
            let trimmed = image_url.trim();
            self.image_url = if trimmed.is_empty() {
                PLACEHOLDER_IMAGE_URL.to_string()
            } else {
                trimmed.to_string()
            };
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// Partial update for a candidate
#[derive(Debug, Clone, Default)]
pub struct CandidatePatch {
    pub name: Option<String>,
    pub party: Option<String>,
    pub age: Option<i32>,
    pub image_url: Option<String>,
}

fn validate_text(field: &str, value: String) -> BallotResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        return Err(BallotError::Validation(format!("{field} cannot be empty")));
    }
    Ok(trimmed)
}

/// VoteRecord entity - one appended ballot entry
///
/// Audit trail only; the voter's `has_voted` flag is the uniqueness guard.
#[derive(Debug, Clone)]
pub struct VoteRecord {
    pub vote_id: VoteId,
    pub candidate_id: CandidateId,
    pub account_id: AccountId,
    pub voted_at: DateTime<Utc>,
}

impl VoteRecord {
    /// Create a new vote record
    pub fn new(candidate_id: CandidateId, account_id: AccountId) -> Self {
        Self {
            vote_id: VoteId::new(),
            candidate_id,
            account_id,
            voted_at: Utc::now(),
        }
    }
}

/// Voter projection - the slice of an account the ballot domain needs
#[derive(Debug, Clone)]
pub struct Voter {
    pub account_id: AccountId,
    pub public_id: PublicId,
    pub full_name: String,
    pub role: AccountRole,
    pub has_voted: bool,
}

impl Voter {
    /// Check if this voter holds the admin role
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_candidate_defaults_image() {
        let candidate = Candidate::new("Asha Rao", "Unity Party", 45, None).unwrap();
        assert_eq!(candidate.image_url, PLACEHOLDER_IMAGE_URL);
        assert_eq!(candidate.vote_count, 0);
    }

    #[test]
    fn test_new_candidate_keeps_given_image() {
        let candidate = Candidate::new(
            "Asha Rao",
            "Unity Party",
            45,
            Some("https://example.com/asha.png".to_string()),
        )
        .unwrap();
        assert_eq!(candidate.image_url, "https://example.com/asha.png");
    }

    #[test]
    fn test_blank_image_falls_back_to_placeholder() {
        let candidate =
            Candidate::new("Asha Rao", "Unity Party", 45, Some("   ".to_string())).unwrap();
        assert_eq!(candidate.image_url, PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = Candidate::new("  ", "Unity Party", 45, None);
        assert!(matches!(result, Err(BallotError::Validation(_))));
    }

    #[test]
    fn test_patch_updates_only_given_fields() {
        let mut candidate = Candidate::new("Asha Rao", "Unity Party", 45, None).unwrap();
        candidate
            .apply_patch(CandidatePatch {
                party: Some("Progress Party".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(candidate.name, "Asha Rao");
        assert_eq!(candidate.party, "Progress Party");
        assert_eq!(candidate.age, 45);
    }

    #[test]
    fn test_patch_rejects_invalid_age() {
        let mut candidate = Candidate::new("Asha Rao", "Unity Party", 45, None).unwrap();
        let result = candidate.apply_patch(CandidatePatch {
            age: Some(12),
            ..Default::default()
        });
        assert!(matches!(result, Err(BallotError::Validation(_))));
        // Original value untouched
        assert_eq!(candidate.age, 45);
    }
}
