//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use nid::Nanoid;
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

use kernel::id::{AccountId, CandidateId};
use kernel::public_id::PublicId;
use kernel::role::AccountRole;

use crate::domain::entities::{Candidate, VoteRecord, Voter};
use crate::domain::repository::{CandidateRepository, VoteLedgerRepository};
use crate::error::{BallotError, BallotResult};

/// PostgreSQL-backed ballot repository
#[derive(Clone)]
pub struct PgBallotRepository {
    pool: PgPool,
}

impl PgBallotRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Candidate Repository Implementation
// ============================================================================

impl CandidateRepository for PgBallotRepository {
    async fn create(&self, candidate: &Candidate) -> BallotResult<()> {
        sqlx::query(
            r#"
            INSERT INTO candidates (
                candidate_id,
                public_id,
                name,
                party,
                age,
                image_url,
                vote_count,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(candidate.candidate_id.as_uuid())
        .bind(candidate.public_id.as_str())
        .bind(&candidate.name)
        .bind(&candidate.party)
        .bind(candidate.age)
        .bind(&candidate.image_url)
        .bind(candidate.vote_count)
        .bind(candidate.created_at)
        .bind(candidate.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_public_id(&self, public_id: &PublicId) -> BallotResult<Option<Candidate>> {
        let row = sqlx::query_as::<_, CandidateRow>(
            r#"
            SELECT
                candidate_id,
                public_id,
                name,
                party,
                age,
                image_url,
                vote_count,
                created_at,
                updated_at
            FROM candidates
            WHERE public_id = $1
            "#,
        )
        .bind(public_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_candidate()).transpose()
    }

    async fn update(&self, candidate: &Candidate) -> BallotResult<()> {
        sqlx::query(
            r#"
            UPDATE candidates SET
                name = $2,
                party = $3,
                age = $4,
                image_url = $5,
                updated_at = $6
            WHERE candidate_id = $1
            "#,
        )
        .bind(candidate.candidate_id.as_uuid())
        .bind(&candidate.name)
        .bind(&candidate.party)
        .bind(candidate.age)
        .bind(&candidate.image_url)
        .bind(candidate.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, public_id: &PublicId) -> BallotResult<bool> {
        let deleted = sqlx::query("DELETE FROM candidates WHERE public_id = $1")
            .bind(public_id.as_str())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn list(&self) -> BallotResult<Vec<Candidate>> {
        let rows = sqlx::query_as::<_, CandidateRow>(
            r#"
            SELECT
                candidate_id,
                public_id,
                name,
                party,
                age,
                image_url,
                vote_count,
                created_at,
                updated_at
            FROM candidates
            ORDER BY created_at, candidate_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_candidate()).collect()
    }
}

// ============================================================================
// Vote Ledger Repository Implementation
// ============================================================================

impl VoteLedgerRepository for PgBallotRepository {
    async fn find_voter(&self, account_id: &AccountId) -> BallotResult<Option<Voter>> {
        let row = sqlx::query_as::<_, VoterRow>(
            r#"
            SELECT
                account_id,
                public_id,
                full_name,
                role,
                has_voted
            FROM accounts
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_voter()).transpose()
    }

    async fn claim_ballot(&self, account_id: &AccountId) -> BallotResult<bool> {
        // Conditional update is the serialization point: under concurrent
        // casts for the same voter, exactly one UPDATE matches a row
        let claimed = sqlx::query(
            r#"
            UPDATE accounts
            SET has_voted = TRUE, updated_at = $2
            WHERE account_id = $1 AND has_voted = FALSE
            "#,
        )
        .bind(account_id.as_uuid())
        .bind(Utc::now())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(claimed == 1)
    }

    async fn record_vote(&self, vote: &VoteRecord) -> BallotResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO ballot_votes (
                vote_id,
                candidate_id,
                account_id,
                voted_at
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(vote.vote_id.as_uuid())
        .bind(vote.candidate_id.as_uuid())
        .bind(vote.account_id.as_uuid())
        .bind(vote.voted_at)
        .execute(&mut *tx)
        .await?;

        // Recompute from the record sequence so the count cannot drift
        sqlx::query(
            r#"
            UPDATE candidates
            SET vote_count = (
                    SELECT COUNT(*) FROM ballot_votes WHERE candidate_id = $1
                ),
                updated_at = $2
            WHERE candidate_id = $1
            "#,
        )
        .bind(vote.candidate_id.as_uuid())
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct CandidateRow {
    candidate_id: Uuid,
    public_id: String,
    name: String,
    party: String,
    age: i32,
    image_url: String,
    vote_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CandidateRow {
    fn into_candidate(self) -> BallotResult<Candidate> {
        let public_id = PublicId::from_nanoid(
            Nanoid::from_str(&self.public_id)
                .map_err(|e| BallotError::Internal(format!("Invalid public_id: {}", e)))?,
        );

        Ok(Candidate {
            candidate_id: CandidateId::from_uuid(self.candidate_id),
            public_id,
            name: self.name,
            party: self.party,
            age: self.age,
            image_url: self.image_url,
            vote_count: self.vote_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct VoterRow {
    account_id: Uuid,
    public_id: String,
    full_name: String,
    role: i16,
    has_voted: bool,
}

impl VoterRow {
    fn into_voter(self) -> BallotResult<Voter> {
        let public_id = PublicId::from_nanoid(
            Nanoid::from_str(&self.public_id)
                .map_err(|e| BallotError::Internal(format!("Invalid public_id: {}", e)))?,
        );

        let role = AccountRole::from_id(self.role)
            .ok_or_else(|| BallotError::Internal(format!("Unknown role id: {}", self.role)))?;

        Ok(Voter {
            account_id: AccountId::from_uuid(self.account_id),
            public_id,
            full_name: self.full_name,
            role,
            has_voted: self.has_voted,
        })
    }
}
