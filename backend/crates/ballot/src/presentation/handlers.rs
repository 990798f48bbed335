//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use std::sync::Arc;

use platform::token::extract_bearer;

use crate::application::config::BallotConfig;
use crate::application::{
    AddCandidateInput, AddCandidateUseCase, AuthorizeUseCase, CastVoteUseCase,
    DeleteCandidateUseCase, ListCandidatesUseCase, TallyResultsUseCase, UpdateCandidateUseCase,
};
use crate::domain::entities::CandidatePatch;
use crate::domain::repository::{CandidateRepository, VoteLedgerRepository};
use crate::error::{BallotError, BallotResult};
use crate::presentation::dto::{
    AddCandidateRequest, CandidateResponse, CastVoteResponse, TallyEntryResponse,
    UpdateCandidateRequest,
};

/// Shared state for ballot handlers
#[derive(Clone)]
pub struct BallotAppState<R>
where
    R: CandidateRepository + VoteLedgerRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<BallotConfig>,
}

impl<R> BallotAppState<R>
where
    R: CandidateRepository + VoteLedgerRepository + Clone + Send + Sync + 'static,
{
    fn authorize(&self) -> AuthorizeUseCase<R> {
        AuthorizeUseCase::new(self.repo.clone(), self.config.clone())
    }
}

fn bearer(headers: &HeaderMap) -> BallotResult<&str> {
    extract_bearer(headers).ok_or(BallotError::TokenMissing)
}

// ============================================================================
// Candidate Roster
// ============================================================================

/// GET /api/candidate
pub async fn list_candidates<R>(
    State(state): State<BallotAppState<R>>,
) -> BallotResult<Json<Vec<CandidateResponse>>>
where
    R: CandidateRepository + VoteLedgerRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListCandidatesUseCase::new(state.repo.clone());
    let candidates = use_case.execute().await?;

    Ok(Json(candidates.iter().map(CandidateResponse::from).collect()))
}

/// POST /api/candidate
pub async fn add_candidate<R>(
    State(state): State<BallotAppState<R>>,
    headers: HeaderMap,
    Json(req): Json<AddCandidateRequest>,
) -> BallotResult<(StatusCode, Json<CandidateResponse>)>
where
    R: CandidateRepository + VoteLedgerRepository + Clone + Send + Sync + 'static,
{
    state.authorize().require_admin(bearer(&headers)?).await?;

    let use_case = AddCandidateUseCase::new(state.repo.clone());
    let candidate = use_case
        .execute(AddCandidateInput {
            name: req.name,
            party: req.party,
            age: req.age,
            image_url: req.image_url,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(CandidateResponse::from(&candidate))))
}

/// PUT /api/candidate/{id}
pub async fn update_candidate<R>(
    State(state): State<BallotAppState<R>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(req): Json<UpdateCandidateRequest>,
) -> BallotResult<Json<CandidateResponse>>
where
    R: CandidateRepository + VoteLedgerRepository + Clone + Send + Sync + 'static,
{
    state.authorize().require_admin(bearer(&headers)?).await?;

    let use_case = UpdateCandidateUseCase::new(state.repo.clone());
    let candidate = use_case
        .execute(
            &id,
            CandidatePatch {
                name: req.name,
                party: req.party,
                age: req.age,
                image_url: req.image_url,
            },
        )
        .await?;

    Ok(Json(CandidateResponse::from(&candidate)))
}

/// DELETE /api/candidate/{id}
pub async fn delete_candidate<R>(
    State(state): State<BallotAppState<R>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> BallotResult<StatusCode>
where
    R: CandidateRepository + VoteLedgerRepository + Clone + Send + Sync + 'static,
{
    state.authorize().require_admin(bearer(&headers)?).await?;

    let use_case = DeleteCandidateUseCase::new(state.repo.clone());
    use_case.execute(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Voting
// ============================================================================

/// POST /api/candidate/vote/{id}
pub async fn cast_vote<R>(
    State(state): State<BallotAppState<R>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> BallotResult<Json<CastVoteResponse>>
where
    R: CandidateRepository + VoteLedgerRepository + Clone + Send + Sync + 'static,
{
    let voter = state.authorize().authenticate(bearer(&headers)?).await?;

    let use_case = CastVoteUseCase::new(state.repo.clone(), state.repo.clone());
    use_case.execute(&voter, &id).await?;

    Ok(Json(CastVoteResponse {
        message: "Vote recorded".to_string(),
    }))
}

/// GET /api/candidate/results
pub async fn results<R>(
    State(state): State<BallotAppState<R>>,
    headers: HeaderMap,
) -> BallotResult<Json<Vec<TallyEntryResponse>>>
where
    R: CandidateRepository + VoteLedgerRepository + Clone + Send + Sync + 'static,
{
    state.authorize().require_admin(bearer(&headers)?).await?;

    let use_case = TallyResultsUseCase::new(state.repo.clone());
    let ranked = use_case.execute().await?;

    Ok(Json(ranked.iter().map(TallyEntryResponse::from).collect()))
}
