//! Ballot Router

use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::application::config::BallotConfig;
use crate::domain::repository::{CandidateRepository, VoteLedgerRepository};
use crate::infra::postgres::PgBallotRepository;
use crate::presentation::handlers::{self, BallotAppState};

/// Create the Ballot router with PostgreSQL repository
pub fn ballot_router(repo: PgBallotRepository, config: BallotConfig) -> Router {
    let state = BallotAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_candidates::<PgBallotRepository>)
                .post(handlers::add_candidate::<PgBallotRepository>),
        )
        .route("/results", get(handlers::results::<PgBallotRepository>))
        .route("/vote/{id}", post(handlers::cast_vote::<PgBallotRepository>))
        .route(
            "/{id}",
            put(handlers::update_candidate::<PgBallotRepository>)
                .delete(handlers::delete_candidate::<PgBallotRepository>),
        )
        .with_state(state)
}

/// Create a generic Ballot router for any repository implementation
pub fn ballot_router_generic<R>(repo: R, config: BallotConfig) -> Router
where
    R: CandidateRepository + VoteLedgerRepository + Clone + Send + Sync + 'static,
{
    let state = BallotAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_candidates::<R>).post(handlers::add_candidate::<R>),
        )
        .route("/results", get(handlers::results::<R>))
        .route("/vote/{id}", post(handlers::cast_vote::<R>))
        .route(
            "/{id}",
            put(handlers::update_candidate::<R>).delete(handlers::delete_candidate::<R>),
        )
        .with_state(state)
}
