//! Ballot (Vote Ledger & Candidate Registry) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Integrity Model
//! - The voter's `has_voted` flag is the single source of truth against
//!   double voting; it is flipped with an atomic conditional update
//!   (set true only if currently false), never read-then-write
//! - Per-candidate vote records are an audit trail, not the uniqueness guard
//! - Candidate management and results are gated to the admin role
//! - Admins are barred from casting votes

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::BallotConfig;
pub use error::{BallotError, BallotResult};
pub use infra::postgres::PgBallotRepository;
pub use presentation::router::ballot_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgBallotRepository as BallotStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
