//! Presentation Layer
//!
//! HTTP handlers, DTOs, and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::BallotAppState;
pub use router::{ballot_router, ballot_router_generic};
