//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Candidate, VoteRecord, Voter projection)
//! - Domain services (results ranking)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
