//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, Base64)
//! - Password hashing (Argon2id, NIST SP 800-63B compliant)
//! - Signed bearer tokens (stateless, HMAC-SHA256)

pub mod crypto;
pub mod password;
pub mod token;
