//! Application Configuration
//!
//! Configuration for the Ballot application layer.

/// Ballot application configuration
#[derive(Debug, Clone)]
pub struct BallotConfig {
    /// Secret key for verifying bearer tokens (32 bytes)
    ///
    /// Must match the secret the auth module signs tokens with.
    pub token_secret: [u8; 32],
}

impl BallotConfig {
    pub fn new(token_secret: [u8; 32]) -> Self {
        Self { token_secret }
    }
}
