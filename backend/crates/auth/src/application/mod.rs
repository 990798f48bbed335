//! Application Layer
//!
//! Use cases orchestrating domain logic and repositories.

pub mod change_password;
pub mod config;
pub mod get_profile;
pub mod login;
pub mod register;

// Re-exports
pub use change_password::{ChangePasswordInput, ChangePasswordUseCase};
pub use config::AuthConfig;
pub use get_profile::GetProfileUseCase;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
