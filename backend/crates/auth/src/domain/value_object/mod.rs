//! Value Object Module

pub mod account_password;
pub mod national_id;

// Shared identity value objects live in the kernel crate so the ballot
// domain can speak the same vocabulary.
pub use kernel::id::AccountId;
pub use kernel::public_id::PublicId;
pub use kernel::role::AccountRole;
