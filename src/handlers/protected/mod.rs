// handlers/protected/mod.rs - Handlers for any authenticated user
//
// Middleware: token verification only (AccessPolicy::Any). The caller id
// comes from the `AuthUser` extension.

pub mod personal;
pub mod profile;

pub use personal::{classroom_get, grades_get, subject_get, subjects_get};
pub use profile::user_get;
