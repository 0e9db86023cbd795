//! Error types for periodize-core
//!
//! - **CoreError**: the error every operation returns; its kind decides the
//!   code the API layer reports.
//! - **AuthError**: token and password failures, folded into `CoreError`.

pub mod auth;
pub mod core_error;

pub use auth::AuthError;
pub use core_error::{CoreError, CoreErrorKind};

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type alias for authentication primitives
pub type AuthResult<T> = Result<T, AuthError>;
