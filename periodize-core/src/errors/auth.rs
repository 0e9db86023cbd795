//! Authentication error types
//!
//! Failures raised while reading bearer tokens, signing or verifying them,
//! and hashing or checking passwords.
//!
//! # Examples
//!
//! ```rust
//! use periodize::errors::{AuthError, CoreError, CoreErrorKind};
//!
//! let err = AuthError::TokenExpired;
//! assert_eq!(err.error_code(), "TOKEN_EXPIRED");
//!
//! let core: CoreError = err.into();
//! assert_eq!(core.kind(), CoreErrorKind::Unauthenticated);
//! ```

use thiserror::Error;

use super::CoreError;

/// Authentication errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// No credentials were supplied with the request
    #[error("Not authenticated")]
    MissingToken,

    /// Token failed signature or claim validation
    #[error("Invalid authentication token")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    /// Token is well-formed but past its expiry
    #[error("Authentication token has expired")]
    TokenExpired,

    /// Token could not be signed
    #[error("Failed to issue authentication token")]
    TokenIssue(#[source] jsonwebtoken::errors::Error),

    /// Token lifetime pushes the expiry past the representable date range
    #[error("Token expiry is out of range")]
    ExpiryOutOfRange,

    /// Password hashing or verification failed
    #[error("Password hashing failed")]
    Hashing(#[from] bcrypt::BcryptError),
}

impl AuthError {
    /// Check if this error means the caller is not authenticated (401)
    pub fn is_authentication_error(&self) -> bool {
        matches!(
            self,
            AuthError::MissingToken | AuthError::InvalidToken(_) | AuthError::TokenExpired
        )
    }

    /// Get error code for GraphQL/API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::MissingToken => "MISSING_TOKEN",
            AuthError::InvalidToken(_) => "INVALID_TOKEN",
            AuthError::TokenExpired => "TOKEN_EXPIRED",
            AuthError::TokenIssue(_) | AuthError::ExpiryOutOfRange => "TOKEN_ISSUE_FAILED",
            AuthError::Hashing(_) => "HASHING_FAILED",
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken(err),
        }
    }
}

impl From<AuthError> for CoreError {
    fn from(err: AuthError) -> Self {
        let message = err.to_string();
        if err.is_authentication_error() {
            CoreError::unauthenticated(message).with_source(err)
        } else {
            CoreError::internal(message).with_source(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CoreErrorKind;

    #[test]
    fn test_token_errors_are_authentication_errors() {
        assert!(AuthError::MissingToken.is_authentication_error());
        assert!(AuthError::TokenExpired.is_authentication_error());
    }

    #[test]
    fn test_expired_signature_maps_to_token_expired() {
        let err: AuthError =
            jsonwebtoken::errors::Error::from(jsonwebtoken::errors::ErrorKind::ExpiredSignature)
                .into();
        assert!(matches!(err, AuthError::TokenExpired));
    }

    #[test]
    fn test_missing_token_converts_to_unauthenticated() {
        let err: CoreError = AuthError::MissingToken.into();
        assert_eq!(err.kind(), CoreErrorKind::Unauthenticated);
        assert_eq!(err.message(), "Not authenticated");
    }

    #[test]
    fn test_hashing_error_is_internal() {
        let err: CoreError = AuthError::Hashing(bcrypt::BcryptError::InvalidCost("99".into())).into();
        assert_eq!(err.kind(), CoreErrorKind::Internal);
    }
}
