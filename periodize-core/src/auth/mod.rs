pub mod password;
pub mod token;

pub use password::{hash_password, verify_password, PASSWORD_HASH_COST};
pub use token::{Claims, TokenService, TokenSettings};

use crate::errors::{AuthError, CoreError};

/// Identity claim for a single request.
///
/// Built once per request from the bearer token. An anonymous actor can read;
/// anything that writes calls [`Actor::require_user`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Actor {
    user_id: Option<String>,
    rejection: Option<&'static str>,
}

impl Actor {
    pub fn user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            rejection: None,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            user_id: None,
            rejection: None,
        }
    }

    /// An actor whose token was presented but did not verify.
    pub fn rejected(err: &AuthError) -> Self {
        let reason = match err {
            AuthError::TokenExpired => "Authentication token has expired",
            _ => "Invalid authentication token",
        };
        Self {
            user_id: None,
            rejection: Some(reason),
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn require_user(&self) -> Result<&str, CoreError> {
        match (&self.user_id, self.rejection) {
            (Some(user_id), _) => Ok(user_id),
            (None, Some(reason)) => Err(CoreError::unauthenticated(reason)),
            (None, None) => Err(AuthError::MissingToken.into()),
        }
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::anonymous()
    }
}
