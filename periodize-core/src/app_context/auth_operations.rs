use tracing::{debug, info, warn};

use super::AppContext;
use crate::auth::{hash_password, verify_password, Actor};
use crate::database::entities::users;
use crate::errors::{CoreError, CoreResult};
use crate::repositories::{NewUser, Repository};

/// A freshly issued token together with the user it identifies
#[derive(Clone, Debug)]
pub struct AuthSession {
    pub token: String,
    pub user: users::Model,
}

impl AppContext {
    // ----- Authentication ----------------------------------------------------
    pub async fn signup(
        &self,
        email: String,
        password: String,
        name: String,
    ) -> CoreResult<AuthSession> {
        if email.trim().is_empty() {
            return Err(CoreError::validation("Email cannot be empty"));
        }
        if password.is_empty() {
            return Err(CoreError::validation("Password cannot be empty"));
        }

        // Duplicate emails are left to the unique index on users.email.
        let password_hash = hash_password(&password)?;
        let user = self
            .users
            .create(NewUser {
                email,
                name,
                password_hash,
            })
            .await?;

        let token = self.tokens.issue(&user.id)?;
        info!("Signed up user {}", user.id);

        Ok(AuthSession { token, user })
    }

    pub async fn login(&self, email: &str, password: &str) -> CoreResult<AuthSession> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| CoreError::not_found("User", "No such user found"))?;

        if !verify_password(password, &user.password_hash)? {
            warn!("Rejected login for user {}: password mismatch", user.id);
            return Err(CoreError::invalid_credential("Invalid password"));
        }

        let token = self.tokens.issue(&user.id)?;
        debug!("Issued token for user {}", user.id);

        Ok(AuthSession { token, user })
    }

    /// Resolve a bearer token into the request's actor.
    ///
    /// A verification failure does not fail the request here; the rejection is
    /// reported once an operation requires an authenticated user.
    pub fn actor_for_token(&self, token: Option<&str>) -> Actor {
        match token {
            None => Actor::anonymous(),
            Some(token) => match self.tokens.verify(token) {
                Ok(user_id) => Actor::user(user_id),
                Err(err) => {
                    debug!("Bearer token rejected: {}", err);
                    Actor::rejected(&err)
                }
            },
        }
    }

    /// The authenticated user behind an actor
    pub async fn current_user(&self, actor: &Actor) -> CoreResult<users::Model> {
        let user_id = actor.require_user()?;
        self.users
            .get(user_id)
            .await?
            .ok_or_else(|| CoreError::unauthenticated("User for this token no longer exists"))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::test_app;
    use crate::auth::{verify_password, Actor};
    use crate::errors::CoreErrorKind;
    use crate::repositories::Repository;

    #[tokio::test]
    async fn signup_stores_hash_not_plaintext() {
        let app = test_app().await;
        let session = app
            .signup("a@x.com".to_string(), "pw".to_string(), "A".to_string())
            .await
            .unwrap();

        let stored = app.users().get(&session.user.id).await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "pw");
        assert!(verify_password("pw", &stored.password_hash).unwrap());
        assert_eq!(app.tokens().verify(&session.token).unwrap(), stored.id);
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let app = test_app().await;
        app.signup("a@x.com".to_string(), "pw".to_string(), "A".to_string())
            .await
            .unwrap();
        let err = app
            .signup("a@x.com".to_string(), "pw2".to_string(), "B".to_string())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::Conflict);
        assert_eq!(app.users().list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn empty_password_is_rejected() {
        let app = test_app().await;
        let err = app
            .signup("a@x.com".to_string(), String::new(), "A".to_string())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::Validation);
    }

    #[tokio::test]
    async fn login_issues_token_for_user() {
        let app = test_app().await;
        let signup = app
            .signup("a@x.com".to_string(), "pw".to_string(), "A".to_string())
            .await
            .unwrap();

        let login = app.login("a@x.com", "pw").await.unwrap();
        assert_eq!(login.user.id, signup.user.id);
        assert_eq!(app.tokens().verify(&login.token).unwrap(), signup.user.id);
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_invalid_credential() {
        let app = test_app().await;
        app.signup("a@x.com".to_string(), "pw".to_string(), "A".to_string())
            .await
            .unwrap();

        let err = app.login("a@x.com", "wrong").await.unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::InvalidCredential);
        assert_eq!(err.message(), "Invalid password");
    }

    #[tokio::test]
    async fn login_with_unknown_email_is_not_found() {
        let app = test_app().await;
        let err = app.login("nobody@x.com", "pw").await.unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::NotFound);
        assert_eq!(err.message(), "No such user found");
    }

    #[tokio::test]
    async fn actor_for_token_distinguishes_missing_and_invalid() {
        let app = test_app().await;
        let signup = app
            .signup("a@x.com".to_string(), "pw".to_string(), "A".to_string())
            .await
            .unwrap();

        assert_eq!(app.actor_for_token(None), Actor::anonymous());
        assert_eq!(
            app.actor_for_token(Some(&signup.token)),
            Actor::user(signup.user.id.clone())
        );

        let rejected = app.actor_for_token(Some("garbage"));
        let err = rejected.require_user().unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::Unauthenticated);
        assert_eq!(err.message(), "Invalid authentication token");
    }

    #[tokio::test]
    async fn current_user_requires_authentication() {
        let app = test_app().await;
        let err = app.current_user(&Actor::anonymous()).await.unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::Unauthenticated);
    }
}
