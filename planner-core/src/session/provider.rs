use std::fmt;

use async_trait::async_trait;
use log::{error, info};
use serde::{Deserialize, Serialize};

use super::{SessionContext, User};
use crate::domain::PlannerResult;

/// External sign-in providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Google,
    GitHub,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Google => "google",
            AuthProvider::GitHub => "github",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AuthProvider::Google => "Google",
            AuthProvider::GitHub => "GitHub",
        }
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity provider the app delegates authentication to.
///
/// Implementations report state changes by calling
/// [`SessionContext::set_user`] on the context they were attached to.
#[async_trait(?Send)]
pub trait IdentityProvider {
    async fn sign_in(&self, provider: AuthProvider) -> PlannerResult<User>;

    async fn sign_out(&self) -> PlannerResult<()>;
}

/// Sign in and mirror the result into the session
pub async fn sign_in(
    identity: &dyn IdentityProvider,
    session: &SessionContext,
    provider: AuthProvider,
) -> PlannerResult<User> {
    match identity.sign_in(provider).await {
        Ok(user) => {
            info!(
                "Signed in with {}, email: {}",
                provider,
                user.email.as_deref().unwrap_or("<none>")
            );
            session.set_user(Some(user.clone()));
            Ok(user)
        }
        Err(e) => {
            error!("Authentication error: {}", e);
            Err(e)
        }
    }
}

/// Sign out and clear the session
pub async fn sign_out(identity: &dyn IdentityProvider, session: &SessionContext) -> PlannerResult<()> {
    identity.sign_out().await.map_err(|e| {
        error!("Sign-out failed: {}", e);
        e
    })?;
    session.set_user(None);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlannerError;

    struct ScriptedIdentity {
        refuse: bool,
    }

    #[async_trait(?Send)]
    impl IdentityProvider for ScriptedIdentity {
        async fn sign_in(&self, provider: AuthProvider) -> PlannerResult<User> {
            if self.refuse {
                return Err(PlannerError::Auth("popup closed by user".to_string()));
            }
            Ok(User::new(
                format!("{}-uid", provider),
                Some("traveller@example.com".to_string()),
            ))
        }

        async fn sign_out(&self) -> PlannerResult<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_sign_in_updates_session() {
        let session = SessionContext::new();
        let identity = ScriptedIdentity { refuse: false };

        let user = sign_in(&identity, &session, AuthProvider::GitHub).await.unwrap();

        assert_eq!(user.uid, "github-uid");
        assert_eq!(session.current_user(), Some(user));
    }

    #[tokio::test]
    async fn test_refused_sign_in_leaves_session_empty() {
        let session = SessionContext::new();
        let identity = ScriptedIdentity { refuse: true };

        let result = sign_in(&identity, &session, AuthProvider::Google).await;

        assert!(matches!(result, Err(PlannerError::Auth(_))));
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_sign_out_clears_session() {
        let session = SessionContext::signed_in(User::new("u-1", None));
        sign_out(&ScriptedIdentity { refuse: false }, &session).await.unwrap();
        assert!(!session.is_authenticated());
    }
}
