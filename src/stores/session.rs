use dioxus::prelude::*;
use remote_store::SessionChange;

use crate::error::AppError;
use crate::models::Profile;
use crate::services::{profile_service, DataLayer};

/// Lifecycle of the one authenticated identity per running client.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Uninitialized,
    Initializing,
    Authenticated(Profile),
    Anonymous,
}

impl SessionState {
    pub fn profile(&self) -> Option<&Profile> {
        match self {
            SessionState::Authenticated(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.profile().is_some_and(Profile::is_admin)
    }

    pub fn is_manager(&self) -> bool {
        self.profile().is_some_and(Profile::is_manager)
    }
}

/// What a finished profile lookup means for the session. An authenticated
/// account without a profile row gets no access: role checks fail closed.
fn resolve_profile(lookup: Result<Option<Profile>, AppError>) -> SessionState {
    match lookup {
        Ok(Some(profile)) => SessionState::Authenticated(profile),
        Ok(None) => {
            log::warn!("authenticated account has no staff profile; treating as anonymous");
            SessionState::Anonymous
        }
        Err(e) => {
            log::warn!("profile lookup failed: {}; treating as anonymous", e);
            SessionState::Anonymous
        }
    }
}

/// Injected session container. Copyable handle over one shared signal;
/// provided once at the application root, never a hidden global.
#[derive(Clone, Copy)]
pub struct SessionStore {
    state: Signal<SessionState>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            state: Signal::new(SessionState::Uninitialized),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }

    pub fn is_admin(&self) -> bool {
        self.state.read().is_admin()
    }

    pub fn is_manager(&self) -> bool {
        self.state.read().is_manager()
    }

    /// Checks for an existing remote session, loads the matching profile
    /// and settles to Authenticated or Anonymous. Also subscribes to the
    /// auth service's change notifications, the one place where external
    /// events (server-side logout, token refresh) drive a transition.
    pub async fn initialize(mut self, data: DataLayer) {
        if *self.state.peek() != SessionState::Uninitialized {
            return;
        }
        self.state.set(SessionState::Initializing);

        let next = match data.store.auth().session() {
            Some(session) => resolve_profile(profile_service::by_id(&data, &session.user.id).await),
            None => SessionState::Anonymous,
        };
        self.state.set(next);

        let mut changes = data.store.auth().subscribe();
        spawn(async move {
            loop {
                if changes.changed().await.is_err() {
                    break;
                }
                let change = changes.borrow_and_update().clone();
                match change {
                    SessionChange::SignedOut => {
                        self.state.set(SessionState::Anonymous);
                    }
                    SessionChange::SignedIn(session) | SessionChange::TokenRefreshed(session) => {
                        let lookup = profile_service::by_id(&data, &session.user.id).await;
                        self.state.set(resolve_profile(lookup));
                    }
                }
            }
        });
    }

    /// Password sign-in. The error comes back as a value so the login form
    /// can render it inline instead of tearing down the screen.
    pub async fn sign_in(
        mut self,
        data: DataLayer,
        email: String,
        password: String,
    ) -> Result<(), String> {
        let session = match data
            .store
            .auth()
            .sign_in_with_password(&email, &password)
            .await
        {
            Ok(session) => session,
            Err(e) => return Err(AppError::from(e).user_message()),
        };

        let next = resolve_profile(profile_service::by_id(&data, &session.user.id).await);
        let authorized = matches!(next, SessionState::Authenticated(_));
        self.state.set(next);
        if authorized {
            Ok(())
        } else {
            Err("This account has no staff access.".to_string())
        }
    }

    pub async fn sign_out(mut self, data: DataLayer) {
        if let Err(e) = data.store.auth().sign_out().await {
            log::warn!("sign-out: {}", e);
        }
        self.state.set(SessionState::Anonymous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;
    use chrono::Utc;
    use uuid::Uuid;

    fn profile(role: UserRole) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            email: "staff@example.com".to_string(),
            full_name: "Staff".to_string(),
            role,
            avatar_url: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn profile_row_authenticates() {
        let state = resolve_profile(Ok(Some(profile(UserRole::Admin))));
        assert!(state.is_admin());
        assert!(state.is_manager());
    }

    #[test]
    fn missing_profile_fails_closed() {
        let state = resolve_profile(Ok(None));
        assert_eq!(state, SessionState::Anonymous);
        assert!(!state.is_manager());
    }

    #[test]
    fn lookup_error_fails_closed() {
        let state = resolve_profile(Err(AppError::NotFound("profiles".to_string())));
        assert_eq!(state, SessionState::Anonymous);
    }

    #[test]
    fn manager_is_not_admin() {
        let state = resolve_profile(Ok(Some(profile(UserRole::Manager))));
        assert!(state.is_manager());
        assert!(!state.is_admin());
    }
}
