use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::error::message_from_body;
use crate::{RemoteStore, StoreError};

/// The authenticated account as the auth service reports it. The staff
/// profile row is a separate concern and lives in the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub user: SessionUser,
}

/// Session-change notification, delivered to subscribers whenever the
/// session is created, refreshed or revoked - locally or by the server.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionChange {
    SignedIn(Session),
    TokenRefreshed(Session),
    SignedOut,
}

/// Password-based authentication against the remote auth service.
pub struct AuthClient {
    store: RemoteStore,
}

impl AuthClient {
    pub(crate) fn new(store: RemoteStore) -> Self {
        Self { store }
    }

    /// Signs in with email and password. On success the session becomes the
    /// bearer token for all subsequent table and storage calls.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, StoreError> {
        let url = self.store.auth_url("token");
        let response = self
            .store
            .http
            .post(url)
            .query(&[("grant_type", "password")])
            .header("apikey", &self.store.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Auth(message_from_body(&body)));
        }

        let session = response
            .json::<Session>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        self.store.replace_session(Some(session.clone()));
        self.store.notify(SessionChange::SignedIn(session.clone()));
        Ok(session)
    }

    /// Creates an account with profile metadata attached. The server only
    /// returns a session when it auto-confirms new accounts.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: serde_json::Value,
    ) -> Result<Option<Session>, StoreError> {
        let url = self.store.auth_url("signup");
        let response = self
            .store
            .http
            .post(url)
            .header("apikey", &self.store.anon_key)
            .json(&serde_json::json!({
                "email": email,
                "password": password,
                "data": metadata,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Auth(message_from_body(&body)));
        }

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        Ok(serde_json::from_value::<Session>(body).ok())
    }

    /// Revokes the remote session. The local session is cleared and a
    /// `SignedOut` notification is sent even when the revoke call fails;
    /// staying signed in locally after a failed sign-out would be worse.
    pub async fn sign_out(&self) -> Result<(), StoreError> {
        let current = self.store.current_session();
        self.store.replace_session(None);
        self.store.notify(SessionChange::SignedOut);

        let Some(session) = current else {
            return Ok(());
        };
        let url = self.store.auth_url("logout");
        let response = self
            .store
            .http
            .post(url)
            .header("apikey", &self.store.anon_key)
            .bearer_auth(session.access_token)
            .send()
            .await?;
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("remote sign-out failed: {}", message_from_body(&body));
        }
        Ok(())
    }

    /// Exchanges the refresh token for a new access token.
    pub async fn refresh_session(&self) -> Result<Session, StoreError> {
        let current = self
            .store
            .current_session()
            .ok_or_else(|| StoreError::Auth("no session to refresh".to_string()))?;
        let url = self.store.auth_url("token");
        let response = self
            .store
            .http
            .post(url)
            .query(&[("grant_type", "refresh_token")])
            .header("apikey", &self.store.anon_key)
            .json(&serde_json::json!({ "refresh_token": current.refresh_token }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // A rejected refresh means the session is gone server-side.
            self.store.replace_session(None);
            self.store.notify(SessionChange::SignedOut);
            return Err(StoreError::Auth(message_from_body(&body)));
        }

        let session = response
            .json::<Session>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        self.store.replace_session(Some(session.clone()));
        self.store
            .notify(SessionChange::TokenRefreshed(session.clone()));
        Ok(session)
    }

    /// Current in-memory session, if any.
    pub fn session(&self) -> Option<Session> {
        self.store.current_session()
    }

    /// Subscribes to session-change notifications. The receiver's initial
    /// value is a placeholder; callers should await `changed()` first.
    pub fn subscribe(&self) -> watch::Receiver<SessionChange> {
        self.store.change_receiver()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_parses_token_response() {
        let session: Session = serde_json::from_str(
            r#"{
                "access_token": "at",
                "refresh_token": "rt",
                "token_type": "bearer",
                "user": { "id": "11111111-2222-3333-4444-555555555555", "email": "staff@example.com" }
            }"#,
        )
        .unwrap();
        assert_eq!(session.user.id, "11111111-2222-3333-4444-555555555555");
        assert_eq!(session.user.email.as_deref(), Some("staff@example.com"));
    }

    #[tokio::test]
    async fn subscribers_see_local_session_changes() {
        let store = RemoteStore::new("https://backend.example.com", "anon").unwrap();
        let mut rx = store.auth().subscribe();

        let session = Session {
            access_token: "at".into(),
            refresh_token: "rt".into(),
            user: SessionUser {
                id: "user-1".into(),
                email: None,
            },
        };
        store.replace_session(Some(session.clone()));
        store.notify(SessionChange::SignedIn(session.clone()));

        rx.changed().await.unwrap();
        assert_eq!(
            *rx.borrow_and_update(),
            SessionChange::SignedIn(session.clone())
        );
        assert_eq!(store.auth().session(), Some(session));
    }
}
