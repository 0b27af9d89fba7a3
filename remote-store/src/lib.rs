//! Client for the hosted backend service.
//!
//! Three surfaces share one connection handle: PostgREST-style table CRUD
//! (`table`), password authentication with session-change notifications
//! (`auth`), and the object-storage bucket API (`storage`). The session is
//! held in memory and attached as a bearer token to every request; without
//! one, requests run with the anonymous key and whatever the backend's
//! row-level policies allow.

mod auth;
mod error;
mod storage;
mod table;

pub use auth::{AuthClient, Session, SessionChange, SessionUser};
pub use error::StoreError;
pub use storage::{path_from_public_url, StorageClient};
pub use table::TableQuery;

use std::sync::{Arc, RwLock};
use std::time::Duration;

use tokio::sync::watch;

/// Connection handle. Cloning is cheap; all clones share the HTTP pool and
/// the current session.
#[derive(Clone)]
pub struct RemoteStore {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
    session: Arc<RwLock<Option<Session>>>,
    changes: watch::Sender<SessionChange>,
}

impl RemoteStore {
    pub fn new(base_url: &str, anon_key: &str) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("remote-store/0.1")
            .build()
            .map_err(|e| StoreError::Network(format!("client build failed: {}", e)))?;
        let (changes, _) = watch::channel(SessionChange::SignedOut);

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            session: Arc::new(RwLock::new(None)),
            changes,
        })
    }

    /// Starts a query against one named table.
    pub fn table(&self, name: &str) -> TableQuery {
        TableQuery::new(self.clone(), name)
    }

    pub fn auth(&self) -> AuthClient {
        AuthClient::new(self.clone())
    }

    pub fn storage(&self) -> StorageClient {
        StorageClient::new(self.clone())
    }

    pub(crate) fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    pub(crate) fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    pub(crate) fn storage_url(&self, path: &str) -> String {
        format!("{}/storage/v1/{}", self.base_url, path)
    }

    /// Attaches the api key and the strongest available bearer token.
    pub(crate) fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let token = self
            .current_session()
            .map(|s| s.access_token)
            .unwrap_or_else(|| self.anon_key.clone());
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
    }

    pub(crate) fn current_session(&self) -> Option<Session> {
        self.session
            .read()
            .ok()
            .and_then(|guard| guard.clone())
    }

    pub(crate) fn replace_session(&self, session: Option<Session>) {
        if let Ok(mut guard) = self.session.write() {
            *guard = session;
        }
    }

    pub(crate) fn notify(&self, change: SessionChange) {
        // Nobody listening is fine; the channel just drops the value.
        let _ = self.changes.send(change);
    }

    pub(crate) fn change_receiver(&self) -> watch::Receiver<SessionChange> {
        self.changes.subscribe()
    }
}
