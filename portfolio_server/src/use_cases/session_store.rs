use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::entities::Session;
use crate::domain::ports::{Clock, CredentialVerifier, KeyValueStore};

// Storage key holding the serialized admin session.
pub const SESSION_KEY: &str = "adminUser";

// Read-only view handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub session: Option<Session>,
    pub is_authenticated: bool,
}

// Single-slot admin session with injected storage, credential policy and clock.
pub struct SessionStore<K, V, C> {
    store: K,
    verifier: V,
    clock: C,
    current: Option<Session>,
    // Per-store login counter; keeps tokens unique within one clock tick.
    issued: u64,
}

impl<K, V, C> SessionStore<K, V, C>
where
    K: KeyValueStore,
    V: CredentialVerifier,
    C: Clock,
{
    pub fn new(store: K, verifier: V, clock: C) -> Self {
        Self {
            store,
            verifier,
            clock,
            current: None,
            issued: 0,
        }
    }

    // Builds a store and immediately rehydrates any persisted session.
    pub fn restored(store: K, verifier: V, clock: C) -> Self {
        let mut session_store = Self::new(store, verifier, clock);
        session_store.restore();
        session_store
    }

    /// Adopts the persisted session, if there is a usable one.
    ///
    /// Unreadable or malformed records leave the store signed out; they are
    /// logged and never surfaced to the caller.
    pub fn restore(&mut self) {
        self.current = match self.store.get(SESSION_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Session>(&raw) {
                Ok(session) if session.is_well_formed() => {
                    info!(username = %session.username, "session restored");
                    Some(session)
                }
                Ok(_) => {
                    warn!("persisted session is missing identity fields; ignoring");
                    None
                }
                Err(error) => {
                    warn!(%error, "persisted session is malformed; ignoring");
                    None
                }
            },
            Ok(None) => {
                debug!("no persisted session");
                None
            }
            Err(error) => {
                warn!(%error, "failed to read persisted session");
                None
            }
        };
    }

    /// Signs in when the credentials match, replacing any current session.
    ///
    /// Returns `false` for rejected credentials and when the new session could
    /// not be persisted; in both cases the current session is left as it was.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        let Some(identity) = self.verifier.verify(username, password) else {
            info!(%username, "login rejected");
            return false;
        };

        let token = self.next_token();
        let session = Session::new(identity, token);

        let raw = match serde_json::to_string(&session) {
            Ok(raw) => raw,
            Err(error) => {
                warn!(%error, "failed to serialize session");
                return false;
            }
        };
        if let Err(error) = self.store.set(SESSION_KEY, &raw) {
            warn!(%error, "failed to persist session; login aborted");
            return false;
        }

        info!(username = %session.username, "login succeeded");
        self.current = Some(session);
        true
    }

    // Clears the session and its persisted record. Safe to call when signed out.
    pub fn logout(&mut self) {
        let previous = self.current.take();

        match self.store.remove(SESSION_KEY) {
            Ok(removed) => debug!(removed, "persisted session cleared"),
            Err(error) => warn!(%error, "failed to clear persisted session"),
        }

        if let Some(session) = previous {
            info!(username = %session.username, "logged out");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session: self.current.clone(),
            is_authenticated: self.is_authenticated(),
        }
    }

    fn next_token(&mut self) -> String {
        let sequence = self.issued;
        self.issued = self.issued.wrapping_add(1);
        format!("token-{}-{}", self.clock.now_epoch_millis(), sequence)
    }
}
