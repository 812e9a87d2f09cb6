use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Storage key for the persisted session. The serialized payload under
/// this key is the single source of truth for "is logged in".
pub const AUTH_STORAGE_KEY: &str = "auth";

/// Opaque session payload returned by a successful login.
///
/// The shape is owned by the API; the client only peeks at the token
/// fields and otherwise persists the payload exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session(Value);

impl Session {
    pub fn new(payload: Value) -> Self {
        Self(payload)
    }

    pub fn payload(&self) -> &Value {
        &self.0
    }

    pub fn access_token(&self) -> Option<&str> {
        self.token_field("accessToken")
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.token_field("refreshToken")
    }

    // Tokens live either at the top level or under a "data" envelope,
    // depending on the endpoint.
    fn token_field(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .or_else(|| self.0.get("data").and_then(|data| data.get(field)))
            .and_then(Value::as_str)
    }
}

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session payload could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable client-side session storage.
///
/// One JSON file per key under the store directory. Created on login
/// success, read by the rest of the application, destroyed on logout.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Store rooted at the user data directory.
    pub fn new() -> Result<Self, SessionStoreError> {
        let dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("moivon");
        Self::with_dir(dir)
    }

    /// Store rooted at an explicit directory. Tests use this with a
    /// temporary directory.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Result<Self, SessionStoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    pub fn session_path(&self) -> PathBuf {
        self.key_path(AUTH_STORAGE_KEY)
    }

    /// Persist the session payload, serialized exactly as received.
    pub fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let serialized = serde_json::to_string(session.payload())?;
        std::fs::write(self.session_path(), serialized)?;
        log::info!("Session persisted under key '{AUTH_STORAGE_KEY}'");
        Ok(())
    }

    pub fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        let path = self.session_path();
        if !Path::new(&path).exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(path)?;
        let payload = serde_json::from_str(&raw)?;
        Ok(Some(Session::new(payload)))
    }

    pub fn is_logged_in(&self) -> bool {
        self.session_path().exists()
    }

    /// Destroy the persisted session (logout).
    pub fn clear(&self) -> Result<(), SessionStoreError> {
        let path = self.session_path();
        if path.exists() {
            std::fs::remove_file(path)?;
            log::info!("Session cleared");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_none, assert_ok, assert_some};
    use serde_json::json;

    fn store() -> (SessionStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SessionStore::with_dir(dir.path()).expect("store");
        (store, dir)
    }

    #[test]
    fn test_save_persists_exact_serialized_payload() {
        let (store, _dir) = store();
        let payload = json!({"accessToken": "at-1", "refreshToken": "rt-1", "user": {"id": 7}});
        let session = Session::new(payload.clone());

        assert_ok!(store.save(&session));

        let raw = std::fs::read_to_string(store.session_path()).unwrap();
        assert_eq!(raw, serde_json::to_string(&payload).unwrap());
    }

    #[test]
    fn test_load_round_trips_session() {
        let (store, _dir) = store();
        let session = Session::new(json!({"data": {"accessToken": "nested"}}));
        store.save(&session).unwrap();

        let loaded = assert_some!(store.load().unwrap());
        assert_eq!(loaded, session);
        assert_eq!(loaded.access_token(), Some("nested"));
    }

    #[test]
    fn test_load_without_session_is_none() {
        let (store, _dir) = store();
        assert_none!(store.load().unwrap());
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_clear_destroys_session() {
        let (store, _dir) = store();
        store.save(&Session::new(json!({"accessToken": "x"}))).unwrap();
        assert!(store.is_logged_in());

        assert_ok!(store.clear());
        assert!(!store.is_logged_in());
        // Clearing twice is a no-op.
        assert_ok!(store.clear());
    }

    #[test]
    fn test_access_token_prefers_top_level_field() {
        let session = Session::new(json!({
            "accessToken": "top",
            "data": {"accessToken": "nested"}
        }));
        assert_eq!(session.access_token(), Some("top"));
    }
}
