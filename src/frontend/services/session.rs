//! Cached session storage.

use std::path::PathBuf;

use tokio::fs;

use crate::models::Session;
use crate::utils::paths::get_app_dir;

/// On-disk cache of the platform session so the app can restore the user
/// between runs without asking for credentials again.
pub struct SessionStore;

impl SessionStore {
    /// Gets the path to the cached session file.
    pub fn get_session_path() -> PathBuf {
        get_app_dir()
            .unwrap_or_else(|_| PathBuf::from("CalcBrew"))
            .join("session.json")
    }

    /// Saves the session to disk.
    pub async fn save(session: &Session) -> Result<(), Box<dyn std::error::Error>> {
        let session_path = Self::get_session_path();

        // Ensure parent directory exists
        if let Some(parent) = session_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(session)?;
        fs::write(session_path, json).await?;

        Ok(())
    }

    /// Loads the cached session from disk.
    pub async fn load() -> Option<Session> {
        let session_path = Self::get_session_path();

        if !session_path.exists() {
            return None;
        }

        match fs::read_to_string(session_path).await {
            Ok(json) => serde_json::from_str(&json).ok(),
            Err(_) => None,
        }
    }

    /// Deletes the cached session file.
    pub async fn delete() -> Result<(), Box<dyn std::error::Error>> {
        let session_path = Self::get_session_path();
        if session_path.exists() {
            fs::remove_file(session_path).await?;
        }
        Ok(())
    }
}
