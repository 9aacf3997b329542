//! Authentication context and state management.

use dioxus::prelude::*;

use crate::backend::api::PlatformClient;
use crate::frontend::services::session::SessionStore;
use crate::models::{Profile, Session, Subscription};

#[derive(Clone, Copy)]
pub struct AuthState {
    pub user: Signal<Option<Profile>>,
    pub session: Signal<Option<Session>>,
    /// True until the cached session has been resolved one way or the other.
    pub is_loading: Signal<bool>,
}

impl AuthState {
    /// Restores the cached session from disk and resolves the signed-in user.
    ///
    /// Always clears `is_loading`, even when the cache is stale or the
    /// platform is unreachable.
    pub async fn restore_session(&mut self, mut pro: ProStatus) {
        if let Some(session) = SessionStore::load().await {
            let client = PlatformClient::from_env();
            match client.fetch_profile(&session).await {
                Ok(profile) => {
                    let subscription = client.fetch_subscription(&session).await.ok().flatten();
                    pro.update_from(subscription.as_ref());
                    self.user.set(Some(profile));
                    self.session.set(Some(session));
                }
                Err(e) => {
                    tracing::warn!("Cached session rejected, signing out: {e}");
                    let _ = SessionStore::delete().await;
                }
            }
        }
        self.is_loading.set(false);
    }

    /// Signs in with email and password and caches the session.
    pub async fn login(
        &mut self,
        mut pro: ProStatus,
        email: String,
        password: String,
    ) -> Result<(), String> {
        if !is_valid_email(&email) {
            return Err("Enter a valid email address".to_string());
        }
        if !is_valid_password(&password) {
            return Err("Password must be at least 8 characters long".to_string());
        }

        let client = PlatformClient::from_env();
        let response = client
            .sign_in(&email, &password)
            .await
            .map_err(|e| e.to_string())?;

        if let Err(e) = SessionStore::save(&response.session).await {
            tracing::warn!("Failed to cache session: {e}");
        }

        let subscription = client
            .fetch_subscription(&response.session)
            .await
            .ok()
            .flatten();
        pro.update_from(subscription.as_ref());
        self.user.set(Some(response.profile));
        self.session.set(Some(response.session));
        self.is_loading.set(false);

        Ok(())
    }

    /// Creates an account and signs the new user in.
    pub async fn signup(
        &mut self,
        mut pro: ProStatus,
        email: String,
        password: String,
        display_name: String,
    ) -> Result<(), String> {
        if !is_valid_email(&email) {
            return Err("Enter a valid email address".to_string());
        }
        if !is_valid_password(&password) {
            return Err("Password must be at least 8 characters long".to_string());
        }
        if !is_valid_display_name(&display_name) {
            return Err(
                "Display name must be 2-32 characters long and can only contain letters, numbers, spaces, and underscores".to_string(),
            );
        }

        let client = PlatformClient::from_env();
        let response = client
            .sign_up(&email, &password, &display_name)
            .await
            .map_err(|e| e.to_string())?;

        if let Err(e) = SessionStore::save(&response.session).await {
            tracing::warn!("Failed to cache session: {e}");
        }

        // New accounts start on the free plan
        pro.update_from(None);
        self.user.set(Some(response.profile));
        self.session.set(Some(response.session));
        self.is_loading.set(false);

        Ok(())
    }

    /// Signs out the current user.
    pub async fn logout(&mut self, mut pro: ProStatus) {
        let session = self.session.read().clone();
        if let Some(session) = session {
            let client = PlatformClient::from_env();
            if let Err(e) = client.sign_out(&session).await {
                tracing::warn!("Platform sign-out failed: {e}");
            }
        }
        self.user.set(None);
        self.session.set(None);
        pro.update_from(None);
        let _ = SessionStore::delete().await;
    }

    /// Gets the current user's name or "Guest" as default.
    pub fn get_display_name(&self) -> String {
        self.user
            .read()
            .as_ref()
            .map_or_else(|| "Guest".to_string(), Profile::short_name)
    }
}

/// In-memory pro flag, derived from the active subscription on sign-in.
#[derive(Clone, Copy)]
pub struct ProStatus {
    pub is_pro: Signal<bool>,
}

impl ProStatus {
    pub fn update_from(&mut self, subscription: Option<&Subscription>) {
        self.is_pro
            .set(subscription.is_some_and(Subscription::grants_pro));
    }
}

/// Validates if an email is plausibly deliverable.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Validates if a password meets the platform's minimum length.
pub fn is_valid_password(password: &str) -> bool {
    password.len() >= 8
}

/// Validates if a display name meets the requirements.
pub fn is_valid_display_name(name: &str) -> bool {
    (2..=32).contains(&name.chars().count())
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == ' ' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation() {
        assert!(is_valid_email("ada@calcbrew.app"));
        assert!(!is_valid_email("ada"));
        assert!(!is_valid_email("@calcbrew.app"));
        assert!(!is_valid_email("ada@nodot"));
        assert!(!is_valid_email("ada@.app"));
    }

    #[test]
    fn password_validation() {
        assert!(is_valid_password("longenough"));
        assert!(!is_valid_password("short"));
    }

    #[test]
    fn display_name_validation() {
        assert!(is_valid_display_name("Ada Lovelace"));
        assert!(is_valid_display_name("ada_l"));
        assert!(!is_valid_display_name("A"));
        assert!(!is_valid_display_name("bad!name"));
    }
}
