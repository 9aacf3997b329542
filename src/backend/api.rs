//! Client for the hosted backend platform.
//!
//! Auth, persistence and billing all live behind this JSON API; the app never
//! talks to a database directly.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::api_error;
use crate::models::{Calculation, NewCalculation, Profile, Session, Subscription};
use crate::utils::Result;

const DEFAULT_BASE_URL: &str = "https://api.calcbrew.app/v1";

/// Successful sign-in/sign-up payload.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub session: Session,
    pub profile: Profile,
}

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct SignupRequest<'a> {
    email: &'a str,
    password: &'a str,
    display_name: &'a str,
}

/// Error body the platform returns on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct PlatformClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PlatformClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Builds a client from `CALCBREW_API_URL` / `CALCBREW_API_KEY`, falling
    /// back to the hosted platform.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("CALCBREW_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let api_key = std::env::var("CALCBREW_API_KEY").unwrap_or_default();
        Self::new(base_url, api_key)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<ApiErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| status.to_string());
        Err(api_error!(
            "Platform request failed ({}): {}",
            status,
            message
        ))
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let response = self
            .http
            .post(self.url("/auth/login"))
            .header("apikey", &self.api_key)
            .json(&Credentials { email, password })
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<AuthResponse> {
        let response = self
            .http
            .post(self.url("/auth/signup"))
            .header("apikey", &self.api_key)
            .json(&SignupRequest {
                email,
                password,
                display_name,
            })
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn sign_out(&self, session: &Session) -> Result<()> {
        let response = self
            .http
            .post(self.url("/auth/logout"))
            .header("apikey", &self.api_key)
            .bearer_auth(&session.access_token)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn fetch_profile(&self, session: &Session) -> Result<Profile> {
        let response = self
            .http
            .get(self.url("/profiles/me"))
            .header("apikey", &self.api_key)
            .bearer_auth(&session.access_token)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// Active subscription for the signed-in user, `None` when the user has
    /// never subscribed.
    pub async fn fetch_subscription(&self, session: &Session) -> Result<Option<Subscription>> {
        let response = self
            .http
            .get(self.url("/subscriptions/me"))
            .header("apikey", &self.api_key)
            .bearer_auth(&session.access_token)
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(Self::check(response).await?.json().await?))
    }

    pub async fn list_calculations(&self, session: &Session) -> Result<Vec<Calculation>> {
        let response = self
            .http
            .get(self.url("/calculations"))
            .header("apikey", &self.api_key)
            .bearer_auth(&session.access_token)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn save_calculation(
        &self,
        session: &Session,
        entry: &NewCalculation,
    ) -> Result<Calculation> {
        let response = self
            .http
            .post(self.url("/calculations"))
            .header("apikey", &self.api_key)
            .bearer_auth(&session.access_token)
            .json(entry)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let client = PlatformClient::new("https://api.example.com/v1/", "k");
        assert_eq!(
            client.url("/auth/login"),
            "https://api.example.com/v1/auth/login"
        );
    }
}
