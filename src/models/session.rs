use serde::{Deserialize, Serialize};

/// Auth session issued by the platform on sign-in; cached on disk so the app
/// can restore the user between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user_id: String,
}
