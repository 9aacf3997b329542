use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row in the `calculations` table: one saved calculator result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub id: String,
    pub user_id: String,
    pub expression: String,
    pub result: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for `calculations`; the platform fills in `id`, `user_id`
/// and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCalculation {
    pub expression: String,
    pub result: String,
}
