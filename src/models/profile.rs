use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row in the `profiles` table, one per signed-up user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Name shown in the navbar, falling back to the email local part.
    pub fn short_name(&self) -> String {
        if let Some(name) = &self.display_name {
            if !name.is_empty() {
                return name.clone();
            }
        }
        self.email
            .split('@')
            .next()
            .unwrap_or(self.email.as_str())
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(display_name: Option<&str>) -> Profile {
        Profile {
            id: "u1".to_string(),
            email: "ada@calcbrew.app".to_string(),
            display_name: display_name.map(str::to_string),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn short_name_prefers_display_name() {
        assert_eq!(profile(Some("Ada")).short_name(), "Ada");
    }

    #[test]
    fn short_name_falls_back_to_email_local_part() {
        assert_eq!(profile(None).short_name(), "ada");
        assert_eq!(profile(Some("")).short_name(), "ada");
    }
}
