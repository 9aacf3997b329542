use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Billing tier mirrored from the `subscriptions` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    #[default]
    Free,
    Pro,
}

impl PlanTier {
    pub const fn is_pro(self) -> bool {
        matches!(self, Self::Pro)
    }
}

/// Row in the `subscriptions` table; at most one active row per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub user_id: String,
    pub plan: PlanTier,
    pub status: String,
    pub current_period_end: Option<DateTime<Utc>>,
}

impl Subscription {
    /// A subscription only grants pro features while the platform reports it
    /// as active.
    pub fn grants_pro(&self) -> bool {
        self.plan.is_pro() && self.status == "active"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_tier_uses_lowercase_wire_names() {
        assert_eq!(serde_json::to_string(&PlanTier::Pro).unwrap(), "\"pro\"");
        assert_eq!(
            serde_json::from_str::<PlanTier>("\"free\"").unwrap(),
            PlanTier::Free
        );
    }

    #[test]
    fn pro_requires_active_status() {
        let mut sub = Subscription {
            id: "s1".to_string(),
            user_id: "u1".to_string(),
            plan: PlanTier::Pro,
            status: "active".to_string(),
            current_period_end: None,
        };
        assert!(sub.grants_pro());

        sub.status = "canceled".to_string();
        assert!(!sub.grants_pro());

        sub.status = "active".to_string();
        sub.plan = PlanTier::Free;
        assert!(!sub.grants_pro());
    }
}
