//! Leaderboard fixture: per-member message and reward counts.

use serde::{Deserialize, Serialize};

/// The statistics document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsDoc {
    /// Human-readable reporting period.
    #[serde(default)]
    pub period: String,
    /// Leaderboard rows.
    #[serde(default)]
    pub items: Vec<StatEntry>,
}

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    /// Member name (tie-break key).
    pub name: String,
    /// Messages sent over the period.
    #[serde(default)]
    pub messages: u64,
    /// Rewards earned over the period.
    #[serde(default)]
    pub rewards: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixture_shape() {
        let doc: StatsDoc = serde_json::from_str(
            r#"{
                "period": "March 2024",
                "items": [
                    {"name": "ada", "messages": 120, "rewards": 4},
                    {"name": "brin", "messages": 95}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(doc.period, "March 2024");
        assert_eq!(doc.items[1].rewards, 0);
    }

    #[test]
    fn test_missing_period_defaults_empty() {
        let doc: StatsDoc = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert!(doc.period.is_empty());
    }
}
