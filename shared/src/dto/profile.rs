use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dto::character::CharacterId;

/// Ship hull reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HullDto {
    pub id: i64,
    pub name: String,
}

/// Aggregated fleet activity for one hull.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySummaryDto {
    pub hull: HullDto,
    /// Total seconds spent in fleet flying this hull.
    pub time_in_fleet: i64,
    /// Most recent fleet appearance in this hull, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<DateTime<Utc>>,
}

/// One character on the profiled account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDetailsDto {
    pub id: CharacterId,
    pub name: String,
    /// Role tag for command staff, e.g. "fleet-commander".
    pub role: Option<String>,
    pub badges: Vec<String>,
    /// Per-hull activity, most-flown first.
    #[serde(default)]
    pub fleet_time: Vec<ActivitySummaryDto>,
}

/// Response of `GET /api/profile/{characterId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDto {
    pub main: CharacterDetailsDto,
    #[serde(default)]
    pub alts: Vec<CharacterDetailsDto>,
    #[serde(default)]
    pub total_fleet_time: Vec<ActivitySummaryDto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_api_response() {
        let json = r#"{
            "main": {
                "id": 93000123,
                "name": "Rin Arzad",
                "role": "fleet-commander",
                "badges": ["logistics", "mentor"],
                "fleet_time": [
                    {
                        "hull": { "id": 640, "name": "Scorpion Navy Issue" },
                        "time_in_fleet": 86400,
                        "last_seen": "2026-07-30T19:42:00Z"
                    }
                ]
            },
            "alts": [
                { "id": 93000456, "name": "Rin's Hauler", "role": null, "badges": [] }
            ],
            "total_fleet_time": [
                { "hull": { "id": 640, "name": "Scorpion Navy Issue" }, "time_in_fleet": 90000 }
            ]
        }"#;

        let profile: ProfileDto = serde_json::from_str(json).unwrap();
        assert_eq!(profile.main.id, CharacterId(93_000_123));
        assert_eq!(profile.main.role.as_deref(), Some("fleet-commander"));
        assert_eq!(profile.main.badges, vec!["logistics", "mentor"]);
        assert_eq!(profile.alts.len(), 1);
        assert_eq!(profile.alts[0].fleet_time.len(), 0);
        assert!(profile.main.fleet_time[0].last_seen.is_some());
        assert!(profile.total_fleet_time[0].last_seen.is_none());
    }

    #[test]
    fn alts_and_totals_default_when_absent() {
        let json = r#"{
            "main": { "id": 1, "name": "Solo Pilot", "role": null, "badges": [] }
        }"#;
        let profile: ProfileDto = serde_json::from_str(json).unwrap();
        assert!(profile.alts.is_empty());
        assert!(profile.total_fleet_time.is_empty());
    }
}
