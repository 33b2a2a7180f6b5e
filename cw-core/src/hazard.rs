use crate::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of coastal hazard a citizen can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HazardType {
    Tsunami,
    Flooding,
    #[serde(rename = "High Waves")]
    HighWaves,
    #[serde(rename = "Swell Surge")]
    SwellSurge,
    #[serde(rename = "Oil Spill")]
    OilSpill,
    #[serde(rename = "Abnormal Tide")]
    AbnormalTide,
    /// Only offered on the emergency form.
    #[serde(rename = "Other Emergency")]
    OtherEmergency,
}

impl HazardType {
    /// Hazards offered on the citizen reporting form and the dashboard filters.
    pub const REPORTABLE: [HazardType; 6] = [
        HazardType::Tsunami,
        HazardType::Flooding,
        HazardType::HighWaves,
        HazardType::SwellSurge,
        HazardType::OilSpill,
        HazardType::AbnormalTide,
    ];

    /// Hazards offered on the emergency report form.
    pub const EMERGENCY: [HazardType; 7] = [
        HazardType::Tsunami,
        HazardType::Flooding,
        HazardType::HighWaves,
        HazardType::SwellSurge,
        HazardType::OilSpill,
        HazardType::AbnormalTide,
        HazardType::OtherEmergency,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HazardType::Tsunami => "Tsunami",
            HazardType::Flooding => "Flooding",
            HazardType::HighWaves => "High Waves",
            HazardType::SwellSurge => "Swell Surge",
            HazardType::OilSpill => "Oil Spill",
            HazardType::AbnormalTide => "Abnormal Tide",
            HazardType::OtherEmergency => "Other Emergency",
        }
    }
}

impl fmt::Display for HazardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HazardType {
    type Err = CoreError;

    /// Accepts display labels ("High Waves") and kebab ids ("high-waves"),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        HazardType::EMERGENCY
            .into_iter()
            .find(|h| h.label().to_lowercase() == normalized)
            .ok_or_else(|| CoreError::UnknownHazard(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_and_kebab_ids() {
        assert_eq!("High Waves".parse::<HazardType>(), Ok(HazardType::HighWaves));
        assert_eq!("oil-spill".parse::<HazardType>(), Ok(HazardType::OilSpill));
        assert_eq!(" tsunami ".parse::<HazardType>(), Ok(HazardType::Tsunami));
    }

    #[test]
    fn rejects_unknown_hazard() {
        assert_eq!(
            "Meteor".parse::<HazardType>(),
            Err(CoreError::UnknownHazard("Meteor".to_string()))
        );
    }

    #[test]
    fn reportable_excludes_other_emergency() {
        assert!(!HazardType::REPORTABLE.contains(&HazardType::OtherEmergency));
        assert!(HazardType::EMERGENCY.contains(&HazardType::OtherEmergency));
    }

    #[test]
    fn serde_uses_display_labels() {
        let json = serde_json::to_string(&HazardType::SwellSurge).unwrap();
        assert_eq!(json, "\"Swell Surge\"");
    }
}
