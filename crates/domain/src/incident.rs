// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Incident classification enums.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The category of a reported incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncidentType {
    Verbal,
    Physical,
    Online,
    Workplace,
    Other,
}

impl IncidentType {
    /// Returns the string representation used for persistence and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Verbal => "VERBAL",
            Self::Physical => "PHYSICAL",
            Self::Online => "ONLINE",
            Self::Workplace => "WORKPLACE",
            Self::Other => "OTHER",
        }
    }
}

impl FromStr for IncidentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VERBAL" => Ok(Self::Verbal),
            "PHYSICAL" => Ok(Self::Physical),
            "ONLINE" => Ok(Self::Online),
            "WORKPLACE" => Ok(Self::Workplace),
            "OTHER" => Ok(Self::Other),
            _ => Err(DomainError::InvalidIncidentType(s.to_string())),
        }
    }
}

impl std::fmt::Display for IncidentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The reporter's self-described emotional state at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmotionalState {
    Scared,
    Anxious,
    Angry,
    Calm,
    Confused,
    Other,
}

impl EmotionalState {
    /// Returns the string representation used for persistence and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scared => "SCARED",
            Self::Anxious => "ANXIOUS",
            Self::Angry => "ANGRY",
            Self::Calm => "CALM",
            Self::Confused => "CONFUSED",
            Self::Other => "OTHER",
        }
    }
}

impl FromStr for EmotionalState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SCARED" => Ok(Self::Scared),
            "ANXIOUS" => Ok(Self::Anxious),
            "ANGRY" => Ok(Self::Angry),
            "CALM" => Ok(Self::Calm),
            "CONFUSED" => Ok(Self::Confused),
            "OTHER" => Ok(Self::Other),
            _ => Err(DomainError::InvalidEmotionalState(s.to_string())),
        }
    }
}

impl std::fmt::Display for EmotionalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incident_type_round_trip() {
        for t in [
            IncidentType::Verbal,
            IncidentType::Physical,
            IncidentType::Online,
            IncidentType::Workplace,
            IncidentType::Other,
        ] {
            assert_eq!(t.as_str().parse::<IncidentType>().unwrap(), t);
        }
    }

    #[test]
    fn test_incident_type_rejects_lowercase() {
        assert!("verbal".parse::<IncidentType>().is_err());
    }

    #[test]
    fn test_emotional_state_rejects_unknown() {
        assert!("TERRIFIED".parse::<EmotionalState>().is_err());
    }
}
