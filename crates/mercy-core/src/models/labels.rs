use serde::{Deserialize, Serialize};
use std::fmt;

/// Production status of a signal, ordered by urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductionStatus {
    Incident,
    Investigate,
    Watch,
    #[default]
    Ok,
}

impl ProductionStatus {
    pub const ALL: [ProductionStatus; 4] = [
        ProductionStatus::Incident,
        ProductionStatus::Investigate,
        ProductionStatus::Watch,
        ProductionStatus::Ok,
    ];

    /// Exact, case-sensitive match against the wire names.
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "incident" => Some(Self::Incident),
            "investigate" => Some(Self::Investigate),
            "watch" => Some(Self::Watch),
            "ok" => Some(Self::Ok),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Incident => "incident",
            Self::Investigate => "investigate",
            Self::Watch => "watch",
            Self::Ok => "ok",
        }
    }

    /// Urgency rank: incident (4) > investigate (3) > watch (2) > ok (1).
    pub fn urgency(self) -> u8 {
        match self {
            Self::Incident => 4,
            Self::Investigate => 3,
            Self::Watch => 2,
            Self::Ok => 1,
        }
    }
}

impl fmt::Display for ProductionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity band derived from the 7-day severity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SeverityLabel {
    High,
    Medium,
    Low,
    #[default]
    None,
}

impl SeverityLabel {
    pub const ALL: [SeverityLabel; 4] = [
        SeverityLabel::High,
        SeverityLabel::Medium,
        SeverityLabel::Low,
        SeverityLabel::None,
    ];

    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "High" => Some(Self::High),
            "Medium" => Some(Self::Medium),
            "Low" => Some(Self::Low),
            "None" => Some(Self::None),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::None => "None",
        }
    }
}

impl fmt::Display for SeverityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 24h activity compared against the 7-day daily baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendLabel {
    Worsening,
    Stable,
    Improving,
}

impl TrendLabel {
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "worsening" => Some(Self::Worsening),
            "stable" => Some(Self::Stable),
            "improving" => Some(Self::Improving),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Worsening => "worsening",
            Self::Stable => "stable",
            Self::Improving => "improving",
        }
    }
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Confidence in a decision, based on 7-day volume and incident status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLabel {
    High,
    Medium,
    Low,
}

impl ConfidenceLabel {
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for ConfidenceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
