//! Domain Value Objects
//!
//! Immutable value types for the analysis domain.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AnalysisError, AnalysisResult};

/// Social platform an account lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Tiktok,
}

impl Platform {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Tiktok => "tiktok",
        }
    }
}

impl FromStr for Platform {
    type Err = AnalysisError;

    fn from_str(s: &str) -> AnalysisResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "instagram" => Ok(Platform::Instagram),
            "tiktok" => Ok(Platform::Tiktok),
            _ => Err(AnalysisError::InvalidPlatform(s.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account identifier as typed by the user; never empty
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Rejects empty and whitespace-only ids; the value is otherwise kept verbatim.
    pub fn new(account_id: impl Into<String>) -> AnalysisResult<Self> {
        let account_id = account_id.into();
        if account_id.trim().is_empty() {
            return Err(AnalysisError::InvalidAccountId);
        }
        Ok(Self(account_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Risk tier derived from the bot percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Percentage above which an account is high risk
    pub const HIGH_THRESHOLD: f64 = 30.0;
    /// Percentage above which an account is medium risk
    pub const MEDIUM_THRESHOLD: f64 = 15.0;

    /// Strict comparisons: exactly 30.0 is medium, exactly 15.0 is low.
    pub fn from_percentage(bot_percentage: f64) -> Self {
        if bot_percentage > Self::HIGH_THRESHOLD {
            RiskLevel::High
        } else if bot_percentage > Self::MEDIUM_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// One-line explanation shown next to the tier
    pub const fn summary(&self) -> &'static str {
        match self {
            RiskLevel::High => {
                "Your account has a high percentage of bot followers which may affect engagement metrics."
            }
            RiskLevel::Medium => "Your account has a moderate number of bot followers.",
            RiskLevel::Low => "Your account appears to have a low number of bot followers.",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_boundaries() {
        assert_eq!(RiskLevel::from_percentage(30.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_percentage(30.0001), RiskLevel::High);
        assert_eq!(RiskLevel::from_percentage(15.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_percentage(15.0001), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_percentage(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_percentage(50.0), RiskLevel::High);
    }

    #[test]
    fn test_platform_parse() {
        assert_eq!("tiktok".parse::<Platform>().unwrap(), Platform::Tiktok);
        assert_eq!("Instagram".parse::<Platform>().unwrap(), Platform::Instagram);
        assert!(matches!(
            "myspace".parse::<Platform>(),
            Err(AnalysisError::InvalidPlatform(_))
        ));
    }

    #[test]
    fn test_platform_serde() {
        assert_eq!(serde_json::to_string(&Platform::Tiktok).unwrap(), "\"tiktok\"");
        assert_eq!(serde_json::to_string(&RiskLevel::Medium).unwrap(), "\"medium\"");
    }

    #[test]
    fn test_account_id() {
        assert!(matches!(AccountId::new(""), Err(AnalysisError::InvalidAccountId)));
        assert!(AccountId::new("   ").is_err());
        assert_eq!(AccountId::new(" user123").unwrap().as_str(), " user123");
    }
}
