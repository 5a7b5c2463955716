//! Domain Entities
//!
//! The synthetic bot-detection report.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::services::bot_percentage;
use crate::domain::value_objects::{AccountId, Platform, RiskLevel};

/// One follower flagged as a likely bot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuspiciousAccount {
    pub username: String,
    /// In [0, 100)
    pub bot_probability: f64,
    /// Calendar date only, serialized as `YYYY-MM-DD`
    pub created_date: NaiveDate,
    /// In [0, 10)
    pub activity_score: f64,
}

/// Result of analyzing one account
///
/// `bot_percentage` and `risk_level` are always derived from the counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub account_id: AccountId,
    pub platform: Platform,
    pub total_followers: u32,
    pub bot_followers: u32,
    pub bot_percentage: f64,
    pub risk_level: RiskLevel,
    pub suspicious_accounts: Vec<SuspiciousAccount>,
}

impl AnalysisReport {
    pub fn new(
        account_id: AccountId,
        platform: Platform,
        total_followers: u32,
        bot_followers: u32,
        suspicious_accounts: Vec<SuspiciousAccount>,
    ) -> Self {
        let bot_percentage = bot_percentage(bot_followers, total_followers);

        Self {
            account_id,
            platform,
            total_followers,
            bot_followers,
            bot_percentage,
            risk_level: RiskLevel::from_percentage(bot_percentage),
            suspicious_accounts,
        }
    }
}
