//! Domain Services
//!
//! Pure rules and the random report generator.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::domain::entities::{AnalysisReport, SuspiciousAccount};
use crate::domain::value_objects::{AccountId, Platform};

/// Follower counts are drawn from this half-open range
pub const TOTAL_FOLLOWERS_RANGE: std::ops::Range<u32> = 1_000..11_000;
/// Number of suspicious accounts listed per report
pub const SUSPICIOUS_COUNT_RANGE: std::ops::Range<usize> = 3..8;
/// Creation dates go back at most this far (about 116 days)
pub const CREATED_WINDOW_MS: i64 = 10_000_000_000;

/// `100 * bot / total`, multiplied first so round ratios stay exact.
pub fn bot_percentage(bot_followers: u32, total_followers: u32) -> f64 {
    if total_followers == 0 {
        return 0.0;
    }
    100.0 * f64::from(bot_followers) / f64::from(total_followers)
}

/// Strategy producing a report for an account
///
/// The random generator below is the only implementation today; a real
/// detection engine plugs in here.
pub trait ReportGenerator: Send + Sync {
    fn generate(&self, account_id: &AccountId, platform: Platform) -> AnalysisReport;
}

/// Draws every figure uniformly at random
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomReportGenerator;

impl RandomReportGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate with an explicit RNG and clock
    pub fn generate_with<G: Rng + ?Sized>(
        rng: &mut G,
        account_id: &AccountId,
        platform: Platform,
        now: DateTime<Utc>,
    ) -> AnalysisReport {
        let total_followers = rng.random_range(TOTAL_FOLLOWERS_RANGE);
        let bot_followers = rng.random_range(0..=total_followers / 2);

        let count = rng.random_range(SUSPICIOUS_COUNT_RANGE);
        let suspicious_accounts = (1..=count)
            .map(|index| SuspiciousAccount {
                username: format!("suspicious_user_{index}"),
                bot_probability: rng.random_range(0.0..100.0),
                created_date: (now
                    - Duration::milliseconds(rng.random_range(0..CREATED_WINDOW_MS)))
                .date_naive(),
                activity_score: rng.random_range(0.0..10.0),
            })
            .collect();

        AnalysisReport::new(
            account_id.clone(),
            platform,
            total_followers,
            bot_followers,
            suspicious_accounts,
        )
    }
}

impl ReportGenerator for RandomReportGenerator {
    fn generate(&self, account_id: &AccountId, platform: Platform) -> AnalysisReport {
        Self::generate_with(&mut rand::rng(), account_id, platform, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::RiskLevel;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_bot_percentage() {
        assert_eq!(bot_percentage(600, 2000), 30.0);
        assert_eq!(bot_percentage(300, 2000), 15.0);
        assert_eq!(bot_percentage(0, 1000), 0.0);
        assert_eq!(bot_percentage(0, 0), 0.0);
    }

    #[test]
    fn test_generated_reports_hold_invariants() {
        let account = AccountId::new("user123").unwrap();
        let now = Utc::now();

        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            let r = RandomReportGenerator::generate_with(&mut rng, &account, Platform::Tiktok, now);

            assert!(TOTAL_FOLLOWERS_RANGE.contains(&r.total_followers));
            assert!(r.bot_followers <= r.total_followers / 2);
            assert!(r.total_followers / 2 <= 5500);

            let expected = 100.0 * f64::from(r.bot_followers) / f64::from(r.total_followers);
            assert!((r.bot_percentage - expected).abs() < 1e-9);
            assert_eq!(r.risk_level, RiskLevel::from_percentage(r.bot_percentage));

            assert!(SUSPICIOUS_COUNT_RANGE.contains(&r.suspicious_accounts.len()));
            for (i, s) in r.suspicious_accounts.iter().enumerate() {
                assert_eq!(s.username, format!("suspicious_user_{}", i + 1));
                assert!((0.0..100.0).contains(&s.bot_probability));
                assert!((0.0..10.0).contains(&s.activity_score));
                assert!(s.created_date <= now.date_naive());
                assert!(s.created_date >= (now - Duration::days(117)).date_naive());
            }

            assert_eq!(r.account_id, account);
            assert_eq!(r.platform, Platform::Tiktok);
        }
    }

    #[test]
    fn test_repeated_calls_draw_independently() {
        let generator = RandomReportGenerator::new();
        let account = AccountId::new("user123").unwrap();

        let totals: Vec<u32> = (0..10)
            .map(|_| generator.generate(&account, Platform::Tiktok).total_followers)
            .collect();

        assert!(
            totals.iter().any(|t| *t != totals[0]),
            "Repeated reports should not share every follower count"
        );
    }

    #[test]
    fn test_same_seed_same_report() {
        let account = AccountId::new("user123").unwrap();
        let now = Utc::now();
        let a = RandomReportGenerator::generate_with(
            &mut StdRng::seed_from_u64(7),
            &account,
            Platform::Instagram,
            now,
        );
        let b = RandomReportGenerator::generate_with(
            &mut StdRng::seed_from_u64(7),
            &account,
            Platform::Instagram,
            now,
        );
        assert_eq!(a, b);
    }
}
