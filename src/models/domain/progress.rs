use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Points threshold at which accrued points convert into one hour.
pub const POINTS_PER_HOUR: i64 = 90;

/// Per-user points/hours accumulator. `points` is always the remainder of
/// lifetime points modulo 90; `hours` the accumulated quotient, so
/// `hours * 90 + points` equals the sum of every award ever applied.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct KidProgress {
    pub user_id: String,
    pub points: i64,
    pub hours: i64,
    #[serde(with = "super::timestamp::rfc3339_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "super::timestamp::rfc3339_millis")]
    pub updated_at: DateTime<Utc>,
}

impl KidProgress {
    pub fn new(user_id: &str) -> Self {
        let now = Utc::now();
        KidProgress {
            user_id: user_id.to_string(),
            points: 0,
            hours: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies one award with the modulo-90 carry. The Mongo repository
    /// performs the same arithmetic inside a single atomic update; this
    /// method is the reference implementation and must stay in sync with it.
    pub fn apply_award(&mut self, gained: i64) {
        let total = self.points + gained;
        self.points = total % POINTS_PER_HOUR;
        self.hours += total / POINTS_PER_HOUR;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_progress_starts_empty() {
        let progress = KidProgress::new("kid-1");
        assert_eq!(progress.points, 0);
        assert_eq!(progress.hours, 0);
    }

    #[test]
    fn test_award_below_threshold_accrues_points() {
        let mut progress = KidProgress::new("kid-1");
        progress.apply_award(40);
        assert_eq!(progress.points, 40);
        assert_eq!(progress.hours, 0);
    }

    #[test]
    fn test_award_carries_into_hours() {
        let mut progress = KidProgress::new("kid-1");
        progress.points = 85;
        progress.hours = 2;
        progress.apply_award(20);
        assert_eq!(progress.points, 15);
        assert_eq!(progress.hours, 3);
    }

    #[test]
    fn test_large_award_carries_multiple_hours() {
        let mut progress = KidProgress::new("kid-1");
        progress.apply_award(275);
        assert_eq!(progress.points, 5);
        assert_eq!(progress.hours, 3);
    }

    #[test]
    fn test_award_sequence_preserves_lifetime_total() {
        let awards = [10i64, 85, 0, 44, 90, 7];
        let mut progress = KidProgress::new("kid-1");
        for gained in awards {
            progress.apply_award(gained);
        }

        let lifetime: i64 = awards.iter().sum();
        assert_eq!(progress.hours * POINTS_PER_HOUR + progress.points, lifetime);
        assert!(progress.points >= 0 && progress.points < POINTS_PER_HOUR);
    }
}
