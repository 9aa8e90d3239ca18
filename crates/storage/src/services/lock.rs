use chrono::{DateTime, Utc};

use crate::models::{Competition, Match};

/// Submissions are accepted strictly before the lock instant.
pub fn is_open(lock_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now < lock_at
}

/// Anything users can submit against exposes exactly one lock instant.
pub trait Lockable {
    fn lock_at(&self) -> DateTime<Utc>;

    fn is_open_at(&self, now: DateTime<Utc>) -> bool {
        is_open(self.lock_at(), now)
    }
}

/// Guesses lock at kick-off.
impl Lockable for Match {
    fn lock_at(&self) -> DateTime<Utc> {
        self.match_date
    }
}

/// Bonus answers lock when the owning competition starts.
impl Lockable for Competition {
    fn lock_at(&self) -> DateTime<Utc> {
        self.start_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use uuid::Uuid;

    fn kickoff() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 18, 0, 0).unwrap()
    }

    #[test]
    fn test_open_before_lock() {
        assert!(is_open(kickoff(), kickoff() - Duration::seconds(1)));
    }

    #[test]
    fn test_closed_at_lock_instant() {
        assert!(!is_open(kickoff(), kickoff()));
    }

    #[test]
    fn test_closed_after_lock() {
        assert!(!is_open(kickoff(), kickoff() + Duration::minutes(90)));
    }

    #[test]
    fn test_match_locks_at_match_date() {
        let game = Match {
            match_id: Uuid::new_v4(),
            team_home_id: Uuid::new_v4(),
            team_away_id: Uuid::new_v4(),
            match_date: kickoff(),
            score_home: None,
            score_away: None,
            group_label: "A".to_string(),
            venue: None,
            competition_id: Uuid::new_v4(),
        };

        assert_eq!(game.lock_at(), kickoff());
        assert!(game.is_open_at(kickoff() - Duration::hours(1)));
        assert!(!game.is_open_at(kickoff()));
    }

    #[test]
    fn test_competition_locks_at_start_date() {
        let competition = Competition {
            competition_id: Uuid::new_v4(),
            name: "European Championship 2026".to_string(),
            short_name: "EURO26".to_string(),
            start_date: kickoff(),
            created_at: kickoff() - Duration::days(30),
        };

        assert!(competition.is_open_at(kickoff() - Duration::days(1)));
        assert!(!competition.is_open_at(kickoff() + Duration::days(1)));
    }
}
