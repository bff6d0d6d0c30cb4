// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Engagement streak bookkeeping.

use crate::models::UserProfile;

/// Count `today` as an engagement day.
///
/// Days are compared as plain `YYYY-MM-DD` strings. The streak only grows;
/// a gap between days does not reset it. Returns `true` if the streak moved.
pub fn record_login(profile: &mut UserProfile, today: &str) -> bool {
    if profile.last_login_date == today {
        return false;
    }
    profile.streak_count = profile.streak_count.saturating_add(1);
    profile.last_login_date = today.to_string();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_last_seen(day: &str, streak: u32) -> UserProfile {
        let mut p = UserProfile::new_default(day);
        p.streak_count = streak;
        p
    }

    #[test]
    fn test_same_day_does_not_increment() {
        let mut profile = profile_last_seen("2024-01-01", 4);
        assert!(!record_login(&mut profile, "2024-01-01"));
        assert_eq!(profile.streak_count, 4);
    }

    #[test]
    fn test_next_day_increments_and_moves_date() {
        let mut profile = profile_last_seen("2024-01-01", 4);
        assert!(record_login(&mut profile, "2024-01-02"));
        assert_eq!(profile.streak_count, 5);
        assert_eq!(profile.last_login_date, "2024-01-02");
    }

    #[test]
    fn test_twice_same_new_day_increments_once() {
        let mut profile = profile_last_seen("2024-01-01", 0);
        record_login(&mut profile, "2024-01-02");
        record_login(&mut profile, "2024-01-02");
        assert_eq!(profile.streak_count, 1);
    }

    #[test]
    fn test_gap_does_not_reset() {
        let mut profile = profile_last_seen("2024-01-01", 9);
        record_login(&mut profile, "2024-03-15");
        assert_eq!(profile.streak_count, 10);
    }
}
