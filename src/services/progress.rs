// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Phase progress, the lock frontier, and the two activity gates.
//!
//! Starting a guided session is gated on both pause and lock. Toggling
//! completion directly is gated on pause only, so a profile can tick off an
//! activity in a phase it is still locked out of starting.

use crate::models::{Phase, RecoveryActivity, UserProfile};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Share of `phase_activities` the profile has completed, as a whole percent.
///
/// An empty phase is 0% complete.
pub fn phase_completion(profile: &UserProfile, phase_activities: &[&RecoveryActivity]) -> u8 {
    let done = completed_count(profile, phase_activities);
    percent(done, phase_activities.len())
}

/// Share of the visible journey the profile has completed.
///
/// Only ids that are actually visible count, so the value stays within 0-100
/// when the profile switches stage or pace.
pub fn journey_progress(profile: &UserProfile, visible: &[&RecoveryActivity]) -> u8 {
    let done = completed_count(profile, visible);
    percent(done, visible.len())
}

/// Points earned in a phase.
pub fn phase_points(profile: &UserProfile, phase_activities: &[&RecoveryActivity]) -> u32 {
    phase_activities
        .iter()
        .filter(|a| profile.completed_activity_ids.contains(&a.id))
        .map(|a| a.points)
        .sum()
}

fn completed_count(profile: &UserProfile, activities: &[&RecoveryActivity]) -> usize {
    activities
        .iter()
        .filter(|a| profile.completed_activity_ids.contains(&a.id))
        .count()
}

fn percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let pct = (part as f64 / whole as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

/// True if `target` lies beyond the profile's unlock frontier.
///
/// The current phase is never locked. A phase from another taxonomy than the
/// current phase has no position on the frontier and counts as locked.
pub fn is_phase_locked(profile: &UserProfile, target: Phase) -> bool {
    let current = profile.current_phase;
    if target == current {
        return false;
    }
    if target.taxonomy() != current.taxonomy() {
        return true;
    }
    target.index() > current.index()
}

/// Why a session start was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "snake_case")]
pub enum SessionBlock {
    Paused,
    Locked,
}

/// Session-start gate: not paused and not beyond the frontier.
pub fn can_start_session(
    profile: &UserProfile,
    activity: &RecoveryActivity,
) -> Result<(), SessionBlock> {
    if profile.journey_settings.is_paused {
        return Err(SessionBlock::Paused);
    }
    if is_phase_locked(profile, activity.phase) {
        return Err(SessionBlock::Locked);
    }
    Ok(())
}

/// Direct-toggle gate: only pause applies.
pub fn can_toggle(profile: &UserProfile) -> bool {
    !profile.journey_settings.is_paused
}

/// Result of a direct completion toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    Completed,
    Uncompleted,
    Paused,
}

/// Flip an activity's completion, unless the journey is paused.
pub fn toggle_completion(profile: &mut UserProfile, activity_id: &str) -> ToggleOutcome {
    if !can_toggle(profile) {
        return ToggleOutcome::Paused;
    }
    if profile.completed_activity_ids.remove(activity_id) {
        ToggleOutcome::Uncompleted
    } else {
        profile
            .completed_activity_ids
            .insert(activity_id.to_string());
        ToggleOutcome::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, MaternityStage};

    fn make_activity(id: &str, phase: Phase, points: u32) -> RecoveryActivity {
        RecoveryActivity {
            id: id.to_string(),
            phase,
            title: id.to_string(),
            description: String::new(),
            category: Category::PhysicalRecovery,
            duration_minutes: 10,
            frequency: "Daily".to_string(),
            points,
            type_specific: None,
            intensity_scale: 2,
        }
    }

    fn postpartum_at(phase: Phase) -> UserProfile {
        let mut p = UserProfile::new_default("2024-01-01");
        p.maternity_stage = MaternityStage::Postpartum;
        p.current_phase = phase;
        p
    }

    #[test]
    fn test_one_of_three_rounds_to_33() {
        let a1 = make_activity("a1", Phase::Month1, 10);
        let a2 = make_activity("a2", Phase::Month1, 10);
        let a3 = make_activity("a3", Phase::Month1, 10);
        let mut profile = postpartum_at(Phase::Month1);
        profile.completed_activity_ids.insert("a1".to_string());

        assert_eq!(phase_completion(&profile, &[&a1, &a2, &a3]), 33);

        profile.completed_activity_ids.insert("a2".to_string());
        assert_eq!(phase_completion(&profile, &[&a1, &a2, &a3]), 67);
    }

    #[test]
    fn test_empty_phase_is_zero() {
        let profile = postpartum_at(Phase::Month1);
        assert_eq!(phase_completion(&profile, &[]), 0);
        assert_eq!(journey_progress(&profile, &[]), 0);
    }

    #[test]
    fn test_completion_is_monotonic_and_capped() {
        let acts: Vec<RecoveryActivity> = (0..7)
            .map(|i| make_activity(&format!("a{}", i), Phase::Month2, 5))
            .collect();
        let refs: Vec<&RecoveryActivity> = acts.iter().collect();
        let mut profile = postpartum_at(Phase::Month2);

        let mut last = phase_completion(&profile, &refs);
        for id in ["a3", "a0", "unrelated", "a6", "a1", "a2", "a4", "a5"] {
            profile.completed_activity_ids.insert(id.to_string());
            let next = phase_completion(&profile, &refs);
            assert!(next >= last);
            assert_eq!(next, phase_completion(&profile, &refs));
            last = next;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn test_phase_points_counts_completed_only() {
        let a1 = make_activity("a1", Phase::Month1, 10);
        let a2 = make_activity("a2", Phase::Month1, 25);
        let mut profile = postpartum_at(Phase::Month1);
        profile.completed_activity_ids.insert("a2".to_string());
        assert_eq!(phase_points(&profile, &[&a1, &a2]), 25);
    }

    #[test]
    fn test_lock_frontier() {
        let profile = postpartum_at(Phase::Month2);
        assert!(!is_phase_locked(&profile, Phase::Month1));
        assert!(!is_phase_locked(&profile, Phase::Month2));
        assert!(is_phase_locked(&profile, Phase::Month3));
        assert!(is_phase_locked(&profile, Phase::Month4Plus));
        assert!(is_phase_locked(&profile, Phase::Trimester1));
    }

    #[test]
    fn test_current_phase_never_locked() {
        for phase in [
            Phase::Month1,
            Phase::Month4Plus,
            Phase::Trimester2,
            Phase::PreConception,
        ] {
            assert!(!is_phase_locked(&postpartum_at(phase), phase));
        }
    }

    #[test]
    fn test_session_gate_checks_pause_then_lock() {
        let later = make_activity("m3", Phase::Month3, 10);
        let now = make_activity("m1", Phase::Month1, 10);
        let mut profile = postpartum_at(Phase::Month1);

        assert_eq!(can_start_session(&profile, &now), Ok(()));
        assert_eq!(
            can_start_session(&profile, &later),
            Err(SessionBlock::Locked)
        );

        profile.journey_settings.is_paused = true;
        assert_eq!(can_start_session(&profile, &now), Err(SessionBlock::Paused));
    }

    #[test]
    fn test_toggle_ignores_lock_but_respects_pause() {
        let mut profile = postpartum_at(Phase::Month1);

        assert_eq!(
            toggle_completion(&mut profile, "m3-locked"),
            ToggleOutcome::Completed
        );
        assert!(profile.completed_activity_ids.contains("m3-locked"));
        assert_eq!(
            toggle_completion(&mut profile, "m3-locked"),
            ToggleOutcome::Uncompleted
        );

        profile.journey_settings.is_paused = true;
        assert_eq!(toggle_completion(&mut profile, "m1"), ToggleOutcome::Paused);
        assert!(profile.completed_activity_ids.is_empty());
    }
}
