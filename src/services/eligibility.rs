// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Which catalog activities a profile gets to see.
//!
//! Three hard exclusions, applied in order:
//! 1. Stage: postpartum sees every "Month N" phase; other stages see only
//!    their own phase token. The lock frontier is not applied here.
//! 2. Delivery type: a restricted activity is hidden from a postpartum
//!    profile with a different delivery type.
//! 3. Pace: gentle keeps intensity <= 5, plus all emotional stabilization.

use crate::models::{Category, MaternityStage, Pace, RecoveryActivity, UserProfile};
use crate::services::ActivityCatalog;

/// Highest intensity shown at gentle pace.
pub const GENTLE_MAX_INTENSITY: u8 = 5;

/// Visible activities for a profile, in catalog order.
pub fn visible_activities<'a>(
    profile: &UserProfile,
    catalog: &'a ActivityCatalog,
) -> Vec<&'a RecoveryActivity> {
    catalog
        .activities()
        .iter()
        .filter(|a| matches_stage(profile.maternity_stage, a))
        .filter(|a| matches_delivery(profile, a))
        .filter(|a| matches_pace(profile.journey_settings.pace, a))
        .collect()
}

fn matches_stage(stage: MaternityStage, activity: &RecoveryActivity) -> bool {
    match stage.phase_token() {
        Some(token) => activity.phase == token,
        None => activity.phase.is_postpartum_month(),
    }
}

fn matches_delivery(profile: &UserProfile, activity: &RecoveryActivity) -> bool {
    match activity.type_specific {
        None => true,
        Some(_) if profile.maternity_stage != MaternityStage::Postpartum => true,
        Some(restriction) => restriction == profile.delivery_type,
    }
}

fn matches_pace(pace: Pace, activity: &RecoveryActivity) -> bool {
    match pace {
        Pace::Moderate => true,
        Pace::Gentle => {
            activity.intensity_scale <= GENTLE_MAX_INTENSITY
                || activity.category == Category::EmotionalStabilization
        }
    }
}
