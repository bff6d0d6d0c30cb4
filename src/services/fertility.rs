// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Conception-journey date estimates.

use chrono::{Days, NaiveDate};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Luteal phase length assumed by the estimate.
const LUTEAL_PHASE_DAYS: u64 = 14;
/// Days after ovulation before a home test is meaningful.
const TEST_DELAY_DAYS: u64 = 14;

pub const MIN_CYCLE_DAYS: u32 = 21;
pub const MAX_CYCLE_DAYS: u32 = 45;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FertilityEstimate {
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub ovulation_date: NaiveDate,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub pregnancy_test_date: NaiveDate,
}

/// Estimate ovulation and the earliest useful test date from the last
/// menstrual period and the usual cycle length.
pub fn estimate(last_period: NaiveDate, cycle_days: u32) -> Result<FertilityEstimate, FertilityError> {
    if !(MIN_CYCLE_DAYS..=MAX_CYCLE_DAYS).contains(&cycle_days) {
        return Err(FertilityError::CycleLength(cycle_days));
    }

    let to_ovulation = u64::from(cycle_days) - LUTEAL_PHASE_DAYS;
    let ovulation_date = last_period
        .checked_add_days(Days::new(to_ovulation))
        .ok_or(FertilityError::DateOutOfRange)?;
    let pregnancy_test_date = ovulation_date
        .checked_add_days(Days::new(TEST_DELAY_DAYS))
        .ok_or(FertilityError::DateOutOfRange)?;

    Ok(FertilityEstimate {
        ovulation_date,
        pregnancy_test_date,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum FertilityError {
    #[error("Cycle length {0} outside {MIN_CYCLE_DAYS}-{MAX_CYCLE_DAYS} days")]
    CycleLength(u32),

    #[error("Estimated date out of range")]
    DateOutOfRange,
}
