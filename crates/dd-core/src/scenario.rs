//! Scenario generation: what happened, when, and where the group is.

use crate::config::Settings;
use crate::error::DrillResult;
use crate::sampler::Sampler;
use crate::tables::{MAX_HOUSE_NUMBER, STREET_NAMES, STREET_SUFFIXES};

/// Bounds for how long ago the disaster occurred, in minutes.
pub const MINUTES_AGO_RANGE: (i64, i64) = (5, 45);

/// Decimal places of [`Scenario::subject_distance`].
pub const DISTANCE_DECIMALS: u32 = 2;

/// The disaster premise of a drill.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    /// Disaster type, e.g. "earthquake".
    pub kind: String,
    /// 24-hour clock time the disaster occurred, zero-padded ("0745").
    pub occurred_time: String,
    /// Minutes elapsed since the disaster.
    pub occurred_minutes_ago: u32,
    /// Street address where the group is located.
    pub subject_location: String,
    /// Miles between the group and the disaster site, two decimal places.
    pub subject_distance: f64,
    /// Whether emergency services have already been called.
    pub emergency_called: bool,
}

/// Generate a scenario from the configured disaster types and distance.
pub fn generate_scenario<S: Sampler>(settings: &Settings, sampler: &mut S) -> DrillResult<Scenario> {
    let kind = sampler.pick_one(&settings.scenario.types)?.clone();
    let occurred_time = clock_time(sampler)?;
    let (min_ago, max_ago) = MINUTES_AGO_RANGE;
    let occurred_minutes_ago = sampler.uniform_int(min_ago, max_ago)? as u32;
    let subject_location = street_address(sampler)?;
    let distance = settings.scenario.distance;
    let subject_distance = sampler.uniform_float(distance.min, distance.max, DISTANCE_DECIMALS)?;
    let emergency_called = sampler.weighted_bool(50.0);

    tracing::debug!(%kind, %occurred_time, subject_distance, "generated scenario");

    Ok(Scenario {
        kind,
        occurred_time,
        occurred_minutes_ago,
        subject_location,
        subject_distance,
        emergency_called,
    })
}

/// A zero-padded `HHMM` time with independently drawn hour and minute.
fn clock_time<S: Sampler>(sampler: &mut S) -> DrillResult<String> {
    let hour = sampler.uniform_int(0, 23)?;
    let minute = sampler.uniform_int(0, 59)?;
    Ok(format!("{hour:02}{minute:02}"))
}

/// A short-form street address such as "4821 Maple St".
fn street_address<S: Sampler>(sampler: &mut S) -> DrillResult<String> {
    let number = sampler.uniform_int(1, MAX_HOUSE_NUMBER)?;
    let street = sampler.pick_one(STREET_NAMES)?;
    let suffix = sampler.pick_one(STREET_SUFFIXES)?;
    Ok(format!("{number} {street} {suffix}"))
}
