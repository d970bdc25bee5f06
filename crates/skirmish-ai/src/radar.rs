//! Radar steering: sweep until the picture is complete, then hold the target.

use skirmish_core::constants::{RADAR_OVERSHOOT, RADAR_SEARCH_TURN, STALE_SCAN_TICKS};
use skirmish_core::state::OwnState;
use skirmish_core::types::normal_relative_angle;

use crate::tracker::{EnemyTracker, OpponentSnapshot};

/// True when the tracker holds a snapshot for every opponent still alive.
pub fn knows_everyone(own: &OwnState, tracker: &EnemyTracker) -> bool {
    tracker.count() == own.others
}

/// The snapshot is recent enough to steer the radar by.
pub fn is_fresh(target: &OpponentSnapshot, tick: u64) -> bool {
    tick.saturating_sub(target.observed_at) < STALE_SCAN_TICKS
}

/// Relative radar turn for this tick (positive = clockwise).
///
/// With a fresh target and a complete picture the beam is swung past the
/// target by [`RADAR_OVERSHOOT`], so it crosses the target again next tick
/// whichever way the target moved. Otherwise the radar keeps spinning.
pub fn radar_turn(
    own: &OwnState,
    tracker: &EnemyTracker,
    target: Option<&OpponentSnapshot>,
    tick: u64,
) -> f64 {
    let Some(target) = target else {
        return RADAR_SEARCH_TURN;
    };
    if !knows_everyone(own, tracker) || !is_fresh(target, tick) {
        return RADAR_SEARCH_TURN;
    }

    let mut offset =
        normal_relative_angle(own.radar_heading - own.position.bearing_to(&target.position));
    if offset < 0.0 {
        offset -= RADAR_OVERSHOOT;
    } else {
        offset += RADAR_OVERSHOOT;
    }
    normal_relative_angle(-offset)
}
