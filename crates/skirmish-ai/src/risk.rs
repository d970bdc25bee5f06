//! Risk field: a scalar repulsion score over candidate standing points.
//!
//! Every known opponent pushes on a candidate point with an inverse-square
//! force, weighted by how dangerous it is relative to us (energy ratio,
//! capped) and by how broadside the candidate leaves us to it. A further
//! inverse-square term around our own position discourages tiny moves.
//! Lower scores are safer.

use glam::DVec2;
use log::trace;
use rand::Rng;

use skirmish_core::constants::*;
use skirmish_core::types::{Bounds, Position};

/// A known opponent as the risk field sees it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threat {
    pub position: Position,
    pub energy: f64,
}

/// Inputs shared by every evaluation during one search.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskField {
    /// Our current position; the self-repulsion term is centred here.
    pub reference: Position,
    pub own_energy: f64,
    pub threats: Vec<Threat>,
}

impl RiskField {
    pub fn new(reference: Position, own_energy: f64, threats: Vec<Threat>) -> Self {
        Self {
            reference,
            own_energy,
            threats,
        }
    }

    /// Score a candidate point. Infinite at the reference or on top of a threat.
    pub fn score(&self, p: &Position) -> f64 {
        let point = p.as_vec();
        let reference = self.reference.as_vec();
        let mut risk = 1.0 / point.distance_squared(reference);

        let to_self = bearing(point, reference);
        for threat in &self.threats {
            let enemy = threat.position.as_vec();
            let energy_weight = (threat.energy / self.own_energy).min(MAX_THREAT_ENERGY_RATIO);
            let exposure = 1.0 + (to_self - bearing(point, enemy)).cos().abs();
            risk += energy_weight * exposure / point.distance_squared(enemy);
        }
        risk
    }
}

/// Absolute bearing from `from` to `to` (0 = North, clockwise).
fn bearing(from: DVec2, to: DVec2) -> f64 {
    let d = to - from;
    d.x.atan2(d.y)
}

/// Parameters of a destination search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchParams {
    pub samples: usize,
    pub distance_scale: f64,
    pub distance_jitter: f64,
    /// Half-width of the cone of candidate angles around "directly away from the anchor".
    pub angle_spread: f64,
    /// Candidates closer than this to a wall are rejected.
    pub wall_margin: f64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            samples: RISK_SAMPLE_COUNT,
            distance_scale: CANDIDATE_DISTANCE_SCALE,
            distance_jitter: CANDIDATE_DISTANCE_JITTER,
            angle_spread: CANDIDATE_ANGLE_SPREAD,
            wall_margin: CANDIDATE_WALL_MARGIN,
        }
    }
}

/// Sample candidate points around `origin`, roughly away from `anchor`, and
/// return the best one if it scores strictly lower than `current`.
///
/// `None` means `current` stays: either nothing inside `interior` was
/// sampled, or nothing beat it.
pub fn search_destination<R: Rng + ?Sized>(
    rng: &mut R,
    field: &RiskField,
    origin: Position,
    anchor: Position,
    current: Position,
    interior: &Bounds,
    params: &SearchParams,
) -> Option<Position> {
    let anchor_distance = origin.distance_to(&anchor);
    let away = anchor.bearing_to(&origin);

    let mut best: Option<Position> = None;
    let mut best_score = field.score(&current);

    for _ in 0..params.samples {
        let distance = (anchor_distance * params.distance_scale)
            .min(MIN_MOVEMENT_DISTANCE + params.distance_jitter * rng.gen::<f64>());
        let angle = away + params.angle_spread * (2.0 * rng.gen::<f64>() - 1.0);
        let candidate = origin.project(distance, angle);

        if !interior.contains(&candidate) {
            continue;
        }
        let score = field.score(&candidate);
        if score < best_score {
            best_score = score;
            best = Some(candidate);
        }
    }

    trace!(
        "destination search from ({:.0},{:.0}): best score {best_score:.3e}, replaced: {}",
        origin.x,
        origin.y,
        best.is_some()
    );
    best
}
