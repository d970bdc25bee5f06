//! Policy thresholds and host physics parameters.

use std::f64::consts::PI;

// --- Arena ---

/// Default arena width (pixels).
pub const DEFAULT_ARENA_WIDTH: f64 = 800.0;

/// Default arena height (pixels).
pub const DEFAULT_ARENA_HEIGHT: f64 = 600.0;

/// Half the side of a bot's square hitbox; also the interior margin.
pub const HALF_BOT_SIZE: f64 = 18.0;

/// Energy every bot starts a round with.
pub const START_ENERGY: f64 = 100.0;

// --- Movement planning ---

/// Distance to the destination below which a new destination is searched.
pub const MIN_MOVEMENT_DISTANCE: f64 = 15.0;

/// Number of candidate points sampled per destination search.
pub const RISK_SAMPLE_COUNT: usize = 200;

/// Candidate distance as a fraction of the distance to the anchor.
pub const CANDIDATE_DISTANCE_SCALE: f64 = 0.8;

/// Random extra distance added to `MIN_MOVEMENT_DISTANCE` for a candidate.
pub const CANDIDATE_DISTANCE_JITTER: f64 = 200.0;

/// Half-width of the cone of candidate angles around "directly away".
pub const CANDIDATE_ANGLE_SPREAD: f64 = PI * 0.6;

/// Clearance from the walls required of a candidate destination. Turning is
/// rate limited, so a destination hugging a wall ends in a wall hit.
pub const CANDIDATE_WALL_MARGIN: f64 = HALF_BOT_SIZE * 4.0;

/// Cap on the energy ratio that scales an opponent's repulsion.
pub const MAX_THREAT_ENERGY_RATIO: f64 = 2.0;

// --- Strategy selection ---

/// Shots a strategy gets before its accuracy is judged.
pub const STRATEGY_MIN_TRIALS: u32 = 10;

/// Accuracy (percent) at which a strategy is kept regardless of trials.
pub const STRATEGY_CONFIDENT_ACCURACY: f64 = 75.0;

// --- Target selection ---

/// An opponent with fewer shots than this on every strategy is still being explored.
pub const UNDISCOVERED_SHOT_COUNT: u32 = 10;

/// Opponents closer than this are engaged regardless of history.
pub const POINT_BLANK_RANGE: f64 = 120.0;

// --- Gunnery ---

/// Numerator of the range term in the fire power formula.
pub const FIRE_POWER_RANGE_CONSTANT: f64 = 1300.0;

/// Own energy is divided by this for the sustainability term.
pub const OWN_ENERGY_DIVISOR: f64 = 6.0;

/// Target energy is divided by this for the overkill term.
pub const TARGET_ENERGY_DIVISOR: f64 = 3.0;

/// Smallest legal projectile power.
pub const MIN_FIRE_POWER: f64 = 0.1;

/// Largest legal projectile power.
pub const MAX_FIRE_POWER: f64 = 3.0;

/// Energy that must be exceeded before the gun may fire.
pub const MIN_ENERGY_TO_FIRE: f64 = 1.0;

/// Largest gun error at which we still fire (radians, 0.5 degrees).
pub const GUN_TOLERANCE: f64 = 0.5 * PI / 180.0;

/// Projectile speed is `PROJECTILE_BASE_SPEED - PROJECTILE_POWER_FACTOR * power`.
pub const PROJECTILE_BASE_SPEED: f64 = 20.0;

/// See `PROJECTILE_BASE_SPEED`.
pub const PROJECTILE_POWER_FACTOR: f64 = 3.0;

// --- Radar ---

/// A target sighting older than this many ticks is stale; the radar resumes spinning.
pub const STALE_SCAN_TICKS: u64 = 4;

/// Extra sweep past the target's bearing so the beam crosses it every tick.
pub const RADAR_OVERSHOOT: f64 = PI / 8.0;

/// Radar turn commanded while searching (one full rotation, counter-clockwise).
pub const RADAR_SEARCH_TURN: f64 = -2.0 * PI;

/// Maximum radar scan distance (pixels).
pub const RADAR_SCAN_RANGE: f64 = 1200.0;

// --- Host physics ---

/// Maximum bot speed (pixels/tick).
pub const MAX_VELOCITY: f64 = 8.0;

/// Acceleration (pixels/tick²).
pub const ACCELERATION: f64 = 1.0;

/// Deceleration (pixels/tick²).
pub const DECELERATION: f64 = 2.0;

/// Body turn rate at standstill (degrees/tick).
pub const MAX_BODY_TURN_DEG: f64 = 10.0;

/// Body turn rate lost per unit of speed (degrees/tick).
pub const BODY_TURN_SPEED_PENALTY_DEG: f64 = 0.75;

/// Gun turn rate (degrees/tick).
pub const MAX_GUN_TURN_DEG: f64 = 20.0;

/// Radar turn rate (degrees/tick).
pub const MAX_RADAR_TURN_DEG: f64 = 45.0;

/// Gun heat dissipated per tick.
pub const GUN_COOLING_RATE: f64 = 0.1;

/// Gun heat at the start of a round.
pub const INITIAL_GUN_HEAT: f64 = 3.0;

/// Distance below which two projectiles destroy each other.
pub const PROJECTILE_COLLISION_RADIUS: f64 = 6.0;
