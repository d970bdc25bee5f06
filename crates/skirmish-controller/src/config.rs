//! Controller configuration.

use serde::{Deserialize, Serialize};

use skirmish_ai::risk::SearchParams;
use skirmish_core::constants::*;

/// Tunables of one controller. Every field has a default, so a partial JSON
/// document is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Seed of the candidate sampling RNG. Same seed = same command stream.
    pub seed: u64,
    pub candidate_samples: usize,
    pub distance_scale: f64,
    pub distance_jitter: f64,
    pub angle_spread: f64,
    pub min_movement_distance: f64,
    /// Required clearance between a candidate destination and the walls.
    pub wall_margin: f64,
    /// Only engage once every living opponent has been sighted.
    pub require_full_picture: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            candidate_samples: RISK_SAMPLE_COUNT,
            distance_scale: CANDIDATE_DISTANCE_SCALE,
            distance_jitter: CANDIDATE_DISTANCE_JITTER,
            angle_spread: CANDIDATE_ANGLE_SPREAD,
            min_movement_distance: MIN_MOVEMENT_DISTANCE,
            wall_margin: CANDIDATE_WALL_MARGIN,
            require_full_picture: true,
        }
    }
}

impl ControllerConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn search_params(&self) -> SearchParams {
        SearchParams {
            samples: self.candidate_samples,
            distance_scale: self.distance_scale,
            distance_jitter: self.distance_jitter,
            angle_spread: self.angle_spread,
            wall_margin: self.wall_margin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ControllerConfig::from_json(r#"{"seed": 7, "candidate_samples": 50}"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.candidate_samples, 50);
        assert_eq!(config.min_movement_distance, MIN_MOVEMENT_DISTANCE);
        assert!(config.require_full_picture);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(ControllerConfig::from_json("{}").unwrap(), ControllerConfig::default());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(ControllerConfig::from_json(r#"{"seed": "seven"}"#).is_err());
        assert!(ControllerConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_search_params_follow_config() {
        let config = ControllerConfig {
            candidate_samples: 10,
            angle_spread: 1.0,
            ..Default::default()
        };
        let params = config.search_params();
        assert_eq!(params.samples, 10);
        assert_eq!(params.angle_spread, 1.0);
        assert_eq!(params.distance_scale, CANDIDATE_DISTANCE_SCALE);
        assert_eq!(params.wall_margin, CANDIDATE_WALL_MARGIN);
    }
}
