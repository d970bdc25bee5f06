//! Enumeration types used throughout the controller.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Aiming model whose accuracy is tracked per opponent.
///
/// Variant order is the selection priority order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Strategy {
    /// Aim at the target's last observed position.
    #[default]
    HeadOn,
    /// Aim where the target will be if it keeps its heading and speed.
    LeadPrediction,
}

impl Strategy {
    /// Every strategy, in priority order.
    pub const ALL: [Strategy; 2] = [Strategy::HeadOn, Strategy::LeadPrediction];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::HeadOn => f.write_str("head-on"),
            Strategy::LeadPrediction => f.write_str("lead"),
        }
    }
}
