//! Aiming strategy selection: a rule-based explore/exploit policy.
//!
//! Strategies are walked in priority order. A strategy is kept while it has
//! not had a fair trial or while it is already performing well; once every
//! strategy has been tried fairly and none is convincing, the most accurate
//! one wins.

use log::debug;

use skirmish_core::constants::{STRATEGY_CONFIDENT_ACCURACY, STRATEGY_MIN_TRIALS};
use skirmish_core::enums::Strategy;

use crate::stats::{StrategyRecord, StrategyStatistics};

/// Pick the aiming strategy for an opponent.
pub fn choose(identity: &str, stats: &StrategyStatistics) -> Strategy {
    let Some(records) = stats.opponent(identity) else {
        return Strategy::HeadOn;
    };

    let record_of = |s: Strategy| records.get(&s).copied().unwrap_or_default();

    let chosen = Strategy::ALL
        .iter()
        .copied()
        .find(|s| needs_trial_or_trusted(&record_of(*s)))
        .unwrap_or_else(|| most_accurate(&record_of));

    debug!(
        "{identity}: head-on {:.1}% lead {:.1}% -> {chosen}",
        record_of(Strategy::HeadOn).accuracy(),
        record_of(Strategy::LeadPrediction).accuracy(),
    );

    chosen
}

/// Inspection entry point; identical to [`choose`].
pub fn select_strategy(identity: &str, stats: &StrategyStatistics) -> Strategy {
    choose(identity, stats)
}

/// Untried strategies fall under the trial clause.
fn needs_trial_or_trusted(record: &StrategyRecord) -> bool {
    record.fired < STRATEGY_MIN_TRIALS || record.accuracy() >= STRATEGY_CONFIDENT_ACCURACY
}

/// Highest accuracy; ties go to the earlier strategy in priority order.
fn most_accurate(record_of: &impl Fn(Strategy) -> StrategyRecord) -> Strategy {
    let mut best = Strategy::ALL[0];
    for s in Strategy::ALL.iter().copied().skip(1) {
        if record_of(s).accuracy() > record_of(best).accuracy() {
            best = s;
        }
    }
    best
}
