#[cfg(test)]
mod tests {
    use skirmish_core::enums::Strategy;
    use skirmish_core::events::Sighting;
    use skirmish_core::types::Position;

    use crate::stats::{StrategyRecord, StrategyStatistics};
    use crate::strategy::choose;
    use crate::targeting::select;
    use crate::tracker::EnemyTracker;

    fn stats_with(rows: &[(&str, Strategy, u32, u32)]) -> StrategyStatistics {
        let mut stats = StrategyStatistics::new();
        for (identity, strategy, fired, hit) in rows {
            stats.insert(identity, *strategy, StrategyRecord::new(*fired, *hit));
        }
        stats
    }

    /// Tracker with opponents due North of (400, 0) at the given distances.
    fn tracker_with(opponents: &[(&str, f64)]) -> EnemyTracker {
        let mut tracker = EnemyTracker::new();
        for (identity, distance) in opponents {
            tracker.observe(
                &Sighting {
                    identity: (*identity).into(),
                    bearing: 0.0,
                    distance: *distance,
                    heading: 0.0,
                    velocity: 0.0,
                    energy: 100.0,
                },
                1,
                Position::new(400.0, 0.0),
                0.0,
            );
        }
        tracker
    }

    // ---- Strategy selection ----

    #[test_log::test]
    fn test_cold_start_is_head_on() {
        assert_eq!(choose("anyone", &StrategyStatistics::new()), Strategy::HeadOn);

        let opened = {
            let mut s = StrategyStatistics::new();
            s.insert("a", Strategy::HeadOn, StrategyRecord::default());
            s.insert("a", Strategy::LeadPrediction, StrategyRecord::default());
            s
        };
        assert_eq!(choose("a", &opened), Strategy::HeadOn);
    }

    #[test_log::test]
    fn test_head_on_tried_fairly_then_lead_gets_its_trial() {
        let stats = stats_with(&[
            ("a", Strategy::HeadOn, 11, 2),
            ("a", Strategy::LeadPrediction, 9, 2),
        ]);
        assert_eq!(choose("a", &stats), Strategy::LeadPrediction);
    }

    #[test_log::test]
    fn test_more_accurate_lead_wins_after_both_trials() {
        let stats = stats_with(&[
            ("a", Strategy::HeadOn, 11, 2),
            ("a", Strategy::LeadPrediction, 15, 5),
        ]);
        assert_eq!(choose("a", &stats), Strategy::LeadPrediction);
    }

    #[test_log::test]
    fn test_head_on_still_on_trial() {
        let stats = stats_with(&[("a", Strategy::HeadOn, 9, 2)]);
        assert_eq!(choose("a", &stats), Strategy::HeadOn);
    }

    #[test_log::test]
    fn test_missing_lead_record_counts_as_untried() {
        let stats = stats_with(&[("a", Strategy::HeadOn, 11, 2)]);
        assert_eq!(choose("a", &stats), Strategy::LeadPrediction);
    }

    #[test]
    fn test_trial_strategy_never_skipped_for_a_worse_tried_one() {
        for fired in 0..10 {
            for hit in 0..=fired {
                let stats = stats_with(&[
                    ("a", Strategy::HeadOn, 20, 2),
                    ("a", Strategy::LeadPrediction, fired, hit),
                ]);
                assert_eq!(
                    choose("a", &stats),
                    Strategy::LeadPrediction,
                    "lead at {hit}/{fired} must still be on trial"
                );
            }
        }
    }

    #[test]
    fn test_statistics_are_per_opponent() {
        let stats = stats_with(&[
            ("a", Strategy::HeadOn, 30, 3),
            ("a", Strategy::LeadPrediction, 30, 15),
            ("b", Strategy::HeadOn, 30, 15),
            ("b", Strategy::LeadPrediction, 30, 3),
        ]);
        assert_eq!(choose("a", &stats), Strategy::LeadPrediction);
        assert_eq!(choose("b", &stats), Strategy::HeadOn);
    }

    // ---- Target selection ----

    #[test]
    fn test_no_opponents_no_target() {
        assert_eq!(select(&EnemyTracker::new(), &StrategyStatistics::new()), None);
    }

    #[test]
    fn test_nearer_of_two_unrecorded() {
        let tracker = tracker_with(&[("Near", 500.0), ("Far", 1000.0)]);
        assert_eq!(
            select(&tracker, &StrategyStatistics::new()).as_deref(),
            Some("Near")
        );
    }

    #[test]
    fn test_untracked_identity_never_selected() {
        let tracker = tracker_with(&[("Alive", 600.0)]);
        let stats = stats_with(&[
            ("Dead", Strategy::HeadOn, 40, 40),
            ("Alive", Strategy::HeadOn, 40, 1),
        ]);
        assert_eq!(select(&tracker, &stats).as_deref(), Some("Alive"));
    }

    #[test]
    fn test_point_blank_overrides_everything() {
        let tracker = tracker_with(&[("Easy", 300.0), ("Close", 100.0), ("Closer", 80.0)]);
        let stats = stats_with(&[
            ("Easy", Strategy::HeadOn, 40, 38),
            ("Close", Strategy::HeadOn, 40, 1),
            ("Closer", Strategy::HeadOn, 40, 1),
        ]);
        assert_eq!(select(&tracker, &stats).as_deref(), Some("Closer"));
    }

    #[test]
    fn test_undiscovered_before_known() {
        let tracker = tracker_with(&[("Known", 200.0), ("New", 700.0)]);
        let stats = stats_with(&[("Known", Strategy::HeadOn, 40, 30)]);
        assert_eq!(select(&tracker, &stats).as_deref(), Some("New"));
    }

    #[test]
    fn test_highest_accuracy_among_discovered() {
        let tracker = tracker_with(&[("Hard", 200.0), ("Soft", 700.0)]);
        let stats = stats_with(&[
            ("Hard", Strategy::HeadOn, 40, 4),
            ("Hard", Strategy::LeadPrediction, 40, 8),
            ("Soft", Strategy::HeadOn, 40, 4),
            ("Soft", Strategy::LeadPrediction, 40, 20),
        ]);
        assert_eq!(select(&tracker, &stats).as_deref(), Some("Soft"));
    }

    #[test]
    fn test_equal_accuracy_falls_back_to_distance_then_name() {
        let stats = stats_with(&[
            ("x", Strategy::HeadOn, 20, 5),
            ("y", Strategy::HeadOn, 20, 5),
        ]);
        let tracker = tracker_with(&[("x", 400.0), ("y", 300.0)]);
        assert_eq!(select(&tracker, &stats).as_deref(), Some("y"));

        let tracker = tracker_with(&[("y", 300.0), ("x", 300.0)]);
        assert_eq!(select(&tracker, &stats).as_deref(), Some("x"));
    }

    #[test]
    fn test_removed_opponent_drops_out() {
        let mut tracker = tracker_with(&[("a", 200.0), ("b", 400.0)]);
        let stats = StrategyStatistics::new();
        assert_eq!(select(&tracker, &stats).as_deref(), Some("a"));
        tracker.remove("a");
        assert_eq!(select(&tracker, &stats).as_deref(), Some("b"));
    }
}
