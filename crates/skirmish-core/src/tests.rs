#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use crate::ballistics::*;
    use crate::commands::{CommandBatch, Drive, FireOrder};
    use crate::enums::Strategy;
    use crate::events::{ProjectileId, SensorEvent, Sighting};
    use crate::types::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_bearing_convention_north_is_zero_clockwise() {
        let origin = Position::new(100.0, 100.0);
        assert!(origin.bearing_to(&Position::new(100.0, 200.0)).abs() < EPS);
        assert!((origin.bearing_to(&Position::new(200.0, 100.0)) - FRAC_PI_2).abs() < EPS);
        assert!((origin.bearing_to(&Position::new(100.0, 0.0)) - PI).abs() < EPS);
        assert!((origin.bearing_to(&Position::new(0.0, 100.0)) - 3.0 * FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn test_project_inverts_bearing_and_distance() {
        let origin = Position::new(400.0, 300.0);
        let target = origin.project(250.0, 1.1);
        assert!((origin.distance_to(&target) - 250.0).abs() < 1e-6);
        assert!((origin.bearing_to(&target) - 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_distance_sq_matches_distance() {
        let a = Position::new(3.0, 4.0);
        let b = Position::default();
        assert!((a.distance_sq_to(&b) - 25.0).abs() < EPS);
        assert!((a.distance_to(&b) - 5.0).abs() < EPS);
    }

    #[test]
    fn test_normal_relative_angle_range() {
        assert!((normal_relative_angle(3.0 * PI) - PI).abs() < EPS);
        assert!((normal_relative_angle(-3.0 * PI / 2.0) - FRAC_PI_2).abs() < EPS);
        assert!((normal_relative_angle(0.25) - 0.25).abs() < EPS);
        for i in -20..20 {
            let a = normal_relative_angle(i as f64 * 0.7);
            assert!(a > -PI - EPS && a <= PI + EPS, "{a} out of range");
        }
    }

    #[test]
    fn test_normal_absolute_angle_range() {
        assert!((normal_absolute_angle(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < EPS);
        assert!(normal_absolute_angle(2.0 * PI).abs() < EPS);
    }

    #[test]
    fn test_interior_bounds_are_strict() {
        let arena = ArenaSize::new(800.0, 600.0);
        let interior = arena.interior(18.0);
        assert!(interior.contains(&Position::new(400.0, 300.0)));
        assert!(!interior.contains(&Position::new(18.0, 300.0)));
        assert!(!interior.contains(&Position::new(400.0, 590.0)));
        let clamped = interior.clamp(&Position::new(-50.0, 700.0));
        assert_eq!(clamped, Position::new(18.0, 582.0));
    }

    #[test]
    fn test_strategy_priority_order() {
        assert_eq!(Strategy::ALL[0], Strategy::HeadOn);
        assert_eq!(Strategy::ALL[1], Strategy::LeadPrediction);
        assert!(Strategy::HeadOn < Strategy::LeadPrediction);
        assert_eq!(Strategy::default(), Strategy::HeadOn);
    }

    #[test]
    fn test_ballistics_formulas() {
        assert!((projectile_speed(3.0) - 11.0).abs() < EPS);
        assert!((projectile_speed(0.1) - 19.7).abs() < EPS);
        assert!((projectile_damage(1.0) - 4.0).abs() < EPS);
        assert!((projectile_damage(3.0) - 16.0).abs() < EPS);
        assert!((hit_energy_bonus(2.0) - 6.0).abs() < EPS);
        assert!((gun_heat_for(3.0) - 1.6).abs() < EPS);
        assert!((max_body_turn(8.0) - 4.0_f64.to_radians()).abs() < EPS);
        assert_eq!(wall_damage(1.5), 0.0);
        assert!((wall_damage(-8.0) - 3.0).abs() < EPS);
    }

    /// Events are a tagged union; the tag survives a JSON round trip.
    #[test]
    fn test_sensor_event_serde() {
        let events = vec![
            SensorEvent::OpponentSighted(Sighting {
                identity: "sample.Crazy".into(),
                bearing: 0.3,
                distance: 240.0,
                heading: 1.0,
                velocity: -8.0,
                energy: 87.5,
            }),
            SensorEvent::OpponentDestroyed {
                identity: "sample.Crazy".into(),
            },
            SensorEvent::ProjectileHit {
                projectile: ProjectileId(4),
                victim: "sample.Fire".into(),
            },
            SensorEvent::ProjectileMissed {
                projectile: ProjectileId(5),
            },
            SensorEvent::ProjectileCollided {
                projectile: ProjectileId(6),
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            assert!(json.contains("\"type\""));
            let back: SensorEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_default_command_batch_is_idle() {
        let batch = CommandBatch::default();
        assert!(batch.fire.is_none());
        assert_eq!(batch.drive, Drive::default());
        let firing = CommandBatch {
            fire: Some(FireOrder {
                projectile: ProjectileId(1),
                power: 2.0,
            }),
            ..Default::default()
        };
        assert_ne!(batch, firing);
    }
}
