#[cfg(test)]
mod tests {
    use glam::DVec3;

    use crate::catalog::{AircraftTypeId, LocationTypeId};
    use crate::commands::CampaignCommand;
    use crate::components::*;
    use crate::enums::*;
    use crate::events::{Alert, CampaignEvent};
    use crate::state::TurnStatus;
    use crate::types::{angular_separation, GeoPos, Orientation, SimTime};

    fn test_location() -> Location {
        Location {
            id: LocationId(0),
            name: "London".to_string(),
            type_id: LocationTypeId(0),
            country_code: "UK".to_string(),
            geo: GeoPos::new(51.5074, -0.1278, 0.0),
            health: 100,
            max_health: 100,
            operational: true,
            occupied: false,
            controlled_by: Some(Side::Allies),
            stocks: ResourceStocks::default(),
        }
    }

    fn test_squadron() -> Squadron {
        Squadron {
            id: SquadronId(0),
            name: "No. 303 Squadron".to_string(),
            type_id: AircraftTypeId(0),
            side: Side::Allies,
            aircraft_count: 12,
            fuel: 9600.0,
            max_fuel: 9600.0,
            ammunition: 100,
            bomb_load: 0.0,
            readiness: 100.0,
            experience: 0,
            home_base: LocationId(0),
            target: None,
            altitude: 5000.0,
            on_mission: false,
            waypoints: Vec::new(),
            waypoint_index: 0,
            mission_speed: 0.0,
        }
    }

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_enum_serde() {
        for side in [Side::Allies, Side::Axis] {
            let json = serde_json::to_string(&side).unwrap();
            let back: Side = serde_json::from_str(&json).unwrap();
            assert_eq!(side, back);
        }
        for phase in [
            GamePhase::Planning,
            GamePhase::Movement,
            GamePhase::Combat,
            GamePhase::Resolution,
        ] {
            let json = serde_json::to_string(&phase).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(phase, back);
        }
        for weather in [
            WeatherCondition::Clear,
            WeatherCondition::Cloudy,
            WeatherCondition::Rainy,
            WeatherCondition::Stormy,
            WeatherCondition::Foggy,
        ] {
            let json = serde_json::to_string(&weather).unwrap();
            let back: WeatherCondition = serde_json::from_str(&json).unwrap();
            assert_eq!(weather, back);
        }
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Allies.opponent(), Side::Axis);
        assert_eq!(Side::Axis.opponent(), Side::Allies);
    }

    /// Verify CampaignCommand round-trips through serde (tagged union).
    #[test]
    fn test_command_serde() {
        let commands = vec![
            CampaignCommand::AdvancePhase,
            CampaignCommand::SendMission {
                squadron: SquadronId(3),
                target: LocationId(7),
            },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: CampaignCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify CampaignEvent round-trips through serde.
    #[test]
    fn test_event_serde() {
        let events = vec![
            CampaignEvent::PhaseChanged {
                phase: GamePhase::Movement,
                side: Side::Axis,
            },
            CampaignEvent::AttackResolved {
                squadron: SquadronId(1),
                target: LocationId(2),
                damage: 40,
            },
            CampaignEvent::MissionAborted {
                squadron: SquadronId(5),
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: CampaignEvent = serde_json::from_str(&json).unwrap();
        }
    }

    #[test]
    fn test_alert_serde() {
        let alert = Alert {
            level: AlertLevel::Warning,
            message: "No. 303 Squadron out of fuel".to_string(),
            turn: 4,
        };
        let json = serde_json::to_string(&alert).unwrap();
        let back: Alert = serde_json::from_str(&json).unwrap();
        assert_eq!(alert.message, back.message);
        assert_eq!(alert.turn, back.turn);
    }

    #[test]
    fn test_turn_status_summary() {
        let status = TurnStatus {
            turn: 3,
            date: chrono::NaiveDate::from_ymd_opt(1940, 7, 11).unwrap(),
            phase: GamePhase::Combat,
            side: Side::Axis,
            weather: WeatherCondition::Cloudy,
        };
        let text = status.summary();
        assert!(text.contains("Turn 3"));
        assert!(text.contains("Combat"));
        assert!(text.contains("Cloudy"));
    }

    // ---- Location health invariants ----

    #[test]
    fn test_damage_clamps_at_zero_and_clears_operational() {
        let mut loc = test_location();
        loc.take_damage(40);
        assert_eq!(loc.health, 60);
        assert!(loc.operational);

        loc.take_damage(1000);
        assert_eq!(loc.health, 0);
        assert!(!loc.operational);

        // Damaging a destroyed location stays at zero.
        loc.take_damage(50);
        assert_eq!(loc.health, 0);
        assert!(!loc.operational);
    }

    #[test]
    fn test_repair_clamps_at_max_and_restores_operational() {
        let mut loc = test_location();
        loc.take_damage(100);
        assert!(!loc.operational);

        loc.repair(5);
        assert_eq!(loc.health, 5);
        assert!(loc.operational);

        loc.repair(1000);
        assert_eq!(loc.health, loc.max_health);

        // Repairing a full location is a no-op beyond the clamp.
        loc.repair(5);
        assert_eq!(loc.health, loc.max_health);
        assert!(loc.operational);
    }

    #[test]
    fn test_health_invariant_under_mixed_sequences() {
        let mut loc = test_location();
        let ops: [i32; 9] = [30, -10, 250, -40, 7, -3, 100, -100, 55];
        for op in ops {
            if op >= 0 {
                loc.take_damage(op);
            } else {
                loc.repair(-op);
            }
            assert!(loc.health >= 0 && loc.health <= loc.max_health);
            assert_eq!(loc.operational, loc.health > 0);
        }
    }

    #[test]
    fn test_negative_amounts_are_ignored() {
        let mut loc = test_location();
        loc.take_damage(-50);
        assert_eq!(loc.health, 100);
        loc.take_damage(30);
        loc.repair(-50);
        assert_eq!(loc.health, 70);
    }

    // ---- Squadron ----

    #[test]
    fn test_can_fly_requires_fuel() {
        let mut sq = test_squadron();
        assert!(sq.can_fly());

        // Zero fuel grounds the squadron regardless of everything else.
        sq.fuel = 0.0;
        sq.readiness = 100.0;
        sq.aircraft_count = 12;
        assert!(!sq.can_fly());
    }

    #[test]
    fn test_can_fly_requires_readiness_and_aircraft() {
        let mut sq = test_squadron();
        sq.readiness = 20.0; // threshold is strict
        assert!(!sq.can_fly());

        sq.readiness = 21.0;
        assert!(sq.can_fly());

        sq.aircraft_count = 0;
        assert!(!sq.can_fly());
    }

    #[test]
    fn test_gain_readiness_caps_at_100() {
        let mut sq = test_squadron();
        sq.readiness = 97.0;
        sq.gain_readiness(5.0);
        assert_eq!(sq.readiness, 100.0);
    }

    // ---- Geometry ----

    #[test]
    fn test_geo_to_cartesian_poles_and_equator() {
        let r = 6371.0;
        let north_pole = GeoPos::new(90.0, 0.0, 0.0).to_cartesian(r);
        assert!((north_pole.y - r).abs() < 1e-6);
        assert!(north_pole.x.abs() < 1e-6);

        let equator = GeoPos::new(0.0, 0.0, 0.0).to_cartesian(r);
        assert!((equator.x - r).abs() < 1e-6);
        assert!(equator.y.abs() < 1e-6);
    }

    #[test]
    fn test_geo_elevation_extends_radius() {
        let p = GeoPos::new(0.0, 0.0, 2000.0).to_cartesian(6371.0);
        assert!((p.length() - 6373.0).abs() < 1e-6);
    }

    #[test]
    fn test_angular_separation() {
        let a = DVec3::new(1.0, 0.0, 0.0);
        let b = DVec3::new(0.0, 1.0, 0.0);
        assert!((angular_separation(a, b) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(angular_separation(a, a), 0.0);
        assert_eq!(angular_separation(a, DVec3::ZERO), 0.0);
    }

    #[test]
    fn test_orientation_tangent_frame() {
        let pos = DVec3::new(6371.0, 0.0, 0.0);
        let toward = DVec3::new(6000.0, 2000.0, 0.0);
        let o = Orientation::at(pos, toward);
        // Up is radial; forward lies in the tangent plane.
        assert!((o.up - DVec3::X).length() < 1e-9);
        assert!(o.forward.dot(o.up).abs() < 1e-9);
        assert!(o.forward.y > 0.0);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..10 {
            time.advance();
        }
        assert_eq!(time.tick, 10);
        assert!((time.elapsed_hours - 1.0).abs() < 1e-12);
    }
}
