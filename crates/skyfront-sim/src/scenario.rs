//! Scenario data — the Battle of Britain opening, July 1940.
//!
//! Hardcoded catalog and roster for the default campaign. Stats are
//! period-plausible tuning values, not historical measurements.

use skyfront_core::catalog::{AircraftTypeDef, LocationTypeDef, StaticCatalog};
use skyfront_core::components::ResourceStocks;
use skyfront_core::enums::{AircraftCategory, LocationCategory, Side};

use crate::setup::{CampaignSetup, LocationSpec, SquadronSpec};

/// Build the static aircraft/location type catalog.
pub fn build_catalog() -> StaticCatalog {
    let aircraft = vec![
        AircraftTypeDef {
            category: AircraftCategory::Fighter,
            name: "Spitfire Mk.I".to_string(),
            max_speed: 582.0,
            cruise_speed: 470.0,
            max_altitude: 10_500.0,
            range: 800.0,
            fuel_consumption: 60.0,
            attack_power: 4,
            defense_power: 5,
            bomb_capacity: 0.0,
            accuracy: 0.6,
            crew_required: 1,
            maintenance_cost: 12,
            production_cost: 45,
        },
        AircraftTypeDef {
            category: AircraftCategory::Fighter,
            name: "Hurricane Mk.I".to_string(),
            max_speed: 547.0,
            cruise_speed: 435.0,
            max_altitude: 10_100.0,
            range: 965.0,
            fuel_consumption: 55.0,
            attack_power: 4,
            defense_power: 4,
            bomb_capacity: 0.0,
            accuracy: 0.55,
            crew_required: 1,
            maintenance_cost: 10,
            production_cost: 38,
        },
        AircraftTypeDef {
            category: AircraftCategory::Fighter,
            name: "Bf 109 E".to_string(),
            max_speed: 570.0,
            cruise_speed: 455.0,
            max_altitude: 10_400.0,
            range: 660.0,
            fuel_consumption: 58.0,
            attack_power: 5,
            defense_power: 4,
            bomb_capacity: 0.25,
            accuracy: 0.6,
            crew_required: 1,
            maintenance_cost: 11,
            production_cost: 42,
        },
        AircraftTypeDef {
            category: AircraftCategory::Bomber,
            name: "He 111 H".to_string(),
            max_speed: 440.0,
            cruise_speed: 370.0,
            max_altitude: 7_800.0,
            range: 2_300.0,
            fuel_consumption: 160.0,
            attack_power: 5,
            defense_power: 2,
            bomb_capacity: 2.0,
            accuracy: 0.5,
            crew_required: 5,
            maintenance_cost: 25,
            production_cost: 90,
        },
        AircraftTypeDef {
            category: AircraftCategory::Bomber,
            name: "Ju 87 B".to_string(),
            max_speed: 383.0,
            cruise_speed: 310.0,
            max_altitude: 8_000.0,
            range: 600.0,
            fuel_consumption: 90.0,
            attack_power: 6,
            defense_power: 1,
            bomb_capacity: 0.5,
            accuracy: 0.8,
            crew_required: 2,
            maintenance_cost: 15,
            production_cost: 55,
        },
    ];

    let locations = vec![
        LocationTypeDef {
            category: LocationCategory::Airfield,
            display_name: "Airfield".to_string(),
            can_launch_aircraft: true,
            can_repair_aircraft: true,
            defense_value: 3,
            strategic_value: 6,
        },
        LocationTypeDef {
            category: LocationCategory::City,
            display_name: "City".to_string(),
            can_launch_aircraft: false,
            can_repair_aircraft: false,
            defense_value: 5,
            strategic_value: 10,
        },
        LocationTypeDef {
            category: LocationCategory::Factory,
            display_name: "Factory".to_string(),
            can_launch_aircraft: false,
            can_repair_aircraft: false,
            defense_value: 2,
            strategic_value: 8,
        },
        LocationTypeDef {
            category: LocationCategory::Port,
            display_name: "Port".to_string(),
            can_launch_aircraft: false,
            can_repair_aircraft: false,
            defense_value: 4,
            strategic_value: 7,
        },
        LocationTypeDef {
            category: LocationCategory::Radar,
            display_name: "Radar Station".to_string(),
            can_launch_aircraft: false,
            can_repair_aircraft: false,
            defense_value: 1,
            strategic_value: 9,
        },
    ];

    StaticCatalog::new(aircraft, locations)
}

/// Default campaign roster: southern England vs the Pas-de-Calais.
pub fn battle_of_britain() -> CampaignSetup {
    let stocks = |fuel, ammunition, supplies| ResourceStocks {
        fuel,
        ammunition,
        supplies,
    };

    CampaignSetup {
        locations: vec![
            LocationSpec {
                name: "London".to_string(),
                category: LocationCategory::City,
                country_code: "UK".to_string(),
                lat_deg: 51.5074,
                lon_deg: -0.1278,
                elevation_m: 0.0,
                controlled_by: Some(Side::Allies),
                max_health: 100,
                stocks: stocks(500, 300, 800),
            },
            LocationSpec {
                name: "RAF Northolt".to_string(),
                category: LocationCategory::Airfield,
                country_code: "UK".to_string(),
                lat_deg: 51.5530,
                lon_deg: -0.4184,
                elevation_m: 38.0,
                controlled_by: Some(Side::Allies),
                max_health: 100,
                stocks: stocks(1000, 600, 400),
            },
            LocationSpec {
                name: "RAF Biggin Hill".to_string(),
                category: LocationCategory::Airfield,
                country_code: "UK".to_string(),
                lat_deg: 51.3307,
                lon_deg: 0.0325,
                elevation_m: 180.0,
                controlled_by: Some(Side::Allies),
                max_health: 100,
                stocks: stocks(900, 550, 350),
            },
            LocationSpec {
                name: "Portsmouth".to_string(),
                category: LocationCategory::Port,
                country_code: "UK".to_string(),
                lat_deg: 50.8198,
                lon_deg: -1.0880,
                elevation_m: 0.0,
                controlled_by: Some(Side::Allies),
                max_health: 100,
                stocks: stocks(700, 200, 600),
            },
            LocationSpec {
                name: "Ventnor Radar".to_string(),
                category: LocationCategory::Radar,
                country_code: "UK".to_string(),
                lat_deg: 50.5938,
                lon_deg: -1.2067,
                elevation_m: 230.0,
                controlled_by: Some(Side::Allies),
                max_health: 60,
                stocks: stocks(50, 20, 100),
            },
            LocationSpec {
                name: "Calais-Marck Airfield".to_string(),
                category: LocationCategory::Airfield,
                country_code: "FR".to_string(),
                lat_deg: 50.9620,
                lon_deg: 1.9540,
                elevation_m: 3.0,
                controlled_by: Some(Side::Axis),
                max_health: 100,
                stocks: stocks(1200, 700, 500),
            },
            LocationSpec {
                name: "Luftwaffe Airfield Cologne".to_string(),
                category: LocationCategory::Airfield,
                country_code: "DE".to_string(),
                lat_deg: 50.8796,
                lon_deg: 6.9036,
                elevation_m: 92.0,
                controlled_by: Some(Side::Axis),
                max_health: 100,
                stocks: stocks(1500, 900, 700),
            },
        ],
        squadrons: vec![
            SquadronSpec {
                name: "No. 303 Squadron".to_string(),
                aircraft_type: "Spitfire Mk.I".to_string(),
                home_base: "RAF Northolt".to_string(),
                side: Side::Allies,
                aircraft_count: 12,
                bomb_load: 0.0,
                ammunition: 120,
                readiness: 100.0,
                experience: 10,
                altitude_m: 6_000.0,
            },
            SquadronSpec {
                name: "No. 32 Squadron".to_string(),
                aircraft_type: "Hurricane Mk.I".to_string(),
                home_base: "RAF Biggin Hill".to_string(),
                side: Side::Allies,
                aircraft_count: 12,
                bomb_load: 0.0,
                ammunition: 120,
                readiness: 95.0,
                experience: 5,
                altitude_m: 5_500.0,
            },
            SquadronSpec {
                name: "JG 26".to_string(),
                aircraft_type: "Bf 109 E".to_string(),
                home_base: "Calais-Marck Airfield".to_string(),
                side: Side::Axis,
                aircraft_count: 12,
                bomb_load: 1.0,
                ammunition: 110,
                readiness: 100.0,
                experience: 20,
                altitude_m: 6_500.0,
            },
            SquadronSpec {
                name: "KG 53".to_string(),
                aircraft_type: "He 111 H".to_string(),
                home_base: "Luftwaffe Airfield Cologne".to_string(),
                side: Side::Axis,
                aircraft_count: 9,
                bomb_load: 18.0,
                ammunition: 80,
                readiness: 90.0,
                experience: 15,
                altitude_m: 4_500.0,
            },
        ],
    }
}
