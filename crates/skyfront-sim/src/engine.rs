//! Campaign engine — the core of the game.
//!
//! `CampaignEngine` owns the hecs ECS world and drives the turn/phase
//! state machine: Planning → Movement → Combat → Resolution per side,
//! two side-turns per game turn. Movement and Combat run the mission
//! simulator synchronously to quiescence under a tick budget, so there
//! is no wall-clock timing anywhere and every run is deterministic for
//! a given seed.

use std::collections::HashMap;

use chrono::NaiveDate;
use glam::DVec3;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skyfront_core::catalog::StaticCatalog;
use skyfront_core::commands::CampaignCommand;
use skyfront_core::components::{Location, LocationId, Position, Squadron, SquadronId};
use skyfront_core::constants::{
    BOMB_LOAD_SPEED_PENALTY, DEFAULT_TURNS_PER_DAY, EXPERIENCE_SPEED_BONUS, PHASE_TICK_BUDGET,
    SPHERE_RADIUS_KM, WAYPOINT_SPACING_DEG,
};
use skyfront_core::enums::{GamePhase, LocationCategory, Side, WeatherCondition};
use skyfront_core::error::CampaignError;
use skyfront_core::events::{Alert, CampaignEvent};
use skyfront_core::state::{CampaignSnapshot, TurnStatus};
use skyfront_core::types::{angular_separation, GeoPos, SimTime};

use crate::path;
use crate::setup::CampaignSetup;
use crate::systems;
use crate::systems::mission::MissionTick;
use crate::weather;

/// Configuration for a new campaign engine.
#[derive(Debug, Clone)]
pub struct CampaignConfig {
    /// RNG seed for determinism. Same seed + same commands = same campaign.
    pub seed: u64,
    /// Side-turn pairs per in-game day.
    pub turns_per_day: u32,
    /// Angular spacing of planned waypoints (degrees).
    pub waypoint_spacing_deg: f64,
    /// First day of the campaign.
    pub start_date: NaiveDate,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            turns_per_day: DEFAULT_TURNS_PER_DAY,
            waypoint_spacing_deg: WAYPOINT_SPACING_DEG,
            // Opening of the Battle of Britain.
            start_date: NaiveDate::from_ymd_opt(1940, 7, 10).expect("valid start date"),
        }
    }
}

/// The campaign engine. Owns the ECS world and all campaign state.
pub struct CampaignEngine {
    world: World,
    catalog: StaticCatalog,
    config: CampaignConfig,

    turn: u32,
    phase: GamePhase,
    side: Side,
    date: NaiveDate,
    weather: WeatherCondition,
    time: SimTime,
    started: bool,

    rng: ChaCha8Rng,
    events: Vec<CampaignEvent>,
    alerts: Vec<Alert>,
    location_index: HashMap<LocationId, Entity>,
    squadron_index: HashMap<SquadronId, Entity>,
}

impl CampaignEngine {
    /// Create an engine over the given static catalog. The campaign does
    /// not exist until `start_campaign`.
    pub fn new(catalog: StaticCatalog, config: CampaignConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        let date = config.start_date;
        Self {
            world: World::new(),
            catalog,
            config,
            turn: 1,
            phase: GamePhase::default(),
            side: Side::default(),
            date,
            weather: WeatherCondition::default(),
            time: SimTime::default(),
            started: false,
            rng,
            events: Vec::new(),
            alerts: Vec::new(),
            location_index: HashMap::new(),
            squadron_index: HashMap::new(),
        }
    }

    // --- Command surface ---

    /// Validate and populate the campaign world, then begin turn 1.
    /// All-or-nothing: any inconsistency in the setup rejects the whole
    /// thing before the first entity is spawned.
    pub fn start_campaign(&mut self, setup: &CampaignSetup) -> Result<(), CampaignError> {
        if self.started {
            return Err(CampaignError::CampaignAlreadyStarted);
        }
        let resolved = self.validate_setup(setup)?;
        self.spawn_world(setup, &resolved);
        self.started = true;
        self.turn = 1;
        self.side = Side::Allies;
        self.start_new_turn();
        Ok(())
    }

    /// Advance to the next phase of the turn cycle.
    pub fn advance(&mut self) -> Result<(), CampaignError> {
        if !self.started {
            return Err(CampaignError::CampaignNotStarted);
        }

        match self.phase {
            GamePhase::Planning => {
                self.enter_phase(GamePhase::Movement);
                self.run_flight_phase();
            }
            GamePhase::Movement => {
                self.enter_phase(GamePhase::Combat);
                // Return legs and stragglers finish here.
                self.run_flight_phase();
            }
            GamePhase::Combat => {
                self.enter_phase(GamePhase::Resolution);
                systems::resolution::repair_controlled_locations(
                    &mut self.world,
                    self.side,
                    &mut self.events,
                );
            }
            GamePhase::Resolution => {
                if self.side == Side::Axis {
                    // Both sides have played: the turn ends.
                    self.end_turn();
                    self.side = Side::Allies;
                    self.start_new_turn();
                } else {
                    self.side = Side::Axis;
                    self.enter_phase(GamePhase::Planning);
                    systems::resolution::refresh_readiness(&mut self.world, self.side);
                }
            }
        }
        Ok(())
    }

    /// Order a squadron onto a strike mission. Rejects without touching
    /// any state if the squadron cannot fly or references are broken.
    pub fn send_mission(
        &mut self,
        squadron: SquadronId,
        target: LocationId,
    ) -> Result<(), CampaignError> {
        if !self.started {
            return Err(CampaignError::CampaignNotStarted);
        }
        let squadron_entity = *self
            .squadron_index
            .get(&squadron)
            .ok_or(CampaignError::UnknownSquadron(squadron))?;
        let target_entity = *self
            .location_index
            .get(&target)
            .ok_or(CampaignError::UnknownLocation(target))?;

        let target_pos = self
            .world
            .get::<&Position>(target_entity)
            .map_err(|_| CampaignError::UnknownLocation(target))?
            .0;

        // Validate and precompute with a read-only borrow.
        let (start_pos, mission_speed) = {
            let sq = self
                .world
                .get::<&Squadron>(squadron_entity)
                .map_err(|_| CampaignError::UnknownSquadron(squadron))?;
            if !sq.can_fly() {
                return Err(CampaignError::SquadronCannotFly {
                    name: sq.name.clone(),
                });
            }
            if !self.location_index.contains_key(&sq.home_base) {
                return Err(CampaignError::MissingHomeBase {
                    name: sq.name.clone(),
                });
            }
            let def = self
                .catalog
                .aircraft(sq.type_id)
                .ok_or_else(|| CampaignError::UnknownAircraftType(format!("{:?}", sq.type_id)))?;

            let pos = self
                .world
                .get::<&Position>(squadron_entity)
                .map_err(|_| CampaignError::UnknownSquadron(squadron))?
                .0;
            (pos, mission_speed(def.cruise_speed, def.bomb_capacity, &sq))
        };

        let waypoints = path::plan_route(start_pos, target_pos, self.config.waypoint_spacing_deg);

        if let Ok(mut sq) = self.world.get::<&mut Squadron>(squadron_entity) {
            sq.waypoints = waypoints;
            sq.waypoint_index = 0;
            sq.target = Some(target);
            sq.on_mission = true;
            sq.mission_speed = mission_speed;
        }
        self.events.push(CampaignEvent::MissionAssigned {
            squadron,
            target,
        });
        Ok(())
    }

    /// Apply a serialized command from the controlling layer.
    pub fn apply_command(&mut self, command: CampaignCommand) -> Result<(), CampaignError> {
        match command {
            CampaignCommand::AdvancePhase => self.advance(),
            CampaignCommand::SendMission { squadron, target } => {
                self.send_mission(squadron, target)
            }
        }
    }

    /// Read-only turn/date/phase/side/weather summary.
    pub fn describe(&self) -> TurnStatus {
        TurnStatus {
            turn: self.turn,
            date: self.date,
            phase: self.phase,
            side: self.side,
            weather: self.weather,
        }
    }

    /// Build the full snapshot and drain the buffered events/alerts into it.
    pub fn snapshot(&mut self) -> CampaignSnapshot {
        let events = std::mem::take(&mut self.events);
        let alerts = std::mem::take(&mut self.alerts);
        systems::snapshot::build_snapshot(&self.world, self.describe(), events, alerts)
    }

    /// Drain buffered events without building a snapshot.
    pub fn drain_events(&mut self) -> Vec<CampaignEvent> {
        std::mem::take(&mut self.events)
    }

    // --- Roster queries ---

    pub fn squadron_id_by_name(&self, name: &str) -> Option<SquadronId> {
        self.world
            .query::<&Squadron>()
            .iter()
            .find(|(_entity, sq)| sq.name == name)
            .map(|(_entity, sq)| sq.id)
    }

    pub fn location_id_by_name(&self, name: &str) -> Option<LocationId> {
        self.world
            .query::<&Location>()
            .iter()
            .find(|(_entity, loc)| loc.name == name)
            .map(|(_entity, loc)| loc.id)
    }

    pub fn squadrons_by_side(&self, side: Side) -> Vec<SquadronId> {
        let mut ids: Vec<SquadronId> = self
            .world
            .query::<&Squadron>()
            .iter()
            .filter(|(_entity, sq)| sq.side == side)
            .map(|(_entity, sq)| sq.id)
            .collect();
        ids.sort_by_key(|id| id.0);
        ids
    }

    pub fn locations_by_category(&self, category: LocationCategory) -> Vec<LocationId> {
        let mut ids: Vec<LocationId> = self
            .world
            .query::<&Location>()
            .iter()
            .filter(|(_entity, loc)| {
                self.catalog
                    .location_type(loc.type_id)
                    .is_some_and(|def| def.category == category)
            })
            .map(|(_entity, loc)| loc.id)
            .collect();
        ids.sort_by_key(|id| id.0);
        ids
    }

    /// Locations within an angular radius (degrees) of a point on the sphere.
    pub fn locations_within(&self, center: DVec3, radius_deg: f64) -> Vec<LocationId> {
        let mut ids: Vec<LocationId> = self
            .world
            .query::<(&Location, &Position)>()
            .iter()
            .filter(|(_entity, (_loc, pos))| {
                angular_separation(center, pos.0).to_degrees() <= radius_deg
            })
            .map(|(_entity, (loc, _pos))| loc.id)
            .collect();
        ids.sort_by_key(|id| id.0);
        ids
    }

    // --- Accessors ---

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn catalog(&self) -> &StaticCatalog {
        &self.catalog
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn weather(&self) -> WeatherCondition {
        self.weather
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn squadron_entity(&self, id: SquadronId) -> Option<Entity> {
        self.squadron_index.get(&id).copied()
    }

    pub fn location_entity(&self, id: LocationId) -> Option<Entity> {
        self.location_index.get(&id).copied()
    }

    // --- Internals ---

    fn enter_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
        self.events.push(CampaignEvent::PhaseChanged {
            phase,
            side: self.side,
        });
    }

    /// Run the mission simulator until all squadrons are quiescent or the
    /// tick budget runs out. Strikes surfaced by the simulator are
    /// resolved inline, serialized with all other location writes.
    fn run_flight_phase(&mut self) {
        for _ in 0..PHASE_TICK_BUDGET {
            let MissionTick { any_active, strikes } = systems::mission::run(
                &mut self.world,
                &self.catalog,
                &mut self.events,
                &mut self.alerts,
                self.turn,
            );

            for (attacker, target_id) in strikes {
                if let Some(&target) = self.location_index.get(&target_id) {
                    systems::combat::resolve_attack(
                        &mut self.world,
                        &self.catalog,
                        &mut self.rng,
                        &mut self.events,
                        attacker,
                        target,
                    );
                }
            }

            self.time.advance();
            if !any_active {
                break;
            }
        }
    }

    fn start_new_turn(&mut self) {
        self.events.push(CampaignEvent::TurnStarted {
            turn: self.turn,
            date: self.date,
        });

        self.weather = weather::reseed(&mut self.rng, self.date);
        self.events.push(CampaignEvent::WeatherChanged {
            weather: self.weather,
        });

        self.enter_phase(GamePhase::Planning);
        systems::resolution::refresh_readiness(&mut self.world, self.side);
    }

    fn end_turn(&mut self) {
        self.events.push(CampaignEvent::TurnEnded { turn: self.turn });

        // A day is a fixed number of side-turn pairs.
        if self.turn % self.config.turns_per_day == 0 {
            if let Some(next) = self.date.succ_opt() {
                self.date = next;
            }
        }
        self.turn += 1;
    }

    /// Check every name reference in the setup before anything spawns.
    fn validate_setup(&self, setup: &CampaignSetup) -> Result<ResolvedSetup, CampaignError> {
        let mut resolved = ResolvedSetup::default();

        for spec in &setup.locations {
            if setup
                .locations
                .iter()
                .filter(|other| other.name == spec.name)
                .count()
                > 1
            {
                return Err(CampaignError::DuplicateName(spec.name.clone()));
            }
            let type_id = self
                .catalog
                .location_type_by_category(spec.category)
                .ok_or_else(|| {
                    CampaignError::UnknownLocationType(format!("{:?}", spec.category))
                })?;
            resolved.location_types.push(type_id);
        }

        for spec in &setup.squadrons {
            if setup
                .squadrons
                .iter()
                .filter(|other| other.name == spec.name && other.side == spec.side)
                .count()
                > 1
            {
                return Err(CampaignError::DuplicateName(spec.name.clone()));
            }
            let type_id = self
                .catalog
                .aircraft_id_by_name(&spec.aircraft_type)
                .ok_or_else(|| CampaignError::UnknownAircraftType(spec.aircraft_type.clone()))?;
            let home_index = setup
                .locations
                .iter()
                .position(|loc| loc.name == spec.home_base)
                .ok_or_else(|| CampaignError::UnresolvedLocationName(spec.home_base.clone()))?;
            resolved.squadron_types.push(type_id);
            resolved.squadron_homes.push(LocationId(home_index as u32));
        }

        Ok(resolved)
    }

    fn spawn_world(&mut self, setup: &CampaignSetup, resolved: &ResolvedSetup) {
        for (index, spec) in setup.locations.iter().enumerate() {
            let id = LocationId(index as u32);
            let geo = GeoPos::new(spec.lat_deg, spec.lon_deg, spec.elevation_m);
            let entity = self.world.spawn((
                Location {
                    id,
                    name: spec.name.clone(),
                    type_id: resolved.location_types[index],
                    country_code: spec.country_code.clone(),
                    geo,
                    health: spec.max_health,
                    max_health: spec.max_health,
                    operational: spec.max_health > 0,
                    occupied: false,
                    controlled_by: spec.controlled_by,
                    stocks: spec.stocks,
                },
                Position(geo.to_cartesian(SPHERE_RADIUS_KM)),
            ));
            self.location_index.insert(id, entity);
        }

        for (index, spec) in setup.squadrons.iter().enumerate() {
            let id = SquadronId(index as u32);
            let type_id = resolved.squadron_types[index];
            let home_base = resolved.squadron_homes[index];

            let (range, capacity) = self
                .catalog
                .aircraft(type_id)
                .map(|def| (def.range, def.bomb_capacity))
                .unwrap_or((0.0, 0.0));
            let max_fuel = range * spec.aircraft_count as f64;

            let home_pos = self
                .location_index
                .get(&home_base)
                .and_then(|&entity| self.world.get::<&Position>(entity).ok().map(|p| p.0))
                .unwrap_or(DVec3::ZERO);

            let entity = self.world.spawn((
                Squadron {
                    id,
                    name: spec.name.clone(),
                    type_id,
                    side: spec.side,
                    aircraft_count: spec.aircraft_count,
                    fuel: max_fuel,
                    max_fuel,
                    ammunition: spec.ammunition,
                    bomb_load: spec.bomb_load.min(capacity * spec.aircraft_count as f64),
                    readiness: spec.readiness.clamp(0.0, 100.0),
                    experience: spec.experience.max(0),
                    home_base,
                    target: None,
                    altitude: spec.altitude_m,
                    on_mission: false,
                    waypoints: Vec::new(),
                    waypoint_index: 0,
                    mission_speed: 0.0,
                },
                Position(home_pos),
            ));
            self.squadron_index.insert(id, entity);
        }
    }
}

/// Setup references resolved during validation, indexed parallel to the
/// setup's spec lists.
#[derive(Debug, Default)]
struct ResolvedSetup {
    location_types: Vec<skyfront_core::catalog::LocationTypeId>,
    squadron_types: Vec<skyfront_core::catalog::AircraftTypeId>,
    squadron_homes: Vec<LocationId>,
}

/// Mission speed: cruise speed reduced up to 20% by bomb-load fraction,
/// raised up to 10% by crew experience.
fn mission_speed(cruise_speed: f64, bomb_capacity: f64, sq: &Squadron) -> f64 {
    let mut speed_modifier = 1.0;
    let capacity = bomb_capacity * sq.aircraft_count as f64;
    if sq.bomb_load > 0.0 && capacity > 0.0 {
        let load_ratio = (sq.bomb_load / capacity).min(1.0);
        speed_modifier *= 1.0 - load_ratio * BOMB_LOAD_SPEED_PENALTY;
    }
    let experience_modifier = 1.0 + (sq.experience as f64 / 100.0) * EXPERIENCE_SPEED_BONUS;
    cruise_speed * speed_modifier * experience_modifier
}
