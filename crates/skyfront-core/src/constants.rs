//! Simulation constants and tuning parameters.

/// Sphere radius used for the campaign map (km).
pub const SPHERE_RADIUS_KM: f64 = 6_371.0;

/// In-game hours of flight simulated per movement tick.
pub const TICK_HOURS: f64 = 0.1;

/// Hard cap on movement ticks per phase; quiescence normally ends the
/// phase well before this.
pub const PHASE_TICK_BUDGET: u64 = 5_000;

/// Side-turns per in-game day (day/night pair).
pub const DEFAULT_TURNS_PER_DAY: u32 = 2;

// --- Path planning ---

/// Default angular spacing between great-circle waypoints (degrees).
pub const WAYPOINT_SPACING_DEG: f64 = 10.0;

/// Distance at which a squadron counts as having arrived at a location (km).
pub const ARRIVAL_TOLERANCE_KM: f64 = 1.0;

// --- Squadron readiness ---

/// Readiness floor a squadron must exceed to be flyable.
pub const CAN_FLY_READINESS: f64 = 20.0;

/// Readiness regained per Planning phase while parked at base.
pub const PLANNING_READINESS_GAIN: f64 = 5.0;

/// Readiness regained on returning from a mission.
pub const LANDING_READINESS_GAIN: f64 = 20.0;

/// Readiness ceiling.
pub const READINESS_MAX: f64 = 100.0;

// --- Mission speed ---

/// Maximum cruise-speed reduction from a full bomb load (fraction).
pub const BOMB_LOAD_SPEED_PENALTY: f64 = 0.2;

/// Maximum cruise-speed gain from crew experience (fraction, at 100 xp).
pub const EXPERIENCE_SPEED_BONUS: f64 = 0.1;

// --- Combat ---

/// Experience gained per delivered strike, lower bound (inclusive).
pub const STRIKE_EXPERIENCE_MIN: i32 = 1;

/// Experience gained per delivered strike, upper bound (inclusive).
pub const STRIKE_EXPERIENCE_MAX: i32 = 2;

// --- Resolution ---

/// Health restored per Resolution phase to each damaged controlled location.
pub const REPAIR_PER_TURN: i32 = 5;
