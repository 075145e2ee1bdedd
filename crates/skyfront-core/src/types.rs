//! Fundamental geometric and simulation types.
//!
//! All in-flight positions are Cartesian points (kilometers) on a sphere
//! centered at the origin, y-up. Geographic coordinates exist only at the
//! map edge and are converted once at campaign setup.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::TICK_HOURS;

/// Geographic position: latitude/longitude in degrees, elevation in meters
/// above the sphere surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPos {
    pub lat_deg: f64,
    pub lon_deg: f64,
    pub elevation_m: f64,
}

impl GeoPos {
    pub fn new(lat_deg: f64, lon_deg: f64, elevation_m: f64) -> Self {
        Self {
            lat_deg,
            lon_deg,
            elevation_m,
        }
    }

    /// Convert to a Cartesian point (km) on a sphere of the given radius (km).
    /// Elevation is added to the radius.
    pub fn to_cartesian(&self, radius_km: f64) -> DVec3 {
        let lat = self.lat_deg.to_radians();
        let lon = self.lon_deg.to_radians();
        let r = radius_km + self.elevation_m / 1000.0;
        DVec3::new(
            r * lat.cos() * lon.cos(),
            r * lat.sin(),
            r * lat.cos() * lon.sin(),
        )
    }
}

/// Angular separation between two points as seen from the sphere center,
/// in radians. Zero-length inputs yield zero.
pub fn angular_separation(a: DVec3, b: DVec3) -> f64 {
    let (na, nb) = (a.normalize_or_zero(), b.normalize_or_zero());
    if na == DVec3::ZERO || nb == DVec3::ZERO {
        return 0.0;
    }
    na.dot(nb).clamp(-1.0, 1.0).acos()
}

/// Surface orientation of a unit flying over the sphere: local up vector
/// and the tangent-plane forward vector toward its current waypoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub up: DVec3,
    pub forward: DVec3,
}

impl Orientation {
    /// Derive the orientation at `position` heading toward `toward`.
    /// Falls back to an arbitrary tangent when the two coincide.
    pub fn at(position: DVec3, toward: DVec3) -> Self {
        let up = position.normalize_or_zero();
        let dir = (toward - position).normalize_or_zero();
        let right = up.cross(dir);
        let forward = if right.length_squared() > 1e-12 {
            right.normalize().cross(up)
        } else {
            DVec3::ZERO
        };
        Self { up, forward }
    }
}

/// Simulation time within a movement run.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed in-game flight time in hours.
    pub elapsed_hours: f64,
}

impl SimTime {
    /// In-game hours per tick.
    pub fn dt(&self) -> f64 {
        TICK_HOURS
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_hours += self.dt();
    }
}
