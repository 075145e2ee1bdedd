//! Great-circle path planner.
//!
//! Pure and deterministic: the single source of truth for in-flight
//! waypoints. Both endpoints are assumed to lie at comparable radius —
//! intermediate points sit on the arc at the averaged endpoint radius,
//! with no climb/descent profile.

use glam::DVec3;

use skyfront_core::types::angular_separation;

/// Compute an ordered waypoint sequence from `start` to `end` inclusive,
/// approximating the great-circle arc with one intermediate point per
/// `spacing_deg` degrees of angular separation.
///
/// Coincident endpoints yield just the two points; so does any leg
/// shorter than the spacing.
pub fn plan_route(start: DVec3, end: DVec3, spacing_deg: f64) -> Vec<DVec3> {
    let mut path = vec![start];

    let start_dir = start.normalize_or_zero();
    let end_dir = end.normalize_or_zero();
    let angle_deg = angular_separation(start, end).to_degrees();

    let segments = ((angle_deg / spacing_deg).floor() as i64).max(1);
    let radius = (start.length() + end.length()) * 0.5;

    for i in 1..segments {
        let t = i as f64 / segments as f64;
        path.push(slerp(start_dir, end_dir, t) * radius);
    }

    path.push(end);
    path
}

/// Spherical linear interpolation between two unit vectors.
///
/// Falls back to normalized lerp when the arc is too short for the
/// sine formulation to be well conditioned.
fn slerp(a: DVec3, b: DVec3, t: f64) -> DVec3 {
    let cos_theta = a.dot(b).clamp(-1.0, 1.0);
    let theta = cos_theta.acos();
    let sin_theta = theta.sin();

    if sin_theta < 1e-9 {
        return a.lerp(b, t).normalize_or_zero();
    }

    let wa = ((1.0 - t) * theta).sin() / sin_theta;
    let wb = (t * theta).sin() / sin_theta;
    (a * wa + b * wb).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyfront_core::types::GeoPos;

    const R: f64 = 6371.0;

    #[test]
    fn endpoints_are_exact() {
        let start = GeoPos::new(51.5, -0.1, 0.0).to_cartesian(R);
        let end = GeoPos::new(50.9, 6.9, 0.0).to_cartesian(R);
        let path = plan_route(start, end, 1.0);
        assert_eq!(path[0], start);
        assert_eq!(*path.last().unwrap(), end);
    }

    #[test]
    fn intermediate_count_matches_spacing() {
        // 90 degrees apart, 10 degree spacing: 9 segments, 8 intermediates.
        let start = GeoPos::new(0.0, 0.0, 0.0).to_cartesian(R);
        let end = GeoPos::new(0.0, 90.0, 0.0).to_cartesian(R);
        let path = plan_route(start, end, 10.0);
        assert_eq!(path.len(), 10);

        // Spacing wider than the whole arc: segments = 1, no intermediates.
        let path = plan_route(start, end, 180.0);
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn coincident_endpoints_yield_two_points() {
        let p = GeoPos::new(48.0, 2.0, 0.0).to_cartesian(R);
        let path = plan_route(p, p, 10.0);
        assert_eq!(path.len(), 2);
        assert_eq!(path[0], path[1]);
    }

    #[test]
    fn intermediates_lie_on_the_sphere_at_average_radius() {
        let start = GeoPos::new(10.0, 10.0, 0.0).to_cartesian(R);
        let end = GeoPos::new(-20.0, 75.0, 0.0).to_cartesian(R);
        let radius = (start.length() + end.length()) * 0.5;
        let path = plan_route(start, end, 5.0);
        assert!(path.len() > 3);
        for wp in &path[1..path.len() - 1] {
            assert!((wp.length() - radius).abs() < 1e-6);
        }
    }

    #[test]
    fn path_is_deterministic() {
        let start = GeoPos::new(51.5, -0.1, 0.0).to_cartesian(R);
        let end = GeoPos::new(52.5, 13.4, 0.0).to_cartesian(R);
        let a = plan_route(start, end, 2.5);
        let b = plan_route(start, end, 2.5);
        assert_eq!(a, b);
    }

    #[test]
    fn waypoints_progress_monotonically_along_the_arc() {
        let start = GeoPos::new(0.0, 0.0, 0.0).to_cartesian(R);
        let end = GeoPos::new(0.0, 120.0, 0.0).to_cartesian(R);
        let path = plan_route(start, end, 10.0);
        let total = skyfront_core::types::angular_separation(start, end);
        let mut prev = 0.0;
        for wp in &path[1..] {
            let a = skyfront_core::types::angular_separation(start, *wp);
            assert!(a > prev - 1e-9);
            assert!(a <= total + 1e-9);
            prev = a;
        }
    }
}
