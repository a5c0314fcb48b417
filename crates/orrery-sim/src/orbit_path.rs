//! Circular orbit polylines on the ecliptic plane.

use std::f64::consts::TAU;

use glam::DVec3;

/// Default number of segments in an orbit polyline.
pub const DEFAULT_ORBIT_SEGMENTS: usize = 100;

/// Closed circular polyline of radius `distance` in the x/z plane.
///
/// Returns `segments + 1` points; the last repeats the first so a line strip
/// closes the loop. Zero segments or a zero distance yield no points.
pub fn orbit_path(distance: f64, segments: usize) -> Vec<DVec3> {
    if segments == 0 || distance <= 0.0 {
        return Vec::new();
    }
    (0..=segments)
        .map(|i| {
            let angle = i as f64 / segments as f64 * TAU;
            DVec3::new(distance * angle.cos(), 0.0, distance * angle.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbit_path_is_closed_circle() {
        let points = orbit_path(25.0, DEFAULT_ORBIT_SEGMENTS);
        assert_eq!(points.len(), 101);
        assert!((points[0] - points[100]).length() < 1e-9);
        for p in &points {
            assert!((p.length() - 25.0).abs() < 1e-9);
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn test_degenerate_orbits_are_empty() {
        assert!(orbit_path(0.0, 100).is_empty());
        assert!(orbit_path(10.0, 0).is_empty());
    }
}
