//! Simplified Keplerian ellipse math, pure and engine-independent.
//!
//! The phase angle is the mean anomaly, used as if it were the true anomaly
//! in the polar form r = a(1 - e·cos E). Positions therefore trace the
//! familiar egg-shaped paths of the viewer, not physical orbits.

use std::f64::consts::TAU;

use glam::DVec2;

use crate::core::body::OrbitalBody;

/// Number of segments in a sampled orbit path (the path has one more point).
pub const ORBIT_STEPS: usize = 100;

/// Distance from the sun at phase angle `angle`.
pub fn radius(a: f64, e: f64, angle: f64) -> f64 {
    a * (1.0 - e * angle.cos())
}

/// Phase angle of a body after `elapsed` days.
pub fn phase_at(elapsed: f64, period: f64) -> f64 {
    (elapsed / period) * TAU
}

/// Position at phase angle `angle`, relative to `center`.
pub fn position(center: DVec2, a: f64, e: f64, angle: f64) -> DVec2 {
    let r = radius(a, e, angle);
    center + DVec2::new(r * angle.cos(), r * angle.sin())
}

/// Current position of `body` after `elapsed` days.
pub fn body_position(body: &OrbitalBody, center: DVec2, elapsed: f64) -> DVec2 {
    position(center, body.a, body.e, phase_at(elapsed, body.period))
}

/// Sample the orbit path at `steps + 1` evenly spaced phase angles.
/// The first and last points coincide.
pub fn path_points(body: &OrbitalBody, center: DVec2, steps: usize) -> Vec<DVec2> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| {
            let angle = (i as f64 / steps as f64) * TAU;
            position(center, body.a, body.e, angle)
        })
        .collect()
}
