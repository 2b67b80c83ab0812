//! Basic vector math helper functions.
//! Small helpers for headings, angular differences and unit directions.
use std::f32::consts::{PI, TAU};

use glam::Vec2;

/// Returns the angle of `vector` measured counter-clockwise from the +x axis.
///
/// Returns `None` for the zero vector or a vector with non-finite
/// components, since neither has a meaningful heading.
///
/// # Examples
/// ```
/// use glam::Vec2;
/// use zombie_conga::vector_math::heading;
/// let angle = heading(Vec2::new(0.0, 2.0)).unwrap();
/// assert!((angle - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
/// assert_eq!(heading(Vec2::ZERO), None);
/// ```
#[must_use]
pub fn heading(vector: Vec2) -> Option<f32> {
    if !vector.is_finite() || vector == Vec2::ZERO {
        return None;
    }
    Some(vector.y.atan2(vector.x))
}

/// Returns the signed angle that turns `from` onto `to` the short way round.
///
/// The result lies in `(-π, π]`; exactly opposite headings resolve to `+π`.
///
/// # Examples
/// ```
/// use std::f32::consts::{FRAC_PI_2, PI};
/// use zombie_conga::shortest_angle_between;
/// let diff = shortest_angle_between(0.0, 3.0 * FRAC_PI_2);
/// assert!((diff + FRAC_PI_2).abs() < 1e-5);
/// assert!((shortest_angle_between(0.0, PI) - PI).abs() < 1e-6);
/// ```
#[must_use]
pub fn shortest_angle_between(from: f32, to: f32) -> f32 {
    PI - (from - to + PI).rem_euclid(TAU)
}

/// Returns the unit vector pointing from `from` toward `to`.
///
/// Coincident points and non-finite input yield `Vec2::ZERO`.
///
/// # Examples
///
/// ```
/// use glam::Vec2;
/// use zombie_conga::direction_to;
/// let dir = direction_to(Vec2::new(1.0, 1.0), Vec2::new(4.0, 5.0));
/// assert!((dir - Vec2::new(0.6, 0.8)).length() < 1e-6);
/// assert_eq!(direction_to(Vec2::ONE, Vec2::ONE), Vec2::ZERO);
/// ```
#[must_use]
pub fn direction_to(from: Vec2, to: Vec2) -> Vec2 {
    let offset = to - from;
    if !offset.is_finite() {
        return Vec2::ZERO;
    }
    offset.try_normalize().unwrap_or(Vec2::ZERO)
}
