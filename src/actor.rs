//! Steerable actors: position, heading and the limits on how fast both change.
use glam::Vec2;
use log::debug;

use crate::vector_math::{direction_to, heading, shortest_angle_between};

/// A sprite that steers toward points at a fixed speed and turns at a
/// bounded rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    /// Position in scene coordinates.
    pub position: Vec2,
    /// Rotation about the z axis in radians, counter-clockwise from +x.
    pub rotation: f32,
    /// Current velocity in scene units per second.
    pub velocity: Vec2,
    /// Speed used when steering toward a target.
    pub max_speed: f32,
    /// Fastest the actor may turn, in radians per second.
    pub max_turn_rate: f32,
}

impl Actor {
    /// Creates a stationary actor facing +x.
    pub fn new(position: Vec2, max_speed: f32, max_turn_rate: f32) -> Self {
        debug!(
            "Creating actor at {position:?} with speed {max_speed} and turn rate {max_turn_rate}"
        );
        Self {
            position,
            rotation: 0.0,
            velocity: Vec2::ZERO,
            max_speed,
            max_turn_rate,
        }
    }

    /// Whether `target` is within one frame's travel at full speed.
    #[must_use]
    pub fn can_reach(&self, target: Vec2, dt: f32) -> bool {
        self.position.distance(target) <= self.max_speed * dt
    }

    /// Points the velocity at `target` with magnitude `max_speed`.
    ///
    /// Leaves the velocity at zero when the actor already stands on `target`.
    pub fn steer_toward(&mut self, target: Vec2) {
        self.velocity = direction_to(self.position, target) * self.max_speed;
    }

    /// Moves to `target` and stops.
    pub fn arrive_at(&mut self, target: Vec2) {
        self.position = target;
        self.velocity = Vec2::ZERO;
    }

    /// Integrates the velocity over `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        let amount = self.velocity * dt;
        self.position += amount;
    }

    /// Turns toward the current heading by at most `max_turn_rate * dt`.
    ///
    /// Takes the shorter way round. A stationary actor keeps its rotation.
    pub fn rotate_toward_heading(&mut self, dt: f32) {
        let Some(target_angle) = heading(self.velocity) else {
            return;
        };
        let shortest = shortest_angle_between(self.rotation, target_angle);
        let amount = (self.max_turn_rate * dt).min(shortest.abs());
        self.rotation += amount.copysign(shortest);
    }
}
