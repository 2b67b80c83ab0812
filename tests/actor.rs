//! Tests for `Actor` steering and turning.
use std::f32::consts::PI;

use approx::assert_relative_eq;
use glam::Vec2;
use zombie_conga::Actor;

#[test]
fn walks_towards_target() {
    let mut actor = Actor::new(Vec2::ZERO, 5.0, PI);

    actor.steer_toward(Vec2::new(20.0, 0.0));
    actor.advance(1.0);

    assert!(
        (actor.position.x - actor.max_speed).abs() < f32::EPSILON,
        "Actor should move exactly {} units towards target, but moved to {:?}",
        actor.max_speed,
        actor.position
    );
    assert!(
        actor.position.y.abs() < f32::EPSILON,
        "Actor should only move along X axis, but position is {:?}",
        actor.position
    );
}

#[test]
fn stationary_when_at_target() {
    let target = Vec2::new(3.0, 2.0);
    let mut actor = Actor::new(target, 1.0, 1.0);

    actor.steer_toward(target);
    actor.advance(1.0);

    assert_eq!(actor.position, target);
    assert_eq!(actor.velocity, Vec2::ZERO);
}

#[test]
fn reach_includes_exact_frame_distance() {
    let actor = Actor::new(Vec2::new(400.0, 400.0), 480.0, PI);
    assert!(actor.can_reach(Vec2::new(460.0, 400.0), 0.125));
    assert!(!actor.can_reach(Vec2::new(460.1, 400.0), 0.125));
}

#[test]
fn turns_toward_velocity_over_several_frames() {
    let mut actor = Actor::new(Vec2::ZERO, 10.0, PI);
    actor.steer_toward(Vec2::new(-1.0, 0.0));

    actor.rotate_toward_heading(0.5);
    assert_relative_eq!(actor.rotation.abs(), PI / 2.0, epsilon = 1e-5);

    actor.rotate_toward_heading(0.5);
    actor.rotate_toward_heading(0.5);
    assert_relative_eq!(actor.rotation.abs(), PI, epsilon = 1e-5);
}
