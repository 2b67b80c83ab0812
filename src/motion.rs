//! Per-frame motion update for touch-steered actors.
//!
//! [`update`] is the whole rule set: arrive when the touch target is within a
//! frame's reach, otherwise steer, move and turn toward it, then keep the
//! actor inside the playable region. Everything it needs for one frame is
//! carried by a [`FrameContext`]; the previous frame's timestamp lives in a
//! [`FrameClock`].
use bevy::prelude::Resource;
use glam::Vec2;

use crate::actor::Actor;
use crate::region::{BoundaryContact, PlayableRegion};

/// Derives frame durations from a monotonically increasing timestamp.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    last_update: Option<f64>,
    dt: f32,
}

impl FrameClock {
    /// Records `now` and returns the seconds elapsed since the previous call.
    ///
    /// The first call returns zero. Backwards or non-finite steps also return
    /// zero so a misbehaving host clock can never move an actor backwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use zombie_conga::FrameClock;
    /// let mut clock = FrameClock::default();
    /// assert_eq!(clock.tick(10.0), 0.0);
    /// assert!((clock.tick(10.5) - 0.5).abs() < 1e-6);
    /// assert_eq!(clock.tick(9.0), 0.0);
    /// ```
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Frame durations are tiny; f32 precision is ample."
    )]
    pub fn tick(&mut self, now: f64) -> f32 {
        let dt = self.last_update.map_or(0.0, |last| now - last);
        self.last_update = Some(now);
        self.dt = sanitize_dt(dt as f32);
        self.dt
    }

    /// Duration returned by the most recent [`FrameClock::tick`].
    #[must_use]
    pub const fn dt(&self) -> f32 {
        self.dt
    }

    /// Timestamp passed to the most recent [`FrameClock::tick`].
    #[must_use]
    pub const fn last_update(&self) -> Option<f64> {
        self.last_update
    }
}

/// Clamps a frame duration to a finite, non-negative value.
#[must_use]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.max(0.0)
    } else {
        0.0
    }
}

/// Inputs to one frame of [`update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    dt: f32,
    touch: Option<Vec2>,
    region: PlayableRegion,
}

impl FrameContext {
    /// Bundles a frame's inputs, clamping `dt` with [`sanitize_dt`].
    #[must_use]
    pub fn new(dt: f32, touch: Option<Vec2>, region: PlayableRegion) -> Self {
        Self {
            dt: sanitize_dt(dt),
            touch,
            region,
        }
    }

    /// Seconds elapsed since the previous frame.
    #[must_use]
    pub const fn dt(&self) -> f32 {
        self.dt
    }

    /// The last point the player touched, if any.
    #[must_use]
    pub const fn touch(&self) -> Option<Vec2> {
        self.touch
    }

    /// Region the actor must stay inside.
    #[must_use]
    pub const fn region(&self) -> &PlayableRegion {
        &self.region
    }
}

/// What [`update`] did to the actor this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionOutcome {
    /// No touch has been recorded yet.
    Idle,
    /// The actor reached the touch point and stopped.
    Arrived,
    /// The actor moved toward the touch point.
    Moving,
}

/// Summary of a single motion update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionReport {
    /// Which branch of the update ran.
    pub outcome: MotionOutcome,
    /// Axes on which the actor bounced off the playable region.
    pub contact: BoundaryContact,
}

/// Advances `actor` by one frame.
///
/// # Examples
///
/// ```
/// use glam::Vec2;
/// use zombie_conga::{motion, Actor, FrameContext, MotionOutcome, PlayableRegion};
///
/// let region = PlayableRegion::from_corners(Vec2::ZERO, Vec2::splat(100.0));
/// let mut actor = Actor::new(Vec2::new(10.0, 10.0), 50.0, 1.0);
/// let frame = FrameContext::new(0.1, Some(Vec2::new(12.0, 10.0)), region);
///
/// let report = motion::update(&mut actor, &frame);
/// assert_eq!(report.outcome, MotionOutcome::Arrived);
/// assert_eq!(actor.position, Vec2::new(12.0, 10.0));
/// ```
pub fn update(actor: &mut Actor, frame: &FrameContext) -> MotionReport {
    let dt = frame.dt();
    let outcome = match frame.touch() {
        None => MotionOutcome::Idle,
        Some(target) if actor.can_reach(target, dt) => {
            actor.arrive_at(target);
            MotionOutcome::Arrived
        }
        Some(target) => {
            actor.steer_toward(target);
            actor.advance(dt);
            actor.rotate_toward_heading(dt);
            MotionOutcome::Moving
        }
    };

    let contact = frame
        .region()
        .confine(&mut actor.position, &mut actor.velocity);
    MotionReport { outcome, contact }
}
