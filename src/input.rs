//! Touch input accumulated between frames.
//!
//! Hosts report touches as [`SceneTouched`] events already converted to scene
//! coordinates. The [`record_scene_touch`] observer stores the latest one in
//! [`InputState`], where the motion system reads it on the next frame.
use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::debug;

/// Last point the player touched.
///
/// Set by every touch and never cleared, so the zombie keeps heading for the
/// most recent touch after the finger lifts.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    last_touch: Option<Vec2>,
}

impl InputState {
    /// Records a touch at `location`.
    pub fn touch(&mut self, location: Vec2) {
        self.last_touch = Some(location);
    }

    /// Most recent touch, if any.
    #[must_use]
    pub const fn last_touch(&self) -> Option<Vec2> {
        self.last_touch
    }
}

/// A touch began or moved at `location`, in scene coordinates.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SceneTouched {
    /// Touched point in scene coordinates.
    pub location: Vec2,
}

/// Stores each [`SceneTouched`] into [`InputState`].
#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
pub fn record_scene_touch(event: On<SceneTouched>, mut input: ResMut<InputState>) {
    let location = event.event().location;
    if !location.is_finite() {
        debug!("Ignoring touch at non-finite location {location:?}");
        return;
    }
    input.touch(location);
}
