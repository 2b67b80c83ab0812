//! Scene constants used as the defaults for [`crate::SceneSettings`].
//!
//! Coordinates are in scene units with the origin at the bottom-left corner.
use std::f32::consts::PI;

/// Width of the scene in scene units.
pub const SCENE_WIDTH: f32 = 2048.0;
/// Height of the scene in scene units.
pub const SCENE_HEIGHT: f32 = 1536.0;
/// Widest aspect ratio the playable region must support.
///
/// Devices wider than this crop the top and bottom of the scene, so gameplay
/// is confined to the band that stays visible.
pub const MAX_ASPECT_RATIO: f32 = 16.0 / 9.0;

/// Zombie movement speed in scene units per second.
pub const ZOMBIE_MOVE_POINTS_PER_SEC: f32 = 480.0;
/// Maximum rate at which the zombie turns toward its heading.
pub const ZOMBIE_ROTATE_RADIANS_PER_SEC: f32 = 4.0 * PI;
/// Where the zombie appears when the scene starts.
pub const ZOMBIE_START: [f32; 2] = [400.0, 400.0];
/// Size of the zombie quad.
pub const ZOMBIE_SIZE: [f32; 2] = [157.0, 95.0];

/// Size of the enemy quad.
pub const ENEMY_SIZE: [f32; 2] = [157.0, 90.0];
/// Seconds spent on each leg of the enemy's path.
pub const ENEMY_STEP_SECONDS: f32 = 1.0;
/// Seconds the enemy waits at the bottom of its path.
pub const ENEMY_PAUSE_SECONDS: f32 = 0.25;
/// Marker emitted when the enemy reaches the lowest point of its path.
pub const ENEMY_BOTTOM_MARKER: &str = "Reached bottom!";
