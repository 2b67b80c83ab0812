//! Bevy plugin running the scene's per-frame simulation.
//!
//! `ScenePlugin` owns the frame loop: it ticks the [`FrameClock`], feeds the
//! zombie through [`motion::update`] and plays the enemy's [`ScriptedPath`].
//! It needs no renderer, so tests drive it with `MinimalPlugins`. Drawing
//! lives in the presentation layer behind the `render` feature.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::{debug, error, info, trace};
use thiserror::Error;

use crate::actor::Actor;
use crate::components::{Enemy, EnemyPath, Zombie};
use crate::input::{record_scene_touch, InputState};
use crate::motion::{self, FrameClock, FrameContext};
use crate::region::PlayableRegion;
use crate::sequence::{MotionStep, PlaybackState, ScriptedPath};
use crate::settings::SceneSettings;
use crate::ENEMY_BOTTOM_MARKER;

/// Depth of the actors above the background.
const ACTOR_Z: f32 = 0.0;

/// Event raised when the scene cannot be set up from its settings.
#[derive(Event, Debug, Clone, Error)]
#[error("scene setup failed: {detail}")]
pub struct SceneSetupError {
    /// Description of the underlying error.
    pub detail: String,
}

impl SceneSetupError {
    /// Convenience constructor used when triggering the event.
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
fn log_scene_setup_error(event: On<SceneSetupError>) {
    error!("{}", event.event());
}

/// Systems that advance the simulation each frame.
///
/// Presentation systems order themselves around this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SceneUpdate;

/// Bevy plugin installing the scene's resources, actors and frame systems.
#[derive(Debug, Clone, Default)]
pub struct ScenePlugin {
    /// Settings the scene is built from.
    pub settings: SceneSettings,
}

impl ScenePlugin {
    /// Creates the plugin with custom settings.
    #[must_use]
    pub const fn new(settings: SceneSettings) -> Self {
        Self { settings }
    }
}

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_observer(log_scene_setup_error);

        let region = match self.settings.validate() {
            Ok(region) => region,
            Err(e) => {
                app.world_mut().trigger(SceneSetupError::new(e.to_string()));
                return;
            }
        };
        debug!(
            "Playable region spans {:?} to {:?}",
            region.min(),
            region.max()
        );

        app.insert_resource(self.settings.clone())
            .insert_resource(region)
            .init_resource::<InputState>()
            .init_resource::<FrameClock>()
            .add_observer(record_scene_touch)
            .add_systems(Startup, spawn_actors)
            .add_systems(
                Update,
                (tick_frame_clock, move_zombies, play_enemy_paths)
                    .chain()
                    .in_set(SceneUpdate),
            );
    }
}

/// Where the enemy appears: just past the right edge, vertically centred.
#[must_use]
pub fn enemy_start(settings: &SceneSettings) -> Vec2 {
    let scene = settings.scene_size();
    let enemy = settings.enemy_size();
    Vec2::new(scene.x + enemy.x / 2.0, scene.y / 2.0)
}

/// The enemy's patrol: dip to the bottom of the playable region, pause,
/// climb back to mid-height off the left edge.
///
/// [`ScriptedPath`] then replays it in reverse, bringing the enemy home.
#[must_use]
pub fn enemy_path(settings: &SceneSettings, region: &PlayableRegion) -> ScriptedPath {
    let scene = settings.scene_size();
    let enemy = settings.enemy_size();
    let dx = -scene.x / 2.0 - enemy.x / 2.0;
    let dy = region.size().y / 2.0 - enemy.y / 2.0;
    ScriptedPath::new(vec![
        MotionStep::move_by(Vec2::new(dx, -dy), settings.enemy_step_seconds),
        MotionStep::marker(ENEMY_BOTTOM_MARKER),
        MotionStep::wait(settings.enemy_pause_seconds),
        MotionStep::move_by(Vec2::new(dx, dy), settings.enemy_step_seconds),
    ])
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
fn spawn_actors(
    mut commands: Commands,
    settings: Res<SceneSettings>,
    region: Res<PlayableRegion>,
) {
    let zombie = Actor::new(
        settings.zombie_start(),
        settings.zombie_speed,
        settings.zombie_turn_rate,
    );
    commands.spawn((
        Name::new("Zombie"),
        Transform::from_translation(zombie.position.extend(ACTOR_Z)),
        Zombie(zombie),
    ));

    let start = enemy_start(&settings);
    commands.spawn((
        Name::new("Enemy"),
        Enemy,
        EnemyPath(enemy_path(&settings, &region)),
        Transform::from_translation(start.extend(ACTOR_Z)),
    ));
    info!("Scene ready: zombie at {:?}, enemy at {start:?}", settings.zombie_start());
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
fn tick_frame_clock(time: Res<Time>, mut clock: ResMut<FrameClock>) {
    let dt = clock.tick(time.elapsed_secs_f64());
    trace!("{:.3} ms since last update", dt * 1000.0);
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
fn move_zombies(
    clock: Res<FrameClock>,
    input: Res<InputState>,
    region: Res<PlayableRegion>,
    mut zombies: Query<(&mut Zombie, &mut Transform)>,
) {
    let frame = FrameContext::new(clock.dt(), input.last_touch(), *region);
    for (mut zombie, mut transform) in &mut zombies {
        let report = motion::update(&mut zombie.0, &frame);
        if report.contact.any() {
            debug!("Zombie bounced off the playable region: {report:?}");
        }
        transform.translation.x = zombie.position.x;
        transform.translation.y = zombie.position.y;
        transform.rotation = Quat::from_rotation_z(zombie.rotation);
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
fn play_enemy_paths(
    clock: Res<FrameClock>,
    mut enemies: Query<(&mut EnemyPath, &mut Transform), With<Enemy>>,
) {
    for (mut path, mut transform) in &mut enemies {
        if path.state() == PlaybackState::Done {
            continue;
        }
        let step = path.advance(clock.dt());
        transform.translation += step.displacement.extend(0.0);
        for marker in &step.markers {
            info!("{marker}");
        }
        if path.state() == PlaybackState::Done {
            debug!("Enemy finished its path at {:?}", transform.translation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn enemy_path_matches_scene_geometry() {
        let settings = SceneSettings::default();
        let region = settings
            .playable_region()
            .unwrap_or_else(|e| panic!("region: {e}"));
        let path = enemy_path(&settings, &region);
        let Some(MotionStep::MoveBy { offset, duration }) = path.steps().first().cloned() else {
            panic!("first step should move");
        };
        // Half the scene plus half the enemy, down to the bottom edge.
        assert_relative_eq!(offset.x, -1024.0 - 78.5);
        assert_relative_eq!(offset.y, -(576.0 - 45.0));
        assert_relative_eq!(duration, 1.0);
        assert_relative_eq!(path.total_duration(), 4.5);
    }

    #[test]
    fn enemy_dips_to_the_bottom_of_the_region() {
        let settings = SceneSettings::default();
        let region = settings
            .playable_region()
            .unwrap_or_else(|e| panic!("region: {e}"));
        let mut path = enemy_path(&settings, &region);
        let bottom = enemy_start(&settings) + path.advance(1.0).displacement;
        assert_relative_eq!(bottom.y, region.min().y + settings.enemy_size().y / 2.0);
        assert_relative_eq!(bottom.x, settings.scene_size().x / 2.0);
    }

    #[test]
    fn plugin_installs_resources() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(ScenePlugin::default());
        assert!(app.world().contains_resource::<PlayableRegion>());
        assert!(app.world().contains_resource::<InputState>());
        assert!(app.world().contains_resource::<FrameClock>());
    }

    #[test]
    fn invalid_settings_install_nothing() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(ScenePlugin::new(SceneSettings {
            zombie_speed: -1.0,
            ..SceneSettings::default()
        }));
        assert!(!app.world().contains_resource::<PlayableRegion>());
        assert!(!app.world().contains_resource::<SceneSettings>());
    }
}
