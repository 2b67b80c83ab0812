//! Presentation layer plugin owning the camera, sprites and pointer input.
//!
//! `PresentationPlugin` is a passive observer of simulation state: it draws
//! whatever `ScenePlugin` computes and turns mouse and touch input into
//! [`SceneTouched`] events. Sprites are plain coloured quads.

use bevy::color::palettes::css;
use bevy::gizmos::config::{DefaultGizmoConfigGroup, GizmoConfigStore};
use bevy::input::touch::{Touch, Touches};
use bevy::math::Isometry2d;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::components::{Enemy, Zombie};
use crate::input::SceneTouched;
use crate::region::PlayableRegion;
use crate::scene::SceneUpdate;
use crate::settings::SceneSettings;

/// Depth of the background quad, behind every actor.
const BACKGROUND_Z: f32 = -1.0;

const ZOMBIE_COLOR: Color = Color::srgb(0.35, 0.6, 0.3);
const ENEMY_COLOR: Color = Color::srgb(0.75, 0.2, 0.25);
const BACKGROUND_COLOR: Color = Color::srgb(0.9, 0.88, 0.8);

/// Width of the playable region outline, in pixels.
const OUTLINE_WIDTH: f32 = 12.0;

/// Marker component for the camera that looks at the scene.
///
/// Pointer input is projected through this camera into scene coordinates.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct SceneCamera;

/// Camera scale at which a scene of `scene` units covers a viewport of
/// `viewport` pixels with no bars, cropping whichever axis overflows.
///
/// Returns `1.0` for a degenerate viewport.
///
/// # Examples
///
/// ```
/// use bevy::math::Vec2;
/// use zombie_conga::presentation::fill_scale;
///
/// // A 16:9 window shows the full scene width and crops top and bottom.
/// let scale = fill_scale(Vec2::new(2048.0, 1536.0), Vec2::new(1024.0, 576.0));
/// assert!((scale - 2.0).abs() < f32::EPSILON);
/// ```
#[must_use]
pub fn fill_scale(scene: Vec2, viewport: Vec2) -> f32 {
    if !viewport.is_finite() || viewport.cmple(Vec2::ZERO).any() {
        return 1.0;
    }
    (scene / viewport).min_element()
}

/// Plugin owning camera setup, sprites and pointer input.
///
/// # Dependencies
///
/// Expects `ScenePlugin` to be added first so the scene settings are
/// available at startup. Without them the plugin only spawns a camera.
///
/// # Examples
///
/// ```ignore
/// use bevy::prelude::*;
/// use zombie_conga::{PresentationPlugin, ScenePlugin};
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins((ScenePlugin::default(), PresentationPlugin))
///     .run();
/// ```
#[derive(Debug)]
pub struct PresentationPlugin;

impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<SceneCamera>();
        app.insert_resource(ClearColor(Color::WHITE));
        app.add_systems(
            Startup,
            (camera_setup, spawn_background, widen_outline_gizmos),
        );
        app.add_systems(
            Update,
            (
                forward_pointer_touches.before(SceneUpdate),
                (
                    fit_camera_to_window,
                    attach_zombie_sprites,
                    attach_enemy_sprites,
                    draw_playable_area.after(SceneUpdate),
                )
                    .run_if(resource_exists::<PlayableRegion>),
            ),
        );
    }
}

/// Spawns a camera centred on the scene, scaled to fill the window.
///
/// If a `Camera2d` already exists (e.g. spawned by the host application), this
/// system does nothing to avoid creating duplicate cameras.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
fn camera_setup(
    mut commands: Commands,
    cameras: Query<&Camera2d>,
    windows: Query<&Window, With<PrimaryWindow>>,
    settings: Option<Res<SceneSettings>>,
) {
    if !cameras.is_empty() {
        return;
    }
    let settings = settings.as_deref().cloned().unwrap_or_default();
    let scene = settings.scene_size();
    let scale = windows
        .single()
        .map(|window| fill_scale(scene, window.size()))
        .unwrap_or(1.0);
    let centre = scene / 2.0;
    commands.spawn((
        Camera2d,
        SceneCamera,
        Name::new("SceneCamera"),
        Transform::from_xyz(centre.x, centre.y, 0.0).with_scale(Vec3::new(scale, scale, 1.0)),
    ));
}

/// Rescales the scene camera whenever the primary window changes size.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
fn fit_camera_to_window(
    settings: Res<SceneSettings>,
    windows: Query<&Window, (With<PrimaryWindow>, Changed<Window>)>,
    mut cameras: Query<&mut Transform, With<SceneCamera>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let scale = fill_scale(settings.scene_size(), window.size());
    for mut transform in &mut cameras {
        transform.scale = Vec3::new(scale, scale, 1.0);
    }
}

fn spawn_background(mut commands: Commands, settings: Option<Res<SceneSettings>>) {
    let Some(settings) = settings else {
        return;
    };
    let scene = settings.scene_size();
    let centre = scene / 2.0;
    commands.spawn((
        Name::new("Background"),
        Sprite::from_color(BACKGROUND_COLOR, scene),
        Transform::from_xyz(centre.x, centre.y, BACKGROUND_Z),
    ));
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
fn attach_zombie_sprites(
    mut commands: Commands,
    settings: Res<SceneSettings>,
    zombies: Query<Entity, Added<Zombie>>,
) {
    for entity in &zombies {
        commands
            .entity(entity)
            .insert(Sprite::from_color(ZOMBIE_COLOR, settings.zombie_size()));
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
fn attach_enemy_sprites(
    mut commands: Commands,
    settings: Res<SceneSettings>,
    enemies: Query<Entity, Added<Enemy>>,
) {
    for entity in &enemies {
        commands
            .entity(entity)
            .insert(Sprite::from_color(ENEMY_COLOR, settings.enemy_size()));
    }
}

fn widen_outline_gizmos(mut store: ResMut<GizmoConfigStore>) {
    let (config, _) = store.config_mut::<DefaultGizmoConfigGroup>();
    config.line.width = OUTLINE_WIDTH;
}

/// Placement and size of the playable region outline, or `None` when debug
/// drawing is off.
fn playable_outline(
    settings: &SceneSettings,
    region: &PlayableRegion,
) -> Option<(Isometry2d, Vec2)> {
    settings
        .debug_draw
        .then(|| (Isometry2d::from_translation(region.center()), region.size()))
}

/// Outlines the playable region when debug drawing is enabled.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
fn draw_playable_area(
    mut gizmos: Gizmos,
    settings: Res<SceneSettings>,
    region: Res<PlayableRegion>,
) {
    if let Some((isometry, size)) = playable_outline(&settings, &region) {
        gizmos.rect_2d(isometry, size, css::RED);
    }
}

/// Screen position of the active pointer: the first touch, otherwise the
/// cursor while the left mouse button is held.
fn pointer_position(
    touches: &Touches,
    mouse: &ButtonInput<MouseButton>,
    cursor: Option<Vec2>,
) -> Option<Vec2> {
    touches
        .iter()
        .next()
        .map(Touch::position)
        .or_else(|| cursor.filter(|_| mouse.pressed(MouseButton::Left)))
}

/// Converts a held left mouse button or an active touch into a
/// [`SceneTouched`] event.
///
/// Runs before [`SceneUpdate`] so the motion system sees the touch in the
/// same frame.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn forward_pointer_touches(
    mut commands: Commands,
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<SceneCamera>>,
) {
    // No camera exists before startup has run.
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    let cursor = windows.single().ok().and_then(Window::cursor_position);
    let Some(screen_point) = pointer_position(&touches, &mouse, cursor) else {
        return;
    };

    if let Ok(location) = camera.viewport_to_world_2d(camera_transform, screen_point) {
        commands.trigger(SceneTouched { location });
    }
}
