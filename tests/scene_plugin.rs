//! Integration tests for `ScenePlugin` wiring.

#[path = "support/scene_fixture.rs"]
mod scene_fixture;

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use scene_fixture::SceneFixture;
use zombie_conga::{InputState, SceneSettings, SceneSetupError, ScenePlugin};

#[derive(Resource, Default)]
struct CapturedErrors(Vec<String>);

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
fn capture_setup_error(event: On<SceneSetupError>, mut captured: ResMut<CapturedErrors>) {
    captured.0.push(event.event().detail.clone());
}

#[test]
fn invalid_settings_raise_setup_error() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.init_resource::<CapturedErrors>();
    app.add_observer(capture_setup_error);
    app.add_plugins(ScenePlugin::new(SceneSettings {
        max_aspect_ratio: 0.0,
        ..SceneSettings::default()
    }));

    let captured = &app.world().resource::<CapturedErrors>().0;
    assert_eq!(captured.len(), 1, "expected one setup error: {captured:?}");
    assert!(
        captured.iter().any(|d| d.contains("aspect ratio")),
        "unexpected detail: {captured:?}"
    );
    assert!(!app.world().contains_resource::<InputState>());
}

#[test]
fn zombie_starts_at_configured_position() {
    let fixture = SceneFixture::bootstrap(SceneSettings {
        zombie_start: [1000.0, 700.0],
        ..SceneSettings::default()
    });
    fixture.run_until(1);
    let (transform, velocity) = fixture.zombie();
    assert_eq!(transform.translation.truncate(), Vec2::new(1000.0, 700.0));
    assert_eq!(velocity, Vec2::ZERO);
}

#[test]
fn zombie_without_touch_stays_put() {
    let fixture = SceneFixture::bootstrap(SceneSettings::default());
    fixture.run_until(5);
    let (transform, _) = fixture.zombie();
    assert_eq!(transform.translation.truncate(), Vec2::new(400.0, 400.0));
}

#[test]
fn touch_before_first_frame_is_kept() {
    let fixture = SceneFixture::bootstrap(SceneSettings::default());
    fixture.touch(Vec2::new(400.0, 1000.0));
    fixture.run_until(2);
    let (transform, velocity) = fixture.zombie();
    assert!((transform.translation.y - 448.0).abs() < 1e-2);
    assert!((velocity.y - 480.0).abs() < 1e-2);
}
