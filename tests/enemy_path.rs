//! Plays the enemy's scripted path end to end.
use approx::assert_relative_eq;
use glam::Vec2;
use rstest::rstest;
use zombie_conga::scene::{enemy_path, enemy_start};
use zombie_conga::{PlaybackState, SceneSettings, ENEMY_BOTTOM_MARKER};

#[rstest]
#[case::sixty_fps(1.0 / 60.0)]
#[case::ten_fps(0.1)]
#[case::uneven(0.37)]
fn full_playback_returns_home(#[case] dt: f32) {
    let settings = SceneSettings::default();
    let region = settings
        .playable_region()
        .unwrap_or_else(|e| panic!("region: {e}"));
    let mut path = enemy_path(&settings, &region);
    let start = enemy_start(&settings);

    let mut position = start;
    let mut markers = Vec::new();
    let mut lowest = f32::INFINITY;
    let mut elapsed = 0.0;
    while path.state() != PlaybackState::Done {
        let step = path.advance(dt);
        position += step.displacement;
        lowest = lowest.min(position.y);
        markers.extend(step.markers);
        elapsed += dt;
        assert!(elapsed < 10.0, "path never finished");
    }

    assert_relative_eq!(position.x, start.x, epsilon = 1e-2);
    assert_relative_eq!(position.y, start.y, epsilon = 1e-2);
    assert_eq!(markers, vec![ENEMY_BOTTOM_MARKER.to_owned(); 2]);
    let bottom = region.min().y + settings.enemy_size().y / 2.0;
    assert!(lowest >= bottom - 1e-2, "dipped below the region: {lowest}");
}

#[test]
fn turns_round_off_the_left_edge() {
    let settings = SceneSettings::default();
    let region = settings
        .playable_region()
        .unwrap_or_else(|e| panic!("region: {e}"));
    let mut path = enemy_path(&settings, &region);

    let forward = path.advance(2.25);
    let far_side = enemy_start(&settings) + forward.displacement;

    assert_eq!(path.state(), PlaybackState::Reversed);
    assert_relative_eq!(far_side.x, -settings.enemy_size().x / 2.0, epsilon = 1e-3);
    assert_relative_eq!(far_side.y, settings.scene_size().y / 2.0, epsilon = 1e-3);
    assert_eq!(forward.markers.len(), 1);
    assert_ne!(forward.displacement, Vec2::ZERO);
}

#[test]
fn pause_holds_position() {
    let settings = SceneSettings::default();
    let region = settings
        .playable_region()
        .unwrap_or_else(|e| panic!("region: {e}"));
    let mut path = enemy_path(&settings, &region);

    path.advance(settings.enemy_step_seconds);
    assert_eq!(path.state(), PlaybackState::Paused);
    let idle = path.advance(settings.enemy_pause_seconds / 2.0);
    assert_eq!(idle.displacement, Vec2::ZERO);
    assert!(idle.markers.is_empty());
}
