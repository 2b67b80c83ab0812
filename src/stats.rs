//! Frame-rate and entity-count reporting for debug runs.
//!
//! [`SceneStatsPlugin`] installs Bevy's frame-time and entity-count
//! diagnostics and logs a one-line summary at `info` once per interval.
use std::time::Duration;

use bevy::diagnostic::{
    Diagnostic, DiagnosticsStore, EntityCountDiagnosticsPlugin, FrameTimeDiagnosticsPlugin,
};
use bevy::prelude::*;
use log::info;

/// Seconds between two stats lines.
const STATS_INTERVAL: Duration = Duration::from_secs(1);

/// Logs frames per second and the live entity count.
#[derive(Debug, Default)]
pub struct SceneStatsPlugin;

impl Plugin for SceneStatsPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<FrameTimeDiagnosticsPlugin>() {
            app.add_plugins(FrameTimeDiagnosticsPlugin::default());
        }
        if !app.is_plugin_added::<EntityCountDiagnosticsPlugin>() {
            app.add_plugins(EntityCountDiagnosticsPlugin::default());
        }
        app.insert_resource(StatsTimer(Timer::new(
            STATS_INTERVAL,
            TimerMode::Repeating,
        )))
        .add_systems(Update, log_scene_stats);
    }
}

#[derive(Resource, Debug)]
struct StatsTimer(Timer);

/// Formats a stats line, or `None` when neither measurement is ready.
///
/// # Examples
///
/// ```
/// use zombie_conga::stats::stats_line;
/// assert_eq!(stats_line(Some(59.6), Some(3.0)).as_deref(), Some("60 fps, 3 entities"));
/// assert_eq!(stats_line(None, None), None);
/// ```
#[must_use]
pub fn stats_line(fps: Option<f64>, entities: Option<f64>) -> Option<String> {
    let show = |value: Option<f64>| value.map_or_else(|| "?".to_owned(), |v| format!("{v:.0}"));
    (fps.is_some() || entities.is_some())
        .then(|| format!("{} fps, {} entities", show(fps), show(entities)))
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
fn log_scene_stats(
    time: Res<Time>,
    mut timer: ResMut<StatsTimer>,
    diagnostics: Res<DiagnosticsStore>,
) {
    if !timer.0.tick(time.delta()).just_finished() {
        return;
    }
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(Diagnostic::smoothed);
    let entities = diagnostics
        .get(&EntityCountDiagnosticsPlugin::ENTITY_COUNT)
        .and_then(Diagnostic::value);
    if let Some(line) = stats_line(fps, entities) {
        info!("{line}");
    }
}
