//! Zombie Conga: a zombie that chases your finger around the scene.
use std::path::PathBuf;

use anyhow::{bail, Context};
use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;
use log::info;
use zombie_conga::{
    init_logging, PresentationPlugin, SceneSettings, ScenePlugin, SceneStatsPlugin,
};

/// A zombie that follows your finger around the scene
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON file overriding the default scene settings
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Do not outline the playable area
    #[arg(long)]
    no_debug_draw: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut settings = match &args.config {
        Some(path) => SceneSettings::load(path)
            .with_context(|| format!("loading scene settings from {}", path.display()))?,
        None => SceneSettings::default(),
    };
    if args.no_debug_draw {
        settings.debug_draw = false;
    }
    let region = settings.validate()?;
    info!(
        "Starting {}x{} scene, playable region {:?}..{:?}",
        settings.scene_width,
        settings.scene_height,
        region.min(),
        region.max()
    );

    let show_stats = settings.debug_draw;
    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .build()
            .disable::<LogPlugin>()
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Zombie Conga".into(),
                    ..default()
                }),
                ..default()
            }),
    )
    .add_plugins((ScenePlugin::new(settings), PresentationPlugin));
    if show_stats {
        app.add_plugins(SceneStatsPlugin);
    }

    match app.run() {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => bail!("scene exited with code {code}"),
    }
}
