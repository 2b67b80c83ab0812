#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate providing the Zombie Conga scene logic.
//! Re-exports the motion, path and settings types for the binary and tests.
pub mod actor;
pub mod components;
pub mod constants;
pub mod input;
pub mod logging;
pub mod motion;
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub mod presentation;
pub mod region;
pub mod scene;
pub mod sequence;
pub mod settings;
pub mod stats;
pub mod vector_math;
pub use constants::*;

// Re-export commonly used items
pub use actor::Actor;
pub use components::{Enemy, EnemyPath, Zombie};
pub use input::{InputState, SceneTouched};
pub use logging::init as init_logging;
pub use motion::{FrameClock, FrameContext, MotionOutcome, MotionReport};
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub use presentation::PresentationPlugin;
pub use region::{BoundaryContact, PlayableRegion, RegionError};
pub use scene::{enemy_path, enemy_start, SceneSetupError, ScenePlugin, SceneUpdate};
pub use sequence::{MotionStep, PathAdvance, PlaybackState, ScriptedPath};
pub use settings::{SceneSettings, SettingsError};
pub use stats::SceneStatsPlugin;
pub use vector_math::{direction_to, heading, shortest_angle_between};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use zombie_conga::prelude::*;
    //! ```

    pub use crate::motion;
    pub use crate::Actor;
    pub use crate::FrameContext;
    pub use crate::PlayableRegion;
    pub use crate::SceneSettings;
    pub use crate::ScenePlugin;
    pub use crate::ScriptedPath;
    pub use glam::Vec2;
}
