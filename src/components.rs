//! ECS component types used by the scene.
//! Wraps the engine-agnostic actor and path types so systems can query them.
use bevy::prelude::*;

use crate::actor::Actor;
use crate::sequence::ScriptedPath;

/// The touch-steered player actor.
#[derive(Component, Debug, Clone, Deref, DerefMut)]
pub struct Zombie(pub Actor);

/// Marker for the scripted enemy.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Enemy;

/// Scripted path driving an enemy's translation.
#[derive(Component, Debug, Clone, Deref, DerefMut)]
pub struct EnemyPath(pub ScriptedPath);
