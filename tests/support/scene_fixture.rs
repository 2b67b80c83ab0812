//! Shared fixture for behavioural tests that tick a headless scene.
//!
//! The fixture owns a Bevy `App` running `MinimalPlugins` and `ScenePlugin`
//! with a manual 100 ms time step, so every tick after the first advances the
//! simulation by exactly one tenth of a second. [`SceneFixture::from_app`]
//! wraps any other app, such as one with rendering enabled.
#![allow(dead_code, reason = "Each test crate uses a different subset of the fixture.")]

use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rspec::report::Report;
use rspec::{block::Suite, ConfigurationBuilder, Logger, Runner};
use zombie_conga::{Enemy, SceneSettings, ScenePlugin, SceneTouched, Zombie};

/// Simulated seconds per tick after the first.
pub const TICK_SECONDS: f32 = 0.1;

/// Wrapper that forwards `Send` and `Sync` because access is mutex-guarded.
#[derive(Debug)]
pub struct ThreadSafeApp(pub App);

impl Deref for ThreadSafeApp {
    type Target = App;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ThreadSafeApp {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// SAFETY: rspec fixtures must be `Clone + Send + Sync`, and `run_serial`
// executes the suite on one thread. Every access to the wrapped `App` goes
// through the mutex.
unsafe impl Send for ThreadSafeApp {}
unsafe impl Sync for ThreadSafeApp {}

#[derive(Debug)]
struct Inner {
    app: ThreadSafeApp,
    ticks: usize,
}

/// Headless scene shared between rspec closures.
///
/// Clones share the same `App`, so state built in `before_each` is visible
/// to every `then`.
#[derive(Debug, Clone)]
pub struct SceneFixture {
    inner: Arc<Mutex<Inner>>,
}

impl SceneFixture {
    /// Builds a scene from `settings` without ticking it.
    pub fn bootstrap(settings: SceneSettings) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
            TICK_SECONDS,
        )));
        app.add_plugins(ScenePlugin::new(settings));
        Self::from_app(app)
    }

    /// Wraps an app whose plugins are already added, finalizing them once.
    pub fn from_app(mut app: App) -> Self {
        app.finish();
        app.cleanup();
        Self {
            inner: Arc::new(Mutex::new(Inner {
                app: ThreadSafeApp(app),
                ticks: 0,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Ticks until `total` ticks have run; extra calls are no-ops.
    ///
    /// This keeps `before_each` hooks idempotent across several `then`s.
    pub fn run_until(&self, total: usize) {
        let mut inner = self.lock();
        while inner.ticks < total {
            inner.app.update();
            inner.ticks += 1;
        }
    }

    /// Reports a touch at `location`, as the presentation layer would.
    pub fn touch(&self, location: Vec2) {
        self.lock()
            .app
            .world_mut()
            .trigger(SceneTouched { location });
    }

    /// Zombie's transform and actor velocity.
    pub fn zombie(&self) -> (Transform, Vec2) {
        let mut inner = self.lock();
        let world = inner.app.world_mut();
        let mut query = world.query::<(&Zombie, &Transform)>();
        let (zombie, transform) = query
            .single(world)
            .unwrap_or_else(|e| panic!("expected one zombie: {e}"));
        (*transform, zombie.velocity)
    }

    /// Runs `inspect` against the app's world.
    pub fn with_world<R>(&self, inspect: impl FnOnce(&mut World) -> R) -> R {
        let mut inner = self.lock();
        inspect(inner.app.world_mut())
    }

    /// Enemy's translation.
    pub fn enemy_translation(&self) -> Vec3 {
        let mut inner = self.lock();
        let world = inner.app.world_mut();
        let mut query = world.query_filtered::<&Transform, With<Enemy>>();
        query
            .single(world)
            .map(|t| t.translation)
            .unwrap_or_else(|e| panic!("expected one enemy: {e}"))
    }
}

/// Runs an rspec suite serially so the shared `App` stays on one thread.
///
/// # Panics
///
/// Panics when any example in the suite fails, so the enclosing `#[test]`
/// fails with it.
pub fn run_serial<T>(suite: &Suite<T>)
where
    T: Clone + Send + Sync + std::fmt::Debug,
{
    let logger = Arc::new(Logger::new(std::io::stdout()));
    let config = ConfigurationBuilder::default()
        .parallel(false)
        .exit_on_failure(false)
        .build()
        .unwrap_or_else(|e| panic!("rspec configuration failed: {e}"));
    let report = Runner::new(config, vec![logger]).run(suite);
    assert!(
        report.is_success(),
        "rspec suite failed: {} of {} examples failed",
        report.get_failed(),
        report.get_passed() + report.get_failed()
    );
}
