//! Shared fixture infrastructure for floating item behavioural tests.
//!
//! The rspec suites tick a Bevy `App` and need to:
//! - safely share that `App` across rspec closures, and
//! - ensure `app.finish()` / `app.cleanup()` is run exactly once.

use std::sync::MutexGuard;

use bevy::prelude::*;

use crate::harness::{lock_app, SharedApp, ThreadSafeApp};

#[derive(Resource, Debug, Default)]
struct PluginsFinalized;

/// A shared base fixture that owns a `ThreadSafeApp` and provides consistent
/// ticking behaviour.
#[derive(Debug, Clone)]
pub struct AppFixtureBase {
    app: SharedApp,
}

impl AppFixtureBase {
    /// Wraps an already-configured Bevy `App` into a thread-safe fixture.
    #[must_use]
    pub fn new(app: App) -> Self {
        Self {
            app: std::sync::Arc::new(std::sync::Mutex::new(ThreadSafeApp(app))),
        }
    }

    /// Locks the underlying `App` for direct inspection or mutation.
    pub fn app_guard(&self) -> MutexGuard<'_, ThreadSafeApp> {
        lock_app(&self.app)
    }

    /// Advances the application by `frames` ticks.
    ///
    /// The first tick finalizes plugins and performs cleanup so schedules can
    /// run deterministically.
    pub fn tick_n(&self, frames: usize) {
        let mut app = self.app_guard();
        if app.world().get_resource::<PluginsFinalized>().is_none() {
            app.finish();
            app.cleanup();
            app.insert_resource(PluginsFinalized);
        }

        for _ in 0..frames {
            app.update();
        }
    }
}
