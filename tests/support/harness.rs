//! Serial rspec runner and a shareable headless app for behavioural suites.

use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bevy::prelude::*;
use drift::{FloatingItem, ItemMotion};
use rspec::report::Report;
use rspec::{block::Suite, ConfigurationBuilder, Logger, Runner};

/// Runs an rspec suite serially so scenarios observe each other's ticks in
/// declaration order.
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
    assert!(report.is_success(), "behavioural suite reported failures");
}

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

// SAFETY: rspec fixtures must implement `Clone + Send + Sync`, and the suites
// are executed serially. All access to the wrapped `App` is guarded by the
// mutex.
unsafe impl Send for ThreadSafeApp {}
unsafe impl Sync for ThreadSafeApp {}

/// Shared pointer type for the wrapped app.
pub type SharedApp = Arc<Mutex<ThreadSafeApp>>;

/// Locks the shared app, recovering from a poisoned mutex.
pub fn lock_app(app: &SharedApp) -> MutexGuard<'_, ThreadSafeApp> {
    app.lock().unwrap_or_else(PoisonError::into_inner)
}

/// What a behavioural check can see of one item.
#[derive(Debug, Clone)]
pub struct ItemView {
    /// Entity holding the item.
    pub entity: Entity,
    /// Current translation, bobbing included.
    pub translation: Vec3,
    /// Motion state, present once the item has been activated.
    pub motion: Option<ItemMotion>,
}

impl ThreadSafeApp {
    /// Every placed item, activated or not.
    pub fn items(&mut self) -> Vec<ItemView> {
        let world = self.0.world_mut();
        let mut query = world.query::<(Entity, &Transform, Option<&ItemMotion>, &FloatingItem)>();
        query
            .iter(world)
            .map(|(entity, transform, motion, _)| ItemView {
                entity,
                translation: transform.translation,
                motion: motion.copied(),
            })
            .collect()
    }
}
