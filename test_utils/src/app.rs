//! Headless Bevy app with a manual clock.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use drift::{FloatingItemPlugin, PluginSettings};

/// Builds an app that advances time by `delta_seconds` per update.
///
/// The first update after construction reports a zero delta.
#[must_use]
pub fn headless_app(settings: PluginSettings, delta_seconds: f32) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
        delta_seconds,
    )));
    app.add_plugins(FloatingItemPlugin::new(settings));
    app.finish();
    app.cleanup();
    app
}

/// Seeded plugin settings with the overlay switched on or off.
#[must_use]
pub fn seeded_settings(seed: u64, debug_overlay: bool) -> PluginSettings {
    PluginSettings {
        seed: Some(seed),
        debug_overlay,
        ..PluginSettings::default()
    }
}
